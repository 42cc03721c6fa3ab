//! Enlarged image overlay for transfer previews.

use dioxus::prelude::*;

/// Image shown in the overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewImage {
    pub data_url: String,
    pub filename: String,
}

/// Full-window overlay for an enlarged image preview.
#[component]
pub fn ImagePreviewOverlay(
    is_open: Signal<bool>,
    image: Signal<Option<PreviewImage>>,
) -> Element {
    if !is_open() {
        return rsx! {};
    }
    let Some(preview) = image() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "image-preview-overlay",
            onclick: move |_| is_open.set(false),
            div {
                class: "image-preview-dialog",
                onclick: move |e| e.stop_propagation(),

                div { class: "image-preview-header",
                    span { class: "image-preview-filename", "{preview.filename}" }
                    button {
                        class: "image-preview-close",
                        onclick: move |_| is_open.set(false),
                        "\u{00d7}"
                    }
                }
                img {
                    class: "image-preview-img",
                    src: "{preview.data_url}",
                    alt: "{preview.filename}",
                }
            }
        }
    }
}
