//! Root demo component: a sample conversation of transfer rows.

use std::rc::Rc;

use dioxus::prelude::*;

use sylk_messaging::{DeliveryState, TransferPayload};
use sylk_ui::{FileTransferMessage, ImagePreviewOverlay, Platform, PreviewImage};

use crate::demo::{self, DemoData};
use crate::state::AppContext;

/// Root application component.
#[component]
pub fn App() -> Element {
    let demo: Rc<DemoData> = use_hook(|| Rc::new(demo::build_demo()));

    let mut rows = {
        let initial = demo.rows.clone();
        use_signal(move || initial)
    };
    let mut preview_open = use_signal(|| false);
    let mut preview_image = use_signal(|| None::<PreviewImage>);

    let ctx = use_context_provider({
        let demo = demo.clone();
        move || AppContext {
            account: Signal::new(demo.account.clone()),
            contacts: Signal::new(demo.contacts.clone()),
            transfer: Signal::new(demo.transfer.clone()),
            preview_open,
            preview_image,
        }
    });
    // The desktop shell has no browser tabs to open into.
    use_context_provider(|| Platform { can_open_tabs: false });

    // Walk the outgoing report through the delivery pipeline so the
    // live receipt icons are visible without a peer.
    {
        let trackers = demo.trackers.clone();
        use_effect(move || {
            let trackers = trackers.clone();
            spawn(async move {
                let steps = [
                    (2, DeliveryState::Accepted),
                    (2, DeliveryState::Delivered),
                    (4, DeliveryState::Displayed),
                ];
                for (secs, state) in steps {
                    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
                    if let Some(tracker) = trackers.get("msg-report") {
                        tracker.set(state);
                    }
                }
            });
        });
    }

    let account = ctx.account.read().clone();
    let contacts = ctx.contacts.read().clone();
    let transfer = ctx.transfer.read().clone();
    let current_rows = rows.read().clone();

    rsx! {
        div { class: "chat-window",
            div { class: "chat-title",
                span { class: "chat-title-name", "Sylk" }
                span { class: "chat-title-account", "{account}" }
            }

            div { class: "chat-messages",
                for row in current_rows.iter() {
                    {
                        let id_for_remove = row.message.id.clone();
                        let id_for_receipt = row.message.id.clone();
                        let content = row.message.content.clone();
                        rsx! {
                            FileTransferMessage {
                                key: "{row.message.id}",
                                message: row.message.clone(),
                                state_feed: row.feed.clone(),
                                cont: row.cont,
                                imdn_states: true,
                                account: account.clone(),
                                contacts: contacts.clone(),
                                transfer: transfer.clone(),
                                on_scroll: move |_| {
                                    let js = r#"document.getElementById('chat-scroll-anchor')?.scrollIntoView({behavior:'smooth'})"#;
                                    document::eval(js);
                                },
                                on_displayed: move |_| {
                                    tracing::debug!("message {id_for_receipt} visible; read receipt queued");
                                },
                                on_remove: move |_| {
                                    rows.write().retain(|r| r.message.id != id_for_remove);
                                },
                                on_enlarge: move |data_url: String| {
                                    let filename = TransferPayload::from_json(&content)
                                        .map(|p| p.display_name())
                                        .unwrap_or_default();
                                    preview_image.set(Some(PreviewImage { data_url, filename }));
                                    preview_open.set(true);
                                },
                            }
                        }
                    }
                }
                div { id: "chat-scroll-anchor" }
            }

            ImagePreviewOverlay {
                is_open: ctx.preview_open,
                image: ctx.preview_image,
            }
        }
    }
}
