//! File-transfer message rows.
//!
//! Renders a chat row for an `application/sylk-file-transfer` message:
//! sender identity, timestamp, lock/delivery icons, and a collapsible
//! body holding either an image preview or a generic file block. The
//! row keeps itself in sync with delivery-state changes and reports a
//! read receipt when it first scrolls into view.

use std::time::Duration;

use dioxus::prelude::*;

use sylk_messaging::{
    ChatMessage, ContactCache, DeliveryState, MessageKind, StateFeed, TransferHandle,
    TransferPayload,
};

use super::context_menu::{
    copy_link_to_clipboard, menu_actions, ContextMenu, MenuAction, Platform,
};
use super::view_state::{
    header_label, row_theme, status_icon, visibility_fired, MessageStatus, ResolvedContent,
};
use crate::identity::{avatar_color_class, avatar_letter, resolve_display_name};

/// Chat row for a file-transfer message.
///
/// `state_feed` carries live delivery updates (omit for
/// terminal or local-only messages), `cont` renders the row as a
/// continuation without a sender header, `focus` smooth-scrolls the
/// row into view, `imdn_states` enables read-receipt tracking.
/// `on_scroll` fires once the body content is resolved, `on_displayed`
/// when the row first becomes visible, `on_remove` from the delete
/// menu entry, and `on_enlarge` with the image data URL of a clicked
/// preview.
#[component]
pub fn FileTransferMessage(
    message: ChatMessage,
    #[props(default)] state_feed: Option<StateFeed>,
    #[props(default = false)] cont: bool,
    #[props(default = false)] focus: bool,
    #[props(default = true)] enable_menu: bool,
    #[props(default = false)] imdn_states: bool,
    account: String,
    #[props(default)] contacts: ContactCache,
    transfer: TransferHandle,
    #[props(default)] on_scroll: EventHandler<()>,
    #[props(default)] on_displayed: EventHandler<()>,
    #[props(default)] on_remove: EventHandler<()>,
    #[props(default)] on_enlarge: EventHandler<String>,
) -> Element {
    // Parsed once for the view's lifetime. A broken payload pins the
    // row to the error state no matter what the feed reports later.
    let parsed: Option<TransferPayload> = use_hook({
        let content = message.content.clone();
        let id = message.id.clone();
        move || match TransferPayload::from_json(&content) {
            Ok(payload) => Some(payload),
            Err(err) => {
                tracing::warn!("message {id}: {err}");
                None
            }
        }
    });

    let initial_status = if parsed.is_some() {
        MessageStatus::from(message.state)
    } else {
        MessageStatus::Error
    };
    let mut status = use_signal(move || initial_status);
    let mut content = use_signal(|| ResolvedContent::Pending);
    let mut collapsed = use_signal(|| false);
    let mut menu_pos = use_signal(|| None::<(f64, f64)>);
    let mut copy_failed = use_signal(|| false);
    let mut was_visible = use_signal(|| false);

    let platform = try_consume_context::<Platform>().unwrap_or_default();

    // Resolve the body: thumbnail round-trip for images, immediate
    // file block otherwise. The task dies with the component, so a
    // late thumbnail can never touch an unmounted row.
    {
        let parsed = parsed.clone();
        let transfer = transfer.clone();
        let account = account.clone();
        let message_id = message.id.clone();
        let is_transfer = message.is_file_transfer();
        use_effect(move || {
            if !is_transfer {
                return;
            }
            let parsed = parsed.clone();
            let transfer = transfer.clone();
            let account = account.clone();
            let message_id = message_id.clone();
            spawn(async move {
                let Some(payload) = parsed else {
                    content.set(ResolvedContent::ParseFailed);
                    on_scroll.call(());
                    return;
                };
                if payload.is_image() {
                    match transfer
                        .api()
                        .generate_thumbnail(&account, &message_id, &payload)
                        .await
                    {
                        Ok(thumb) => content.set(ResolvedContent::image(thumb)),
                        Err(err) => {
                            tracing::debug!("thumbnail for {message_id} failed: {err}");
                            content.set(ResolvedContent::file_block(&payload));
                        }
                    }
                } else {
                    content.set(ResolvedContent::file_block(&payload));
                }
                on_scroll.call(());
            });
        });
    }

    // Follow delivery-state changes while the message can still move.
    // Dropping the task at unmount is the unsubscribe.
    {
        let feed = state_feed.clone();
        let initial = message.state;
        let parse_ok = parsed.is_some();
        use_effect(move || {
            let Some(feed) = feed.clone() else { return };
            if !parse_ok {
                return;
            }
            let listening =
                initial == DeliveryState::Pending || (imdn_states && !initial.is_terminal());
            if !listening {
                return;
            }
            spawn(async move {
                let mut rx = feed.subscribe();
                while rx.changed().await.is_ok() {
                    let state = *rx.borrow_and_update();
                    status.set(MessageStatus::from(state));
                }
            });
        });
    }

    // Jump-to-message support.
    {
        let message_id = message.id.clone();
        use_effect(move || {
            if focus {
                let js = format!(
                    "document.getElementById('msg-{}')?.scrollIntoView({{behavior:'smooth',block:'center'}})",
                    message_id
                );
                document::eval(&js);
            }
        });
    }

    let is_status_row = message.kind == MessageKind::Status;
    let time = message.timestamp_display();
    let current_status = status();
    let theme = row_theme(current_status, cont, message.kind);
    let icon = status_icon(current_status);
    let body = content.read().clone();

    let actions = parsed
        .as_ref()
        .map(|p| menu_actions(p, message.is_secure, platform))
        .unwrap_or_default();
    let menu_enabled = enable_menu && !is_status_row && !actions.is_empty();

    let header_text: Option<String> = parsed.as_ref().and_then(|p| match &body {
        ResolvedContent::Image { filename, .. } => Some(filename.clone()),
        ResolvedContent::Pending if p.is_image() => None,
        _ => Some(header_label(p, collapsed())),
    });

    let open_menu = move |evt: Event<MouseData>| {
        evt.prevent_default();
        if !menu_enabled {
            return;
        }
        let coords = evt.data().client_coordinates();
        menu_pos.set(Some((coords.x, coords.y)));
    };

    let handle_menu_action = {
        let transfer = transfer.clone();
        let account = account.clone();
        let parsed = parsed.clone();
        move |action: MenuAction| {
            menu_pos.set(None);
            let Some(payload) = parsed.clone() else { return };
            let transfer = transfer.clone();
            let account = account.clone();
            match action {
                MenuAction::OpenInNewTab => {
                    spawn(async move {
                        if let Err(err) = transfer.api().open_in_new_tab(&account, &payload).await {
                            tracing::warn!("open in new tab failed: {err}");
                        }
                    });
                }
                MenuAction::DownloadImage | MenuAction::DownloadFile => {
                    spawn(async move {
                        if let Err(err) = transfer.api().download(&account, &payload).await {
                            tracing::warn!("download of {} failed: {err}", payload.filename);
                        }
                    });
                }
                MenuAction::CopyLink => {
                    spawn(async move {
                        let copied = match payload.url.as_deref() {
                            Some(url) => copy_link_to_clipboard(url).await,
                            None => {
                                tracing::warn!("transfer payload has no url to copy");
                                false
                            }
                        };
                        if !copied {
                            copy_failed.set(true);
                            tokio::time::sleep(Duration::from_secs(4)).await;
                            copy_failed.set(false);
                        }
                    });
                }
                MenuAction::Delete => on_remove.call(()),
            }
        }
    };

    let on_visibility = move |evt: Event<VisibleData>| {
        let is_visible = evt.data().is_intersecting().unwrap_or(false);
        if visibility_fired(was_visible(), is_visible) {
            on_displayed.call(());
        }
        was_visible.set(is_visible);
    };

    let menu_el = menu_pos().filter(|_| menu_enabled).map(|pos| {
        rsx! {
            ContextMenu {
                position: pos,
                actions: actions.clone(),
                on_select: handle_menu_action,
                on_close: move |_| menu_pos.set(None),
            }
        }
    });

    let header_row = (!current_status.is_error()).then(|| {
        rsx! {
            div { class: "transfer-header",
                if let Some(text) = header_text {
                    span { class: "transfer-header-label", "{text}" }
                }
                button {
                    class: "transfer-collapse-btn",
                    onclick: move |_| {
                        let now = collapsed();
                        collapsed.set(!now);
                    },
                    if collapsed() { "\u{25b8}" } else { "\u{25be}" }
                }
            }
        }
    });

    let start_download = {
        let transfer = transfer.clone();
        let account = account.clone();
        let parsed = parsed.clone();
        move |_| {
            let Some(payload) = parsed.clone() else { return };
            let transfer = transfer.clone();
            let account = account.clone();
            spawn(async move {
                if let Err(err) = transfer.api().download(&account, &payload).await {
                    tracing::warn!("download of {} failed: {err}", payload.filename);
                }
            });
        }
    };

    let body_el = match body {
        ResolvedContent::Pending => rsx! {},
        ResolvedContent::ParseFailed => rsx! {
            div { class: "transfer-parse-error", "Couldn't parse filetransfer message" }
        },
        ResolvedContent::Image { data_url, filename, width, height } => {
            let dims = match (width, height) {
                (Some(w), Some(h)) => format!("width: {w}px; height: {h}px;"),
                (Some(w), None) => format!("width: {w}px;"),
                (None, Some(h)) => format!("height: {h}px;"),
                (None, None) => String::new(),
            };
            let url_for_click = data_url.clone();
            rsx! {
                div { class: "transfer-image-frame",
                    img {
                        class: "transfer-inline-image",
                        src: "{data_url}",
                        alt: "{filename}",
                        style: "{dims}",
                        onclick: move |_| on_enlarge.call(url_for_click.clone()),
                    }
                }
            }
        }
        ResolvedContent::FileBlock { name, size_label, type_label, icon } => rsx! {
            div {
                class: "transfer-file-block",
                onclick: start_download,
                span { class: "transfer-file-icon", "{icon}" }
                div { class: "transfer-file-info",
                    div { class: "transfer-file-name", "{name}" }
                    div { class: "transfer-file-meta", "{size_label} {type_label}" }
                }
            }
        },
    };

    let copy_notice = copy_failed().then(|| {
        rsx! {
            div { class: "copy-notice", "Couldn't copy link" }
        }
    });

    // Continuation and status rows: compact layout, no sender header.
    if cont || is_status_row {
        return rsx! {
            div {
                id: "msg-{message.id}",
                onvisible: on_visibility,
                div {
                    class: "{theme}",
                    oncontextmenu: open_menu,
                    {menu_el}
                    if !is_status_row {
                        span { class: "timestamp-continued", "{time}" }
                    }
                    div { class: "transfer-body",
                        {header_row}
                        if !collapsed() {
                            {body_el}
                        }
                        {copy_notice}
                    }
                    span { class: "transfer-trailing",
                        if message.is_secure {
                            span { class: "lock-icon", title: "Encrypted", "\u{1f512}" }
                        }
                        if let Some(icon) = icon {
                            if let Some(title) = icon.title {
                                span { class: "{icon.css_class}", title: "{title}", "{icon.glyph}" }
                            } else {
                                span { class: "{icon.css_class}", "{icon.glyph}" }
                            }
                        }
                        if is_status_row {
                            pre { class: "status-time", "{time}" }
                        }
                    }
                }
            }
        };
    }

    // Full row with avatar and sender heading.
    let sender_name = resolve_display_name(
        &contacts,
        &message.sender.uri,
        message.sender.display_name.as_deref(),
    );
    let letter = avatar_letter(&sender_name);
    let color_class = avatar_color_class(&message.sender.uri);

    rsx! {
        div {
            id: "msg-{message.id}",
            onvisible: on_visibility,
            div {
                class: "{theme}",
                oncontextmenu: open_menu,
                {menu_el}
                div { class: "transfer-avatar {color_class}", "{letter}" }
                div { class: "transfer-main",
                    div { class: "transfer-heading",
                        span { class: "transfer-sender", "{sender_name}" }
                        span { class: "transfer-time", "{time}" }
                        span { class: "transfer-trailing",
                            if message.is_secure {
                                span { class: "lock-icon", title: "Encrypted", "\u{1f512}" }
                            }
                            if let Some(icon) = icon {
                                if let Some(title) = icon.title {
                                    span { class: "{icon.css_class}", title: "{title}", "{icon.glyph}" }
                                } else {
                                    span { class: "{icon.css_class}", "{icon.glyph}" }
                                }
                            }
                        }
                    }
                    {header_row}
                    if !collapsed() {
                        div { class: "transfer-body-clip",
                            {body_el}
                        }
                    }
                    {copy_notice}
                }
            }
        }
    }
}
