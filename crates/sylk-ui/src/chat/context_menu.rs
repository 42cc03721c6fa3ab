//! Right-click context menu for transfer rows.

use dioxus::prelude::*;

use sylk_messaging::TransferPayload;

/// Capabilities injected by the host app.
///
/// The desktop shell has no browser tabs, so it launches without the
/// open-in-new-tab entry; a web host enables it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Platform {
    pub can_open_tabs: bool,
}

impl Default for Platform {
    fn default() -> Self {
        Self { can_open_tabs: true }
    }
}

/// Actions offered on a transfer row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    OpenInNewTab,
    DownloadImage,
    DownloadFile,
    CopyLink,
    Delete,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::OpenInNewTab => "Open in new tab",
            MenuAction::DownloadImage => "Download Image",
            MenuAction::DownloadFile => "Download File",
            MenuAction::CopyLink => "Copy link to file",
            MenuAction::Delete => "Delete file",
        }
    }

    /// Destructive entries render red behind a divider.
    pub fn is_destructive(&self) -> bool {
        matches!(self, MenuAction::Delete)
    }

    pub fn css_class(&self) -> &'static str {
        if self.is_destructive() {
            "context-menu-item context-menu-item-danger"
        } else {
            "context-menu-item"
        }
    }
}

/// Menu entries for a payload, in display order.
///
/// Empty when the payload carries no filetype; the menu is suppressed
/// entirely. Secure transfers never offer the link copy.
pub fn menu_actions(
    payload: &TransferPayload,
    is_secure: bool,
    platform: Platform,
) -> Vec<MenuAction> {
    if payload.filetype.is_none() {
        return Vec::new();
    }
    let mut actions = Vec::new();
    if payload.is_image() {
        if platform.can_open_tabs {
            actions.push(MenuAction::OpenInNewTab);
        }
        actions.push(MenuAction::DownloadImage);
    } else {
        actions.push(MenuAction::DownloadFile);
    }
    if !is_secure {
        actions.push(MenuAction::CopyLink);
    }
    actions.push(MenuAction::Delete);
    actions
}

/// Cursor-anchored context menu overlay. Click-away closes.
#[component]
pub fn ContextMenu(
    position: (f64, f64),
    actions: Vec<MenuAction>,
    on_select: EventHandler<MenuAction>,
    on_close: EventHandler<()>,
) -> Element {
    let (x, y) = position;
    rsx! {
        div {
            class: "context-menu-overlay",
            onclick: move |_| on_close.call(()),
            oncontextmenu: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            div {
                class: "context-menu",
                style: "left: {x}px; top: {y}px;",
                onclick: move |evt| evt.stop_propagation(),
                for action in actions.iter() {
                    {
                        let action = *action;
                        rsx! {
                            if action.is_destructive() {
                                div { class: "context-menu-divider" }
                            }
                            div {
                                class: "{action.css_class()}",
                                onclick: move |_| on_select.call(action),
                                "{action.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Write a link to the system clipboard from webview JS.
///
/// Tries the async clipboard API first, then the legacy execCommand
/// path. Resolves to false when both fail; the caller surfaces the
/// notice.
pub async fn copy_link_to_clipboard(url: &str) -> bool {
    let quoted = serde_json::to_string(url).unwrap_or_else(|_| String::from("\"\""));
    let script = format!(
        r#"const url = {quoted};
if (navigator.clipboard) {{
    try {{ await navigator.clipboard.writeText(url); return true; }} catch (_e) {{}}
}}
try {{
    const area = document.createElement('textarea');
    area.value = url;
    document.body.appendChild(area);
    area.select();
    const ok = document.execCommand('copy');
    area.remove();
    return ok;
}} catch (_e) {{
    return false;
}}"#
    );
    matches!(document::eval(&script).await, Ok(value) if value.as_bool() == Some(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(filetype: Option<&str>) -> TransferPayload {
        TransferPayload {
            filename: "file.bin".to_string(),
            filesize: 100,
            filetype: filetype.map(str::to_string),
            url: Some("https://files.example.com/file.bin".to_string()),
        }
    }

    #[test]
    fn test_image_menu() {
        let actions = menu_actions(&payload(Some("image/png")), false, Platform::default());
        assert_eq!(
            actions,
            vec![
                MenuAction::OpenInNewTab,
                MenuAction::DownloadImage,
                MenuAction::CopyLink,
                MenuAction::Delete,
            ]
        );
    }

    #[test]
    fn test_image_menu_without_tabs() {
        let platform = Platform { can_open_tabs: false };
        let actions = menu_actions(&payload(Some("image/png")), false, platform);
        assert!(!actions.contains(&MenuAction::OpenInNewTab));
        assert!(actions.contains(&MenuAction::DownloadImage));
    }

    #[test]
    fn test_file_menu() {
        let actions = menu_actions(&payload(Some("application/pdf")), false, Platform::default());
        assert_eq!(
            actions,
            vec![MenuAction::DownloadFile, MenuAction::CopyLink, MenuAction::Delete]
        );
    }

    #[test]
    fn test_secure_transfer_hides_link_copy() {
        let actions = menu_actions(&payload(Some("application/pdf")), true, Platform::default());
        assert!(!actions.contains(&MenuAction::CopyLink));
        assert!(actions.contains(&MenuAction::Delete));
    }

    #[test]
    fn test_no_filetype_suppresses_menu() {
        assert!(menu_actions(&payload(None), false, Platform::default()).is_empty());
    }

    #[test]
    fn test_delete_is_destructive() {
        assert!(MenuAction::Delete.is_destructive());
        assert!(MenuAction::Delete.css_class().contains("danger"));
        assert!(!MenuAction::CopyLink.is_destructive());
    }
}
