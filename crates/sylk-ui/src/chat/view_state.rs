//! View-layer status, icon mapping, and body content states for
//! transfer rows.

use sylk_messaging::{mime_label, DeliveryState, MessageKind, Thumbnail, TransferPayload};

/// Local display status of a row.
///
/// Either derived from the message's delivery state, or the locally
/// synthesized error a broken payload forces. The error state is
/// permanent for the view's lifetime and wins over any later delivery
/// event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStatus {
    Delivery(DeliveryState),
    Error,
}

impl From<DeliveryState> for MessageStatus {
    fn from(state: DeliveryState) -> Self {
        MessageStatus::Delivery(state)
    }
}

impl MessageStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, MessageStatus::Error)
    }
}

/// Trailing status icon of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusIcon {
    pub glyph: &'static str,
    pub css_class: &'static str,
    /// Hover tooltip; only error icons carry one.
    pub title: Option<&'static str>,
}

/// Icon for a display status, per the delivery-state mapping.
/// Unmapped states render nothing.
pub fn status_icon(status: MessageStatus) -> Option<StatusIcon> {
    match status {
        MessageStatus::Delivery(DeliveryState::Accepted) => Some(StatusIcon {
            glyph: "\u{2713}",
            css_class: "status-check status-neutral",
            title: None,
        }),
        MessageStatus::Delivery(DeliveryState::Delivered) => Some(StatusIcon {
            glyph: "\u{2713}",
            css_class: "status-check status-done",
            title: None,
        }),
        MessageStatus::Delivery(DeliveryState::Displayed) => Some(StatusIcon {
            glyph: "\u{2713}\u{2713}",
            css_class: "status-check status-done",
            title: None,
        }),
        MessageStatus::Delivery(DeliveryState::Failed) => Some(StatusIcon {
            glyph: "\u{26a0}",
            css_class: "status-error",
            title: Some("Not Delivered"),
        }),
        MessageStatus::Error => Some(StatusIcon {
            glyph: "\u{26a0}",
            css_class: "status-error",
            title: Some("Display Error"),
        }),
        MessageStatus::Delivery(_) => None,
    }
}

/// CSS classes for the row wrapper.
pub fn row_theme(status: MessageStatus, cont: bool, kind: MessageKind) -> String {
    let mut classes = vec!["transfer-row"];
    if status == MessageStatus::Delivery(DeliveryState::Pending) {
        classes.push("pending");
    }
    if matches!(
        status,
        MessageStatus::Error | MessageStatus::Delivery(DeliveryState::Failed)
    ) {
        classes.push("text-danger");
    }
    if cont && kind != MessageKind::Status {
        classes.push("continued");
    }
    if kind == MessageKind::Status {
        classes.push("status");
    }
    classes.join(" ")
}

/// Body content of a transfer row as resolution progresses.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedContent {
    /// Nothing resolved yet (thumbnail round-trip in flight).
    Pending,
    Image {
        data_url: String,
        /// Display filename, underscores already read as spaces.
        filename: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    FileBlock {
        name: String,
        size_label: String,
        type_label: String,
        icon: &'static str,
    },
    ParseFailed,
}

impl ResolvedContent {
    pub fn image(thumb: Thumbnail) -> Self {
        ResolvedContent::Image {
            data_url: thumb.data_url,
            filename: thumb.filename.replace('_', " "),
            width: thumb.width,
            height: thumb.height,
        }
    }

    pub fn file_block(payload: &TransferPayload) -> Self {
        ResolvedContent::FileBlock {
            name: payload.display_name(),
            size_label: payload.formatted_size(),
            type_label: payload
                .filetype
                .as_deref()
                .map(mime_label)
                .unwrap_or_else(|| "Unknown".to_string()),
            icon: file_icon(payload.filetype.as_deref()),
        }
    }
}

/// Header line above the body: resolved type name when expanded,
/// filename when collapsed.
pub fn header_label(payload: &TransferPayload, collapsed: bool) -> String {
    if collapsed {
        payload.display_name()
    } else {
        payload
            .filetype
            .as_deref()
            .map(mime_label)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Emoji icon for the generic file block.
pub fn file_icon(filetype: Option<&str>) -> &'static str {
    match filetype {
        Some(t) if t.starts_with("image/") => "\u{1f5bc}\u{fe0f}",
        Some(t) if t.starts_with("video/") => "\u{1f3ac}",
        Some(t) if t.starts_with("audio/") => "\u{1f3b5}",
        Some("application/pdf") => "\u{1f4d5}",
        Some("application/zip" | "application/gzip" | "application/x-tar") => "\u{1f4e6}",
        _ => "\u{1f4c4}",
    }
}

/// Edge detector for the read-receipt callback: fires only on the
/// transition into view, never while the row stays visible.
pub fn visibility_fired(was_visible: bool, is_visible: bool) -> bool {
    is_visible && !was_visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_icon_mapping() {
        let accepted = status_icon(DeliveryState::Accepted.into()).unwrap();
        assert_eq!(accepted.glyph, "\u{2713}");
        assert!(accepted.css_class.contains("status-neutral"));

        let delivered = status_icon(DeliveryState::Delivered.into()).unwrap();
        assert!(delivered.css_class.contains("status-done"));

        let displayed = status_icon(DeliveryState::Displayed.into()).unwrap();
        assert_eq!(displayed.glyph, "\u{2713}\u{2713}");

        let failed = status_icon(DeliveryState::Failed.into()).unwrap();
        assert_eq!(failed.title, Some("Not Delivered"));

        let error = status_icon(MessageStatus::Error).unwrap();
        assert_eq!(error.title, Some("Display Error"));
    }

    #[test]
    fn test_unmapped_states_have_no_icon() {
        assert_eq!(status_icon(DeliveryState::Pending.into()), None);
        assert_eq!(status_icon(DeliveryState::Received.into()), None);
    }

    #[test]
    fn test_row_theme_classes() {
        let theme = row_theme(DeliveryState::Pending.into(), false, MessageKind::Normal);
        assert!(theme.contains("pending"));

        let theme = row_theme(MessageStatus::Error, true, MessageKind::Normal);
        assert!(theme.contains("text-danger"));
        assert!(theme.contains("continued"));

        let theme = row_theme(DeliveryState::Delivered.into(), true, MessageKind::Status);
        assert!(theme.contains("status"));
        assert!(!theme.contains("continued"));
    }

    #[test]
    fn test_file_block_labels() {
        let payload = TransferPayload {
            filename: "notes_2024.txt".to_string(),
            filesize: 1024,
            filetype: Some("text/plain".to_string()),
            url: None,
        };
        let block = ResolvedContent::file_block(&payload);
        match block {
            ResolvedContent::FileBlock { name, size_label, type_label, .. } => {
                assert_eq!(name, "notes 2024.txt");
                assert_eq!(size_label, "1.0 kB");
                assert_eq!(type_label, "Plain Text Document");
            }
            other => panic!("expected file block, got {other:?}"),
        }
    }

    #[test]
    fn test_header_label_follows_collapse() {
        let payload = TransferPayload {
            filename: "my_file.txt.asc".to_string(),
            filesize: 500,
            filetype: Some("application/x-sylk-custom".to_string()),
            url: None,
        };
        assert_eq!(header_label(&payload, true), "my file.txt");
        // Unknown type falls back to the raw string.
        assert_eq!(header_label(&payload, false), "application/x-sylk-custom");
    }

    #[test]
    fn test_image_content_cleans_filename() {
        let thumb = Thumbnail {
            data_url: "data:image/png;base64,AA==".to_string(),
            filename: "holiday_photo.png".to_string(),
            width: Some(320),
            height: None,
        };
        match ResolvedContent::image(thumb) {
            ResolvedContent::Image { filename, width, .. } => {
                assert_eq!(filename, "holiday photo.png");
                assert_eq!(width, Some(320));
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_visibility_edge() {
        assert!(visibility_fired(false, true));
        assert!(!visibility_fired(true, true));
        assert!(!visibility_fired(true, false));
        assert!(!visibility_fired(false, false));
    }
}
