//! Shared UI components for Sylk chat applications.
//!
//! Provides the file-transfer message row, context menu, image preview
//! overlay, and identity display helpers.

pub mod chat;
pub mod identity;
pub mod preview;

pub use chat::{
    file_icon, header_label, menu_actions, row_theme, status_icon, visibility_fired,
    ContextMenu, FileTransferMessage, MenuAction, MessageStatus, Platform, ResolvedContent,
    StatusIcon,
};
pub use identity::{avatar_color_class, avatar_letter, resolve_display_name};
pub use preview::{ImagePreviewOverlay, PreviewImage};

/// Shared CSS for the chat components.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
