//! Chat message components.
//!
//! Provides the file-transfer message row with delivery tracking,
//! collapsible body, and right-click actions.

pub mod context_menu;
pub mod transfer_message;
pub mod view_state;

pub use context_menu::{menu_actions, ContextMenu, MenuAction, Platform};
pub use transfer_message::FileTransferMessage;
pub use view_state::{
    file_icon, header_label, row_theme, status_icon, visibility_fired, MessageStatus,
    ResolvedContent, StatusIcon,
};
