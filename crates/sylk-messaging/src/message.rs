//! Chat message records as handed to the UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::delivery::DeliveryState;

/// Content type tag marking a message body as a Sylk file transfer.
pub const FILE_TRANSFER_CONTENT_TYPE: &str = "application/sylk-file-transfer";

/// Message author identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageSender {
    /// Stable address of the sender (e.g. `alice@example.com`).
    pub uri: String,
    /// Preferred display name, if the sender advertised one.
    pub display_name: Option<String>,
}

/// Kind of chat row a message renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Normal,
    /// Inline status row: no sender header, timestamp on the right.
    Status,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: String,
    pub sender: MessageSender,
    /// Raw message body. For file transfers this is a JSON payload.
    pub content: String,
    /// MIME-like tag describing `content`.
    pub content_type: String,
    pub timestamp: DateTime<Utc>,
    /// Delivery state at the time this record was produced. Live
    /// updates arrive through a `StateFeed`, not through this field.
    pub state: DeliveryState,
    /// End-to-end secured transfer: shows the lock icon and hides the
    /// copy-link action.
    pub is_secure: bool,
    pub kind: MessageKind,
}

impl ChatMessage {
    /// Create a normal, non-secure message in the `Pending` state.
    pub fn new(
        id: impl Into<String>,
        sender: MessageSender,
        content: impl Into<String>,
        content_type: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            sender,
            content: content.into(),
            content_type: content_type.into(),
            timestamp,
            state: DeliveryState::Pending,
            is_secure: false,
            kind: MessageKind::Normal,
        }
    }

    /// Whether the body is a file-transfer payload.
    pub fn is_file_transfer(&self) -> bool {
        self.content_type == FILE_TRANSFER_CONTENT_TYPE
    }

    /// `HH:MM` clock label used by message rows.
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
