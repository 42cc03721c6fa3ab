//! Domain model for Sylk chat messaging.
//!
//! Message records, delivery-state tracking, file-transfer payload
//! decoding, and the contract consumed from the transfer engine. No UI
//! dependencies; the `sylk-ui` crate renders these types.

pub mod contacts;
pub mod delivery;
pub mod message;
pub mod mime;
pub mod payload;
pub mod transfer;

pub use contacts::ContactCache;
pub use delivery::{DeliveryState, DeliveryTracker, StateFeed};
pub use message::{ChatMessage, MessageKind, MessageSender, FILE_TRANSFER_CONTENT_TYPE};
pub use mime::{friendly_mime_name, mime_label};
pub use payload::{format_file_size, PayloadError, TransferPayload};
pub use transfer::{FileTransferApi, Thumbnail, TransferError, TransferHandle};
