//! Contract consumed from the file-transfer engine.
//!
//! Thumbnail generation, downloads and link opening are performed by
//! an external engine; the message view only decides when to call it
//! and how to present the result. Transport, encryption and the
//! byte-level protocol live entirely behind this trait.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::payload::TransferPayload;

/// Generated preview for an image transfer.
#[derive(Clone, Debug, PartialEq)]
pub struct Thumbnail {
    /// Image bytes as a `data:` URL, ready for an `img` src.
    pub data_url: String,
    /// Filename the engine resolved for the image.
    pub filename: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Failure reported by the transfer engine.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("payload has no download url")]
    MissingUrl,
    #[error("not supported on this platform")]
    Unsupported,
    #[error("transfer i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Engine(String),
}

/// Capabilities the message view needs from a transfer engine.
#[async_trait]
pub trait FileTransferApi: Send + Sync {
    /// Produce a thumbnail for an image transfer, keyed by account and
    /// message id.
    async fn generate_thumbnail(
        &self,
        account: &str,
        message_id: &str,
        payload: &TransferPayload,
    ) -> Result<Thumbnail, TransferError>;

    /// Fetch the file to local storage.
    async fn download(&self, account: &str, payload: &TransferPayload)
        -> Result<(), TransferError>;

    /// Open the file outside the chat window.
    async fn open_in_new_tab(
        &self,
        account: &str,
        payload: &TransferPayload,
    ) -> Result<(), TransferError>;
}

/// Cloneable handle to a transfer engine.
///
/// Compares by engine identity so it satisfies the `PartialEq` bound
/// on component props.
#[derive(Clone)]
pub struct TransferHandle(Arc<dyn FileTransferApi>);

impl TransferHandle {
    pub fn new(api: impl FileTransferApi + 'static) -> Self {
        Self(Arc::new(api))
    }

    pub fn api(&self) -> &dyn FileTransferApi {
        self.0.as_ref()
    }
}

impl PartialEq for TransferHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TransferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferHandle").finish_non_exhaustive()
    }
}
