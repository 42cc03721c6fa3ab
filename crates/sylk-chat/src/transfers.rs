//! Local-filesystem transfer engine for the demo app.
//!
//! Treats payload URLs of the form `file:///...` (or plain paths) as
//! local files: thumbnails are read and inlined as data URLs, and
//! downloads copy into a downloads directory. The real client swaps
//! this for its network-backed engine.

use std::path::PathBuf;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use sylk_messaging::{FileTransferApi, Thumbnail, TransferError, TransferPayload};

/// Refuse to inline images past this size.
const MAX_THUMBNAIL_BYTES: u64 = 2 * 1024 * 1024;

/// Rendered width for inlined thumbnails.
const THUMBNAIL_WIDTH: u32 = 280;

pub struct LocalTransfers {
    /// Directory downloads land in.
    downloads_dir: PathBuf,
}

impl LocalTransfers {
    pub fn new(downloads_dir: PathBuf) -> Self {
        Self { downloads_dir }
    }

    fn local_path(payload: &TransferPayload) -> Result<PathBuf, TransferError> {
        let url = payload.url.as_deref().ok_or(TransferError::MissingUrl)?;
        let path = url.strip_prefix("file://").unwrap_or(url);
        Ok(PathBuf::from(path))
    }
}

#[async_trait]
impl FileTransferApi for LocalTransfers {
    async fn generate_thumbnail(
        &self,
        _account: &str,
        message_id: &str,
        payload: &TransferPayload,
    ) -> Result<Thumbnail, TransferError> {
        let path = Self::local_path(payload)?;
        let meta = tokio::fs::metadata(&path).await?;
        if meta.len() > MAX_THUMBNAIL_BYTES {
            return Err(TransferError::Engine(format!(
                "image too large to inline: {} bytes",
                meta.len()
            )));
        }
        let data = tokio::fs::read(&path).await?;
        let mime = payload
            .filetype
            .as_deref()
            .unwrap_or("application/octet-stream");
        let data_url = format!("data:{};base64,{}", mime, STANDARD.encode(&data));
        tracing::debug!(
            "thumbnail for {message_id}: {} bytes from {}",
            data.len(),
            path.display()
        );
        Ok(Thumbnail {
            data_url,
            filename: payload.filename.clone(),
            width: Some(THUMBNAIL_WIDTH),
            height: None,
        })
    }

    async fn download(
        &self,
        account: &str,
        payload: &TransferPayload,
    ) -> Result<(), TransferError> {
        let source = Self::local_path(payload)?;
        tokio::fs::create_dir_all(&self.downloads_dir).await?;
        let destination = self.downloads_dir.join(&payload.filename);
        tokio::fs::copy(&source, &destination).await?;
        tracing::info!(
            "{account}: saved {} to {}",
            payload.filename,
            destination.display()
        );
        Ok(())
    }

    async fn open_in_new_tab(
        &self,
        _account: &str,
        _payload: &TransferPayload,
    ) -> Result<(), TransferError> {
        // The desktop shell has no tabs to open into.
        Err(TransferError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(url: Option<&str>) -> TransferPayload {
        TransferPayload {
            filename: "pic.png".to_string(),
            filesize: 4,
            filetype: Some("image/png".to_string()),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_local_path_strips_scheme() {
        let path = LocalTransfers::local_path(&payload(Some("file:///tmp/pic.png"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/pic.png"));

        let bare = LocalTransfers::local_path(&payload(Some("/tmp/pic.png"))).unwrap();
        assert_eq!(bare, PathBuf::from("/tmp/pic.png"));
    }

    #[test]
    fn test_missing_url_is_an_error() {
        assert!(matches!(
            LocalTransfers::local_path(&payload(None)),
            Err(TransferError::MissingUrl)
        ));
    }

    #[tokio::test]
    async fn test_thumbnail_inlines_file_as_data_url() {
        let dir = std::env::temp_dir().join(format!("sylk-thumb-test-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let image_path = dir.join("pic.png");
        tokio::fs::write(&image_path, b"not-really-png").await.unwrap();

        let engine = LocalTransfers::new(dir.join("downloads"));
        let payload = payload(Some(&format!("file://{}", image_path.display())));
        let thumb = engine
            .generate_thumbnail("alice@example.com", "msg-1", &payload)
            .await
            .unwrap();

        assert!(thumb.data_url.starts_with("data:image/png;base64,"));
        assert_eq!(thumb.filename, "pic.png");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_download_copies_into_downloads_dir() {
        let dir = std::env::temp_dir().join(format!("sylk-dl-test-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let source = dir.join("notes.txt");
        tokio::fs::write(&source, b"hello").await.unwrap();

        let downloads = dir.join("downloads");
        let engine = LocalTransfers::new(downloads.clone());
        let payload = TransferPayload {
            filename: "notes.txt".to_string(),
            filesize: 5,
            filetype: Some("text/plain".to_string()),
            url: Some(format!("file://{}", source.display())),
        };
        engine.download("alice@example.com", &payload).await.unwrap();

        let copied = tokio::fs::read(downloads.join("notes.txt")).await.unwrap();
        assert_eq!(copied, b"hello");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
