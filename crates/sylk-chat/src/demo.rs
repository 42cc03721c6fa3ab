//! Sample conversation data for the demo app.
//!
//! Seeds a handful of file-transfer messages (image, generic file,
//! secure file, a broken payload, and a status row) against local
//! files so every row mode renders without a server.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context as _;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{Duration, Utc};

use sylk_messaging::{
    ChatMessage, ContactCache, DeliveryState, DeliveryTracker, MessageKind, MessageSender,
    StateFeed, TransferHandle, TransferPayload, FILE_TRANSFER_CONTENT_TYPE,
};

use crate::transfers::LocalTransfers;

/// 1x1 transparent PNG, enough to exercise the thumbnail path.
const SAMPLE_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// One row of the demo conversation.
#[derive(Clone, PartialEq)]
pub struct DemoRow {
    pub message: ChatMessage,
    pub feed: Option<StateFeed>,
    pub cont: bool,
}

/// Everything the app shell needs to run the demo.
pub struct DemoData {
    pub account: String,
    pub contacts: ContactCache,
    pub transfer: TransferHandle,
    pub rows: Vec<DemoRow>,
    /// Trackers kept alive so delivery states can still move.
    pub trackers: Rc<HashMap<String, DeliveryTracker>>,
}

struct SampleFiles {
    image: PathBuf,
    notes: PathBuf,
}

fn write_sample_files(dir: &Path) -> anyhow::Result<SampleFiles> {
    std::fs::create_dir_all(dir).context("create demo directory")?;

    let image = dir.join("holiday_photo.png");
    let png = STANDARD
        .decode(SAMPLE_PNG_BASE64)
        .context("decode sample image")?;
    std::fs::write(&image, &png).context("write sample image")?;

    let notes = dir.join("meeting_notes.txt");
    std::fs::write(&notes, "agenda:\n- thumbnails\n- receipts\n").context("write sample notes")?;

    Ok(SampleFiles { image, notes })
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

fn transfer_content(payload: &TransferPayload) -> String {
    serde_json::to_string(payload).unwrap_or_default()
}

/// Build the sample conversation.
pub fn build_demo() -> DemoData {
    let account = "alice@example.com".to_string();
    let alice = MessageSender {
        uri: account.clone(),
        display_name: Some("Alice".to_string()),
    };
    let bob = MessageSender {
        uri: "bob@example.com".to_string(),
        display_name: None,
    };

    let mut contacts = ContactCache::new();
    contacts.insert("bob@example.com", "Bob");

    let demo_dir = std::env::temp_dir().join("sylk-chat-demo");
    let files = match write_sample_files(&demo_dir) {
        Ok(files) => Some(files),
        Err(err) => {
            tracing::warn!("could not seed demo files: {err:#}");
            None
        }
    };

    let transfer = TransferHandle::new(LocalTransfers::new(demo_dir.join("downloads")));

    let now = Utc::now();
    let mut rows = Vec::new();
    let mut trackers = HashMap::new();

    // Incoming image from Bob; thumbnail resolves from the seeded file.
    let image_payload = TransferPayload {
        filename: "holiday_photo.png".to_string(),
        filesize: files.as_ref().map(|f| png_size(&f.image)).unwrap_or(95),
        filetype: Some("image/png".to_string()),
        url: files.as_ref().map(|f| file_url(&f.image)),
    };
    let mut image_msg = ChatMessage::new(
        "msg-photo",
        bob.clone(),
        transfer_content(&image_payload),
        FILE_TRANSFER_CONTENT_TYPE,
        now - Duration::minutes(9),
    );
    image_msg.state = DeliveryState::Received;
    rows.push(DemoRow { message: image_msg, feed: None, cont: false });

    // Follow-up file from Bob, rendered as a continuation row.
    let notes_payload = TransferPayload {
        filename: "meeting_notes.txt".to_string(),
        filesize: 33,
        filetype: Some("text/plain".to_string()),
        url: files.as_ref().map(|f| file_url(&f.notes)),
    };
    let mut notes_msg = ChatMessage::new(
        "msg-notes",
        bob.clone(),
        transfer_content(&notes_payload),
        FILE_TRANSFER_CONTENT_TYPE,
        now - Duration::minutes(8),
    );
    notes_msg.state = DeliveryState::Received;
    rows.push(DemoRow { message: notes_msg, feed: None, cont: true });

    // Outgoing report from Alice; its tracker is driven by the shell
    // so the pending -> displayed walk is visible live.
    let report_payload = TransferPayload {
        filename: "quarterly_report.pdf".to_string(),
        filesize: 2_340_864,
        filetype: Some("application/pdf".to_string()),
        url: Some("https://files.example.com/quarterly_report.pdf".to_string()),
    };
    let report_msg = ChatMessage::new(
        "msg-report",
        alice.clone(),
        transfer_content(&report_payload),
        FILE_TRANSFER_CONTENT_TYPE,
        now - Duration::minutes(4),
    );
    let (tracker, feed) = DeliveryTracker::new(DeliveryState::Pending);
    trackers.insert("msg-report".to_string(), tracker);
    rows.push(DemoRow { message: report_msg, feed: Some(feed), cont: false });

    // Secure transfer: lock icon, no link copy in the menu.
    let secure_payload = TransferPayload {
        filename: "contract_draft.pdf.asc".to_string(),
        filesize: 48_128,
        filetype: Some("application/pdf".to_string()),
        url: Some("https://files.example.com/contract_draft.pdf.asc".to_string()),
    };
    let mut secure_msg = ChatMessage::new(
        "msg-secure",
        bob.clone(),
        transfer_content(&secure_payload),
        FILE_TRANSFER_CONTENT_TYPE,
        now - Duration::minutes(3),
    );
    secure_msg.state = DeliveryState::Received;
    secure_msg.is_secure = true;
    rows.push(DemoRow { message: secure_msg, feed: None, cont: false });

    // A payload that never decodes; renders the permanent error row.
    let mut broken_msg = ChatMessage::new(
        "msg-broken",
        bob,
        "{\"filename\": truncated",
        FILE_TRANSFER_CONTENT_TYPE,
        now - Duration::minutes(2),
    );
    broken_msg.state = DeliveryState::Delivered;
    rows.push(DemoRow { message: broken_msg, feed: None, cont: false });

    // Status row.
    let status_payload = TransferPayload {
        filename: "call_recording.wav".to_string(),
        filesize: 5_242_880,
        filetype: Some("audio/wav".to_string()),
        url: None,
    };
    let mut status_msg = ChatMessage::new(
        "msg-status",
        alice,
        transfer_content(&status_payload),
        FILE_TRANSFER_CONTENT_TYPE,
        now - Duration::minutes(1),
    );
    status_msg.kind = MessageKind::Status;
    status_msg.state = DeliveryState::Delivered;
    rows.push(DemoRow { message: status_msg, feed: None, cont: false });

    DemoData {
        account,
        contacts,
        transfer,
        rows,
        trackers: Rc::new(trackers),
    }
}

fn png_size(path: &Path) -> i64 {
    std::fs::metadata(path).map(|m| m.len() as i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_rows_cover_every_mode() {
        let demo = build_demo();

        assert_eq!(demo.rows.len(), 6);
        assert!(demo.rows.iter().any(|r| r.cont));
        assert!(demo.rows.iter().any(|r| r.message.is_secure));
        assert!(demo.rows.iter().any(|r| r.message.kind == MessageKind::Status));
        assert!(demo.rows.iter().any(|r| r.feed.is_some()));
        // The broken row must not decode.
        let broken = demo.rows.iter().find(|r| r.message.id == "msg-broken").unwrap();
        assert!(TransferPayload::from_json(&broken.message.content).is_err());
        // Every other row must.
        for row in demo.rows.iter().filter(|r| r.message.id != "msg-broken") {
            assert!(TransferPayload::from_json(&row.message.content).is_ok());
        }
    }

    #[test]
    fn test_tracker_is_kept_for_pending_row() {
        let demo = build_demo();
        let tracker = demo.trackers.get("msg-report").unwrap();
        assert_eq!(tracker.current(), DeliveryState::Pending);
    }
}
