//! Flow tests: decode a payload, then track delivery to read.

use sylk_messaging::{
    ChatMessage, DeliveryState, DeliveryTracker, MessageSender, TransferPayload,
    FILE_TRANSFER_CONTENT_TYPE,
};

fn transfer_message(content: &str) -> ChatMessage {
    ChatMessage::new(
        "msg-1",
        MessageSender {
            uri: "alice@example.com".to_string(),
            display_name: Some("Alice".to_string()),
        },
        content,
        FILE_TRANSFER_CONTENT_TYPE,
        chrono::Utc::now(),
    )
}

#[test]
fn decoded_payload_drives_file_block_fields() {
    let msg = transfer_message(
        r#"{"filename":"quarterly_report.pdf.asc","filesize":1048576,"filetype":"application/pdf","url":"https://files.example.com/q.pdf"}"#,
    );
    assert!(msg.is_file_transfer());

    let payload = TransferPayload::from_json(&msg.content).unwrap();
    assert_eq!(payload.display_name(), "quarterly report.pdf");
    assert_eq!(payload.formatted_size(), "1.0 MB");
    assert!(!payload.is_image());
}

#[test]
fn malformed_body_is_a_decode_error() {
    let msg = transfer_message("{truncated");
    assert!(TransferPayload::from_json(&msg.content).is_err());
}

#[tokio::test]
async fn delivery_feed_reaches_read_receipt() {
    let (tracker, feed) = DeliveryTracker::new(DeliveryState::Pending);
    let mut rx = feed.subscribe();

    tracker.set(DeliveryState::Accepted);
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), DeliveryState::Accepted);

    tracker.set(DeliveryState::Delivered);
    rx.changed().await.unwrap();
    assert!(!rx.borrow().is_terminal());

    tracker.set(DeliveryState::Displayed);
    rx.changed().await.unwrap();
    let state = *rx.borrow();
    assert_eq!(state, DeliveryState::Displayed);
    assert!(state.is_terminal());
}
