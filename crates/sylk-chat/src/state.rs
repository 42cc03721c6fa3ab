//! Global app state shared via Dioxus context.

use dioxus::prelude::*;

use sylk_messaging::{ContactCache, TransferHandle};
use sylk_ui::PreviewImage;

/// Shared app context provided at the root.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub account: Signal<String>,
    pub contacts: Signal<ContactCache>,
    pub transfer: Signal<TransferHandle>,
    /// Whether the enlarged image overlay is showing.
    pub preview_open: Signal<bool>,
    /// Image currently enlarged.
    pub preview_image: Signal<Option<PreviewImage>>,
}
