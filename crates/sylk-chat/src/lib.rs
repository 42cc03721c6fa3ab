//! Sylk chat demo library.
//!
//! Re-exports components, state, and the local transfer engine for
//! embedding in other apps.

pub mod components;
pub mod demo;
pub mod state;
pub mod transfers;

/// App-shell CSS for embedding in host apps.
pub const CHAT_CSS: &str = include_str!("style.css");
