//! Entry point for the Sylk chat demo desktop app.

use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};

mod components;
mod demo;
mod state;
mod transfers;

const CHAT_CSS: &str = include_str!("style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("sylk_chat=info,sylk_ui=info,sylk_messaging=info")
        .init();

    let account = std::env::var("SYLK_ACCOUNT").ok();

    let window_title = match &account {
        Some(a) => format!("Sylk - {}", a),
        None => "Sylk".to_string(),
    };

    tracing::info!("Starting {}", window_title);

    // Read optional window geometry from env (set by launcher scripts
    // for tiling)
    let win_x = std::env::var("SYLK_WIN_X").ok().and_then(|v| v.parse::<f64>().ok());
    let win_y = std::env::var("SYLK_WIN_Y").ok().and_then(|v| v.parse::<f64>().ok());
    let win_w = std::env::var("SYLK_WIN_W").ok().and_then(|v| v.parse::<f64>().ok());
    let win_h = std::env::var("SYLK_WIN_H").ok().and_then(|v| v.parse::<f64>().ok());

    let mut wb = WindowBuilder::new()
        .with_title(&window_title)
        .with_maximized(false);

    if let (Some(w), Some(h)) = (win_w, win_h) {
        wb = wb.with_inner_size(LogicalSize::new(w, h));
    } else {
        wb = wb.with_inner_size(LogicalSize::new(760.0, 640.0));
    }

    if let (Some(x), Some(y)) = (win_x, win_y) {
        wb = wb.with_position(LogicalPosition::new(x, y));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(
                    r#"<style>{}{}</style>"#,
                    sylk_ui::SHARED_CSS, CHAT_CSS,
                )),
        )
        .launch(components::app::App);
}
