//! UI components for the demo shell.

pub mod app;
