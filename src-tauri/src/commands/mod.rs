//! Tauri command handlers exposed to the hosted content.

pub mod settings;
pub mod window;
