//! Window control commands.
//!
//! The inbound control channel from the hosted content: no payloads beyond
//! the message kind, no acknowledgments. Everything routes through the
//! lifecycle controller.

use tauri::{AppHandle, State, WebviewWindow};

use crate::window::router::{ControlMessage, ShellEvent};
use crate::window::spellcheck::{self, SpellcheckMenuState};
use crate::window::WindowController;

#[tauri::command]
pub fn minimise(app: AppHandle, controller: State<WindowController>) {
    controller.handle(&app, ShellEvent::Control(ControlMessage::Minimise));
}

/// Toggle: unmaximize if currently maximized, else maximize.
#[tauri::command]
pub fn maximise(app: AppHandle, controller: State<WindowController>) {
    controller.handle(&app, ShellEvent::Control(ControlMessage::Maximise));
}

/// Request a window close, subject to the close-interception policy.
#[tauri::command]
pub fn close(app: AppHandle, controller: State<WindowController>) {
    controller.handle(&app, ShellEvent::Control(ControlMessage::Close));
}

#[tauri::command]
pub fn zoom_in(app: AppHandle, controller: State<WindowController>) {
    controller.handle(&app, ShellEvent::ZoomIn);
}

#[tauri::command]
pub fn zoom_out(app: AppHandle, controller: State<WindowController>) {
    controller.handle(&app, ShellEvent::ZoomOut);
}

/// Mirror the unread count onto the dock/taskbar icon. `None` clears it.
#[tauri::command]
pub fn set_badge_count(window: WebviewWindow, count: Option<i64>) -> Result<(), String> {
    window.set_badge_count(count).map_err(|e| e.to_string())
}

/// Display the spellcheck context menu at the cursor position.
#[tauri::command]
pub fn open_spellcheck_menu(
    window: WebviewWindow,
    state: State<SpellcheckMenuState>,
    suggestions: Vec<String>,
    misspelled_word: Option<String>,
) -> Result<(), String> {
    spellcheck::open_menu(&window, &state, suggestions, misspelled_word)
        .map_err(|e| e.to_string())
}
