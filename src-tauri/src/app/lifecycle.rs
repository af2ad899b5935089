//! Application lifecycle event handling
//!
//! This module handles window events, application run events, and the
//! page-load hook that fires the content bridge.

use tauri::webview::{PageLoadEvent, PageLoadPayload};
use tauri::{AppHandle, Manager, RunEvent, Webview, WindowEvent};

use crate::config::ConfigStore;
use crate::window::bridge::{self, ContentBridge};
use crate::window::{WindowController, MAIN_WINDOW_LABEL};

/// Handle window events
pub fn handle_window_event(window: &tauri::Window, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }
    let app = window.app_handle();

    match event {
        WindowEvent::CloseRequested { api, .. } => {
            let controller = app.state::<WindowController>();
            if controller.intercept_close(app) {
                api.prevent_close();
            }
        }
        // Tauri delivers no discrete maximize events; derive them from
        // resize notifications instead.
        WindowEvent::Resized(_) => {
            let controller = app.state::<WindowController>();
            controller.note_resize(app);
        }
        _ => {}
    }
}

/// Handle application run events
pub fn handle_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        // second path into the quit flag, alongside an explicit quit()
        RunEvent::ExitRequested { .. } => {
            if let Some(controller) = app.try_state::<WindowController>() {
                controller.note_exit_requested(app);
            }
        }
        // Handle dock click on macOS to reopen the window
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => {
            if let Some(controller) = app.try_state::<WindowController>() {
                controller.show_window(app);
            }
        }
        _ => {}
    }
}

/// Fire the content bridge on the first finished load of the main webview.
pub fn handle_page_load(webview: &Webview, payload: &PageLoadPayload<'_>) {
    if webview.label() != MAIN_WINDOW_LABEL {
        return;
    }
    if !matches!(payload.event(), PageLoadEvent::Finished) {
        return;
    }

    let app = webview.app_handle();
    let Some(latch) = app.try_state::<ContentBridge>() else {
        return;
    };
    // reloads do not re-trigger injection
    if !latch.try_fire() {
        return;
    }

    let config = app.state::<ConfigStore>();
    bridge::inject(webview, &config);
}
