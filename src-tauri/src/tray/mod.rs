//! System tray presence.
//!
//! The tray keeps the process reachable after the window is hidden to the
//! tray. Its menu carries a visibility toggle whose label is refreshed from
//! the live window state, plus a quit entry that routes through the
//! lifecycle controller so the quit flag is set before the close request.

use tauri::{
    menu::{Menu, MenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    App, AppHandle, Manager, Runtime, Wry,
};

use crate::error::Result;
use crate::window::{WindowController, MAIN_WINDOW_LABEL};

const TOGGLE_ID: &str = "tray-toggle";
const QUIT_ID: &str = "tray-quit";

const LABEL_HIDE: &str = "Hide Tidechat";
const LABEL_SHOW: &str = "Show Tidechat";

/// Menu items that get relabeled as visibility changes.
pub struct TrayState {
    toggle_item: MenuItem<Wry>,
}

/// Setup the system tray icon and menu.
pub fn setup_tray(app: &App) -> Result<()> {
    let toggle_item = MenuItem::with_id(app, TOGGLE_ID, LABEL_HIDE, true, None::<&str>)?;
    let quit_item = MenuItem::with_id(app, QUIT_ID, "Quit Tidechat", true, None::<&str>)?;

    let menu = Menu::with_items(app, &[&toggle_item, &quit_item])?;

    let mut tray_builder = TrayIconBuilder::new().menu(&menu);

    // Handle missing window icon gracefully
    if let Some(icon) = app.default_window_icon() {
        tray_builder = tray_builder.icon(icon.clone());
    }

    let _tray = tray_builder
        .show_menu_on_left_click(false)
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                let app = tray.app_handle();
                if let Some(controller) = app.try_state::<WindowController>() {
                    controller.show_window(app);
                }
            }
        })
        .on_menu_event(|app, event| match event.id.as_ref() {
            TOGGLE_ID => {
                let Some(controller) = app.try_state::<WindowController>() else {
                    return;
                };
                let visible = app
                    .get_webview_window(MAIN_WINDOW_LABEL)
                    .and_then(|w| w.is_visible().ok())
                    .unwrap_or(false);
                if visible {
                    controller.hide_window(app);
                } else {
                    controller.show_window(app);
                }
            }
            QUIT_ID => {
                if let Some(controller) = app.try_state::<WindowController>() {
                    controller.quit(app);
                }
            }
            _ => {}
        })
        .build(app)?;

    app.manage(TrayState { toggle_item });
    Ok(())
}

/// Refresh the tray menu to reflect current window visibility.
///
/// Idempotent; called after every visibility transition.
pub fn update_tray_menu<R: Runtime>(app: &AppHandle<R>) {
    let Some(state) = app.try_state::<TrayState>() else {
        return;
    };

    let visible = app
        .get_webview_window(MAIN_WINDOW_LABEL)
        .and_then(|w| w.is_visible().ok())
        .unwrap_or(false);

    let label = if visible { LABEL_HIDE } else { LABEL_SHOW };
    if let Err(e) = state.toggle_item.set_text(label) {
        tracing::warn!(error = %e, "failed to refresh tray menu");
    }
}
