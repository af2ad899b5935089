//! Plugin registration for Tauri

use tauri::{Manager, Wry};

use crate::window::WindowController;

/// Register all plugins with the Tauri builder
pub fn register_plugins(builder: tauri::Builder<Wry>) -> tauri::Builder<Wry> {
    builder
        // must be first so a second launch is caught before anything else runs
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            tracing::debug!("second instance launch, focusing existing window");
            if let Some(controller) = app.try_state::<WindowController>() {
                controller.show_window(app);
            }
        }))
        .plugin(tauri_plugin_opener::init())
}
