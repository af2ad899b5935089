//! Preference commands for the settings surface of the hosted client.

use tauri::State;

use crate::config::{ConfigStore, Preferences};

#[tauri::command]
pub fn get_preferences(config: State<ConfigStore>) -> Preferences {
    config.snapshot()
}

/// Takes effect on the next launch; the frame preference is fixed for the
/// window's lifetime.
#[tauri::command]
pub fn set_custom_frame(config: State<ConfigStore>, enabled: bool) {
    config.set_custom_frame(enabled);
    config.sync();
}

#[tauri::command]
pub fn set_minimise_to_tray(config: State<ConfigStore>, enabled: bool) {
    config.set_minimise_to_tray(enabled);
    config.sync();
}

#[tauri::command]
pub fn set_spellchecker(config: State<ConfigStore>, enabled: bool) {
    config.set_spellchecker(enabled);
    config.sync();
}
