//! Application state initialization

use tauri::{App, Manager};

use crate::config::ConfigStore;
use crate::window::bridge::ContentBridge;
use crate::window::spellcheck::SpellcheckMenuState;
use crate::window::WindowController;

/// Initialize all managed state for the application
pub fn init_state(app: &App) -> crate::error::Result<()> {
    let config = ConfigStore::open()?;
    let controller = WindowController::new(config.window_state().is_maximised);
    app.manage(config);

    app.manage(controller);
    app.manage(ContentBridge::new());
    app.manage(SpellcheckMenuState::default());

    Ok(())
}
