//! Window lifecycle and state synchronization.
//!
//! This is the core of the shell: creation of the single main window from
//! stored preferences, routing of native events, the one-shot content
//! bridge, and the spellcheck context menu.

pub mod bridge;
pub mod build_url;
pub mod controller;
pub mod router;
pub mod spellcheck;

pub use controller::WindowController;

use tauri::ipc::CapabilityBuilder;
use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::config::ConfigStore;
use crate::error::Result;

/// Label of the single main window.
pub const MAIN_WINDOW_LABEL: &str = "main";

const DEFAULT_WIDTH: f64 = 1280.0;
const DEFAULT_HEIGHT: f64 = 720.0;
const MIN_WIDTH: f64 = 300.0;
const MIN_HEIGHT: f64 = 300.0;

/// Extend remote IPC access to an overridden build target.
///
/// The static capability file only covers the default endpoint, so a
/// `--force-server` origin needs a runtime grant before the window is
/// created or invokes from the hosted content never reach the shell.
pub fn grant_remote_ipc<R: Runtime>(app: &AppHandle<R>) -> Result<()> {
    let url = build_url::get();
    if build_url::is_default(url) {
        return Ok(());
    }

    let pattern = build_url::origin_pattern(url);
    app.add_capability(
        CapabilityBuilder::new("override-server")
            .window(MAIN_WINDOW_LABEL)
            .remote(pattern.clone())
            .permission("core:default")
            .permission("opener:default"),
    )?;
    tracing::info!(origin = %pattern, "granted IPC access to override server");
    Ok(())
}

/// Create the main application window.
///
/// Initial state comes from the configuration store: the frame preference
/// is read once and fixed for the window's lifetime, and the previous
/// maximise state is restored only when it was persisted as maximised.
/// The window navigates to the build target immediately.
///
/// Must be called at most once per process run.
pub fn create_main_window<R: Runtime>(app: &AppHandle<R>) -> Result<WebviewWindow<R>> {
    let config = app.state::<ConfigStore>();
    let url = build_url::get().clone();

    let mut builder =
        WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, WebviewUrl::External(url.clone()))
            .title("Tidechat")
            .inner_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .min_inner_size(MIN_WIDTH, MIN_HEIGHT)
            .decorations(!config.custom_frame());

    if should_restore_maximised(&config) {
        builder = builder.maximized(true);
    }

    let window = builder.build()?;
    tracing::info!(url = %url, "created main window");
    Ok(window)
}

/// The stored state only ever maximizes at creation; false is the implicit
/// default and never explicitly un-maximizes.
fn should_restore_maximised(config: &ConfigStore) -> bool {
    config.window_state().is_maximised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximise_restored_only_when_persisted_true() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigStore::load(dir.path().join("preferences.json"));

        assert!(!should_restore_maximised(&config));

        config.set_maximised(true);
        assert!(should_restore_maximised(&config));

        config.set_maximised(false);
        assert!(!should_restore_maximised(&config));
    }
}

