//! Tidechat - native desktop shell for the Tidechat web client
//!
//! The shell hosts the remotely-served client in a single managed window,
//! persists window/user preferences across restarts, and bridges a small set
//! of native capabilities (tray, spellcheck, zoom, badge count) into the
//! hosted content. This is the main library entry point that sets up and
//! runs the Tauri application.

mod app;
mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod tray;
pub mod window;

use url::Url;

/// Run the shell, optionally loading the client from an override server.
pub fn run(server_override: Option<Url>) {
    // Initialize logging
    logging::init();
    tracing::info!("Starting Tidechat desktop shell");

    // Resolve the build target once for the process lifetime
    window::build_url::init(server_override);

    app::register_plugins(tauri::Builder::default())
        .setup(|app| {
            // Initialize state
            app::init_state(app)?;

            // An override server is outside the static capability; grant it
            // IPC before the window exists
            window::grant_remote_ipc(app.handle())?;

            // Create the single main window from stored preferences
            window::create_main_window(app.handle())?;

            // Tray presence so the process survives hide-to-tray
            tray::setup_tray(app)?;

            Ok(())
        })
        .on_window_event(app::handle_window_event)
        .on_page_load(|webview, payload| app::handle_page_load(&webview, &payload))
        .on_menu_event(|app, event| window::spellcheck::handle_menu_event(app, &event))
        .invoke_handler(tauri::generate_handler![
            // Window controls
            commands::window::minimise,
            commands::window::maximise,
            commands::window::close,
            commands::window::zoom_in,
            commands::window::zoom_out,
            commands::window::set_badge_count,
            commands::window::open_spellcheck_menu,
            // Settings
            commands::settings::get_preferences,
            commands::settings::set_custom_frame,
            commands::settings::set_minimise_to_tray,
            commands::settings::set_spellchecker,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(app::handle_run_event);
}
