//! Window lifecycle controller.
//!
//! Owns the router state (quit flag, zoom level) and applies routed effects
//! against the single main window. All native event handlers and commands go
//! through [`WindowController::handle`] so the close-interception policy has
//! exactly one implementation.

use parking_lot::Mutex;
use tauri::{AppHandle, Manager, Runtime, WebviewWindow};

use crate::config::ConfigStore;
use crate::tray;
use crate::window::router::{zoom_factor, Effect, EventRouter, ShellEvent};
use crate::window::MAIN_WINDOW_LABEL;

/// Lifecycle state for the single main window.
#[derive(Debug)]
pub struct WindowController {
    router: Mutex<EventRouter>,
    /// Last maximise state observed on resize, used to derive discrete
    /// maximize/unmaximize transitions. Seeded from the stored state so the
    /// first resize only routes a transition when the state really changed.
    last_maximised: Mutex<Option<bool>>,
}

impl WindowController {
    pub fn new(initially_maximised: bool) -> Self {
        Self {
            router: Mutex::new(EventRouter::new()),
            last_maximised: Mutex::new(Some(initially_maximised)),
        }
    }

    /// Whether an actual-quit sequence has begun.
    pub fn should_quit(&self) -> bool {
        self.router.lock().should_quit()
    }

    /// Route an event and apply its effects.
    pub fn handle<R: Runtime>(&self, app: &AppHandle<R>, event: ShellEvent) {
        let effects = self.router.lock().route(event);
        self.apply(app, effects);
    }

    /// Evaluate the close-interception policy with the tray preference as
    /// read right now. Returns true when the pending OS close must be
    /// suppressed; the caller owns the `prevent_close` call.
    pub fn intercept_close<R: Runtime>(&self, app: &AppHandle<R>) -> bool {
        let minimise_to_tray = app.state::<ConfigStore>().minimise_to_tray();
        let effects = self
            .router
            .lock()
            .route(ShellEvent::CloseRequested { minimise_to_tray });
        let prevent = effects.contains(&Effect::PreventClose);
        self.apply(app, effects);
        prevent
    }

    /// Derive maximize/unmaximize transitions from a resize notification.
    pub fn note_resize<R: Runtime>(&self, app: &AppHandle<R>) {
        let Some(window) = self.main_window(app) else {
            return;
        };
        let maximised = window.is_maximized().unwrap_or(false);
        let event = {
            let mut last = self.last_maximised.lock();
            Self::maximise_transition(&mut last, maximised)
        };
        if let Some(event) = event {
            self.handle(app, event);
        }
    }

    fn maximise_transition(last: &mut Option<bool>, maximised: bool) -> Option<ShellEvent> {
        if *last == Some(maximised) {
            return None;
        }
        *last = Some(maximised);
        Some(if maximised {
            ShellEvent::Maximized
        } else {
            ShellEvent::Unmaximized
        })
    }

    /// Quit the entire app: flag first, then a close request.
    pub fn quit<R: Runtime>(&self, app: &AppHandle<R>) {
        tracing::info!("quit requested");
        self.handle(app, ShellEvent::QuitRequested);
    }

    /// The runtime is about to exit; make the next close terminal.
    pub fn note_exit_requested<R: Runtime>(&self, app: &AppHandle<R>) {
        self.handle(app, ShellEvent::ExitRequested);
    }

    /// Show and focus the main window, then refresh the tray.
    pub fn show_window<R: Runtime>(&self, app: &AppHandle<R>) {
        if let Some(window) = self.main_window(app) {
            let _ = window.show();
            let _ = window.set_focus();
        }
        self.handle(app, ShellEvent::Shown);
    }

    /// Hide the main window, then refresh the tray.
    pub fn hide_window<R: Runtime>(&self, app: &AppHandle<R>) {
        if let Some(window) = self.main_window(app) {
            let _ = window.hide();
        }
        self.handle(app, ShellEvent::Hidden);
    }

    fn main_window<R: Runtime>(&self, app: &AppHandle<R>) -> Option<WebviewWindow<R>> {
        app.get_webview_window(MAIN_WINDOW_LABEL)
    }

    fn apply<R: Runtime>(&self, app: &AppHandle<R>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                // owned by the close-request handler, which has the api handle
                Effect::PreventClose => {}
                Effect::Hide => self.hide_window(app),
                Effect::Minimize => {
                    if let Some(window) = self.main_window(app) {
                        let _ = window.minimize();
                    }
                }
                Effect::ToggleMaximize => {
                    if let Some(window) = self.main_window(app) {
                        let maximised = window.is_maximized().unwrap_or(false);
                        let _ = if maximised {
                            window.unmaximize()
                        } else {
                            window.maximize()
                        };
                    }
                }
                Effect::RequestClose => {
                    if let Some(window) = self.main_window(app) {
                        let _ = window.close();
                    }
                }
                Effect::RefreshTray => tray::update_tray_menu(app),
                Effect::PersistMaximised(maximised) => {
                    app.state::<ConfigStore>().set_maximised(maximised);
                }
                Effect::ApplyZoom(level) => {
                    if let Some(window) = self.main_window(app) {
                        let _ = window.set_zoom(zoom_factor(level));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_at_seeded_state_is_not_a_transition() {
        let controller = WindowController::new(false);
        let mut last = controller.last_maximised.lock();

        // resizing while un-maximised matches the seed, nothing to persist
        assert_eq!(WindowController::maximise_transition(&mut last, false), None);

        assert_eq!(
            WindowController::maximise_transition(&mut last, true),
            Some(ShellEvent::Maximized)
        );
        assert_eq!(WindowController::maximise_transition(&mut last, true), None);
        assert_eq!(
            WindowController::maximise_transition(&mut last, false),
            Some(ShellEvent::Unmaximized)
        );
    }

    #[test]
    fn test_controller_seeds_last_maximised_from_stored_state() {
        let controller = WindowController::new(true);
        assert_eq!(*controller.last_maximised.lock(), Some(true));

        // a restored-maximised window resizing while still maximised is quiet
        let mut last = controller.last_maximised.lock();
        assert_eq!(WindowController::maximise_transition(&mut last, true), None);
    }
}
