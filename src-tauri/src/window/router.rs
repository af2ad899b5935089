//! Native event routing for the main window.
//!
//! The router is a pure state machine: it owns the process quit flag and the
//! zoom level, and maps each native signal to a list of side effects for the
//! lifecycle controller to apply. Keeping it free of window handles makes the
//! close-interception policy and the quit-flag invariant testable without a
//! running webview.

/// Control messages sent by the hosted content over the invoke channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMessage {
    Minimise,
    Maximise,
    Close,
}

/// Native signals observed by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The OS asked to close the window. Carries the tray preference as read
    /// at the moment of the request.
    CloseRequested { minimise_to_tray: bool },
    /// The window became visible.
    Shown,
    /// The window was hidden.
    Hidden,
    Maximized,
    Unmaximized,
    ZoomIn,
    ZoomOut,
    /// Inbound control message from the hosted content.
    Control(ControlMessage),
    /// An explicit quit was requested (tray menu, `quit` control path).
    QuitRequested,
    /// The runtime signalled that the application is about to exit.
    ExitRequested,
}

/// Side effects the controller applies against the native window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Suppress the pending OS close.
    PreventClose,
    /// Hide the window (close-to-tray).
    Hide,
    Minimize,
    /// Unmaximize if maximized, otherwise maximize.
    ToggleMaximize,
    /// Ask the window to close, subject to the interception policy.
    RequestClose,
    /// Refresh the tray menu to reflect current visibility.
    RefreshTray,
    /// Persist the maximise state to the configuration store.
    PersistMaximised(bool),
    /// Apply the given zoom level to the hosted content.
    ApplyZoom(i32),
}

/// Webview zoom factor for a zoom level, one browser-style step per level.
pub fn zoom_factor(level: i32) -> f64 {
    1.2f64.powi(level)
}

/// Pure event router for the single main window.
#[derive(Debug, Default)]
pub struct EventRouter {
    should_quit: bool,
    zoom_level: i32,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an actual-quit sequence has begun. Monotonic: never resets.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    /// Route one event to its effects, updating router state.
    pub fn route(&mut self, event: ShellEvent) -> Vec<Effect> {
        match event {
            ShellEvent::CloseRequested { minimise_to_tray } => {
                if !self.should_quit && minimise_to_tray {
                    vec![Effect::PreventClose, Effect::Hide]
                } else {
                    // let the close proceed to destruction
                    Vec::new()
                }
            }
            ShellEvent::Shown | ShellEvent::Hidden => vec![Effect::RefreshTray],
            ShellEvent::Maximized => vec![Effect::PersistMaximised(true)],
            ShellEvent::Unmaximized => vec![Effect::PersistMaximised(false)],
            ShellEvent::ZoomIn => {
                self.zoom_level += 1;
                vec![Effect::ApplyZoom(self.zoom_level)]
            }
            ShellEvent::ZoomOut => {
                self.zoom_level -= 1;
                vec![Effect::ApplyZoom(self.zoom_level)]
            }
            ShellEvent::Control(ControlMessage::Minimise) => vec![Effect::Minimize],
            ShellEvent::Control(ControlMessage::Maximise) => vec![Effect::ToggleMaximize],
            ShellEvent::Control(ControlMessage::Close) => vec![Effect::RequestClose],
            ShellEvent::QuitRequested => {
                self.should_quit = true;
                vec![Effect::RequestClose]
            }
            ShellEvent::ExitRequested => {
                self.should_quit = true;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_intercepted_only_when_tray_enabled_and_not_quitting() {
        // (should_quit, minimise_to_tray) -> intercepted?
        let cases = [
            (false, true, true),
            (false, false, false),
            (true, true, false),
            (true, false, false),
        ];

        for (quit, tray, intercepted) in cases {
            let mut router = EventRouter::new();
            if quit {
                router.route(ShellEvent::QuitRequested);
            }
            let effects = router.route(ShellEvent::CloseRequested {
                minimise_to_tray: tray,
            });
            if intercepted {
                assert_eq!(
                    effects,
                    vec![Effect::PreventClose, Effect::Hide],
                    "quit={quit} tray={tray}"
                );
            } else {
                assert!(effects.is_empty(), "quit={quit} tray={tray}");
            }
        }
    }

    #[test]
    fn test_quit_flag_is_monotonic() {
        let mut router = EventRouter::new();
        router.route(ShellEvent::QuitRequested);
        assert!(router.should_quit());

        // no subsequent event resets the flag
        for event in [
            ShellEvent::Shown,
            ShellEvent::Hidden,
            ShellEvent::Maximized,
            ShellEvent::Unmaximized,
            ShellEvent::ZoomIn,
            ShellEvent::ZoomOut,
            ShellEvent::Control(ControlMessage::Minimise),
            ShellEvent::Control(ControlMessage::Maximise),
            ShellEvent::Control(ControlMessage::Close),
            ShellEvent::CloseRequested {
                minimise_to_tray: true,
            },
            ShellEvent::ExitRequested,
            ShellEvent::QuitRequested,
        ] {
            router.route(event);
            assert!(router.should_quit());
        }
    }

    #[test]
    fn test_exit_requested_sets_flag_without_effects() {
        let mut router = EventRouter::new();
        let effects = router.route(ShellEvent::ExitRequested);
        assert!(effects.is_empty());
        assert!(router.should_quit());

        // a close after the runtime exit signal is terminal
        let effects = router.route(ShellEvent::CloseRequested {
            minimise_to_tray: true,
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_maximise_persistence_follows_event_order() {
        let mut router = EventRouter::new();
        assert_eq!(
            router.route(ShellEvent::Maximized),
            vec![Effect::PersistMaximised(true)]
        );
        assert_eq!(
            router.route(ShellEvent::Unmaximized),
            vec![Effect::PersistMaximised(false)]
        );
    }

    #[test]
    fn test_zoom_steps_by_exactly_one_level() {
        let mut router = EventRouter::new();
        assert_eq!(router.route(ShellEvent::ZoomIn), vec![Effect::ApplyZoom(1)]);
        assert_eq!(router.route(ShellEvent::ZoomIn), vec![Effect::ApplyZoom(2)]);
        assert_eq!(
            router.route(ShellEvent::ZoomOut),
            vec![Effect::ApplyZoom(1)]
        );
        assert_eq!(
            router.route(ShellEvent::ZoomOut),
            vec![Effect::ApplyZoom(0)]
        );
        assert_eq!(
            router.route(ShellEvent::ZoomOut),
            vec![Effect::ApplyZoom(-1)]
        );
        // applied level always mirrors router state
        assert_eq!(router.zoom_level(), -1);
    }

    #[test]
    fn test_every_visibility_change_refreshes_tray_once() {
        let mut router = EventRouter::new();
        for event in [
            ShellEvent::Hidden,
            ShellEvent::Hidden,
            ShellEvent::Shown,
            ShellEvent::Shown,
        ] {
            assert_eq!(router.route(event), vec![Effect::RefreshTray]);
        }
    }

    #[test]
    fn test_control_messages() {
        let mut router = EventRouter::new();
        assert_eq!(
            router.route(ShellEvent::Control(ControlMessage::Minimise)),
            vec![Effect::Minimize]
        );
        assert_eq!(
            router.route(ShellEvent::Control(ControlMessage::Maximise)),
            vec![Effect::ToggleMaximize]
        );
        assert_eq!(
            router.route(ShellEvent::Control(ControlMessage::Close)),
            vec![Effect::RequestClose]
        );
        // control messages never touch the quit flag
        assert!(!router.should_quit());
    }

    #[test]
    fn test_zoom_factor() {
        assert!((zoom_factor(0) - 1.0).abs() < f64::EPSILON);
        assert!(zoom_factor(1) > 1.0);
        assert!(zoom_factor(-1) < 1.0);
    }
}
