//! Spellcheck context menu.
//!
//! The hosted content reports dictionary suggestions and the misspelled word
//! when the user right-clicks a flagged span; the shell answers with a native
//! popup menu. Menu construction is split into a pure entry builder so the
//! population rules can be tested without a window.

use parking_lot::Mutex;
use tauri::menu::{Menu, MenuEvent, MenuItem};
use tauri::{AppHandle, Emitter, Manager, Runtime, WebviewWindow};

use crate::config::ConfigStore;
use crate::error::Result;
use crate::window::MAIN_WINDOW_LABEL;

const SUGGESTION_ID_PREFIX: &str = "spellcheck-suggestion-";
const ADD_WORD_ID: &str = "spellcheck-add-word";
const TOGGLE_ID: &str = "spellcheck-toggle";

/// A single entry of the spellcheck context menu, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Replace the misspelled span with this suggestion.
    Suggestion { index: usize, text: String },
    /// Register the misspelled word as correctly spelled.
    AddToDictionary { word: String },
    /// Flip the spellchecker preference.
    ToggleSpellcheck,
}

impl MenuEntry {
    pub fn id(&self) -> String {
        match self {
            MenuEntry::Suggestion { index, .. } => format!("{SUGGESTION_ID_PREFIX}{index}"),
            MenuEntry::AddToDictionary { .. } => ADD_WORD_ID.to_string(),
            MenuEntry::ToggleSpellcheck => TOGGLE_ID.to_string(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Suggestion { text, .. } => text,
            MenuEntry::AddToDictionary { .. } => "Add to dictionary",
            MenuEntry::ToggleSpellcheck => "Toggle spellcheck",
        }
    }
}

/// Build the menu entries for a context-menu trigger.
///
/// Suggestions come first in the order supplied, then "Add to dictionary"
/// when a misspelled word is present, then always the spellcheck toggle.
/// The result is never empty, so the menu is always shown.
pub fn menu_entries(suggestions: &[String], misspelled_word: Option<&str>) -> Vec<MenuEntry> {
    let mut entries: Vec<MenuEntry> = suggestions
        .iter()
        .enumerate()
        .map(|(index, text)| MenuEntry::Suggestion {
            index,
            text: text.clone(),
        })
        .collect();

    if let Some(word) = misspelled_word {
        entries.push(MenuEntry::AddToDictionary {
            word: word.to_string(),
        });
    }

    entries.push(MenuEntry::ToggleSpellcheck);
    entries
}

/// Entries of the menu currently popped up, so the menu-event handler can
/// map an activated id back to its payload.
#[derive(Debug, Default)]
pub struct SpellcheckMenuState {
    pending: Mutex<Vec<MenuEntry>>,
}

impl SpellcheckMenuState {
    fn remember(&self, entries: Vec<MenuEntry>) {
        *self.pending.lock() = entries;
    }

    fn lookup(&self, id: &str) -> Option<MenuEntry> {
        self.pending
            .lock()
            .iter()
            .find(|entry| entry.id() == id)
            .cloned()
    }
}

/// Build and display the context menu at the cursor position.
pub fn open_menu<R: Runtime>(
    window: &WebviewWindow<R>,
    state: &SpellcheckMenuState,
    suggestions: Vec<String>,
    misspelled_word: Option<String>,
) -> Result<()> {
    let entries = menu_entries(&suggestions, misspelled_word.as_deref());

    let app = window.app_handle();
    let menu = Menu::new(app)?;
    for entry in &entries {
        menu.append(&MenuItem::with_id(
            app,
            entry.id(),
            entry.label(),
            true,
            None::<&str>,
        )?)?;
    }

    state.remember(entries);
    window.popup_menu(&menu)?;
    Ok(())
}

/// Dispatch an activated menu entry.
pub fn handle_menu_event<R: Runtime>(app: &AppHandle<R>, event: &MenuEvent) {
    let Some(state) = app.try_state::<SpellcheckMenuState>() else {
        return;
    };
    let Some(entry) = state.lookup(event.id.as_ref()) else {
        return;
    };
    let config = app.state::<ConfigStore>();

    match entry {
        MenuEntry::Suggestion { text, .. } => {
            if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
                if let Err(e) = window.emit("spellcheck:replace", &text) {
                    tracing::warn!(error = %e, "failed to deliver replacement");
                }
            }
        }
        MenuEntry::AddToDictionary { word } => {
            if config.add_custom_word(&word) {
                config.sync();
            }
            if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
                let _ = window.emit("spellcheck:add-word", &word);
            }
        }
        MenuEntry::ToggleSpellcheck => {
            let enabled = config.toggle_spellchecker();
            config.sync();
            tracing::debug!(enabled, "spellchecker toggled");
        }
    }
}
