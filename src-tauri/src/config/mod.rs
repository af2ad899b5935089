//! Persistent user preferences for the shell.
//!
//! The store holds the small set of native-side preferences the hosted web
//! client cannot keep for itself: window chrome, close-to-tray behavior,
//! spellchecker state and the last-known maximise state. Values live behind
//! a `parking_lot::RwLock` and are flushed to a JSON file on demand via
//! [`ConfigStore::sync`].

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// File name of the preference store inside the platform config directory.
const PREFERENCES_FILE: &str = "preferences.json";

/// Window state mirrored into the store on every maximise transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowState {
    pub is_maximised: bool,
}

/// User preferences persisted across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Draw a custom frame instead of the OS window chrome.
    /// Read once at window creation; changing it takes effect next launch.
    pub custom_frame: bool,
    /// Hide to the tray instead of closing when the window close is requested.
    pub minimise_to_tray: bool,
    /// Whether the platform spellchecker is enabled.
    pub spellchecker: bool,
    /// Words the user added to the dictionary from the context menu.
    pub custom_words: Vec<String>,
    pub window_state: WindowState,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            custom_frame: false,
            minimise_to_tray: true,
            spellchecker: true,
            custom_words: Vec::new(),
            window_state: WindowState::default(),
        }
    }
}

/// Thread-safe preference store managed as Tauri state.
pub struct ConfigStore {
    inner: RwLock<Preferences>,
    path: PathBuf,
}

impl ConfigStore {
    /// Open the store at the platform config directory, creating it if needed.
    pub fn open() -> Result<Self> {
        let dirs = ProjectDirs::from("chat", "Tidechat", "tidechat")
            .ok_or_else(|| ShellError::config("could not resolve a config directory"))?;
        fs::create_dir_all(dirs.config_dir())?;
        Ok(Self::load(dirs.config_dir().join(PREFERENCES_FILE)))
    }

    /// Load preferences from `path`, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load(path: PathBuf) -> Self {
        let prefs = match Self::read_file(&path) {
            Ok(prefs) => prefs,
            Err(ShellError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no preference file, using defaults");
                Preferences::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load preferences, using defaults");
                Preferences::default()
            }
        };

        Self {
            inner: RwLock::new(prefs),
            path,
        }
    }

    fn read_file(path: &Path) -> Result<Preferences> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn custom_frame(&self) -> bool {
        self.inner.read().custom_frame
    }

    pub fn minimise_to_tray(&self) -> bool {
        self.inner.read().minimise_to_tray
    }

    pub fn spellchecker(&self) -> bool {
        self.inner.read().spellchecker
    }

    pub fn window_state(&self) -> WindowState {
        self.inner.read().window_state
    }

    /// Clone of the full preference set, for the frontend settings surface.
    pub fn snapshot(&self) -> Preferences {
        self.inner.read().clone()
    }

    pub fn set_custom_frame(&self, enabled: bool) {
        self.inner.write().custom_frame = enabled;
    }

    pub fn set_minimise_to_tray(&self, enabled: bool) {
        self.inner.write().minimise_to_tray = enabled;
    }

    pub fn set_spellchecker(&self, enabled: bool) {
        self.inner.write().spellchecker = enabled;
    }

    /// Flip the spellchecker preference, returning the new value.
    pub fn toggle_spellchecker(&self) -> bool {
        let mut prefs = self.inner.write();
        prefs.spellchecker = !prefs.spellchecker;
        prefs.spellchecker
    }

    pub fn set_maximised(&self, maximised: bool) {
        self.inner.write().window_state.is_maximised = maximised;
    }

    /// Register a word as correctly spelled. Returns false if it was
    /// already in the dictionary.
    pub fn add_custom_word(&self, word: &str) -> bool {
        let mut prefs = self.inner.write();
        if prefs.custom_words.iter().any(|w| w == word) {
            return false;
        }
        prefs.custom_words.push(word.to_string());
        true
    }

    /// Flush the current preferences to disk on a background task.
    ///
    /// Fire-and-forget: callers do not observe completion or failure, which
    /// is only logged. Event handlers stay off the disk this way.
    pub fn sync(&self) {
        let snapshot = self.inner.read().clone();
        let path = self.path.clone();
        tauri::async_runtime::spawn(async move {
            let raw = match serde_json::to_string_pretty(&snapshot) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to serialize preferences");
                    return;
                }
            };
            if let Err(e) = tokio::fs::write(&path, raw).await {
                tracing::warn!(path = %path.display(), error = %e, "failed to flush preferences");
            }
        });
    }

    /// Flush synchronously. Used on shutdown and in tests.
    pub fn sync_blocking(&self) -> Result<()> {
        let snapshot = self.inner.read().clone();
        write_preferences(&self.path, &snapshot)
    }
}

fn write_preferences(path: &Path, prefs: &Preferences) -> Result<()> {
    let raw = serde_json::to_string_pretty(prefs)?;
    fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::load(dir.path().join(PREFERENCES_FILE))
    }

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert!(!prefs.custom_frame);
        assert!(prefs.minimise_to_tray);
        assert!(prefs.spellchecker);
        assert!(!prefs.window_state.is_maximised);
        assert!(prefs.custom_words.is_empty());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.snapshot(), Preferences::default());
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "{not json").unwrap();

        let store = ConfigStore::load(path);
        assert_eq!(store.snapshot(), Preferences::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set_custom_frame(true);
        store.set_minimise_to_tray(false);
        store.set_maximised(true);
        assert!(store.add_custom_word("tauri"));
        assert!(!store.add_custom_word("tauri"));
        store.sync_blocking().unwrap();

        let reloaded = store_in(&dir);
        assert!(reloaded.custom_frame());
        assert!(!reloaded.minimise_to_tray());
        assert!(reloaded.window_state().is_maximised);
        assert_eq!(reloaded.snapshot().custom_words, vec!["tauri".to_string()]);
    }

    #[test]
    fn test_maximise_writes_in_event_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set_maximised(true);
        assert!(store.window_state().is_maximised);
        store.set_maximised(false);
        assert!(!store.window_state().is_maximised);
    }

    #[test]
    fn test_toggle_spellchecker() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.spellchecker());
        assert!(!store.toggle_spellchecker());
        assert!(store.toggle_spellchecker());
    }
}
