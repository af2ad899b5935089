//! One-time injection into the hosted content.
//!
//! After the first finished page load, the shell pushes a static set of
//! presentation overrides and an observer script into the hosted document,
//! then flushes the preference store. Neither injection is awaited before
//! the flush; failures are logged and otherwise ignored. Reloads do not
//! re-run the bridge.

use std::sync::atomic::{AtomicBool, Ordering};

use tauri::{Runtime, Webview};

use crate::config::ConfigStore;

/// Presentation override rules injected into the hosted document.
const OVERRIDE_CSS: &str = include_str!("../../assets/override.css");

/// Overlay-suppression observer and zoom-chord rebinding.
const BRIDGE_JS: &str = include_str!("../../assets/bridge.js");

/// One-shot latch consumed on the first finished load of the main webview.
#[derive(Debug, Default)]
pub struct ContentBridge {
    fired: AtomicBool,
}

impl ContentBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the latch. Returns true exactly once.
    pub fn try_fire(&self) -> bool {
        !self.fired.swap(true, Ordering::SeqCst)
    }
}

/// Build a script that installs `css` as a `<style>` element.
pub fn style_injection_script(css: &str) -> String {
    // JSON-encode the stylesheet to obtain a valid JS string literal
    let literal = serde_json::to_string(css).unwrap_or_else(|_| String::from("\"\""));
    format!(
        r#"(() => {{
  const style = document.createElement("style");
  style.id = "tidechat-overrides";
  style.textContent = {literal};
  document.head.appendChild(style);
}})();"#
    )
}

/// Push the overrides and the observer script, then request a flush.
pub fn inject<R: Runtime>(webview: &Webview<R>, config: &ConfigStore) {
    tracing::debug!("injecting content bridge");

    if let Err(e) = webview.eval(style_injection_script(OVERRIDE_CSS).as_str()) {
        tracing::warn!(error = %e, "style injection failed");
    }
    if let Err(e) = webview.eval(BRIDGE_JS) {
        tracing::warn!(error = %e, "bridge script injection failed");
    }

    config.sync();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_exactly_once() {
        let bridge = ContentBridge::new();

        let fired: Vec<bool> = (0..5).map(|_| bridge.try_fire()).collect();
        assert_eq!(fired, vec![true, false, false, false, false]);
    }

    #[test]
    fn test_style_script_embeds_stylesheet() {
        let script = style_injection_script("body { color: red; }\n.x { \"q\" }");
        assert!(script.contains("document.createElement"));
        // the stylesheet must survive as a single escaped JS literal
        assert!(script.contains("body { color: red; }"));
        assert!(script.contains("\\\"q\\\""));
    }

    #[test]
    fn test_bundled_assets_are_not_empty() {
        assert!(OVERRIDE_CSS.contains("tidechat-overlay-hidden"));
        assert!(BRIDGE_JS.contains("MutationObserver"));
    }
}
