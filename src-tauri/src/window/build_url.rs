//! Build target resolution.
//!
//! The URL the main window loads is fixed once at process start: either an
//! operator-supplied `--force-server` override or the default remote
//! endpoint. It is never re-resolved, not even across reloads.

use once_cell::sync::OnceCell;
use url::Url;

/// Default remote endpoint serving the hosted client.
const DEFAULT_APP_URL: &str = "https://app.tidechat.io/";

static BUILD_URL: OnceCell<Url> = OnceCell::new();

/// Pick the build target from an optional operator override.
pub fn resolve(override_url: Option<Url>) -> Url {
    override_url
        .unwrap_or_else(|| Url::parse(DEFAULT_APP_URL).expect("default build URL is valid"))
}

/// Fix the build target for the process lifetime. A second call is ignored.
pub fn init(override_url: Option<Url>) {
    let url = resolve(override_url);
    if BUILD_URL.set(url).is_err() {
        tracing::warn!("build URL already initialized, override ignored");
    }
}

/// The URL the main window loads.
pub fn get() -> &'static Url {
    BUILD_URL.get_or_init(|| resolve(None))
}

/// Whether `url` is the default endpoint already covered by the static
/// capability file.
pub fn is_default(url: &Url) -> bool {
    url.as_str() == DEFAULT_APP_URL
}

/// Capability URL pattern covering every path on the target's origin.
pub fn origin_pattern(url: &Url) -> String {
    format!("{}/*", url.origin().ascii_serialization())
}
