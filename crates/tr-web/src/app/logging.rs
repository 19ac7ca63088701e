//! Browser logging setup.
//!
//! Web builds route `tracing` events to the browser console through
//! `tracing-web`. The active level lives behind a reload handle so it can be
//! changed at runtime, and is remembered in `localStorage`.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

const LOG_LEVEL_KEY: &str = "tr_web_log_level";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Initialize logging for the current platform.
///
/// Native builds (unit tests) install nothing. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
static RELOAD_HANDLE: std::sync::OnceLock<tracing_subscriber::reload::Handle<LevelFilter, tracing_subscriber::Registry>> =
    std::sync::OnceLock::new();

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time();

    let (filter, handle) = tracing_subscriber::reload::Layer::new(stored_level().unwrap_or(DEFAULT_LEVEL));
    let _ = RELOAD_HANDLE.set(handle);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

fn stored_level() -> Option<LevelFilter> {
    let storage = crate::app::storage::BrowserStorage::new(crate::app::storage::StorageType::Local);
    parse_level(&storage.get(LOG_LEVEL_KEY)?)
}

pub(crate) fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

pub(crate) fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::OFF => "off",
        LevelFilter::ERROR => "error",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "warn",
    }
}

/// Change the active level and remember it for the next page load.
pub fn set_log_level(level: LevelFilter) {
    #[cfg(feature = "web")]
    {
        if let Some(handle) = RELOAD_HANDLE.get() {
            let _ = handle.reload(level);
        }
    }

    let storage = crate::app::storage::BrowserStorage::new(crate::app::storage::StorageType::Local);
    if let Err(err) = storage.set(LOG_LEVEL_KEY, level_name(level)) {
        tracing::debug!(error = %err, "could not persist log level");
    }
}

pub fn get_log_level() -> LevelFilter {
    stored_level().unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_round_trip() {
        for level in [
            LevelFilter::OFF,
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ] {
            assert_eq!(parse_level(level_name(level)), Some(level));
        }
    }

    #[test]
    fn parse_level_is_lenient_about_case() {
        assert_eq!(parse_level(" DEBUG "), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn native_builds_report_the_default() {
        // No browser storage outside the web feature
        assert_eq!(get_log_level(), DEFAULT_LEVEL);
    }
}
