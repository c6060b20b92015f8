//! Leveled console logging.
//!
//! Lines look like `[2024-06-01T09:00:00.000Z] [INFO] message` so they can be
//! grepped out of a browser console dump.

use wasm_bindgen::JsValue;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    fn enabled(self, production: bool) -> bool {
        !(production && self == Level::Debug)
    }
}

fn format_line(level: Level, timestamp: &str, message: &str) -> String {
    format!("[{timestamp}] [{}] {message}", level.as_str())
}

fn log(level: Level, message: &str) {
    if !level.enabled(config::is_production()) {
        return;
    }
    let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
    let line = JsValue::from_str(&format_line(level, &timestamp, message));
    match level {
        Level::Debug => web_sys::console::debug_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Error => web_sys::console::error_1(&line),
    }
}

pub fn debug(message: &str) {
    log(Level::Debug, message);
}

pub fn info(message: &str) {
    log(Level::Info, message);
}

pub fn warn(message: &str) {
    log(Level::Warn, message);
}

pub fn error(message: &str) {
    log(Level::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_timestamp_and_level() {
        assert_eq!(
            format_line(Level::Warn, "2024-06-01T09:00:00.000Z", "slow response"),
            "[2024-06-01T09:00:00.000Z] [WARN] slow response"
        );
    }

    #[test]
    fn production_drops_debug_only() {
        assert!(!Level::Debug.enabled(true));
        assert!(Level::Info.enabled(true));
        assert!(Level::Error.enabled(true));
        assert!(Level::Debug.enabled(false));
    }
}
