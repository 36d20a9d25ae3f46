//! Console Logging
//!
//! `log` backend that writes to the browser console.

use std::fmt::Display;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `[store] message`, using the last segment of the module path
pub fn format_line(target: &str, message: &dyn Display) -> String {
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::log_1(&line),
            Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}
