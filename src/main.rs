//! Portfolio Page Frontend Entry Point

mod app;
mod components;
mod config;
mod dom;
mod error;
mod flourish;
mod preferences;
mod rate_limit;
mod reveal;
mod sections;
mod store;
mod theme;
mod typewriter;
mod validation;

use app::App;
use leptos::prelude::*;
use rolling_logger::RollingLogger;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// Lines of recent log output kept in memory
const LOG_HISTORY: usize = 200;
/// Global function returning the recent log lines, callable from devtools
const LOG_HISTORY_GLOBAL: &str = "folioLogs";

fn main() {
    console_error_panic_hook::set_once();
    match rolling_logger::init(LOG_HISTORY, log::LevelFilter::Debug) {
        Ok(logger) => expose_log_history(logger),
        Err(e) => web_sys::console::warn_1(&format!("logger already set: {}", e).into()),
    }
    mount_to_body(App);
}

fn expose_log_history(logger: &'static RollingLogger) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let read = Closure::<dyn Fn() -> JsValue>::new(move || JsValue::from_str(&logger.dump()));
    match js_sys::Reflect::set(&window, &JsValue::from_str(LOG_HISTORY_GLOBAL), read.as_ref()) {
        Ok(_) => log::debug!("[APP] recent log lines available via {}()", LOG_HISTORY_GLOBAL),
        Err(e) => log::warn!("[APP] could not expose log history: {:?}", e),
    }
    read.forget();
}
