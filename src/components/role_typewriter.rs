//! Role Typewriter Component
//!
//! Mounted into `#roleText`; cycles through the configured roles.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::TypewriterConfig;
use crate::dom;
use crate::error::UiResult;
use crate::typewriter::Typewriter;

const HOST_ID: &str = "roleText";

#[component]
pub fn RoleTypewriter(writer: Typewriter, start_delay_ms: u32) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    spawn_local(async move {
        let mut writer = writer;
        TimeoutFuture::new(start_delay_ms).await;
        loop {
            let frame = writer.step();
            set_text.set(frame.text);
            TimeoutFuture::new(frame.next_delay_ms).await;
        }
    });

    view! { {move || text.get()} }
}

pub fn init_typewriter(config: &TypewriterConfig) -> UiResult<()> {
    let Some(host) = dom::by_id(HOST_ID)?.and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        log::debug!("[TYPEWRITER] no #{} on page", HOST_ID);
        return Ok(());
    };
    let Some(writer) = Typewriter::new(config) else {
        log::debug!("[TYPEWRITER] no roles configured");
        return Ok(());
    };

    // Replace any placeholder text with the animated view
    host.set_text_content(None);
    let start_delay_ms = config.start_delay_ms;
    leptos::mount::mount_to(host, move || view! { <RoleTypewriter writer=writer start_delay_ms=start_delay_ms /> })
        .forget();
    Ok(())
}
