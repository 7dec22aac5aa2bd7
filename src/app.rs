//! Portfolio Page App
//!
//! Root component: loads the configuration, provides the page store and
//! attaches every behaviour to the existing static markup.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    init_contact_form, init_flourishes, init_navigation, init_reveal, init_theme, init_typewriter,
};
use crate::config::{PageConfig, CONFIG_ELEMENT_ID};
use crate::dom;
use crate::store::{PageState, PageStore};
use crate::theme::Theme;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    let store: PageStore = Store::new(PageState::new(Theme::Light));
    provide_context(store);

    dom::log_failure("THEME", init_theme(&config.theme));
    dom::log_failure("NAV", init_navigation(&config.navigation));
    dom::log_failure("REVEAL", init_reveal(&config.reveal));
    dom::log_failure("TYPEWRITER", init_typewriter(&config.typewriter));
    dom::log_failure("FORM", init_contact_form(&config.form));
    dom::log_failure("FLOURISH", init_flourishes(&config.flourish));

    log::info!("[APP] page behaviours attached");
}

/// Defaults, overridden by the page's JSON config block when present
fn load_config() -> PageConfig {
    let raw = match dom::by_id(CONFIG_ELEMENT_ID) {
        Ok(Some(element)) => element.text_content(),
        Ok(None) => None,
        Err(e) => {
            log::warn!("[APP] {}", e);
            None
        }
    };
    let Some(raw) = raw else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => {
            log::debug!("[APP] loaded #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("[APP] ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            PageConfig::default()
        }
    }
}
