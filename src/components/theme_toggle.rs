//! Theme Toggle Binding
//!
//! Wires the theme controller to the toggle button, the OS colour-scheme
//! query, and the document root.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::ThemeConfig;
use crate::dom;
use crate::error::{UiError, UiResult};
use crate::preferences::{browser_store, PreferenceStore};
use crate::rate_limit::TimerSlot;
use crate::store::{use_page_store, PageStateStoreFields};
use crate::theme::{Theme, ThemeController, TransitionCircle};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const TOGGLE_ID: &str = "themeToggle";

type SharedController = Rc<RefCell<ThemeController<Box<dyn PreferenceStore>>>>;

pub fn init_theme(config: &ThemeConfig) -> UiResult<()> {
    let store = use_page_store();
    let window = dom::window()?;
    let os_query = window.match_media(DARK_QUERY)?;
    let os_dark = os_query.as_ref().map(|q| q.matches()).unwrap_or(false);

    let controller: SharedController = Rc::new(RefCell::new(ThemeController::new(
        browser_store(),
        config.storage_key.clone(),
        os_dark,
    )));
    let initial = controller.borrow().current();
    log::info!("[THEME] starting in {} mode", initial);
    store.theme().set(initial);

    // Keep the root attribute and browser chrome colour in sync
    let colors = config.clone();
    Effect::new(move |_| {
        let theme = store.theme().get();
        dom::log_failure("THEME", apply_theme(theme, &colors));
    });

    if let Some(query) = os_query {
        let controller = Rc::clone(&controller);
        dom::listen(&query, "change", move |ev| {
            let Some(ev) = ev.dyn_ref::<web_sys::MediaQueryListEvent>() else {
                return;
            };
            if let Some(theme) = controller.borrow_mut().os_preference_changed(ev.matches()) {
                log::debug!("[THEME] following OS preference: {}", theme);
                store.theme().set(theme);
            }
        })?;
    }

    let Some(toggle) = dom::by_id(TOGGLE_ID)? else {
        log::debug!("[THEME] no #{} on page, toggle disabled", TOGGLE_ID);
        return Ok(());
    };

    let commit_delay_ms = config.commit_delay_ms;
    let transition_ms = config.transition_ms;
    let pending_commit = TimerSlot::default();
    dom::listen(&toggle, "click", move |ev| {
        dom::log_failure("THEME", spawn_transition(&ev, transition_ms));

        let target = controller.borrow_mut().request_toggle();
        log::debug!("[THEME] switching to {}", target);

        // Commit once the circle has partly covered the page
        let controller = Rc::clone(&controller);
        pending_commit.schedule(commit_delay_ms, move || {
            if let Some(theme) = controller.borrow_mut().commit() {
                store.theme().set(theme);
            }
        });
    })?;

    Ok(())
}

fn apply_theme(theme: Theme, config: &ThemeConfig) -> UiResult<()> {
    let document = dom::document()?;
    if let Some(root) = document.document_element() {
        root.set_attribute("data-theme", theme.as_str())?;
    }
    if let Some(meta) = document.query_selector("meta[name=\"theme-color\"]")? {
        let color = match theme {
            Theme::Dark => &config.dark_color,
            Theme::Light => &config.light_color,
        };
        meta.set_attribute("content", color)?;
    }
    Ok(())
}

/// Grow a translucent circle out of the toggle, then remove it
fn spawn_transition(ev: &web_sys::Event, duration_ms: u32) -> UiResult<()> {
    let Some(origin) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(());
    };
    let anchor = origin.closest(".theme-toggle")?.unwrap_or(origin);
    let rect = anchor.get_bounding_client_rect();
    let (width, height) = dom::viewport_size()?;
    let circle = TransitionCircle::around(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        width,
        height,
    );

    let overlay = dom::document()?
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Js("created div is not an HtmlElement".to_string()))?;
    overlay.style().set_css_text(&circle.initial_css(duration_ms));
    dom::body()?.append_child(&overlay)?;

    let growing = overlay.clone();
    let diameter = circle.diameter_px();
    dom::next_frame(move || {
        dom::log_failure("THEME", dom::set_style(&growing, "width", &diameter));
        dom::log_failure("THEME", dom::set_style(&growing, "height", &diameter));
    })?;

    Timeout::new(duration_ms, move || overlay.remove()).forget();
    Ok(())
}
