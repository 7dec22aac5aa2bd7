//! Navigation Binding
//!
//! Active-section highlighting, the mobile menu, navbar scroll state and
//! smooth in-page anchor scrolling.

use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::config::NavigationConfig;
use crate::dom;
use crate::error::UiResult;
use crate::rate_limit::throttle;
use crate::sections::{active_section, anchor_scroll_top, link_targets, navbar_scrolled, SectionBounds};
use crate::store::{use_page_store, PageStateStoreFields, PageStore};

const NAV_LINK_SELECTOR: &str = ".nav-link";

pub fn init_navigation(config: &NavigationConfig) -> UiResult<()> {
    let store = use_page_store();
    init_section_tracking(config, store)?;
    init_menu(config, store)?;
    init_smooth_scrolling(config.anchor_offset_px)?;
    Ok(())
}

/// Read section extents from layout, in document order
fn measure_sections() -> UiResult<Vec<SectionBounds>> {
    Ok(dom::query_all("section[id]")?
        .into_iter()
        .filter_map(|section| {
            let (top, height) = dom::offset_box(&section)?;
            Some(SectionBounds::new(section.id(), top, height))
        })
        .collect())
}

fn refresh_active_section(bias: f64, store: PageStore) -> UiResult<()> {
    let sections = measure_sections()?;
    let active = active_section(&sections, dom::scroll_y()?, bias).map(str::to_string);
    if store.active_section().get_untracked() != active {
        store.active_section().set(active);
    }
    Ok(())
}

fn init_section_tracking(config: &NavigationConfig, store: PageStore) -> UiResult<()> {
    let links = dom::query_all(NAV_LINK_SELECTOR)?;
    if links.is_empty() {
        log::debug!("[NAV] no nav links, section tracking disabled");
        return Ok(());
    }

    Effect::new(move |_| {
        let active = store.active_section().get();
        for link in &links {
            let is_active = match (&active, link.get_attribute("href")) {
                (Some(id), Some(href)) => link_targets(&href, id),
                _ => false,
            };
            dom::log_failure("NAV", dom::set_class(link, "active", is_active));
        }
    });

    let bias = config.section_bias_px;
    dom::log_failure("NAV", refresh_active_section(bias, store));
    let on_scroll = throttle(
        move |_: web_sys::Event| dom::log_failure("NAV", refresh_active_section(bias, store)),
        config.scroll_throttle_ms,
    );
    let window = dom::window()?;
    dom::listen(&window, "scroll", on_scroll)
}

fn init_menu(config: &NavigationConfig, store: PageStore) -> UiResult<()> {
    let (Some(hamburger), Some(nav_links), Some(navbar)) =
        (dom::by_id("hamburger")?, dom::by_id("navLinks")?, dom::by_id("navbar")?)
    else {
        log::debug!("[NAV] hamburger, navLinks or navbar missing, menu disabled");
        return Ok(());
    };

    {
        let hamburger = hamburger.clone();
        Effect::new(move |_| {
            let open = store.menu_open().get();
            dom::log_failure("NAV", apply_menu(&hamburger, &nav_links, open));
        });
    }

    Effect::new(move |_| {
        let scrolled = store.navbar_scrolled().get();
        dom::log_failure("NAV", dom::set_class(&navbar, "scrolled", scrolled));
    });

    dom::listen(&hamburger, "click", move |_| {
        store.menu_open().update(|open| *open = !*open);
    })?;

    for link in dom::query_all(NAV_LINK_SELECTOR)? {
        dom::listen(&link, "click", move |_| store.menu_open().set(false))?;
    }

    let threshold = config.scrolled_threshold_px;
    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_| {
        let Ok(y) = dom::scroll_y() else { return };
        let scrolled = navbar_scrolled(y, threshold);
        if store.navbar_scrolled().get_untracked() != scrolled {
            store.navbar_scrolled().set(scrolled);
        }
    })
}

fn apply_menu(hamburger: &Element, nav_links: &Element, open: bool) -> UiResult<()> {
    dom::set_class(hamburger, "active", open)?;
    dom::set_class(nav_links, "active", open)?;
    // Lock page scrolling behind the open menu
    dom::body()?
        .style()
        .set_property("overflow", if open { "hidden" } else { "" })?;
    Ok(())
}

fn init_smooth_scrolling(offset: f64) -> UiResult<()> {
    for anchor in dom::query_all("a[href^=\"#\"]")? {
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            dom::log_failure("NAV", scroll_to_fragment(&href, offset));
        })?;
    }
    Ok(())
}

fn scroll_to_fragment(href: &str, offset: f64) -> UiResult<()> {
    let id = href.trim_start_matches('#');
    if id.is_empty() {
        return Ok(());
    }
    let Some(target) = dom::by_id(id)? else {
        return Ok(());
    };
    let Some((top, _)) = dom::offset_box(&target) else {
        return Ok(());
    };

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(top, offset));
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
