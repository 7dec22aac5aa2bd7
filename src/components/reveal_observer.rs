//! Reveal Observer Binding
//!
//! Feeds IntersectionObserver reports for `.fade-in` elements into their
//! reveal state machines and applies the resulting effects.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::dom;
use crate::error::UiResult;
use crate::reveal::{RevealEffect, RevealKind, RevealTarget, RevealTiming};

const PROGRESS_BAR: &str = ".progress-bar";

pub fn init_reveal(config: &RevealConfig) -> UiResult<()> {
    reset_progress_bars()?;

    let elements = dom::query_all(".fade-in")?;
    if elements.is_empty() {
        log::debug!("[REVEAL] nothing to observe");
        return Ok(());
    }

    let cards = dom::query_all(".story-card")?;
    let targets: Vec<(Element, RevealTarget)> = elements
        .into_iter()
        .map(|element| {
            let target = reveal_target(&element, &cards);
            (element, target)
        })
        .collect();
    let observed: Vec<Element> = targets.iter().map(|(element, _)| element.clone()).collect();
    let targets = Rc::new(RefCell::new(targets));

    let timing = RevealTiming {
        progress_delay_ms: config.progress_delay_ms,
        stagger_step_ms: config.stagger_step_ms,
    };

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let element = entry.target();
                let effects = {
                    let mut targets = targets.borrow_mut();
                    let Some((_, target)) = targets.iter_mut().find(|(el, _)| *el == element) else {
                        continue;
                    };
                    target.on_intersection(entry.is_intersecting(), timing)
                };
                if effects.is_empty() {
                    continue;
                }
                // Visible is terminal; stop watching
                observer.unobserve(&element);
                for effect in effects {
                    dom::log_failure("REVEAL", apply_effect(&element, effect));
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for element in &observed {
        observer.observe(element);
    }
    log::debug!("[REVEAL] observing {} elements", observed.len());
    Ok(())
}

/// Bars start empty and grow when their skill entry is revealed
fn reset_progress_bars() -> UiResult<()> {
    for bar in dom::query_all(PROGRESS_BAR)? {
        dom::set_style(&bar, "width", "0%")?;
    }
    Ok(())
}

fn reveal_target(element: &Element, cards: &[Element]) -> RevealTarget {
    let classes = element.class_list();
    if classes.contains("skill-item") {
        let width = element
            .query_selector(PROGRESS_BAR)
            .ok()
            .flatten()
            .and_then(|bar| bar.get_attribute("data-width"));
        let target = RevealTarget::new(RevealKind::SkillItem);
        return match width {
            Some(width) => target.with_bar_width(width),
            None => target,
        };
    }
    if classes.contains("story-card") {
        if let Some(index) = cards.iter().position(|card| card == element) {
            return RevealTarget::new(RevealKind::StoryCard { index });
        }
    }
    RevealTarget::new(RevealKind::Generic)
}

fn apply_effect(element: &Element, effect: RevealEffect) -> UiResult<()> {
    match effect {
        RevealEffect::Show => dom::set_class(element, "visible", true),
        RevealEffect::AnimateBar { delay_ms, width } => {
            let Some(bar) = element.query_selector(PROGRESS_BAR)? else {
                return Ok(());
            };
            Timeout::new(delay_ms, move || {
                dom::log_failure("REVEAL", dom::set_style(&bar, "width", &width));
            })
            .forget();
            Ok(())
        }
        RevealEffect::Stagger { delay_ms } => {
            let card = element.clone();
            Timeout::new(delay_ms, move || {
                dom::log_failure("REVEAL", settle_card(&card));
            })
            .forget();
            Ok(())
        }
    }
}

fn settle_card(card: &Element) -> UiResult<()> {
    dom::set_style(card, "transform", "translateY(0)")?;
    dom::set_style(card, "opacity", "1")
}
