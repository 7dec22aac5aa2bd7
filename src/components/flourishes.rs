//! Decorative Flourishes
//!
//! Profile tilt, social hover colours, star twinkle, floating-shape
//! parallax, load fade-in and the mobile flag.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ResizeObserver};

use crate::config::FlourishConfig;
use crate::dom;
use crate::error::UiResult;
use crate::flourish::{is_mobile, parallax_offset, platform_color, resting_transform, tilt_transform, TWINKLE_ANIMATION};
use crate::rate_limit::{debounce, throttle};

pub fn init_flourishes(config: &FlourishConfig) -> UiResult<()> {
    init_profile_tilt(config.tilt_degrees)?;
    init_social_links()?;
    init_stars()?;
    init_parallax(config)?;
    init_page_fade_in()?;
    init_mobile_flag(config)?;
    Ok(())
}

fn init_profile_tilt(max_degrees: f64) -> UiResult<()> {
    let Some(frame) = dom::document()?.query_selector(".profile-frame")? else {
        return Ok(());
    };

    let tilted = frame.clone();
    dom::listen(&frame, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<MouseEvent>() else { return };
        let rect = tilted.get_bounding_client_rect();
        let transform = tilt_transform(
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            max_degrees,
        );
        dom::log_failure("FLOURISH", dom::set_style(&tilted, "transform", &transform));
    })?;

    let resting = frame.clone();
    dom::listen(&frame, "mouseleave", move |_| {
        dom::log_failure("FLOURISH", dom::set_style(&resting, "transform", &resting_transform()));
    })
}

fn init_social_links() -> UiResult<()> {
    for link in dom::query_all(".social-link[data-platform]")? {
        let color = platform_color(&link.get_attribute("data-platform").unwrap_or_default());
        let hovered = link.clone();
        dom::listen(&link, "mouseenter", move |_| {
            dom::log_failure("FLOURISH", dom::set_style(&hovered, "--hover-color", color));
        })?;
    }
    Ok(())
}

fn init_stars() -> UiResult<()> {
    for star in dom::query_all(".deco-star")? {
        let hovered = star.clone();
        dom::listen(&star, "mouseenter", move |_| {
            dom::log_failure("FLOURISH", dom::set_style(&hovered, "animation", TWINKLE_ANIMATION));
        })?;
    }
    Ok(())
}

fn init_parallax(config: &FlourishConfig) -> UiResult<()> {
    let shapes = dom::query_all(".floating-shape")?;
    if shapes.is_empty() {
        return Ok(());
    }
    let (base, step) = (config.parallax_base, config.parallax_step);
    let on_scroll = throttle(
        move |_: web_sys::Event| {
            let Ok(scrolled) = dom::scroll_y() else { return };
            move_shapes(&shapes, scrolled, base, step);
        },
        config.parallax_throttle_ms,
    );
    let window = dom::window()?;
    dom::listen(&window, "scroll", on_scroll)
}

fn move_shapes(shapes: &[Element], scrolled: f64, base: f64, step: f64) {
    for (index, shape) in shapes.iter().enumerate() {
        let y = parallax_offset(scrolled, index, base, step);
        dom::log_failure(
            "FLOURISH",
            dom::set_style(shape, "transform", &format!("translateY({}px)", y)),
        );
    }
}

fn init_page_fade_in() -> UiResult<()> {
    let fade_in = || dom::log_failure("FLOURISH", start_fade_in());

    // The module may start after `load` has already fired
    if dom::document()?.ready_state() == "complete" {
        fade_in();
        Ok(())
    } else {
        let window = dom::window()?;
        dom::listen(&window, "load", move |_| fade_in())
    }
}

fn start_fade_in() -> UiResult<()> {
    let body = dom::body()?;
    dom::set_style(&body, "opacity", "0")?;
    dom::set_style(&body, "transition", "opacity 0.5s ease-in-out")?;
    gloo_timers::callback::Timeout::new(100, move || {
        dom::log_failure("FLOURISH", dom::set_style(&body, "opacity", "1"));
    })
    .forget();
    Ok(())
}

fn init_mobile_flag(config: &FlourishConfig) -> UiResult<()> {
    let Some(root) = dom::document()?.document_element() else {
        return Ok(());
    };
    let breakpoint = config.mobile_breakpoint_px;
    let flagged = root.clone();
    let mut update = debounce(
        move |_: ()| {
            let Ok((width, _)) = dom::viewport_size() else { return };
            let flag = if is_mobile(width, breakpoint) { "1" } else { "0" };
            dom::log_failure("FLOURISH", dom::set_style(&flagged, "--is-mobile", flag));
        },
        config.resize_debounce_ms,
    );

    let on_resize = Closure::<dyn FnMut(js_sys::Array, ResizeObserver)>::new(
        move |_entries: js_sys::Array, _observer: ResizeObserver| update(()),
    );
    let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    observer.observe(&root);
    Ok(())
}
