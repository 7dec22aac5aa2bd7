//! Contact Form Binding
//!
//! Inline validation on blur, cleared on input, and a simulated submit
//! with loading/success feedback on the submit button.

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::FormConfig;
use crate::dom;
use crate::error::{UiError, UiResult};
use crate::rate_limit::TimerSlot;
use crate::store::{use_page_store, PageStateStoreFields};
use crate::validation::{validate_form, FieldInput, FieldKind, FieldRules, FieldState, SubmitPhase};

const FORM_ID: &str = "contactForm";
const ERROR_CLASS: &str = "field-error";

pub fn init_contact_form(config: &FormConfig) -> UiResult<()> {
    let store = use_page_store();
    let Some(form) = dom::by_id(FORM_ID)? else {
        log::debug!("[FORM] no #{} on page", FORM_ID);
        return Ok(());
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| UiError::Js(format!("#{} is not a form", FORM_ID)))?;

    let fields = dom::query_within(&form, "input, textarea")?;
    for field in &fields {
        let blurred = field.clone();
        dom::listen(field, "blur", move |_| {
            let input = read_field(&blurred);
            let state = FieldState::from_check(input.rules.check(&input.value));
            dom::log_failure("FORM", show_field_state(&blurred, &state));
        })?;
        let edited = field.clone();
        dom::listen(field, "input", move |_| {
            dom::log_failure("FORM", show_field_state(&edited, &FieldState::Untouched));
        })?;
    }

    let button = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());
    if let Some(button) = button {
        // Captured once so a resubmit during feedback can't record the success label
        let original_label = button.inner_html();
        let success_label = config.success_label.clone();
        Effect::new(move |_| {
            let phase = store.submit_phase().get();
            render_submit_phase(&button, phase, &original_label, &success_label);
        });
    }

    let feedback = TimerSlot::default();
    let loading_ms = config.loading_ms;
    let success_ms = config.success_ms;
    let submitted = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();

        let inputs: Vec<FieldInput> = fields.iter().map(read_field).collect();
        let (states, record) = validate_form(&inputs);
        for (field, state) in fields.iter().zip(&states) {
            dom::log_failure("FORM", show_field_state(field, state));
        }
        let Some(record) = record else {
            return;
        };

        // Plain object rather than a JS Map, so it reads well in devtools
        match record.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
            Ok(value) => web_sys::console::log_2(&"Form submitted:".into(), &value),
            Err(e) => log::warn!("[FORM] could not serialise submission: {}", e),
        }
        log::info!("[FORM] submitted {} fields", record.len());

        // A resubmit replaces whatever feedback step is still pending
        store.submit_phase().set(SubmitPhase::Loading);
        let form = submitted.clone();
        let next = feedback.clone();
        feedback.schedule(loading_ms, move || {
            store.submit_phase().update(|phase| *phase = phase.next());
            next.schedule(success_ms, move || {
                store.submit_phase().update(|phase| *phase = phase.next());
                form.reset();
            });
        });
    })?;

    Ok(())
}

fn read_field(element: &Element) -> FieldInput {
    let value = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    };
    FieldInput {
        name: element.get_attribute("name").unwrap_or_default(),
        rules: FieldRules {
            required: element.has_attribute("required"),
            kind: FieldKind::from_type_attr(element.get_attribute("type").as_deref()),
        },
        value,
    }
}

/// Sync classes and the error message under the field
fn show_field_state(field: &Element, state: &FieldState) -> UiResult<()> {
    field.class_list().remove_2("valid", "invalid")?;
    if let Some(class) = state.css_class() {
        dom::set_class(field, class, true)?;
    }

    let Some(parent) = field.parent_element() else {
        return Ok(());
    };
    if let Some(existing) = parent.query_selector(&format!(".{}", ERROR_CLASS))? {
        existing.remove();
    }
    if let Some(message) = state.message() {
        let error = dom::document()?.create_element("span")?;
        error.set_class_name(ERROR_CLASS);
        error.set_text_content(Some(&message));
        parent.append_child(&error)?;
    }
    Ok(())
}

fn render_submit_phase(button: &HtmlButtonElement, phase: SubmitPhase, original: &str, success: &str) {
    for shown in SubmitPhase::STYLED {
        if let Some(class) = shown.css_class() {
            dom::log_failure("FORM", dom::set_class(button, class, shown == phase));
        }
    }
    button.set_disabled(phase.button_disabled());
    match phase {
        SubmitPhase::Success => button.set_inner_html(&format!(
            "<span class=\"btn-text\">{}</span><div class=\"btn-arrow\">\u{2713}</div>",
            success
        )),
        SubmitPhase::Idle => button.set_inner_html(original),
        SubmitPhase::Loading => {}
    }
}
