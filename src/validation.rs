//! Contact Form Validation
//!
//! Field rules, per-field validity, and the submit feedback sequence.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Validation failure; `Display` is the message shown under the field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Input type as far as validation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

impl FieldKind {
    /// From an `<input type=..>` attribute (textareas have none)
    pub fn from_type_attr(attr: Option<&str>) -> Self {
        match attr {
            Some(t) if t.eq_ignore_ascii_case("email") => FieldKind::Email,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldRules {
    /// Check a raw field value. Surrounding whitespace is ignored.
    pub fn check(&self, raw: &str) -> Result<(), ValidationError> {
        let value = raw.trim();
        if self.required && value.is_empty() {
            return Err(ValidationError::Required);
        }
        if self.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(ValidationError),
}

impl FieldState {
    pub fn from_check(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => FieldState::Valid,
            Err(e) => FieldState::Invalid(e),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    /// Class to put on the field element, if any
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            FieldState::Untouched => None,
            FieldState::Valid => Some("valid"),
            FieldState::Invalid(_) => Some("invalid"),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            FieldState::Invalid(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// One form field's name, rules and current value
#[derive(Debug, Clone)]
pub struct FieldInput {
    pub name: String,
    pub rules: FieldRules,
    pub value: String,
}

/// Validate every field (no short-circuit, so each one gets its feedback).
/// Returns the per-field states and, when all pass, the submitted record.
pub fn validate_form(fields: &[FieldInput]) -> (Vec<FieldState>, Option<BTreeMap<String, String>>) {
    let states: Vec<FieldState> = fields
        .iter()
        .map(|field| FieldState::from_check(field.rules.check(&field.value)))
        .collect();

    if states.iter().any(FieldState::is_invalid) {
        return (states, None);
    }

    let record = fields
        .iter()
        .filter(|field| !field.name.is_empty())
        .map(|field| (field.name.clone(), field.value.clone()))
        .collect();
    (states, Some(record))
}

/// Submit button feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Loading,
    Success,
}

impl SubmitPhase {
    /// Idle -> Loading -> Success -> Idle
    pub fn next(self) -> SubmitPhase {
        match self {
            SubmitPhase::Idle => SubmitPhase::Loading,
            SubmitPhase::Loading => SubmitPhase::Success,
            SubmitPhase::Success => SubmitPhase::Idle,
        }
    }

    /// Phases that put a class on the submit button
    pub const STYLED: [SubmitPhase; 2] = [SubmitPhase::Loading, SubmitPhase::Success];

    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Loading => Some("loading"),
            SubmitPhase::Success => Some("success"),
        }
    }

    pub fn button_disabled(self) -> bool {
        self != SubmitPhase::Idle
    }
}
