//! Page State Store
//!
//! Uses Leptos reactive_stores so each DOM binding reacts only to the field
//! it renders.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::theme::Theme;
use crate::validation::SubmitPhase;

#[derive(Clone, Debug, Store)]
pub struct PageState {
    /// Theme applied to the document root
    pub theme: Theme,
    /// Id of the section under the scroll reference point
    pub active_section: Option<String>,
    /// Mobile navigation menu open
    pub menu_open: bool,
    /// Navbar past its scroll threshold
    pub navbar_scrolled: bool,
    /// Contact form submit feedback
    pub submit_phase: SubmitPhase,
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            active_section: None,
            menu_open: false,
            navbar_scrolled: false,
            submit_phase: SubmitPhase::Idle,
        }
    }
}

pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}
