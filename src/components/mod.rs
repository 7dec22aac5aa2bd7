//! Page Bindings
//!
//! Each binding attaches one feature to the static page and quietly skips
//! itself when its elements are missing.

mod contact_form;
mod flourishes;
mod navigation;
mod reveal_observer;
mod role_typewriter;
mod theme_toggle;

pub use contact_form::init_contact_form;
pub use flourishes::init_flourishes;
pub use navigation::init_navigation;
pub use reveal_observer::init_reveal;
pub use role_typewriter::init_typewriter;
pub use theme_toggle::init_theme;
