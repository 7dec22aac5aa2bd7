//! Theme Controller
//!
//! Light/dark theme with a persisted explicit choice and an OS-preference
//! fallback. Toggles are two-phase: `request_toggle` picks the target while
//! the transition overlay plays, `commit` applies and persists it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::preferences::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
    /// Target chosen by a toggle whose commit has not run yet
    pending: Option<Theme>,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Start from the stored choice, else the OS preference
    pub fn new(store: S, key: impl Into<String>, os_prefers_dark: bool) -> Self {
        let key = key.into();
        let current = stored_theme(&store, &key).unwrap_or(Theme::from_os(os_prefers_dark));
        Self {
            store,
            key,
            current,
            pending: None,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn has_explicit_preference(&self) -> bool {
        stored_theme(&self.store, &self.key).is_some()
    }

    /// Pick the toggle target. A toggle while another is pending flips the
    /// pending target, so double toggles cancel out.
    pub fn request_toggle(&mut self) -> Theme {
        let target = self.pending.unwrap_or(self.current).toggled();
        self.pending = Some(target);
        target
    }

    /// Apply and persist the pending target
    pub fn commit(&mut self) -> Option<Theme> {
        let target = self.pending.take()?;
        self.current = target;
        if let Err(e) = self.store.set(&self.key, target.as_str()) {
            log::warn!("[THEME] could not persist {}: {}", target, e);
        }
        Some(target)
    }

    /// Follow the OS only while the user has not chosen explicitly
    pub fn os_preference_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_preference() {
            return None;
        }
        self.current = Theme::from_os(prefers_dark);
        Some(self.current)
    }
}

fn stored_theme<S: PreferenceStore>(store: &S, key: &str) -> Option<Theme> {
    store.get(key).and_then(|raw| raw.parse().ok())
}

/// Expanding circle played over the page during a theme switch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionCircle {
    pub center_x: f64,
    pub center_y: f64,
    pub diameter: f64,
}

impl TransitionCircle {
    /// Centred on the toggle's bounding box. From any origin inside the
    /// viewport a radius of one diagonal reaches every corner.
    pub fn around(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Self {
        Self {
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
            diameter: 2.0 * viewport_width.hypot(viewport_height),
        }
    }

    /// Initial inline style: zero-sized at the centre
    pub fn initial_css(&self, duration_ms: u32) -> String {
        format!(
            "position: fixed; top: {}px; left: {}px; width: 0; height: 0; \
             background: var(--accent-primary); border-radius: 50%; \
             transform: translate(-50%, -50%); pointer-events: none; z-index: 9999; \
             transition: all {}ms cubic-bezier(0.25, 0.46, 0.45, 0.94); opacity: 0.1;",
            self.center_y, self.center_x, duration_ms
        )
    }

    pub fn diameter_px(&self) -> String {
        format!("{}px", self.diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;
    use std::rc::Rc;

    fn controller(store: &Rc<MemoryStore>, os_dark: bool) -> ThemeController<Rc<MemoryStore>> {
        ThemeController::new(Rc::clone(store), "theme", os_dark)
    }

    /// Click then let the delayed commit run
    fn click_and_commit(themes: &mut ThemeController<Rc<MemoryStore>>) -> Option<Theme> {
        themes.request_toggle();
        themes.commit()
    }

    #[test]
    fn test_theme_parse_and_display() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn test_initial_theme_prefers_stored_value() {
        let store = Rc::new(MemoryStore::default());
        store.set("theme", "light").unwrap();
        assert_eq!(controller(&store, true).current(), Theme::Light);
    }

    #[test]
    fn test_initial_theme_falls_back_to_os() {
        let store = Rc::new(MemoryStore::default());
        assert_eq!(controller(&store, true).current(), Theme::Dark);
        assert_eq!(controller(&store, false).current(), Theme::Light);

        store.set("theme", "garbage").unwrap();
        assert_eq!(controller(&store, true).current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_opposite() {
        let store = Rc::new(MemoryStore::default());
        store.set("theme", "light").unwrap();
        let mut themes = controller(&store, false);

        assert_eq!(click_and_commit(&mut themes), Some(Theme::Dark));
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let store = Rc::new(MemoryStore::default());
        store.set("theme", "dark").unwrap();
        let mut themes = controller(&store, false);

        click_and_commit(&mut themes);
        click_and_commit(&mut themes);
        assert_eq!(themes.current(), Theme::Dark);
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_rapid_toggle_before_commit_cancels_out() {
        let store = Rc::new(MemoryStore::default());
        store.set("theme", "light").unwrap();
        let mut themes = controller(&store, false);

        assert_eq!(themes.request_toggle(), Theme::Dark);
        assert_eq!(themes.request_toggle(), Theme::Light);
        assert_eq!(themes.current(), Theme::Light);

        assert_eq!(themes.commit(), Some(Theme::Light));
        assert_eq!(themes.commit(), None);
        assert_eq!(store.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_os_change_followed_only_without_explicit_choice() {
        let store = Rc::new(MemoryStore::default());
        let mut themes = controller(&store, false);

        assert_eq!(themes.os_preference_changed(true), Some(Theme::Dark));
        assert_eq!(themes.current(), Theme::Dark);
        // Following the OS does not count as an explicit choice
        assert!(!themes.has_explicit_preference());

        click_and_commit(&mut themes);
        assert_eq!(themes.os_preference_changed(true), None);
        assert_eq!(themes.current(), Theme::Light);
    }

    #[test]
    fn test_transition_circle_covers_viewport() {
        let circle = TransitionCircle::around(980.0, 10.0, 40.0, 40.0, 1024.0, 768.0);
        assert_eq!(circle.center_x, 1000.0);
        assert_eq!(circle.center_y, 30.0);
        assert_eq!(circle.diameter, 2560.0);
        assert_eq!(circle.diameter_px(), "2560px");

        let css = circle.initial_css(800);
        assert!(css.contains("top: 30px; left: 1000px;"));
        assert!(css.contains("transition: all 800ms"));
    }
}
