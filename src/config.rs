//! Page Configuration
//!
//! Every tunable of the page behaviour in one place. Defaults describe the
//! stock portfolio page; a `<script type="application/json" id="folio-config">`
//! block may override any subset of fields.

use serde::Deserialize;

use crate::error::UiError;

/// Id of the optional JSON config block in the page
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub theme: ThemeConfig,
    pub form: FormConfig,
    pub typewriter: TypewriterConfig,
    pub flourish: FlourishConfig,
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationConfig {
    /// Lookahead added to the scroll offset before matching sections
    pub section_bias_px: f64,
    pub scroll_throttle_ms: u32,
    /// Navbar is "scrolled" past this offset
    pub scrolled_threshold_px: f64,
    /// Anchor scrolling lands this far above the target
    pub anchor_offset_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            section_bias_px: 150.0,
            scroll_throttle_ms: 100,
            scrolled_threshold_px: 50.0,
            anchor_offset_px: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub progress_delay_ms: u32,
    pub stagger_step_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            progress_delay_ms: 200,
            stagger_step_ms: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub storage_key: String,
    pub commit_delay_ms: u32,
    pub transition_ms: u32,
    pub dark_color: String,
    pub light_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            commit_delay_ms: 150,
            transition_ms: 800,
            dark_color: "#0f0f0f".to_string(),
            light_color: "#fdfcfb".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub loading_ms: u32,
    pub success_ms: u32,
    pub success_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            loading_ms: 1500,
            success_ms: 2000,
            success_label: "Message Sent!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypewriterConfig {
    pub roles: Vec<String>,
    pub start_delay_ms: u32,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            roles: [
                "Digital Artisan",
                "Creative Developer",
                "UI/UX Designer",
                "Frontend Specialist",
                "Problem Solver",
            ]
            .iter()
            .map(|r| r.to_string())
            .collect(),
            start_delay_ms: 1500,
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlourishConfig {
    pub tilt_degrees: f64,
    pub parallax_throttle_ms: u32,
    pub parallax_base: f64,
    pub parallax_step: f64,
    pub mobile_breakpoint_px: f64,
    pub resize_debounce_ms: u32,
}

impl Default for FlourishConfig {
    fn default() -> Self {
        Self {
            tilt_degrees: 5.0,
            parallax_throttle_ms: 16,
            parallax_base: 0.1,
            parallax_step: 0.05,
            mobile_breakpoint_px: 768.0,
            resize_debounce_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.navigation.section_bias_px, 150.0);
        assert_eq!(config.navigation.scroll_throttle_ms, 100);
        assert_eq!(config.theme.commit_delay_ms, 150);
        assert_eq!(config.theme.dark_color, "#0f0f0f");
        assert_eq!(config.form.loading_ms, 1500);
        assert_eq!(config.typewriter.roles.len(), 5);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PageConfig::from_json(
            r#"{ "navigation": { "sectionBiasPx": 90 }, "typewriter": { "roles": ["Rustacean"] } }"#,
        )
        .unwrap();
        assert_eq!(config.navigation.section_bias_px, 90.0);
        assert_eq!(config.navigation.anchor_offset_px, 80.0);
        assert_eq!(config.typewriter.roles, vec!["Rustacean".to_string()]);
        assert_eq!(config.typewriter.type_ms, 100);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            PageConfig::from_json("{ not json"),
            Err(UiError::Config(_))
        ));
    }
}
