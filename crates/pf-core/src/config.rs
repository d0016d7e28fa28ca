//! Page configuration.
//!
//! Selectors, timings and thresholds are injected here instead of being
//! looked up ad hoc. The browser layer reads an optional JSON document from
//! `<script type="application/json" id="portfolio-config">`; every field has a
//! default, so an empty object (or no element at all) yields the stock page.

use crate::counter::CounterStrategy;
use crate::error::ConfigError;
use pf_types::Variant;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub variant: Variant,
    pub selectors: Selectors,
    pub timings: Timings,
    pub thresholds: Thresholds,
    pub counter: CounterSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Selectors {
    pub mobile_menu: String,
    pub nav_menu: String,
    pub nav_link: String,
    pub anchor: String,
    pub navbar: String,
    pub hero: String,
    pub progress_bar: String,
    pub contact_form: String,
    pub form_status: String,
    pub form_fields: String,
    pub submit_button: String,
    pub button_label: String,
    pub button_icon: String,
    pub counter: String,
    pub typing: String,
    /// Class the typing element must also carry for the effect to run.
    pub typing_marker: String,
    pub entrance: String,
    pub interactive: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            mobile_menu: "#mobile-menu".into(),
            nav_menu: "#nav-menu".into(),
            nav_link: ".nav-link".into(),
            anchor: r##"a[href^="#"]"##.into(),
            navbar: ".navbar".into(),
            hero: ".hero".into(),
            progress_bar: ".scroll-progress".into(),
            contact_form: ".contact-form".into(),
            form_status: "#form-status".into(),
            form_fields: "input, textarea".into(),
            submit_button: r#"button[type="submit"]"#.into(),
            button_label: ".btn-text".into(),
            button_icon: ".btn-icon".into(),
            counter: ".counter".into(),
            typing: ".highlight".into(),
            typing_marker: "typing-text".into(),
            entrance: ".skill-category, .project-card, .certification-card, .timeline-item".into(),
            interactive: "a, button, .nav-link, .btn".into(),
        }
    }
}

/// Durations, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Timings {
    pub success_revert_ms: u32,
    pub error_revert_ms: u32,
    pub typewriter_start_ms: u32,
    pub typewriter_char_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub menu_stagger_ms: u32,
    pub project_jitter_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            success_revert_ms: 4000,
            error_revert_ms: 3000,
            typewriter_start_ms: 1000,
            typewriter_char_ms: 100,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            menu_stagger_ms: 100,
            project_jitter_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    /// Navbar gets `scrolled` strictly above this offset.
    pub navbar_offset: f64,
    /// Fixed header height subtracted from anchor scroll targets.
    pub header_offset: f64,
    pub parallax_rate: f64,
    pub entrance_visibility: f64,
    pub entrance_root_margin: String,
    pub counter_visibility: f64,
    /// Custom cursor only runs on viewports wider than this.
    pub cursor_min_width: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            navbar_offset: 50.0,
            header_offset: 80.0,
            parallax_rate: -0.5,
            entrance_visibility: 0.1,
            entrance_root_margin: "0px 0px -50px 0px".into(),
            counter_visibility: 0.7,
            cursor_min_width: 768.0,
        }
    }
}

/// Counter overrides. Unset fields follow the page [`Variant`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CounterSettings {
    pub strategy: Option<CounterStrategy>,
    pub suffix: Option<String>,
}

impl CounterSettings {
    pub fn strategy(&self, variant: Variant) -> CounterStrategy {
        self.strategy.unwrap_or(match variant {
            Variant::Basic => CounterStrategy::Linear,
            Variant::Enhanced => CounterStrategy::EaseOutExpo,
        })
    }

    /// The basic page always shows counters as percentages.
    pub fn suffix(&self, variant: Variant) -> String {
        match (&self.suffix, variant) {
            (Some(s), _) => s.clone(),
            (None, Variant::Basic) => "%".to_string(),
            (None, Variant::Enhanced) => String::new(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        for (name, value) in [
            ("entrance_visibility", t.entrance_visibility),
            ("counter_visibility", t.counter_visibility),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        let ms = &self.timings;
        for (name, value) in [
            ("success_revert_ms", ms.success_revert_ms),
            ("error_revert_ms", ms.error_revert_ms),
            ("typewriter_char_ms", ms.typewriter_char_ms),
            ("counter_duration_ms", ms.counter_duration_ms),
            ("counter_tick_ms", ms.counter_tick_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be non-zero")));
            }
        }

        let s = &self.selectors;
        for (name, value) in [
            ("contact_form", &s.contact_form),
            ("submit_button", &s.submit_button),
            ("form_status", &s.form_status),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("selector {name} is empty")));
            }
        }
        Ok(())
    }

    pub fn revert_delay_ms(&self, success: bool) -> u32 {
        if success {
            self.timings.success_revert_ms
        } else {
            self.timings.error_revert_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() -> anyhow::Result<()> {
        let config = PageConfig::from_json("{}")?;
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.timings.success_revert_ms, 4000);
        assert_eq!(config.timings.error_revert_ms, 3000);
        assert_eq!(config.selectors.contact_form, ".contact-form");
        Ok(())
    }

    #[test]
    fn partial_override_keeps_other_defaults() -> anyhow::Result<()> {
        let config = PageConfig::from_json(
            r#"{ "variant": "basic", "timings": { "error_revert_ms": 1500 } }"#,
        )?;
        assert_eq!(config.variant, Variant::Basic);
        assert_eq!(config.timings.error_revert_ms, 1500);
        assert_eq!(config.timings.success_revert_ms, 4000);
        assert_eq!(config.revert_delay_ms(false), 1500);
        Ok(())
    }

    #[test]
    fn out_of_range_visibility_is_rejected() {
        let err = PageConfig::from_json(r#"{ "thresholds": { "counter_visibility": 1.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("counter_visibility")));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = PageConfig::from_json(r#"{ "timings": { "counter_tick_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PageConfig::from_json("{ variant: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn counter_defaults_follow_variant() {
        let settings = CounterSettings::default();
        assert_eq!(settings.strategy(Variant::Basic), CounterStrategy::Linear);
        assert_eq!(settings.suffix(Variant::Basic), "%");
        assert_eq!(settings.strategy(Variant::Enhanced), CounterStrategy::EaseOutExpo);
        assert_eq!(settings.suffix(Variant::Enhanced), "");

        let custom = CounterSettings {
            strategy: Some(CounterStrategy::Linear),
            suffix: Some("+".into()),
        };
        assert_eq!(custom.strategy(Variant::Enhanced), CounterStrategy::Linear);
        assert_eq!(custom.suffix(Variant::Basic), "+");
    }
}
