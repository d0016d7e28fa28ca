//! Reads the page configuration embedded in the document.

use crate::dom;
use gloo_console as console;
use pf_core::PageConfig;

/// `<script type="application/json" id="portfolio-config">{ ... }</script>`
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Embedded config if present and valid, defaults otherwise.
pub fn load() -> PageConfig {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            console::warn!(format!("ignoring #{CONFIG_ELEMENT_ID}: {e}"));
            PageConfig::default()
        }
    }
}
