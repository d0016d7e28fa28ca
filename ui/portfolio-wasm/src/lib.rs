//! Portfolio page enhancements, compiled to WASM.
//!
//! Binds the document once, then hands each component its handles and the
//! page configuration. Behaviour lives in `pf-core`; this crate only reads the
//! DOM, wires listeners and applies patches.

pub mod api;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod dom;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod typing;

use gloo_console as console;
use gloo_utils::document;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Event;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    if document().ready_state() == "loading" {
        dom::listen(&document(), "DOMContentLoaded", |_: Event| init());
    } else {
        init();
    }
    Ok(())
}

fn init() {
    let config = config::load();

    scroll::ensure_progress_bar(&config);
    let cursor = cursor::create(&config);
    let nodes = Rc::new(dom::Nodes::bind(&config.selectors, cursor));

    nav::bind(&nodes, &config);
    scroll::bind(&nodes, &config);
    reveal::bind_entrance(&nodes, &config);
    reveal::bind_counters(&config);
    typing::start(&nodes, &config);
    cursor::bind(&nodes, &config);
    contact::bind(&nodes, &config);

    console::log!("portfolio enhancements loaded");
}
