//! Scroll listeners: throttled navbar/progress update and hero parallax.

use crate::dom::{self, Nodes};
use gloo_utils::{document, window};
use pf_core::scroll::{self, FrameThrottle, ScrollSnapshot};
use pf_core::PageConfig;
use std::rc::Rc;
use web_sys::Event;

/// Inject the progress bar unless the page already has one.
pub fn ensure_progress_bar(config: &PageConfig) {
    if dom::query(&config.selectors.progress_bar).is_none() {
        dom::append_overlay(scroll::PROGRESS_BAR_CLASS, scroll::PROGRESS_BAR_CSS);
    }
}

fn snapshot() -> ScrollSnapshot {
    let win = window();
    ScrollSnapshot {
        scroll_y: win.scroll_y().unwrap_or(0.0),
        document_height: document()
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0),
        viewport_height: win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}

pub fn bind(nodes: &Rc<Nodes>, config: &PageConfig) {
    let throttle = Rc::new(FrameThrottle::new());
    let navbar_offset = config.thresholds.navbar_offset;
    {
        let n = nodes.clone();
        dom::listen(&window(), "scroll", move |_: Event| {
            if !throttle.request() {
                return;
            }
            let n = n.clone();
            let throttle = throttle.clone();
            dom::request_frame(move |_| {
                dom::apply(&n, None, &scroll::frame_update(&snapshot(), navbar_offset));
                throttle.complete();
            });
        });
    }

    if let Some(hero) = nodes.hero.clone() {
        let n = nodes.clone();
        let rate = config.thresholds.parallax_rate;
        dom::listen(&window(), "scroll", move |_: Event| {
            let y = window().page_y_offset().unwrap_or(0.0);
            if let Some(patch) = scroll::parallax(y, f64::from(hero.offset_height()), rate) {
                dom::apply(&n, None, &[patch]);
            }
        });
    }
}
