//! Custom pointer follower, desktop widths only.

use crate::dom::{self, Nodes};
use gloo_utils::{document, window};
use pf_core::{cursor, PageConfig};
use std::rc::Rc;
use web_sys::{Element, MouseEvent};

/// Create the cursor element on wide viewports.
pub fn create(config: &PageConfig) -> Option<Element> {
    let width = window().inner_width().ok()?.as_f64()?;
    if !cursor::enabled(width, config.thresholds.cursor_min_width) {
        return None;
    }
    dom::append_overlay(cursor::CURSOR_CLASS, cursor::CURSOR_CSS)
}

pub fn bind(nodes: &Rc<Nodes>, config: &PageConfig) {
    if nodes.cursor.is_none() {
        return;
    }
    let doc = document();

    let n = nodes.clone();
    dom::listen(&doc, "mousemove", move |e: MouseEvent| {
        dom::apply(&n, None, &cursor::on_move(f64::from(e.client_x()), f64::from(e.client_y())));
    });

    for (event, inside) in [("mouseenter", true), ("mouseleave", false)] {
        let n = nodes.clone();
        dom::listen(&doc, event, move |_: MouseEvent| {
            dom::apply(&n, None, &[cursor::on_document_pointer(inside)]);
        });
    }

    for el in dom::query_all(&config.selectors.interactive) {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let n = nodes.clone();
            dom::listen(&el, event, move |_: MouseEvent| {
                dom::apply(&n, None, &cursor::on_interactive_hover(hovering));
            });
        }
    }
}
