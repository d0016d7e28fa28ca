//! Mobile menu and smooth in-page anchors.

use crate::dom::{self, Nodes};
use gloo_utils::{document, window};
use pf_core::{nav, PageConfig};
use std::rc::Rc;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

pub fn bind(nodes: &Rc<Nodes>, config: &PageConfig) {
    bind_menu(nodes, config);
    bind_anchors(config);
}

fn bind_menu(nodes: &Rc<Nodes>, config: &PageConfig) {
    if let (Some(toggle), Some(menu)) = (&nodes.mobile_toggle, &nodes.nav_menu) {
        let n = nodes.clone();
        let menu = menu.clone();
        let stagger = config.timings.menu_stagger_ms;
        dom::listen(toggle, "click", move |_: MouseEvent| {
            let was_open = dom::has_class(&menu, "active");
            dom::apply(&n, None, &nav::toggle_menu(was_open, n.nav_links.len(), stagger));
        });
    }

    {
        let n = nodes.clone();
        dom::listen(&document(), "click", move |e: MouseEvent| {
            let target = e.target();
            let inside = |el: &Option<web_sys::Element>| {
                el.as_ref().is_some_and(|el| dom::contains(el, target.as_ref()))
            };
            if nav::click_dismisses_menu(inside(&n.nav_menu), inside(&n.mobile_toggle)) {
                dom::apply(&n, None, &nav::close_menu());
            }
        });
    }

    for link in &nodes.nav_links {
        let n = nodes.clone();
        dom::listen(link, "click", move |_: MouseEvent| {
            dom::apply(&n, None, &nav::close_menu());
        });
    }
}

fn bind_anchors(config: &PageConfig) {
    let header_offset = config.thresholds.header_offset;
    for anchor in dom::query_all(&config.selectors.anchor) {
        let a = anchor.clone();
        dom::listen(&anchor, "click", move |e: MouseEvent| {
            e.prevent_default();
            let href = a.get_attribute("href").unwrap_or_default();
            let Some(target) = nav::anchor_selector(&href).and_then(dom::query) else {
                return;
            };
            let top = nav::scroll_target_top(
                target.get_bounding_client_rect().top(),
                window().page_y_offset().unwrap_or(0.0),
                header_offset,
            );
            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&opts);
        });
    }
}
