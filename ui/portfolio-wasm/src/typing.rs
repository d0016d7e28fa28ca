//! Typewriter reveal of the hero highlight.

use crate::dom::{self, Nodes};
use gloo_timers::future::TimeoutFuture;
use pf_core::typewriter::Typewriter;
use pf_core::PageConfig;
use std::rc::Rc;

pub fn start(nodes: &Rc<Nodes>, config: &PageConfig) {
    let sel = &config.selectors;
    let Some(el) = dom::query(&sel.typing) else {
        return;
    };
    if !dom::has_class(&el, &sel.typing_marker) {
        return;
    }

    let writer = Typewriter::new(&el.text_content().unwrap_or_default());
    dom::apply(nodes, Some(&el), &writer.prepare());

    let n = nodes.clone();
    let (delay, per_char) = (config.timings.typewriter_start_ms, config.timings.typewriter_char_ms);
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay).await;
        for patch in writer {
            dom::apply(&n, Some(&el), &[patch]);
            TimeoutFuture::new(per_char).await;
        }
    });
}
