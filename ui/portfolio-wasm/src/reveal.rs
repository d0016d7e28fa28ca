//! Visibility-triggered effects: entrance animations and counters.

use crate::dom::{self, Nodes};
use gloo_console as console;
use gloo_timers::future::TimeoutFuture;
use gloo_utils::window;
use pf_core::counter::{self, CounterAnimation, CounterStrategy};
use pf_core::entrance::{EntranceKind, EntranceTracker};
use pf_core::PageConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observe `elements`, calling `on_enter` once per element on its first
/// intersection. The element is unobserved before the handler runs.
fn observe_once<F>(elements: &[Element], threshold: f64, root_margin: Option<&str>, mut on_enter: F)
where
    F: FnMut(&Element) + 'static,
{
    if elements.is_empty() {
        return;
    }
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let el = entry.target();
            observer.unobserve(&el);
            on_enter(&el);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
        Ok(observer) => elements.iter().for_each(|el| observer.observe(el)),
        Err(e) => console::warn!(format!("IntersectionObserver unavailable: {e:?}")),
    }
    cb.forget();
}

pub fn bind_entrance(nodes: &Rc<Nodes>, config: &PageConfig) {
    let elements = dom::query_all(&config.selectors.entrance);
    let observed = elements.clone();
    let tracker = RefCell::new(EntranceTracker::new(config.timings.project_jitter_ms));
    let n = nodes.clone();
    observe_once(
        &elements,
        config.thresholds.entrance_visibility,
        Some(config.thresholds.entrance_root_margin.as_str()),
        move |el| {
            let Some(key) = observed.iter().position(|o| o == el) else {
                return;
            };
            let classes = dom::class_names(el);
            let kind = EntranceKind::classify(classes.iter().map(String::as_str));
            if let Some(patch) = tracker.borrow_mut().on_visible(key, kind, js_sys::Math::random()) {
                dom::apply(&n, Some(el), &[patch]);
            }
        },
    );
}

pub fn bind_counters(config: &PageConfig) {
    let elements = dom::query_all(&config.selectors.counter);
    let variant = config.variant;
    let strategy = config.counter.strategy(variant);
    let suffix = config.counter.suffix(variant);
    let duration = config.timings.counter_duration_ms;
    let tick = config.timings.counter_tick_ms;

    observe_once(&elements, config.thresholds.counter_visibility, None, move |el| {
        let Some(target) = el
            .get_attribute("data-target")
            .as_deref()
            .and_then(counter::leading_int)
        else {
            return;
        };
        let start = el
            .text_content()
            .as_deref()
            .and_then(counter::leading_int)
            .unwrap_or(0);
        let anim = CounterAnimation::new(start, target, strategy, duration, tick, suffix.clone());
        match anim.strategy() {
            CounterStrategy::Linear => run_linear(el.clone(), anim),
            CounterStrategy::EaseOutExpo => run_eased(el.clone(), anim),
        }
    });
}

/// Fixed-interval ticks.
fn run_linear(el: Element, anim: CounterAnimation) {
    wasm_bindgen_futures::spawn_local(async move {
        let tick = anim.tick_ms();
        let mut elapsed = 0.0;
        loop {
            let frame = anim.sample(elapsed);
            el.set_text_content(Some(&frame.text));
            if frame.done {
                break;
            }
            TimeoutFuture::new(tick).await;
            elapsed += f64::from(tick);
        }
    });
}

/// One sample per animation frame, timed against `performance.now()`.
fn run_eased(el: Element, anim: CounterAnimation) {
    let Some(started) = window().performance().map(|p| p.now()) else {
        el.set_text_content(Some(&anim.sample(f64::INFINITY).text));
        return;
    };

    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let frame = anim.sample(now - started);
        el.set_text_content(Some(&frame.text));
        if frame.done {
            // drop the closure; nothing references it after this frame
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(cb) = next.borrow().as_ref() {
            let _ = window().request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = slot.borrow().as_ref() {
        let _ = window().request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
