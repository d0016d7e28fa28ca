//! DOM element bindings and patch application.
//!
//! Handles are resolved once at startup from the configured selectors. Every
//! handle is optional: a page without a hero, menu or contact form simply gets
//! no behaviour for it.

use gloo_console as console;
use gloo_timers::callback::Timeout;
use gloo_utils::{body, document, window};
use pf_core::config::Selectors;
use pf_types::{Patch, PatchOp, PatchSink, Target};
use std::rc::Rc;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Node,
};

// ── Helpers ──

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect(nl: &web_sys::NodeList) -> Vec<Element> {
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn class_names(el: &Element) -> Vec<String> {
    el.class_name().split_whitespace().map(str::to_owned).collect()
}

/// Whether the event target lies inside `container`.
pub fn contains(container: &Element, target: Option<&EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<Node>())
        .is_some_and(|node| container.contains(Some(node)))
}

/// Current value of an `<input>` or `<textarea>`.
pub fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Create a `<div>` with a class and inline style and append it to `<body>`.
pub fn append_overlay(class: &str, css: &str) -> Option<Element> {
    let el = document().create_element("div").ok()?;
    el.set_class_name(class);
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_css_text(css);
    }
    body().append_child(&el).ok()?;
    Some(el)
}

/// Attach a listener that lives for the rest of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        console::warn!(format!("could not bind {event}: {e:?}"));
    }
    cb.forget();
}

/// Run `f` before the next repaint.
pub fn request_frame<F: FnOnce(f64) + 'static>(f: F) {
    let cb = Closure::once(move |now: f64| f(now));
    let _ = window().request_animation_frame(cb.as_ref().unchecked_ref());
    cb.forget();
}

// ── Nodes ──

/// Handles owned by the contact form.
#[derive(Clone)]
pub struct ContactNodes {
    pub form: HtmlFormElement,
    pub button: Element,
    pub label: Option<Element>,
    pub icon: Option<Element>,
    pub status: Option<Element>,
    pub fields: Vec<Element>,
}

/// All page handles the components patch.
#[derive(Clone)]
pub struct Nodes {
    pub body: HtmlElement,
    pub mobile_toggle: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub navbar: Option<Element>,
    pub progress_bar: Option<Element>,
    pub hero: Option<HtmlElement>,
    pub cursor: Option<Element>,
    pub contact: Option<ContactNodes>,
}

impl Nodes {
    /// Resolve handles. Call once the document is parsed.
    pub fn bind(sel: &Selectors, cursor: Option<Element>) -> Nodes {
        Nodes {
            body: body(),
            mobile_toggle: query(&sel.mobile_menu),
            nav_menu: query(&sel.nav_menu),
            nav_links: query_all(&sel.nav_link),
            navbar: query(&sel.navbar),
            progress_bar: query(&sel.progress_bar),
            hero: query(&sel.hero).and_then(|e| e.dyn_into::<HtmlElement>().ok()),
            cursor,
            contact: ContactNodes::bind(sel),
        }
    }

    pub fn resolve(&self, target: Target, current: Option<&Element>) -> Option<Element> {
        let contact = self.contact.as_ref();
        match target {
            Target::Body => Some(self.body.clone().into()),
            Target::MobileToggle => self.mobile_toggle.clone(),
            Target::NavMenu => self.nav_menu.clone(),
            Target::NavLink(i) => self.nav_links.get(i).cloned(),
            Target::Navbar => self.navbar.clone(),
            Target::ProgressBar => self.progress_bar.clone(),
            Target::Hero => self.hero.clone().map(Into::into),
            Target::Cursor => self.cursor.clone(),
            Target::Form => contact.map(|c| c.form.clone().into()),
            Target::SubmitButton => contact.map(|c| c.button.clone()),
            Target::ButtonLabel => contact.and_then(|c| c.label.clone()),
            Target::ButtonIcon => contact.and_then(|c| c.icon.clone()),
            Target::FormStatus => contact.and_then(|c| c.status.clone()),
            Target::FieldParent(i) => contact
                .and_then(|c| c.fields.get(i))
                .and_then(|f| f.parent_element()),
            Target::Current => current.cloned(),
        }
    }
}

impl ContactNodes {
    fn bind(sel: &Selectors) -> Option<ContactNodes> {
        let form = query(&sel.contact_form)?.dyn_into::<HtmlFormElement>().ok()?;
        let button = form.query_selector(&sel.submit_button).ok()??;
        Some(ContactNodes {
            label: button.query_selector(&sel.button_label).ok().flatten(),
            icon: button.query_selector(&sel.button_icon).ok().flatten(),
            status: query(&sel.form_status),
            fields: query_all_within(&form, &sel.form_fields),
            button,
            form,
        })
    }
}

// ── Patch application ──

pub fn apply(nodes: &Nodes, current: Option<&Element>, patches: &[Patch]) {
    for patch in patches {
        let Some(el) = nodes.resolve(patch.target, current) else {
            continue;
        };
        if patch.delay_ms == 0 {
            apply_op(&el, &patch.op);
        } else {
            let op = patch.op.clone();
            let _ = Timeout::new(patch.delay_ms, move || apply_op(&el, &op)).forget();
        }
    }
}

fn apply_op(el: &Element, op: &PatchOp) {
    match op {
        PatchOp::AddClass(c) => add_class(el, c),
        PatchOp::RemoveClass(c) => remove_class(el, c),
        PatchOp::SetClassName(c) => el.set_class_name(c),
        PatchOp::SetStyle { property, value } => {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property(property, value);
            }
        }
        PatchOp::SetText(t) => el.set_text_content(Some(t)),
        PatchOp::SetInnerHtml(h) => el.set_inner_html(h),
        PatchOp::SetDisabled(d) => {
            if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
                button.set_disabled(*d);
            } else if *d {
                let _ = el.set_attribute("disabled", "");
            } else {
                let _ = el.remove_attribute("disabled");
            }
        }
        PatchOp::ResetForm => {
            if let Some(form) = el.dyn_ref::<HtmlFormElement>() {
                form.reset();
            }
        }
    }
}

/// [`PatchSink`] over the live document.
pub struct DomSink {
    nodes: Rc<Nodes>,
}

impl DomSink {
    pub fn new(nodes: Rc<Nodes>) -> Self {
        Self { nodes }
    }
}

impl PatchSink for DomSink {
    fn apply(&self, patches: &[Patch]) {
        apply(&self.nodes, None, patches);
    }
}
