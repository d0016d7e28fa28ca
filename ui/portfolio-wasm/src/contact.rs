//! Contact form wiring: field decoration and async submission.

use crate::api::{FetchTransport, TimerDelay};
use crate::dom::{self, DomSink, Nodes};
use gloo_console as console;
use pf_core::form::fields;
use pf_core::form::{FormController, SubmitRequest};
use pf_core::{FormError, PageConfig};
use std::rc::Rc;
use web_sys::Event;

pub fn bind(nodes: &Rc<Nodes>, config: &PageConfig) {
    let Some(contact) = nodes.contact.clone() else {
        return;
    };

    for (i, field) in contact.fields.iter().enumerate() {
        let n = nodes.clone();
        dom::listen(field, "focus", move |_: Event| {
            dom::apply(&n, None, &fields::on_focus(i));
        });

        let n = nodes.clone();
        let f = field.clone();
        dom::listen(field, "blur", move |_: Event| {
            dom::apply(&n, None, &fields::on_blur(i, &dom::field_value(&f)));
        });

        let n = nodes.clone();
        let f = field.clone();
        dom::listen(field, "input", move |_: Event| {
            dom::apply(&n, None, &fields::on_input(i, &dom::field_value(&f)));
        });
    }

    let controller = Rc::new(FormController::new(config, contact.fields.len()));
    let n = nodes.clone();
    let form = contact.form.clone();
    dom::listen(&contact.form, "submit", move |e: Event| {
        e.prevent_default();
        let ctrl = controller.clone();
        let sink = DomSink::new(n.clone());
        let transport = FetchTransport::new(form.clone());
        let request = SubmitRequest::post(&form.action());
        wasm_bindgen_futures::spawn_local(async move {
            match ctrl.submit(&request, &transport, &TimerDelay, &sink).await {
                Ok(_) => {}
                Err(FormError::Busy(state)) => {
                    console::debug!(format!("submit ignored while {state}"));
                }
                Err(e @ FormError::StaleTicket { .. }) => {
                    console::debug!(format!("superseded: {e}"));
                }
                Err(e) => console::warn!(e.to_string()),
            }
        });
    });
}
