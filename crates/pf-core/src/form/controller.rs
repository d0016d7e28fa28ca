//! Async driver for one contact form.
//!
//! Owns the [`FormMachine`] and walks a submission through
//! `Idle → Sending → Success|Error → Idle`, pushing the rendered view to a
//! [`PatchSink`] after every step. The relay request and the revert timer are
//! behind [`FormTransport`] and [`Delay`] so the browser can plug in `fetch`
//! and real timeouts while tests use mocks.

use super::machine::{FormMachine, FormState};
use super::view;
use crate::config::PageConfig;
use crate::error::{FormError, SubmitError};
use async_trait::async_trait;
use pf_types::{PatchSink, Variant};
use std::cell::RefCell;

/// The outbound request for one submission. The body is the form's current
/// field set, attached by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub url: String,
    pub method: &'static str,
    pub accept: &'static str,
}

impl SubmitRequest {
    pub fn post(action: &str) -> Self {
        Self {
            url: action.to_string(),
            method: "POST",
            accept: "application/json",
        }
    }
}

#[async_trait(?Send)]
pub trait FormTransport {
    /// Send the request and return the HTTP status. `Err` means the exchange
    /// never completed (network failure, CORS, ...).
    async fn send(&self, request: &SubmitRequest) -> Result<u16, SubmitError>;
}

#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, ms: u32);
}

/// Map an HTTP status onto the single failure kind the UI knows about.
pub fn classify_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

pub struct FormController {
    machine: RefCell<FormMachine>,
    variant: Variant,
    success_revert_ms: u32,
    error_revert_ms: u32,
    field_count: usize,
}

impl FormController {
    pub fn new(config: &PageConfig, field_count: usize) -> Self {
        Self {
            machine: RefCell::new(FormMachine::new()),
            variant: config.variant,
            success_revert_ms: config.revert_delay_ms(true),
            error_revert_ms: config.revert_delay_ms(false),
            field_count,
        }
    }

    pub fn state(&self) -> FormState {
        self.machine.borrow().state()
    }

    /// Run one submission to completion, including the auto-revert.
    ///
    /// Returns `Err(FormError::Busy)` without side effects while another
    /// submission is in flight. A submit during the `Success`/`Error` window
    /// takes the form over; the earlier call then returns
    /// `Err(FormError::StaleTicket)` when its revert timer fires and renders
    /// nothing. Relay failures are not errors here: they end in the `Error`
    /// view and then revert like any other outcome.
    pub async fn submit<T, D, S>(
        &self,
        request: &SubmitRequest,
        transport: &T,
        delay: &D,
        sink: &S,
    ) -> Result<FormState, FormError>
    where
        T: FormTransport + ?Sized,
        D: Delay + ?Sized,
        S: PatchSink + ?Sized,
    {
        let (from, ticket) = {
            let mut machine = self.machine.borrow_mut();
            let from = machine.state();
            (from, machine.submit()?)
        };
        self.render(from, FormState::Sending, sink);

        let outcome = transport.send(request).await.and_then(classify_status);

        let settled = self.machine.borrow_mut().settle(ticket, &outcome)?;
        self.render(FormState::Sending, settled, sink);

        let wait = if settled == FormState::Success {
            self.success_revert_ms
        } else {
            self.error_revert_ms
        };
        delay.sleep(wait).await;

        let idle = self.machine.borrow_mut().revert(ticket)?;
        self.render(settled, idle, sink);
        Ok(idle)
    }

    fn render<S: PatchSink + ?Sized>(&self, from: FormState, to: FormState, sink: &S) {
        sink.apply(&view::transition(from, to, self.variant, self.field_count));
    }
}
