//! Submission state machine.
//!
//! States: `Idle` → `Sending` → `Success` | `Error` → `Idle`.
//! A submit during the `Success`/`Error` window replaces the pending revert.
//! Every submission gets a [`Ticket`]; completions and reverts carrying an
//! older ticket are refused, so a late timer can never clobber a newer
//! submission.

use crate::error::{FormError, SubmitError};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Delivered,
    Failed,
    RevertElapsed,
}

impl FormEvent {
    pub fn name(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Delivered => "delivered",
            Self::Failed => "failed",
            Self::RevertElapsed => "revert_elapsed",
        }
    }
}

/// The transition table. `None` means the event is not accepted in `state`.
pub fn transition(state: FormState, event: FormEvent) -> Option<FormState> {
    use FormEvent::*;
    use FormState::*;
    match (state, event) {
        (Idle | Success | Error, Submit) => Some(Sending),
        (Sending, Delivered) => Some(Success),
        (Sending, Failed) => Some(Error),
        (Success | Error, RevertElapsed) => Some(Idle),
        _ => None,
    }
}

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct FormMachine {
    state: FormState,
    generation: u64,
}

impl FormMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Start a submission. Refused while one is in flight; from `Success` or
    /// `Error` it supersedes the pending revert.
    pub fn submit(&mut self) -> Result<Ticket, FormError> {
        if transition(self.state, FormEvent::Submit).is_none() {
            return Err(FormError::Busy(self.state.name()));
        }
        self.fire(FormEvent::Submit)?;
        self.generation += 1;
        Ok(Ticket(self.generation))
    }

    /// Record the relay outcome for `ticket`.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        outcome: &Result<(), SubmitError>,
    ) -> Result<FormState, FormError> {
        self.check(ticket)?;
        match outcome {
            Ok(()) => self.fire(FormEvent::Delivered),
            Err(e) => {
                warn!(ticket = ticket.0, error = %e, "contact form submission failed");
                self.fire(FormEvent::Failed)
            }
        }
    }

    /// Auto-revert timer for `ticket` elapsed.
    pub fn revert(&mut self, ticket: Ticket) -> Result<FormState, FormError> {
        self.check(ticket)?;
        self.fire(FormEvent::RevertElapsed)
    }

    fn check(&self, ticket: Ticket) -> Result<(), FormError> {
        if ticket.0 != self.generation {
            return Err(FormError::StaleTicket {
                ticket: ticket.0,
                current: self.generation,
            });
        }
        Ok(())
    }

    fn fire(&mut self, event: FormEvent) -> Result<FormState, FormError> {
        let next = transition(self.state, event).ok_or(FormError::InvalidTransition {
            state: self.state.name(),
            event: event.name(),
        })?;
        debug!(from = self.state.name(), to = next.name(), "contact form transition");
        self.state = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() -> anyhow::Result<()> {
        let mut m = FormMachine::new();
        let t = m.submit()?;
        assert_eq!(m.state(), FormState::Sending);
        assert_eq!(m.settle(t, &Ok(()))?, FormState::Success);
        assert_eq!(m.revert(t)?, FormState::Idle);
        Ok(())
    }

    #[test]
    fn rejected_status_and_transport_error_both_fail() -> anyhow::Result<()> {
        for outcome in [
            Err(SubmitError::Rejected { status: 500 }),
            Err(SubmitError::Transport("offline".into())),
        ] {
            let mut m = FormMachine::new();
            let t = m.submit()?;
            assert_eq!(m.settle(t, &outcome)?, FormState::Error);
        }
        Ok(())
    }

    #[test]
    fn submit_refused_while_sending() -> anyhow::Result<()> {
        let mut m = FormMachine::new();
        let t = m.submit()?;
        assert_eq!(m.submit(), Err(FormError::Busy("sending")));
        assert_eq!(m.state(), FormState::Sending);
        m.settle(t, &Ok(()))?;
        m.revert(t)?;
        assert!(m.submit().is_ok());
        Ok(())
    }

    #[test]
    fn resubmit_in_revert_window_supersedes_pending_revert() -> anyhow::Result<()> {
        for outcome in [Ok(()), Err(SubmitError::Rejected { status: 500 })] {
            let mut m = FormMachine::new();
            let first = m.submit()?;
            m.settle(first, &outcome)?;

            let second = m.submit()?;
            assert_eq!(m.state(), FormState::Sending);
            assert_eq!(
                m.revert(first),
                Err(FormError::StaleTicket {
                    ticket: first.id(),
                    current: second.id()
                })
            );
            assert_eq!(m.state(), FormState::Sending);

            assert_eq!(m.settle(second, &Ok(()))?, FormState::Success);
            assert_eq!(m.revert(second)?, FormState::Idle);
        }
        Ok(())
    }

    #[test]
    fn stale_ticket_cannot_revert_newer_submission() -> anyhow::Result<()> {
        let mut m = FormMachine::new();
        let first = m.submit()?;
        m.settle(first, &Err(SubmitError::Rejected { status: 503 }))?;
        m.revert(first)?;

        let second = m.submit()?;
        assert_eq!(
            m.revert(first),
            Err(FormError::StaleTicket {
                ticket: first.id(),
                current: second.id()
            })
        );
        assert_eq!(m.state(), FormState::Sending);
        Ok(())
    }

    #[test]
    fn table_rejects_out_of_order_events() {
        assert_eq!(transition(FormState::Idle, FormEvent::Delivered), None);
        assert_eq!(transition(FormState::Sending, FormEvent::RevertElapsed), None);
        assert_eq!(transition(FormState::Sending, FormEvent::Submit), None);
        assert_eq!(
            transition(FormState::Success, FormEvent::Submit),
            Some(FormState::Sending)
        );
        assert_eq!(
            transition(FormState::Error, FormEvent::RevertElapsed),
            Some(FormState::Idle)
        );
    }
}
