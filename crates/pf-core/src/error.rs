use thiserror::Error;

/// Why a contact-form submission failed.
///
/// Both kinds render the same user-facing error state; the split only
/// survives into the logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form relay rejected submission with status {status}")]
    Rejected { status: u16 },

    #[error("form relay unreachable: {0}")]
    Transport(String),
}

/// Misuse of the form state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// Submit fired while a submission was in flight.
    #[error("submission already in progress (state: {0})")]
    Busy(&'static str),

    /// A completion or revert arrived for a submission that has been superseded.
    #[error("stale submission ticket {ticket}, current is {current}")]
    StaleTicket { ticket: u64, current: u64 },

    #[error("no transition from {state} on {event}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Invalid(String),
}
