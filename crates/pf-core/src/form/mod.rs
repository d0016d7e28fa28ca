//! Contact form: submission state machine, its view projection, and the
//! async driver that talks to the form relay.

pub mod controller;
pub mod fields;
pub mod machine;
pub mod view;

pub use controller::{classify_status, Delay, FormController, FormTransport, SubmitRequest};
pub use machine::{FormEvent, FormMachine, FormState, Ticket};
