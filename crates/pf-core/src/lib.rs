//! Portfolio page behaviour as pure logic.
//!
//! Every component maps an event plus a small snapshot of the page to a list of
//! [`Patch`]es. Nothing here touches the DOM; `portfolio-wasm` binds the real
//! document and applies the patches, which keeps this crate testable natively.

pub mod config;
pub mod counter;
pub mod cursor;
pub mod entrance;
pub mod error;
pub mod form;
pub mod nav;
pub mod scroll;
pub mod typewriter;
pub mod util;

pub use config::PageConfig;
pub use error::{ConfigError, FormError, SubmitError};
pub use pf_types::{Patch, PatchOp, PatchSink, Target, Variant};
