//! Domain model for triggering builds on the remote CI service.
//!
//! This crate owns the validation rules for a build trigger: the
//! time-to-live limits, the non-empty branch and token requirements, the
//! endpoint URL, and the JSON body the service expects. The CLI binary in
//! `crates/cmd` builds on top of it.

mod error;
mod request;
mod ttl;

pub use error::TriggerError;
pub use request::{BuildParameters, BuildRequest, TriggerPayload, DEFAULT_API_URL};
pub use ttl::{TimeToLive, MAX_TTL_MINUTES, MIN_TTL_MINUTES};
