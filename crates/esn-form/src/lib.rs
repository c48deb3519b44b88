//! Contact form domain logic for the ESP-NOW Solutions site.
//!
//! This crate owns everything behind the project inquiry form: field
//! state, input sanitization, validation rules, the submission state
//! machine with its cooldown gate, and the transient notifications
//! surfaced after terminal outcomes. It has no UI dependency so the
//! whole flow is testable on the host.

pub mod notify;
pub mod sanitize;
pub mod state;
pub mod submit;
pub mod validate;

use thiserror::Error;

pub use notify::{Notification, Severity};
pub use sanitize::sanitize;
pub use state::{Field, FormState, ValidationErrors, INDUSTRIES, PROJECT_TYPES};
pub use submit::{PendingSend, SubmissionPhase, SubmitGate, COOLDOWN, SEND_LATENCY};
pub use validate::{validate, Inquiry};

/// Every way a submit attempt can be rejected. None of these are fatal;
/// each path returns the form to an interactive idle state and retries
/// are always user-initiated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// The cooldown window since the last accepted submission has not
    /// elapsed yet.
    #[error("please wait {wait_secs} seconds before sending another message")]
    RateLimited { wait_secs: u64 },

    /// One or more fields violate the validation rules. Surfaced per
    /// field, never as a notification.
    #[error("one or more fields are invalid")]
    ValidationFailed(ValidationErrors),

    /// The post-validation content guard rejected the record.
    #[error("message content was rejected")]
    ContentRejected,

    /// The simulated send did not complete.
    #[error("message could not be sent")]
    SubmissionFailed,
}

pub type FormResult<T> = Result<T, FormError>;
