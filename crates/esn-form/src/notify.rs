//! Transient notifications surfaced after terminal submission outcomes.

use crate::FormError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// An ephemeral toast-style message. Emitted once, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    /// The canned toast for a completed send.
    pub fn sent() -> Self {
        Self::new(
            Severity::Success,
            "Message sent successfully!",
            "We'll get back to you within 24 hours to discuss your project.",
        )
    }
}

impl FormError {
    /// The toast for this error, if it gets one. Validation failures
    /// are surfaced inline per field and produce no notification; the
    /// rejection toasts stay generic so user-supplied content is never
    /// echoed back.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            FormError::RateLimited { wait_secs } => Some(Notification::new(
                Severity::Warning,
                "Please wait",
                format!("You can send another message in {wait_secs} seconds."),
            )),
            FormError::ValidationFailed(_) => None,
            FormError::ContentRejected | FormError::SubmissionFailed => Some(Notification::new(
                Severity::Error,
                "Message not sent",
                "Something went wrong while sending your message. Please try again.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, ValidationErrors};

    #[test]
    fn test_rate_limit_toast_is_a_warning_with_wait_time() {
        let toast = FormError::RateLimited { wait_secs: 20 }
            .notification()
            .unwrap();
        assert_eq!(toast.severity, Severity::Warning);
        assert_eq!(toast.title, "Please wait");
        assert!(toast.description.contains("20 seconds"));
    }

    #[test]
    fn test_validation_failures_stay_inline_only() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Email, "Enter a valid email address".to_string());
        assert_eq!(FormError::ValidationFailed(errors).notification(), None);
    }

    #[test]
    fn test_rejection_toasts_are_generic() {
        for error in [FormError::ContentRejected, FormError::SubmissionFailed] {
            let toast = error.notification().unwrap();
            assert_eq!(toast.severity, Severity::Error);
            assert!(!toast.description.contains("script"));
            assert!(!toast.description.contains("javascript"));
        }
    }

    #[test]
    fn test_success_toast() {
        let toast = Notification::sent();
        assert_eq!(toast.severity, Severity::Success);
        assert!(toast.title.contains("sent"));
    }
}
