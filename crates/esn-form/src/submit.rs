//! Submission orchestration for the contact form.
//!
//! [`SubmitGate`] serializes submit attempts: the cooldown gate runs
//! before validation, the content guard runs on the validated record,
//! and send tickets cancel superseded in-flight submissions so two
//! simulated sends can never both complete.

use crate::state::FormState;
use crate::validate::{validate, Inquiry};
use crate::{FormError, FormResult};
use std::time::Duration;

/// Minimum time between two accepted submissions.
pub const COOLDOWN: Duration = Duration::from_secs(30);

/// Latency of the simulated send standing in for a real transport.
pub const SEND_LATENCY: Duration = Duration::from_secs(2);

/// Hard ceiling on any single field accepted by the content guard.
const GUARD_MAX_FIELD_LEN: usize = 5000;

/// Substrings that fail the content guard outright.
const GUARD_PATTERNS: [&str; 3] = ["<script>", "javascript:", "data:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
}

/// An accepted submission waiting on the simulated send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    /// Identifies this send; stale tickets are ignored on completion.
    pub ticket: u64,
    pub inquiry: Inquiry,
}

/// State machine guarding the submission flow. The last-accepted
/// timestamp lives only in memory and is armed exclusively by accepted
/// attempts, so a rejected attempt never blocks the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitGate {
    phase: SubmissionPhase,
    last_accepted_ms: Option<f64>,
    ticket: u64,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            last_accepted_ms: None,
            ticket: 0,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Run one submit attempt at `now_ms` (wall-clock milliseconds).
    /// Any in-flight send is superseded before the cooldown check.
    pub fn begin(&mut self, form: &FormState, now_ms: f64) -> FormResult<PendingSend> {
        if self.phase == SubmissionPhase::Submitting {
            self.ticket += 1;
            self.phase = SubmissionPhase::Idle;
        }

        if let Some(accepted_ms) = self.last_accepted_ms {
            let elapsed = now_ms - accepted_ms;
            let window = COOLDOWN.as_millis() as f64;
            if elapsed < window {
                let wait_secs = (((window - elapsed) / 1000.0).ceil() as u64).max(1);
                return Err(FormError::RateLimited { wait_secs });
            }
        }

        let inquiry = validate(form).map_err(FormError::ValidationFailed)?;
        content_guard(&inquiry)?;

        self.ticket += 1;
        self.last_accepted_ms = Some(now_ms);
        self.phase = SubmissionPhase::Submitting;
        Ok(PendingSend {
            ticket: self.ticket,
            inquiry,
        })
    }

    /// Finish the send identified by `ticket`. Returns false for stale
    /// tickets so a superseded completion cannot fire. The caller
    /// resets the form and emits the success notification on true.
    pub fn complete(&mut self, ticket: u64) -> bool {
        if self.phase == SubmissionPhase::Submitting && ticket == self.ticket {
            self.phase = SubmissionPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Abort the send identified by `ticket`, with the same stale-
    /// ticket discipline as [`SubmitGate::complete`]. The caller keeps
    /// the form contents on this path.
    pub fn fail(&mut self, ticket: u64) -> bool {
        self.complete(ticket)
    }
}

impl Default for SubmitGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Post-validation content check, independent of the input sanitizer.
/// Rejections are generic so attacker-supplied patterns are never
/// echoed back to the page.
fn content_guard(inquiry: &Inquiry) -> FormResult<()> {
    for value in inquiry.values() {
        if value.chars().count() > GUARD_MAX_FIELD_LEN {
            return Err(FormError::ContentRejected);
        }
        let lowered = value.to_lowercase();
        if GUARD_PATTERNS.iter().any(|pattern| lowered.contains(pattern)) {
            return Err(FormError::ContentRejected);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        FormState {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: String::new(),
            project: "New IoT System".into(),
            industry: "Smart Agriculture".into(),
            message: "We need 15 sensor nodes covering a 2km field.".into(),
        }
    }

    #[test]
    fn test_accepted_submission_runs_to_completion() {
        let mut gate = SubmitGate::new();
        let pending = gate.begin(&valid_form(), 1_000.0).unwrap();
        assert!(gate.is_submitting());
        assert_eq!(pending.inquiry.name, "Jane Doe");
        assert_eq!(pending.inquiry.company, None);
        assert!(gate.complete(pending.ticket));
        assert_eq!(gate.phase(), SubmissionPhase::Idle);
        // the same ticket cannot complete twice
        assert!(!gate.complete(pending.ticket));
    }

    #[test]
    fn test_second_attempt_within_cooldown_is_rate_limited() {
        let mut gate = SubmitGate::new();
        let pending = gate.begin(&valid_form(), 0.0).unwrap();
        assert!(gate.complete(pending.ticket));

        match gate.begin(&valid_form(), 10_000.0) {
            Err(FormError::RateLimited { wait_secs }) => assert_eq!(wait_secs, 20),
            other => panic!("expected rate limit, got {other:?}"),
        }
        assert_eq!(gate.phase(), SubmissionPhase::Idle);

        // the window reopens exactly at the cooldown boundary
        assert!(gate.begin(&valid_form(), 30_000.0).is_ok());
    }

    #[test]
    fn test_validation_failure_does_not_arm_cooldown() {
        let mut gate = SubmitGate::new();
        let mut form = valid_form();
        form.email = "not-an-email".into();

        match gate.begin(&form, 0.0) {
            Err(FormError::ValidationFailed(errors)) => {
                assert!(errors.contains_key(&crate::Field::Email));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(gate.phase(), SubmissionPhase::Idle);

        // an immediate valid attempt is not cooldown-blocked
        assert!(gate.begin(&valid_form(), 1.0).is_ok());
    }

    #[test]
    fn test_content_guard_rejects_script_markers() {
        for hostile in [
            "a long enough message with <script> hidden inside",
            "fetch this: data:text/html;base64,AAAA for details",
            "prefix JAVASCRIPT:alert(1) suffix padding text",
        ] {
            let mut gate = SubmitGate::new();
            let mut form = valid_form();
            form.message = hostile.into();
            assert!(
                matches!(gate.begin(&form, 0.0), Err(FormError::ContentRejected)),
                "guard missed {hostile:?}"
            );
            // the rejection did not start the cooldown
            assert!(gate.begin(&valid_form(), 1.0).is_ok());
        }
    }

    #[test]
    fn test_oversized_field_fails_content_guard() {
        let inquiry = Inquiry {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: None,
            project: None,
            industry: None,
            message: "x".repeat(GUARD_MAX_FIELD_LEN + 1),
        };
        assert!(matches!(
            content_guard(&inquiry),
            Err(FormError::ContentRejected)
        ));
    }

    #[test]
    fn test_new_attempt_supersedes_inflight_send() {
        let mut gate = SubmitGate::new();
        let first = gate.begin(&valid_form(), 0.0).unwrap();

        // arrives mid-send: cancels the pending completion, then trips
        // the cooldown
        assert!(matches!(
            gate.begin(&valid_form(), 5_000.0),
            Err(FormError::RateLimited { .. })
        ));
        assert_eq!(gate.phase(), SubmissionPhase::Idle);
        assert!(!gate.complete(first.ticket));
    }

    #[test]
    fn test_supersession_after_cooldown_invalidates_old_ticket() {
        let mut gate = SubmitGate::new();
        let first = gate.begin(&valid_form(), 0.0).unwrap();
        let second = gate.begin(&valid_form(), 31_000.0).unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert!(!gate.complete(first.ticket));
        assert!(gate.complete(second.ticket));
    }

    #[test]
    fn test_failed_send_returns_to_idle_once() {
        let mut gate = SubmitGate::new();
        let pending = gate.begin(&valid_form(), 0.0).unwrap();
        assert!(gate.fail(pending.ticket));
        assert_eq!(gate.phase(), SubmissionPhase::Idle);
        assert!(!gate.fail(pending.ticket));
    }

    #[test]
    fn test_clock_skew_reads_as_cooling_down() {
        let mut gate = SubmitGate::new();
        let pending = gate.begin(&valid_form(), 60_000.0).unwrap();
        assert!(gate.complete(pending.ticket));
        assert!(matches!(
            gate.begin(&valid_form(), 50_000.0),
            Err(FormError::RateLimited { .. })
        ));
    }
}
