//! Submission state machine — the pending-UI state for one rendered page
//! instance.
//!
//! The state is context-scoped: it lives on the Page Controller of a single
//! rendered instance, never in process-wide storage. `begin` flips to
//! `Submitting` synchronously, before any gateway I/O — optimistic pending
//! UI, decoupled from the eventual outcome. Refusing `begin` while already
//! `Submitting` models the disabled submit control, which is the only
//! in-flight guard (no request deduplication, no cancellation token).

/// Legal transitions:
/// `Idle → Submitting` and `Failed → Submitting` via [`begin`],
/// `Submitting → Idle` via [`complete`] (the page re-renders under a new
/// data set), `Submitting → Failed` via [`fail`].
///
/// `Failed` exists so a failed enhancement can clear the pending UI with an
/// inline notice instead of relying on full-page error recovery.
///
/// [`begin`]: SubmissionState::begin
/// [`complete`]: SubmissionState::complete
/// [`fail`]: SubmissionState::fail
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed {
        message: String,
    },
}

impl SubmissionState {
    /// Starts a submission. Returns `false` while one is already in flight —
    /// the disabled control refused the action and nothing changes.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmissionState::Submitting;
        true
    }

    /// The submission produced a response and the page re-renders: back to
    /// `Idle` under the new data set.
    pub fn complete(&mut self) {
        *self = SubmissionState::Idle;
    }

    /// The in-flight submission failed. Callers only invoke this from
    /// `Submitting`.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = SubmissionState::Failed {
            message: message.into(),
        };
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn test_begin_moves_idle_to_submitting() {
        let mut state = SubmissionState::Idle;
        assert!(state.begin());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_begin_refused_while_submitting() {
        let mut state = SubmissionState::Submitting;
        assert!(!state.begin());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_complete_resets_to_idle() {
        let mut state = SubmissionState::Submitting;
        state.complete();
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn test_fail_records_message() {
        let mut state = SubmissionState::Submitting;
        state.fail("enhancement did not finish");
        assert!(!state.is_submitting());
        assert_eq!(state.failure_message(), Some("enhancement did not finish"));
    }

    #[test]
    fn test_begin_allowed_again_after_failure() {
        let mut state = SubmissionState::Failed {
            message: "boom".to_string(),
        };
        assert!(state.begin());
        assert!(state.is_submitting());
        assert_eq!(state.failure_message(), None);
    }

    #[test]
    fn test_idle_has_no_failure_message() {
        assert_eq!(SubmissionState::Idle.failure_message(), None);
    }
}
