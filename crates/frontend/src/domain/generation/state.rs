//! Submission state machine
//!
//! Pure model of one README generation round trip: exactly one state holds
//! at any time, at most one request is in flight, and every accepted
//! submission settles exactly once. The UI layer wraps this in signals; the
//! machine itself has no reactive or browser dependencies.

/// Generated README returned by the service. Opaque markdown text; the
/// frontend never inspects its structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub markdown: String,
}

/// Why a submission failed. Validation failures never get this far; they
/// are rejected before a request exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCause {
    Network,
    Http,
    Decode,
}

impl ErrorCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCause::Network => "network",
            ErrorCause::Http => "http",
            ErrorCause::Decode => "decode",
        }
    }
}

/// Classified failure of one submission. Surfaced once as a notification,
/// then discarded by the next accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub cause: ErrorCause,
    pub message: String,
}

/// Validated form input. `parse` trims both fields and rejects empty ones,
/// so a constructed value is always submittable.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionInput {
    profile: String,
    repo: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    EmptyProfile,
    EmptyRepo,
}

impl InputError {
    pub fn message(&self) -> &'static str {
        match self {
            InputError::EmptyProfile => "GitHub profile name is required",
            InputError::EmptyRepo => "Repository name is required",
        }
    }
}

impl SubmissionInput {
    pub fn parse(profile: &str, repo: &str) -> Result<Self, InputError> {
        let profile = profile.trim();
        if profile.is_empty() {
            return Err(InputError::EmptyProfile);
        }
        let repo = repo.trim();
        if repo.is_empty() {
            return Err(InputError::EmptyRepo);
        }
        Ok(Self {
            profile: profile.to_owned(),
            repo: repo.to_owned(),
        })
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

/// The four lifecycle states of the generation pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Settled(Artifact),
    Failed(ErrorInfo),
}

/// Proof that a submission was accepted; required to settle it. Tokens from
/// superseded submissions no longer match and their outcomes are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionToken(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionMachine {
    state: RequestState,
    epoch: u64,
}

impl SubmissionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending)
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        match &self.state {
            RequestState::Settled(artifact) => Some(artifact),
            _ => None,
        }
    }

    /// Counter of accepted submissions. Bumped on every `begin`, which makes
    /// it usable as a "new result incoming" marker for view-local state.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Accept a new submission unless one is already in flight. A `None`
    /// here means the caller must not issue a request.
    pub fn begin(&mut self) -> Option<SubmissionToken> {
        if self.is_pending() {
            return None;
        }
        self.epoch += 1;
        self.state = RequestState::Pending;
        Some(SubmissionToken(self.epoch))
    }

    /// Apply the terminal outcome of the submission identified by `token`.
    /// Returns whether the outcome was applied; stale tokens are ignored.
    pub fn settle(
        &mut self,
        token: SubmissionToken,
        outcome: Result<Artifact, ErrorInfo>,
    ) -> bool {
        if token.0 != self.epoch || !self.is_pending() {
            return false;
        }
        self.state = match outcome {
            Ok(artifact) => RequestState::Settled(artifact),
            Err(error) => RequestState::Failed(error),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(text: &str) -> Artifact {
        Artifact {
            markdown: text.to_owned(),
        }
    }

    fn http_error() -> ErrorInfo {
        ErrorInfo {
            cause: ErrorCause::Http,
            message: "HTTP 500 Internal Server Error".to_owned(),
        }
    }

    #[test]
    fn submission_settles_successfully() {
        let mut machine = SubmissionMachine::new();
        let token = machine.begin().unwrap();
        assert!(machine.is_pending());

        assert!(machine.settle(token, Ok(artifact("# Hello"))));
        assert_eq!(machine.state(), &RequestState::Settled(artifact("# Hello")));
        assert_eq!(machine.artifact().unwrap().markdown, "# Hello");
    }

    #[test]
    fn submission_settles_with_failure() {
        let mut machine = SubmissionMachine::new();
        let token = machine.begin().unwrap();

        assert!(machine.settle(token, Err(http_error())));
        match machine.state() {
            RequestState::Failed(info) => assert_eq!(info.cause, ErrorCause::Http),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn pending_guard_issues_no_second_transport_call() {
        let mut machine = SubmissionMachine::new();
        let mut transport_calls = 0;

        // Two rapid submissions; the transport runs only when a token is
        // minted.
        for _ in 0..2 {
            if machine.begin().is_some() {
                transport_calls += 1;
            }
        }

        assert_eq!(transport_calls, 1);
        assert!(machine.is_pending());
    }

    #[test]
    fn settling_twice_applies_exactly_one_transition() {
        let mut machine = SubmissionMachine::new();
        let token = machine.begin().unwrap();

        assert!(machine.settle(token, Ok(artifact("first"))));
        assert!(!machine.settle(token, Err(http_error())));
        assert_eq!(machine.artifact().unwrap().markdown, "first");
    }

    #[test]
    fn stale_token_is_discarded() {
        let mut machine = SubmissionMachine::new();
        let first = machine.begin().unwrap();
        machine.settle(first, Ok(artifact("first")));

        let second = machine.begin().unwrap();
        // The old token must not be able to clobber the new submission.
        assert!(!machine.settle(first, Err(http_error())));
        assert!(machine.is_pending());

        assert!(machine.settle(second, Ok(artifact("second"))));
        assert_eq!(machine.artifact().unwrap().markdown, "second");
    }

    #[test]
    fn resubmission_is_allowed_from_terminal_states() {
        let mut machine = SubmissionMachine::new();

        let token = machine.begin().unwrap();
        machine.settle(token, Err(http_error()));
        assert!(machine.begin().is_some(), "resubmit after failure");

        let token = machine.begin();
        assert!(token.is_none(), "still pending");
    }

    #[test]
    fn success_clears_an_earlier_failure() {
        let mut machine = SubmissionMachine::new();
        let token = machine.begin().unwrap();
        machine.settle(token, Err(http_error()));

        let token = machine.begin().unwrap();
        machine.settle(token, Ok(artifact("# ok")));
        assert_eq!(machine.state(), &RequestState::Settled(artifact("# ok")));
    }

    #[test]
    fn epoch_advances_per_accepted_submission() {
        let mut machine = SubmissionMachine::new();
        assert_eq!(machine.epoch(), 0);

        let token = machine.begin().unwrap();
        assert_eq!(machine.epoch(), 1);
        machine.begin();
        assert_eq!(machine.epoch(), 1, "rejected submission does not advance");

        machine.settle(token, Ok(artifact("x")));
        machine.begin().unwrap();
        assert_eq!(machine.epoch(), 2);
    }

    #[test]
    fn input_is_trimmed_and_validated() {
        let input = SubmissionInput::parse("  octocat  ", " hello-world ").unwrap();
        assert_eq!(input.profile(), "octocat");
        assert_eq!(input.repo(), "hello-world");

        assert_eq!(
            SubmissionInput::parse("", "x"),
            Err(InputError::EmptyProfile)
        );
        assert_eq!(
            SubmissionInput::parse("x", "   "),
            Err(InputError::EmptyRepo)
        );
    }

    #[test]
    fn rejected_input_leaves_the_machine_idle() {
        let machine = SubmissionMachine::new();
        // Parsing happens before `begin`; a validation failure never touches
        // the machine.
        assert!(SubmissionInput::parse("", "x").is_err());
        assert_eq!(machine.state(), &RequestState::Idle);
    }
}
