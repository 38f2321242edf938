//! README generation - View Model

use leptos::prelude::*;

use super::state::{Artifact, SubmissionMachine};

#[derive(Clone, Copy)]
pub struct GeneratorVm {
    pub profile: RwSignal<String>,
    pub repo: RwSignal<String>,
    pub machine: RwSignal<SubmissionMachine>,
}

impl GeneratorVm {
    pub fn new() -> Self {
        Self {
            profile: RwSignal::new(String::new()),
            repo: RwSignal::new(String::new()),
            machine: RwSignal::new(SubmissionMachine::new()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.machine.with(|m| m.is_pending())
    }

    /// Artifact of the latest settled submission, if any.
    pub fn artifact(&self) -> Option<Artifact> {
        self.machine.with(|m| m.artifact().cloned())
    }

    /// Changes whenever a submission is accepted; the artifact panel keys
    /// its view-mode reset off this.
    pub fn epoch(&self) -> u64 {
        self.machine.with(|m| m.epoch())
    }

    /// Submission is enabled only with both fields filled and nothing in
    /// flight.
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
            && !self.profile.with(|p| p.trim().is_empty())
            && !self.repo.with(|r| r.trim().is_empty())
    }
}
