use crate::{AnalysisResult, SelectedFile};

pub type SubmissionId = u64;

/// Shown when the user submits before choosing a resume.
pub const MISSING_FILE_MESSAGE: &str = "Please upload a resume file (PDF/DOCX).";

/// Shown when a request failed without any usable error text.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(AnalysisResult),
    Failed(String),
}

/// How completions from superseded submissions are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    /// Apply every completion in arrival order; the last one wins.
    #[default]
    AcceptAll,
    /// Apply only the completion of the most recently issued submission.
    LatestOnly,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    selected_file: Option<SelectedFile>,
    dragging: bool,
    job_description: String,
    submission: SubmissionState,
    policy: ResolutionPolicy,
    last_submission_id: SubmissionId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ResolutionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    /// Id of the most recently issued submission, or 0 before the first one.
    pub fn last_submission_id(&self) -> SubmissionId {
        self.last_submission_id
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        if self.dragging != dragging {
            self.dragging = dragging;
            self.mark_dirty();
        }
    }

    pub(crate) fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
        self.mark_dirty();
    }

    pub(crate) fn set_job_description(&mut self, text: String) {
        if self.job_description != text {
            self.job_description = text;
            self.mark_dirty();
        }
    }

    /// Moves to `Submitting` and hands out the id for the new request.
    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.last_submission_id += 1;
        self.submission = SubmissionState::Submitting;
        self.mark_dirty();
        self.last_submission_id
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.submission = SubmissionState::Failed(message.into());
        self.mark_dirty();
    }

    pub(crate) fn succeed(&mut self, result: AnalysisResult) {
        self.submission = SubmissionState::Succeeded(result);
        self.mark_dirty();
    }

    pub(crate) fn accepts_completion(&self, submission_id: SubmissionId) -> bool {
        match self.policy {
            ResolutionPolicy::AcceptAll => true,
            ResolutionPolicy::LatestOnly => submission_id == self.last_submission_id,
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
