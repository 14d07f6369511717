use crate::{SelectedFile, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the resume and job description to the analysis service.
    SubmitAnalysis {
        submission_id: SubmissionId,
        file: SelectedFile,
        job_description: String,
    },
}
