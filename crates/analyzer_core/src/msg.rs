use crate::{AnalysisResult, SelectedFile, SubmissionId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A drag gesture started hovering the drop target.
    DragEntered,
    /// The drag gesture left the drop target without dropping.
    DragLeft,
    /// Files were dropped on the drop target.
    FilesDropped(Vec<SelectedFile>),
    /// Files were picked through the browse dialog.
    FilesBrowsed(Vec<SelectedFile>),
    /// User edited the job description text.
    JobDescriptionChanged(String),
    /// User pressed the analyze button.
    SubmitClicked,
    /// The analysis service answered (or the request failed).
    AnalysisCompleted {
        submission_id: SubmissionId,
        outcome: Result<AnalysisResult, String>,
    },
}
