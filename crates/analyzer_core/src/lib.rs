//! Analyzer core: pure submission state machine and view-model projection.
mod effect;
mod intake;
mod msg;
mod result;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use intake::{SelectedFile, ACCEPTED_EXTENSIONS};
pub use msg::Msg;
pub use result::AnalysisResult;
pub use state::{
    AppState, ResolutionPolicy, SubmissionId, SubmissionState, MISSING_FILE_MESSAGE,
    UNKNOWN_ERROR_MESSAGE,
};
pub use update::update;
pub use view_model::{
    AppViewModel, KeywordListView, LoadingView, NumberedItem, ResultView, ScoreTone,
    DROP_HINT, NO_SUMMARY, SCORE_PLACEHOLDER, SUBMIT_LABEL, SUBMIT_LABEL_BUSY,
};
