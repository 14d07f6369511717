use crate::intake::first_file;
use crate::{AppState, Effect, Msg, MISSING_FILE_MESSAGE, UNKNOWN_ERROR_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DragEntered => {
            state.set_dragging(true);
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_dragging(false);
            Vec::new()
        }
        Msg::FilesDropped(files) => {
            state.set_dragging(false);
            if let Some(file) = first_file(files) {
                state.select_file(file);
            }
            Vec::new()
        }
        Msg::FilesBrowsed(files) => {
            if let Some(file) = first_file(files) {
                state.select_file(file);
            }
            Vec::new()
        }
        Msg::JobDescriptionChanged(text) => {
            state.set_job_description(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // A submit while already Submitting is not rejected here; the view
            // disables the button, and completions are reconciled by policy.
            match state.selected_file().cloned() {
                None => {
                    state.fail(MISSING_FILE_MESSAGE);
                    Vec::new()
                }
                Some(file) => {
                    let submission_id = state.begin_submission();
                    vec![Effect::SubmitAnalysis {
                        submission_id,
                        file,
                        job_description: state.job_description().to_owned(),
                    }]
                }
            }
        }
        Msg::AnalysisCompleted {
            submission_id,
            outcome,
        } => {
            if state.accepts_completion(submission_id) {
                match outcome {
                    Ok(result) => state.succeed(result),
                    Err(message) if message.is_empty() => {
                        state.fail(UNKNOWN_ERROR_MESSAGE)
                    }
                    Err(message) => state.fail(message),
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}
