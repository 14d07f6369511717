use std::sync::Once;

use analyzer_core::{
    update, AnalysisResult, AppState, Effect, Msg, ResolutionPolicy, SelectedFile,
    SubmissionState, MISSING_FILE_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(analyzer_logging::initialize_for_tests);
}

fn with_file(state: AppState) -> AppState {
    let file = SelectedFile::new("cv.pdf", "/tmp/cv.pdf");
    update(state, Msg::FilesBrowsed(vec![file])).0
}

fn scored(score: f64) -> AnalysisResult {
    AnalysisResult {
        ats_score: Some(score),
        ..AnalysisResult::default()
    }
}

fn complete(
    state: AppState,
    submission_id: u64,
    outcome: Result<AnalysisResult, String>,
) -> AppState {
    update(
        state,
        Msg::AnalysisCompleted {
            submission_id,
            outcome,
        },
    )
    .0
}

#[test]
fn submit_without_file_fails_locally() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::JobDescriptionChanged("Rust dev".into()));
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.submission(),
        &SubmissionState::Failed(MISSING_FILE_MESSAGE.to_string())
    );
    assert_eq!(state.last_submission_id(), 0);
    assert_eq!(state.view().error.as_deref(), Some(MISSING_FILE_MESSAGE));
}

#[test]
fn submit_with_file_emits_request_effect() {
    init_logging();
    let state = with_file(AppState::new());
    let (state, _) = update(state, Msg::JobDescriptionChanged("SQL and Python".into()));
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(state.submission(), &SubmissionState::Submitting);
    assert_eq!(
        effects,
        vec![Effect::SubmitAnalysis {
            submission_id: 1,
            file: SelectedFile::new("cv.pdf", "/tmp/cv.pdf"),
            job_description: "SQL and Python".to_string(),
        }]
    );
}

#[test]
fn empty_job_description_is_allowed() {
    init_logging();
    let (_, effects) = update(with_file(AppState::new()), Msg::SubmitClicked);

    match effects.as_slice() {
        [Effect::SubmitAnalysis {
            job_description, ..
        }] => assert!(job_description.is_empty()),
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn resubmit_after_failure_clears_error() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SubmitClicked);
    assert!(state.view().error.is_some());

    let (state, effects) = update(with_file(state), Msg::SubmitClicked);
    let view = state.view();
    assert_eq!(effects.len(), 1);
    assert!(view.error.is_none());
    assert!(view.loading.is_some());
    assert!(!view.submit_enabled);
}

#[test]
fn completion_success_and_failure() {
    init_logging();
    let (state, _) = update(with_file(AppState::new()), Msg::SubmitClicked);
    let state = complete(state, 1, Ok(scored(85.0)));
    assert_eq!(state.submission(), &SubmissionState::Succeeded(scored(85.0)));

    let (state, _) = update(state, Msg::SubmitClicked);
    let state = complete(state, 2, Err("Service unavailable".into()));
    let view = state.view();
    assert_eq!(view.error.as_deref(), Some("Service unavailable"));
    assert!(view.result.is_none());
    assert!(view.submit_enabled);
}

#[test]
fn empty_failure_message_falls_back() {
    init_logging();
    let (state, _) = update(with_file(AppState::new()), Msg::SubmitClicked);
    let state = complete(state, 1, Err(String::new()));

    assert_eq!(
        state.submission(),
        &SubmissionState::Failed(UNKNOWN_ERROR_MESSAGE.to_string())
    );
}

#[test]
fn double_submit_settles_to_complete_state() {
    init_logging();
    let (state, first) = update(with_file(AppState::new()), Msg::SubmitClicked);
    let (state, second) = update(state, Msg::SubmitClicked);
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(state.submission(), &SubmissionState::Submitting);
    assert_eq!(state.last_submission_id(), 2);

    let state = complete(state, 1, Ok(scored(30.0)));
    assert_eq!(state.submission(), &SubmissionState::Succeeded(scored(30.0)));

    // Default policy: the late completion overwrites, as a whole.
    let state = complete(state, 2, Err("HTTP 502".into()));
    assert_eq!(
        state.submission(),
        &SubmissionState::Failed("HTTP 502".to_string())
    );
}

#[test]
fn latest_only_discards_stale_completion() {
    init_logging();
    let state = with_file(AppState::with_policy(ResolutionPolicy::LatestOnly));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(state, Msg::SubmitClicked);

    let mut state = complete(state, 2, Ok(scored(90.0)));
    assert!(state.consume_dirty());

    let mut state = complete(state, 1, Err("stale".into()));
    assert_eq!(state.submission(), &SubmissionState::Succeeded(scored(90.0)));
    assert!(!state.consume_dirty());
}

#[test]
fn latest_only_ignores_early_stale_completion_while_submitting() {
    init_logging();
    let state = with_file(AppState::with_policy(ResolutionPolicy::LatestOnly));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(state, Msg::SubmitClicked);

    let state = complete(state, 1, Ok(scored(10.0)));
    assert_eq!(state.submission(), &SubmissionState::Submitting);
    assert_eq!(state.policy(), ResolutionPolicy::LatestOnly);
}
