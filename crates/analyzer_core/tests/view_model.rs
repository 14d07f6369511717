use analyzer_core::{
    update, AnalysisResult, AppState, KeywordListView, Msg, NumberedItem, ResultView,
    ScoreTone, SelectedFile, NO_SUMMARY, SCORE_PLACEHOLDER, SUBMIT_LABEL, SUBMIT_LABEL_BUSY,
};
use pretty_assertions::assert_eq;

fn succeeded(body: &str) -> AppState {
    let file = SelectedFile::new("cv.pdf", "/tmp/cv.pdf");
    let (state, _) = update(AppState::new(), Msg::FilesDropped(vec![file]));
    let (state, _) = update(state, Msg::SubmitClicked);
    let outcome = AnalysisResult::from_json(body).map_err(|err| err.to_string());
    update(
        state,
        Msg::AnalysisCompleted {
            submission_id: 1,
            outcome,
        },
    )
    .0
}

fn result_view(body: &str) -> ResultView {
    succeeded(body).view().result.expect("result section")
}

#[test]
fn idle_renders_form_only() {
    let view = AppState::new().view();

    assert!(view.loading.is_none());
    assert!(view.error.is_none());
    assert!(view.result.is_none());
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label, SUBMIT_LABEL);
}

#[test]
fn submitting_renders_loading_only() {
    let file = SelectedFile::new("cv.pdf", "/tmp/cv.pdf");
    let (state, _) = update(AppState::new(), Msg::FilesDropped(vec![file]));
    let (state, _) = update(state, Msg::SubmitClicked);
    let view = state.view();

    assert!(view.loading.is_some());
    assert!(view.result.is_none());
    assert!(view.error.is_none());
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, SUBMIT_LABEL_BUSY);
}

#[test]
fn full_response_renders_every_section() {
    let view = result_view(
        r#"{ "atsScore": 85, "summary": "Good fit", "matchedKeywords": ["python","sql"],
             "missingKeywords": [], "strengths": ["clear formatting"],
             "suggestions": ["add metrics"] }"#,
    );

    assert_eq!(
        view,
        ResultView {
            score_text: "85".to_string(),
            score_tone: ScoreTone::Good,
            bar_percent: 85,
            summary: "Good fit".to_string(),
            matched: KeywordListView {
                label: "Matched Keywords",
                count: 2,
                tags: vec!["python".to_string(), "sql".to_string()],
            },
            missing: KeywordListView {
                label: "Missing Keywords",
                count: 0,
                tags: Vec::new(),
            },
            strengths: vec!["clear formatting".to_string()],
            suggestions: vec![NumberedItem {
                marker: "1.".to_string(),
                text: "add metrics".to_string(),
            }],
        }
    );
}

#[test]
fn score_tone_thresholds() {
    assert_eq!(ScoreTone::for_score(Some(100.0)), ScoreTone::Good);
    assert_eq!(ScoreTone::for_score(Some(70.0)), ScoreTone::Good);
    assert_eq!(ScoreTone::for_score(Some(69.0)), ScoreTone::Fair);
    assert_eq!(ScoreTone::for_score(Some(40.0)), ScoreTone::Fair);
    assert_eq!(ScoreTone::for_score(Some(39.0)), ScoreTone::Poor);
    assert_eq!(ScoreTone::for_score(Some(0.0)), ScoreTone::Poor);
    assert_eq!(ScoreTone::for_score(None), ScoreTone::Poor);
}

#[test]
fn fractional_score_keeps_its_bucket_and_text() {
    let view = result_view(r#"{"atsScore": 69.6}"#);
    assert_eq!(view.score_tone, ScoreTone::Fair);
    assert_eq!(view.score_text, "69.6");
    assert_eq!(view.bar_percent, 70);

    let view = result_view(r#"{"atsScore": 39.9}"#);
    assert_eq!(view.score_tone, ScoreTone::Poor);
}

#[test]
fn numeric_string_score_renders_normally() {
    let view = result_view(r#"{"atsScore": "85", "summary": "ok"}"#);

    assert_eq!(view.score_tone, ScoreTone::Good);
    assert_eq!(view.score_text, "85");
    assert_eq!(view.bar_percent, 85);
    assert_eq!(view.summary, "ok");
}

#[test]
fn absent_score_shows_placeholder_and_empty_bar() {
    let view = result_view("{}");

    assert_eq!(view.score_text, SCORE_PLACEHOLDER);
    assert_eq!(view.bar_percent, 0);
    assert_eq!(view.score_tone, ScoreTone::Poor);
}

#[test]
fn out_of_range_score_is_clamped_for_bar_only() {
    let view = result_view(r#"{"atsScore": 140}"#);
    assert_eq!(view.score_text, "140");
    assert_eq!(view.bar_percent, 100);

    let view = result_view(r#"{"atsScore": -5}"#);
    assert_eq!(view.bar_percent, 0);
}

#[test]
fn summary_fallback_chain() {
    assert_eq!(result_view(r#"{"aiRaw": "raw text"}"#).summary, "raw text");
    assert_eq!(
        result_view(r#"{"summary": "", "aiRaw": "raw text"}"#).summary,
        "raw text"
    );
    assert_eq!(
        result_view(r#"{"summary": "short", "aiRaw": "raw text"}"#).summary,
        "short"
    );
    assert_eq!(result_view("{}").summary, NO_SUMMARY);
    assert_eq!(
        result_view(r#"{"summary": "", "aiRaw": ""}"#).summary,
        NO_SUMMARY
    );
}

#[test]
fn suggestions_are_numbered_in_order() {
    let view = result_view(r#"{"suggestions": ["quantify impact", "add links", "trim"]}"#);
    let markers: Vec<_> = view.suggestions.iter().map(|s| s.marker.as_str()).collect();
    let texts: Vec<_> = view.suggestions.iter().map(|s| s.text.as_str()).collect();

    assert_eq!(markers, vec!["1.", "2.", "3."]);
    assert_eq!(texts, vec!["quantify impact", "add links", "trim"]);
}

#[test]
fn decode_failure_surfaces_as_error() {
    let view = succeeded("not json").view();

    assert!(view.result.is_none());
    assert!(view.error.is_some_and(|message| !message.is_empty()));
}
