use crate::{AnalysisResult, AppState, SubmissionState};

/// Drop target text before any file is chosen.
pub const DROP_HINT: &str = "Drag & drop your file here, or click to browse";
/// Score badge text when the service sent no score.
pub const SCORE_PLACEHOLDER: &str = "N/A";
/// Summary text when neither `summary` nor `aiRaw` has content.
pub const NO_SUMMARY: &str = "No summary available.";
pub const SUBMIT_LABEL: &str = "Analyze Resume";
pub const SUBMIT_LABEL_BUSY: &str = "Analyzing...";

const GOOD_SCORE: f64 = 70.0;
const FAIR_SCORE: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub file_label: String,
    pub file_selected: bool,
    pub dragging: bool,
    pub job_description: String,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub loading: Option<LoadingView>,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingView {
    pub headline: &'static str,
    pub detail: &'static str,
}

impl Default for LoadingView {
    fn default() -> Self {
        Self {
            headline: "Analyzing resume...",
            detail: "Almost done, hang tight",
        }
    }
}

/// Colour class of the score badge and bar: green, yellow, red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Good,
    Fair,
    Poor,
}

impl ScoreTone {
    /// Compared unrounded; an absent score counts as 0.
    pub fn for_score(score: Option<f64>) -> Self {
        match score.unwrap_or(0.0) {
            s if s >= GOOD_SCORE => ScoreTone::Good,
            s if s >= FAIR_SCORE => ScoreTone::Fair,
            _ => ScoreTone::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub score_text: String,
    pub score_tone: ScoreTone,
    /// Width of the score bar, 0..=100. The only place the score is clamped.
    pub bar_percent: u8,
    pub summary: String,
    pub matched: KeywordListView,
    pub missing: KeywordListView,
    pub strengths: Vec<String>,
    pub suggestions: Vec<NumberedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordListView {
    pub label: &'static str,
    pub count: usize,
    pub tags: Vec<String>,
}

impl KeywordListView {
    fn new(label: &'static str, tags: &[String]) -> Self {
        Self {
            label,
            count: tags.len(),
            tags: tags.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedItem {
    pub marker: String,
    pub text: String,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let (file_label, file_selected) = match self.selected_file() {
            Some(file) => (file.name.clone(), true),
            None => (DROP_HINT.to_string(), false),
        };
        let submitting = matches!(self.submission(), SubmissionState::Submitting);

        let (loading, error, result) = match self.submission() {
            SubmissionState::Idle => (None, None, None),
            SubmissionState::Submitting => (Some(LoadingView::default()), None, None),
            SubmissionState::Failed(message) => (None, Some(message.clone()), None),
            SubmissionState::Succeeded(result) => (None, None, Some(ResultView::from(result))),
        };

        AppViewModel {
            file_label,
            file_selected,
            dragging: self.is_dragging(),
            job_description: self.job_description().to_string(),
            submit_enabled: !submitting,
            submit_label: if submitting {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL
            },
            loading,
            error,
            result,
        }
    }
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        let score_text = result
            .ats_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| SCORE_PLACEHOLDER.to_string());

        Self {
            score_text,
            score_tone: ScoreTone::for_score(result.ats_score),
            bar_percent: result.ats_score.unwrap_or(0.0).clamp(0.0, 100.0).round() as u8,
            summary: summary_text(result).to_string(),
            matched: KeywordListView::new("Matched Keywords", &result.matched_keywords),
            missing: KeywordListView::new("Missing Keywords", &result.missing_keywords),
            strengths: result.strengths.clone(),
            suggestions: result
                .suggestions
                .iter()
                .enumerate()
                .map(|(index, text)| NumberedItem {
                    marker: format!("{}.", index + 1),
                    text: text.clone(),
                })
                .collect(),
        }
    }
}

fn summary_text(result: &AnalysisResult) -> &str {
    [result.summary.as_deref(), result.ai_raw.as_deref()]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or(NO_SUMMARY)
}
