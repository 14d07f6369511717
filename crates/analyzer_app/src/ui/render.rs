use analyzer_core::{AppViewModel, KeywordListView, ResultView, ScoreTone};

const BAR_CELLS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Muted,
    Accent,
    Error,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One rendering of the view model, split so a section is only redrawn when it changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub form: Vec<Line>,
    pub status: Vec<Line>,
    pub result: Vec<Line>,
}

pub fn render(view: &AppViewModel) -> Frame {
    Frame {
        form: render_form(view),
        status: render_status(view),
        result: view.result.as_ref().map(render_result).unwrap_or_default(),
    }
}

fn render_form(view: &AppViewModel) -> Vec<Line> {
    let file_tone = if view.file_selected {
        Tone::Accent
    } else {
        Tone::Muted
    };
    let file_text = if view.dragging {
        format!("  {} (release to drop)", view.file_label)
    } else {
        format!("  {}", view.file_label)
    };
    let jd = match view.job_description.chars().count() {
        0 => Line::new("  (none)", Tone::Muted),
        n => Line::new(format!("  {n} characters"), Tone::Plain),
    };

    vec![
        Line::new("AI Resume Analyzer", Tone::Heading),
        Line::new("Upload Resume (PDF / DOCX)", Tone::Plain),
        Line::new(file_text, file_tone),
        Line::new("Job Description (JD)", Tone::Plain),
        jd,
    ]
}

fn render_status(view: &AppViewModel) -> Vec<Line> {
    let mut lines = Vec::new();
    if let Some(loading) = &view.loading {
        lines.push(Line::new(format!("[ {} ]", view.submit_label), Tone::Muted));
        lines.push(Line::new(loading.headline, Tone::Plain));
        lines.push(Line::new(loading.detail, Tone::Accent));
    }
    if let Some(error) = &view.error {
        lines.push(Line::new(error.clone(), Tone::Error));
    }
    lines
}

fn render_result(result: &ResultView) -> Vec<Line> {
    let tone = score_tone(result.score_tone);
    let mut lines = vec![
        Line::new("AI Results", Tone::Heading),
        Line::new(format!("ATS Score: {}/100", result.score_text), tone),
        Line::new(score_bar(result.bar_percent), tone),
        Line::new("Summary", Tone::Heading),
    ];
    lines.extend(
        result
            .summary
            .lines()
            .map(|line| Line::new(format!("  {line}"), Tone::Plain)),
    );

    lines.extend(keyword_lines(&result.matched, Tone::Good));
    lines.extend(keyword_lines(&result.missing, Tone::Poor));

    lines.push(Line::new("Strengths", Tone::Heading));
    lines.extend(
        result
            .strengths
            .iter()
            .map(|item| Line::new(format!("  • {item}"), Tone::Plain)),
    );

    lines.push(Line::new("Suggestions", Tone::Heading));
    lines.extend(
        result
            .suggestions
            .iter()
            .map(|item| Line::new(format!("  {} {}", item.marker, item.text), Tone::Plain)),
    );
    lines
}

fn keyword_lines(list: &KeywordListView, tag_tone: Tone) -> Vec<Line> {
    let mut lines = vec![Line::new(
        format!("{} ({})", list.label, list.count),
        Tone::Heading,
    )];
    if !list.tags.is_empty() {
        let tags = list
            .tags
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::new(format!("  {tags}"), tag_tone));
    }
    lines
}

fn score_tone(tone: ScoreTone) -> Tone {
    match tone {
        ScoreTone::Good => Tone::Good,
        ScoreTone::Fair => Tone::Fair,
        ScoreTone::Poor => Tone::Poor,
    }
}

fn score_bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_CELLS / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(BAR_CELLS - filled),
        percent
    )
}
