use std::fs;
use std::path::PathBuf;

use analyzer_core::{Msg, ResolutionPolicy, SelectedFile};
use analyzer_engine::DEFAULT_BASE_URL;
use analyzer_logging::{LevelFilter, LogDestination, DEFAULT_LOG_FILE};
use anyhow::Context;
use clap::{Parser, ValueEnum};

/// Send a resume and a job description to the analysis service and print the report.
#[derive(Debug, Parser)]
#[command(name = "resume-analyzer", version, about)]
pub struct Cli {
    /// Resume file(s). Passing several behaves like dropping several files: the first one is used.
    #[arg(value_name = "RESUME")]
    pub resumes: Vec<PathBuf>,

    /// Job description text.
    #[arg(long, conflicts_with = "jd_file")]
    pub jd: Option<String>,

    /// Read the job description from a file.
    #[arg(long, value_name = "PATH")]
    pub jd_file: Option<PathBuf>,

    /// Base URL of the analysis service.
    #[arg(long, env = "ANALYZER_URL", default_value = DEFAULT_BASE_URL)]
    pub server: String,

    /// Only apply the result of the most recent submission.
    #[arg(long)]
    pub latest_only: bool,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log file used by `--log file` and `--log both`.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log request details at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl Cli {
    pub fn policy(&self) -> ResolutionPolicy {
        if self.latest_only {
            ResolutionPolicy::LatestOnly
        } else {
            ResolutionPolicy::AcceptAll
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }

    /// Terminal output stays quiet unless asked; the report goes to stdout too.
    pub fn log_level(&self) -> LevelFilter {
        match (self.verbose, self.log) {
            (true, _) => LevelFilter::Debug,
            (false, LogTarget::Terminal) => LevelFilter::Warn,
            (false, _) => LevelFilter::Info,
        }
    }

    pub fn job_description(&self) -> anyhow::Result<String> {
        match (&self.jd, &self.jd_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("reading job description from {}", path.display())),
            (None, None) => Ok(String::new()),
        }
    }

    /// The form interaction these arguments stand for, in order.
    pub fn initial_messages(&self) -> anyhow::Result<Vec<Msg>> {
        let mut msgs = Vec::with_capacity(4);
        if !self.resumes.is_empty() {
            let files = self.resumes.iter().map(SelectedFile::from_path).collect();
            msgs.push(Msg::DragEntered);
            msgs.push(Msg::FilesDropped(files));
        }
        msgs.push(Msg::JobDescriptionChanged(self.job_description()?));
        msgs.push(Msg::SubmitClicked);
        Ok(msgs)
    }
}
