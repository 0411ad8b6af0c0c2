//! Interface state: the dispatch state machine and result presentation.
//!
//! Everything here runs on the interface loop. The worker task never touches
//! this state; it reports back through the channel in [`crate::worker`] and
//! the loop applies the outcome via [`App::finish`].

use nd_core::{ArticleAnalysis, Result};
use tracing::{error, info};

pub const READY_STATUS: &str = "Ready to summarize articles";
pub const PROCESSING_STATUS: &str = "🔄 Processing article... Please wait";
pub const SUCCESS_STATUS: &str = "✅ Article processed successfully!";
pub const FAILURE_STATUS: &str = "❌ Error processing article";

pub const VALIDATION_NOTICE: &str = "Please enter a URL to summarize.";

pub const READY_TRIGGER: &str = "📊 Summarize Article";
pub const RUNNING_TRIGGER: &str = "Processing...";

const NO_TITLE: &str = "No title found";
const NO_AUTHORS: &str = "No authors found";
const NO_DATE: &str = "No publication date found";
const NO_SUMMARY: &str = "No summary could be generated";
const NO_SENTIMENT: &str = "Could not analyze sentiment - no text content found";

/// Lifecycle of one dispatch. `Running` is the only state in which a new
/// submission is rejected; there is no cancelled state, a dispatched task
/// always runs to completion.
#[derive(Debug)]
pub enum TaskState {
    Idle,
    Running,
    Succeeded(ArticleAnalysis),
    Failed(String),
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        matches!(self, TaskState::Running)
    }
}

/// Status line severity, mapped to a color by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ready,
    Working,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub severity: Severity,
}

impl StatusLine {
    fn new(text: &str, severity: Severity) -> Self {
        Self {
            text: text.to_string(),
            severity,
        }
    }
}

/// One typed handle per display region, written only by the presenter.
#[derive(Debug, Clone, Default)]
pub struct DisplayFields {
    pub title: String,
    pub authors: String,
    pub date: String,
    pub summary: String,
    pub sentiment: String,
}

pub struct App {
    pub input: String,
    pub task: TaskState,
    pub fields: DisplayFields,
    pub status: StatusLine,
    /// Modal validation notice; blocks input until dismissed.
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            task: TaskState::Idle,
            fields: DisplayFields::default(),
            status: StatusLine::new(READY_STATUS, Severity::Ready),
            notice: None,
            should_quit: false,
        }
    }

    pub fn with_input(url: impl Into<String>) -> Self {
        let mut app = Self::new();
        app.input = url.into();
        app
    }

    /// Submit the current input for analysis.
    ///
    /// Returns the normalized URL to dispatch, or `None` when nothing was
    /// dispatched: a task is already running (re-entrant submissions are
    /// no-ops) or the input failed validation (a modal notice is raised and
    /// the state machine never leaves its current state).
    pub fn submit(&mut self) -> Option<String> {
        if self.task.is_running() {
            return None;
        }

        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            self.notice = Some(VALIDATION_NOTICE.to_string());
            return None;
        }

        let url = normalize_url(trimmed);
        // Reflect the normalization back into the entry field.
        self.input = url.clone();

        self.clear_results();
        self.status = StatusLine::new(PROCESSING_STATUS, Severity::Working);
        self.task = TaskState::Running;
        info!(%url, "Dispatching article analysis");
        Some(url)
    }

    /// Apply a finished dispatch. Runs exactly once per dispatch and always
    /// leaves the trigger re-enabled, whatever the outcome.
    pub fn finish(&mut self, outcome: Result<ArticleAnalysis>) {
        match outcome {
            Ok(analysis) => self.present_success(analysis),
            Err(e) => self.present_failure(e.to_string()),
        }
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.task.is_running()
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.task.is_running() {
            RUNNING_TRIGGER
        } else {
            READY_TRIGGER
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Stale results must never be visible while a new dispatch runs.
    fn clear_results(&mut self) {
        self.fields = DisplayFields::default();
    }

    fn present_success(&mut self, analysis: ArticleAnalysis) {
        self.fields.title = analysis
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_TITLE.to_string());

        self.fields.authors = if analysis.authors.is_empty() {
            NO_AUTHORS.to_string()
        } else {
            analysis.authors.join(", ")
        };

        self.fields.date = analysis
            .published_at
            .map(|d| d.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| NO_DATE.to_string());

        self.fields.summary = analysis
            .summary
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| NO_SUMMARY.to_string());

        self.fields.sentiment = match analysis.sentiment {
            Some(s) => format!(
                "Sentiment: {} {}\nPolarity: {:.3} | Subjectivity: {:.3}",
                s.label(),
                s.label().emoji(),
                s.polarity,
                s.subjectivity
            ),
            None => NO_SENTIMENT.to_string(),
        };

        self.status = StatusLine::new(SUCCESS_STATUS, Severity::Success);
        self.task = TaskState::Succeeded(analysis);
    }

    fn present_failure(&mut self, message: String) {
        self.fields.summary = format!(
            "❌ Error: {}\n\nPlease check:\n- URL is valid and accessible\n- Internet connection is working\n- Website allows scraping",
            message
        );
        self.status = StatusLine::new(FAILURE_STATUS, Severity::Error);
        error!(error = %message, "Article analysis failed");
        self.task = TaskState::Failed(message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Prepend `https://` when the input carries no scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
