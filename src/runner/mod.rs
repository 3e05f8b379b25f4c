//! Simulated code runner widget
//!
//! A [`CodeRunner`] holds a snippet of source text and pretends to run it. No
//! parsing or execution takes place: an accepted run shows a placeholder, and
//! once one delay unit has elapsed the output is replaced by whatever the
//! runner's [`OutputSource`] produces for the snippet's language.
//!
//! ```text
//! Idle --run--> Running --delay--> Completed --run--> Running --delay--> ...
//! ```
//!
//! Time is passed in explicitly (`run_at` / `poll`) so the state machine can be
//! driven without a real clock; `run` / `tick` are the wall-clock shorthands.

pub mod errors;
pub mod output;

use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub use errors::RunnerError;
pub use output::{OutputSource, OutputTable};

/// Output shown while a run is pending
pub const RUNNING_PLACEHOLDER: &str = "Running code...";

/// Delay unit between an accepted run and its completion
pub const DEFAULT_RUN_DELAY: Duration = Duration::from_millis(1000);

/// Notification fired with the source text when a run is accepted
pub type RunCallback = Box<dyn FnMut(&str)>;

/// Run status of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Never run
    Idle,
    /// Waiting for the delay unit to elapse
    Running,
    /// Showing the output of the most recent run
    Completed,
}

/// Construction options for a [`CodeRunner`]
pub struct RunnerOptions {
    pub initial_source: String,
    pub language: String,
    pub read_only: bool,
    pub dark_mode: bool,
    pub on_run: Option<RunCallback>,
}

impl RunnerOptions {
    pub fn new(initial_source: impl Into<String>, language: impl Into<String>) -> Self {
        RunnerOptions {
            initial_source: initial_source.into(),
            language: language.into(),
            read_only: false,
            dark_mode: false,
            on_run: None,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    pub fn on_run(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_run = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for RunnerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerOptions")
            .field("initial_source", &self.initial_source)
            .field("language", &self.language)
            .field("read_only", &self.read_only)
            .field("dark_mode", &self.dark_mode)
            .field("on_run", &self.on_run.is_some())
            .finish()
    }
}

/// Read-only view used for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState<'a> {
    pub source: &'a str,
    pub status: RunStatus,
    pub output: Option<&'a str>,
}

/// The simulated runner widget
pub struct CodeRunner {
    source: String,
    language: String,
    read_only: bool,
    dark_mode: bool,
    on_run: Option<RunCallback>,
    status: RunStatus,
    output: Option<String>,
    /// Instant the pending run was accepted; `Some` only while Running
    started_at: Option<Instant>,
    delay: Duration,
    outputs: Rc<dyn OutputSource>,
}

impl CodeRunner {
    /// Create an idle runner backed by the builtin transcript table
    pub fn new(options: RunnerOptions) -> Self {
        CodeRunner {
            source: options.initial_source,
            language: options.language,
            read_only: options.read_only,
            dark_mode: options.dark_mode,
            on_run: options.on_run,
            status: RunStatus::Idle,
            output: None,
            started_at: None,
            delay: DEFAULT_RUN_DELAY,
            outputs: Rc::new(OutputTable::builtin()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_output_source(mut self, outputs: Rc<dyn OutputSource>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Language id with its first character upper-cased, as shown in the
    /// widget header
    pub fn label(&self) -> String {
        let mut chars = self.language.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the run control is offered at all
    pub fn can_run(&self) -> bool {
        !self.read_only && self.status != RunStatus::Running
    }

    pub fn display_state(&self) -> DisplayState<'_> {
        DisplayState {
            source: &self.source,
            status: self.status,
            output: self.output.as_deref(),
        }
    }

    /// Replace the source text. Returns `false` (and changes nothing) on a
    /// read-only runner.
    pub fn edit(&mut self, new_text: impl Into<String>) -> bool {
        if self.read_only {
            return false;
        }
        self.source = new_text.into();
        true
    }

    /// Append a character at the end of the source
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.read_only {
            return false;
        }
        self.source.push(c);
        true
    }

    /// Remove the last character of the source
    pub fn backspace(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        self.source.pop().is_some()
    }

    /// Start a run using the wall clock
    pub fn run(&mut self) -> bool {
        self.run_at(Instant::now())
    }

    /// Start a run accepted at `now`. Returns `false` when the runner is
    /// read-only or a run is already pending.
    pub fn run_at(&mut self, now: Instant) -> bool {
        if !self.can_run() {
            return false;
        }

        self.status = RunStatus::Running;
        self.output = Some(RUNNING_PLACEHOLDER.to_string());
        self.started_at = Some(now);

        if let Some(callback) = self.on_run.as_mut() {
            callback(&self.source);
        }

        tracing::debug!(language = %self.language, "simulated run accepted");
        true
    }

    /// Complete the pending run using the wall clock
    pub fn tick(&mut self) -> bool {
        self.poll(Instant::now())
    }

    /// Complete the pending run if one delay unit has elapsed by `now`.
    /// Returns `true` when this call produced the output.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        if now.saturating_duration_since(started_at) < self.delay {
            return false;
        }

        let output = match self.outputs.simulate(&self.language, &self.source) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(language = %self.language, error = %e, "simulated run failed");
                e.display_output()
            }
        };

        self.output = Some(output);
        self.status = RunStatus::Completed;
        self.started_at = None;
        true
    }
}

impl fmt::Debug for CodeRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeRunner")
            .field("language", &self.language)
            .field("read_only", &self.read_only)
            .field("status", &self.status)
            .field("output", &self.output)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}
