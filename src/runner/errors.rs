//! Error type for simulated runs
//!
//! A [`RunnerError`] never escapes the runner: the completion step renders it
//! into the output area as `Error: <message>`.

use thiserror::Error;

/// Failure raised by an [`OutputSource`](super::output::OutputSource) while
/// producing a transcript
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunnerError {
    /// The output source could not produce a transcript
    #[error("{message}")]
    Simulation { message: String },
}

impl RunnerError {
    pub fn simulation(message: impl Into<String>) -> Self {
        RunnerError::Simulation {
            message: message.into(),
        }
    }

    /// Text shown in the output area in place of a transcript
    pub fn display_output(&self) -> String {
        format!("Error: {}", self)
    }
}
