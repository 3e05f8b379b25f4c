//! Process-wide site context
//!
//! Built once in `main` and handed to [`App`](crate::ui::App). Anything that
//! would otherwise be a global (configuration, the transcript table) lives
//! here.

use crate::config::AppConfig;
use crate::content::CodeSample;
use crate::runner::{CodeRunner, OutputSource, OutputTable, RunnerOptions};
use std::rc::Rc;

pub struct SiteContext {
    pub config: AppConfig,
    outputs: Rc<dyn OutputSource>,
}

impl SiteContext {
    pub fn new(config: AppConfig) -> Self {
        Self::with_output_source(config, Rc::new(OutputTable::builtin()))
    }

    pub fn with_output_source(config: AppConfig, outputs: Rc<dyn OutputSource>) -> Self {
        SiteContext { config, outputs }
    }

    pub fn dark_mode(&self) -> bool {
        self.config.dark_mode
    }

    /// Build a runner for `sample` sharing the context's transcript table and
    /// run delay. Accepted runs are logged.
    pub fn runner(&self, sample: &CodeSample, read_only: bool) -> CodeRunner {
        let title = sample.title;
        let options = RunnerOptions::new(sample.code, sample.language)
            .read_only(read_only)
            .dark_mode(self.config.dark_mode)
            .on_run(move |source| {
                tracing::info!(snippet = title, chars = source.len(), "snippet run");
            });

        CodeRunner::new(options)
            .with_delay(self.config.run_delay())
            .with_output_source(Rc::clone(&self.outputs))
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
