// learn-lld: an interactive low-level design course in the terminal

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use learn_lld::config::{AppConfig, Overrides};
use learn_lld::context::SiteContext;
use learn_lld::logging;
use learn_lld::ui::App;

/// Learn object-oriented design and design patterns in the terminal
#[derive(Parser, Debug)]
#[command(name = "learn-lld")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to open first, e.g. /patterns/singleton
    #[arg(long)]
    route: Option<String>,

    /// Use the dark palette
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Use the light palette, even if the config file asks for dark
    #[arg(long)]
    light: bool,

    /// Simulated execution delay in milliseconds
    #[arg(long)]
    run_delay_ms: Option<u64>,

    /// Write logs to this file (logging is off without one)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level or filter directive; RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        let dark_mode = match (self.dark, self.light) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Overrides {
            start_route: self.route.clone(),
            dark_mode,
            run_delay_ms: self.run_delay_ms,
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load_or_default(args.config.as_deref())
        .context("could not load configuration")?
        .merge(args.overrides());

    logging::init(&config).context("could not set up logging")?;
    tracing::info!(start_route = %config.start_route, dark_mode = config.dark_mode, "starting");

    let ctx = SiteContext::new(config);

    // Restore the terminal even if the UI panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(ctx);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal error");
        return Err(err).context("terminal UI failed");
    }

    tracing::info!("exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_flags() {
        let args = Args::try_parse_from(["learn-lld", "--light"]).unwrap();
        assert_eq!(args.overrides().dark_mode, Some(false));

        let args = Args::try_parse_from(["learn-lld", "--dark"]).unwrap();
        assert_eq!(args.overrides().dark_mode, Some(true));

        let args = Args::try_parse_from(["learn-lld"]).unwrap();
        assert_eq!(args.overrides().dark_mode, None);
    }

    #[test]
    fn test_dark_and_light_conflict() {
        assert!(Args::try_parse_from(["learn-lld", "--dark", "--light"]).is_err());
    }
}
