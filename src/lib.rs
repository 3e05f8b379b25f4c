//! # Introduction
//!
//! learn-lld is an interactive course on object-oriented design and design
//! patterns, browsed in the terminal through a UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Layers
//!
//! ```text
//! Config → SiteContext → App → Route → Page → Panes
//! ```
//!
//! 1. [`config`] and [`logging`]: JSON configuration and file-based tracing.
//! 2. [`context`]: process-wide state shared by every page.
//! 3. [`routes`]: path resolution with a not-found fallback.
//! 4. [`content`]: the static course material (concepts, principles,
//!    patterns, resources).
//! 5. [`runner`]: the simulated code runner widget.
//! 6. [`progress`]: concept completion, quiz answers and accordions.
//! 7. [`ui`]: the ratatui front end.
//!
//! Code examples are never executed. A run waits for a fixed delay and then
//! shows a canned transcript.

pub mod config;
pub mod content;
pub mod context;
pub mod logging;
pub mod progress;
pub mod routes;
pub mod runner;
pub mod ui;
