//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, route history, header menu/search and the event loop
//! - **[`pages`]**: one state struct per route, drawing itself and reacting to keys
//! - **[`panes`]**: render functions shared by pages (header, footer, status bar, code runner)
//! - **[`theme`]**: light and dark color palettes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`SiteContext`] and call [`App::run`] to start the event loop.
//!
//! [`SiteContext`]: crate::context::SiteContext
//! [`App::run`]: app::App::run

pub mod app;
pub mod pages;
pub mod panes;
pub mod theme;

pub use app::App;
