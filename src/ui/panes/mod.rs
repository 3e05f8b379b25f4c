//! Shell pane rendering
//!
//! These panes surround every page or are embedded in several of them.
//!
//! # Pane Modules
//!
//! - [`header`]: brand, navigation links, menu popup and search bar
//! - [`footer`]: tagline and link columns
//! - [`status`]: status bar with keybindings and the current path
//! - [`code_runner`]: the simulated code runner with syntax highlighting
//!
//! Each module exports a `render_*` function; [`header`] also owns
//! [`HeaderState`], the only state the shell keeps.

pub mod code_runner;
pub mod footer;
pub mod header;
pub mod status;

pub use code_runner::{highlight_code_line, render_code_runner};
pub use footer::render_footer;
pub use header::{render_header, render_menu, HeaderState};
pub use status::render_status_bar;

/// Scroll offset that keeps `line` inside a viewport of `height` rows
pub(crate) fn keep_visible(offset: u16, line: usize, height: u16) -> u16 {
    let line = line.min(u16::MAX as usize) as u16;
    let height = height.max(1);
    if line < offset {
        line
    } else if line >= offset.saturating_add(height) {
        line + 1 - height
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_visible_scrolls_down_and_up() {
        assert_eq!(keep_visible(0, 3, 10), 0);
        assert_eq!(keep_visible(0, 12, 10), 3);
        assert_eq!(keep_visible(8, 2, 10), 2);
    }
}
