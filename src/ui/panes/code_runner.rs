//! Code runner pane rendering with syntax highlighting
//!
//! Renders a [`CodeRunner`]: a header with the language label and run control,
//! the highlighted source on the left, and the output panel on the right once
//! the runner has produced any output.
//!
//! Highlighting uses a small character-by-character tokenizer that knows the
//! keywords of the languages used in the course (TypeScript, JavaScript, Java,
//! C#, Python). It never fails: unknown tokens are rendered as plain text.

use super::keep_visible;
use crate::runner::{CodeRunner, RunStatus};
use crate::ui::theme::{theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Highlight one line of source
pub fn highlight_code_line(line: &str, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        // Line comments
        if c == '/' && chars.get(i + 1).is_some_and(|&(_, next)| next == '/') {
            flush_word(&mut spans, &mut current_word, false, theme);
            spans.push(Span::styled(
                line[pos..].to_string(),
                Style::default().fg(theme.comment),
            ));
            return Line::from(spans);
        }

        // String and template literals
        if c == '"' || c == '\'' || c == '`' {
            flush_word(&mut spans, &mut current_word, false, theme);
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != c {
                if chars[end].1 == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            end = (end + 1).min(chars.len());
            let end_byte = chars.get(end).map_or(line.len(), |&(p, _)| p);
            spans.push(Span::styled(
                line[pos..end_byte].to_string(),
                Style::default().fg(theme.string),
            ));
            i = end;
            continue;
        }

        // Delimiters
        if !c.is_alphanumeric() && c != '_' && c != '$' {
            flush_word(&mut spans, &mut current_word, c == '(', theme);
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(theme.primary),
                _ => Style::default().fg(theme.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false, theme);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'static>>, word: &mut String, is_call: bool, theme: &Theme) {
    if word.is_empty() {
        return;
    }
    let style = word_style(word, is_call, theme);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn word_style(word: &str, is_call: bool, theme: &Theme) -> Style {
    match word {
        "string" | "number" | "boolean" | "void" | "any" | "unknown" | "int" | "bool" | "var"
        | "String" | "Map" => Style::default().fg(theme.type_name),
        "class" | "interface" | "extends" | "implements" | "new" | "return" | "if" | "else"
        | "for" | "while" | "const" | "let" | "function" | "constructor" | "this" | "super"
        | "private" | "public" | "protected" | "static" | "abstract" | "readonly" | "throw"
        | "import" | "export" | "def" | "self" | "async" | "await" => Style::default()
            .fg(theme.keyword)
            .add_modifier(Modifier::BOLD),
        "true" | "false" | "null" | "undefined" | "None" => Style::default().fg(theme.number),
        _ if word.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(theme.number),
        _ if is_call => Style::default().fg(theme.function),
        _ => Style::default().fg(theme.fg),
    }
}

/// Header text for the runner block
fn runner_title(runner: &CodeRunner, is_editing: bool) -> String {
    let control = if runner.is_read_only() {
        String::new()
    } else if runner.status() == RunStatus::Running {
        " · Running...".to_string()
    } else if is_editing {
        " · EDITING (esc to finish)".to_string()
    } else {
        " · [r] Run  [e] Edit".to_string()
    };
    format!(" {}{} ", runner.label(), control)
}

/// Render a code runner. `scroll` is the first source line shown; it is
/// clamped to the source and, while editing, moved so the cursor line stays
/// visible.
pub fn render_code_runner(
    frame: &mut Frame,
    area: Rect,
    runner: &CodeRunner,
    is_focused: bool,
    is_editing: bool,
    scroll: &mut u16,
) {
    let palette = theme(runner.is_dark_mode());
    let border_style = if is_focused {
        Style::default()
            .fg(palette.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border_normal)
    };

    let block = Block::default()
        .title(runner_title(runner, is_editing))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(palette.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = runner.display_state();
    let (source_area, output_area) = match state.output {
        Some(_) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(inner);
            (columns[0], Some(columns[1]))
        }
        None => (inner, None),
    };

    let mut lines: Vec<Line> = state
        .source
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:3} ", idx + 1),
                Style::default().fg(palette.comment),
            )];
            spans.extend(highlight_code_line(line, palette).spans);
            Line::from(spans)
        })
        .collect();

    if is_editing {
        // Cursor marker at the end of the buffer
        let cursor = Span::styled(
            "▏",
            Style::default()
                .fg(palette.secondary)
                .add_modifier(Modifier::SLOW_BLINK),
        );
        if state.source.ends_with('\n') || lines.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:3} ", lines.len() + 1),
                    Style::default().fg(palette.comment),
                ),
                cursor,
            ]));
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let height = source_area.height.max(1);
    if is_editing {
        *scroll = keep_visible(*scroll, lines.len().saturating_sub(1), height);
    }
    let max_scroll = (lines.len().min(u16::MAX as usize) as u16).saturating_sub(height);
    *scroll = (*scroll).min(max_scroll);
    let source = Paragraph::new(lines).scroll((*scroll, 0));
    frame.render_widget(source, source_area);

    if let (Some(area), Some(output)) = (output_area, state.output) {
        let output_style = if output.starts_with("Error:") {
            Style::default().fg(palette.error)
        } else {
            Style::default().fg(palette.fg)
        };
        let output_block = Block::default()
            .title(" Output: ")
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(palette.border_normal))
            .style(Style::default().bg(palette.output_bg))
            .padding(Padding::new(1, 0, 0, 0));
        let paragraph = Paragraph::new(output.to_string())
            .style(output_style)
            .block(output_block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RunnerOptions;
    use crate::ui::theme::DARK_THEME;
    use ratatui::{backend::TestBackend, Terminal};

    /// Thirty numbered statements
    fn long_source() -> String {
        (1..=30).map(|n| format!("let v{} = {};", n, n)).collect::<Vec<_>>().join("\n")
    }

    fn draw(runner: &CodeRunner, is_editing: bool, scroll: &mut u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_code_runner(f, area, runner, true, is_editing, scroll)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let src = "const x = `temp ${y}°C`; // done";
        assert_eq!(text_of(&highlight_code_line(src, &DARK_THEME)), src);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let src = "console.log('oops";
        assert_eq!(text_of(&highlight_code_line(src, &DARK_THEME)), src);
    }

    #[test]
    fn test_comment_is_one_span() {
        let line = highlight_code_line("// only a comment", &DARK_THEME);
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn test_scroll_reveals_lower_lines() {
        let runner = CodeRunner::new(RunnerOptions::new(long_source(), "typescript"));
        let mut scroll = 0;
        let screen = draw(&runner, false, &mut scroll);
        assert!(screen.contains("let v1 = 1;"));
        assert!(!screen.contains("let v30 = 30;"));

        let mut scroll = 22;
        let screen = draw(&runner, false, &mut scroll);
        assert!(screen.contains("let v30 = 30;"));
        assert!(!screen.contains("let v1 = 1;"));
    }

    #[test]
    fn test_scroll_is_clamped_to_the_source() {
        let runner = CodeRunner::new(RunnerOptions::new(long_source(), "typescript"));
        // 8 inner rows for 30 lines
        let mut scroll = 400;
        draw(&runner, false, &mut scroll);
        assert_eq!(scroll, 22);
    }

    #[test]
    fn test_editing_follows_the_end_of_the_buffer() {
        let mut runner = CodeRunner::new(RunnerOptions::new(long_source(), "typescript"));
        for c in "\nlet typed = 1;".chars() {
            runner.insert_char(c);
        }
        let mut scroll = 0;
        let screen = draw(&runner, true, &mut scroll);
        assert!(screen.contains("let typed = 1;"));
        assert!(screen.contains("▏"));
        assert_eq!(scroll, 31 - 8);
    }
}
