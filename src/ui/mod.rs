//! Dialog rendering.
//!
//! All drawing lives here; the dialog state structs stay rendering-agnostic.
//! Popups are centered on the terminal, cleared underneath, and clamp to the
//! terminal size.

use std::sync::OnceLock;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::dialog::{Choice, ConfirmDialog, MessageDialog, PromptDialog};
use crate::theme::Theme;

/// Wrap column for message bodies: the terminal analog of a fixed pixel
/// wrapping width.
pub(crate) const BODY_WIDTH: u16 = 56;

// Theme is loaded once per process, on first dialog draw
static THEME: OnceLock<Theme> = OnceLock::new();

pub(crate) fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

pub(crate) fn draw_message(f: &mut Frame, dialog: &MessageDialog, theme: &Theme) {
    let inner_width = body_width(f.area());
    let body_height = wrapped_height(&dialog.text, inner_width);
    let area = popup_area(f.area(), inner_width + 2, body_height + 4);

    f.render_widget(Clear, area);
    f.render_widget(framed(dialog.title.as_deref(), theme.accent), area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(body_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let content = Paragraph::new(body_text(&dialog.text, theme)).wrap(Wrap { trim: false });
    f.render_widget(content, inner[0]);

    let ok = Paragraph::new(Line::from(button(" OK ", true, theme))).alignment(Alignment::Center);
    f.render_widget(ok, inner[2]);
}

pub(crate) fn draw_prompt(f: &mut Frame, dialog: &PromptDialog, theme: &Theme) {
    let inner_width = dialog_width(&dialog.prompt_text, 24, f.area());
    let header_height = dialog.prompt_text.split('\n').count() as u16;
    let area = popup_area(f.area(), inner_width + 2, header_height + 6);

    f.render_widget(Clear, area);
    f.render_widget(framed(dialog.title.as_deref(), theme.accent), area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(Paragraph::new(body_text(&dialog.prompt_text, theme)), inner[0]);

    let field = Paragraph::new(input_line(dialog, theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    f.render_widget(field, inner[1]);

    let hints = hint_line(&[("Enter", "ok"), ("Esc", "cancel")], theme);
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), inner[2]);
}

pub(crate) fn draw_confirm(f: &mut Frame, dialog: &ConfirmDialog, theme: &Theme) {
    let inner_width = dialog_width(&dialog.message, 30, f.area());
    let body_height = wrapped_height(&dialog.message, inner_width);
    let area = popup_area(f.area(), inner_width + 2, body_height + 5);

    f.render_widget(Clear, area);
    f.render_widget(framed(dialog.title.as_deref(), theme.warning), area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(body_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let content = Paragraph::new(body_text(&dialog.message, theme)).wrap(Wrap { trim: false });
    f.render_widget(content, inner[0]);

    let buttons = Line::from(vec![
        button(" Yes ", dialog.focus() == Choice::Yes, theme),
        Span::raw("  "),
        button(" No ", dialog.focus() == Choice::No, theme),
        Span::raw("  "),
        button(" Cancel ", dialog.focus() == Choice::Cancel, theme),
    ]);
    f.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), inner[2]);

    let hints = Line::from(vec![
        Span::styled("y", Style::default().fg(theme.success).add_modifier(Modifier::BOLD)),
        Span::styled(" yes", Style::default().fg(theme.text_dim)),
        Span::styled(" │ ", Style::default().fg(theme.inactive)),
        Span::styled("n", Style::default().fg(theme.danger).add_modifier(Modifier::BOLD)),
        Span::styled(" no", Style::default().fg(theme.text_dim)),
        Span::styled(" │ ", Style::default().fg(theme.inactive)),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::styled(" cancel", Style::default().fg(theme.text_dim)),
    ]);
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), inner[3]);
}

/// Shared body formatter: splits on embedded newlines and applies the
/// emphasized body style.
fn body_text<'a>(text: &'a str, theme: &Theme) -> Vec<Line<'a>> {
    text.split('\n')
        .map(|line| {
            Line::from(Span::styled(
                line,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ))
        })
        .collect()
}

/// Single-line input field contents with a block cursor.
fn input_line(dialog: &PromptDialog, theme: &Theme) -> Line<'static> {
    let value = dialog.value();
    let cursor = dialog.cursor();
    let before: String = value.chars().take(cursor).collect();
    let at: String = value.chars().skip(cursor).take(1).collect();
    let after: String = value.chars().skip(cursor + 1).collect();

    let cursor_span = if at.is_empty() {
        Span::styled(" ".to_string(), Style::default().add_modifier(Modifier::REVERSED))
    } else {
        Span::styled(at, Style::default().fg(theme.text).add_modifier(Modifier::REVERSED))
    };

    Line::from(vec![
        Span::styled(before, Style::default().fg(theme.text)),
        cursor_span,
        Span::styled(after, Style::default().fg(theme.text)),
    ])
}

fn framed(title: Option<&str>, border: Color) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(title) = title {
        block = block.title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ));
    }
    block
}

fn button(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.text)
            .bg(theme.bg_selected)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.inactive)
    };
    Span::styled(format!("[{}]", label), style)
}

fn hint_line(pairs: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ".to_string(), Style::default().fg(theme.inactive)));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(theme.accent)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(theme.text_dim)));
    }
    Line::from(spans)
}

/// Usable body column count for the current terminal.
fn body_width(frame: Rect) -> u16 {
    frame.width.saturating_sub(4).clamp(1, BODY_WIDTH)
}

/// Inner dialog width sized to the longest content line, bounded below by
/// `min` and above by the body width cap.
fn dialog_width(text: &str, min: u16, frame: Rect) -> u16 {
    let longest = text
        .split('\n')
        .map(|line| line.chars().count() as u16)
        .max()
        .unwrap_or(0);
    longest.max(min).min(body_width(frame)).max(1)
}

/// Rows `text` occupies when word-wrapped to `width` columns. Embedded
/// newlines always break; words longer than `width` hard-wrap.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut total: u16 = 0;
    for raw in text.split('\n') {
        let words: Vec<usize> = raw.split_whitespace().map(|w| w.chars().count()).collect();
        if words.is_empty() {
            total += 1;
            continue;
        }
        let mut rows: u16 = 1;
        let mut line = 0usize;
        for len in words {
            let sep = if line > 0 { 1 } else { 0 };
            if line + sep + len <= width {
                line += sep + len;
            } else if len <= width {
                rows += 1;
                line = len;
            } else {
                if line > 0 {
                    rows += 1;
                }
                let mut rest = len;
                while rest > width {
                    rest -= width;
                    rows += 1;
                }
                line = rest;
            }
        }
        total += rows;
    }
    total
}

/// Centered popup rect, clamped to the frame.
fn popup_area(frame: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame.width);
    let height = height.min(frame.height);
    let x = frame.x + (frame.width - width) / 2;
    let y = frame.y + (frame.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_counts_plain_lines() {
        assert_eq!(wrapped_height("hello", 10), 1);
        assert_eq!(wrapped_height("hello world", 11), 1);
    }

    #[test]
    fn wrap_breaks_on_width() {
        assert_eq!(wrapped_height("hello world", 6), 2);
        assert_eq!(wrapped_height("one two three four", 9), 3);
    }

    #[test]
    fn wrap_honors_embedded_newlines() {
        assert_eq!(wrapped_height("a\nb", 10), 2);
        assert_eq!(wrapped_height("a\n\nb", 10), 3);
    }

    #[test]
    fn wrap_splits_oversized_words() {
        assert_eq!(wrapped_height("abcdefghij", 4), 3);
        assert_eq!(wrapped_height("abcdefgh", 4), 2);
    }

    #[test]
    fn empty_text_is_one_line() {
        assert_eq!(wrapped_height("", 10), 1);
    }

    #[test]
    fn popup_is_centered() {
        let area = popup_area(Rect::new(0, 0, 100, 40), 20, 10);
        assert_eq!(area, Rect::new(40, 15, 20, 10));
    }

    #[test]
    fn popup_clamps_to_the_terminal() {
        let area = popup_area(Rect::new(0, 0, 10, 5), 80, 24);
        assert_eq!(area, Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn dialog_width_caps_at_the_body_width() {
        let frame = Rect::new(0, 0, 200, 50);
        let long = "x".repeat(120);
        assert_eq!(dialog_width(&long, 10, frame), BODY_WIDTH);
        assert_eq!(dialog_width("hi", 24, frame), 24);
        assert_eq!(dialog_width("a somewhat longer line here", 10, frame), 27);
    }

    #[test]
    fn dialog_width_fits_narrow_terminals() {
        let frame = Rect::new(0, 0, 20, 10);
        assert_eq!(dialog_width("a very long question indeed", 30, frame), 16);
    }
}
