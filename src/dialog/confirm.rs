use std::fmt;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

use super::DialogState;
use crate::theme::Theme;
use crate::ui;

/// Outcome of [`confirm`](crate::confirm).
///
/// Always exactly one of the three controls; dismissing the dialog any other
/// way maps to [`Choice::Cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
    Cancel,
}

impl Choice {
    /// Canonical lowercase form: `"yes"`, `"no"`, or `"cancel"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Yes => "yes",
            Choice::No => "no",
            Choice::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const FOCUS_ORDER: [Choice; 3] = [Choice::Yes, Choice::No, Choice::Cancel];

/// State for the confirmation box: static text and a focused control.
pub(crate) struct ConfirmDialog {
    pub(crate) message: String,
    pub(crate) title: Option<String>,
    focus: Choice,
}

impl ConfirmDialog {
    pub(crate) fn new(message: &str, title: Option<&str>) -> Self {
        Self {
            message: message.to_string(),
            title: title.map(str::to_string),
            focus: Choice::Yes,
        }
    }

    pub(crate) fn focus(&self) -> Choice {
        self.focus
    }

    fn move_focus(&mut self, step: isize) {
        let at = FOCUS_ORDER
            .iter()
            .position(|c| *c == self.focus)
            .unwrap_or(0) as isize;
        let len = FOCUS_ORDER.len() as isize;
        self.focus = FOCUS_ORDER[(at + step).rem_euclid(len) as usize];
    }
}

impl DialogState for ConfirmDialog {
    type Output = Choice;

    fn on_key(&mut self, key: KeyEvent) -> Option<Choice> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Choice::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Choice::No),
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc => Some(Choice::Cancel),
            KeyCode::Enter => Some(self.focus),
            KeyCode::Left | KeyCode::BackTab => {
                self.move_focus(-1);
                None
            }
            KeyCode::Right | KeyCode::Tab => {
                self.move_focus(1);
                None
            }
            _ => None,
        }
    }

    fn dismissed(&self) -> Choice {
        Choice::Cancel
    }

    fn draw(&self, f: &mut Frame, theme: &Theme) {
        ui::draw_confirm(f, self, theme);
    }
}
