//! Blocking dialog boxes: message, single-line prompt, and yes/no/cancel
//! confirmation.
//!
//! Each function owns the terminal for exactly one call: it enters the
//! alternate screen, blocks on user input, restores the terminal, and maps
//! the dismissal to a plain return value. Nothing persists across calls.

mod confirm;
mod message;
mod prompt;

pub use confirm::Choice;
pub(crate) use confirm::ConfirmDialog;
pub(crate) use message::MessageDialog;
pub(crate) use prompt::PromptDialog;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::error::DialogError;
use crate::term::TermSession;
use crate::theme::Theme;
use crate::ui;

/// One modal dialog: key handling plus rendering, with a defined outcome for
/// a forced close.
pub(crate) trait DialogState {
    type Output;

    /// Feed one key press; `Some` ends the dialog with that outcome.
    fn on_key(&mut self, key: KeyEvent) -> Option<Self::Output>;

    /// Outcome when the dialog is closed without using any control.
    fn dismissed(&self) -> Self::Output;

    fn draw(&self, f: &mut Frame, theme: &Theme);
}

/// Show a message with a single OK control. Blocks until dismissed.
///
/// The text is word-wrapped to a fixed body width; there is no need to embed
/// line feeds. `title`, when present, appears in the dialog frame.
pub fn message(text: &str, title: Option<&str>) -> Result<(), DialogError> {
    tracing::debug!("message dialog open");
    run(MessageDialog::new(text, title))
}

/// Show a single-line input prompt with OK and cancel controls. Blocks until
/// dismissed.
///
/// `prompt_text` is shown above the input field and may contain `\n` to
/// span several lines. `default_value`, when present, pre-fills the field.
/// Returns the entered text on OK — which can be empty — or `None` when the
/// user cancels.
pub fn prompt(
    prompt_text: &str,
    title: Option<&str>,
    default_value: Option<&str>,
) -> Result<Option<String>, DialogError> {
    tracing::debug!("prompt dialog open");
    run(PromptDialog::new(prompt_text, title, default_value))
}

/// Show a question with yes, no, and cancel controls. Blocks until dismissed.
///
/// `message` may contain `\n` to span several lines. The outcome is always
/// one of the three [`Choice`] values; closing the dialog any other way than
/// the yes or no controls yields [`Choice::Cancel`].
pub fn confirm(message: &str, title: Option<&str>) -> Result<Choice, DialogError> {
    tracing::debug!("confirm dialog open");
    run(ConfirmDialog::new(message, title))
}

fn run<S: DialogState>(mut state: S) -> Result<S::Output, DialogError> {
    let mut session = TermSession::new()?;
    loop {
        session.draw(|f| state.draw(f, ui::theme()))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    tracing::debug!("dialog force-closed");
                    return Ok(state.dismissed());
                }
                if let Some(outcome) = state.on_key(key) {
                    return Ok(outcome);
                }
            }
            // Resize and other events just trigger a redraw
            _ => {}
        }
    }
}
