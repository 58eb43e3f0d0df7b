use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

use super::DialogState;
use crate::theme::Theme;
use crate::ui;

/// State for the message box: static text and an OK control.
pub(crate) struct MessageDialog {
    pub(crate) text: String,
    pub(crate) title: Option<String>,
}

impl MessageDialog {
    pub(crate) fn new(text: &str, title: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            title: title.map(str::to_string),
        }
    }
}

impl DialogState for MessageDialog {
    type Output = ();

    fn on_key(&mut self, key: KeyEvent) -> Option<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => Some(()),
            _ => None,
        }
    }

    fn dismissed(&self) {}

    fn draw(&self, f: &mut Frame, theme: &Theme) {
        ui::draw_message(f, self, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn acknowledgment_keys_dismiss() {
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' '), KeyCode::Char('q')] {
            let mut dialog = MessageDialog::new("saved", Some("Info"));
            assert_eq!(dialog.on_key(key(code)), Some(()));
        }
    }

    #[test]
    fn unrelated_keys_keep_it_open() {
        let mut dialog = MessageDialog::new("saved", None);
        assert_eq!(dialog.on_key(key(KeyCode::Char('x'))), None);
        assert_eq!(dialog.on_key(key(KeyCode::Left)), None);
    }
}
