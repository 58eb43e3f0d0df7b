use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

use super::DialogState;
use crate::theme::Theme;
use crate::ui;

/// State for the input prompt: a label, a single-line buffer, and a cursor.
pub(crate) struct PromptDialog {
    pub(crate) prompt_text: String,
    pub(crate) title: Option<String>,
    buffer: String,
    cursor: usize, // char offset into `buffer`
}

impl PromptDialog {
    pub(crate) fn new(prompt_text: &str, title: Option<&str>, default_value: Option<&str>) -> Self {
        let buffer = default_value.unwrap_or("").to_string();
        let cursor = buffer.chars().count();
        Self {
            prompt_text: prompt_text.to_string(),
            title: title.map(str::to_string),
            buffer,
            cursor,
        }
    }

    pub(crate) fn value(&self) -> &str {
        &self.buffer
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_offset();
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.buffer.remove(at);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let at = self.byte_offset();
            self.buffer.remove(at);
        }
    }
}

impl DialogState for PromptDialog {
    type Output = Option<String>;

    fn on_key(&mut self, key: KeyEvent) -> Option<Option<String>> {
        match key.code {
            KeyCode::Enter => return Some(Some(self.buffer.clone())),
            KeyCode::Esc => return Some(None),
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.buffer.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buffer.chars().count(),
            _ => {}
        }
        None
    }

    fn dismissed(&self) -> Option<String> {
        None
    }

    fn draw(&self, f: &mut Frame, theme: &Theme) {
        ui::draw_prompt(f, self, theme);
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
    fn default_value_prefills_with_cursor_at_end() {
        let dialog = PromptDialog::new("Name?", None, Some("gopher"));
        assert_eq!(dialog.value(), "gopher");
        assert_eq!(dialog.cursor(), 6);
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut dialog = PromptDialog::new("Name?", None, Some("ab"));
        dialog.on_key(key(KeyCode::Left));
        dialog.on_key(key(KeyCode::Char('x')));
        assert_eq!(dialog.value(), "axb");
        assert_eq!(dialog.cursor(), 2);
    }

    #[test]
    fn backspace_and_delete_remove_around_cursor() {
        let mut dialog = PromptDialog::new("Name?", None, Some("abc"));
        dialog.on_key(key(KeyCode::Backspace));
        assert_eq!(dialog.value(), "ab");
        dialog.on_key(key(KeyCode::Home));
        dialog.on_key(key(KeyCode::Delete));
        assert_eq!(dialog.value(), "b");
    }

    #[test]
    fn cursor_stays_inside_the_buffer() {
        let mut dialog = PromptDialog::new("Name?", None, Some("ab"));
        dialog.on_key(key(KeyCode::Right));
        assert_eq!(dialog.cursor(), 2);
        dialog.on_key(key(KeyCode::Home));
        dialog.on_key(key(KeyCode::Left));
        assert_eq!(dialog.cursor(), 0);
    }

    #[test]
    fn enter_returns_the_buffer() {
        let mut dialog = PromptDialog::new("Name?", None, None);
        dialog.on_key(key(KeyCode::Char('h')));
        dialog.on_key(key(KeyCode::Char('i')));
        assert_eq!(dialog.on_key(key(KeyCode::Enter)), Some(Some("hi".to_string())));
    }

    #[test]
    fn empty_submit_is_not_a_cancel() {
        let mut dialog = PromptDialog::new("Name?", None, None);
        assert_eq!(dialog.on_key(key(KeyCode::Enter)), Some(Some(String::new())));
    }

    #[test]
    fn escape_and_forced_close_cancel() {
        let mut dialog = PromptDialog::new("Name?", None, Some("abc"));
        assert_eq!(dialog.on_key(key(KeyCode::Esc)), Some(None));
        assert_eq!(dialog.dismissed(), None);
    }

    #[test]
    fn multibyte_editing() {
        let mut dialog = PromptDialog::new("Name?", None, Some("héllo"));
        dialog.on_key(key(KeyCode::Home));
        dialog.on_key(key(KeyCode::Right));
        dialog.on_key(key(KeyCode::Right));
        dialog.on_key(key(KeyCode::Backspace));
        assert_eq!(dialog.value(), "hllo");
        assert_eq!(dialog.cursor(), 1);
    }
}
