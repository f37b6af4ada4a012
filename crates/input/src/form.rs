//! Login form editing.
//!
//! The form only collects text. Validation happens when the caller receives
//! [`FormEvent::Submit`]; a rejected submission is reported back through
//! [`LoginForm::set_error`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::map::is_interrupt;
use crate::types::ContactKind;

/// Longest accepted value per field, in characters.
pub const MAX_FIELD_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Contact,
}

impl FormField {
    fn other(self) -> Self {
        match self {
            FormField::Name => FormField::Contact,
            FormField::Contact => FormField::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Key had no effect.
    None,
    /// Text or focus changed.
    Edited,
    Submit,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    kind: ContactKind,
    name: String,
    contact: String,
    focus: FormField,
    error: Option<String>,
}

impl LoginForm {
    pub fn new(kind: ContactKind) -> Self {
        Self {
            kind,
            name: String::new(),
            contact: String::new(),
            focus: FormField::Name,
            error: None,
        }
    }

    /// Pre-fill both fields, e.g. from the stored profile.
    pub fn with_values(mut self, name: &str, contact: &str) -> Self {
        self.name = clip(name);
        self.contact = clip(contact);
        self
    }

    pub fn kind(&self) -> ContactKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        if is_interrupt(key) {
            return FormEvent::Quit;
        }

        match key.code {
            KeyCode::Esc => FormEvent::Quit,
            KeyCode::Enter => FormEvent::Submit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
                FormEvent::Edited
            }
            KeyCode::Backspace => {
                if self.field_mut().pop().is_some() {
                    self.error = None;
                    FormEvent::Edited
                } else {
                    FormEvent::None
                }
            }
            KeyCode::Char(ch)
                if !ch.is_control()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let field = self.field_mut();
                if field.chars().count() >= MAX_FIELD_CHARS {
                    return FormEvent::None;
                }
                field.push(ch);
                self.error = None;
                FormEvent::Edited
            }
            _ => FormEvent::None,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Contact => &mut self.contact,
        }
    }
}

fn clip(s: &str) -> String {
    s.chars().take(MAX_FIELD_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut LoginForm, s: &str) {
        for ch in s.chars() {
            form.handle_key(KeyEvent::from(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = LoginForm::new(ContactKind::Business);
        type_str(&mut form, "Ana");
        assert_eq!(form.handle_key(KeyEvent::from(KeyCode::Tab)), FormEvent::Edited);
        type_str(&mut form, "ACME");
        assert_eq!(form.name(), "Ana");
        assert_eq!(form.contact(), "ACME");
        assert_eq!(form.focus(), FormField::Contact);
    }

    #[test]
    fn test_q_is_text_not_quit() {
        let mut form = LoginForm::new(ContactKind::Business);
        assert_eq!(
            form.handle_key(KeyEvent::from(KeyCode::Char('q'))),
            FormEvent::Edited
        );
        assert_eq!(form.name(), "q");
    }

    #[test]
    fn test_submit_and_quit() {
        let mut form = LoginForm::new(ContactKind::Phone);
        assert_eq!(form.handle_key(KeyEvent::from(KeyCode::Enter)), FormEvent::Submit);
        assert_eq!(form.handle_key(KeyEvent::from(KeyCode::Esc)), FormEvent::Quit);
        assert_eq!(
            form.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            FormEvent::Quit
        );
    }

    #[test]
    fn test_backspace_and_error_clearing() {
        let mut form = LoginForm::new(ContactKind::Business).with_values("Ana", "");
        form.set_error("bad");
        assert_eq!(
            form.handle_key(KeyEvent::from(KeyCode::Backspace)),
            FormEvent::Edited
        );
        assert_eq!(form.name(), "An");
        assert_eq!(form.error(), None);

        form.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(
            form.handle_key(KeyEvent::from(KeyCode::Backspace)),
            FormEvent::None
        );
    }

    #[test]
    fn test_field_length_is_capped() {
        let long = "x".repeat(MAX_FIELD_CHARS + 5);
        let mut form = LoginForm::new(ContactKind::Business).with_values(&long, "");
        assert_eq!(form.name().chars().count(), MAX_FIELD_CHARS);
        assert_eq!(
            form.handle_key(KeyEvent::from(KeyCode::Char('y'))),
            FormEvent::None
        );
    }
}
