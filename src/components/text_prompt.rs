//! Single-line text input state
//!
//! Backing state for the add-form fields and the delete prompt. Rendering is
//! done by the caller; this only tracks the label and the edited value.

/// One labelled text field being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPromptState {
    pub label: &'static str,
    pub value: String,
}

impl TextPromptState {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Take the edited value, resetting the field.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.value)
    }
}
