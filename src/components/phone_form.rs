// ABOUTME: Shared phone-number form state for the login and signup screens
// Tracks the draft input, cursor position, and validation rules

use thiserror::Error;

/// Maximum characters accepted into the phone field
pub const MAX_PHONE_LEN: usize = 15;

/// Minimum raw length for a phone number to pass validation
pub const MIN_PHONE_LEN: usize = 10;

/// Validation failures for the phone-number field. The display strings are
/// the alert bodies shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Please enter your phone number")]
    Empty,
    #[error("Please enter a valid phone number")]
    TooShort,
}

/// Draft phone number, scoped to a single screen's lifetime.
/// The cursor is a char index into `input`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneFormState {
    pub input: String,
    pub cursor: usize,
}

impl PhoneFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of the cursor within `input`
    fn byte_offset(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor. The field caps at 15 characters
    /// but performs no character filtering.
    pub fn input_char(&mut self, c: char) {
        if self.input.chars().count() >= MAX_PHONE_LEN {
            return;
        }
        let offset = self.byte_offset();
        self.input.insert(offset, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset();
        self.input.remove(offset);
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.input.chars().count() {
            let offset = self.byte_offset();
            self.input.remove(offset);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    /// Validate the draft for submission. Empty after trimming fails first;
    /// otherwise the raw (untrimmed) length must be at least 10 characters.
    pub fn validate(&self) -> Result<(), PhoneError> {
        if self.input.trim().is_empty() {
            return Err(PhoneError::Empty);
        }
        if self.input.chars().count() < MIN_PHONE_LEN {
            return Err(PhoneError::TooShort);
        }
        Ok(())
    }

    /// Input text with the cursor bar inserted, for rendering
    pub fn display_with_cursor(&self) -> String {
        let offset = self.byte_offset();
        let (before, after) = self.input.split_at(offset);
        format!("{before}│{after}")
    }
}
