// ABOUTME: OTP verification screen: five single-character cells with
// auto-advance focus, backspace retreat, and fixed-code verification

use crate::app::state::OtpParams;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use thiserror::Error;

// Color palette shared with the form screens
const INK_BLACK: Color = Color::Rgb(0, 0, 0);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(136, 136, 136);
const CELL_BG: Color = Color::Rgb(245, 245, 245);
const RESEND_RED: Color = Color::Rgb(255, 0, 0);
const FOCUS_GOLD: Color = Color::Rgb(255, 215, 0);

/// Number of code cells
pub const OTP_LEN: usize = 5;

/// The code the simulated verification accepts
pub const VALID_CODE: &str = "12345";

/// Verification failures. The display strings are the alert bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OtpError {
    #[error("Please enter the complete 5-digit code")]
    Incomplete,
    #[error("Invalid OTP. Please try again.")]
    InvalidCode,
}

/// Local state of the OTP screen. Each slot holds "" or one character, and
/// `focus` is the index of the cell currently receiving input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpState {
    pub digits: [String; OTP_LEN],
    pub focus: usize,
    /// Navigation parameters, read-only after the forward transition
    pub params: OtpParams,
}

impl OtpState {
    pub fn new(params: OtpParams) -> Self {
        Self {
            digits: Default::default(),
            focus: 0,
            params,
        }
    }

    /// Replace the slot at `index`. Non-empty input into any cell but the
    /// last advances focus to the next cell. Multi-character input (a paste)
    /// is truncated to its first character so the one-character slot
    /// invariant holds.
    pub fn edit(&mut self, index: usize, text: &str) {
        if index >= OTP_LEN {
            return;
        }
        self.digits[index] = text.chars().take(1).collect();
        if !self.digits[index].is_empty() && index < OTP_LEN - 1 {
            self.focus = index + 1;
        }
    }

    /// Type a character into the focused cell
    pub fn input_char(&mut self, c: char) {
        let index = self.focus;
        self.edit(index, c.encode_utf8(&mut [0; 4]));
    }

    /// Backspace in the focused cell: clear it if it has content, otherwise
    /// retreat focus one cell to the left without touching that cell's
    /// content. At cell 0 on an empty cell this is a no-op.
    pub fn backspace(&mut self) {
        if self.digits[self.focus].is_empty() {
            if self.focus > 0 {
                self.focus -= 1;
            }
        } else {
            self.digits[self.focus].clear();
        }
    }

    /// The cells concatenated in order
    pub fn code(&self) -> String {
        self.digits.concat()
    }

    /// Check the entered code. Incomplete entry is reported before any code
    /// comparison happens; a mismatch leaves all cells untouched.
    pub fn submit(&self) -> Result<(), OtpError> {
        let code = self.code();
        if code.chars().count() != OTP_LEN {
            return Err(OtpError::Incomplete);
        }
        if code == VALID_CODE {
            Ok(())
        } else {
            Err(OtpError::InvalidCode)
        }
    }

    /// Reset all cells and return focus to the first one
    pub fn resend(&mut self) {
        for digit in &mut self.digits {
            digit.clear();
        }
        self.focus = 0;
    }

    /// The phone number as displayed on this screen
    pub fn masked_number(&self) -> String {
        mask_phone(&self.params.phone_number)
    }
}

/// Mask a phone number down to five placeholders plus its last four
/// characters. Shorter inputs yield whatever suffix exists; this never
/// panics, including on multi-byte input.
pub fn mask_phone(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    let start = chars.len().saturating_sub(4);
    let suffix: String = chars[start..].iter().collect();
    format!("*****{suffix}")
}

/// Renderer for the OTP verification screen
pub struct OtpComponent;

impl OtpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &OtpState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(4), // Title + masked number
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Code cells
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Re-send affordance
                Constraint::Min(1),    // Spacer
                Constraint::Length(3), // Continue button
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "5-digit code",
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Please enter the code send to your mobile",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(Span::styled(
                format!("number {}", state.masked_number()),
                Style::default().fg(MUTED_GRAY),
            )),
        ]);
        frame.render_widget(header, layout[0]);

        self.render_cells(frame, layout[2], state);

        let resend = Paragraph::new(Line::from(vec![
            Span::styled("Re-send code", Style::default().fg(RESEND_RED)),
            Span::styled("  [Ctrl+R]", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(resend, layout[4]);

        let button = Paragraph::new(Span::styled(
            "Continue  [Enter]",
            Style::default()
                .fg(SOFT_WHITE)
                .bg(INK_BLACK)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().bg(INK_BLACK)),
        );
        frame.render_widget(button, layout[6]);
    }

    /// Draw the five code cells in a row, highlighting the focused one
    fn render_cells(&self, frame: &mut Frame, area: Rect, state: &OtpState) {
        let constraints: Vec<Constraint> = (0..OTP_LEN)
            .flat_map(|_| [Constraint::Length(7), Constraint::Length(1)])
            .take(OTP_LEN * 2 - 1)
            .collect();

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (index, digit) in state.digits.iter().enumerate() {
            let focused = index == state.focus;
            let border_style = if focused {
                Style::default().fg(FOCUS_GOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            };

            let cell = Paragraph::new(Span::styled(
                digit.clone(),
                Style::default().fg(INK_BLACK).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .style(Style::default().bg(CELL_BG)),
            );
            frame.render_widget(cell, cells[index * 2]);
        }
    }
}

impl Default for OtpComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state() -> OtpState {
        OtpState::new(OtpParams {
            phone_number: "5551234567".to_string(),
            is_signup: false,
        })
    }

    #[test]
    fn test_initial_state() {
        let otp = state();
        assert_eq!(otp.digits, [""; OTP_LEN].map(String::from));
        assert_eq!(otp.focus, 0);
    }

    #[test]
    fn test_auto_advance_stops_at_last_cell() {
        let mut otp = state();
        for c in "12345".chars() {
            otp.input_char(c);
        }
        assert_eq!(otp.code(), "12345");
        // Focus never advances past the final cell
        assert_eq!(otp.focus, OTP_LEN - 1);
    }

    #[test]
    fn test_edit_empty_text_keeps_focus() {
        let mut otp = state();
        otp.input_char('9');
        assert_eq!(otp.focus, 1);
        otp.edit(1, "");
        assert_eq!(otp.focus, 1);
        assert_eq!(otp.digits[1], "");
    }

    #[test]
    fn test_paste_truncates_to_first_char() {
        let mut otp = state();
        otp.edit(0, "54321");
        assert_eq!(otp.digits[0], "5");
        assert_eq!(otp.focus, 1);
    }

    #[test]
    fn test_backspace_clears_before_retreating() {
        let mut otp = state();
        otp.input_char('1');
        otp.input_char('2');
        assert_eq!(otp.focus, 2);

        // Focused cell is empty: retreat without clearing cell 1
        otp.backspace();
        assert_eq!(otp.focus, 1);
        assert_eq!(otp.digits[1], "2");

        // Focused cell has content: clear it, focus stays
        otp.backspace();
        assert_eq!(otp.focus, 1);
        assert_eq!(otp.digits[1], "");

        otp.backspace();
        assert_eq!(otp.focus, 0);
        assert_eq!(otp.digits[0], "1");
    }

    #[test]
    fn test_backspace_at_first_empty_cell_is_noop() {
        let mut otp = state();
        otp.backspace();
        assert_eq!(otp.focus, 0);
        assert_eq!(otp.code(), "");
    }

    #[test]
    fn test_submit_incomplete() {
        let mut otp = state();
        for (index, c) in [(0, '1'), (1, '2'), (3, '4'), (4, '5')] {
            otp.edit(index, c.encode_utf8(&mut [0; 4]));
        }
        // Gap at cell 2: reported as incomplete, not as a bad code
        assert_eq!(otp.submit(), Err(OtpError::Incomplete));
    }

    #[test]
    fn test_submit_mismatch_preserves_state() {
        let mut otp = state();
        for c in "12346".chars() {
            otp.input_char(c);
        }
        assert_eq!(otp.submit(), Err(OtpError::InvalidCode));
        assert_eq!(otp.code(), "12346");
    }

    #[test]
    fn test_submit_valid_code() {
        let mut otp = state();
        for c in VALID_CODE.chars() {
            otp.input_char(c);
        }
        assert_eq!(otp.submit(), Ok(()));
    }

    #[test]
    fn test_resend_resets_cells_and_focus() {
        let mut otp = state();
        for c in "987".chars() {
            otp.input_char(c);
        }
        otp.resend();
        assert_eq!(otp.code(), "");
        assert_eq!(otp.focus, 0);
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("5551234567"), "*****4567");
    }

    #[test]
    fn test_mask_phone_short_input() {
        // "Last 4" of a shorter string is whatever exists
        assert_eq!(mask_phone("42"), "*****42");
        assert_eq!(mask_phone(""), "*****");
    }

    #[test]
    fn test_mask_phone_multibyte() {
        assert_eq!(mask_phone("☎☎☎☎☎"), "*****☎☎☎☎");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OtpError::Incomplete.to_string(),
            "Please enter the complete 5-digit code"
        );
        assert_eq!(OtpError::InvalidCode.to_string(), "Invalid OTP. Please try again.");
    }
}
