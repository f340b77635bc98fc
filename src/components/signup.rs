// ABOUTME: Signup screen: the login form's shape plus a back affordance and
// a cross-link returning to login

use crate::components::back_button::BackButton;
use crate::components::gradient_text::{gradient_line, AMBER, SUNSET_ORANGE};
use crate::components::login::{render_continue_button, render_phone_input};
use crate::components::phone_form::PhoneFormState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(136, 136, 136);
const LINK_ORANGE: Color = Color::Rgb(255, 107, 53);

/// Renderer for the signup screen
pub struct SignupComponent {
    back_button: BackButton,
}

impl SignupComponent {
    pub fn new() -> Self {
        Self {
            back_button: BackButton::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, form: &PhoneFormState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Header: back affordance + title
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Headline
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Phone input
                Constraint::Length(2), // Helper text
                Constraint::Length(3), // Continue button
                Constraint::Min(1),    // Spacer
                Constraint::Length(1), // Footer cross-link
            ])
            .split(area);

        self.render_header(frame, layout[0]);

        let headline = Paragraph::new(vec![
            gradient_line("Create Account,", SUNSET_ORANGE, AMBER),
            gradient_line("Join us today", SUNSET_ORANGE, AMBER),
        ]);
        frame.render_widget(headline, layout[2]);

        render_phone_input(frame, layout[4], form);

        let helper = Paragraph::new(vec![
            Line::from(Span::styled(
                "We will send a confirmation code on your number,",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(Span::styled(
                "to verify it is you",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(helper, layout[5]);

        render_continue_button(frame, layout[6]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Already have an account? ", Style::default().fg(SOFT_WHITE)),
            Span::styled(
                "Log In",
                Style::default().fg(LINK_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [Tab]", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, layout[8]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(8),
                Constraint::Min(1),
                Constraint::Length(8),
            ])
            .split(area);

        self.back_button.render(frame, header[0]);

        let title = Paragraph::new(Span::styled(
            "Sign Up",
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, header[1]);
    }
}

impl Default for SignupComponent {
    fn default() -> Self {
        Self::new()
    }
}
