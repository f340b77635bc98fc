// ABOUTME: Login screen: phone-number entry with a Continue action and a
// cross-link to the signup screen

use crate::components::gradient_text::{gradient_line, AMBER, SUNSET_ORANGE};
use crate::components::phone_form::PhoneFormState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const INK_BLACK: Color = Color::Rgb(0, 0, 0);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(136, 136, 136);
const FIELD_BG: Color = Color::Rgb(245, 245, 245);
const LINK_ORANGE: Color = Color::Rgb(255, 107, 53);

/// Renderer for the login screen
pub struct LoginComponent;

impl LoginComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, form: &PhoneFormState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Headline
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Phone input
                Constraint::Length(2), // Helper text
                Constraint::Length(3), // Continue button
                Constraint::Min(1),    // Spacer
                Constraint::Length(1), // Footer cross-link
            ])
            .split(area);

        let headline = Paragraph::new(vec![
            gradient_line("Welcome Back,", SUNSET_ORANGE, AMBER),
            gradient_line("Glad to see you again", SUNSET_ORANGE, AMBER),
        ]);
        frame.render_widget(headline, layout[0]);

        render_phone_input(frame, layout[2], form);

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
        frame.render_widget(helper, layout[3]);

        render_continue_button(frame, layout[4]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Doesn't have an account? ", Style::default().fg(SOFT_WHITE)),
            Span::styled(
                "Register",
                Style::default().fg(LINK_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [Tab]", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, layout[6]);
    }
}

impl Default for LoginComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Phone input field shared by the login and signup screens
pub fn render_phone_input(frame: &mut Frame, area: Rect, form: &PhoneFormState) {
    let text = if form.input.is_empty() && form.cursor == 0 {
        Line::from(vec![
            Span::styled("│", Style::default().fg(INK_BLACK)),
            Span::styled("Phone Number", Style::default().fg(MUTED_GRAY)),
        ])
    } else {
        Line::from(Span::styled(
            form.display_with_cursor(),
            Style::default().fg(INK_BLACK),
        ))
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MUTED_GRAY))
            .style(Style::default().bg(FIELD_BG)),
    );
    frame.render_widget(input, area);
}

/// Continue button shared by the login and signup screens
pub fn render_continue_button(frame: &mut Frame, area: Rect) {
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
    frame.render_widget(button, area);
}
