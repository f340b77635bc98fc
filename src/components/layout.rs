// ABOUTME: Top-level layout: renders the active screen, the key-hint footer,
// and the alert overlay

use crate::app::state::{AppState, Screen};
use crate::components::alert_dialog::AlertDialogComponent;
use crate::components::login::LoginComponent;
use crate::components::otp::OtpComponent;
use crate::components::signup::SignupComponent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

const SCREEN_BG: Color = Color::Rgb(25, 25, 35);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const HINT_GOLD: Color = Color::Rgb(255, 215, 0);

/// Owns the per-screen renderers and dispatches by the top of the
/// navigation stack
pub struct LayoutComponent {
    login: LoginComponent,
    signup: SignupComponent,
    otp: OtpComponent,
    alert: AlertDialogComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            login: LoginComponent::new(),
            signup: SignupComponent::new(),
            otp: OtpComponent::new(),
            alert: AlertDialogComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();

        let background = Block::default().style(Style::default().bg(SCREEN_BG));
        frame.render_widget(background, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(area);

        match state.active() {
            Screen::Login(form) => self.login.render(frame, layout[0], form),
            Screen::Signup(form) => self.signup.render(frame, layout[0], form),
            Screen::Otp(otp) => self.otp.render(frame, layout[0], otp),
        }

        self.render_footer(frame, layout[1], state);

        if let Some(alert) = &state.alert {
            self.alert.render(frame, area, alert);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let hints: &[(&str, &str)] = if state.alert.is_some() {
            &[("Enter", "OK")]
        } else {
            match state.active() {
                Screen::Login(_) => &[
                    ("Enter", "Continue"),
                    ("Tab", "Register"),
                    ("Esc", "Quit"),
                ],
                Screen::Signup(_) => &[
                    ("Enter", "Continue"),
                    ("Tab", "Log In"),
                    ("Esc", "Back"),
                ],
                Screen::Otp(_) => &[
                    ("Enter", "Continue"),
                    ("Ctrl+R", "Re-send"),
                    ("Ctrl+C", "Quit"),
                ],
            }
        };

        let mut spans = Vec::new();
        for (index, (key, action)) in hints.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  |  ", Style::default().fg(MUTED_GRAY)));
            }
            spans.push(Span::styled("[", Style::default().fg(MUTED_GRAY)));
            spans.push(Span::styled(*key, Style::default().fg(HINT_GOLD)));
            spans.push(Span::styled("]", Style::default().fg(MUTED_GRAY)));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(MUTED_GRAY),
            ));
        }

        let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
