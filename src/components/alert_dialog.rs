// ABOUTME: Modal alert dialog with a title, wrapped body, and a single OK
// button, centered over the active screen

use crate::app::state::Alert;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const BUTTON_GOLD: Color = Color::Rgb(255, 215, 0);

/// Renderer for the modal alert
pub struct AlertDialogComponent;

impl AlertDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, alert: &Alert) {
        let dialog_width = 50.min(area.width.saturating_sub(4)).max(1);
        let dialog_height = 8.min(area.height).max(1);

        let dialog_area = Rect {
            x: area.width.saturating_sub(dialog_width) / 2,
            y: area.height.saturating_sub(dialog_height) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        // Clear only the dialog area so the screen below stays visible
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", alert.title))
            .title_style(Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().bg(DIALOG_BG));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let body = Paragraph::new(alert.body.clone())
            .style(Style::default().fg(SOFT_WHITE))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[0]);

        let button = Paragraph::new("[ OK ]")
            .style(Style::default().fg(BUTTON_GOLD).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(button, chunks[1]);
    }
}

impl Default for AlertDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
