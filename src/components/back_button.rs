// ABOUTME: Back affordance rendered in screen headers, invoked via Esc

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const ARROW_GRAY: Color = Color::Rgb(51, 51, 51);
const HINT_GRAY: Color = Color::Rgb(136, 136, 136);

/// Stateless back affordance. Rendering is all it does; the go-back event
/// itself is raised by the key handler.
pub struct BackButton;

impl BackButton {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let button = Paragraph::new(Line::from(vec![
            Span::styled("← ", Style::default().fg(ARROW_GRAY)),
            Span::styled("[Esc]", Style::default().fg(HINT_GRAY)),
        ]));
        frame.render_widget(button, area);
    }
}

impl Default for BackButton {
    fn default() -> Self {
        Self::new()
    }
}
