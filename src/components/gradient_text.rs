// ABOUTME: Styled text renderer that masks a line of text with a horizontal
// color gradient, used for the form screen headlines

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Gradient endpoints for the onboarding headlines
pub const SUNSET_ORANGE: (u8, u8, u8) = (0xFF, 0x6B, 0x35);
pub const AMBER: (u8, u8, u8) = (0xFF, 0xA5, 0x00);

/// Build a bold line whose characters interpolate linearly from `from` to
/// `to` in RGB space. Purely presentational.
pub fn gradient_line(text: &str, from: (u8, u8, u8), to: (u8, u8, u8)) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let steps = chars.len().saturating_sub(1).max(1) as f32;

    let spans: Vec<Span<'static>> = chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let t = i as f32 / steps;
            let lerp =
                |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(Color::Rgb(
                        lerp(from.0, to.0),
                        lerp(from.1, to.1),
                        lerp(from.2, to.2),
                    ))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    Line::from(spans)
}
