use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
};

use crate::app::App;
use crate::ui::components::{ACCENT, BRAND};
use crate::ui::utils::centered_rect;

const CURTAIN_COLOR: Color = Color::Red;

/// Width of each curtain half once `progress` of the animation has elapsed
fn curtain_width(total: u16, progress: f64) -> u16 {
    let half = f64::from(total / 2 + total % 2);
    let remaining = (1.0 - progress.clamp(0.0, 1.0)) * half;
    remaining.round() as u16
}

pub fn render_preloader(f: &mut Frame, app: &App) {
    let area = f.area();
    let progress = app
        .preloader
        .as_ref()
        .map_or(1.0, |preloader| preloader.progress(Instant::now()));

    let title_area = centered_rect(60, 30, area);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                BRAND.to_uppercase(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "qualquer tecla para entrar",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center),
        title_area,
    );

    let gauge_area = Rect {
        y: title_area.y.saturating_add(title_area.height),
        height: 1,
        ..title_area
    };
    if gauge_area.bottom() <= area.bottom() {
        f.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
                .ratio(progress.clamp(0.0, 1.0))
                .label(""),
            gauge_area,
        );
    }

    let width = curtain_width(area.width, progress);
    if width == 0 {
        return;
    }
    let curtain = Block::default().style(Style::default().bg(CURTAIN_COLOR));
    f.render_widget(
        curtain.clone(),
        Rect {
            width,
            ..area
        },
    );
    f.render_widget(
        curtain,
        Rect {
            x: area.right().saturating_sub(width),
            width,
            ..area
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curtains_open_over_time() {
        assert_eq!(curtain_width(80, 0.0), 40);
        assert_eq!(curtain_width(80, 0.5), 20);
        assert_eq!(curtain_width(80, 1.0), 0);
        assert_eq!(curtain_width(81, 0.0), 41);
    }

    #[test]
    fn test_progress_out_of_range_is_clamped() {
        assert_eq!(curtain_width(80, -1.0), 40);
        assert_eq!(curtain_width(80, 2.0), 0);
    }
}
