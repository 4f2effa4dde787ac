use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::slider::SliderController;
use crate::ui::components::ACCENT;

const PREV_GLYPH: &str = "◀";
const NEXT_GLYPH: &str = "▶";

fn arrow_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draws the visible window of a slider: prev button, one card per slot, next button
/// and a position line underneath.
///
/// `card` builds the lines of one item given the inner width of its slot.
pub fn render_slider<T, F>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    slider: &SliderController,
    items: &[T],
    card: F,
) where
    F: Fn(&T, u16) -> Vec<Line<'static>>,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    let [track, position] = &rows[..] else {
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(*track);
    let [prev, cards, next] = &columns[..] else {
        return;
    };

    let arrow_row = |rect: Rect| Rect {
        y: rect.y + rect.height / 2,
        height: rect.height.min(1),
        ..rect
    };
    f.render_widget(
        Paragraph::new(Span::styled(PREV_GLYPH, arrow_style(slider.can_go_prev())))
            .alignment(Alignment::Center),
        arrow_row(*prev),
    );
    f.render_widget(
        Paragraph::new(Span::styled(NEXT_GLYPH, arrow_style(slider.can_go_next())))
            .alignment(Alignment::Center),
        arrow_row(*next),
    );

    let per_view = slider.per_view().max(1);
    let slot_constraints: Vec<Constraint> = (0..per_view)
        .map(|_| Constraint::Ratio(1, per_view as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(slot_constraints)
        .split(*cards);

    let visible = slider.visible_range();
    for (slot, item) in slots.iter().zip(items.get(visible).unwrap_or(&[])) {
        let card_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let card_inner = card_block.inner(*slot);
        f.render_widget(
            Paragraph::new(card(item, card_inner.width))
                .block(card_block)
                .wrap(Wrap { trim: true }),
            *slot,
        );
    }

    f.render_widget(
        Paragraph::new(position_line(slider)).alignment(Alignment::Center),
        *position,
    );
}

/// "2-4 / 7" plus the track offset and the autoplay state
fn position_line(slider: &SliderController) -> Line<'static> {
    let range = slider.visible_range();
    let shown = if slider.is_idle() {
        "0".to_string()
    } else if range.len() == 1 {
        format!("{}", range.start + 1)
    } else {
        format!("{}-{}", range.start + 1, range.end)
    };

    let mut spans = vec![
        Span::styled(
            format!("{} / {}", shown, slider.item_count()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  ·  -{:.1}%", slider.visual_offset_percent()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if slider.timer_running() {
        spans.push(Span::styled(
            format!("  ·  auto {}s", slider.interval().as_secs()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
