use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, NAV_ITEMS};
use crate::catalog::LoadState;

const SEPARATOR: &str = "  ";
pub const BRAND: &str = "Sons de Cena";
pub const ACCENT: Color = Color::Yellow;

/// Splits the screen into header, body and footer
pub fn page_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(area);

    match &chunks[..] {
        [header, body, footer] => (*header, *body, *footer),
        _ => (Rect::default(), area, Rect::default()),
    }
}

/// Brand, page title and the page menu
pub fn render_page_header(f: &mut Frame, area: Rect, app: &App, title: &str) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            BRAND,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default().fg(Color::DarkGray)),
        Span::styled(title.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw("   "),
    ];

    for item in &NAV_ITEMS {
        let active = item.mode == app.mode;
        let label_style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!("{}", item.key),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(format!(" {} ", item.label), label_style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Left),
        area,
    );

    if let Some(message) = app.status_toast_message() {
        let toast_area = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        render_status_toast(f, toast_area, message);
    }
}

/// Renders a footer with mode indicator, keybindings, and status
pub fn render_navigation_footer(
    f: &mut Frame,
    area: Rect,
    mode: &str,
    keybindings: &[(&str, &str)],
    status: &[(&str, bool)],
) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for &(key, desc) in keybindings {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(ACCENT),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    for &(label, active) in status {
        spans.push(Span::raw(SEPARATOR));
        if active {
            spans.push(Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

pub fn render_status_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Right);

    frame.render_widget(toast, area);
}

/// Centered heading plus message, used for loading, error and empty states
pub fn render_notice(f: &mut Frame, area: Rect, heading: &str, message: &str, color: Color) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            heading.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        area,
    );
}

/// Texts shown for each non-ready state of a collection
pub struct StateTexts<'a> {
    pub loading: &'a str,
    pub error_heading: &'a str,
    pub empty_heading: &'a str,
    pub empty_message: &'a str,
}

/// Draws the loading, error or empty notice; returns false when items should be drawn
pub fn render_load_state<T>(
    f: &mut Frame,
    area: Rect,
    state: &LoadState<T>,
    texts: &StateTexts,
) -> bool {
    match state {
        LoadState::Loading => {
            render_notice(f, area, "…", texts.loading, Color::Cyan);
            true
        }
        LoadState::Failed(message) => {
            render_notice(f, area, texts.error_heading, message, Color::Red);
            true
        }
        LoadState::Ready(items) if items.is_empty() => {
            render_notice(f, area, texts.empty_heading, texts.empty_message, Color::DarkGray);
            true
        }
        LoadState::Ready(_) => false,
    }
}
