use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, ArtistDetailState};
use crate::catalog::{Artist, Event, LoadState, Lp};
use crate::services::dates;
use crate::ui::components::{self, ACCENT, StateTexts};
use crate::ui::slider::render_slider;
use crate::ui::utils::truncate_to_width;

pub const ARTIST_NOT_FOUND: &str = "Artista não encontrado";

/// Returns the area of the LP slider when it was drawn
pub fn render_artist_detail_view(f: &mut Frame, app: &App) -> Option<Rect> {
    let (header, body, footer) = components::page_layout(f.area());
    let title = app
        .detail
        .as_ref()
        .and_then(ArtistDetailState::artist)
        .map_or("Artista", |artist| artist.name.as_str());
    components::render_page_header(f, header, app, title);

    let slider_area = match &app.detail {
        Some(detail) => render_detail_body(f, app, detail, body),
        None => {
            components::render_notice(f, body, ARTIST_NOT_FOUND, "", Color::Red);
            None
        }
    };

    render_detail_footer(f, app, footer);
    slider_area
}

fn render_detail_body(
    f: &mut Frame,
    app: &App,
    detail: &ArtistDetailState,
    area: Rect,
) -> Option<Rect> {
    match &detail.artist {
        LoadState::Loading => {
            components::render_notice(f, area, "…", "A carregar artista...", Color::Cyan);
            return None;
        }
        LoadState::Failed(message) => {
            components::render_notice(f, area, "Erro ao carregar artista", message, Color::Red);
            return None;
        }
        LoadState::Ready(_) => {}
    }
    let Some(artist) = detail.artist() else {
        components::render_notice(
            f,
            area,
            ARTIST_NOT_FOUND,
            "Este artista não existe ou foi removido.",
            Color::Red,
        );
        return None;
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(9)])
        .split(area);
    let [info, lps] = &sections[..] else {
        return None;
    };

    let mut lines = profile_lines(artist);
    lines.push(Line::from(""));
    lines.extend(event_lines(&detail.events));

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((detail.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Perfil ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        *info,
    );

    let texts = StateTexts {
        loading: "A carregar discografia...",
        error_heading: "Erro ao carregar discografia",
        empty_heading: "Discografia",
        empty_message: "Ainda sem LPs publicados.",
    };
    if components::render_load_state(f, *lps, &detail.lps, &texts) {
        return None;
    }
    render_slider(f, *lps, "Discografia", &app.album_slider, detail.lps.items(), lp_card);
    Some(*lps)
}

fn profile_lines(artist: &Artist) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", artist.name),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" Categoria  ", label),
            Span::styled(
                artist.category_name.clone().unwrap_or_default(),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];
    for (name, field) in [
        (" Género     ", artist.genre.as_deref()),
        (" Email      ", artist.email.as_deref()),
    ] {
        if let Some(text) = field.filter(|text| !text.is_empty()) {
            lines.push(Line::from(vec![
                Span::styled(name, label),
                Span::styled(text.to_string(), value),
            ]));
        }
    }
    for (name, handle) in artist.social_handles() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<11}", name), label),
            Span::styled(handle.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }
    if let Some(description) = artist.description.as_deref().filter(|text| !text.is_empty()) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!(" {}", description), value)));
    }
    lines
}

fn event_lines(events: &LoadState<Event>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        " Eventos",
        Style::default().fg(Color::Cyan),
    ))];
    match events {
        LoadState::Loading => lines.push(Line::from(" A carregar eventos...")),
        LoadState::Failed(message) => lines.push(Line::from(Span::styled(
            format!(" Erro ao carregar eventos: {}", message),
            Style::default().fg(Color::Red),
        ))),
        LoadState::Ready(items) if items.is_empty() => lines.push(Line::from(Span::styled(
            " Sem eventos agendados.",
            Style::default().fg(Color::DarkGray),
        ))),
        LoadState::Ready(items) => {
            for event in items {
                let mut spans = vec![
                    Span::styled(
                        format!(" {}  ", dates::format_event_date(event.date.as_deref())),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(event.display_name().to_string(), Style::default().fg(Color::White)),
                ];
                if let Some(address) = event.address.as_deref().filter(|text| !text.is_empty()) {
                    spans.push(Span::styled(
                        format!(" · {}", address),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                lines.push(Line::from(spans));
            }
        }
    }
    lines
}

/// Card for one LP, shared with the Nova Era page
pub fn lp_card(lp: &Lp, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let release_style = if lp.pre_save {
        Style::default().fg(Color::Black).bg(ACCENT)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&lp.name, width),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(lp.release_label(), release_style)),
    ];
    for link in lp.links() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(link, width),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines
}

fn render_detail_footer(f: &mut Frame, app: &App, area: Rect) {
    components::render_navigation_footer(
        f,
        area,
        "ARTISTA",
        &[("↑/↓", "deslocar"), ("←/→", "LPs"), ("Esc", "voltar")],
        &[("AUTO", app.album_slider.timer_running())],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect()
    }

    #[test]
    fn test_lp_card_shows_pre_save_label() {
        let lp = Lp {
            id: "lp1".to_string(),
            name: "Maré Alta".to_string(),
            year: 2025,
            pre_save: true,
            link1: Some("https://example.com/pre".to_string()),
            ..Lp::default()
        };
        let rendered = text(&lp_card(&lp, 40));
        assert!(rendered.contains(crate::catalog::PRE_SAVE_LABEL));
        assert!(!rendered.contains("2025"));
        assert!(rendered.contains("https://example.com/pre"));
    }

    #[test]
    fn test_event_lines_format_dates() {
        let events = LoadState::Ready(vec![
            Event {
                id: "e1".to_string(),
                name: Some("Fado no Largo".to_string()),
                date: Some("2026-05-01T21:30".to_string()),
                ..Event::default()
            },
            Event {
                id: "e2".to_string(),
                ..Event::default()
            },
        ]);
        let rendered = text(&event_lines(&events));
        assert!(rendered.contains("01/05/2026, 21:30"));
        assert!(rendered.contains(dates::MISSING_DATE_LABEL));
    }

    #[test]
    fn test_profile_lists_social_handles() {
        let artist = Artist {
            id: "ana".to_string(),
            name: "Ana Lua".to_string(),
            category_name: Some("Fado".to_string()),
            spotify: Some("spotify.com/ana".to_string()),
            ..Artist::default()
        };
        let rendered = text(&profile_lines(&artist));
        assert!(rendered.contains("Ana Lua"));
        assert!(rendered.contains("Fado"));
        assert!(rendered.contains("spotify.com/ana"));
        assert!(!rendered.contains("Email"));
    }
}
