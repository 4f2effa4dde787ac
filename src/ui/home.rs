use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::catalog::{Artist, SocialLinks};
use crate::ui::components::{self, ACCENT, BRAND, StateTexts};
use crate::ui::slider::render_slider;
use crate::ui::utils::truncate_to_width;

const TAGLINE: &str = "Agência de artistas, eventos e edições";

/// Returns the area of the artist slider when it was drawn
pub fn render_home_view(f: &mut Frame, app: &App) -> Option<Rect> {
    let (header, body, footer) = components::page_layout(f.area());
    components::render_page_header(f, header, app, "Início");

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hero
            Constraint::Min(8),    // Artist slider
            Constraint::Length(3), // Social links
        ])
        .split(body);
    let mut slider_area = None;
    if let [hero, slider, social] = &sections[..] {
        render_hero(f, *hero);
        slider_area = render_artist_slider(f, app, *slider);
        render_social_links(f, &app.social_links, *social);
    }

    render_home_footer(f, app, footer);
    slider_area
}

fn render_hero(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            BRAND.to_uppercase(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_artist_slider(f: &mut Frame, app: &App, area: Rect) -> Option<Rect> {
    let texts = StateTexts {
        loading: "A carregar artistas...",
        error_heading: "Erro ao carregar artistas",
        empty_heading: "Nenhum artista encontrado",
        empty_message: "O roster ainda está vazio.",
    };
    if components::render_load_state(f, area, &app.artists, &texts) {
        return None;
    }
    render_slider(
        f,
        area,
        "Artistas",
        &app.artist_slider,
        app.artists.items(),
        artist_card,
    );
    Some(area)
}

fn artist_card(artist: &Artist, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&artist.name, width),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(artist.category_name.as_deref().unwrap_or_default(), width),
            Style::default().fg(Color::Green),
        )),
    ];
    if let Some(genre) = artist.genre.as_deref().filter(|genre| !genre.is_empty()) {
        lines.push(Line::from(Span::styled(
            truncate_to_width(genre, width),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn render_social_links(f: &mut Frame, links: &SocialLinks, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (label, url) in [
        ("Facebook", links.facebook.as_deref()),
        ("Instagram", links.instagram.as_deref()),
        ("YouTube", links.youtube.as_deref()),
    ] {
        let Some(url) = url else {
            continue;
        };
        spans.push(Span::styled(
            format!("{} ", label),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!("{}   ", url),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Siga-nos ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        area,
    );
}

fn render_home_footer(f: &mut Frame, app: &App, area: Rect) {
    components::render_navigation_footer(
        f,
        area,
        "INÍCIO",
        &[
            ("←/→", "slider"),
            ("Enter", "abrir artista"),
            ("1-4", "páginas"),
            ("q", "sair"),
        ],
        &[("AUTO", app.artist_slider.timer_running())],
    );
}
