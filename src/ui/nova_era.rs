use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::artist_detail::lp_card;
use crate::ui::components::{self, ACCENT, StateTexts};
use crate::ui::slider::render_slider;

const LABEL_NAME: &str = "NOVA ERA";
const LABEL_SUBTITLE: &str = "Selo Digital Independente";

const LABEL_SECTIONS: [(&str, &str); 3] = [
    (
        "Sobre o selo",
        "A Nova Era edita em digital os novos nomes do roster, do primeiro single ao LP.",
    ),
    (
        "Distribuição",
        "Os lançamentos chegam às principais plataformas de streaming com pre-save antes da data.",
    ),
    (
        "Submissões",
        "Envie a sua maquete pelo email da agência, com links de escuta e redes sociais.",
    ),
];

/// Returns the area of the releases slider when it was drawn
pub fn render_nova_era_view(f: &mut Frame, app: &App) -> Option<Rect> {
    let (header, body, footer) = components::page_layout(f.area());
    components::render_page_header(f, header, app, "Nova Era");

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Banner
            Constraint::Length(9), // Releases
            Constraint::Min(0),    // Label text
        ])
        .split(body);
    let mut slider_area = None;
    if let [banner, releases, text] = &sections[..] {
        render_banner(f, *banner);
        slider_area = render_releases(f, app, *releases);
        render_label_text(f, *text);
    }

    components::render_navigation_footer(
        f,
        footer,
        "NOVA ERA",
        &[("←/→", "lançamentos"), ("Esc", "voltar")],
        &[("AUTO", app.album_slider.timer_running())],
    );
    slider_area
}

fn render_banner(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                LABEL_NAME,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(LABEL_SUBTITLE, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_releases(f: &mut Frame, app: &App, area: Rect) -> Option<Rect> {
    let texts = StateTexts {
        loading: "A carregar lançamentos...",
        error_heading: "Erro ao carregar lançamentos",
        empty_heading: "Lançamentos",
        empty_message: "Ainda não há lançamentos Nova Era.",
    };
    if components::render_load_state(f, area, &app.nova_era_lps, &texts) {
        return None;
    }
    render_slider(
        f,
        area,
        "Lançamentos",
        &app.album_slider,
        app.nova_era_lps.items(),
        lp_card,
    );
    Some(area)
}

fn render_label_text(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for (title, body) in LABEL_SECTIONS {
        lines.push(Line::from(Span::styled(
            format!(" {}", title),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(Span::styled(
            format!(" {}", body),
            Style::default().fg(Color::White),
        )));
        lines.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
