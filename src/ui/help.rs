use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::components;

const SHORTCUTS: [(&str, &str); 10] = [
    ("1-4", "Início, Artistas, Eventos, Nova Era"),
    ("?", "Esta ajuda"),
    ("Esc", "Voltar à página anterior"),
    ("←/→", "Slider: anterior / seguinte"),
    ("Arrastar", "Deslizar o slider com o rato"),
    ("↑/↓", "Mover na lista ou deslocar o detalhe"),
    ("Enter", "Abrir o artista selecionado"),
    ("j/k", "Igual a ↓/↑"),
    ("q", "Sair"),
    ("Ctrl+C", "Sair"),
];

pub fn render_help_view(f: &mut Frame, app: &App) {
    let (header, body, footer) = components::page_layout(f.area());
    components::render_page_header(f, header, app, "Ajuda");
    render_help_body(f, body);
    render_help_footer(f, footer);
}

fn render_help_body(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Atalhos", Style::default().fg(Color::Cyan))),
        Line::from(""),
    ];
    for (key, description) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", key), Style::default().fg(Color::Yellow)),
            Span::styled(description, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Os sliders avançam sozinhos enquanto houver mais itens do que cabem no ecrã.",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Atalhos ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_help_footer(f: &mut Frame, area: Rect) {
    components::render_navigation_footer(f, area, "AJUDA", &[("Esc", "voltar")], &[]);
}
