use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::App;
use crate::catalog::Artist;
use crate::ui::components::{self, StateTexts};
use crate::ui::utils::truncate_to_width;

pub fn render_artists_view(f: &mut Frame, app: &App) {
    let (header, body, footer) = components::page_layout(f.area());
    let title = if app.artists.is_empty() {
        "Artistas".to_string()
    } else {
        format!("Artistas ({})", app.artists.len())
    };
    components::render_page_header(f, header, app, &title);
    render_artists_list(f, app, body);
    render_artists_footer(f, footer);
}

fn render_artists_list(f: &mut Frame, app: &App, area: Rect) {
    let texts = StateTexts {
        loading: "A carregar artistas...",
        error_heading: "Erro ao carregar artistas",
        empty_heading: "Nenhum artista encontrado",
        empty_message: "Importe um catálogo com `cena seed <ficheiro>`.",
    };
    if components::render_load_state(f, area, &app.artists, &texts) {
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let mut items = Vec::new();
    let mut selected_item_index = None;
    for (i, artist) in app.artists.items().iter().enumerate() {
        let is_selected = i == app.artists_selected;
        items.push(ListItem::new(artist_lines(artist, is_selected, width)));
        if is_selected {
            selected_item_index = Some(items.len().saturating_sub(1));
        }
        items.push(ListItem::new(Line::from("")));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Roster ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    let mut list_state = ListState::default();
    list_state.select(selected_item_index);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn artist_lines(artist: &Artist, is_selected: bool, width: usize) -> Vec<Line<'static>> {
    let (prefix, prefix_style) = if is_selected {
        (
            " > ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("   ", Style::default())
    };
    let name_style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let meta_style = Style::default().fg(Color::DarkGray);

    let mut meta = vec![Span::styled("   ", meta_style)];
    if let Some(category) = &artist.category_name {
        meta.push(Span::styled(category.clone(), Style::default().fg(Color::Green)));
    }
    if let Some(genre) = artist.genre.as_deref().filter(|genre| !genre.is_empty()) {
        meta.push(Span::styled(format!(" · {}", genre), meta_style));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(prefix, prefix_style),
            Span::styled(truncate_to_width(&artist.name, width), name_style),
        ]),
        Line::from(meta),
    ];
    if let Some(description) = artist.description.as_deref().filter(|text| !text.is_empty()) {
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(truncate_to_width(description, width), meta_style),
        ]));
    }
    lines
}

fn render_artists_footer(f: &mut Frame, area: Rect) {
    components::render_navigation_footer(
        f,
        area,
        "ARTISTAS",
        &[("↑/↓", "mover"), ("Enter", "abrir"), ("Esc", "voltar")],
        &[],
    );
}
