use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::App;
use crate::catalog::Event;
use crate::services::dates;
use crate::ui::components::{self, ACCENT, StateTexts};
use crate::ui::utils::truncate_to_width;

pub const UPCOMING_BADGE: &str = "Próximo";

pub fn render_events_view(f: &mut Frame, app: &App) {
    let (header, body, footer) = components::page_layout(f.area());
    components::render_page_header(f, header, app, "Eventos");
    render_events_list(f, app, body);
    render_events_footer(f, footer);
}

fn render_events_list(f: &mut Frame, app: &App, area: Rect) {
    let texts = StateTexts {
        loading: "A carregar eventos...",
        error_heading: "Erro ao carregar eventos",
        empty_heading: "Nenhum evento encontrado",
        empty_message: "Não há eventos agendados de momento.",
    };
    if components::render_load_state(f, area, &app.events, &texts) {
        return;
    }

    let now = Local::now();
    let width = area.width.saturating_sub(6) as usize;
    let mut items = Vec::new();
    let mut selected_item_index = None;
    for (i, event) in app.events.items().iter().enumerate() {
        let is_selected = i == app.events_selected;
        items.push(ListItem::new(event_lines(event, is_selected, width, &now)));
        if is_selected {
            selected_item_index = Some(items.len().saturating_sub(1));
        }
        items.push(ListItem::new(Line::from("")));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Agenda ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    let mut list_state = ListState::default();
    list_state.select(selected_item_index);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn event_lines(
    event: &Event,
    is_selected: bool,
    width: usize,
    now: &DateTime<Local>,
) -> Vec<Line<'static>> {
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

    let mut title = vec![
        Span::styled(prefix, prefix_style),
        Span::styled(truncate_to_width(event.display_name(), width), name_style),
    ];
    if dates::is_upcoming_raw(event.date.as_deref(), now) {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            format!(" {} ", UPCOMING_BADGE),
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let mut meta = vec![
        Span::styled("   ", meta_style),
        Span::styled(
            dates::format_event_date(event.date.as_deref()),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if let Some(artist) = &event.artist {
        meta.push(Span::styled(" · ", meta_style));
        meta.push(Span::styled(artist.name.clone(), Style::default().fg(Color::Green)));
    }
    if let Some(price) = event.price.as_deref().filter(|price| !price.is_empty()) {
        meta.push(Span::styled(format!(" · {}", price), meta_style));
    }

    let mut lines = vec![Line::from(title), Line::from(meta)];
    if let Some(address) = event.address.as_deref().filter(|address| !address.is_empty()) {
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(truncate_to_width(address, width), meta_style),
        ]));
    }
    lines
}

fn render_events_footer(f: &mut Frame, area: Rect) {
    components::render_navigation_footer(
        f,
        area,
        "EVENTOS",
        &[("↑/↓", "mover"), ("Enter", "artista"), ("Esc", "voltar")],
        &[],
    );
}
