// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod catalog;
mod config;
mod logging;
mod services;
mod slider;
mod storage;
mod ui;

use app::{App, AppMode, NAV_ITEMS, Navigable};
use color_eyre::{Result, eyre::eyre};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use services::{dates, seed::CatalogFile};
use std::{
    io,
    path::Path,
    time::{Duration, Instant},
};
use storage::CatalogStore;
use tracing::{error, info};

const DETAIL_PAGE_LINES: u16 = 10;
const MOUSE_SCROLL_LINES: u16 = 3;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Load config
    let config = config::Config::load()?;
    let log_path = logging::init(&config.data_dir()?)?;
    info!(log = %log_path.display(), version = env!("CARGO_PKG_VERSION"), "cena starting");

    // Check for command-line arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        return handle_cli_args(&args, &config);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and initialize services
    let mut app = App::new(config);
    app.init_services();
    let columns = terminal.size()?.width;
    app.start(Instant::now(), columns);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "ui loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn handle_cli_args(args: &[String], config: &config::Config) -> Result<()> {
    let cmd = args.get(1).ok_or_else(|| eyre!("No command provided"))?;
    let program_name = args.first().map_or("cena", String::as_str);

    match cmd.as_str() {
        "--help" | "-h" => print_help(program_name),
        "--version" | "-v" => println!("Sons de Cena v{}", env!("CARGO_PKG_VERSION")),
        "seed" => {
            let file = args
                .get(2)
                .ok_or_else(|| eyre!("Usage: {} seed <catalog.toml|catalog.json>", program_name))?;
            seed_catalog(Path::new(file), config)?;
        }
        "artists" => print_artists(config)?,
        "events" => print_events(config)?,
        cmd_str => {
            eprintln!("Unknown command: {}", cmd_str);
            eprintln!("Run with --help for available commands.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_help(program_name: &str) {
    println!("Sons de Cena - artist agency catalog");
    println!();
    println!("Usage: {} [command]", program_name);
    println!();
    println!("Commands:");
    println!("  seed <file> - Import a TOML or JSON catalog into the store");
    println!("  artists     - Print the roster");
    println!("  events      - Print every event, soonest first");
    println!("  --help      - Show this help");
    println!("  --version   - Show version");
    println!();
    println!("Run without arguments to start interactive mode.");
}

/// Opens the store on a fresh runtime and runs `action` against it
fn with_store<T, F, Fut>(config: &config::Config, action: F) -> Result<T>
where
    F: FnOnce(CatalogStore) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let data_dir = config.data_dir()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let store = CatalogStore::open(&data_dir, &config.storage).await?;
        action(store).await
    })
}

fn seed_catalog(path: &Path, config: &config::Config) -> Result<()> {
    let catalog = CatalogFile::load(path)?;
    let summary = with_store(config, |store| async move {
        store.import_catalog(&catalog).await
    })?;
    info!(file = %path.display(), ?summary, "catalog imported");
    println!(
        "Imported {} categories, {} artists, {} events, {} LPs{}",
        summary.categories,
        summary.singers,
        summary.events,
        summary.lps,
        if summary.social { " and social links" } else { "" }
    );
    Ok(())
}

fn print_artists(config: &config::Config) -> Result<()> {
    let artists = with_store(config, |store| async move {
        store.artists_with_categories().await
    })?;
    if artists.is_empty() {
        println!("No artists found.");
    }
    for artist in &artists {
        let category = artist.category_name.as_deref().unwrap_or_default();
        match artist.genre.as_deref().filter(|genre| !genre.is_empty()) {
            Some(genre) => println!("{}  [{}] {}", artist.name, category, genre),
            None => println!("{}  [{}]", artist.name, category),
        }
    }
    Ok(())
}

fn print_events(config: &config::Config) -> Result<()> {
    let events = with_store(config, |store| async move {
        store.all_events_with_artists().await
    })?;
    if events.is_empty() {
        println!("No events found.");
    }
    for event in &events {
        let artist = event
            .artist
            .as_ref()
            .map_or(String::new(), |artist| format!(" - {}", artist.name));
        println!(
            "{}  {}{}",
            dates::format_event_date(event.date.as_deref()),
            event.display_name(),
            artist
        );
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        let mut slider_area = None;
        terminal.draw(|f| slider_area = ui::render(f, app))?;
        app.set_slider_area(slider_area);

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(Duration::from_millis(100))? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) => {
                    // Only handle KeyPress events to avoid duplicate handling
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.should_quit = true;
                        continue;
                    }

                    if app.mode == AppMode::Preloader {
                        app.finish_preloader(now);
                        continue;
                    }
                    handle_page_key(app, key.code, now);
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                Event::Resize(columns, _) => app.on_resize(columns),
                Event::FocusLost => app.cancel_slider_gesture(),
                Event::FocusGained | Event::Paste(_) => {}
            }
        }
    }

    info!("cena exiting");
    Ok(())
}

fn handle_page_key(app: &mut App, key_code: KeyCode, now: Instant) {
    match key_code {
        KeyCode::Esc | KeyCode::Backspace => app.go_back(now),
        KeyCode::Left => app.slider_prev(),
        KeyCode::Right => app.slider_next(),
        KeyCode::Up => handle_up(app, 1),
        KeyCode::Down => handle_down(app, 1),
        KeyCode::PageUp => handle_up(app, DETAIL_PAGE_LINES),
        KeyCode::PageDown => handle_down(app, DETAIL_PAGE_LINES),
        KeyCode::Enter => handle_enter(app, now),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('k') => handle_up(app, 1),
        KeyCode::Char('j') => handle_down(app, 1),
        KeyCode::Char('h') => app.slider_prev(),
        KeyCode::Char('l') => app.slider_next(),
        KeyCode::Char(character) => {
            if let Some(item) = NAV_ITEMS.iter().find(|item| item.key == character) {
                app.navigate_to(item.mode, now);
            }
        }
        KeyCode::Home
        | KeyCode::End
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_up(app: &mut App, lines: u16) {
    match app.mode {
        AppMode::Artists | AppMode::Events => app.previous_item(),
        AppMode::ArtistDetail => app.scroll_detail_up(lines),
        AppMode::Preloader | AppMode::Home | AppMode::NovaEra | AppMode::Help => {}
    }
}

fn handle_down(app: &mut App, lines: u16) {
    match app.mode {
        AppMode::Artists | AppMode::Events => app.next_item(),
        AppMode::ArtistDetail => app.scroll_detail_down(lines),
        AppMode::Preloader | AppMode::Home | AppMode::NovaEra | AppMode::Help => {}
    }
}

fn handle_enter(app: &mut App, now: Instant) {
    match app.mode {
        AppMode::Home => app.open_slider_artist(now),
        AppMode::Artists => app.open_selected_artist(now),
        AppMode::Events => app.open_selected_event_artist(now),
        AppMode::Help => app.close_help(now),
        AppMode::Preloader | AppMode::ArtistDetail | AppMode::NovaEra => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: event::MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.slider_gesture_start(mouse.column, mouse.row);
        }
        MouseEventKind::Drag(MouseButton::Left) => app.slider_gesture_move(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => {
            app.slider_gesture_end();
        }
        MouseEventKind::ScrollUp => handle_up(app, MOUSE_SCROLL_LINES),
        MouseEventKind::ScrollDown => handle_down(app, MOUSE_SCROLL_LINES),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
            // Ignore horizontal scrolling
        }
        MouseEventKind::Down(_)
        | MouseEventKind::Up(_)
        | MouseEventKind::Drag(_)
        | MouseEventKind::Moved => {}
    }
}
