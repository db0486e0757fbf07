mod catalog;
mod config;
mod detail;
mod error;
mod filter;
mod input;
mod overlay;
mod pagination;
mod render;
mod screen;
mod session;
mod theme;
mod ui;

use catalog::Catalog;
use clap::{Parser, Subcommand};
use config::{Settings, ThemePreference};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind};
use error::CatalogError;
use filter::FilterCriteria;
use ratatui::layout::Rect;
use screen::Screen;
use session::{Event, Session};
use std::io::{self, Write};
use std::path::PathBuf;
use theme::Theme;
use ui::PageLayout;

/// TUI explorer for a paginated, filterable book catalog
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Override the catalog's books-per-page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Starting theme: system, day or night
    #[arg(long, global = true)]
    theme: Option<ThemePreference>,

    /// Path to a config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the TUI explorer (default)
    Run,
    /// Print matching books without the TUI
    List {
        /// Case-insensitive title substring
        #[arg(long, default_value = "")]
        title: String,
        /// Author id, or "any"
        #[arg(long, default_value = filter::ANY)]
        author: String,
        /// Genre id, or "any"
        #[arg(long, default_value = filter::ANY)]
        genre: String,
        /// How many pages to print (the first page is always printed)
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Print the author options
    Authors,
    /// Print the genre options
    Genres,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?.with_overrides(
        cli.catalog,
        cli.page_size,
        cli.theme,
    );
    let _log_guard = init_logging(&settings);

    let catalog = match load_catalog(&settings) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "catalog load failed");
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let theme = settings.theme.resolve(theme::prefers_dark());
            if let Err(e) = run_tui(catalog, theme) {
                tracing::error!(error = %e, "terminal session failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::List {
            title,
            author,
            genre,
            pages,
        } => {
            let criteria = FilterCriteria::from_form(&title, &author, &genre);
            print_list(catalog, criteria, pages, &mut io::stdout().lock())?;
        }
        Commands::Authors => print_options(
            render::create_options(catalog.authors(), "All Authors"),
            &mut io::stdout().lock(),
        )?,
        Commands::Genres => print_options(
            render::create_options(catalog.genres(), "All Genres"),
            &mut io::stdout().lock(),
        )?,
    }

    Ok(())
}

fn load_catalog(settings: &Settings) -> Result<Catalog, CatalogError> {
    let catalog = match &settings.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    match settings.books_per_page {
        Some(n) => catalog.with_books_per_page(n),
        None => Ok(catalog),
    }
}

/// The TUI owns stdout, so logs go to a daily file. Logging is skipped when
/// the log directory cannot be created.
fn init_logging(settings: &Settings) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let logs_dir = settings.log_dir().ok()?;
    std::fs::create_dir_all(&logs_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "book-explorer.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("book_explorer=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .ok()?;

    Some(guard)
}

fn run_tui(catalog: Catalog, theme: Theme) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(catalog);
    let mut screen = Screen::new();
    screen.apply_all(session.init(theme));

    // Init terminal
    let mut terminal = ratatui::init();
    if let Err(e) = crossterm::execute!(std::io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }

    // Main loop
    let result = run_app(&mut terminal, &mut session, &mut screen);

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    session: &mut Session,
    screen: &mut Screen,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::render(screen, frame))?;

        if screen.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if event::poll(std::time::Duration::from_millis(250))? {
            let size = terminal.size()?;
            let layout = PageLayout::new(Rect::new(0, 0, size.width, size.height));

            let page_event = match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(screen, key, &layout)
                }
                TermEvent::Mouse(mouse) => input::handle_mouse(screen, mouse, &layout),
                _ => None,
            };

            if let Some(page_event) = page_event {
                screen.apply_all(session.handle(page_event));
            }
            screen.ensure_visible(layout.visible_cards());
        }
    }
}

/// Drive the same session headlessly and write what the list would show.
/// The first page is always written; `pages` stops early at a disabled button.
fn print_list(
    catalog: Catalog,
    criteria: FilterCriteria,
    pages: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut session = Session::new(catalog);
    let mut screen = Screen::new();
    screen.apply_all(session.init(Theme::Day));
    screen.apply_all(session.handle(Event::SubmitSearch { criteria }));
    for _ in 1..pages {
        if screen.show_more.disabled {
            break;
        }
        screen.apply_all(session.handle(Event::ShowMore));
    }

    if screen.list_message {
        writeln!(out, "No results found. Your filters might be too narrow.")?;
    }
    for preview in &screen.previews {
        writeln!(
            out,
            "{}\t{}\t{}",
            preview.id,
            preview.title,
            screen.author_label(&preview.author)
        )?;
    }
    writeln!(out, "{}", screen.show_more.label())
}

fn print_options(options: Vec<render::SelectOption>, out: &mut impl Write) -> io::Result<()> {
    for option in options {
        writeln!(out, "{}\t{}", option.value, option.label)?;
    }
    Ok(())
}
