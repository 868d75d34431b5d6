use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use show_scout::{
    BrowserConfig, BrowserError, BrowserEvent, CardId, ClickTarget, HtmlPage, ListingsError,
    ListingsProvider, RenderError, ShowBrowser, TerminalView, TvMazeProvider, View,
    tvmaze_browser,
};
use std::fs;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "show_scout")]
#[command(author, version, about = "Search TV shows and browse their episodes")]
struct Cli {
    /// Base URL of the TVMaze API
    #[arg(long, global = true, env = "SHOW_SCOUT_BASE_URL")]
    base_url: Option<String>,

    /// Image URL used for shows without artwork
    #[arg(long, global = true, env = "SHOW_SCOUT_DEFAULT_IMAGE")]
    default_image: Option<String>,

    /// Also write the rendered page to this HTML file
    #[arg(long, global = true)]
    html: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search shows by title
    Search {
        /// Search term (sent as-is, may be empty)
        term: String,
    },

    /// List all episodes of a show
    Episodes {
        /// TVMaze show id
        show_id: u64,
    },

    /// Search and browse episodes interactively
    Browse {
        /// Initial search term, prompted for when missing
        term: Option<String>,
    },
}

/// Errors surfaced by the command line interface
#[derive(Debug, Error)]
enum CliError {
    /// Already presented by the browser's error handler
    #[error("{0}")]
    Browser(#[from] BrowserError),

    #[error("{0}")]
    Listings(#[from] ListingsError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to write HTML page {path}: {source}")]
    HtmlWrite { path: PathBuf, source: io::Error },
}

type Views = (TerminalView<Stdout>, HtmlPage);

/// Handles browser events and prints formatted output to stdout
fn handle_browser_event(event: BrowserEvent) {
    match event {
        BrowserEvent::SearchStarted { term } => {
            println!("Searching shows matching '{}'...", term);
        }
        BrowserEvent::ShowsRendered { count } => {
            println!("Found {} show(s)", count);
        }
        BrowserEvent::EpisodesRequested { show_id, show_name } => {
            println!("\nFetching episodes of '{}' (id {})...", show_name, show_id);
        }
        BrowserEvent::EpisodesRendered { count, .. } => {
            println!("\nListed {} episode(s)", count);
        }
    }
}

/// Presents pipeline failures on stderr
fn present_error(error: &BrowserError) {
    eprintln!("\nError: {}", error);
}

fn init_logging(verbose: bool) {
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "show_scout=debug".to_string()
        } else {
            "show_scout=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter.as_str())
        .with_writer(io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> BrowserConfig {
    let mut config = BrowserConfig::default();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(default_image) = &cli.default_image {
        config = config.with_default_image(default_image.as_str());
    }
    config
}

fn new_views() -> Views {
    (TerminalView::new(io::stdout()), HtmlPage::new())
}

/// Writes the HTML page when an output path was given
fn write_html(path: Option<&Path>, page: &HtmlPage) -> Result<(), CliError> {
    let Some(path) = path else {
        return Ok(());
    };

    fs::write(path, page.to_document()?).map_err(|source| CliError::HtmlWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn search(
    browser: &mut ShowBrowser<TvMazeProvider, Views>,
    term: &str,
    html: Option<&Path>,
) -> Result<(), CliError> {
    browser.submit_search(term)?;
    write_html(html, &browser.view().1)
}

fn browse(
    browser: &mut ShowBrowser<TvMazeProvider, Views>,
    initial_term: Option<String>,
    html: Option<&Path>,
) -> Result<(), CliError> {
    let mut next_term = initial_term;

    loop {
        let term = match next_term.take() {
            Some(term) => term,
            None => Input::<String>::new()
                .with_prompt("Search shows")
                .allow_empty(true)
                .interact_text()?,
        };

        // Failures were presented by the error handler, keep browsing
        match search(browser, &term, html) {
            Ok(()) => {}
            Err(CliError::Browser(_)) => continue,
            Err(e) => return Err(e),
        }

        loop {
            let mut items: Vec<String> = browser
                .cards()
                .map(|(card, show)| format!("{} {} - Episodes", card, show.name))
                .collect();
            let card_count = items.len();
            items.push("New search".to_string());
            items.push("Quit".to_string());

            let selection = Select::new()
                .with_prompt("Pick a show")
                .items(&items)
                .default(0)
                .interact_opt()?;

            match selection {
                Some(index) if index < card_count => {
                    let click = ClickTarget::EpisodesButton(CardId(index));
                    if browser.handle_click(click).is_ok() {
                        write_html(html, &browser.view().1)?;
                    }
                }
                Some(index) if index == card_count => break,
                _ => return Ok(()),
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = build_config(&cli);
    let html = cli.html.as_deref();

    match cli.command {
        Commands::Search { term } => {
            let mut browser = tvmaze_browser(&config, new_views())
                .with_error_handler(present_error)
                .with_event_handler(handle_browser_event);
            search(&mut browser, &term, html)
        }
        Commands::Episodes { show_id } => {
            let provider = TvMazeProvider::new(&config);
            let episodes = provider.fetch_episodes(show_id)?;

            let mut views = new_views();
            views.render_episodes(&episodes)?;
            write_html(html, &views.1)
        }
        Commands::Browse { term } => {
            let mut browser = tvmaze_browser(&config, new_views())
                .with_error_handler(present_error)
                .with_event_handler(handle_browser_event);
            browse(&mut browser, term, html)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => {}
        Err(CliError::Browser(_)) => process::exit(1),
        Err(e) => {
            eprintln!("\nError: {}", e);
            process::exit(1);
        }
    }
}
