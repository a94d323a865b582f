//! Readpace main entry point
//!
//! Command-line interface for the reading schedule planner: resolves the
//! book list (plan file, comma-separated list file, or interactive
//! prompts), looks up metadata on the catalog, and prints the statistics
//! and goal-date tables.

use anyhow::Context;
use clap::Parser;
use readpace::catalog::CatalogClient;
use readpace::config::{load_book_list, load_config, resolve_ignored_weekdays, BookEntry, Config};
use readpace::output::{compute_statistics, print_book_added, print_goal_dates, print_statistics};
use readpace::schedule::{compute_schedule, weekday_name, Book, BookQueue, DateRange};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Readpace: a catalog-backed reading schedule planner
///
/// Readpace looks up each book's page count on the catalog site, spreads
/// the total across the plan's date range (skipping the weekdays you take
/// off), and prints a completion date for every book.
#[derive(Parser, Debug)]
#[command(name = "readpace")]
#[command(version = "1.0.0")]
#[command(about = "A catalog-backed reading schedule planner", long_about = None)]
struct Cli {
    /// Path to the TOML reading-plan file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Load extra search terms from a comma-separated book list file
    #[arg(long, value_name = "FILE")]
    books: Option<PathBuf>,

    /// Prompt for book names on stdin (enter 'n' to stop)
    #[arg(long)]
    interactive: bool,

    /// Validate the plan and show what would be scheduled without fetching
    #[arg(long, conflicts_with_all = ["books", "interactive"])]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate the plan
    tracing::info!("Loading plan from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load plan {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_plan(config, cli.books.as_deref(), cli.interactive).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("readpace=info,warn"),
            1 => EnvFilter::new("readpace=debug,info"),
            2 => EnvFilter::new("readpace=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --dry-run: validates the plan and shows what would be scheduled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Readpace Dry Run ===\n");

    println!("Plan:");
    println!("  Start date: {}", config.plan.start_date);
    println!("  End date: {}", config.plan.end_date);

    let ignored = resolve_ignored_weekdays(&config.plan.ignore_days)?;
    if ignored.is_empty() {
        println!("  Ignored weekdays: none");
    } else {
        let mut names: Vec<_> = ignored.iter().copied().map(weekday_name).collect();
        names.sort_unstable();
        println!("  Ignored weekdays: {}", names.join(", "));
    }

    let range = DateRange::new(config.plan.start_date, config.plan.end_date, ignored)?;
    println!("  Viable reading days: {}", range.count_viable_days());

    println!("\nCatalog:");
    println!("  Base URL: {}", config.catalog.base_url);
    println!("  User agent: {}", config.catalog.user_agent);

    println!("\nBooks ({}):", config.books.len());
    for entry in &config.books {
        match entry.pages {
            Some(pages) => println!("  - {} ({} pages, no lookup needed)", entry.query, pages),
            None => println!("  - {} (will look up page count)", entry.query),
        }
    }

    println!("\n✓ Plan is valid");
    Ok(())
}

/// Handles the main plan run: resolve books, compute, and print
async fn handle_plan(
    config: Config,
    book_list: Option<&std::path::Path>,
    interactive: bool,
) -> anyhow::Result<()> {
    // Gather every book source: plan entries, list file, then prompts.
    let mut entries = config.books.clone();

    if let Some(path) = book_list {
        let terms = load_book_list(path)
            .with_context(|| format!("failed to load book list {}", path.display()))?;
        tracing::info!("Loaded {} search terms from {}", terms.len(), path.display());
        entries.extend(terms.into_iter().map(entry_for_term));
    }

    if interactive {
        entries.extend(prompt_book_terms()?.into_iter().map(entry_for_term));
    }

    let queue = resolve_queue(&config, &entries).await?;

    let ignored = resolve_ignored_weekdays(&config.plan.ignore_days)?;
    let range = DateRange::new(config.plan.start_date, config.plan.end_date, ignored)?;

    let stats = compute_statistics(&queue, &range)?;
    print_statistics(&stats);

    let result = compute_schedule(&queue, &range, stats.pages_per_day)?;
    print_goal_dates(&result);

    if !result.all_completed() {
        tracing::warn!("not every book fits in the date range");
    }

    Ok(())
}

/// Resolves book entries into a queue, looking up the catalog where needed
async fn resolve_queue(config: &Config, entries: &[BookEntry]) -> anyhow::Result<BookQueue> {
    // Entries with a pages override never touch the network.
    let needs_lookup = entries.iter().any(|e| e.pages.is_none());
    let client = if needs_lookup {
        Some(CatalogClient::new(&config.catalog)?)
    } else {
        None
    };

    let mut queue = BookQueue::new();
    for entry in entries {
        let book = match (entry.pages, &client) {
            (Some(pages), _) => {
                let title = entry.title.clone().unwrap_or_else(|| entry.query.clone());
                Book::new(title, pages)
            }
            (None, Some(client)) => {
                println!("Loading metadata for \"{}\"...", entry.query);
                let mut book = client
                    .lookup(&entry.query)
                    .await
                    .with_context(|| format!("failed to look up \"{}\"", entry.query))?;
                if let Some(title) = &entry.title {
                    book.title = title.clone();
                }
                book
            }
            (None, None) => unreachable!("lookup entries imply a client"),
        };

        print_book_added(&book);
        queue.push(book);
    }

    Ok(queue)
}

fn entry_for_term(term: String) -> BookEntry {
    BookEntry {
        query: term,
        title: None,
        pages: None,
    }
}

/// Prompts for book names on stdin until 'n' is entered
///
/// Boundary adapter only; the rest of the program works from the resolved
/// list and never reads stdin.
fn prompt_book_terms() -> std::io::Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut terms = Vec::new();

    loop {
        print!("Enter Book Name (n to stop): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let term = line?.trim().to_string();
        if term == "n" {
            break;
        }
        if !term.is_empty() {
            terms.push(term);
        }
    }

    Ok(terms)
}
