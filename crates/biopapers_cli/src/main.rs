//! Command-line front end for the paper engine.
//!
//! # Responsibility
//! - Expose search, facets, insights and the assistant over one spreadsheet.
//! - Keep output plain text, one record per line, for shell pipelines.

use biopapers_core::{
    default_log_level, init_logging, parse_organism_filter, top_keywords, unique_organisms,
    unique_years, ChatSession, FailurePolicy, Insights, LibraryConfig, PaperFilter,
    PaperLibrary, PaperQuery, Papers, SheetFile, DEFAULT_KEYWORD_LIMIT, THINKING_DELAY,
};
use clap::{Parser, Subcommand};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Space-biology research paper explorer.
#[derive(Parser, Debug)]
#[command(name = "biopapers", version, about, long_about = None)]
struct Cli {
    /// Spreadsheet to read (defaults to BIOPAPERS_DATA_PATH or data/research-papers.xlsx)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Keep an empty collection after a failed load instead of retrying
    #[arg(long)]
    cache_failures: bool,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check engine linkage
    Ping,
    /// Search papers, optionally narrowed by filters
    Search {
        /// Free text matched against titles, keywords, abstracts, authors and summaries
        #[arg(default_value = "")]
        text: String,
        /// Organism label, or `All`
        #[arg(short, long, default_value = "All")]
        organism: String,
        /// Exact publication year
        #[arg(short, long)]
        year: Option<i32>,
        /// Keyword substring
        #[arg(short, long)]
        keyword: Option<String>,
    },
    /// List known years and organisms
    Facets,
    /// List the most frequent keywords
    Keywords {
        #[arg(short = 'n', long, default_value_t = DEFAULT_KEYWORD_LIMIT)]
        limit: usize,
    },
    /// Print chart data for the collection
    Insights,
    /// Ask the research assistant one question
    Ask { question: String },
    /// Talk to the research assistant interactively
    Chat {
        /// Answer immediately instead of pausing to "think"
        #[arg(long)]
        no_delay: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("biopapers: {err}");
            return ExitCode::FAILURE;
        }
    }

    if let Commands::Ping = cli.command {
        println!("biopapers_core ping={}", biopapers_core::ping());
        println!("biopapers_core version={}", biopapers_core::core_version());
        return ExitCode::SUCCESS;
    }

    let library = PaperLibrary::from_config(&resolve_config(&cli));
    let papers = load_or_warn(&library);

    match cli.command {
        Commands::Ping => {}
        Commands::Search {
            text,
            organism,
            year,
            keyword,
        } => {
            let organism = match parse_organism_filter(&organism) {
                Ok(organism) => organism,
                Err(err) => {
                    eprintln!("biopapers: {err}");
                    return ExitCode::FAILURE;
                }
            };
            let query = PaperQuery {
                text,
                filter: PaperFilter {
                    organism,
                    year,
                    keyword,
                },
            };
            print_search(&query, &papers);
        }
        Commands::Facets => {
            let years = unique_years(papers.iter())
                .into_iter()
                .map(|year| year.to_string())
                .collect::<Vec<_>>();
            let organisms = unique_organisms(papers.iter())
                .into_iter()
                .map(|organism| organism.label())
                .collect::<Vec<_>>();
            println!("years: {}", years.join(", "));
            println!("organisms: {}", organisms.join(", "));
        }
        Commands::Keywords { limit } => {
            for keyword in top_keywords(papers.iter(), limit) {
                println!("{keyword}");
            }
        }
        Commands::Insights => print_insights(&Insights::compute(&papers)),
        Commands::Ask { question } => println!("{}", biopapers_core::respond(&question, &papers)),
        Commands::Chat { no_delay } => {
            if let Err(err) = run_chat(&papers, !no_delay) {
                eprintln!("biopapers: chat aborted: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn resolve_config(cli: &Cli) -> LibraryConfig {
    let mut config = LibraryConfig::from_env();
    if let Some(path) = &cli.data {
        config.data_path = path.clone();
    }
    if cli.cache_failures {
        config.failure_policy = FailurePolicy::CacheEmpty;
    }
    config
}

/// Loads the collection, telling the user why it is empty on failure.
fn load_or_warn(library: &PaperLibrary<SheetFile>) -> Papers {
    match library.try_load() {
        Ok(papers) => {
            debug!(
                "event=cli_load module=cli status=ok count={}",
                papers.len()
            );
            papers
        }
        Err(err) => {
            eprintln!("biopapers: no data available ({err}); continuing with an empty collection");
            library.load()
        }
    }
}

fn print_search(query: &PaperQuery, papers: &Papers) {
    let hits = query.apply(papers.iter());
    let noun = if hits.len() == 1 { "paper" } else { "papers" };
    println!(
        "{} {noun} found ({} active filters)",
        hits.len(),
        query.active_filter_count()
    );
    for paper in hits {
        let year = if paper.has_year() {
            paper.year.to_string()
        } else {
            "n.d.".to_string()
        };
        println!(
            "#{:<4} {} ({}) [{}] {}",
            paper.id,
            paper.title,
            year,
            paper.organism,
            paper.lead_author_label()
        );
    }
}

fn print_insights(insights: &Insights) {
    println!("papers: {}", insights.total_papers);
    println!("organisms studied: {}", insights.organism_count());
    match insights.year_span {
        Some(span) => println!("years: {}-{}", span.earliest, span.latest),
        None => println!("years: -"),
    }

    println!("\nper year:");
    for entry in &insights.years {
        println!("  {:>6}  {}", entry.year, entry.count);
    }
    println!("\nper organism:");
    for entry in &insights.organisms {
        println!("  {:<14}{}", entry.organism.label(), entry.count);
    }
    println!("\ntop keywords:");
    for entry in &insights.keywords {
        println!("  {:<24}{}", entry.keyword, entry.count);
    }
}

fn run_chat(papers: &Papers, thinking_delay: bool) -> io::Result<()> {
    let mut session = ChatSession::new();
    let mut stdout = io::stdout();
    for message in session.messages() {
        writeln!(stdout, "assistant> {}", message.content)?;
    }

    let stdin = io::stdin();
    loop {
        write!(stdout, "you> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let input = line.trim_end_matches(['\n', '\r']);
        if matches!(input.trim(), "exit" | "quit") {
            return Ok(());
        }

        if thinking_delay && !input.trim().is_empty() {
            std::thread::sleep(THINKING_DELAY);
        }
        if let Some(reply) = session.ask(input, papers) {
            writeln!(stdout, "assistant> {}\n", reply.content)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_requires_log_dir() {
        let err = Cli::try_parse_from(["biopapers", "--log-level", "debug", "ping"])
            .expect_err("log level alone must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from([
            "biopapers",
            "--log-dir",
            "/tmp/biopapers-logs",
            "--log-level",
            "debug",
            "ping",
        ])
        .expect("log level with a log dir parses");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Ping));
    }
}
