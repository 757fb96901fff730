//! report-folders: folder view of a notebook report server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use report_folders::config::{
    build_hide_set, default_config_json, load_config, OutputFormat, CONFIG_FILENAME,
    DEFAULT_SERVER,
};
use report_folders::path::{encode_folder, location_for_folder, normalize_folder};
use report_folders::reporter::{ConsoleReporter, HtmlReporter, JsonReporter};
use report_folders::source::FileReportSource;
use report_folders::{FolderView, NavigationOutcome, PageState, ReportSource};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Show the folders and reports of a notebook report server
#[derive(Parser, Debug)]
#[command(name = "report-folders")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page to show: a URL path (`/`, `/folder/a/b%20c`) or a bare folder (`a/b c`)
    location: Option<String>,

    /// Base URL of the report server (default: from config, then http://localhost:11828)
    #[arg(long, short)]
    server: Option<String>,

    /// Read reports from a saved JSON response instead of the server
    #[arg(long, short, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short, conflicts_with = "html")]
    json: bool,

    /// Output a self-contained HTML page
    #[arg(long = "html", short = 'H')]
    html: bool,

    /// Write output to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Quiet mode (one line per card)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (debug logging, original report names)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .reportfoldersrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .reportfoldersrc.json with sensible defaults
    Init {
        /// Report server base URL to write into the config
        #[arg(long)]
        server: Option<String>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(Commands::Init { server, dir }) = args.command {
        return run_init(server.as_deref(), dir.as_deref());
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let cli_format = if args.json {
        Some(OutputFormat::Json)
    } else if args.html {
        Some(OutputFormat::Html)
    } else {
        None
    };
    let config = load_config(&cwd, args.config.as_deref())?
        .merge_with_cli(args.server.as_deref(), cli_format);

    let source: Box<dyn ReportSource> = match args.input {
        Some(ref path) => Box::new(FileReportSource::new(path)),
        None => http_source(config.server())?,
    };

    let mut view = FolderView::new(source);
    if !config.hide.is_empty() {
        view = view.with_hidden(build_hide_set(&config.hide)?);
    }

    let location = to_location(args.location.as_deref().unwrap_or("/"));
    log::debug!("showing {} from {}", location, view.source().describe());

    let state = match view.navigate(&location) {
        NavigationOutcome::Committed(state) => state,
        NavigationOutcome::Stale { .. } => {
            anyhow::bail!("navigation to {} was superseded", location)
        }
    };

    let rendered = match config.format() {
        OutputFormat::Json => JsonReporter::new().pretty().report(&state),
        OutputFormat::Html => HtmlReporter::new(config.title()).report(&state),
        OutputFormat::Console => {
            let mut reporter = ConsoleReporter::new();
            if args.no_color || args.output.is_some() {
                reporter = reporter.without_colors();
            }
            if args.verbose {
                reporter = reporter.verbose();
            }
            if args.quiet {
                reporter.render_quiet(&state)
            } else {
                reporter.render(&state)
            }
        }
    };

    match args.output {
        Some(ref output_path) => {
            std::fs::write(output_path, &rendered)
                .with_context(|| format!("Failed to write output to {}", output_path.display()))?;
            if !args.quiet {
                eprintln!("{}: Written to {}", "Info".blue(), output_path.display());
            }
        }
        None => print!("{}", ensure_trailing_newline(rendered)),
    }

    match state {
        PageState::Loaded(_) => Ok(ExitCode::SUCCESS),
        PageState::Failed { .. } => {
            if config.format() != OutputFormat::Console && !args.quiet {
                eprintln!("{}: Failed to load reports", "Error".red().bold());
            }
            Ok(ExitCode::from(1))
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[cfg(feature = "http")]
fn http_source(server: &str) -> Result<Box<dyn ReportSource>> {
    Ok(Box::new(report_folders::source::HttpReportSource::new(server)))
}

#[cfg(not(feature = "http"))]
fn http_source(_server: &str) -> Result<Box<dyn ReportSource>> {
    anyhow::bail!("HTTP support not enabled. Rebuild with: cargo build --features http, or pass --input")
}

/// URL paths are used as given; bare folders become `/folder/<encoded folder>`
fn to_location(arg: &str) -> String {
    if arg.starts_with('/') {
        arg.to_string()
    } else {
        location_for_folder(&encode_folder(&normalize_folder(arg)))
    }
}

fn ensure_trailing_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

fn run_init(server: Option<&str>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = default_config_json(server.unwrap_or(DEFAULT_SERVER));
    std::fs::write(&config_path, json + "\n")
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    eprintln!("{}: Created {}", "Info".blue(), config_path.display());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_location() {
        assert_eq!(to_location("/"), "/");
        assert_eq!(to_location("/folder/a/b%20c"), "/folder/a/b%20c");
        assert_eq!(to_location(""), "/");
        assert_eq!(to_location("a/b c"), "/folder/a/b%20c");
        assert_eq!(to_location("a/b/"), "/folder/a/b");
    }
}
