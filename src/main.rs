//! CLI entry point for sdu

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sdu::{OutputConfig, Reporter, ScanConfig, TreeScanner, logging, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sdu")]
#[command(about = "sdu - Smart Disk Usage")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Show top N items per folder (0 = no limit)
    #[arg(long = "top", value_name = "N")]
    top: Option<usize>,

    /// Max directory depth (-1 = unlimited)
    #[arg(
        long = "depth",
        value_name = "D",
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    depth: i64,

    /// Show summary by file type
    #[arg(long = "summary")]
    summary: bool,

    /// Ignore entries whose name matches pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            // -1 is the only negative value the parser lets through
            max_depth: usize::try_from(self.depth).ok(),
            top_n: self.top.filter(|&n| n > 0),
            ignore_patterns: self.ignore.clone(),
        }
    }
}

fn run(args: &Args) -> sdu::Result<()> {
    let scanner = TreeScanner::new(args.scan_config());
    let outcome = scanner.scan_root(&args.directory)?;

    if args.json {
        return print_json(&outcome);
    }

    let reporter = Reporter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });
    reporter.print_tree(&outcome.root)?;
    if args.summary {
        reporter.print_summary(&outcome.extensions)?;
    }
    Ok(())
}

fn main() {
    logging::init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("sdu: {}", e);
        process::exit(1);
    }
}
