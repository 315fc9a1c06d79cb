mod cli_utils;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use commands::{cmd_bench, cmd_check, cmd_scan};

#[derive(Parser)]
#[command(name = "acmatch")]
#[command(
    about = "Multi-pattern keyword scanner built on an Aho-Corasick automaton",
    long_about = "acmatch - Multi-pattern exact string matching\n\n\
    Builds an Aho-Corasick automaton from a pattern list (one pattern per line) \n\
    and reports every occurrence of every pattern in a single pass over the input.\n\n\
    Features:\n\
      • Unicode aware: offsets are counted in characters\n\
      • Overlapping matches, longest first at a shared end position\n\
      • Plain or gzip compressed pattern lists and inputs\n\
      • Parallel line scanning against one shared automaton\n\n\
    Examples:\n\
      acmatch check words.txt 'ahishershe'\n\
      acmatch scan words.txt access.log --format text\n\
      acmatch scan words.txt.gz app.log.gz -j 8 --offsets\n\
      acmatch bench words.txt corpus.txt -n 20\n\n\
    Set ACMATCH_LOG=debug for diagnostic logging on stderr."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan files or stdin line by line and report every match
    Scan {
        /// Pattern list (one pattern per line, `#` comments, .gz allowed)
        #[arg(value_name = "PATTERNS")]
        patterns: PathBuf,

        /// Input files to scan, or "-" for stdin
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output format: json (default, NDJSON), csv, or text
        #[arg(long, default_value = "json")]
        format: String,

        /// Include character offsets (start, len) of each match
        #[arg(long)]
        offsets: bool,

        /// Number of worker threads (default: 1, 0 uses all cores)
        #[arg(short = 'j', long, default_value = "1")]
        threads: usize,

        /// Show scan statistics on stderr
        #[arg(short, long)]
        stats: bool,
    },

    /// Check a single string against a pattern list
    Check {
        /// Pattern list (one pattern per line, `#` comments, .gz allowed)
        #[arg(value_name = "PATTERNS")]
        patterns: PathBuf,

        /// Text to search
        #[arg(value_name = "TEXT")]
        text: String,

        /// Quiet mode - no output, only exit code (0 = found, 1 = not found)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Benchmark automaton build and search throughput
    Bench {
        /// Pattern list (one pattern per line, `#` comments, .gz allowed)
        #[arg(value_name = "PATTERNS")]
        patterns: PathBuf,

        /// Text corpus to search
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Number of search iterations over the corpus
        #[arg(short = 'n', long, default_value = "10")]
        iterations: usize,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("ACMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Exit code for errors reported here; 0 and 1 are match/no-match from `check`
const EXIT_ERROR: i32 = 2;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("acmatch: {:#}", e);
        std::process::exit(EXIT_ERROR);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            patterns,
            inputs,
            format,
            offsets,
            threads,
            stats,
        } => cmd_scan(patterns, inputs, format, offsets, threads, stats),
        Commands::Check {
            patterns,
            text,
            quiet,
        } => cmd_check(patterns, text, quiet),
        Commands::Bench {
            patterns,
            input,
            iterations,
        } => cmd_bench(patterns, input, iterations),
    }
}
