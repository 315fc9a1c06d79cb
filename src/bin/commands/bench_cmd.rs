use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli_utils::{build_matcher, format_bytes, format_number, open_input};

pub fn cmd_bench(patterns: PathBuf, input: PathBuf, iterations: usize) -> Result<()> {
    anyhow::ensure!(iterations > 0, "Iteration count must be at least 1");

    let mut corpus = String::new();
    open_input(&input)?
        .read_to_string(&mut corpus)
        .with_context(|| format!("Failed to read input: {}", input.display()))?;

    println!("=== acmatch Benchmark ===\n");

    let (matcher, build_time) = build_matcher(&patterns)?;
    let stats = matcher.stats();
    println!("Build:");
    println!("  Patterns:          {}", format_number(stats.patterns));
    println!("  States:            {}", format_number(stats.states));
    println!("  Longest pattern:   {} chars", stats.max_pattern_len);
    println!(
        "  Build time:        {:.2}ms",
        build_time.as_secs_f64() * 1000.0
    );
    println!();

    let chars = corpus.chars().count();
    let mut total_hits = 0usize;
    let start = Instant::now();
    for _ in 0..iterations {
        total_hits += matcher.search_indexed(&corpus)?.len();
    }
    let elapsed = start.elapsed();

    let per_iter = elapsed.as_secs_f64() / iterations as f64;
    println!("Search:");
    println!("  Corpus:            {} ({} chars)", format_bytes(corpus.len()), format_number(chars));
    println!("  Iterations:        {}", iterations);
    println!("  Matches per pass:  {}", format_number(total_hits / iterations));
    println!("  Avg time per pass: {:.2}ms", per_iter * 1000.0);
    println!(
        "  Throughput:        {:.2} MB/s",
        if per_iter > 0.0 {
            (corpus.len() as f64 / 1_000_000.0) / per_iter
        } else {
            0.0
        }
    );

    Ok(())
}
