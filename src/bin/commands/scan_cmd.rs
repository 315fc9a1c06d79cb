use acmatch::{Hit, Matcher};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::borrow::Cow;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::cli_utils::{build_matcher, format_bytes, format_number, open_input};

/// Lines handed to the worker pool at a time
const BATCH_LINES: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Csv,
    Text,
}

impl OutputFormat {
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "text" => Ok(Self::Text),
            _ => anyhow::bail!("Invalid format '{}', expected: json, csv, or text", s),
        }
    }
}

#[derive(Serialize)]
struct MatchRecord<'a> {
    input: &'a str,
    line: usize,
    #[serde(rename = "match")]
    matched: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    len: Option<usize>,
}

#[derive(Default)]
struct ScanStats {
    lines_processed: usize,
    lines_matched: usize,
    matches_found: usize,
    bytes_processed: usize,
}

enum Sink {
    Plain(BufWriter<io::Stdout>),
    Csv(csv::Writer<io::Stdout>),
}

struct Emitter {
    format: OutputFormat,
    offsets: bool,
    sink: Sink,
}

impl Emitter {
    fn new(format: OutputFormat, offsets: bool) -> Result<Self> {
        let sink = match format {
            OutputFormat::Csv => {
                let mut w = csv::Writer::from_writer(io::stdout());
                if offsets {
                    w.write_record(["input", "line", "match", "start", "len"])?;
                } else {
                    w.write_record(["input", "line", "match"])?;
                }
                Sink::Csv(w)
            }
            OutputFormat::Json | OutputFormat::Text => Sink::Plain(BufWriter::new(io::stdout())),
        };
        Ok(Self {
            format,
            offsets,
            sink,
        })
    }

    fn emit(&mut self, input: &str, line: usize, matched: &str, hit: Hit) -> Result<()> {
        match (&mut self.sink, self.format) {
            (Sink::Csv(w), _) => {
                let line = line.to_string();
                if self.offsets {
                    let start = hit.start.to_string();
                    let len = hit.len.to_string();
                    w.write_record([input, line.as_str(), matched, start.as_str(), len.as_str()])?;
                } else {
                    w.write_record([input, line.as_str(), matched])?;
                }
            }
            (Sink::Plain(w), OutputFormat::Json) => {
                let record = MatchRecord {
                    input,
                    line,
                    matched,
                    start: self.offsets.then_some(hit.start),
                    len: self.offsets.then_some(hit.len),
                };
                serde_json::to_writer(&mut *w, &record)?;
                writeln!(w)?;
            }
            (Sink::Plain(w), _) => {
                if self.offsets {
                    writeln!(w, "{}:{}:{}+{}:{}", input, line, hit.start, hit.len, matched)?;
                } else {
                    writeln!(w, "{}:{}:{}", input, line, matched)?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Plain(w) => w.flush()?,
            Sink::Csv(w) => w.flush()?,
        }
        Ok(())
    }
}

pub fn cmd_scan(
    patterns: PathBuf,
    inputs: Vec<PathBuf>,
    format: String,
    offsets: bool,
    threads: usize,
    show_stats: bool,
) -> Result<()> {
    let output_format = OutputFormat::from_str(&format)?;
    let (matcher, build_time) = build_matcher(&patterns)?;

    let pool = if threads == 1 {
        None
    } else {
        Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to create worker thread pool")?,
        )
    };

    if show_stats {
        eprintln!(
            "[INFO] Loaded {} patterns ({} states) in {:.2}ms",
            format_number(matcher.pattern_count()),
            format_number(matcher.state_count()),
            build_time.as_secs_f64() * 1000.0
        );
        eprintln!(
            "[INFO] Worker threads: {}",
            pool.as_ref().map_or(1, |p| p.current_num_threads())
        );
    }

    let start_time = Instant::now();
    let mut stats = ScanStats::default();
    let mut emitter = Emitter::new(output_format, offsets)?;

    for input in &inputs {
        let reader = open_input(input)?;
        scan_input(
            &matcher,
            &input.display().to_string(),
            reader,
            pool.as_ref(),
            &mut emitter,
            &mut stats,
        )
        .with_context(|| format!("Failed to scan input: {}", input.display()))?;
    }

    emitter.finish()?;

    if show_stats {
        let elapsed = start_time.elapsed();
        eprintln!();
        eprintln!("[INFO] === Scan Complete ===");
        eprintln!(
            "[INFO] Lines processed: {}",
            format_number(stats.lines_processed)
        );
        eprintln!(
            "[INFO] Lines matched: {}",
            format_number(stats.lines_matched)
        );
        eprintln!(
            "[INFO] Matches found: {}",
            format_number(stats.matches_found)
        );
        eprintln!(
            "[INFO] Bytes scanned: {}",
            format_bytes(stats.bytes_processed)
        );
        eprintln!(
            "[INFO] Throughput: {:.2} MB/s",
            if elapsed.as_secs_f64() > 0.0 {
                (stats.bytes_processed as f64 / 1_000_000.0) / elapsed.as_secs_f64()
            } else {
                0.0
            }
        );
        eprintln!("[INFO] Total time: {:.2}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn scan_input(
    matcher: &Matcher,
    name: &str,
    mut reader: Box<dyn BufRead + Send>,
    pool: Option<&rayon::ThreadPool>,
    emitter: &mut Emitter,
    stats: &mut ScanStats,
) -> Result<()> {
    let mut batch: Vec<String> = Vec::with_capacity(BATCH_LINES);
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        batch.clear();
        while batch.len() < BATCH_LINES {
            buf.clear();
            let n = reader.read_until(b'\n', &mut buf)?;
            if n == 0 {
                break;
            }
            stats.bytes_processed += n;
            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                tracing::debug!(
                    input = name,
                    line = line_no + batch.len() + 1,
                    "invalid UTF-8 replaced with U+FFFD; offsets refer to the replaced text"
                );
            }
            batch.push(line.trim_end_matches(['\n', '\r']).to_string());
        }
        if batch.is_empty() {
            break;
        }

        let results = scan_batch(matcher, &batch, pool)?;

        for (text, hits) in batch.iter().zip(results) {
            line_no += 1;
            stats.lines_processed += 1;
            if hits.is_empty() {
                continue;
            }
            stats.lines_matched += 1;
            stats.matches_found += hits.len();

            let chars: Vec<char> = text.chars().collect();
            for hit in hits {
                if let Some(matched) = hit.extract(&chars) {
                    emitter.emit(name, line_no, &matched, hit)?;
                }
            }
        }
    }

    tracing::debug!(input = name, lines = line_no, "input scanned");
    Ok(())
}

// Output order follows input order regardless of how the pool schedules lines.
fn scan_batch(
    matcher: &Matcher,
    lines: &[String],
    pool: Option<&rayon::ThreadPool>,
) -> acmatch::Result<Vec<Vec<Hit>>> {
    match pool {
        Some(pool) => pool.install(|| {
            lines
                .par_iter()
                .map(|line| matcher.search_indexed(line))
                .collect()
        }),
        None => lines
            .iter()
            .map(|line| matcher.search_indexed(line))
            .collect(),
    }
}
