use acmatch::{wordlist, Matcher};
use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::path::Path;
use std::time::{Duration, Instant};

/// Load a pattern list and build a matcher from it.
///
/// Returns the matcher and the time spent building the automaton.
pub fn build_matcher(patterns: &Path) -> Result<(Matcher, Duration)> {
    let words = wordlist::load_patterns(patterns)
        .with_context(|| format!("Failed to load patterns: {}", patterns.display()))?;

    let start = Instant::now();
    let matcher = Matcher::from_patterns(&words)
        .with_context(|| format!("Invalid pattern list: {}", patterns.display()))?;
    let elapsed = start.elapsed();

    tracing::info!(
        patterns = matcher.pattern_count(),
        states = matcher.state_count(),
        build_ms = elapsed.as_millis() as u64,
        "matcher built"
    );
    Ok((matcher, elapsed))
}

/// Open an input for line reading; "-" means stdin
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::BufReader::new(io::stdin())));
    }
    wordlist::open_maybe_gzip(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))
}

pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

pub fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }
}
