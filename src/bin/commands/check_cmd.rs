use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli_utils::build_matcher;

pub fn cmd_check(patterns: PathBuf, text: String, quiet: bool) -> Result<()> {
    let (matcher, _) = build_matcher(&patterns)?;

    let matches = matcher
        .search(&text)
        .with_context(|| format!("Search failed for: {}", text))?;
    let found = !matches.is_empty();

    if quiet {
        // Quiet mode: no output, just exit code
        std::process::exit(if found { 0 } else { 1 });
    }

    // Always print an array, empty when nothing matched
    println!("{}", serde_json::to_string_pretty(&matches)?);

    std::process::exit(if found { 0 } else { 1 });
}
