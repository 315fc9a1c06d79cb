//! Pattern list loading
//!
//! Pattern lists are plain text, one pattern per line. Empty lines and lines
//! starting with `#` are skipped. Only the line terminator is stripped, so
//! patterns may begin or end with whitespace. Files ending in `.gz` are
//! decompressed on the fly.

use crate::error::{MatcherError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Read patterns from any buffered reader
///
/// I/O failures are attributed to `<reader>`; use [`load_patterns`] to get
/// the file path in errors.
pub fn read_patterns<R: BufRead>(reader: R) -> Result<Vec<String>> {
    collect_patterns(reader).map_err(|source| MatcherError::Io {
        path: PathBuf::from("<reader>"),
        source,
    })
}

/// Load patterns from a file, gunzipping `.gz` files
pub fn load_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = open_maybe_gzip(path).map_err(|source| MatcherError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let patterns = collect_patterns(reader).map_err(|source| MatcherError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = patterns.len(), "loaded pattern list");
    Ok(patterns)
}

/// Open a file for buffered reading, transparently decompressing gzip
///
/// Detection is by `.gz` extension.
pub fn open_maybe_gzip(path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    let inner: Box<dyn Read + Send> = if is_gzip {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(Box::new(BufReader::new(inner)))
}

fn collect_patterns<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut patterns = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let entry = line.strip_suffix('\r').unwrap_or(&line);
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        patterns.push(entry.to_string());
    }
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};
    use tempfile::TempDir;

    #[test]
    fn test_read_patterns_skips_blank_and_comments() {
        let input = "# sensitive words\nfoo\n\n bar \r\n#not this\n数字9\n";
        let patterns = read_patterns(Cursor::new(input)).unwrap();
        assert_eq!(patterns, vec!["foo", " bar ", "数字9"]);
    }

    #[test]
    fn test_read_patterns_no_trailing_newline() {
        let patterns = read_patterns(Cursor::new("a\nb")).unwrap();
        assert_eq!(patterns, vec!["a", "b"]);
    }

    #[test]
    fn test_load_plain_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "he\nshe\nhis\nhers\n").unwrap();

        let patterns = load_patterns(&path).unwrap();
        assert_eq!(patterns, vec!["he", "she", "his", "hers"]);
    }

    #[test]
    fn test_load_gzip_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all("国人\n中国人\n新中国\n".as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let patterns = load_patterns(&path).unwrap();
        assert_eq!(patterns, vec!["国人", "中国人", "新中国"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        match load_patterns(&path) {
            Err(MatcherError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
