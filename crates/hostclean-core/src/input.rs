//! Reading the URL list file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which part of each input line is taken as the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    /// First whitespace-delimited token; trailing columns are ignored.
    #[default]
    FirstToken,
    /// The whole line, trimmed.
    FullLine,
}

/// Extracts URLs from file contents, skipping lines that are blank after trimming.
pub fn parse_url_list(contents: &str, mode: LineMode) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match mode {
            LineMode::FirstToken => line.split_whitespace().next(),
            LineMode::FullLine => Some(line),
        })
        .map(str::to_string)
        .collect()
}

/// Reads and parses the URL list at `path`.
pub fn read_url_list(path: &Path, mode: LineMode) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read URL list: {}", path.display()))?;
    let urls = parse_url_list(&contents, mode);
    tracing::debug!(path = %path.display(), count = urls.len(), ?mode, "read URL list");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "https://example.com/a 200 OK\n\n   \n  example.org\tfoo\r\nnot a url!!\n";

    #[test]
    fn first_token_mode() {
        assert_eq!(
            parse_url_list(SAMPLE, LineMode::FirstToken),
            ["https://example.com/a", "example.org", "not"]
        );
    }

    #[test]
    fn full_line_mode() {
        assert_eq!(
            parse_url_list(SAMPLE, LineMode::FullLine),
            ["https://example.com/a 200 OK", "example.org\tfoo", "not a url!!"]
        );
    }

    #[test]
    fn blank_only_input_is_empty() {
        assert!(parse_url_list("\n \n\t\n", LineMode::FirstToken).is_empty());
        assert!(parse_url_list("", LineMode::FullLine).is_empty());
    }

    #[test]
    fn read_url_list_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"example.com extra\nhttp://foo.com/x\n").unwrap();
        f.flush().unwrap();
        let urls = read_url_list(f.path(), LineMode::FirstToken).unwrap();
        assert_eq!(urls, ["example.com", "http://foo.com/x"]);
    }

    #[test]
    fn read_url_list_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = read_url_list(&missing, LineMode::FirstToken).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
