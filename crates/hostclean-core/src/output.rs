//! Writing the cleaned list, one canonical URL per line.

use crate::normalize::CanonicalUrl;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default output filename, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "results.txt";

/// Writes `urls` to `out`, each followed by a newline.
pub fn write_urls<W: Write>(out: &mut W, urls: &[CanonicalUrl]) -> std::io::Result<()> {
    for url in urls {
        writeln!(out, "{url}")?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the cleaned list to it.
pub fn write_url_list(path: &Path, urls: &[CanonicalUrl]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_urls(&mut writer, urls)
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write output file: {}", path.display()))?;
    tracing::info!(path = %path.display(), count = urls.len(), "wrote cleaned URL list");
    Ok(())
}
