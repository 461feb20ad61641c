//! `hostclean -L <file>`: read, clean and write the URL list.

use anyhow::Result;
use hostclean_core::input::{read_url_list, LineMode};
use hostclean_core::output::write_url_list;
use hostclean_core::pipeline::{clean_urls, CleanOptions, CleanStats};
use std::path::PathBuf;

/// Everything a single run needs, resolved from config and flags.
#[derive(Debug, Clone)]
pub struct CleanJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub line_mode: LineMode,
    pub options: CleanOptions,
}

pub fn run_clean(job: &CleanJob) -> Result<CleanStats> {
    let raw = read_url_list(&job.input, job.line_mode)?;
    let report = clean_urls(&raw, &job.options);
    write_url_list(&job.output, &report.urls)?;
    tracing::info!(
        input = %job.input.display(),
        output = %job.output.display(),
        unique = report.stats.unique,
        "clean finished"
    );
    Ok(report.stats)
}
