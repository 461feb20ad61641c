//! CLI for the hostclean URL list cleaner.

mod commands;

use anyhow::Result;
use clap::Parser;
use hostclean_core::config::{self, HostcleanConfig};
use hostclean_core::dedup::DedupKey;
use hostclean_core::input::LineMode;
use hostclean_core::normalize::PrefixMode;
use hostclean_core::pipeline::CleanStats;
use std::path::PathBuf;

use commands::{run_clean, CleanJob};

/// Printed when no URL list file is given; not an error.
pub const MISSING_LIST_MESSAGE: &str =
    "No URL list file given. Use -L or --url_list_file to choose the URL file.";

/// Reduce a list of URLs to one `scheme://host` entry per distinct host.
#[derive(Debug, Parser)]
#[command(name = "hostclean")]
#[command(about = "URL list cleaner: keep one scheme://host per distinct host", long_about = None)]
pub struct Cli {
    /// Path to the file containing URLs to be cleaned.
    #[arg(short = 'L', long = "url_list_file", value_name = "PATH")]
    pub url_list_file: Option<PathBuf>,

    /// Write results here instead of the configured output file (default results.txt).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Take the whole trimmed line as the URL instead of its first token.
    #[arg(long)]
    pub full_line: bool,

    /// Always prefix `http://www.` after stripping the scheme.
    #[arg(long)]
    pub legacy_www: bool,

    /// Drop entries whose host is not a plausible domain, IP or localhost.
    #[arg(long)]
    pub strict: bool,

    /// Only keep hosts under these domains (repeatable or comma-separated).
    #[arg(long, value_name = "DOMAIN", value_delimiter = ',')]
    pub include: Vec<String>,

    /// Drop hosts under these domains (repeatable or comma-separated).
    #[arg(long, value_name = "DOMAIN", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Treat hosts sharing a root domain (api.example.com, example.com) as duplicates.
    #[arg(long)]
    pub root_domain: bool,

    /// Print run statistics as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// What a run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No `-L` given; nothing was read or written.
    MissingList,
    Cleaned { output: PathBuf, stats: CleanStats },
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, mut cfg: HostcleanConfig) -> HostcleanConfig {
        if let Some(output) = &self.output {
            cfg.output_file = output.clone();
        }
        if self.full_line {
            cfg.line_mode = LineMode::FullLine;
        }
        if self.legacy_www {
            cfg.prefix_mode = PrefixMode::Legacy;
        }
        if self.strict {
            cfg.strict_hosts = true;
        }
        if !self.include.is_empty() {
            cfg.include_domains = self.include.clone();
        }
        if !self.exclude.is_empty() {
            cfg.exclude_domains = self.exclude.clone();
        }
        if self.root_domain {
            cfg.dedup_by = DedupKey::RootDomain;
        }
        cfg
    }

    pub fn run_from_args() -> Result<()> {
        Cli::parse().run(config::load_or_init)?;
        Ok(())
    }

    /// Runs the parsed command. `load_config` is only called once an input list is known.
    pub fn run<F>(self, load_config: F) -> Result<RunOutcome>
    where
        F: FnOnce() -> Result<HostcleanConfig>,
    {
        let Some(input) = self.url_list_file.clone() else {
            println!("{MISSING_LIST_MESSAGE}");
            return Ok(RunOutcome::MissingList);
        };

        let cfg = self.apply_overrides(load_config()?);
        tracing::debug!("effective config: {:?}", cfg);

        let job = CleanJob {
            input,
            output: cfg.output_file.clone(),
            line_mode: cfg.line_mode,
            options: cfg.clean_options(),
        };
        let stats = run_clean(&job)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        println!("Results saved to {}", job.output.display());

        Ok(RunOutcome::Cleaned {
            output: job.output,
            stats,
        })
    }
}

#[cfg(test)]
mod tests;
