use crate::dedup::DedupKey;
use crate::domain_filter::DomainFilter;
use crate::input::LineMode;
use crate::normalize::PrefixMode;
use crate::output::DEFAULT_OUTPUT_FILE;
use crate::pipeline::CleanOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/hostclean/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostcleanConfig {
    /// Where the cleaned list is written, relative to the working directory unless absolute.
    pub output_file: PathBuf,
    /// Which part of each input line is the URL: "first_token" (default) or "full_line".
    #[serde(default)]
    pub line_mode: LineMode,
    /// "canonical" (default) or "legacy" (always prefix `http://www.`).
    #[serde(default)]
    pub prefix_mode: PrefixMode,
    /// Drop entries whose host fails validation.
    #[serde(default)]
    pub strict_hosts: bool,
    /// Only keep hosts under these domains (empty = keep all).
    #[serde(default)]
    pub include_domains: Vec<String>,
    /// Drop hosts under these domains.
    #[serde(default)]
    pub exclude_domains: Vec<String>,
    /// "netloc" (default) or "root_domain".
    #[serde(default)]
    pub dedup_by: DedupKey,
}

impl Default for HostcleanConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            line_mode: LineMode::default(),
            prefix_mode: PrefixMode::default(),
            strict_hosts: false,
            include_domains: Vec::new(),
            exclude_domains: Vec::new(),
            dedup_by: DedupKey::default(),
        }
    }
}

impl HostcleanConfig {
    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            prefix_mode: self.prefix_mode,
            strict_hosts: self.strict_hosts,
            filter: DomainFilter::new(&self.include_domains, &self.exclude_domains),
            dedup_key: self.dedup_by,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hostclean")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, creating it with defaults if it does not exist.
pub fn load_or_init_at(path: &Path) -> Result<HostcleanConfig> {
    if !path.exists() {
        let default_cfg = HostcleanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: HostcleanConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HostcleanConfig> {
    load_or_init_at(&config_path()?)
}
