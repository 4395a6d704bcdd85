//! Ranking configuration.
//!
//! Defaults can be overridden by an optional `scoreboard.toml` and then by
//! command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{RankError, Result};
use crate::types::{
    DEFAULT_FILE_EXTENSION, DEFAULT_HEADER_ROW_COUNT, DEFAULT_SCOREBOARD_DIR, RowBasis,
};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "scoreboard.toml";

/// Everything the ranker needs to know about one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankerConfig {
    /// Directory scanned for reports (not recursed into).
    pub scoreboard_dir: PathBuf,
    /// Extension without the leading dot, e.g. `html`.
    pub file_extension: String,
    /// Subtracted from the raw `<tr>` count to get data rows.
    pub header_row_count: i64,
    pub row_basis: RowBasis,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            scoreboard_dir: PathBuf::from(DEFAULT_SCOREBOARD_DIR),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            header_row_count: DEFAULT_HEADER_ROW_COUNT,
            row_basis: RowBasis::First,
        }
    }
}

impl RankerConfig {
    pub fn new(scoreboard_dir: impl Into<PathBuf>, file_extension: &str) -> Self {
        Self {
            scoreboard_dir: scoreboard_dir.into(),
            file_extension: normalise_extension(file_extension),
            ..Self::default()
        }
    }

    pub fn with_header_row_count(mut self, header_row_count: i64) -> Self {
        self.header_row_count = header_row_count;
        self
    }

    pub fn with_row_basis(mut self, row_basis: RowBasis) -> Self {
        self.row_basis = row_basis;
        self
    }

    /// Overlay the values present in a config file.
    pub fn apply_file(&mut self, file: &FileConfig) {
        if let Some(dir) = &file.scoreboard_dir {
            self.scoreboard_dir = dir.clone();
        }
        if let Some(ext) = &file.file_extension {
            self.file_extension = normalise_extension(ext);
        }
        if let Some(rows) = file.header_row_count {
            self.header_row_count = rows;
        }
        if let Some(basis) = file.row_basis {
            self.row_basis = basis;
        }
    }
}

/// On-disk shape of `scoreboard.toml`. Every key is optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub scoreboard_dir: Option<PathBuf>,
    pub file_extension: Option<String>,
    pub header_row_count: Option<i64>,
    pub row_basis: Option<RowBasis>,
}

impl FileConfig {
    /// Load `scoreboard.toml` from `dir`. A missing file yields the empty config.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no {} in {}", DEFAULT_CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::read(&path)
    }

    /// Load a specific file. Unlike [`FileConfig::load`], the file must exist,
    /// and a relative `scoreboard_dir` is taken relative to the file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = Self::read(path)?;
        if let Some(base) = path.parent().filter(|base| !base.as_os_str().is_empty()) {
            config.scoreboard_dir = config
                .scoreboard_dir
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir });
        }
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RankError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| RankError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Accept `html`, `.html` and ` .html ` alike.
pub fn normalise_extension(raw: &str) -> String {
    raw.trim().trim_start_matches('.').to_string()
}
