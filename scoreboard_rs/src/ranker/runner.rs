use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RankerConfig;
use crate::error::{RankError, Result};
use crate::fs_utils::gather_reports;
use crate::scan::{data_rows, pass_count};
use crate::types::RowBasis;

use super::report::{Ranking, ScoredReport};

/// Scans one scoreboard directory and ranks its reports.
pub struct Ranker {
    config: RankerConfig,
}

/// Row count taken from the first report, kept for the rest of the run.
struct RowReference {
    path: PathBuf,
    rows: i64,
}

impl Ranker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Discover, score and rank every report. The first unreadable report
    /// aborts the run.
    pub fn rank(&self) -> Result<Ranking> {
        let files = gather_reports(&self.config.scoreboard_dir, &self.config.file_extension)?;
        tracing::info!(
            "found {} report(s) in {}",
            files.len(),
            self.config.scoreboard_dir.display()
        );
        let reports = self.score_files(&files)?;
        Ok(Ranking::from_reports(
            reports,
            &self.config.scoreboard_dir,
            &self.config.file_extension,
        ))
    }

    /// Score already-discovered files in the given order.
    pub fn score_files(&self, files: &[PathBuf]) -> Result<Vec<ScoredReport>> {
        let mut reference: Option<RowReference> = None;
        let mut reports = Vec::with_capacity(files.len());

        for path in files {
            let text = read_report(path)?;
            let passes = pass_count(&text);
            let rows = data_rows(&text, self.config.header_row_count);
            tracing::debug!(path = %path.display(), passes, rows, "scored report");
            if rows < 0 {
                tracing::warn!(
                    "{} has fewer <tr> markers than the {} header rows",
                    path.display(),
                    self.config.header_row_count
                );
            }

            let reference = reference.get_or_insert_with(|| RowReference {
                path: path.clone(),
                rows,
            });

            let total_rows = self.resolve_rows(reference, path, rows)?;
            reports.push(ScoredReport {
                path: path.clone(),
                pass_count: passes,
                total_rows,
            });
        }

        Ok(reports)
    }

    fn resolve_rows(&self, reference: &RowReference, path: &Path, rows: i64) -> Result<i64> {
        match self.config.row_basis {
            RowBasis::First => {
                if rows != reference.rows {
                    tracing::warn!(
                        "{} has {} data rows, reusing {} from {}",
                        path.display(),
                        rows,
                        reference.rows,
                        reference.path.display()
                    );
                }
                Ok(reference.rows)
            }
            RowBasis::PerFile => Ok(rows),
            RowBasis::Strict if rows == reference.rows => Ok(rows),
            RowBasis::Strict => Err(RankError::InconsistentRows {
                path: path.to_path_buf(),
                found: rows,
                reference: reference.path.clone(),
                expected: reference.rows,
            }),
        }
    }
}

/// Run with `config` and return the ranking.
pub fn rank_scoreboard(config: RankerConfig) -> Result<Ranking> {
    Ranker::new(config).rank()
}

fn read_report(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RankError::ReadReport {
        path: path.to_path_buf(),
        source,
    })
}
