use std::path::{Path, PathBuf};

use serde::Serialize;

/// One scored report, before ranking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredReport {
    pub path: PathBuf,
    pub pass_count: usize,
    pub total_rows: i64,
}

/// One line of the ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub name: String,
    pub path: String,
    pub pass_count: usize,
    pub total_rows: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    pub entries: Vec<RankEntry>,
}

impl Ranking {
    /// Order reports by pass count, highest first. Ties keep discovery order.
    pub fn from_reports(mut reports: Vec<ScoredReport>, dir: &Path, extension: &str) -> Self {
        reports.sort_by(|a, b| b.pass_count.cmp(&a.pass_count));

        let entries = reports
            .into_iter()
            .map(|report| RankEntry {
                name: display_name(&report.path, dir, extension),
                path: report.path.display().to_string(),
                pass_count: report.pass_count,
                total_rows: report.total_rows,
            })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Strip the scanned directory and the `.<ext>` suffix, once each.
///
/// Only a leading directory and a trailing extension are removed, so
/// `scoreboard/scoreboard/a.html` under `scoreboard/` becomes `scoreboard/a`.
pub fn display_name(path: &Path, dir: &Path, extension: &str) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    let relative = relative.to_string_lossy();
    let suffix = format!(".{extension}");
    relative
        .strip_suffix(suffix.as_str())
        .unwrap_or(&relative)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(path: &str, pass_count: usize) -> ScoredReport {
        ScoredReport {
            path: PathBuf::from(path),
            pass_count,
            total_rows: 10,
        }
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let ranking = Ranking::from_reports(
            vec![scored("a.html", 3), scored("b.html", 5), scored("c.html", 5)],
            Path::new(""),
            "html",
        );
        let order: Vec<(&str, usize)> = ranking
            .entries
            .iter()
            .map(|e| (e.name.as_str(), e.pass_count))
            .collect();
        assert_eq!(order, vec![("b", 5), ("c", 5), ("a", 3)]);
    }

    #[test]
    fn empty_input_gives_empty_ranking() {
        let ranking = Ranking::from_reports(Vec::new(), Path::new("scoreboard/"), "html");
        assert!(ranking.is_empty());
        assert_eq!(ranking.len(), 0);
    }

    #[test]
    fn display_name_strips_known_prefix_and_suffix() {
        let name = display_name(
            Path::new("scoreboard/alice.html"),
            Path::new("scoreboard/"),
            "html",
        );
        assert_eq!(name, "alice");
    }

    #[test]
    fn display_name_strips_prefix_only_once() {
        let name = display_name(
            Path::new("scoreboard/scoreboard/a.html"),
            Path::new("scoreboard/"),
            "html",
        );
        assert_eq!(name, "scoreboard/a");
    }

    #[test]
    fn display_name_keeps_inner_extension_text() {
        let name = display_name(
            Path::new("scoreboard/a.html.html"),
            Path::new("scoreboard"),
            "html",
        );
        assert_eq!(name, "a.html");

        let name = display_name(
            Path::new("scoreboard/html-team.html"),
            Path::new("scoreboard"),
            "html",
        );
        assert_eq!(name, "html-team");
    }

    #[test]
    fn display_name_leaves_foreign_paths_alone() {
        let name = display_name(Path::new("other/x.html"), Path::new("scoreboard/"), "html");
        assert_eq!(name, "other/x");
    }
}
