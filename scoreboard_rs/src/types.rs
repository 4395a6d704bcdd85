use serde::{Deserialize, Serialize};

pub const DEFAULT_SCOREBOARD_DIR: &str = "scoreboard/";
pub const DEFAULT_FILE_EXTENSION: &str = "html";
pub const DEFAULT_HEADER_ROW_COUNT: i64 = 6;

/// Literal substring counted as one passing result.
pub const PASS_MARKER: &str = "Pass";
/// Literal substring counted as one table row.
pub const ROW_MARKER: &str = "<tr>";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
    Jsonl,
}

/// Where the `total_rows` denominator of each ranking line comes from.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum RowBasis {
    /// Counted once from the first discovered report and reused for all others.
    #[default]
    First,
    /// Counted separately for every report.
    PerFile,
    /// Counted for every report; any disagreement with the first aborts the run.
    Strict,
}

impl std::fmt::Display for RowBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RowBasis::First => "first",
            RowBasis::PerFile => "per-file",
            RowBasis::Strict => "strict",
        };
        f.write_str(name)
    }
}
