//! # scoreboard
//!
//! Ranks a directory of HTML test-report scoreboards by how many `Pass`
//! markers each report contains.
//!
//! Reports are never parsed as HTML. A report's score is the number of
//! literal `Pass` substrings in its text, and the row total printed next to
//! it is the number of `<tr>` substrings minus a fixed header offset.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use scoreboard::{RankerConfig, rank_scoreboard};
//!
//! let config = RankerConfig::new("scoreboard/", "html");
//! let ranking = rank_scoreboard(config).unwrap();
//! for entry in &ranking.entries {
//!     println!("{} {} / {}", entry.name, entry.pass_count, entry.total_rows);
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! scoreboard                       # rank scoreboard/*.html
//! scoreboard results --ext htm     # rank results/*.htm
//! scoreboard --rows per-file       # count rows for every report
//! scoreboard --json                # machine-readable output
//! ```

/// Command-line argument parsing and config layering.
pub mod args;

/// Color helpers for human output.
pub mod colors;

/// [`RankerConfig`] and the optional `scoreboard.toml`.
pub mod config;

/// Error type shared by the library.
pub mod error;

/// Report discovery.
pub mod fs_utils;

/// Rendering rankings as text, JSON or JSON Lines.
pub mod output;

/// Scoring and ranking of reports.
///
/// - [`ranker::Ranker`] - Scans a directory and builds a [`Ranking`]
/// - [`ranker::report`] - Ranking data types and display names
pub mod ranker;

/// Literal marker counting.
pub mod scan;

/// Shared enums and constants.
pub mod types;

pub use config::RankerConfig;
pub use error::RankError;
pub use output::{RenderOptions, write_ranking};
pub use ranker::{RankEntry, Ranker, Ranking, rank_scoreboard};
pub use scan::count_occurrences;
pub use types::{ColorMode, OutputMode, RowBasis};
