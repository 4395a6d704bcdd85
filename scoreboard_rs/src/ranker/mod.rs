//! Report discovery, scoring and ranking.

pub mod report;
pub mod runner;

pub use report::{RankEntry, Ranking, ScoredReport, display_name};
pub use runner::{Ranker, rank_scoreboard};
