use std::path::PathBuf;

use clap::Parser;

use crate::colors::Painter;
use crate::config::{FileConfig, RankerConfig, normalise_extension};
use crate::error::Result;
use crate::output::RenderOptions;
use crate::types::{ColorMode, OutputMode, RowBasis};

/// Rank HTML test-report scoreboards by their Pass count.
///
/// Every `<DIR>/*.<EXT>` report is scored by the number of literal `Pass`
/// markers it contains and printed as `<name> <passes> / <rows>`, best first.
#[derive(Parser, Debug, Default)]
#[command(name = "scoreboard", author, version, about, long_about = None)]
pub struct ParsedArgs {
    /// Directory holding the reports [default: scoreboard/]
    pub dir: Option<PathBuf>,

    /// Report file extension, with or without the leading dot [default: html]
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extension: Option<String>,

    /// Header rows subtracted from the raw <tr> count [default: 6]
    #[arg(long = "header-rows", value_name = "N", allow_negative_numbers = true)]
    pub header_rows: Option<i64>,

    /// How the row total is derived [default: first]
    #[arg(long = "rows", value_enum, value_name = "BASIS")]
    pub row_basis: Option<RowBasis>,

    /// Config file (defaults to ./scoreboard.toml when present); its
    /// scoreboard_dir is relative to the file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the ranking as a JSON array
    #[arg(long, conflicts_with = "jsonl")]
    pub json: bool,

    /// Print one JSON object per line
    #[arg(long)]
    pub jsonl: bool,

    /// Print only `<name> <passes>`, without the row total
    #[arg(long)]
    pub no_total: bool,

    /// Colorize human output
    #[arg(long, value_enum, value_name = "MODE", default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl ParsedArgs {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.jsonl {
            OutputMode::Jsonl
        } else {
            OutputMode::Human
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            mode: self.output_mode(),
            show_total: !self.no_total,
            painter: Painter::new(self.color),
        }
    }

    /// Defaults, then the config file, then explicit flags.
    pub fn ranker_config(&self) -> Result<RankerConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::load_from_path(path)?,
            None => FileConfig::load(&std::env::current_dir().unwrap_or_else(|_| ".".into()))?,
        };

        let mut config = RankerConfig::default();
        config.apply_file(&file);

        if let Some(dir) = &self.dir {
            config.scoreboard_dir = dir.clone();
        }
        if let Some(ext) = &self.extension {
            config.file_extension = normalise_extension(ext);
        }
        if let Some(rows) = self.header_rows {
            config.header_row_count = rows;
        }
        if let Some(basis) = self.row_basis {
            config.row_basis = basis;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ParsedArgs {
        ParsedArgs::try_parse_from(std::iter::once("scoreboard").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn defaults_are_human_with_total() {
        let args = parse(&[]);
        assert_eq!(args.output_mode(), OutputMode::Human);
        assert!(!args.no_total);
        assert!(args.dir.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn flags_override_config_file() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let config_path = tmp.path().join("custom.toml");
        std::fs::write(
            &config_path,
            "scoreboard_dir = \"from-file\"\nfile_extension = \"htm\"\nheader_row_count = 3\n",
        )
        .expect("write config");

        let args = parse(&[
            "results",
            "--config",
            config_path.to_str().expect("utf8 path"),
            "--header-rows",
            "1",
            "--rows",
            "strict",
        ]);
        let config = args.ranker_config().expect("config");

        assert_eq!(config.scoreboard_dir, PathBuf::from("results"));
        assert_eq!(config.file_extension, "htm");
        assert_eq!(config.header_row_count, 1);
        assert_eq!(config.row_basis, RowBasis::Strict);
    }

    #[test]
    fn extension_flag_accepts_leading_dot() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let config_path = tmp.path().join("empty.toml");
        std::fs::write(&config_path, "").expect("write config");

        let args = parse(&[
            "--ext",
            ".txt",
            "--config",
            config_path.to_str().expect("utf8 path"),
        ]);
        let config = args.ranker_config().expect("config");
        assert_eq!(config.file_extension, "txt");
        assert_eq!(config.scoreboard_dir, PathBuf::from("scoreboard/"));
    }

    #[test]
    fn json_and_jsonl_conflict() {
        let result = ParsedArgs::try_parse_from(["scoreboard", "--json", "--jsonl"]);
        assert!(result.is_err());
    }

    #[test]
    fn row_basis_values() {
        assert_eq!(parse(&["--rows", "per-file"]).row_basis, Some(RowBasis::PerFile));
        assert_eq!(parse(&["--rows", "first"]).row_basis, Some(RowBasis::First));
        assert!(ParsedArgs::try_parse_from(["scoreboard", "--rows", "last"]).is_err());
    }

    #[test]
    fn no_total_drops_denominator() {
        let opts = parse(&["--no-total", "--color", "never"]).render_options();
        assert!(!opts.show_total);
        assert!(!opts.painter.enabled());
    }
}
