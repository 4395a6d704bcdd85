//! Rendering a [`Ranking`] to text, JSON or JSON Lines.

use std::io::Write;

use crate::colors::Painter;
use crate::error::Result;
use crate::ranker::{RankEntry, Ranking};
use crate::types::OutputMode;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub mode: OutputMode,
    /// Append ` / <total_rows>` to human lines.
    pub show_total: bool,
    pub painter: Painter,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Human,
            show_total: true,
            painter: Painter::plain(),
        }
    }
}

/// `"<name> <pass_count> / <total_rows>"`, or `"<name> <pass_count>"` without totals.
pub fn format_line(entry: &RankEntry, show_total: bool, painter: &Painter) -> String {
    let head = format!(
        "{} {}",
        painter.name(&entry.name),
        painter.score(entry.pass_count)
    );
    if show_total {
        format!("{head} / {}", painter.rows(entry.total_rows))
    } else {
        head
    }
}

pub fn write_ranking<W: Write>(out: &mut W, ranking: &Ranking, opts: &RenderOptions) -> Result<()> {
    match opts.mode {
        OutputMode::Human => {
            for entry in &ranking.entries {
                writeln!(out, "{}", format_line(entry, opts.show_total, &opts.painter))?;
            }
        }
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, ranking)?;
            writeln!(out)?;
        }
        OutputMode::Jsonl => {
            for entry in &ranking.entries {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, pass_count: usize, total_rows: i64) -> RankEntry {
        RankEntry {
            name: name.to_string(),
            path: format!("scoreboard/{name}.html"),
            pass_count,
            total_rows,
        }
    }

    fn render(ranking: &Ranking, opts: &RenderOptions) -> String {
        let mut buf = Vec::new();
        write_ranking(&mut buf, ranking, opts).expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    fn sample() -> Ranking {
        Ranking {
            entries: vec![entry("bob", 5, 12), entry("alice", 3, 12)],
        }
    }

    #[test]
    fn human_lines_include_total() {
        let text = render(&sample(), &RenderOptions::default());
        assert_eq!(text, "bob 5 / 12\nalice 3 / 12\n");
    }

    #[test]
    fn human_lines_without_total() {
        let opts = RenderOptions {
            show_total: false,
            ..RenderOptions::default()
        };
        let text = render(&sample(), &opts);
        assert_eq!(text, "bob 5\nalice 3\n");
    }

    #[test]
    fn empty_ranking_prints_nothing() {
        let text = render(&Ranking::default(), &RenderOptions::default());
        assert!(text.is_empty());
    }

    #[test]
    fn json_is_an_array_of_entries() {
        let opts = RenderOptions {
            mode: OutputMode::Json,
            ..RenderOptions::default()
        };
        let value: serde_json::Value =
            serde_json::from_str(&render(&sample(), &opts)).expect("valid json");
        let items = value.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "bob");
        assert_eq!(items[0]["pass_count"], 5);
        assert_eq!(items[1]["total_rows"], 12);
    }

    #[test]
    fn jsonl_is_one_object_per_line() {
        let opts = RenderOptions {
            mode: OutputMode::Jsonl,
            ..RenderOptions::default()
        };
        let text = render(&sample(), &opts);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).expect("json line");
        assert_eq!(first["path"], "scoreboard/bob.html");
    }
}
