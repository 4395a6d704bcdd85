//! Terminal color helpers for the human ranking output.

use std::io::IsTerminal;

use crate::types::ColorMode;

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";

/// Determines if colors should be used based on ColorMode and terminal detection.
pub fn is_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled(mode),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Report names - CYAN
    pub fn name(&self, s: &str) -> String {
        self.wrap(s, CYAN)
    }

    /// Pass counts - GREEN
    pub fn score(&self, n: usize) -> String {
        self.wrap(&n.to_string(), GREEN)
    }

    /// Row totals; negative values are flagged in YELLOW.
    pub fn rows(&self, n: i64) -> String {
        if n < 0 {
            self.wrap(&n.to_string(), YELLOW)
        } else {
            self.wrap(&n.to_string(), DIM)
        }
    }

    fn wrap(&self, s: &str, color: &str) -> String {
        if self.enabled {
            format!("{color}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}
