//! User-facing progress lines on stderr.

use std::fmt::Display;

/// Width of the banner rules printed around build steps.
const RULE_WIDTH: usize = 60;

/// Writes progress lines to stderr unless quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Progress {
    quiet: bool,
}

impl Progress {
    /// Create a reporter; a quiet reporter prints nothing.
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print one line.
    pub fn line(self, message: impl Display) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print a completed-file line (`✓ Generated guide.json`).
    pub fn done(self, message: impl Display) {
        self.line(format_args!("✓ {message}"));
    }

    /// Print a failed-file line. Failures print even when quiet.
    pub fn failed(self, message: impl Display) {
        eprintln!("✗ {message}");
    }

    /// Print a rule of `ch`.
    pub fn rule(self, ch: char) {
        self.line(ch.to_string().repeat(RULE_WIDTH));
    }

    /// Print a step heading followed by a thin rule.
    pub fn heading(self, title: impl Display) {
        self.line(title);
        self.rule('-');
    }
}
