//! Terminal rendering for the REPL and the log-probability table
//!
//! All functions here are pure: they build strings and never touch the cipher
//! or the N-gram counts. Color is applied through [`colorize`] and can be
//! switched off entirely, in which case output is plain text.

use crate::cipher::CipherPair;
use crate::config::DisplayConfig;
use crate::ngram::NgramLogProbs;
use crossterm::style::{Attribute, Color, ContentStyle};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Width of each column in the export table
const EXPORT_COLUMN_WIDTH: usize = 6;

/// Width of the `Puzzle`/`Solution` row labels
const LABEL_WIDTH: usize = 10;

/// A color or text attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Header,
    Blue,
    Green,
    Red,
    Bold,
    Underline,
}

/// Wrap `text` in the escape sequences for `styles`
///
/// Escape codes are produced by crossterm, which honours `NO_COLOR`.
pub fn colorize(text: &str, styles: &[Style]) -> String {
    let mut content_style = ContentStyle::new();
    for style in styles {
        match style {
            Style::Header => content_style.foreground_color = Some(Color::Magenta),
            Style::Blue => content_style.foreground_color = Some(Color::Blue),
            Style::Green => content_style.foreground_color = Some(Color::Green),
            Style::Red => content_style.foreground_color = Some(Color::Red),
            Style::Bold => content_style.attributes.set(Attribute::Bold),
            Style::Underline => content_style.attributes.set(Attribute::Underlined),
        }
    }
    content_style.apply(text).to_string()
}

/// Split `text` into alternating runs of whitespace and non-whitespace
fn runs(text: &str) -> Vec<(bool, Vec<char>)> {
    let mut runs: Vec<(bool, Vec<char>)> = Vec::new();
    for c in text.chars() {
        let is_space = c.is_whitespace();
        match runs.last_mut() {
            Some((space, run)) if *space == is_space => run.push(c),
            _ => runs.push((is_space, vec![c])),
        }
    }
    runs
}

/// Greedy word wrap on whitespace
///
/// Spacing inside a line is kept (each whitespace character becomes one
/// space); whitespace at a line break is dropped, and words longer than
/// `width` are split. Two texts with the same whitespace layout wrap
/// identically, which keeps a puzzle and its deciphered form aligned line by
/// line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut gap = 0;

    for (is_space, run) in runs(text) {
        if is_space {
            gap += run.len();
            continue;
        }
        for chunk in run.chunks(width) {
            if current_len > 0 && current_len + gap + chunk.len() > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.extend(std::iter::repeat(' ').take(gap));
                current_len += gap;
            }
            current.extend(chunk);
            current_len += chunk.len();
            gap = 0;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Renders REPL output according to the display settings
#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    wrap_width: usize,
}

impl Renderer {
    pub fn new(color: bool, wrap_width: usize) -> Self {
        Self { color, wrap_width }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.color, config.wrap_width)
    }

    /// Plain renderer, used by tests and `--no-color`
    pub fn plain(wrap_width: usize) -> Self {
        Self::new(false, wrap_width)
    }

    fn paint(&self, text: &str, styles: &[Style]) -> String {
        if self.color {
            colorize(text, styles)
        } else {
            text.to_string()
        }
    }

    /// Command prompt shown before each read
    pub fn prompt(&self) -> String {
        format!(
            "Enter a command ({}, {}, or {}) ",
            self.paint("substitute", &[Style::Green]),
            self.paint("revert", &[Style::Red]),
            self.paint("export", &[Style::Blue]),
        )
    }

    /// Puzzle and current solution, wrapped, with substituted letters highlighted
    pub fn board(&self, puzzle: &str, solution: &str) -> String {
        let puzzle_label = self.paint(
            &format!("{:<width$}", "Puzzle", width = LABEL_WIDTH),
            &[Style::Red, Style::Bold],
        );
        let solution_label = self.paint(
            &format!("{:<width$}", "Solution", width = LABEL_WIDTH),
            &[Style::Header, Style::Bold],
        );

        let mut out = String::new();
        let puzzle_lines = wrap(puzzle, self.wrap_width);
        let solution_lines = wrap(solution, self.wrap_width);

        for (puzzle_line, solution_line) in puzzle_lines.iter().zip(&solution_lines) {
            let highlighted: String = puzzle_line
                .chars()
                .zip(solution_line.chars())
                .map(|(p, s)| {
                    if p == s {
                        s.to_string()
                    } else {
                        self.paint(&s.to_string(), &[Style::Underline, Style::Green])
                    }
                })
                .collect();

            out.push_str(&format!("{}: {}\n", puzzle_label, puzzle_line));
            out.push_str(&format!("{}: {}\n", solution_label, highlighted));
        }
        out
    }

    /// `Source --> Target` table; changed pairs are highlighted
    pub fn export_table(&self, pairs: &[CipherPair]) -> String {
        let mut out = format!(
            "{} --> {}\n",
            self.paint("Source", &[Style::Bold, Style::Underline]),
            self.paint("Target", &[Style::Bold, Style::Underline]),
        );

        for pair in pairs {
            let source = format!("{:^width$}", pair.source, width = EXPORT_COLUMN_WIDTH);
            let target = format!("{:^width$}", pair.target, width = EXPORT_COLUMN_WIDTH);
            if pair.is_changed() {
                out.push_str(&format!(
                    "{} --> {}\n",
                    self.paint(&source, &[Style::Bold, Style::Red]),
                    self.paint(&target, &[Style::Bold, Style::Blue]),
                ));
            } else {
                out.push_str(&format!("{} --> {}\n", source, target));
            }
        }
        out
    }

    /// Validation message shown after a rejected command
    pub fn error(&self, message: &dyn Display) -> String {
        self.paint(&message.to_string(), &[Style::Red, Style::Bold])
    }
}

/// `ngram log-probability` lines sorted by N-gram
pub fn log_prob_table(probs: &NgramLogProbs) -> String {
    let sorted: BTreeMap<&str, f64> = probs.iter().map(|(k, v)| (k.as_str(), *v)).collect();

    sorted
        .into_iter()
        .map(|(ngram, log_prob)| format!("{} {:?}\n", ngram, log_prob))
        .collect()
}

/// JSON object of N-gram to log-probability, keys sorted
pub fn log_prob_json(probs: &NgramLogProbs) -> serde_json::Result<String> {
    let sorted: BTreeMap<&str, f64> = probs.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    serde_json::to_string_pretty(&sorted)
}
