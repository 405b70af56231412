//! Width-fitting printer for the word IR.
//!
//! A rendered term starts out as one line. Lines wider than the configured
//! width are split by the first strategy that produces more than one line:
//! after top-level separators, before top-level operators, or by moving
//! nested runs onto their own indented lines. Passes repeat over the whole
//! sequence until nothing changes, so freshly split lines get re-checked.

use crate::ir::{Line, WordKind};

/// Configuration for folding and printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level. Default: 2.
    pub indent_size: usize,
    /// Maximum line width before lines are split. Default: 78.
    pub max_width: usize,
    /// Whether to apply the rewrite rules. Default: true.
    pub simplify: bool,
    /// Glyph left in the message where a term was extracted. Default: `…`.
    pub placeholder: char,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            max_width: 78,
            simplify: true,
            placeholder: '\u{2026}',
        }
    }
}

/// A line-splitting strategy; it returns a single line when it cannot split.
struct Strategy {
    name: &'static str,
    split: fn(&Line) -> Vec<Line>,
}

const STRATEGIES: [Strategy; 3] = [
    Strategy {
        name: "separators",
        split: split_at_separators,
    },
    Strategy {
        name: "operators",
        split: split_at_operators,
    },
    Strategy {
        name: "promote-nested",
        split: promote_nested,
    },
];

/// Render one line: indentation, then words with spaces around operators
/// and after separators.
pub fn line_image(line: &Line, config: &FormatConfig) -> String {
    let mut out = " ".repeat(line.indent * config.indent_size);
    let last = line.words.len().saturating_sub(1);
    for (i, word) in line.words.iter().enumerate() {
        if word.kind == WordKind::Operator && i > 0 {
            out.push(' ');
        }
        out.push_str(&word.text);
        let spaced = matches!(word.kind, WordKind::Operator | WordKind::Separator);
        if spaced && i < last {
            out.push(' ');
        }
    }
    out
}

/// Render lines, each followed by a newline.
pub fn lines_image(lines: &[Line], config: &FormatConfig) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line_image(line, config));
        out.push('\n');
    }
    out
}

/// Display width of a rendered line, in characters.
pub fn line_width(line: &Line, config: &FormatConfig) -> usize {
    line_image(line, config).chars().count()
}

/// Split lines until each fits `config.max_width` or cannot be split further.
pub fn format_lines(lines: Vec<Line>, config: &FormatConfig) -> Vec<Line> {
    let mut lines = lines;
    let mut passes = 0usize;
    loop {
        passes += 1;
        let mut changed = false;
        let mut next = Vec::with_capacity(lines.len());
        for line in lines {
            if line_width(&line, config) <= config.max_width {
                next.push(line);
                continue;
            }
            let split = STRATEGIES.iter().find_map(|strategy| {
                let parts = (strategy.split)(&line);
                (parts.len() > 1).then_some((strategy.name, parts))
            });
            match split {
                Some((strategy, parts)) => {
                    tracing::trace!(strategy, parts = parts.len(), "split overlong line");
                    next.extend(parts);
                    changed = true;
                }
                None => next.push(line),
            }
        }
        lines = next;
        if !changed {
            tracing::debug!(passes, lines = lines.len(), "line layout settled");
            return lines;
        }
    }
}

/// Cut after every separator at the line's base level.
fn split_at_separators(line: &Line) -> Vec<Line> {
    let Some(level) = line.base_level() else {
        return vec![line.clone()];
    };
    line.words
        .split_inclusive(|word| word.kind == WordKind::Separator && word.level == level)
        .map(|words| Line::new(line.indent, words.to_vec()))
        .collect()
}

/// Cut before every operator at the line's base level.
fn split_at_operators(line: &Line) -> Vec<Line> {
    let Some(level) = line.base_level() else {
        return vec![line.clone()];
    };
    let mut parts = Vec::new();
    let mut current = Vec::new();
    for word in &line.words {
        if word.kind == WordKind::Operator && word.level == level && !current.is_empty() {
            parts.push(Line::new(line.indent, std::mem::take(&mut current)));
        }
        current.push(word.clone());
    }
    if !current.is_empty() {
        parts.push(Line::new(line.indent, current));
    }
    parts
}

/// Alternate runs at the base level (kept at the line's indent) with runs at
/// other levels (moved one indent deeper).
fn promote_nested(line: &Line) -> Vec<Line> {
    let Some(level) = line.base_level() else {
        return vec![line.clone()];
    };
    line.words
        .chunk_by(|a, b| (a.level == level) == (b.level == level))
        .map(|run| {
            let indent = if run[0].level == level {
                line.indent
            } else {
                line.indent + 1
            };
            Line::new(indent, run.to_vec())
        })
        .collect()
}
