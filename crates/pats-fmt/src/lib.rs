//! Folding of PostiATS diagnostic messages.
//!
//! This crate turns the term notation embedded in a diagnostic into compact,
//! width-wrapped text. It works by:
//!
//! 1. Scanning the message for root terms (via `pats-parser`), leaving a
//!    placeholder where each one was
//! 2. Walking each term into a flat word sequence, simplifying the shapes it
//!    recognizes
//! 3. Printing the words as lines, splitting them until they fit the width

pub mod ir;
pub mod printer;
mod simplify;
pub mod walker;

pub use printer::FormatConfig;

use pats_common::error::CursorError;
use pats_common::term::Term;

/// Fold a diagnostic message.
///
/// The result is the message with every root term replaced by
/// `config.placeholder`, a newline, and then the printed block of each
/// extracted term in the order they were found.
///
/// # Example
///
/// ```
/// use pats_fmt::{fold, FormatConfig};
///
/// let text = "unsolved constraint: S2Eapp(S2Ecst(add_int_int); S2Eintinf(1), S2Eintinf(2))";
/// let folded = fold(text, &FormatConfig::default()).unwrap();
/// assert_eq!(folded, "unsolved constraint: \u{2026}\n(1 + 2)\n");
/// ```
pub fn fold(text: &str, config: &FormatConfig) -> Result<String, CursorError> {
    let scan = pats_parser::scan(text, config.placeholder)?;
    let mut out = scan.text;
    out.push('\n');
    for root in &scan.roots {
        out.push_str(&fold_term(root, config));
    }
    Ok(out)
}

/// Print a single term as width-wrapped lines, each ending in a newline.
pub fn fold_term(term: &Term, config: &FormatConfig) -> String {
    let line = walker::walk_term(term, config);
    let lines = printer::format_lines(vec![line], config);
    printer::lines_image(&lines, config)
}
