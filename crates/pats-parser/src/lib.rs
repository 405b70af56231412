//! Parser for the term notation embedded in PostiATS diagnostics.
//!
//! Terms are prefix calls such as `S2Eapp(S2Ecst(add_int_int); x, y)`. The
//! parser builds them by recursive descent over a backtracking [`Cursor`],
//! and the scanner walks free-form message text to pull out every
//! self-contained root term.
//!
//! [`Cursor`]: pats_lexer::Cursor

pub mod parser;
pub mod scanner;

pub use parser::{parse_term, parse_term_list};
pub use scanner::{scan, Scan};

use pats_common::error::CursorError;
use pats_common::term::Term;
use pats_lexer::Cursor;

/// Parse a whole string as a single term.
///
/// Returns `None` when the text does not start with a term or when input is
/// left over after it.
pub fn parse(source: &str) -> Result<Option<Term>, CursorError> {
    let mut cursor = Cursor::new(source);
    let term = parse_term(&mut cursor)?;
    Ok(term.filter(|_| cursor.is_eof()))
}
