use pats_common::error::CursorError;
use pats_common::term::Term;
use pats_lexer::Cursor;

use crate::parser::parse_term;

/// Message text with its root terms pulled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// The input with every extracted term replaced by the placeholder.
    pub text: String,
    /// Extracted terms, in the order they were found.
    pub roots: Vec<Term>,
}

/// Walk `source` left to right and extract every root term.
///
/// At each position a term parse is attempted. A parse that yields a root
/// candidate consumes its input and leaves a single `placeholder` behind;
/// anything else rewinds, copies one character verbatim and moves on.
/// Extraction is greedy and leftmost, and extracted ranges never overlap.
pub fn scan(source: &str, placeholder: char) -> Result<Scan, CursorError> {
    let mut cursor = Cursor::new(source);
    let mut text = String::with_capacity(source.len());
    let mut roots = Vec::new();

    while cursor.has_current() {
        let start = cursor.pos();
        let root = cursor.attempt(|c| {
            Ok(parse_term(c)?.filter(Term::is_root_candidate))
        })?;
        match root {
            Some(term) => {
                tracing::debug!(
                    token = %term.token,
                    start,
                    end = cursor.pos(),
                    "extracted root term"
                );
                text.push(placeholder);
                roots.push(term);
            }
            None => text.push(cursor.advance()?),
        }
    }

    if cursor.depth() != 0 {
        return Err(CursorError::UnbalancedMarks {
            depth: cursor.depth(),
        });
    }
    Ok(Scan { text, roots })
}
