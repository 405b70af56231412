// PostiATS term tokenizer -- classifies the head token of an embedded term.

pub mod cursor;

pub use cursor::Cursor;

use pats_common::error::CursorError;
use pats_common::term::TermKind;
use pats_common::token::{is_name_head, is_name_tail, is_symbol_char, Token};

/// Prefixes of qualified compiler-internal names.
const QUALIFIED_PREFIXES: [&str; 3] = ["D2", "S2", "C3"];

/// Lex one token at the cursor.
///
/// Token classes are tried in a fixed priority order and the first one that
/// matches wins: qualified name, name with id, plain name, numeric, symbol.
/// Returns `Ok(None)` without consuming anything when no class matches.
pub fn lex_token(cursor: &mut Cursor<'_>) -> Result<Option<Token>, CursorError> {
    if let Some(text) = lex_qualified_name(cursor)? {
        return Ok(Some(Token::new(text, TermKind::QualifiedName)));
    }
    if let Some(text) = lex_name_with_id(cursor)? {
        return Ok(Some(Token::new(text, TermKind::NameWithId)));
    }
    if let Some(text) = lex_plain_name(cursor) {
        return Ok(Some(Token::new(text, TermKind::PlainName)));
    }
    if let Some(text) = lex_numeric(cursor)? {
        return Ok(Some(Token::new(text, TermKind::Numeric)));
    }
    Ok(lex_symbol(cursor).map(|text| Token::new(text, TermKind::Symbol)))
}

/// `D2`/`S2`/`C3` followed by at least one letter.
fn lex_qualified_name(cursor: &mut Cursor<'_>) -> Result<Option<String>, CursorError> {
    cursor.attempt(|c| {
        let start = c.pos();
        if !QUALIFIED_PREFIXES.iter().any(|prefix| c.eat(prefix)) {
            return Ok(None);
        }
        if c.eat_while(char::is_alphabetic).is_empty() {
            return Ok(None);
        }
        Ok(Some(c.slice(start, c.pos()).to_string()))
    })
}

/// `name$id`, where the id may be negative.
fn lex_name_with_id(cursor: &mut Cursor<'_>) -> Result<Option<String>, CursorError> {
    cursor.attempt(|c| {
        let start = c.pos();
        if lex_plain_name(c).is_none() || !c.eat("$") {
            return Ok(None);
        }
        if lex_numeric(c)?.is_none() {
            return Ok(None);
        }
        Ok(Some(c.slice(start, c.pos()).to_string()))
    })
}

/// A letter or `_`, then letters, digits, `_` or `'`.
fn lex_plain_name(cursor: &mut Cursor<'_>) -> Option<String> {
    if !cursor.peek().is_some_and(is_name_head) {
        return None;
    }
    // Every head character is also a tail character.
    Some(cursor.eat_while(is_name_tail).to_string())
}

/// An optionally negative run of digits.
fn lex_numeric(cursor: &mut Cursor<'_>) -> Result<Option<String>, CursorError> {
    cursor.attempt(|c| {
        let start = c.pos();
        c.eat("-");
        if c.eat_while(char::is_numeric).is_empty() {
            return Ok(None);
        }
        Ok(Some(c.slice(start, c.pos()).to_string()))
    })
}

fn lex_symbol(cursor: &mut Cursor<'_>) -> Option<String> {
    let run = cursor.eat_while(is_symbol_char);
    (!run.is_empty()).then(|| run.to_string())
}
