//! Term-to-words walker.
//!
//! Flattens a parsed term into the word IR. Each term is first offered to
//! the simplifier; terms no rule recognizes are rendered generically as
//! `token(child, child, ...)`.

use pats_common::term::{Term, Terminator};

use crate::ir::{close, open, operator, separator, token, Line, Word};
use crate::printer::FormatConfig;
use crate::simplify;

/// Render a root term as a single line at indent 0.
pub fn walk_term(term: &Term, config: &FormatConfig) -> Line {
    let mut words = Vec::new();
    term_words(term, 0, true, config, &mut words);
    Line::new(0, words)
}

/// Append the words of `term` at nesting `level` to `out`.
///
/// With `with_terminator`, the separator or operator that followed the term
/// in its list is appended too.
pub fn term_words(
    term: &Term,
    level: usize,
    with_terminator: bool,
    config: &FormatConfig,
    out: &mut Vec<Word>,
) {
    let simplified = if config.simplify {
        simplify::simplify(term, level, config)
    } else {
        None
    };
    match simplified {
        Some(words) => out.extend(words),
        None => generic_words(term, level, config, out),
    }
    if with_terminator {
        out.extend(terminator_word(term.terminator, level));
    }
}

/// The words of `term` without its terminator.
pub(crate) fn bare_words(term: &Term, level: usize, config: &FormatConfig) -> Vec<Word> {
    let mut words = Vec::new();
    term_words(term, level, false, config, &mut words);
    words
}

fn generic_words(term: &Term, level: usize, config: &FormatConfig, out: &mut Vec<Word>) {
    out.push(token(&term.token, level));
    if let Some(children) = &term.children {
        out.push(open(level));
        for child in children {
            term_words(child, level + 1, true, config, out);
        }
        out.push(close(level));
    }
}

fn terminator_word(terminator: Terminator, level: usize) -> Option<Word> {
    match terminator {
        Terminator::Semicolon => Some(separator(";", level)),
        Terminator::Comma => Some(separator(",", level)),
        Terminator::Arrow => Some(operator("->", level)),
        Terminator::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::WordKind;
    use pats_common::term::TermKind;

    fn words_of(source: &str, config: &FormatConfig) -> Vec<(String, usize, WordKind)> {
        let term = pats_parser::parse(source).unwrap().unwrap();
        walk_term(&term, config)
            .words
            .into_iter()
            .map(|w| (w.text, w.level, w.kind))
            .collect()
    }

    fn unsimplified() -> FormatConfig {
        FormatConfig {
            simplify: false,
            ..FormatConfig::default()
        }
    }

    #[test]
    fn generic_levels_and_terminators() {
        let words = words_of("S2Efun(S2Eint(); a->b)", &unsimplified());
        let expected = [
            ("S2Efun", 0, WordKind::Token),
            ("(", 0, WordKind::Open),
            ("S2Eint", 1, WordKind::Token),
            ("(", 1, WordKind::Open),
            (")", 1, WordKind::Close),
            (";", 1, WordKind::Separator),
            ("a", 1, WordKind::Token),
            ("->", 1, WordKind::Operator),
            ("b", 1, WordKind::Token),
            (")", 0, WordKind::Close),
        ];
        let expected: Vec<_> = expected
            .iter()
            .map(|(text, level, kind)| (text.to_string(), *level, *kind))
            .collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn simplification_can_be_disabled() {
        let words = words_of("S2Eintinf(1)", &unsimplified());
        assert_eq!(words.len(), 4);
        let words = words_of("S2Eintinf(1)", &FormatConfig::default());
        assert_eq!(words, vec![("1".to_string(), 0, WordKind::Token)]);
    }

    #[test]
    fn bare_words_drop_terminator() {
        let term = Term::leaf("x", TermKind::PlainName, Terminator::Comma);
        let config = FormatConfig::default();
        assert_eq!(bare_words(&term, 2, &config), vec![token("x", 2)]);

        let mut with_terminator = Vec::new();
        term_words(&term, 2, true, &config, &mut with_terminator);
        assert_eq!(with_terminator, vec![token("x", 2), separator(",", 2)]);
    }
}
