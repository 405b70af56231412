use pats_common::error::CursorError;
use pats_common::term::{Term, Terminator};
use pats_lexer::{lex_token, Cursor};

/// Parse one term: a token, an optional parenthesized argument list, and the
/// terminator that follows it.
///
/// Returns `Ok(None)` when no token starts at the cursor or when an opened
/// argument list is malformed or left unclosed. A failed parse may leave the
/// cursor anywhere; callers that need to recover wrap it in
/// [`Cursor::attempt`].
pub fn parse_term(cursor: &mut Cursor<'_>) -> Result<Option<Term>, CursorError> {
    let Some(token) = lex_token(cursor)? else {
        return Ok(None);
    };

    let children = if cursor.eat("(") {
        let Some(children) = parse_term_list(cursor)? else {
            return Ok(None);
        };
        if !cursor.eat(")") {
            return Ok(None);
        }
        Some(children)
    } else {
        None
    };

    Ok(Some(Term {
        token: token.text,
        kind: token.kind,
        children,
        terminator: parse_terminator(cursor),
    }))
}

/// Parse the inside of an argument list, up to but excluding its `)`.
///
/// The list ends after the first term that has no terminator. An immediate
/// `)` yields an empty list.
pub fn parse_term_list(cursor: &mut Cursor<'_>) -> Result<Option<Vec<Term>>, CursorError> {
    let mut terms = Vec::new();
    if cursor.peek() == Some(')') {
        return Ok(Some(terms));
    }
    loop {
        let Some(term) = parse_term(cursor)? else {
            return Ok(None);
        };
        let last = term.terminator == Terminator::None;
        terms.push(term);
        if last {
            return Ok(Some(terms));
        }
    }
}

/// Consume the separator following a term, if any.
fn parse_terminator(cursor: &mut Cursor<'_>) -> Terminator {
    if cursor.eat("; ") {
        Terminator::Semicolon
    } else if cursor.eat(", ") {
        Terminator::Comma
    } else if cursor.eat("->") {
        Terminator::Arrow
    } else {
        Terminator::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pats_common::term::TermKind;

    fn parse_prefix(source: &str) -> (Option<Term>, usize) {
        let mut cursor = Cursor::new(source);
        let term = parse_term(&mut cursor).unwrap();
        (term, cursor.pos())
    }

    #[test]
    fn bare_token() {
        let (term, end) = parse_prefix("foo");
        assert_eq!(
            term,
            Some(Term::leaf("foo", TermKind::PlainName, Terminator::None))
        );
        assert_eq!(end, 3);
    }

    #[test]
    fn terminators_are_consumed() {
        let cases = [
            ("x; ", Terminator::Semicolon),
            ("x, ", Terminator::Comma),
            ("x->", Terminator::Arrow),
            ("x;", Terminator::None),
            ("x,y", Terminator::None),
        ];
        for (source, expected) in cases {
            let (term, _) = parse_prefix(source);
            assert_eq!(term.map(|t| t.terminator), Some(expected), "{source:?}");
        }
    }

    #[test]
    fn empty_argument_list() {
        let (term, _) = parse_prefix("C3TKmain()");
        let term = term.unwrap();
        assert_eq!(term.children, Some(vec![]));
    }

    #[test]
    fn nested_arguments() {
        let (term, end) = parse_prefix("S2Evar(n(12))");
        let term = term.unwrap();
        assert_eq!(end, 13);
        assert_eq!(
            term,
            Term::node(
                "S2Evar",
                TermKind::QualifiedName,
                vec![Term::node(
                    "n",
                    TermKind::PlainName,
                    vec![Term::leaf("12", TermKind::Numeric, Terminator::None)],
                    Terminator::None,
                )],
                Terminator::None,
            )
        );
    }

    #[test]
    fn list_stops_at_unterminated_term() {
        let mut cursor = Cursor::new("a; b, c) tail");
        let terms = parse_term_list(&mut cursor).unwrap().unwrap();
        let tokens: Vec<_> = terms.iter().map(|t| t.token.as_str()).collect();
        assert_eq!(tokens, ["a", "b", "c"]);
        assert_eq!(cursor.rest(), ") tail");
    }

    #[test]
    fn unclosed_list_fails() {
        assert_eq!(parse_prefix("S2Eapp(x, y").0, None);
        assert_eq!(parse_prefix("S2Eapp(x y)").0, None);
        assert_eq!(parse_prefix("S2Eapp(x, )").0, None);
    }

    #[test]
    fn missing_token_fails() {
        assert_eq!(parse_prefix("(x)").0, None);
        assert_eq!(parse_prefix("").0, None);
    }
}
