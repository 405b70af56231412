/// Lexical class of a term's head token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// `D2`, `S2` or `C3` followed by letters, e.g. `S2Eapp`.
    QualifiedName,
    /// An identifier such as `add_int_int` or `x'`.
    PlainName,
    /// An identifier with a numeric stamp, e.g. `n$4336`.
    NameWithId,
    /// An optionally negative run of digits.
    Numeric,
    /// A run of operator characters such as `<=` or `->`.
    Symbol,
}

/// What follows a term inside its enclosing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// `"; "`
    Semicolon,
    /// `", "`
    Comma,
    /// `"->"`
    Arrow,
    /// Nothing: the term is the last element of its list.
    None,
}

/// A node of the embedded PostiATS notation.
///
/// `children` is `None` for a bare token and `Some` (possibly empty) when the
/// token was followed by a parenthesized argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub token: String,
    pub kind: TermKind,
    pub children: Option<Vec<Term>>,
    pub terminator: Terminator,
}

impl Term {
    /// Create a term with an argument list.
    pub fn node(
        token: impl Into<String>,
        kind: TermKind,
        children: Vec<Term>,
        terminator: Terminator,
    ) -> Self {
        Self {
            token: token.into(),
            kind,
            children: Some(children),
            terminator,
        }
    }

    /// Create a bare term (no argument list).
    pub fn leaf(token: impl Into<String>, kind: TermKind, terminator: Terminator) -> Self {
        Self {
            token: token.into(),
            kind,
            children: None,
            terminator,
        }
    }

    /// Whether the term has no argument list at all.
    pub fn is_bare(&self) -> bool {
        self.children.is_none()
    }

    /// The argument list, or an empty slice for a bare term.
    pub fn args(&self) -> &[Term] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// The argument list when it has exactly `n` entries.
    pub fn args_exact(&self, n: usize) -> Option<&[Term]> {
        self.children.as_deref().filter(|args| args.len() == n)
    }

    /// A self-contained qualified term with nothing trailing: eligible for
    /// extraction from diagnostic text.
    pub fn is_root_candidate(&self) -> bool {
        self.kind == TermKind::QualifiedName && self.terminator == Terminator::None
    }
}
