//! Word and line IR for folded term output.
//!
//! The walker flattens a term tree into a sequence of words tagged with the
//! nesting level they came from. The printer groups words into lines and
//! splits lines that are too wide, using the levels to choose cut points.

/// The display role of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// A name, number or symbol.
    Token,
    /// `;` or `,`: followed by a space, and a line may end after it.
    Separator,
    /// An infix operator: surrounded by spaces, and a line may start with it.
    Operator,
    /// `(`
    Open,
    /// `)`
    Close,
}

/// A display token tagged with the nesting level that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub level: usize,
    pub kind: WordKind,
}

impl Word {
    pub fn new(text: impl Into<String>, level: usize, kind: WordKind) -> Self {
        Self {
            text: text.into(),
            level,
            kind,
        }
    }
}

/// A row of words printed at `indent` levels of indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub indent: usize,
    pub words: Vec<Word>,
}

impl Line {
    pub fn new(indent: usize, words: Vec<Word>) -> Self {
        Self { indent, words }
    }

    /// Level of the first word, which the split strategies cut relative to.
    pub fn base_level(&self) -> Option<usize> {
        self.words.first().map(|word| word.level)
    }
}

// ── Helper constructors ─────────────────────────────────────────────────

/// Create a `Token` word.
pub fn token(text: impl Into<String>, level: usize) -> Word {
    Word::new(text, level, WordKind::Token)
}

/// Create a `Separator` word.
pub fn separator(text: impl Into<String>, level: usize) -> Word {
    Word::new(text, level, WordKind::Separator)
}

/// Create an `Operator` word.
pub fn operator(text: impl Into<String>, level: usize) -> Word {
    Word::new(text, level, WordKind::Operator)
}

/// Create an `Open` parenthesis word.
pub fn open(level: usize) -> Word {
    Word::new("(", level, WordKind::Open)
}

/// Create a `Close` parenthesis word.
pub fn close(level: usize) -> Word {
    Word::new(")", level, WordKind::Close)
}
