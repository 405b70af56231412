use crate::term::TermKind;

/// A token produced by the PostiATS term tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TermKind,
}

impl Token {
    /// Create a new token from its text and lexical kind.
    pub fn new(text: impl Into<String>, kind: TermKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Characters that make up a `Symbol` token.
pub const SYMBOL_CHARS: &str = "[]<>.-+/%=~*&|";

/// Whether a character belongs to the symbol alphabet.
pub fn is_symbol_char(c: char) -> bool {
    SYMBOL_CHARS.contains(c)
}

/// Whether a character can start a plain name.
pub fn is_name_head(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Whether a character can continue a plain name.
pub fn is_name_tail(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Whether a token's text reads as a (possibly negative) decimal integer.
pub fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
