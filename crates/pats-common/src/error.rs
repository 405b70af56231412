use std::fmt;

/// An internal invariant violation raised by the term cursor.
///
/// Malformed input never produces one of these: parse failures are reported
/// as absence. A `CursorError` means the parser's own control flow read past
/// the input or mismatched its backtracking marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// `current` or `advance` was called with no character left.
    OutOfRange { pos: usize },
    /// A mark was popped while the mark stack was empty.
    EmptyMarkStack,
    /// Marks were still pending when a scan finished.
    UnbalancedMarks { depth: usize },
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos } => write!(f, "cursor read past end of input at byte {pos}"),
            Self::EmptyMarkStack => write!(f, "cursor mark stack is empty"),
            Self::UnbalancedMarks { depth } => {
                write!(f, "{depth} cursor mark(s) left pending after scan")
            }
        }
    }
}

impl std::error::Error for CursorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_error_display() {
        assert_eq!(
            CursorError::OutOfRange { pos: 7 }.to_string(),
            "cursor read past end of input at byte 7"
        );
        assert_eq!(
            CursorError::EmptyMarkStack.to_string(),
            "cursor mark stack is empty"
        );
        assert_eq!(
            CursorError::UnbalancedMarks { depth: 2 }.to_string(),
            "2 cursor mark(s) left pending after scan"
        );
    }
}
