use pats_common::error::CursorError;

/// Backtracking character cursor over diagnostic text.
///
/// The cursor wraps a source string and provides character-by-character
/// iteration with byte-offset position tracking, plus a stack of saved
/// positions for speculative parsing. All positions are byte offsets into the
/// original UTF-8 text.
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    marks: Vec<usize>,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at the start of the source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            marks: Vec::new(),
        }
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Look at the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Whether there is a current character.
    pub fn has_current(&self) -> bool {
        self.pos < self.source.len()
    }

    /// The current character.
    pub fn current(&self) -> Result<char, CursorError> {
        self.peek().ok_or(CursorError::OutOfRange { pos: self.pos })
    }

    /// Whether there is a character after the current one.
    pub fn has_next(&self) -> bool {
        self.peek_next().is_some()
    }

    /// Look at the character after the current one without consuming anything.
    pub fn peek_next(&self) -> Option<char> {
        let mut iter = self.rest().chars();
        iter.next();
        iter.next()
    }

    /// Consume the current character and advance the position.
    pub fn advance(&mut self) -> Result<char, CursorError> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    /// Current byte position in the source text.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether there are no more characters to consume.
    pub fn is_eof(&self) -> bool {
        !self.has_current()
    }

    /// Number of pending marks.
    pub fn depth(&self) -> usize {
        self.marks.len()
    }

    /// Push the current position on the mark stack.
    pub fn mark(&mut self) {
        self.marks.push(self.pos);
    }

    /// Pop the most recent mark, keeping the current position.
    pub fn discard_mark(&mut self) -> Result<(), CursorError> {
        self.marks.pop().ok_or(CursorError::EmptyMarkStack)?;
        Ok(())
    }

    /// Pop the most recent mark and move back to it.
    pub fn restore_mark(&mut self) -> Result<(), CursorError> {
        self.pos = self.marks.pop().ok_or(CursorError::EmptyMarkStack)?;
        Ok(())
    }

    /// Run a speculative parse.
    ///
    /// The position is marked before `parse` runs. When `parse` yields a value
    /// the mark is discarded and the input stays consumed; when it yields
    /// nothing the cursor is restored to the mark. Nested attempts compose to
    /// any depth.
    pub fn attempt<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<Option<T>, CursorError>,
    ) -> Result<Option<T>, CursorError> {
        self.mark();
        match parse(self)? {
            Some(value) => {
                self.discard_mark()?;
                Ok(Some(value))
            }
            None => {
                self.restore_mark()?;
                Ok(None)
            }
        }
    }

    /// Consume `literal` if the remaining input starts with it.
    pub fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Advance while the predicate holds and return the consumed text.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if predicate(c) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        self.slice(start, self.pos)
    }

    /// Extract a slice of the source text by byte offsets.
    ///
    /// # Panics
    ///
    /// Panics if start or end are out of bounds or not on UTF-8 boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }
}
