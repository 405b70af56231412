//! Recognition of located PostiATS diagnostics.
//!
//! A located diagnostic looks like:
//!
//! ```text
//! UTF_8.dats: 5235(line=167, offs=53) -- 5237(line=167, offs=55): error(3): static arity mismatch
//! ```
//!
//! The fields are delimited by fixed tags that are searched for in order.
//! Only the path, the start line and offset, the level tag and the message
//! text are kept.

use serde::Serialize;

const END_OF_PATH: &str = ": ";
const LINE_TAG: &str = "(line=";
const OFFS_TAG: &str = ", offs=";
const END_OF_BEGIN: &str = ") -- ";
const END_OF_END: &str = "): ";
const END_OF_LEVEL: &str = ": ";

/// A diagnostic with a source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub path: String,
    pub line: usize,
    pub col: usize,
    pub level: u8,
    pub text: String,
}

impl Message {
    /// Parse a line as a located diagnostic.
    ///
    /// Returns `None` when any delimiter is missing or the start line or
    /// offset is not a number.
    pub fn parse(line: &str) -> Option<Message> {
        let mut fields = Fields { line, pos: 0 };
        let path = fields.until(END_OF_PATH)?;
        fields.until(LINE_TAG)?;
        let start_line = fields.until(OFFS_TAG)?;
        let start_offs = fields.until(END_OF_BEGIN)?;
        fields.until(LINE_TAG)?;
        fields.until(OFFS_TAG)?;
        fields.until(END_OF_END)?;
        let level = fields.until(END_OF_LEVEL)?;

        Some(Message {
            path: path.to_string(),
            line: start_line.trim().parse().ok()?,
            col: start_offs.trim().parse().ok()?,
            level: level_number(level),
            text: fields.rest().to_string(),
        })
    }
}

/// Severity number for a level tag; unknown tags are 0.
pub fn level_number(tag: &str) -> u8 {
    match tag {
        "error(parsing)" => 1,
        "error(2)" | "error(mac)" => 2,
        "error(3)" => 3,
        _ => 0,
    }
}

/// Sequential delimiter search over a line.
struct Fields<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Fields<'a> {
    /// The text up to the next `tag`, consuming the tag.
    fn until(&mut self, tag: &str) -> Option<&'a str> {
        let start = self.pos;
        let end = start + self.line[start..].find(tag)?;
        self.pos = end + tag.len();
        Some(&self.line[start..end])
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }
}
