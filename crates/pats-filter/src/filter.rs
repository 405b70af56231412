//! Line-by-line processing of compiler output.

use std::io::{BufRead, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::message::Message;
use crate::paths;

/// A located diagnostic as emitted in JSON mode.
#[derive(Debug, Serialize)]
struct JsonMessage<'a> {
    path: &'a str,
    line: usize,
    col: usize,
    level: u8,
    text: &'a str,
}

/// Process one input line into its output form (without a final newline).
pub fn filter_line(raw: &str, config: &FilterConfig, cwd: &Path) -> Result<String, FilterError> {
    let line = raw.trim();
    let Some(mut message) = Message::parse(line) else {
        return Ok(line.to_string());
    };
    if config.relative_paths {
        message.path = paths::relative_to(Path::new(&message.path), cwd)
            .display()
            .to_string();
    }
    let folded = pats_fmt::fold(&message.text, &config.format)?;

    if config.json {
        let json = JsonMessage {
            path: &message.path,
            line: message.line,
            col: message.col,
            level: message.level,
            text: &folded,
        };
        return Ok(serde_json::to_string(&json)?);
    }
    Ok(if config.column {
        format!("{}:{}:{}: {}", message.path, message.line, message.col, folded)
    } else {
        format!("{}:{}: {}", message.path, message.line, folded)
    })
}

/// Filter every line of `input` into `output`.
pub fn filter_stream<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &FilterConfig,
    cwd: &Path,
) -> Result<usize, FilterError> {
    let mut count = 0usize;
    for line in input.lines() {
        let line = line?;
        writeln!(output, "{}", filter_line(&line, config, cwd)?)?;
        count += 1;
    }
    Ok(count)
}
