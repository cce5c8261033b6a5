//! Inbound line tokenization.

use crate::Command;
use thiserror::Error;

/// Errors from tokenizing an inbound line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line did not start with the configured command prefix.
    #[error("missing command prefix")]
    PrefixMismatch,
}

/// Parse one inbound line into a [`Command`].
///
/// The first whitespace-separated word must carry the configured one-character
/// command prefix; the keyword after it is matched case-insensitively.
/// Remaining words become the argument list, borrowed from `line`.
///
/// An empty line parses as `Command::Unknown("")` so the dispatcher can answer
/// it like any other unrecognized input.
pub fn parse(line: &str, prefix: char) -> Result<Command<'_>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Command::Unknown(""));
    };
    let keyword = head.strip_prefix(prefix).ok_or(ParseError::PrefixMismatch)?;
    let args: Vec<&str> = words.collect();
    Ok(Command::from_parts(keyword, args))
}
