//! Article retrieval and navigation commands

use crate::error::{NntpError, Result};

/// `verb arg`, or the bare verb when `arg` is blank
pub(crate) fn with_id(verb: &'static str, id: &str) -> String {
    let id = id.trim();
    if id.is_empty() {
        verb.to_string()
    } else {
        format!("{} {}", verb, id)
    }
}

/// Build ARTICLE command
///
/// `id` is a message-id or an article number; an empty id addresses the current
/// article.
pub fn article(id: &str) -> String {
    with_id("ARTICLE", id)
}

/// Build HEAD command
pub fn head(id: &str) -> String {
    with_id("HEAD", id)
}

/// Build BODY command
pub fn body(id: &str) -> String {
    with_id("BODY", id)
}

/// Build STAT command (RFC 3977 §6.2.4)
///
/// Gets article status without retrieving content.
/// Can be used with article number or message-id.
pub fn stat(id: &str) -> String {
    with_id("STAT", id)
}

/// Build NEXT command (RFC 3977 §6.1.4)
///
/// Moves to the next article in the current group.
pub fn next() -> &'static str {
    "NEXT"
}

/// Build LAST command (RFC 3977 §6.1.3)
///
/// Moves to the previous article in the current group.
pub fn last() -> &'static str {
    "LAST"
}

/// Article information returned by STAT, NEXT, and LAST commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleInfo {
    /// Article number (0 if message-id was used in STAT request)
    pub number: u64,
    /// Message identifier (e.g., "<abc@example.com>")
    pub message_id: String,
}

/// Decode the text of a 223 status line: `n message-id`
///
/// Anything after the message-id is ignored.
pub fn parse_article_info(message: &str) -> Result<ArticleInfo> {
    let mut tokens = message.split_whitespace();
    let number = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| NntpError::parse("article pointer", message))?;
    let message_id = tokens
        .next()
        .ok_or_else(|| NntpError::parse("article pointer", message))?;

    Ok(ArticleInfo {
        number,
        message_id: message_id.to_string(),
    })
}
