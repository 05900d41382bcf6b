//! OVER/XOVER commands and overview data parsing

use super::article::with_id;
use crate::date::ArticleDate;
use crate::error::{NntpError, Result};
use tracing::warn;

/// Build XOVER command for fetching article overview data
///
/// A blank range selects the current article.
pub fn xover(range: &str) -> String {
    with_id("XOVER", range)
}

/// Build OVER command (RFC 3977 §8.3)
///
/// Retrieves overview data (same as XOVER but RFC 3977 standard name). A blank range
/// sends the bare "OVER", which asks for the current article.
pub fn over(range: &str) -> String {
    with_id("OVER", range)
}

/// One overview record
///
/// Number, byte count and line count must decode; the date is advisory and falls back to
/// [`ArticleDate::Unknown`] with the raw text preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleOverview {
    /// Article number within the newsgroup
    pub number: u64,
    /// Article subject line
    pub subject: String,
    /// Article author (From header)
    pub from: String,
    /// Article date
    pub date: ArticleDate,
    /// Unique message ID
    pub message_id: String,
    /// Parent message IDs, oldest first
    pub references: Vec<String>,
    /// Article size in bytes
    pub bytes: u64,
    /// Number of lines in the article
    pub lines: u64,
}

/// Decode one overview line
///
/// Format: `number\tsubject\tfrom\tdate\tmessage-id\treferences\tbytes\tlines[\textra...]`.
/// Fields after the eighth are ignored.
///
/// # Errors
///
/// [`NntpError::Parse`] carrying the raw line when there are fewer than eight fields or
/// the number, byte count or line count is not an unsigned integer.
pub fn parse_overview_line(line: &str) -> Result<ArticleOverview> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 8 {
        return Err(NntpError::parse("overview", line));
    }

    let integer = |field: &str| -> Result<u64> {
        field
            .trim()
            .parse()
            .map_err(|_| NntpError::parse("overview", line))
    };

    let number = integer(parts[0])?;
    let bytes = integer(parts[6])?;
    let lines = integer(parts[7])?;

    let date = ArticleDate::from_field(parts[3]);
    if !date.is_known() {
        warn!(number, date = parts[3], "Unrecognised overview date");
    }

    Ok(ArticleOverview {
        number,
        subject: parts[1].to_string(),
        from: parts[2].to_string(),
        date,
        message_id: parts[4].to_string(),
        references: parts[5].split_whitespace().map(str::to_string).collect(),
        bytes,
        lines,
    })
}
