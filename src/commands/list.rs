//! LIST commands and the catalogue-line decoder

use crate::error::{NntpError, Result};

/// Build LIST command
///
/// Without a keyword the server answers as for LIST ACTIVE.
pub fn list() -> &'static str {
    "LIST"
}

/// Build LIST ACTIVE command (RFC 3977 §7.6.3)
///
/// Lists active newsgroups matching the wildmat pattern.
pub fn list_active(wildmat: &str) -> String {
    format!("LIST ACTIVE {}", wildmat)
}

/// Posting permission of a newsgroup in the active list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostingStatus {
    /// "y" - posting permitted
    Allowed,
    /// "n" - posting not permitted
    NotAllowed,
    /// "m" - moderated, postings go to the moderator
    Moderated,
    /// "=other.group" - articles are filed into another group
    Alias(String),
    /// Any other server-specific flag, kept verbatim
    Other(String),
}

impl PostingStatus {
    /// Decode the fourth token of an active-list line
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "y" => Self::Allowed,
            "n" => Self::NotAllowed,
            "m" => Self::Moderated,
            _ => match flag.strip_prefix('=') {
                Some(target) => Self::Alias(target.to_string()),
                None => Self::Other(flag.to_string()),
            },
        }
    }

    /// Whether a client may post to the group directly or via its moderator
    pub fn allows_posting(&self) -> bool {
        matches!(self, Self::Allowed | Self::Moderated)
    }
}

/// One entry of the group catalogue returned by LIST / LIST ACTIVE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupListing {
    /// Newsgroup name
    pub name: String,
    /// High watermark
    pub high: u64,
    /// Low watermark
    pub low: u64,
    /// Posting permission flag
    pub posting: PostingStatus,
}

/// Decode one active-list line: `name high low flag`
///
/// # Errors
///
/// [`NntpError::MalformedGroupLine`] carrying the raw line when there are fewer than
/// four tokens or a watermark is not an integer.
pub fn parse_list_line(line: &str) -> Result<GroupListing> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(NntpError::MalformedGroupLine(line.to_string()));
    }

    let high = parts[1]
        .parse()
        .map_err(|_| NntpError::MalformedGroupLine(line.to_string()))?;
    let low = parts[2]
        .parse()
        .map_err(|_| NntpError::MalformedGroupLine(line.to_string()))?;

    Ok(GroupListing {
        name: parts[0].to_string(),
        high,
        low,
        posting: PostingStatus::from_flag(parts[3]),
    })
}
