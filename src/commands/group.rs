//! Group selection commands and the group-line decoder

use crate::error::{NntpError, Result};

/// Build GROUP command
pub fn group(newsgroup: &str) -> String {
    format!("GROUP {}", newsgroup)
}

/// Build LISTGROUP command (RFC 3977 Section 6.1.2)
pub fn listgroup(newsgroup: &str) -> String {
    format!("LISTGROUP {}", newsgroup)
}

/// Build LISTGROUP command with range (RFC 3977 Section 6.1.2)
pub fn listgroup_range(newsgroup: &str, range: &str) -> String {
    format!("LISTGROUP {} {}", newsgroup, range)
}

/// A selected newsgroup, as reported by GROUP and LISTGROUP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Newsgroup name
    pub name: String,
    /// Estimated number of articles in the group
    pub number: u64,
    /// Low watermark
    pub low: u64,
    /// High watermark
    pub high: u64,
}

/// Result of LISTGROUP: the selected group plus its article numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupArticles {
    /// Group summary from the status line
    pub group: Group,
    /// Article numbers in server order
    pub articles: Vec<u64>,
}

/// Decode the text of a 211 status line: `number low high name`
///
/// Tokens after the name are ignored. Names are single tokens; a name with embedded
/// whitespace cannot be represented on this line.
///
/// # Errors
///
/// [`NntpError::MalformedGroupLine`] carrying the raw line when there are fewer than
/// four tokens or one of the first three is not an integer.
///
/// # Example
///
/// ```
/// use nntp_engine::commands::parse_group_line;
///
/// let group = parse_group_line("1234 3000234 3002322 misc.test").unwrap();
/// assert_eq!(group.number, 1234);
/// assert_eq!(group.low, 3000234);
/// assert_eq!(group.high, 3002322);
/// assert_eq!(group.name, "misc.test");
/// ```
pub fn parse_group_line(line: &str) -> Result<Group> {
    let malformed = || NntpError::MalformedGroupLine(line.to_string());

    let mut tokens = line.split_whitespace();
    let mut numeric = || -> Result<u64> {
        tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(malformed)
    };

    let number = numeric()?;
    let low = numeric()?;
    let high = numeric()?;
    let name = tokens.next().ok_or_else(malformed)?;

    Ok(Group {
        name: name.to_string(),
        number,
        low,
        high,
    })
}

/// Decode one LISTGROUP body line (an article number)
pub fn parse_article_number(line: &str) -> Result<u64> {
    line.trim()
        .parse()
        .map_err(|_| NntpError::parse("article number", line))
}
