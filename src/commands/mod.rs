//! NNTP command builders and response decoders
//!
//! Builders return the command text without the CRLF terminator; the line
//! connection appends it when writing.

pub mod article;
pub mod group;
pub mod list;
pub mod over;
pub mod response;

pub use article::*;
pub use group::*;
pub use list::*;
pub use over::*;
pub use response::*;

use crate::error::{NntpError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Build AUTHINFO USER command
pub fn authinfo_user(username: &str) -> String {
    format!("AUTHINFO USER {}", username)
}

/// Build AUTHINFO PASS command
pub fn authinfo_pass(password: &str) -> String {
    format!("AUTHINFO PASS {}", password)
}

/// Build QUIT command
pub fn quit() -> &'static str {
    "QUIT"
}

/// Build CAPABILITIES command (RFC 3977 §5.2)
pub fn capabilities() -> &'static str {
    "CAPABILITIES"
}

/// Build HELP command (RFC 3977 §7.2)
pub fn help() -> &'static str {
    "HELP"
}

/// Build DATE command (RFC 3977 §7.1)
///
/// Response: 111 yyyymmddhhmmss
pub fn date() -> &'static str {
    "DATE"
}

/// Parse the DATE response text ("yyyymmddhhmmss", always UTC)
pub fn parse_date_response(message: &str) -> Result<DateTime<Utc>> {
    let stamp = message.split_whitespace().next().unwrap_or("");
    if stamp.len() != 14 {
        return Err(NntpError::parse("server date", message));
    }
    NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| NntpError::parse("server date", message))
}
