//! Status line decoding

use crate::error::{NntpError, Result};

/// Split a status line into its code and the text after it
///
/// The line must open with exactly three ASCII digits; "2000 ok" is malformed rather
/// than code 200 with text "0 ok". The single separating space is dropped, anything
/// after it is returned verbatim.
pub fn parse_response_line(line: &str) -> Result<(u16, String)> {
    // Some proxies prepend a BOM to the greeting
    let line = line.trim_start_matches('\u{FEFF}');

    let code = match line.as_bytes() {
        [a, b, c, rest @ ..]
            if [a, b, c].iter().all(|d| d.is_ascii_digit())
                && !rest.first().is_some_and(u8::is_ascii_digit) =>
        {
            u16::from(a - b'0') * 100 + u16::from(b - b'0') * 10 + u16::from(c - b'0')
        }
        _ => return Err(malformed(line)),
    };

    let text = &line[3..];
    let text = text.strip_prefix(' ').unwrap_or(text);
    Ok((code, text.to_string()))
}

fn malformed(line: &str) -> NntpError {
    NntpError::MalformedStatus(line.chars().take(100).collect())
}
