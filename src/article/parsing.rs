//! Article and header parsing
//!
//! RFC 5536 layout: header lines, one blank line, body lines. A header line starting
//! with whitespace continues the previous field and is folded into it with a single
//! space.

use super::types::{Article, Headers};
use crate::connection::DotBlock;
use crate::error::{NntpError, Result};

/// Builds [`Headers`] one wire line at a time, unfolding continuations
#[derive(Default)]
struct HeaderFolder {
    headers: Headers,
    current: Option<(String, String)>,
}

impl HeaderFolder {
    fn push_line(&mut self, line: &str) -> Result<()> {
        if line.starts_with([' ', '\t']) {
            let (_, value) = self
                .current
                .as_mut()
                .ok_or_else(|| NntpError::parse("header", line))?;
            let continuation = line.trim();
            if !continuation.is_empty() {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(continuation);
            }
            return Ok(());
        }

        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| NntpError::parse("header", line))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(NntpError::parse("header", line));
        }

        self.flush();
        self.current = Some((name.to_string(), value.trim().to_string()));
        Ok(())
    }

    fn flush(&mut self) {
        if let Some((name, value)) = self.current.take() {
            self.headers.push(name, value);
        }
    }

    fn finish(mut self) -> Headers {
        self.flush();
        self.headers
    }
}

/// Parse header lines that have already been read
///
/// Blank lines are skipped.
///
/// # Errors
///
/// [`NntpError::Parse`] for a line without a colon or a continuation line with no
/// field before it.
pub fn parse_headers<I, S>(lines: I) -> Result<Headers>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut folder = HeaderFolder::default();
    for line in lines {
        let line = line.as_ref();
        if !line.is_empty() {
            folder.push_line(line)?;
        }
    }
    Ok(folder.finish())
}

/// Decode an ARTICLE reply body
///
/// Reads header lines up to the first blank line; the rest of the block is handed
/// back unread as the article body. On a malformed header the block is drained before
/// the error is returned, so the session stays usable.
pub async fn parse_article<'a>(mut block: DotBlock<'a>) -> Result<Article<'a>> {
    let mut folder = HeaderFolder::default();
    while let Some(line) = block.next_line().await? {
        if line.is_empty() {
            break;
        }
        if let Err(e) = folder.push_line(&line) {
            block.drain().await?;
            return Err(e);
        }
    }
    Ok(Article::new(folder.finish(), block))
}

/// Decode a HEAD reply body, where every line belongs to the header
pub async fn parse_header_block(mut block: DotBlock<'_>) -> Result<Headers> {
    let mut folder = HeaderFolder::default();
    while let Some(line) = block.next_line().await? {
        if line.is_empty() {
            continue;
        }
        if let Err(e) = folder.push_line(&line) {
            block.drain().await?;
            return Err(e);
        }
    }
    Ok(folder.finish())
}
