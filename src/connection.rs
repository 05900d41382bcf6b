//! Line framing for the NNTP byte stream
//!
//! [`LineConnection`] turns the raw stream into CRLF-terminated lines, status lines
//! and dot-encoded multi-line blocks. A block is exposed as a [`DotBlock`], a lazy
//! single-pass reader that borrows the connection until it reaches the terminating
//! "." line.
//!
//! The connection keeps three flags:
//! - *pending reply*: set when a command line is written, cleared once its status
//!   line has been parsed. A command future dropped in between leaves it set.
//! - *pending block*: set when a block reader is handed out, cleared only when the
//!   terminator has been read. A reader dropped early leaves it set.
//! - *broken*: set on any I/O failure, timeout, malformed status line or truncated
//!   block. The stream position is unknown afterwards and nothing can resynchronise it.

use crate::commands;
use crate::error::{NntpError, Result};
use crate::transport::BoxedStream;
use std::fmt;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::timeout;
use tracing::trace;

/// BufReader capacity; article bodies arrive as many short lines
const BUFREADER_CAPACITY: usize = 64 * 1024;

/// Strip NNTP byte-stuffing from a block line
///
/// Any line that starts with "." loses exactly one leading dot. The terminator line
/// itself is never passed through here.
pub fn unstuff_line(line: &str) -> &str {
    line.strip_prefix('.').unwrap_or(line)
}

/// Line-oriented view of an NNTP stream
pub struct LineConnection {
    stream: BufReader<BoxedStream>,
    read_timeout: Duration,
    pending_reply: bool,
    pending_block: bool,
    broken: bool,
}

impl fmt::Debug for LineConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineConnection")
            .field("read_timeout", &self.read_timeout)
            .field("pending_reply", &self.pending_reply)
            .field("pending_block", &self.pending_block)
            .field("broken", &self.broken)
            .finish()
    }
}

impl LineConnection {
    /// Wrap a freshly dialed stream
    pub fn new(stream: BoxedStream, read_timeout: Duration) -> Self {
        Self {
            stream: BufReader::with_capacity(BUFREADER_CAPACITY, stream),
            read_timeout,
            pending_reply: false,
            pending_block: false,
            broken: false,
        }
    }

    /// Whether a fatal error left the stream in an unknown position
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Whether a command was written but its status line not yet read
    pub fn has_pending_reply(&self) -> bool {
        self.pending_reply
    }

    /// Whether a multi-line block was started but its terminator not yet read
    pub fn has_pending_block(&self) -> bool {
        self.pending_block
    }

    pub(crate) fn mark_broken(&mut self) {
        self.broken = true;
    }

    /// Write one line, appending CRLF, and flush
    pub async fn write_line(&mut self, text: &str) -> Result<()> {
        if text.starts_with("AUTHINFO PASS") {
            trace!("Sending command: AUTHINFO PASS ****");
        } else {
            trace!("Sending command: {}", text);
        }

        self.pending_reply = true;
        let mut line = String::with_capacity(text.len() + 2);
        line.push_str(text);
        line.push_str("\r\n");

        let stream = self.stream.get_mut();
        let written = match stream.write_all(line.as_bytes()).await {
            Ok(()) => stream.flush().await,
            Err(e) => Err(e),
        };
        written.map_err(|e| {
            self.broken = true;
            NntpError::Io(e)
        })
    }

    /// Read one line with its CRLF (or bare LF) stripped
    ///
    /// Invalid UTF-8 is decoded lossily; NNTP payloads are not guaranteed to be UTF-8.
    pub async fn read_line(&mut self) -> Result<String> {
        let mut line_bytes = Vec::with_capacity(512);
        let read = timeout(
            self.read_timeout,
            self.stream.read_until(b'\n', &mut line_bytes),
        )
        .await;

        let n = match read {
            Err(_) => {
                self.broken = true;
                return Err(NntpError::Timeout);
            }
            Ok(Err(e)) => {
                self.broken = true;
                return Err(NntpError::Io(e));
            }
            Ok(Ok(n)) => n,
        };

        if n == 0 {
            self.broken = true;
            return Err(NntpError::ConnectionClosed);
        }

        if line_bytes.last() == Some(&b'\n') {
            line_bytes.pop();
            if line_bytes.last() == Some(&b'\r') {
                line_bytes.pop();
            }
        }

        Ok(String::from_utf8_lossy(&line_bytes).into_owned())
    }

    /// Read a status line and check its code against `expected`
    ///
    /// A code outside `expected` is an authoritative server answer and leaves the
    /// connection usable. A line without a numeric code breaks the connection.
    pub async fn read_status_line(&mut self, expected: &'static [u16]) -> Result<(u16, String)> {
        let line = self.read_line().await?;
        trace!("Received: {}", line);

        let (code, message) = match commands::parse_response_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.broken = true;
                return Err(e);
            }
        };
        self.pending_reply = false;

        if !expected.contains(&code) {
            return Err(NntpError::UnexpectedStatus {
                got: code,
                expected,
                message,
            });
        }

        Ok((code, message))
    }

    /// Start reading a dot-encoded block
    ///
    /// Nothing is read until the returned reader is advanced.
    pub fn read_dot_block(&mut self) -> DotBlock<'_> {
        self.pending_block = true;
        DotBlock {
            conn: self,
            done: false,
            lines_read: 0,
        }
    }

    /// Flush and close the write half of the stream
    pub async fn shutdown(&mut self) -> Result<()> {
        self.stream.get_mut().shutdown().await.map_err(NntpError::Io)
    }
}

/// Lazy reader over one dot-encoded multi-line block
///
/// Yields unstuffed lines until the "." terminator, which is never yielded. Once the
/// terminator has been read every further call returns `Ok(None)`; the block cannot
/// be restarted. The connection stays reserved until the terminator is reached, so a
/// block must be read to the end or [`drain`](Self::drain)ed before the session is
/// used again.
pub struct DotBlock<'a> {
    conn: &'a mut LineConnection,
    done: bool,
    lines_read: u64,
}

impl fmt::Debug for DotBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotBlock")
            .field("done", &self.done)
            .field("lines_read", &self.lines_read)
            .finish()
    }
}

impl DotBlock<'_> {
    /// Next payload line, or `None` once the terminator has been read
    ///
    /// # Errors
    ///
    /// - [`NntpError::TruncatedBlock`] - the stream ended before the terminator
    /// - [`NntpError::Timeout`] / [`NntpError::Io`] - transport failure
    ///
    /// All of these leave the connection broken.
    pub async fn next_line(&mut self) -> Result<Option<String>> {
        if self.done {
            return Ok(None);
        }

        let line = match self.conn.read_line().await {
            Ok(line) => line,
            Err(NntpError::ConnectionClosed) => {
                self.done = true;
                return Err(NntpError::TruncatedBlock);
            }
            Err(e) => {
                self.done = true;
                return Err(e);
            }
        };

        if line == "." {
            self.done = true;
            self.conn.pending_block = false;
            trace!("Block terminated after {} lines", self.lines_read);
            return Ok(None);
        }

        self.lines_read += 1;
        if line.starts_with('.') {
            Ok(Some(unstuff_line(&line).to_string()))
        } else {
            Ok(Some(line))
        }
    }

    /// Whether the terminator (or a fatal error) has been reached
    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Payload lines yielded so far
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Read and discard the rest of the block, returning how many lines were skipped
    pub async fn drain(&mut self) -> Result<usize> {
        let mut skipped = 0;
        while self.next_line().await?.is_some() {
            skipped += 1;
        }
        Ok(skipped)
    }

    /// Collect the rest of the block
    pub async fn collect_lines(mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.next_line().await? {
            lines.push(line);
        }
        Ok(lines)
    }
}
