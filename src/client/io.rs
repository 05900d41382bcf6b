//! Transaction engine: one command, one status line, optionally one lazy body
//!
//! Every verb of the client goes through [`NntpClient::transact`]. It refuses to run
//! on a closed or broken session, while an earlier command's reply is still unread, or
//! while a previous multi-line block is still pending. Only then does it write the
//! command and validate the status code.

use super::NntpClient;
use super::state::ConnectionState;
use crate::connection::DotBlock;
use crate::error::{NntpError, Result};
use crate::response::Response;
use tracing::warn;

impl NntpClient {
    /// Check the session can accept a new command
    fn ensure_ready(&mut self) -> Result<()> {
        if self.state == ConnectionState::Closed {
            return Err(NntpError::SessionClosed);
        }
        if self.conn.is_broken() {
            return Err(NntpError::SessionBroken);
        }
        if self.conn.has_pending_reply() {
            // An earlier command was cancelled; its reply would be read as ours
            warn!("Command issued while an earlier reply is unread; session is now broken");
            self.conn.mark_broken();
            return Err(NntpError::ReplyPending);
        }
        if self.conn.has_pending_block() {
            // The stream sits mid-block; there is no way back to a status line
            warn!("Command issued with an undrained multi-line body; session is now broken");
            self.conn.mark_broken();
            return Err(NntpError::UndrainedBody);
        }
        Ok(())
    }

    /// Send one command and read its status line
    pub(super) async fn transact(
        &mut self,
        command: &str,
        expected: &'static [u16],
    ) -> Result<(u16, String)> {
        self.ensure_ready()?;
        self.conn.write_line(command).await?;
        self.conn.read_status_line(expected).await
    }

    /// Send a command whose success reply carries a multi-line block
    pub(super) async fn transact_block(
        &mut self,
        command: &str,
        expected: &'static [u16],
    ) -> Result<(String, DotBlock<'_>)> {
        let (_, message) = self.transact(command, expected).await?;
        Ok((message, self.conn.read_dot_block()))
    }

    /// Run a raw command
    ///
    /// `command` is sent without its CRLF. The status code must be one of `expected`;
    /// otherwise [`NntpError::UnexpectedStatus`] carries the server's code and text and
    /// the session stays usable. With `multiline` set, the returned response holds the
    /// block unread.
    ///
    /// # Errors
    ///
    /// - [`NntpError::SessionClosed`] - QUIT was already issued
    /// - [`NntpError::SessionBroken`] - an earlier fatal error
    /// - [`NntpError::UndrainedBody`] - a previous body was not read to its end; the
    ///   session is broken afterwards
    /// - [`NntpError::ReplyPending`] - an earlier command was cancelled before its
    ///   status line arrived; the session is broken afterwards
    /// - [`NntpError::UnexpectedStatus`] - status code not in `expected`
    /// - [`NntpError::MalformedStatus`], transport errors - the session is broken
    pub async fn execute(
        &mut self,
        command: &str,
        expected: &'static [u16],
        multiline: bool,
    ) -> Result<Response<'_>> {
        let (code, message) = self.transact(command, expected).await?;
        let body = if multiline {
            Some(self.conn.read_dot_block())
        } else {
            None
        };
        Ok(Response::new(code, message, body))
    }
}

/// Decode every line of a block, failing on the first bad record
///
/// The rest of the block is drained before the error is returned, so the session
/// stays usable.
pub(super) async fn collect_records<T>(
    mut block: DotBlock<'_>,
    mut decode: impl FnMut(&str) -> Result<T>,
) -> Result<Vec<T>> {
    let mut records = Vec::new();
    while let Some(line) = block.next_line().await? {
        match decode(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                let skipped = block.drain().await?;
                warn!("Discarded {} lines after a bad record", skipped);
                return Err(e);
            }
        }
    }
    Ok(records)
}
