//! NNTP session facade
//!
//! [`NntpClient`] owns one line connection and exposes the NNTP verb set on top of
//! the transaction engine in `io`.

mod articles;
mod auth;
mod connection;
mod group_ops;
mod io;
mod listing;
mod metadata;
mod state;

use crate::config::ServerConfig;
use crate::connection::LineConnection;
use state::ConnectionState;
use std::sync::Arc;
use tracing::debug;

/// Async NNTP client session
///
/// One request/response exchange is outstanding at a time. Multi-line replies are
/// handed out as lazy readers that borrow the session, and a reader must be read to its
/// end (or drained) before the next command. A session that hit a transport failure or
/// a framing error is flagged broken and refuses further commands; drop it and dial a
/// new one.
///
/// # Example
///
/// ```no_run
/// use nntp_engine::{Credentials, NntpClient, ServerConfig};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServerConfig::tls("news.example.com");
/// let mut client = NntpClient::connect(Arc::new(config)).await?;
/// client.authenticate(&Credentials::new("user", "pass")).await?;
///
/// let group = client.select_group("misc.test").await?;
/// println!("Group has {} articles", group.number);
///
/// client.quit().await?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct NntpClient {
    /// Framed stream
    conn: LineConnection,
    /// Session phase
    state: ConnectionState,
    /// Server configuration
    config: Arc<ServerConfig>,
    /// Currently selected newsgroup
    current_group: Option<String>,
    /// Greeting text
    banner: String,
    /// Greeting was 200 rather than 201
    posting_allowed: bool,
}

impl NntpClient {
    /// Check if this session is broken and should be discarded
    pub fn is_broken(&self) -> bool {
        self.conn.is_broken()
    }

    /// Whether QUIT has been issued
    pub fn is_closed(&self) -> bool {
        self.state == ConnectionState::Closed
    }

    /// Get the currently selected newsgroup, if any
    pub fn current_group(&self) -> Option<&str> {
        self.current_group.as_deref()
    }

    /// Check if the client is currently authenticated
    pub fn is_authenticated(&self) -> bool {
        self.state == ConnectionState::Authenticated
    }

    /// Server greeting text
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Whether the greeting allowed posting (200 rather than 201)
    pub fn posting_allowed(&self) -> bool {
        self.posting_allowed
    }

    /// Server configuration this session was dialed with
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for NntpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NntpClient")
            .field("server", &self.config.address())
            .field("state", &self.state)
            .field("current_group", &self.current_group)
            .field("conn", &self.conn)
            .finish()
    }
}

impl Drop for NntpClient {
    fn drop(&mut self) {
        debug!("NntpClient dropped");
    }
}
