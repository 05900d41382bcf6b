//! Session bring-up and teardown
//!
//! Dials through a [`Dialer`], validates the server greeting and, at the end of the
//! session's life, sends QUIT and shuts the stream down.

use super::NntpClient;
use super::state::ConnectionState;
use crate::commands;
use crate::config::ServerConfig;
use crate::connection::LineConnection;
use crate::error::{NntpError, Result};
use crate::response::codes;
use crate::transport::{Dialer, TcpDialer};
use std::sync::Arc;
use tracing::debug;

/// Greeting codes: posting allowed, posting prohibited
const GREETING: &[u16] = &[codes::READY_POSTING_ALLOWED, codes::READY_NO_POSTING];

/// QUIT codes; some servers answer 206 instead of 205
const CLOSING: &[u16] = &[codes::CLOSING_CONNECTION, codes::CLOSING_CONNECTION_ALT];

impl NntpClient {
    /// Connect to the server named in `config` using TCP, with TLS when `config.tls`
    ///
    /// Does not authenticate; call [`authenticate`](Self::authenticate) after
    /// connecting.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Io`] - TCP connection fails (DNS resolution, network unreachable, etc.)
    /// - [`NntpError::Tls`] - TLS handshake fails (invalid certificate, protocol error)
    /// - [`NntpError::Timeout`] - Connection, handshake or greeting timed out
    /// - [`NntpError::UnexpectedStatus`] - The greeting was neither 200 nor 201
    pub async fn connect(config: Arc<ServerConfig>) -> Result<Self> {
        Self::connect_with(config, &TcpDialer).await
    }

    /// Connect through a caller-supplied [`Dialer`]
    pub async fn connect_with<D: Dialer>(config: Arc<ServerConfig>, dialer: &D) -> Result<Self> {
        debug!("Connecting to NNTP server {}", config.address());

        let stream = dialer.connect(&config).await?;
        let mut conn = LineConnection::new(stream, config.read_timeout);

        let (code, banner) = conn.read_status_line(GREETING).await?;
        debug!("Server greeting: {} {}", code, banner);

        Ok(Self {
            conn,
            state: ConnectionState::Ready,
            config,
            current_group: None,
            banner,
            posting_allowed: code == codes::READY_POSTING_ALLOWED,
        })
    }

    /// End the session (QUIT) and shut the stream down
    ///
    /// The session counts as closed afterwards even when the server's reply is not
    /// 205/206 or the session was already broken.
    ///
    /// # Errors
    ///
    /// - [`NntpError::SessionClosed`] - `quit` was already called
    /// - [`NntpError::UnexpectedStatus`] - the server did not acknowledge QUIT
    pub async fn quit(&mut self) -> Result<()> {
        if self.state == ConnectionState::Closed {
            return Err(NntpError::SessionClosed);
        }

        let result = self.transact(commands::quit(), CLOSING).await;
        self.state = ConnectionState::Closed;
        self.current_group = None;

        if let Err(e) = self.conn.shutdown().await {
            debug!("Stream shutdown after QUIT failed: {}", e);
        }
        debug!("Session closed");

        result.map(|_| ())
    }
}
