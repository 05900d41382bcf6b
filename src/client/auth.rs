//! NNTP authentication support (AUTHINFO USER/PASS, RFC 4643)

use super::NntpClient;
use super::state::ConnectionState;
use crate::commands;
use crate::config::Credentials;
use crate::error::{NntpError, Result};
use crate::response::codes;
use tracing::debug;

impl NntpClient {
    /// Authenticate with username and password (AUTHINFO USER/PASS)
    ///
    /// AUTHINFO USER must be answered with 381 and AUTHINFO PASS with 281. A rejection
    /// at either step stops the exchange there and surfaces the server's code and text.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_engine::{Credentials, NntpClient, ServerConfig};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ServerConfig::tls("news.example.com");
    /// let mut client = NntpClient::connect(Arc::new(config)).await?;
    /// client.authenticate(&Credentials::new("user", "pass")).await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::AlreadyAuthenticated`] - The session is already authenticated
    /// - [`NntpError::UnexpectedStatus`] - The server rejected the user (e.g. 481 or 482 to
    ///   AUTHINFO USER) or the password (481 to AUTHINFO PASS)
    /// - [`NntpError::ConnectionClosed`] - Server closed the connection
    /// - [`NntpError::Timeout`] - Server did not respond in time
    pub async fn authenticate(&mut self, credentials: &Credentials) -> Result<()> {
        match self.state {
            ConnectionState::Authenticated => return Err(NntpError::AlreadyAuthenticated),
            ConnectionState::Closed => return Err(NntpError::SessionClosed),
            ConnectionState::Ready | ConnectionState::InProgress => {}
        }

        debug!("Authenticating as {}", credentials.username);
        self.state = ConnectionState::InProgress;

        match self.authinfo(credentials).await {
            Ok(()) => {
                self.state = ConnectionState::Authenticated;
                debug!("Authentication successful");
                Ok(())
            }
            Err(e) => {
                self.state = ConnectionState::Ready;
                debug!("Authentication failed: {}", e);
                Err(e)
            }
        }
    }

    async fn authinfo(&mut self, credentials: &Credentials) -> Result<()> {
        self.transact(
            &commands::authinfo_user(&credentials.username),
            &[codes::AUTH_CONTINUE],
        )
        .await?;
        self.transact(
            &commands::authinfo_pass(&credentials.password),
            &[codes::AUTH_ACCEPTED],
        )
        .await?;
        Ok(())
    }
}
