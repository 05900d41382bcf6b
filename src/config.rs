//! Session configuration: where to dial and how long to wait

use std::fmt;
use std::time::Duration;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_TLS_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Where and how to open a session
///
/// Credentials are not part of it; they are handed to
/// [`NntpClient::authenticate`](crate::NntpClient::authenticate) once the session is up.
///
/// # Example
///
/// ```
/// use nntp_engine::ServerConfig;
///
/// let config = ServerConfig::tls("news.example.com");
/// assert_eq!(config.port, 563);
///
/// // Plain text on the standard port
/// let config = ServerConfig::plain("news.example.com");
/// assert!(!config.tls);
/// ```
#[must_use]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerConfig {
    /// Hostname or IP literal; also the TLS server name
    pub host: String,

    /// 119 for plain NNTP, 563 for NNTP over TLS
    pub port: u16,

    /// Wrap the connection in TLS before reading the greeting
    #[cfg_attr(feature = "serde", serde(default = "default_tls"))]
    pub tls: bool,

    /// Skip certificate chain and hostname checks
    ///
    /// **Security Warning:** anyone on the path can impersonate the server. Meant for
    /// test servers with self-signed certificates. Defaults to `false`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_insecure_tls: bool,

    /// Upper bound for establishing the TCP connection
    #[cfg_attr(feature = "serde", serde(default = "default_connect_timeout"))]
    pub connect_timeout: Duration,

    /// Upper bound for the TLS handshake
    #[cfg_attr(feature = "serde", serde(default = "default_tls_handshake_timeout"))]
    pub tls_handshake_timeout: Duration,

    /// Upper bound for reading any single line from the server
    #[cfg_attr(feature = "serde", serde(default = "default_read_timeout"))]
    pub read_timeout: Duration,
}

#[cfg(feature = "serde")]
fn default_tls() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_connect_timeout() -> Duration {
    DEFAULT_CONNECT_TIMEOUT
}

#[cfg(feature = "serde")]
fn default_tls_handshake_timeout() -> Duration {
    DEFAULT_TLS_HANDSHAKE_TIMEOUT
}

#[cfg(feature = "serde")]
fn default_read_timeout() -> Duration {
    DEFAULT_READ_TIMEOUT
}

impl ServerConfig {
    /// Explicit host, port and TLS choice with default timeouts
    pub fn new(host: impl Into<String>, port: u16, tls: bool) -> Self {
        Self {
            host: host.into(),
            port,
            tls,
            allow_insecure_tls: false,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            tls_handshake_timeout: DEFAULT_TLS_HANDSHAKE_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// TLS on port 563
    pub fn tls(host: impl Into<String>) -> Self {
        Self::new(host, 563, true)
    }

    /// Plain text on port 119
    ///
    /// AUTHINFO PASS travels unencrypted over such a session.
    pub fn plain(host: impl Into<String>) -> Self {
        Self::new(host, 119, false)
    }

    /// TLS on port 563 with certificate validation turned off
    ///
    /// See [`allow_insecure_tls`](Self::allow_insecure_tls).
    pub fn tls_insecure(host: impl Into<String>) -> Self {
        Self {
            allow_insecure_tls: true,
            ..Self::tls(host)
        }
    }

    /// Override the per-line read timeout
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// `host:port` as used for address resolution
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Username and password for AUTHINFO USER/PASS
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credentials {
    /// Username sent with AUTHINFO USER
    pub username: String,
    /// Password sent with AUTHINFO PASS
    pub password: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
