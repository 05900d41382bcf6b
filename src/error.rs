//! NNTP error types

use thiserror::Error;

/// Broad classification of an [`NntpError`]
///
/// Callers that want to layer a retry policy on top of the engine usually only care
/// about this: transport failures may be worth a fresh session, protocol outcomes are
/// authoritative answers from the server, parse failures point at a bad record and
/// usage errors point at the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Dial, TLS handshake or I/O failure
    Transport,
    /// Unexpected status, malformed status line, truncated block, malformed group line
    Protocol,
    /// A load-bearing field of a decoded record could not be parsed
    Parse,
    /// The session was driven out of sequence
    Usage,
}

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS error during secure connection
    #[error("TLS error: {0}")]
    Tls(String),

    /// Connect, handshake or read deadline expired
    #[error("Connection timeout")]
    Timeout,

    /// Connection closed unexpectedly
    #[error("Connection closed")]
    ConnectionClosed,

    /// Server answered with a status code the command does not accept
    #[error("NNTP error {got}: {message} (expected {expected:?})")]
    UnexpectedStatus {
        /// Status code received from the server
        got: u16,
        /// Status codes the command accepts
        expected: &'static [u16],
        /// Status line text from the server, verbatim
        message: String,
    },

    /// Status line does not start with a 3-digit code
    #[error("Malformed status line: {0}")]
    MalformedStatus(String),

    /// Stream ended before the "." terminator of a multi-line block
    #[error("Multi-line block truncated before terminator")]
    TruncatedBlock,

    /// GROUP status line or LIST catalogue line that does not tokenize as expected
    #[error("Malformed group line: {0}")]
    MalformedGroupLine(String),

    /// A load-bearing field of a record failed to parse
    #[error("Failed to parse {record} record: {line}")]
    Parse {
        /// Kind of record being decoded (e.g. "overview")
        record: &'static str,
        /// The raw line
        line: String,
    },

    /// A new command was issued while a multi-line body was still pending
    #[error("Previous multi-line response was not drained")]
    UndrainedBody,

    /// A new command was issued while an earlier command's reply was never read
    #[error("Previous command was cancelled before its reply was read")]
    ReplyPending,

    /// The session has been closed with QUIT
    #[error("Session closed")]
    SessionClosed,

    /// The session hit a fatal error earlier and can no longer be used
    #[error("Session is broken and must be discarded")]
    SessionBroken,

    /// AUTHINFO attempted on an already authenticated session
    #[error("Already authenticated")]
    AlreadyAuthenticated,
}

impl NntpError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Tls(_) | Self::Timeout | Self::ConnectionClosed => {
                ErrorKind::Transport
            }
            Self::UnexpectedStatus { .. }
            | Self::MalformedStatus(_)
            | Self::TruncatedBlock
            | Self::MalformedGroupLine(_) => ErrorKind::Protocol,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::UndrainedBody
            | Self::ReplyPending
            | Self::SessionClosed
            | Self::SessionBroken
            | Self::AlreadyAuthenticated => ErrorKind::Usage,
        }
    }

    /// Server status code carried by this error, if any
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { got, .. } => Some(*got),
            _ => None,
        }
    }

    pub(crate) fn parse(record: &'static str, line: impl Into<String>) -> Self {
        Self::Parse {
            record,
            line: line.into(),
        }
    }
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
