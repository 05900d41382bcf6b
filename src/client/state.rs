//! Session state for NNTP client

/// Session phase, tracking authentication progress (RFC 4643) and closure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ConnectionState {
    /// Connected and ready for commands (not authenticated)
    Ready,
    /// AUTHINFO USER sent, AUTHINFO PASS not yet accepted
    InProgress,
    /// Successfully authenticated
    Authenticated,
    /// QUIT has been issued
    Closed,
}
