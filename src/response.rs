//! NNTP response types and status codes

use crate::connection::DotBlock;
use crate::error::Result;

/// Outcome of one transaction: status line plus an optional lazy body
///
/// A response with a body borrows the session until the body has been read to its
/// terminator, so only one transaction can be outstanding at a time.
#[derive(Debug)]
pub struct Response<'a> {
    /// 3-digit NNTP response code
    pub code: u16,
    /// Status message from server (text after the code)
    pub message: String,
    body: Option<DotBlock<'a>>,
}

impl<'a> Response<'a> {
    pub(crate) fn new(code: u16, message: String, body: Option<DotBlock<'a>>) -> Self {
        Self {
            code,
            message,
            body,
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// 3xx: the server waits for more input
    pub fn is_continuation(&self) -> bool {
        (300..400).contains(&self.code)
    }

    /// 4xx or 5xx
    pub fn is_error(&self) -> bool {
        self.code >= 400
    }

    /// Whether a multi-line body is attached
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Borrow the attached body for incremental reading
    pub fn body_mut(&mut self) -> Option<&mut DotBlock<'a>> {
        self.body.as_mut()
    }

    /// Take ownership of the attached body
    pub fn into_body(self) -> Option<DotBlock<'a>> {
        self.body
    }

    /// Split into status text and body
    pub fn into_parts(self) -> (u16, String, Option<DotBlock<'a>>) {
        (self.code, self.message, self.body)
    }

    /// Collect the whole body (empty when none is attached)
    pub async fn into_lines(self) -> Result<Vec<String>> {
        match self.body {
            Some(body) => body.collect_lines().await,
            None => Ok(Vec::new()),
        }
    }
}

/// Status codes the engine checks for, plus the failure codes callers most often
/// match on through [`NntpError::code`](crate::NntpError::code)
pub mod codes {
    /// HELP text follows
    pub const HELP_TEXT_FOLLOWS: u16 = 100;
    /// CAPABILITIES list follows
    pub const CAPABILITY_LIST: u16 = 101;
    /// DATE reply, `yyyymmddhhmmss` in UTC
    pub const SERVER_DATE: u16 = 111;

    /// Greeting, posting allowed
    pub const READY_POSTING_ALLOWED: u16 = 200;
    /// Greeting, posting prohibited
    pub const READY_NO_POSTING: u16 = 201;
    /// QUIT acknowledged
    pub const CLOSING_CONNECTION: u16 = 205;
    /// QUIT acknowledged by servers predating RFC 3977
    pub const CLOSING_CONNECTION_ALT: u16 = 206;
    /// GROUP and LISTGROUP: count, low, high, name
    pub const GROUP_SELECTED: u16 = 211;
    /// LIST data follows
    pub const LIST_INFORMATION_FOLLOWS: u16 = 215;
    /// ARTICLE: headers and body follow
    pub const ARTICLE_FOLLOWS: u16 = 220;
    /// HEAD: headers follow
    pub const HEAD_FOLLOWS: u16 = 221;
    /// BODY: body follows
    pub const BODY_FOLLOWS: u16 = 222;
    /// STAT, NEXT, LAST: article exists, no data follows
    pub const ARTICLE_STAT: u16 = 223;
    /// OVER and XOVER data follows
    pub const OVERVIEW_INFO_FOLLOWS: u16 = 224;
    /// AUTHINFO PASS accepted
    pub const AUTH_ACCEPTED: u16 = 281;

    /// AUTHINFO USER accepted, send the password
    pub const AUTH_CONTINUE: u16 = 381;

    pub const SERVICE_UNAVAILABLE: u16 = 400;
    pub const NO_SUCH_GROUP: u16 = 411;
    pub const NO_GROUP_SELECTED: u16 = 412;
    pub const NO_CURRENT_ARTICLE: u16 = 420;
    pub const NO_NEXT_ARTICLE: u16 = 421;
    pub const NO_PREV_ARTICLE: u16 = 422;
    pub const NO_SUCH_ARTICLE_NUMBER: u16 = 423;
    pub const NO_SUCH_ARTICLE_ID: u16 = 430;
    /// RFC 4643: the command needs an authenticated session
    pub const AUTH_REQUIRED: u16 = 480;
    pub const AUTH_REJECTED: u16 = 481;
    pub const AUTH_OUT_OF_SEQUENCE: u16 = 482;

    pub const COMMAND_NOT_RECOGNIZED: u16 = 500;
    pub const COMMAND_SYNTAX_ERROR: u16 = 501;
    /// Permanently unavailable; also a refused greeting
    pub const ACCESS_DENIED: u16 = 502;
    pub const FEATURE_NOT_SUPPORTED: u16 = 503;
}
