#![doc = include_str!("../README.md")]

/// RFC 5536 article decoding
pub mod article;
mod capabilities;
mod client;
/// NNTP command builders and response decoders
pub mod commands;
mod config;
/// Line framing and dot-encoded blocks
pub mod connection;
/// Overview date layout cascade
pub mod date;
mod error;
mod response;
/// Dialers producing the byte stream a session runs over
pub mod transport;

pub use article::{Article, Headers, parse_article, parse_header_block, parse_headers};
pub use capabilities::Capabilities;
pub use client::NntpClient;
pub use commands::{
    ArticleInfo, ArticleOverview, Group, GroupArticles, GroupListing, PostingStatus,
};
pub use config::{Credentials, ServerConfig};
pub use connection::{DotBlock, LineConnection};
pub use date::{ArticleDate, parse_date};
pub use error::{ErrorKind, NntpError, Result};
pub use response::{Response, codes};
pub use transport::{BoxedStream, Dialer, NntpStream, TcpDialer};
