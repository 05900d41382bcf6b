//! Article decoding (RFC 5536 header/body layout)
//!
//! - `types`: [`Article`] and its case-insensitive [`Headers`] map
//! - `parsing`: decoders that consume a dot-encoded block from the wire

mod parsing;
mod types;

pub use self::parsing::{parse_article, parse_header_block, parse_headers};
pub use self::types::{Article, Headers};
