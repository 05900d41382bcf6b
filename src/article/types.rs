//! Article type definitions

use crate::commands::ArticleOverview;
use crate::connection::DotBlock;
use crate::date::parse_date;
use crate::error::Result;
use chrono::{DateTime, FixedOffset};

/// Article header fields in wire order
///
/// Lookup is case-insensitive. A field that appears more than once keeps every value,
/// in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: Vec<(String, String)>,
}

impl Headers {
    /// Empty header set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping any earlier values for the same name
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value of a field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).next()
    }

    /// Every value of a field, in order
    pub fn get_all<'s>(&'s self, name: &str) -> impl Iterator<Item = &'s str> {
        self.fields
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the field is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All fields as `(name, value)` pairs in wire order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of field lines (duplicates counted separately)
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn message_id(&self) -> Option<&str> {
        self.get("Message-ID")
    }

    pub fn subject(&self) -> Option<&str> {
        self.get("Subject")
    }

    pub fn from(&self) -> Option<&str> {
        self.get("From")
    }

    /// Parent message-ids from the References field, oldest first
    pub fn references(&self) -> Vec<&str> {
        self.get("References")
            .map(|refs| refs.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Date field run through the date layout cascade
    pub fn date(&self) -> Option<DateTime<FixedOffset>> {
        self.get("Date").and_then(parse_date)
    }
}

/// An article read from the server
///
/// The body is the remainder of the wire block and is read lazily, so an `Article`
/// borrows the session until its body has been consumed or drained.
#[derive(Debug)]
pub struct Article<'a> {
    /// Header fields
    pub headers: Headers,
    /// Lazy body lines
    pub body: DotBlock<'a>,
    /// Byte count, when known from an overview record
    pub bytes: Option<u64>,
    /// Line count, when known from an overview record
    pub lines: Option<u64>,
}

impl<'a> Article<'a> {
    pub fn new(headers: Headers, body: DotBlock<'a>) -> Self {
        Self {
            headers,
            body,
            bytes: None,
            lines: None,
        }
    }

    /// Take the byte and line counts from a matching overview record
    pub fn with_overview(mut self, overview: &ArticleOverview) -> Self {
        self.bytes = Some(overview.bytes);
        self.lines = Some(overview.lines);
        self
    }

    /// Read the whole body
    pub async fn read_body(self) -> Result<Vec<String>> {
        self.body.collect_lines().await
    }

    /// Discard the unread part of the body
    pub async fn skip_body(&mut self) -> Result<usize> {
        self.body.drain().await
    }
}
