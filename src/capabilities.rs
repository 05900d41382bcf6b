//! CAPABILITIES response decoding (RFC 3977 Section 5.2)
//!
//! Each body line is a capability label optionally followed by arguments. Labels are
//! case-insensitive and stored uppercased.

use std::collections::HashMap;

/// Capabilities advertised by the server
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Label -> arguments, e.g. "LIST" -> ["ACTIVE", "NEWSGROUPS"]
    entries: HashMap<String, Vec<String>>,
}

impl Capabilities {
    /// Decode the lines of a 101 response body
    ///
    /// Blank lines are skipped. A repeated label keeps the arguments of its last line.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut entries = HashMap::new();
        for line in lines {
            let mut tokens = line.as_ref().split_whitespace();
            let Some(label) = tokens.next() else {
                continue;
            };
            entries.insert(
                label.to_ascii_uppercase(),
                tokens.map(str::to_string).collect(),
            );
        }
        Self { entries }
    }

    /// Whether the label was advertised
    #[must_use]
    pub fn has(&self, label: &str) -> bool {
        self.entries.contains_key(&label.to_ascii_uppercase())
    }

    /// Arguments of a capability, `None` when it was not advertised
    #[must_use]
    pub fn args(&self, label: &str) -> Option<&[String]> {
        self.entries
            .get(&label.to_ascii_uppercase())
            .map(Vec::as_slice)
    }

    /// Whether a capability was advertised with the given argument
    pub fn has_arg(&self, label: &str, arg: &str) -> bool {
        self.args(label)
            .is_some_and(|args| args.iter().any(|a| a.eq_ignore_ascii_case(arg)))
    }

    /// Advertised labels, sorted
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// Protocol versions from the VERSION capability
    pub fn versions(&self) -> Vec<u32> {
        self.args("VERSION")
            .map(|args| args.iter().filter_map(|v| v.parse().ok()).collect())
            .unwrap_or_default()
    }

    /// Whether the OVER capability was advertised
    pub fn supports_over(&self) -> bool {
        self.has("OVER")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
