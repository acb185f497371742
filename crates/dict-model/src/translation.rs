use serde::{Deserialize, Serialize};

/// The result of one dictionary lookup: the queried phrase and the
/// paired word lists extracted from the response.
///
/// `destination[i]` and `source[i]` form one translation pair. Both lists
/// are owned by the value; they are handed in by move and read back as
/// slices, so nothing the caller holds can alias them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    query: String,
    /// Terms in the target language.
    #[serde(default)]
    destination: Vec<String>,
    /// Terms in the source language.
    #[serde(default)]
    source: Vec<String>,
}

impl Translation {
    /// Create an empty ("not found") translation for the given phrase.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            destination: Vec::new(),
            source: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: Vec<String>) -> Self {
        self.source = source;
        self
    }

    pub fn with_destination(mut self, destination: Vec<String>) -> Self {
        self.destination = destination;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    pub fn destination(&self) -> &[String] {
        &self.destination
    }

    /// A translation counts as found only when both sides carry terms.
    pub fn is_found(&self) -> bool {
        !self.source.is_empty() && !self.destination.is_empty()
    }

    /// Iterate `(destination, source)` pairs, at most `limit` of them.
    ///
    /// Stops at the end of the shorter list.
    pub fn pairs(&self, limit: usize) -> impl Iterator<Item = (&str, &str)> {
        self.destination
            .iter()
            .zip(self.source.iter())
            .take(limit)
            .map(|(d, s)| (d.as_str(), s.as_str()))
    }
}
