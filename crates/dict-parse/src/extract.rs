use dict_model::Translation;
use std::fmt;
use thiserror::Error;

/// Script variable holding the target-language terms.
const DESTINATION_MARKER: &str = "var c1Arr";
/// Script variable holding the source-language terms.
const SOURCE_MARKER: &str = "var c2Arr";

/// Terms are quoted JS strings separated by `","`. A bare comma is not a
/// delimiter since terms may contain commas themselves.
const FIELD_DELIMITER: &str = "\",\"";

/// Which word list a marker line feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Destination => f.write_str("destination"),
        }
    }
}

/// A marker line whose array literal could not be located.
///
/// Not fatal: the affected side ends up empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {side} marker line (line {line_number}): no `(...)` argument list")]
pub struct MalformedLine {
    pub side: Side,
    /// 1-based line number within the body.
    pub line_number: usize,
}

/// Outcome of scanning a body: the translation plus any degraded lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub translation: Translation,
    pub malformed: Vec<MalformedLine>,
}

impl Extraction {
    pub fn is_degraded(&self) -> bool {
        !self.malformed.is_empty()
    }
}

/// Extract the translation pairs for `query` from a dict.cc result page.
///
/// A page without marker lines yields an empty ("not found") translation.
pub fn extract(query: &str, body: &str) -> Translation {
    extract_report(query, body).translation
}

/// Like [`extract`], but also reports marker lines that had to be skipped.
///
/// If a marker occurs more than once, the last occurrence wins.
pub fn extract_report(query: &str, body: &str) -> Extraction {
    let mut source = Vec::new();
    let mut destination = Vec::new();
    let mut malformed = Vec::new();

    for (idx, line) in body.lines().enumerate() {
        let side = if line.contains(DESTINATION_MARKER) {
            Side::Destination
        } else if line.contains(SOURCE_MARKER) {
            Side::Source
        } else {
            continue;
        };

        let terms = match parse_marker_line(line) {
            Some(terms) => terms,
            None => {
                let bad = MalformedLine {
                    side,
                    line_number: idx + 1,
                };
                tracing::warn!("{bad}");
                malformed.push(bad);
                Vec::new()
            }
        };

        tracing::debug!(side = %side, terms = terms.len(), "Parsed marker line");
        match side {
            Side::Destination => destination = terms,
            Side::Source => source = terms,
        }
    }

    Extraction {
        translation: Translation::new(query)
            .with_source(source)
            .with_destination(destination),
        malformed,
    }
}

/// Split the argument list of `new Array("a","b",...)` into its terms.
///
/// Returns `None` when the line has no `(` or no `)` after it.
fn parse_marker_line(line: &str) -> Option<Vec<String>> {
    let open = line.find('(')?;
    let close = line.rfind(')')?;
    if close <= open {
        return None;
    }
    let args = &line[open + 1..close];

    Some(
        args.split(FIELD_DELIMITER)
            .map(|field| field.replace('"', ""))
            .filter(|term| !term.is_empty())
            .collect(),
    )
}
