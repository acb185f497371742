//! Screen-scrape the two inline-script word arrays out of a dict.cc page.
//!
//! The strategy lives behind [`extract`] so callers never depend on how
//! the page is taken apart.

pub mod extract;

pub use extract::{extract, extract_report, Extraction, MalformedLine, Side};
