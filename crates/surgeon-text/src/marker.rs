//! Start/end markers and ordered fallback chains.
//!
//! The original migration scripts located regions by trying a literal
//! substring, then an alternate literal, then a regex. A [`MarkerChain`]
//! keeps that fallback order explicit and reports which candidate fired,
//! so diagnostics and tests can name the matcher that found the region.

use std::ops::Range;

use regex::Regex;

use crate::error::Result;

/// A literal substring or compiled regex that locates one end of a region.
#[derive(Debug, Clone)]
pub enum Marker {
    Literal(String),
    Pattern(Regex),
}

impl Marker {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compile a regex marker.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Byte range of the first match at or after `from`.
    pub fn find(&self, haystack: &str, from: usize) -> Option<Range<usize>> {
        match self {
            Self::Literal(lit) => haystack[from..]
                .find(lit.as_str())
                .map(|i| from + i..from + i + lit.len()),
            Self::Pattern(re) => re
                .find(&haystack[from..])
                .map(|m| from + m.start()..from + m.end()),
        }
    }

    /// Whether a single line matches this marker.
    pub fn matches_line(&self, line: &str) -> bool {
        match self {
            Self::Literal(lit) => line.contains(lit.as_str()),
            Self::Pattern(re) => re.is_match(line),
        }
    }
}

/// Which candidate of a chain matched, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHit {
    /// Index of the candidate that fired.
    pub candidate: usize,
    /// Byte range of the match in the haystack.
    pub span: Range<usize>,
}

/// An ordered list of candidate markers tried in sequence.
#[derive(Debug, Clone, Default)]
pub struct MarkerChain {
    candidates: Vec<Marker>,
}

impl MarkerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, marker: Marker) {
        self.candidates.push(marker);
    }

    /// Builder-style literal candidate.
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.candidates.push(Marker::literal(text));
        self
    }

    /// Builder-style regex candidate.
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        self.candidates.push(Marker::pattern(pattern)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Try each candidate in order; first match wins.
    pub fn find(&self, haystack: &str, from: usize) -> Option<ChainHit> {
        for (candidate, marker) in self.candidates.iter().enumerate() {
            if let Some(span) = marker.find(haystack, from) {
                tracing::debug!(candidate, ?span, "marker chain matched");
                return Some(ChainHit { candidate, span });
            }
        }
        None
    }
}
