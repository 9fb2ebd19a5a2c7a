//! Regions and configurable region edits.
//!
//! A [`RegionEdit`] captures one excision the way the migration scripts
//! performed them: locate a start line by marker chain, optionally widen
//! backward over an attached comment, find the end either by brace
//! balance or by an end marker plus a bounded closing-line search, then
//! splice in a replacement snippet. Regions always cover whole lines.

use std::ops::Range;

use crate::error::{Error, Result, Role};
use crate::lines::{self, LineMap};
use crate::marker::MarkerChain;
use crate::scan::{self, Delimiters};

/// A contiguous half-open `[start, end)` span of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Region {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Replace a byte region of `text` with `replacement`.
pub fn splice(text: &str, region: Region, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() - region.len() + replacement.len());
    out.push_str(&text[..region.start]);
    out.push_str(replacement);
    out.push_str(&text[region.end..]);
    out
}

/// How the end of a region is determined once the start is known.
#[derive(Debug, Clone)]
pub enum EndStrategy {
    /// Delimiter-count forward from the start match until the block that
    /// opens there closes again.
    BraceBalance,
    /// Match an end marker, then search at most `window` lines forward
    /// for a line that is nothing but the closing delimiter.
    MarkerClose { chain: MarkerChain, window: usize },
}

/// Backward widening over an attached comment block.
#[derive(Debug, Clone)]
pub struct CommentWiden {
    pub marker: crate::marker::Marker,
    pub window: usize,
}

/// One configurable excision against a text buffer.
#[derive(Debug, Clone)]
pub struct RegionEdit {
    /// Name used in diagnostics and outcomes.
    pub name: String,
    pub start: MarkerChain,
    pub widen: Option<CommentWiden>,
    pub end: EndStrategy,
    /// Snippet substituted for the region. A trailing newline is added
    /// if missing so the splice stays line-aligned.
    pub replacement: String,
    pub delimiters: Delimiters,
}

/// Where an edit's region was found, and which markers found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedRegion {
    pub region: Region,
    pub start_candidate: usize,
    /// Candidate index of the end marker, for `MarkerClose` ends.
    pub end_candidate: Option<usize>,
    pub lines: Range<usize>,
}

impl RegionEdit {
    /// Locate the region without modifying anything.
    pub fn locate(&self, text: &str) -> Result<LocatedRegion> {
        let map = LineMap::new(text);

        let start_hit = self
            .start
            .find(text, 0)
            .ok_or_else(|| Error::region_not_found(self.name.as_str(), Role::Start))?;

        let mut start_line = map.line_of(start_hit.span.start);
        if let Some(widen) = &self.widen {
            start_line = lines::widen_to_comment(text, &map, start_line, widen.window, &widen.marker);
        }

        let (end, end_candidate) = match &self.end {
            EndStrategy::BraceBalance => {
                // Scan from the start match itself, not the widened
                // comment, so braces in the comment cannot skew the count.
                text[start_hit.span.start..]
                    .find(self.delimiters.open)
                    .ok_or_else(|| Error::OpenDelimiterMissing {
                        edit: self.name.clone(),
                    })?;
                let end = scan::find_delimited_end(text, start_hit.span.start, self.delimiters)
                    .ok_or_else(|| Error::Unbalanced {
                        edit: self.name.clone(),
                    })?;
                (map.end_of(map.line_of(end - 1)), None)
            }
            EndStrategy::MarkerClose { chain, window } => {
                let end_hit = chain
                    .find(text, start_hit.span.end)
                    .ok_or_else(|| Error::region_not_found(self.name.as_str(), Role::End))?;
                let marker_line = map.line_of(end_hit.span.start);
                let close_line = lines::closing_line_within(
                    text,
                    &map,
                    marker_line,
                    *window,
                    self.delimiters.close,
                )
                .ok_or(Error::ClosingLineMissing {
                    edit: self.name.clone(),
                    window: *window,
                })?;
                (map.end_of(close_line), Some(end_hit.candidate))
            }
        };

        let start = map.start_of(start_line);
        let region = Region::new(start, end);
        Ok(LocatedRegion {
            region,
            start_candidate: start_hit.candidate,
            end_candidate,
            lines: start_line..map.line_of(end.saturating_sub(1)) + 1,
        })
    }

    /// Locate and splice, returning the transformed buffer.
    pub fn apply(&self, text: &str) -> Result<String> {
        let located = self.locate(text)?;
        Ok(self.splice_located(text, &located))
    }

    fn splice_located(&self, text: &str, located: &LocatedRegion) -> String {
        let mut replacement = self.replacement.clone();
        if !replacement.is_empty() && !replacement.ends_with('\n') {
            replacement.push('\n');
        }
        tracing::info!(
            edit = %self.name,
            lines = ?located.lines,
            start_candidate = located.start_candidate,
            "replacing region"
        );
        splice(text, located.region, &replacement)
    }
}

/// An edit applied by a batch, for reporting.
#[derive(Debug, Clone)]
pub struct AppliedEdit {
    pub name: String,
    pub lines: Range<usize>,
    pub start_candidate: usize,
}

/// An edit whose region was not found.
#[derive(Debug)]
pub struct MissedEdit {
    pub name: String,
    pub error: Error,
}

/// Result of running a batch: the transformed buffer plus per-edit
/// outcomes. Callers decide the partial-success policy.
#[derive(Debug)]
pub struct BatchOutcome {
    pub buffer: String,
    pub applied: Vec<AppliedEdit>,
    pub missed: Vec<MissedEdit>,
}

impl BatchOutcome {
    /// Every edit found its region.
    pub fn is_complete(&self) -> bool {
        self.missed.is_empty()
    }

    /// No edit changed the buffer.
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Several region edits applied in sequence; each edit sees the result
/// of the previous one, as the original line-list scripts did.
#[derive(Debug, Clone, Default)]
pub struct EditBatch {
    pub edits: Vec<RegionEdit>,
}

impl EditBatch {
    pub fn new(edits: Vec<RegionEdit>) -> Self {
        Self { edits }
    }

    pub fn apply(&self, text: &str) -> BatchOutcome {
        let mut buffer = text.to_string();
        let mut applied = Vec::new();
        let mut missed = Vec::new();

        for edit in &self.edits {
            match edit.locate(&buffer) {
                Ok(located) => {
                    buffer = edit.splice_located(&buffer, &located);
                    applied.push(AppliedEdit {
                        name: edit.name.clone(),
                        lines: located.lines,
                        start_candidate: located.start_candidate,
                    });
                }
                Err(error) => {
                    tracing::warn!(edit = %edit.name, %error, "edit skipped");
                    missed.push(MissedEdit {
                        name: edit.name.clone(),
                        error,
                    });
                }
            }
        }

        BatchOutcome {
            buffer,
            applied,
            missed,
        }
    }
}
