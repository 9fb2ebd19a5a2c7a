//! Line-oriented location helpers.
//!
//! The edits are described in terms of lines (the window searches and the
//! comment-widening step all count lines), while matching and splicing
//! work on byte offsets. [`LineMap`] bridges the two.

use crate::marker::Marker;

/// Byte offsets of each line start in a buffer.
///
/// Lines include their terminating newline; the last line may not have
/// one. Built once per locate pass over an unchanging buffer.
#[derive(Debug, Clone)]
pub struct LineMap {
    starts: Vec<usize>,
    len: usize,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' && i + 1 < text.len() {
                starts.push(i + 1);
            }
        }
        Self {
            starts,
            len: text.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Line index containing the given byte offset.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert) => insert - 1,
        }
    }

    /// Byte offset of the start of a line.
    pub fn start_of(&self, line: usize) -> usize {
        self.starts[line]
    }

    /// Byte offset one past the end of a line, including its newline.
    pub fn end_of(&self, line: usize) -> usize {
        self.starts.get(line + 1).copied().unwrap_or(self.len)
    }

    /// The text of one line, newline excluded.
    pub fn line_text<'a>(&self, text: &'a str, line: usize) -> &'a str {
        let slice = &text[self.start_of(line)..self.end_of(line)];
        slice.strip_suffix('\n').unwrap_or(slice)
    }
}

/// Walk back from `start_line` up to `window` lines looking for an
/// attached comment identified by `marker`; returns the widened start
/// line, or `start_line` unchanged if the marker is not in the window.
///
/// Mirrors the scripts' "voltar algumas linhas para pegar o comentário"
/// step: the earliest matching line in the window wins.
pub fn widen_to_comment(
    text: &str,
    map: &LineMap,
    start_line: usize,
    window: usize,
    marker: &Marker,
) -> usize {
    let lowest = start_line.saturating_sub(window);
    for line in lowest..start_line {
        if marker.matches_line(map.line_text(text, line)) {
            return line;
        }
    }
    start_line
}

/// Bounded forward search for a line consisting solely of a closing
/// delimiter, starting at `from_line` and scanning at most `window`
/// lines. Returns the line index of the closing line.
pub fn closing_line_within(
    text: &str,
    map: &LineMap,
    from_line: usize,
    window: usize,
    close: char,
) -> Option<usize> {
    let limit = (from_line + window).min(map.line_count());
    (from_line..limit).find(|&line| {
        let trimmed = map.line_text(text, line).trim();
        trimmed.len() == close.len_utf8() && trimmed.starts_with(close)
    })
}
