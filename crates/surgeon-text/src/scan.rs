//! Brace-balanced block-end scanning.
//!
//! Locates the end of a nested block (method body, constructor body) by
//! tracking delimiter depth from a start offset. The scanner is
//! deliberately literal-unaware: a delimiter inside a quoted string or a
//! comment is counted as structural. Callers pick a start position late
//! enough that earlier spurious delimiters are out of scope.

/// An opening/closing delimiter pair tracked by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: char,
    pub close: char,
}

/// Curly braces, the pair every original edit targets.
pub const BRACES: Delimiters = Delimiters {
    open: '{',
    close: '}',
};

pub const PARENS: Delimiters = Delimiters {
    open: '(',
    close: ')',
};

pub const BRACKETS: Delimiters = Delimiters {
    open: '[',
    close: ']',
};

/// Find the end of the brace-delimited block that opens at or after `start`.
///
/// Returns the byte offset one past the closing brace at which the depth
/// counter returns to zero, or `None` if the buffer runs out first.
pub fn find_block_end(text: &str, start: usize) -> Option<usize> {
    find_delimited_end(text, start, BRACES)
}

/// [`find_block_end`] for an arbitrary delimiter pair.
///
/// Depth only terminates the scan once the first opening delimiter has
/// been seen, so prose between `start` and the real `{` cannot produce a
/// premature match. A closing delimiter before the first opening one still
/// decrements the counter, which desynchronizes the scan; that matches the
/// behavior the migration scripts relied on.
pub fn find_delimited_end(text: &str, start: usize, delims: Delimiters) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut found_open = false;

    for (i, ch) in text[start..].char_indices() {
        if ch == delims.open {
            depth += 1;
            found_open = true;
        } else if ch == delims.close {
            depth -= 1;
            if found_open && depth == 0 {
                return Some(start + i + ch.len_utf8());
            }
        }
    }

    None
}
