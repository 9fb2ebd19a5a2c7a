//! Regex rewrites over a whole buffer.
//!
//! The deprecated-API rename (`.withOpacity(x)` to `.withValues(alpha: x)`)
//! is a pure substitution repeated over a file list; the substitution
//! itself lives here, the file loop in the CLI.

use regex::Regex;

use crate::error::Result;

/// A compiled pattern plus its replacement template (`$1`-style capture
/// references as supported by the regex crate).
#[derive(Debug, Clone)]
pub struct RegexRewrite {
    pattern: Regex,
    replacement: String,
}

/// Result of a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub content: String,
    pub replacements: usize,
}

impl Rewritten {
    pub fn is_unchanged(&self) -> bool {
        self.replacements == 0
    }
}

impl RegexRewrite {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Apply the rewrite, counting how many sites were replaced.
    pub fn apply(&self, content: &str) -> Rewritten {
        let replacements = self.pattern.find_iter(content).count();
        if replacements == 0 {
            return Rewritten {
                content: content.to_string(),
                replacements: 0,
            };
        }
        Rewritten {
            content: self
                .pattern
                .replace_all(content, self.replacement.as_str())
                .into_owned(),
            replacements,
        }
    }
}
