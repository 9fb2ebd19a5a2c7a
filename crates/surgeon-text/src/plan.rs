//! TOML-described edit plans.
//!
//! The original scripts compiled their markers and replacement snippets
//! in; a plan file carries the same data so one binary can run any
//! excision:
//!
//! ```toml
//! [[edit]]
//! name = "normalize-role"
//! start = ["String _normalizeRole(String role) {", { pattern = 'String _normalizeRole\(' }]
//! comment-window = { marker = "///", lines = 3 }
//! end = { kind = "brace-balance" }
//! replacement = """
//!   String _normalizeRole(String role) => RolePatterns.normalize(role);
//! """
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::marker::{Marker, MarkerChain};
use crate::region::{CommentWiden, EditBatch, EndStrategy, RegionEdit};
use crate::scan;

fn default_window() -> usize {
    5
}

fn default_comment_lines() -> usize {
    3
}

/// A literal string, or `{ pattern = "..." }` for a regex.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MarkerSpec {
    Literal(String),
    Pattern { pattern: String },
}

impl MarkerSpec {
    fn compile(&self) -> Result<Marker> {
        match self {
            Self::Literal(text) => Ok(Marker::literal(text.as_str())),
            Self::Pattern { pattern } => Marker::pattern(pattern),
        }
    }
}

/// End-of-region strategy selector.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EndSpec {
    /// Brace-count forward from the start match.
    BraceBalance,
    /// End marker chain plus bounded closing-line search.
    Marker {
        markers: Vec<MarkerSpec>,
        #[serde(default = "default_window")]
        window: usize,
    },
}

/// Backward widening over an attached comment block.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentSpec {
    pub marker: MarkerSpec,
    #[serde(default = "default_comment_lines")]
    pub lines: usize,
}

/// One edit as written in the plan file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EditSpec {
    pub name: String,
    pub start: Vec<MarkerSpec>,
    #[serde(default)]
    pub comment_window: Option<CommentSpec>,
    pub end: EndSpec,
    pub replacement: String,
}

/// A deserialized plan file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditPlan {
    #[serde(rename = "edit", default)]
    pub edits: Vec<EditSpec>,
}

impl EditPlan {
    pub fn from_toml(source: &str) -> Result<Self> {
        let plan: Self = toml::from_str(source).map_err(|e| Error::PlanParse {
            message: e.to_string(),
        })?;
        if plan.edits.is_empty() {
            return Err(Error::PlanParse {
                message: "plan contains no [[edit]] tables".into(),
            });
        }
        for edit in &plan.edits {
            if edit.start.is_empty() {
                return Err(Error::PlanParse {
                    message: format!("edit `{}` has an empty start chain", edit.name),
                });
            }
        }
        Ok(plan)
    }

    /// Compile the plan's markers into a runnable batch.
    pub fn into_batch(self) -> Result<EditBatch> {
        let mut edits = Vec::with_capacity(self.edits.len());
        for spec in self.edits {
            let mut start = MarkerChain::new();
            for marker in &spec.start {
                start.push(marker.compile()?);
            }

            let end = match &spec.end {
                EndSpec::BraceBalance => EndStrategy::BraceBalance,
                EndSpec::Marker { markers, window } => {
                    let mut chain = MarkerChain::new();
                    for marker in markers {
                        chain.push(marker.compile()?);
                    }
                    EndStrategy::MarkerClose {
                        chain,
                        window: *window,
                    }
                }
            };

            let widen = match &spec.comment_window {
                Some(comment) => Some(CommentWiden {
                    marker: comment.marker.compile()?,
                    window: comment.lines,
                }),
                None => None,
            };

            edits.push(RegionEdit {
                name: spec.name,
                start,
                widen,
                end,
                replacement: spec.replacement,
                delimiters: scan::BRACES,
            });
        }
        Ok(EditBatch::new(edits))
    }
}
