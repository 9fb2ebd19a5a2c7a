//! Text-buffer surgery for Source Surgeon
//!
//! Provides the primitives the maintenance tooling is built from: a
//! brace-balanced block-end scanner, marker chains with fallback,
//! line-window helpers, region splicing, regex rewrites, and
//! TOML-described edit plans.

pub mod error;
pub mod lines;
pub mod marker;
pub mod plan;
pub mod region;
pub mod rewrite;
pub mod scan;

pub use error::{Error, Result};
pub use lines::LineMap;
pub use marker::{ChainHit, Marker, MarkerChain};
pub use plan::EditPlan;
pub use region::{
    BatchOutcome, CommentWiden, EditBatch, EndStrategy, LocatedRegion, Region, RegionEdit, splice,
};
pub use rewrite::{RegexRewrite, Rewritten};
pub use scan::{Delimiters, find_block_end, find_delimited_end};
