//! File I/O for Source Surgeon
//!
//! Whole-file read/transform/write with the sharp edges filed off:
//! UTF-8 reads fall back to Latin-1 instead of failing, writes go
//! through a temp file and an atomic rename, and the mojibake repair
//! from the encoding-fix scripts lives here.

pub mod encoding;
pub mod error;
pub mod io;

pub use encoding::{Decoding, decode_with_fallback, repair_mojibake};
pub use error::{Error, Result};
pub use io::{read_text, write_atomic};
