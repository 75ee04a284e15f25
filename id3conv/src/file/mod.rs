//! File discovery, staging, and replacement
//!
//! The core rewriter ([`rewrite_tag`](crate::id3::v2::rewrite_tag)) only works on streams.
//! This module drives it over files on disk:
//!
//! 1. [`collect_inputs`] expands the paths given by the user
//! 2. [`output_path_for`] picks a staging location for each converted file
//! 3. [`convert_file`] writes the converted file to that location
//! 4. [`replace_file`] swaps it in for the original
//!
//! [`convert_path`] and [`convert_all`] combine these steps. The original file is never
//! written to until a complete converted copy exists.

mod convert;
mod discover;
mod output;
mod replace;

pub use convert::{BatchReport, convert_all, convert_file, convert_path};
pub use discover::collect_inputs;
pub use output::output_path_for;
pub use replace::replace_file;
