//! Migrates the text of legacy Japanese ID3v2.3 tags from Shift_JIS to UTF-8.
//!
//! Old Japanese tagging software stored Shift_JIS text under the ID3 "ISO-8859-1" encoding
//! marker. Players that follow the specification show these titles as garbage. id3conv
//! rewrites the title (`TIT2`), album (`TALB`), and lead performer (`TPE1`) frames of such
//! tags as UTF-8, leaves every other byte of the file untouched, and fixes up the tag size.
//!
//! # Examples
//!
//! ## Rewriting a stream
//!
//! ```rust
//! # fn main() -> id3conv::error::Result<()> {
//! use id3conv::config::ConvertOptions;
//! use id3conv::id3::v2::rewrite_tag;
//!
//! use std::io::Cursor;
//!
//! // A tag with a single title frame, "日本" in Shift_JIS
//! let mut input = vec![b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 15];
//! input.extend_from_slice(&[b'T', b'I', b'T', b'2', 0, 0, 0, 5, 0, 0]);
//! input.extend_from_slice(&[0x00, 0x93, 0xFA, 0x96, 0x7B]);
//!
//! let mut output = Cursor::new(Vec::new());
//! let summary = rewrite_tag(&mut &input[..], &mut output, ConvertOptions::new())?;
//!
//! assert_eq!(summary.frames_transcoded, 1);
//! assert_eq!(summary.final_size, 17);
//! assert!(output.into_inner().ends_with("\x03日本".as_bytes()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Converting files in place
//!
//! ```rust,no_run
//! # fn main() -> id3conv::error::Result<()> {
//! use id3conv::config::BatchOptions;
//! use id3conv::file::{collect_inputs, convert_all};
//!
//! let options = BatchOptions::new();
//! let inputs = collect_inputs("Music/", &options)?;
//!
//! let report = convert_all(&inputs, &options, false);
//! for (path, err) in report.failed() {
//! 	eprintln!("Error converting {}: {err}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod id3;
pub(crate) mod macros;
mod util;

pub use util::text;
