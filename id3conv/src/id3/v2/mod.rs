//! ID3v2.3 items and the tag rewriter
//!
//! # Supported subset
//!
//! This is not a general ID3v2 implementation. A tag is only rewritten if:
//!
//! * It is an ID3v2.3 tag (any minor revision)
//! * It has no extended header, no footer, and is neither unsynchronised nor experimental
//! * None of the frames being transcoded are compressed, encrypted, or unsynchronised
//!
//! Everything else in the stream, including frames that are not transcoded, is passed
//! through byte-for-byte.
//!
//! # Padding
//!
//! ID3v2.3 has no frame count. The first frame header with an ID outside of `'A'..='Z'` and
//! `'0'..='9'` is treated as the start of padding, and the remainder of the stream is copied
//! without being parsed.

mod frame;
mod header;
mod rewrite;
pub mod util;

pub use frame::{
	FRAME_HEADER_LEN, FrameFlags, FrameHeader, FrameId, REWRITE_ELIGIBLE, RawFrameHeader,
	is_valid_id,
};
pub use header::{HEADER_LEN, SIZE_OFFSET, TagFlags, TagHeader};
pub use rewrite::{RewriteSummary, rewrite_tag};
