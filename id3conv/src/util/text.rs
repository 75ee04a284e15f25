//! Text encodings and the legacy text transcoder

use encoding_rs::SHIFT_JIS;

/// The text encoding marker that starts every ID3v2 text frame
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	///
	/// Nominally Latin-1, but the tags this crate migrates stored Shift_JIS under this marker.
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}
}

/// Why a frame body was left untouched
#[derive(Debug, Clone, Eq, PartialEq, Copy)]
pub enum Unchanged {
	/// The body has no encoding byte
	Empty,
	/// The body is marked with an encoding other than the legacy one
	///
	/// Holds the raw encoding byte, which may not be a known [`TextEncoding`].
	OtherEncoding(u8),
	/// The payload is not valid Shift_JIS
	Undecodable,
}

/// The outcome of [`transcode_frame_body`]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Transcoded {
	/// The original body must be written as-is
	Unchanged(Unchanged),
	/// The new body, starting with the [`TextEncoding::UTF8`] marker
	Rewritten(Vec<u8>),
}

/// Transcode the body of a text frame from Shift_JIS to UTF-8
///
/// Only bodies marked with [`TextEncoding::Latin1`] are considered. A payload that fails to
/// decode is left alone, it most likely holds some other encoding already.
///
/// # Examples
///
/// ```rust
/// use id3conv::text::{Transcoded, Unchanged, transcode_frame_body};
///
/// // "カナ" in half-width katakana
/// let body = [0x00, 0xB6, 0xC5];
/// assert_eq!(
/// 	transcode_frame_body(&body),
/// 	Transcoded::Rewritten("\x03ｶﾅ".as_bytes().to_vec())
/// );
///
/// let utf16 = [0x01, 0xFF, 0xFE, b'a', 0x00];
/// assert_eq!(
/// 	transcode_frame_body(&utf16),
/// 	Transcoded::Unchanged(Unchanged::OtherEncoding(0x01))
/// );
/// ```
pub fn transcode_frame_body(body: &[u8]) -> Transcoded {
	let Some((&encoding, payload)) = body.split_first() else {
		return Transcoded::Unchanged(Unchanged::Empty);
	};

	if TextEncoding::from_u8(encoding) != Some(TextEncoding::Latin1) {
		return Transcoded::Unchanged(Unchanged::OtherEncoding(encoding));
	}

	let Some(text) = SHIFT_JIS.decode_without_bom_handling_and_without_replacement(payload) else {
		return Transcoded::Unchanged(Unchanged::Undecodable);
	};

	let mut out = Vec::with_capacity(text.len() + 1);
	out.push(TextEncoding::UTF8 as u8);
	out.extend_from_slice(text.as_bytes());

	Transcoded::Rewritten(out)
}
