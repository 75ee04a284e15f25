//! Contains the errors that can arise within id3conv
//!
//! The primary error is [`ConvertError`]. The type of error is determined by [`ErrorKind`].
//!
//! Every error is local to the conversion of a single file. None of them are meant to
//! stop a batch, see [`convert_all`](crate::file::convert_all).

use crate::id3::v2::FrameId;

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, ConvertError>`
pub type Result<T> = std::result::Result<T, ConvertError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Header
	/// The stream does not start with the `"ID3"` marker
	InvalidSignature,
	/// The tag's major version is not 3
	///
	/// Stored as `(major, minor)`.
	UnsupportedVersion(u8, u8),
	/// One of the unsynchronisation, extended header, experimental, or footer bits is set
	/// in the tag header
	UnsupportedHeaderFlags(u8),

	// Frame
	/// A rewrite-eligible frame is compressed, encrypted, or unsynchronised
	UnsupportedFrameFlags {
		/// The frame that carried the flags
		id: FrameId,
		/// The offending format flags byte
		flags: u8,
	},

	// Data
	/// The stream ended before a fixed-size read could complete
	TruncatedInput,
	/// Attempting to buffer an abnormally large frame, or the rewritten tag no longer fits
	/// in a synchsafe size
	TooMuchData,

	// Conversions for external errors
	/// Represents all other cases of [`std::io::Error`]
	Io(std::io::Error),
}

/// Errors that could occur within id3conv
pub struct ConvertError {
	pub(crate) kind: ErrorKind,
}

impl ConvertError {
	/// Create a `ConvertError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3conv::error::{ConvertError, ErrorKind};
	///
	/// let not_a_tag = ConvertError::new(ErrorKind::InvalidSignature);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3conv::error::{ConvertError, ErrorKind};
	///
	/// let truncated = ConvertError::new(ErrorKind::TruncatedInput);
	/// if let ErrorKind::TruncatedInput = truncated.kind() {
	/// 	println!("The file ended too early");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for ConvertError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for ConvertError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for ConvertError {
	fn from(input: std::io::Error) -> Self {
		if input.kind() == std::io::ErrorKind::UnexpectedEof {
			return Self {
				kind: ErrorKind::TruncatedInput,
			};
		}

		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::collections::TryReserveError> for ConvertError {
	fn from(_: std::collections::TryReserveError) -> Self {
		Self {
			kind: ErrorKind::TooMuchData,
		}
	}
}

impl Display for ConvertError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::InvalidSignature => {
				write!(f, "Reading: Expected an ID3v2 tag, found invalid data")
			},
			ErrorKind::UnsupportedVersion(major, minor) => write!(
				f,
				"ID3v2: Found an unsupported version (v2.{major}.{minor}), expected v2.3"
			),
			ErrorKind::UnsupportedHeaderFlags(flags) => write!(
				f,
				"ID3v2: Tag header has unsupported flags set (0x{flags:02X})"
			),
			ErrorKind::UnsupportedFrameFlags { ref id, flags } => write!(
				f,
				"ID3v2: Frame `{id}` is compressed, encrypted, or unsynchronised (0x{flags:02X})"
			),
			ErrorKind::TruncatedInput => {
				write!(f, "Reading: The stream ended before the tag was complete")
			},
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read/write an abnormally large amount of data"
			),
		}
	}
}
