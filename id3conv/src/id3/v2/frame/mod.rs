mod header;

pub use header::{FRAME_HEADER_LEN, FrameHeader, RawFrameHeader};

use std::fmt::{Debug, Display, Formatter};

/// The frames whose text is transcoded: title, album, and lead performer
pub const REWRITE_ELIGIBLE: [FrameId; 3] = [
	FrameId::from_bytes_unchecked(*b"TIT2"),
	FrameId::from_bytes_unchecked(*b"TALB"),
	FrameId::from_bytes_unchecked(*b"TPE1"),
];

/// An `ID3v2.3` frame ID
///
/// Every byte is within `'A'..='Z'` or `'0'..='9'`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameId([u8; 4]);

impl FrameId {
	/// Attempts to create a `FrameId` from 4 raw bytes
	///
	/// Returns `None` if any byte is outside of `'A'..='Z'` and `'0'..='9'`. In a tag, this
	/// marks the start of padding (or garbage).
	///
	/// # Examples
	///
	/// ```rust
	/// use id3conv::id3::v2::FrameId;
	///
	/// assert!(FrameId::new(*b"TPE1").is_some());
	/// assert!(FrameId::new(*b"Tpe1").is_none());
	/// assert!(FrameId::new([0; 4]).is_none());
	/// ```
	pub fn new(id: [u8; 4]) -> Option<Self> {
		is_valid_id(&id).then_some(Self(id))
	}

	const fn from_bytes_unchecked(id: [u8; 4]) -> Self {
		Self(id)
	}

	/// The raw identifier bytes
	pub const fn as_bytes(&self) -> &[u8; 4] {
		&self.0
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		// Only ASCII uppercase letters and digits are ever stored
		std::str::from_utf8(&self.0).unwrap_or_default()
	}

	/// Whether frames with this ID have their text transcoded
	///
	/// # Examples
	///
	/// ```rust
	/// use id3conv::id3::v2::FrameId;
	///
	/// assert!(FrameId::new(*b"TIT2").unwrap().is_rewrite_eligible());
	/// assert!(!FrameId::new(*b"COMM").unwrap().is_rewrite_eligible());
	/// ```
	pub fn is_rewrite_eligible(self) -> bool {
		REWRITE_ELIGIBLE.contains(&self)
	}
}

impl Debug for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "FrameId({:?})", self.as_str())
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Whether all 4 bytes of `id` are ASCII uppercase letters or digits
pub fn is_valid_id(id: &[u8; 4]) -> bool {
	id.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// The two flag bytes of a frame header
///
/// These are carried through unchanged. Only the format byte is inspected, and only for
/// rewrite-eligible frames.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameFlags {
	/// The status flags byte
	pub status: u8,
	/// The format flags byte
	pub format: u8,
}

impl FrameFlags {
	const COMPRESSION: u8 = 0x08;
	const ENCRYPTION: u8 = 0x04;
	const UNSYNCHRONISATION: u8 = 0x02;

	/// Create `FrameFlags` from the two raw bytes
	pub const fn from_bytes(bytes: [u8; 2]) -> Self {
		Self {
			status: bytes[0],
			format: bytes[1],
		}
	}

	/// The two raw bytes
	pub const fn as_bytes(self) -> [u8; 2] {
		[self.status, self.format]
	}

	/// Whether the frame is compressed
	pub const fn compression(self) -> bool {
		self.format & Self::COMPRESSION == Self::COMPRESSION
	}

	/// Whether the frame is encrypted
	pub const fn encryption(self) -> bool {
		self.format & Self::ENCRYPTION == Self::ENCRYPTION
	}

	/// Whether the frame is unsynchronised
	pub const fn unsynchronisation(self) -> bool {
		self.format & Self::UNSYNCHRONISATION == Self::UNSYNCHRONISATION
	}

	/// Whether the frame content can be read and rewritten directly
	pub const fn is_plain(self) -> bool {
		!(self.compression() || self.encryption() || self.unsynchronisation())
	}
}
