use crate::error::Result;
use crate::id3::v2::util::synchsafe;
use crate::macros::err;

/// The size of the tag header, in bytes
pub const HEADER_LEN: usize = 10;

/// The offset of the synchsafe tag size within the header
pub const SIZE_OFFSET: u64 = 6;

/// Flags that apply to the entire tag
///
/// None of these are supported. A tag with any of them set is rejected.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct TagFlags(u8);

impl TagFlags {
	const UNSYNCHRONISATION: u8 = 0x80;
	const EXTENDED_HEADER: u8 = 0x40;
	const EXPERIMENTAL: u8 = 0x20;
	const FOOTER: u8 = 0x10;

	/// Wrap the raw flags byte
	pub const fn from_byte(byte: u8) -> Self {
		Self(byte)
	}

	/// The raw flags byte
	pub const fn as_byte(self) -> u8 {
		self.0
	}

	/// Whether all frames are unsynchronised
	pub const fn unsynchronisation(self) -> bool {
		self.0 & Self::UNSYNCHRONISATION == Self::UNSYNCHRONISATION
	}

	/// Whether an extended header follows the tag header
	pub const fn extended_header(self) -> bool {
		self.0 & Self::EXTENDED_HEADER == Self::EXTENDED_HEADER
	}

	/// Indicates if the tag is in an experimental stage
	pub const fn experimental(self) -> bool {
		self.0 & Self::EXPERIMENTAL == Self::EXPERIMENTAL
	}

	/// Indicates that the tag includes a footer
	pub const fn footer(self) -> bool {
		self.0 & Self::FOOTER == Self::FOOTER
	}

	/// Whether the tag can be rewritten as-is
	///
	/// Only the four defined bits are considered, undefined bits are ignored.
	pub const fn is_supported(self) -> bool {
		!(self.unsynchronisation() || self.extended_header() || self.experimental() || self.footer())
	}
}

/// A validated ID3v2.3 tag header
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TagHeader {
	/// The version, stored as `(major, minor)`
	///
	/// The major revision is always 3, the minor revision is never checked.
	pub version: (u8, u8),
	/// The tag flags, all of which are unset
	pub flags: TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER**)
	pub size: u32,
}

impl TagHeader {
	/// The only supported major revision
	pub const SUPPORTED_MAJOR_VERSION: u8 = 3;

	/// Validate and parse a 10 byte tag header
	///
	/// # Errors
	///
	/// * The header doesn't start with `"ID3"`
	/// * The major version isn't 3
	/// * Any of the tag flags are set
	///
	/// # Examples
	///
	/// ```rust
	/// use id3conv::id3::v2::TagHeader;
	///
	/// # fn main() -> id3conv::error::Result<()> {
	/// let header = TagHeader::parse(&[b'I', b'D', b'3', 3, 0, 0, 0, 0, 1, 0])?;
	/// assert_eq!(header.size, 128);
	/// # Ok(()) }
	/// ```
	pub fn parse(header: &[u8; HEADER_LEN]) -> Result<Self> {
		log::debug!("Parsing ID3v2 header");

		if &header[..3] != b"ID3" {
			err!(InvalidSignature);
		}

		// The minor revision is accepted as-is
		let (major, minor) = (header[3], header[4]);
		if major != Self::SUPPORTED_MAJOR_VERSION {
			err!(UnsupportedVersion(major, minor));
		}

		let flags = TagFlags::from_byte(header[5]);
		if !flags.is_supported() {
			err!(UnsupportedHeaderFlags(flags.as_byte()));
		}

		let size = synchsafe::decode([header[6], header[7], header[8], header[9]]);

		log::debug!("Found ID3v2.{major}.{minor} tag, size: {size}");

		Ok(TagHeader {
			version: (major, minor),
			flags,
			size,
		})
	}
}
