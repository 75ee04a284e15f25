use super::{FrameFlags, FrameId};

use byteorder::{BigEndian, ByteOrder};

/// The size of a frame header, in bytes
pub const FRAME_HEADER_LEN: usize = 10;

/// An ID3v2.3 frame header
///
/// Unlike the tag header, the frame size is a plain big-endian integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameHeader {
	/// The frame ID
	pub id: FrameId,
	/// The size of the frame content (**DOES NOT INCLUDE THE HEADER**)
	pub size: u32,
	/// The frame flags
	pub flags: FrameFlags,
}

/// The result of reading 10 bytes where a frame header is expected
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RawFrameHeader {
	/// A well-formed frame header
	Frame(FrameHeader),
	/// The ID was invalid, these bytes start the padding (or garbage) of the tag
	Padding([u8; FRAME_HEADER_LEN]),
}

impl FrameHeader {
	/// Create a new [`FrameHeader`]
	pub const fn new(id: FrameId, size: u32, flags: FrameFlags) -> Self {
		Self { id, size, flags }
	}

	/// Parse 10 bytes where a frame header is expected
	///
	/// # Examples
	///
	/// ```rust
	/// use id3conv::id3::v2::{FrameHeader, RawFrameHeader};
	///
	/// let raw = FrameHeader::parse(&[b'T', b'I', b'T', b'2', 0, 0, 0, 5, 0, 0]);
	/// let RawFrameHeader::Frame(header) = raw else {
	/// 	unreachable!()
	/// };
	/// assert_eq!(header.id.as_str(), "TIT2");
	/// assert_eq!(header.size, 5);
	///
	/// let raw = FrameHeader::parse(&[0; 10]);
	/// assert!(matches!(raw, RawFrameHeader::Padding(_)));
	/// ```
	pub fn parse(header: &[u8; FRAME_HEADER_LEN]) -> RawFrameHeader {
		let Some(id) = FrameId::new([header[0], header[1], header[2], header[3]]) else {
			return RawFrameHeader::Padding(*header);
		};

		let size = BigEndian::read_u32(&header[4..8]);
		let flags = FrameFlags::from_bytes([header[8], header[9]]);

		RawFrameHeader::Frame(FrameHeader { id, size, flags })
	}

	/// Serialize the header, the inverse of [`FrameHeader::parse`]
	pub fn to_bytes(&self) -> [u8; FRAME_HEADER_LEN] {
		let mut bytes = [0; FRAME_HEADER_LEN];
		bytes[..4].copy_from_slice(self.id.as_bytes());
		BigEndian::write_u32(&mut bytes[4..8], self.size);
		bytes[8..].copy_from_slice(&self.flags.as_bytes());
		bytes
	}

	/// The total size of the frame, including the header
	pub fn full_frame_size(&self) -> u64 {
		u64::from(self.size) + FRAME_HEADER_LEN as u64
	}
}
