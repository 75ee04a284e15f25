//! Utilities for working with synchsafe integers
//!
//! A synchsafe integer stores 7 bits per byte, with the most significant bit of every byte
//! cleared. ID3v2.3 only uses them for the tag size in the header.

use crate::error::Result;
use crate::macros::err;

use byteorder::{BigEndian, ByteOrder};

/// An integer that can be converted to and from a synchsafe variant
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in 28 bits
	///
	/// # Examples
	///
	/// ```rust
	/// use id3conv::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> id3conv::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// The most significant bit of every byte is ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3conv::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// assert_eq!(0x7F7F_7F7F_u32.unsynch(), 0xFFF_FFFF);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		// 7 bits are available per byte, shave off 1 bit per byte
		const MAXIMUM_INTEGER: u32 = u32::MAX >> 4;

		if self > MAXIMUM_INTEGER {
			err!(TooMuchData);
		}

		let n = self;
		Ok((n & 0x7F)
			| ((n & (0x7F << 7)) << 1)
			| ((n & (0x7F << 14)) << 2)
			| ((n & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}

/// Decode a big-endian synchsafe size field
///
/// # Examples
///
/// ```rust
/// use id3conv::id3::v2::util::synchsafe;
///
/// assert_eq!(synchsafe::decode([0, 0, 1, 0]), 128);
/// ```
pub fn decode(bytes: [u8; 4]) -> u32 {
	BigEndian::read_u32(&bytes).unsynch()
}

/// Encode a size as a big-endian synchsafe field
///
/// # Errors
///
/// `size` doesn't fit in 28 bits
///
/// # Examples
///
/// ```rust
/// use id3conv::id3::v2::util::synchsafe;
///
/// # fn main() -> id3conv::error::Result<()> {
/// assert_eq!(synchsafe::encode(129)?, [0, 0, 1, 1]);
/// # Ok(()) }
/// ```
pub fn encode(size: u32) -> Result<[u8; 4]> {
	let mut bytes = [0; 4];
	BigEndian::write_u32(&mut bytes, size.synch()?);
	Ok(bytes)
}
