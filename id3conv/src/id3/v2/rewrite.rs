use super::frame::{FRAME_HEADER_LEN, FrameHeader, RawFrameHeader};
use super::header::{HEADER_LEN, SIZE_OFFSET, TagHeader};
use super::util::synchsafe;
use crate::config::ConvertOptions;
use crate::error::{ConvertError, ErrorKind, Result};
use crate::macros::{err, try_vec};
use crate::util::text::{Transcoded, Unchanged, transcode_frame_body};

use std::io::{Read, Seek, SeekFrom, Write};

/// A summary of a completed rewrite
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RewriteSummary {
	/// The tag size declared in the input header
	pub original_size: u32,
	/// The tag size written to the output header
	pub final_size: u32,
	/// The number of frames written as-is
	pub frames_copied: usize,
	/// The number of frames transcoded to UTF-8
	pub frames_transcoded: usize,
	/// Whether frame parsing stopped at padding before reaching the declared tag size
	pub reached_padding: bool,
}

impl RewriteSummary {
	/// The net change in tag size
	pub fn size_delta(&self) -> i64 {
		i64::from(self.final_size) - i64::from(self.original_size)
	}

	/// Whether no frame was transcoded
	///
	/// The output then matches the input, apart from any high bits set in the input's size
	/// field, which are cleared.
	pub fn is_unchanged(&self) -> bool {
		self.frames_transcoded == 0
	}
}

/// Rewrite the ID3v2.3 tag at the start of `reader` into `writer`
///
/// Every title (`TIT2`), album (`TALB`), and lead performer (`TPE1`) frame marked as
/// [`TextEncoding::Latin1`](crate::text::TextEncoding::Latin1) is decoded as Shift_JIS and
/// re-encoded as UTF-8. All other bytes, including everything after the tag, are copied
/// unchanged. Once the stream is exhausted, the tag size in the output header is patched.
///
/// `writer` may already contain data, the tag is written starting at its current position.
/// On return, `writer` is positioned at the end of the rewritten stream.
///
/// On error, whatever was written to `writer` is incomplete and must be discarded.
///
/// # Errors
///
/// * The tag header is invalid or unsupported (see [`TagHeader::parse`])
/// * A transcoded frame is compressed, encrypted, or unsynchronised
/// * A transcoded frame is larger than [`ConvertOptions::allocation_limit`]
/// * `reader` ends before the declared tag size is reached
/// * The rewritten tag is too large for a synchsafe size
/// * Any I/O error from `reader` or `writer`
///
/// # Examples
///
/// ```rust
/// use id3conv::config::ConvertOptions;
/// use id3conv::id3::v2::rewrite_tag;
///
/// use std::io::Cursor;
///
/// # fn main() -> id3conv::error::Result<()> {
/// // An empty tag, followed by some audio
/// let input = [b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 0, 0xFF, 0xFB];
///
/// let mut output = Cursor::new(Vec::new());
/// let summary = rewrite_tag(&mut &input[..], &mut output, ConvertOptions::new())?;
///
/// assert!(summary.is_unchanged());
/// assert_eq!(output.into_inner(), input);
/// # Ok(()) }
/// ```
pub fn rewrite_tag<R, W>(
	reader: &mut R,
	writer: &mut W,
	options: ConvertOptions,
) -> Result<RewriteSummary>
where
	R: Read,
	W: Write + Seek,
{
	let tag_start = writer.stream_position()?;

	let mut header_bytes = [0; HEADER_LEN];
	reader.read_exact(&mut header_bytes)?;
	let tag_header = TagHeader::parse(&header_bytes)?;

	// The size field is patched once the new size is known
	writer.write_all(&header_bytes)?;

	let mut summary = RewriteSummary {
		original_size: tag_header.size,
		..RewriteSummary::default()
	};

	let delta = walk_frames(reader, writer, tag_header.size, options, &mut summary)?;

	log::debug!("Copying the remainder of the stream");
	std::io::copy(reader, writer)?;

	let Ok(final_size) = u32::try_from(i64::from(tag_header.size) + delta) else {
		err!(TooMuchData);
	};
	let size_bytes = synchsafe::encode(final_size)?;

	writer.flush()?;
	let end = writer.stream_position()?;

	log::debug!(
		"Patching tag size: {} -> {final_size}",
		tag_header.size
	);
	writer.seek(SeekFrom::Start(tag_start + SIZE_OFFSET))?;
	writer.write_all(&size_bytes)?;
	writer.seek(SeekFrom::Start(end))?;
	writer.flush()?;

	summary.final_size = final_size;
	Ok(summary)
}

// Walks the frames within the declared tag size, returning the net change in size
fn walk_frames<R, W>(
	reader: &mut R,
	writer: &mut W,
	tag_size: u32,
	options: ConvertOptions,
	summary: &mut RewriteSummary,
) -> Result<i64>
where
	R: Read,
	W: Write,
{
	let mut delta = 0_i64;
	let mut consumed = 0_u64;

	while consumed < u64::from(tag_size) {
		let mut header_bytes = [0; FRAME_HEADER_LEN];
		reader.read_exact(&mut header_bytes)?;

		let header = match FrameHeader::parse(&header_bytes) {
			RawFrameHeader::Frame(header) => header,
			RawFrameHeader::Padding(bytes) => {
				log::debug!("Reached padding after {consumed} bytes of frames");
				writer.write_all(&bytes)?;
				summary.reached_padding = true;
				break;
			},
		};

		if header.id.is_rewrite_eligible() {
			match rewrite_frame(reader, writer, header, options)? {
				Some(frame_delta) => {
					delta += frame_delta;
					summary.frames_transcoded += 1;
				},
				None => summary.frames_copied += 1,
			}
		} else {
			copy_frame(reader, writer, header)?;
			summary.frames_copied += 1;
		}

		consumed += header.full_frame_size();
	}

	Ok(delta)
}

fn copy_frame<R, W>(reader: &mut R, writer: &mut W, header: FrameHeader) -> Result<()>
where
	R: Read,
	W: Write,
{
	log::trace!("Copying frame `{}` ({} bytes)", header.id, header.size);

	writer.write_all(&header.to_bytes())?;

	let size = u64::from(header.size);
	let copied = std::io::copy(&mut reader.by_ref().take(size), writer)?;
	if copied != size {
		err!(TruncatedInput);
	}

	Ok(())
}

// Returns the change in frame size, or `None` if the frame was written as-is
fn rewrite_frame<R, W>(
	reader: &mut R,
	writer: &mut W,
	header: FrameHeader,
	options: ConvertOptions,
) -> Result<Option<i64>>
where
	R: Read,
	W: Write,
{
	if !header.flags.is_plain() {
		return Err(ConvertError::new(ErrorKind::UnsupportedFrameFlags {
			id: header.id,
			flags: header.flags.format,
		}));
	}

	let mut body = try_vec![0; header.size as usize, options.allocation_limit];
	reader.read_exact(&mut body)?;

	let new_body = match transcode_frame_body(&body) {
		Transcoded::Rewritten(new_body) => new_body,
		Transcoded::Unchanged(reason) => {
			match reason {
				Unchanged::Undecodable => log::warn!(
					"Frame `{}` is not valid Shift_JIS, leaving it untouched",
					header.id
				),
				Unchanged::Empty | Unchanged::OtherEncoding(_) => {
					log::debug!("Frame `{}` left untouched: {reason:?}", header.id)
				},
			}

			writer.write_all(&header.to_bytes())?;
			writer.write_all(&body)?;
			return Ok(None);
		},
	};

	let Ok(new_size) = u32::try_from(new_body.len()) else {
		err!(TooMuchData);
	};

	log::debug!(
		"Transcoded frame `{}`: {} -> {new_size} bytes",
		header.id,
		header.size
	);

	let new_header = FrameHeader::new(header.id, new_size, header.flags);
	writer.write_all(&new_header.to_bytes())?;
	writer.write_all(&new_body)?;

	Ok(Some(i64::from(new_size) - i64::from(header.size)))
}
