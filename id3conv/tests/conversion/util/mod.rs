use id3conv::config::ConvertOptions;
use id3conv::error::Result;
use id3conv::id3::v2::util::synchsafe;
use id3conv::id3::v2::{RewriteSummary, rewrite_tag};

use std::io::Cursor;

use encoding_rs::SHIFT_JIS;

/// A fake MPEG frame header followed by some data, stands in for the audio
pub const AUDIO: &[u8] = &[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x0F, 0xF0, 0x00, 0x00, 0x69];

/// Build a frame with the given ID, flags, and body
pub fn frame(id: &[u8; 4], flags: [u8; 2], body: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend_from_slice(&(body.len() as u32).to_be_bytes());
	frame.extend_from_slice(&flags);
	frame.extend_from_slice(body);
	frame
}

/// Build a text frame body with the given encoding byte and raw text
pub fn text_body(encoding: u8, text: &[u8]) -> Vec<u8> {
	let mut body = vec![encoding];
	body.extend_from_slice(text);
	body
}

/// Encode `text` as Shift_JIS
pub fn sjis(text: &str) -> Vec<u8> {
	let (encoded, _, unmappable) = SHIFT_JIS.encode(text);
	assert!(!unmappable, "{text:?} can't be represented in Shift_JIS");
	encoded.into_owned()
}

/// Build an ID3v2.3 tag (header, frames, and `padding` zero bytes) followed by [`AUDIO`]
pub fn file(frames: &[Vec<u8>], padding: usize) -> Vec<u8> {
	let frames = frames.concat();
	let size = (frames.len() + padding) as u32;

	let mut file = b"ID3\x03\x00\x00".to_vec();
	file.extend_from_slice(&synchsafe::encode(size).unwrap());
	file.extend_from_slice(&frames);
	file.resize(file.len() + padding, 0);
	file.extend_from_slice(AUDIO);
	file
}

/// The synchsafe tag size stored in the header of `file`
pub fn declared_size(file: &[u8]) -> u32 {
	synchsafe::decode([file[6], file[7], file[8], file[9]])
}

/// Run the rewriter over an in-memory file
pub fn rewrite(input: &[u8]) -> Result<(Vec<u8>, RewriteSummary)> {
	let mut output = Cursor::new(Vec::new());
	let summary = rewrite_tag(&mut &input[..], &mut output, ConvertOptions::new())?;
	Ok((output.into_inner(), summary))
}
