#![no_main]

use std::io::Cursor;

use id3conv::config::ConvertOptions;
use id3conv::id3::v2::rewrite_tag;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let options = ConvertOptions::new().allocation_limit(1024 * 1024);

	let mut output = Cursor::new(Vec::new());
	let Ok(summary) = rewrite_tag(&mut &data[..], &mut output, options) else {
		return;
	};

	let output = output.into_inner();
	assert_eq!(
		output.len() as i64 - data.len() as i64,
		summary.size_delta()
	);
});
