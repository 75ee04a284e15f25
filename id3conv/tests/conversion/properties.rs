use crate::util::{declared_size, file, frame, rewrite, sjis, text_body};

use proptest::prelude::*;

const ELIGIBLE: [&[u8; 4]; 3] = [b"TIT2", b"TALB", b"TPE1"];
const INELIGIBLE: [&[u8; 4]; 4] = [b"TIT1", b"TPE2", b"COMM", b"TCON"];

// Characters that all exist in Shift_JIS
fn text() -> impl Strategy<Value = String> {
	"[a-zA-Z0-9 ぁ-んァ-ン日本語漢字音楽歌]{0,24}"
}

fn eligible_frame() -> impl Strategy<Value = Vec<u8>> {
	(prop::sample::select(ELIGIBLE.to_vec()), 0u8..4, text()).prop_map(|(id, encoding, text)| {
		let raw = match encoding {
			0 => sjis(&text),
			_ => text.into_bytes(),
		};
		frame(id, [0, 0], &text_body(encoding, &raw))
	})
}

fn ineligible_frame() -> impl Strategy<Value = Vec<u8>> {
	(
		prop::sample::select(INELIGIBLE.to_vec()),
		any::<[u8; 2]>(),
		prop::collection::vec(any::<u8>(), 0..32),
	)
		.prop_map(|(id, flags, body)| frame(id, flags, &body))
}

fn tag_file() -> impl Strategy<Value = Vec<u8>> {
	(
		prop::collection::vec(prop_oneof![eligible_frame(), ineligible_frame()], 0..8),
		0usize..64,
	)
		.prop_map(|(frames, padding)| file(&frames, padding))
}

proptest! {
	#[test]
	fn conversion_is_idempotent(input in tag_file()) {
		let (once, _) = rewrite(&input).unwrap();
		let (twice, summary) = rewrite(&once).unwrap();

		prop_assert_eq!(&twice, &once);
		prop_assert!(summary.is_unchanged());
	}

	#[test]
	fn size_field_matches_summary(input in tag_file()) {
		let (output, summary) = rewrite(&input).unwrap();

		prop_assert_eq!(summary.original_size, declared_size(&input));
		prop_assert_eq!(declared_size(&output), summary.final_size);
		prop_assert_eq!(output.len() as i64 - input.len() as i64, summary.size_delta());
	}

	#[test]
	fn ineligible_frames_round_trip(
		frames in prop::collection::vec(ineligible_frame(), 0..8),
		padding in 0usize..64,
	) {
		let input = file(&frames, padding);
		let (output, summary) = rewrite(&input).unwrap();

		prop_assert_eq!(output, input);
		prop_assert_eq!(summary.frames_copied, frames.len());
	}

	#[test]
	fn unicode_eligible_frames_round_trip(
		texts in prop::collection::vec((prop::sample::select(ELIGIBLE.to_vec()), 1u8..4, text()), 0..6),
	) {
		let frames = texts
			.into_iter()
			.map(|(id, encoding, text)| frame(id, [0, 0], &text_body(encoding, text.as_bytes())))
			.collect::<Vec<_>>();

		let input = file(&frames, 0);
		let (output, _) = rewrite(&input).unwrap();

		prop_assert_eq!(output, input);
	}
}
