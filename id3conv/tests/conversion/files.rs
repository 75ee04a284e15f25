use crate::util::{file, frame, sjis, text_body};

use id3conv::config::{BatchOptions, ConvertOptions};
use id3conv::error::ErrorKind;
use id3conv::file::{collect_inputs, convert_all, convert_file, convert_path, output_path_for};

use std::fs;
use std::path::Path;

fn legacy_song(title: &str) -> Vec<u8> {
	file(&[frame(b"TIT2", [0, 0], &text_body(0x00, &sjis(title)))], 8)
}

fn converted_song(title: &str) -> Vec<u8> {
	file(&[frame(b"TIT2", [0, 0], &text_body(0x03, title.as_bytes()))], 8)
}

fn is_empty_dir(path: &Path) -> bool {
	fs::read_dir(path).unwrap().next().is_none()
}

#[test_log::test]
fn convert_file_writes_output() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("in.mp3");
	let output = dir.path().join("out.mp3");
	fs::write(&input, legacy_song("星空")).unwrap();

	let summary = convert_file(&input, &output, ConvertOptions::new()).unwrap();

	assert_eq!(summary.frames_transcoded, 1);
	assert_eq!(fs::read(&output).unwrap(), converted_song("星空"));
	assert_eq!(fs::read(&input).unwrap(), legacy_song("星空"));
}

#[test_log::test]
fn convert_file_removes_partial_output() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("in.mp3");
	let output = dir.path().join("out.mp3");

	let mut contents = legacy_song("星空");
	contents[3] = 4;
	fs::write(&input, &contents).unwrap();

	let err = convert_file(&input, &output, ConvertOptions::new()).unwrap_err();

	assert!(matches!(err.kind(), ErrorKind::UnsupportedVersion(4, 0)));
	assert!(!output.exists());
	assert_eq!(fs::read(&input).unwrap(), contents);
}

#[test_log::test]
fn convert_file_rejects_same_path() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("in.mp3");
	fs::write(&input, legacy_song("星空")).unwrap();

	let err = convert_file(&input, &input, ConvertOptions::new()).unwrap_err();

	assert!(matches!(err.kind(), ErrorKind::Io(_)));
	assert_eq!(fs::read(&input).unwrap(), legacy_song("星空"));
}

#[test_log::test]
fn convert_path_replaces_original() {
	let music = tempfile::tempdir().unwrap();
	let staging = tempfile::tempdir().unwrap();
	let options = BatchOptions::new().temp_dir(staging.path());

	let song = music.path().join("song.mp3");
	fs::write(&song, legacy_song("花火")).unwrap();

	let summary = convert_path(&song, &options, false).unwrap();

	assert_eq!(summary.frames_transcoded, 1);
	assert_eq!(fs::read(&song).unwrap(), converted_song("花火"));
	assert!(is_empty_dir(staging.path()));
}

#[test_log::test]
fn convert_path_dry_run() {
	let music = tempfile::tempdir().unwrap();
	let staging = tempfile::tempdir().unwrap();
	let options = BatchOptions::new().temp_dir(staging.path());

	let song = music.path().join("song.mp3");
	fs::write(&song, legacy_song("花火")).unwrap();

	let summary = convert_path(&song, &options, true).unwrap();

	assert_eq!(summary.frames_transcoded, 1);
	assert_eq!(fs::read(&song).unwrap(), legacy_song("花火"));
	assert!(!output_path_for(&song, &options).unwrap().exists());
	assert!(is_empty_dir(staging.path()));
}

#[test_log::test]
fn convert_path_leaves_clean_files_alone() {
	let music = tempfile::tempdir().unwrap();
	let staging = tempfile::tempdir().unwrap();
	let options = BatchOptions::new().temp_dir(staging.path());

	let song = music.path().join("song.mp3");
	fs::write(&song, converted_song("花火")).unwrap();
	let modified = fs::metadata(&song).unwrap().modified().unwrap();

	let summary = convert_path(&song, &options, false).unwrap();

	assert!(summary.is_unchanged());
	assert_eq!(fs::read(&song).unwrap(), converted_song("花火"));
	assert_eq!(fs::metadata(&song).unwrap().modified().unwrap(), modified);
	assert!(is_empty_dir(staging.path()));
}

#[test_log::test]
fn batch_continues_after_failure() {
	let music = tempfile::tempdir().unwrap();
	let staging = tempfile::tempdir().unwrap();
	let options = BatchOptions::new().temp_dir(staging.path());

	let first = music.path().join("01.mp3");
	let broken = music.path().join("02.mp3");
	let third = music.path().join("03.mp3");

	fs::write(&first, legacy_song("一曲目")).unwrap();
	fs::write(&broken, b"not an mp3 file").unwrap();
	fs::write(&third, legacy_song("三曲目")).unwrap();

	let inputs = collect_inputs(music.path(), &options).unwrap();
	assert_eq!(inputs, [first.clone(), broken.clone(), third.clone()]);

	let report = convert_all(&inputs, &options, false);

	assert!(!report.is_success());
	assert_eq!(report.converted().len(), 2);
	assert_eq!(report.failed().len(), 1);

	let (failed_path, err) = &report.failed()[0];
	assert_eq!(failed_path, &broken);
	assert!(matches!(err.kind(), ErrorKind::InvalidSignature));

	assert_eq!(fs::read(&first).unwrap(), converted_song("一曲目"));
	assert_eq!(fs::read(&broken).unwrap(), b"not an mp3 file");
	assert_eq!(fs::read(&third).unwrap(), converted_song("三曲目"));
	assert!(is_empty_dir(staging.path()));
}

#[test_log::test]
fn missing_input_is_reported() {
	let music = tempfile::tempdir().unwrap();
	let staging = tempfile::tempdir().unwrap();
	let options = BatchOptions::new().temp_dir(staging.path());

	let missing = music.path().join("missing.mp3");
	let report = convert_all([&missing], &options, false);

	assert_eq!(report.failed().len(), 1);
	assert!(matches!(report.failed()[0].1.kind(), ErrorKind::Io(_)));
	assert!(is_empty_dir(staging.path()));
}
