//! Converts the legacy Shift_JIS text of ID3v2.3 tags to UTF-8, in place
//!
//! Each path may be a file, or a directory whose `.mp3` files are converted.

use id3conv::config::{BatchOptions, ConvertOptions};
use id3conv::file::{collect_inputs, convert_all};

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "id3conv", about = "Convert Shift_JIS ID3v2.3 tags to UTF-8")]
struct Opt {
	/// The directory converted files are staged in [default: the system temp directory]
	#[structopt(long, parse(from_os_str))]
	temp_dir: Option<PathBuf>,

	/// The largest frame body (in bytes) that will be read into memory
	#[structopt(long, default_value = "16777216")]
	allocation_limit: usize,

	/// Convert and report, without replacing any files
	#[structopt(long)]
	dry_run: bool,

	/// Files, or directories of `.mp3` files
	#[structopt(parse(from_os_str), required = true)]
	paths: Vec<PathBuf>,
}

fn main() {
	env_logger::init();

	let opt = Opt::from_args();

	let mut options = BatchOptions::new()
		.convert_options(ConvertOptions::new().allocation_limit(opt.allocation_limit));
	if let Some(temp_dir) = opt.temp_dir {
		options = options.temp_dir(temp_dir);
	}

	let mut inputs = Vec::new();
	for path in &opt.paths {
		match collect_inputs(path, &options) {
			Ok(found) => inputs.extend(found),
			Err(e) => {
				eprintln!("ERROR: Unable to read {}: {e}", path.display());
				std::process::exit(1);
			},
		}
	}

	if opt.dry_run {
		log::info!("Dry run, no files will be replaced");
	}

	let report = convert_all(&inputs, &options, opt.dry_run);

	for (path, summary) in report.converted() {
		if summary.is_unchanged() {
			continue;
		}

		println!(
			"{}: {} frame(s) transcoded",
			path.display(),
			summary.frames_transcoded
		);
	}

	for (path, e) in report.failed() {
		eprintln!("Error converting {}: {e}", path.display());
	}

	if !report.is_success() {
		std::process::exit(2);
	}
}
