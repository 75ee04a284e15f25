use super::{output_path_for, replace_file};
use crate::config::{BatchOptions, ConvertOptions};
use crate::error::{ConvertError, Result};
use crate::id3::v2::{RewriteSummary, rewrite_tag};

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Convert the file at `input`, writing the result to `output`
///
/// `input` is only ever read. If the conversion fails, `output` is removed.
///
/// # Errors
///
/// * `input` and `output` refer to the same path
/// * `input` can't be opened, or `output` can't be created
/// * See [`rewrite_tag`]
pub fn convert_file(
	input: impl AsRef<Path>,
	output: impl AsRef<Path>,
	options: ConvertOptions,
) -> Result<RewriteSummary> {
	let (input, output) = (input.as_ref(), output.as_ref());

	if std::path::absolute(input)? == std::path::absolute(output)? {
		return Err(std::io::Error::new(
			std::io::ErrorKind::InvalidInput,
			"the output path must differ from the input path",
		)
		.into());
	}

	let mut reader = BufReader::new(File::open(input)?);
	let mut writer = BufWriter::new(File::create(output)?);

	let result = rewrite_tag(&mut reader, &mut writer, options).and_then(|summary| {
		let file = writer.into_inner().map_err(|e| e.into_error())?;
		file.sync_all()?;
		Ok(summary)
	});

	if result.is_err() {
		if let Err(e) = fs::remove_file(output) {
			log::warn!("Failed to remove partial output {}: {e}", output.display());
		}
	}

	result
}

/// Convert the file at `input` in place
///
/// The converted file is staged at [`output_path_for`] and then swapped in with
/// [`replace_file`]. If nothing was transcoded, the original is left untouched.
///
/// With `dry_run`, the staged file is removed instead of replacing the original. It is also
/// removed if the original can't be replaced.
///
/// # Errors
///
/// See [`convert_file`] and [`replace_file`]
pub fn convert_path(
	input: impl AsRef<Path>,
	options: &BatchOptions,
	dry_run: bool,
) -> Result<RewriteSummary> {
	let input = input.as_ref();
	let output = output_path_for(input, options)?;

	log::debug!("Converting {} via {}", input.display(), output.display());
	let summary = convert_file(input, &output, options.convert_options)?;

	if dry_run || summary.is_unchanged() {
		fs::remove_file(&output)?;
		return Ok(summary);
	}

	swap_in(&output, input)?;
	Ok(summary)
}

// Replaces `input` with the staged `output`, which is removed if that fails
fn swap_in(output: &Path, input: &Path) -> Result<()> {
	let result = replace_file(output, input);

	if result.is_err() {
		if let Err(e) = fs::remove_file(output) {
			log::warn!("Failed to remove staged output {}: {e}", output.display());
		}
	}

	result
}

/// The outcome of [`convert_all`]
#[derive(Debug, Default)]
pub struct BatchReport {
	converted: Vec<(PathBuf, RewriteSummary)>,
	failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
	/// The files that were converted (or needed no conversion)
	pub fn converted(&self) -> &[(PathBuf, RewriteSummary)] {
		&self.converted
	}

	/// The files that failed, and why
	pub fn failed(&self) -> &[(PathBuf, ConvertError)] {
		&self.failed
	}

	/// Whether every file was converted
	pub fn is_success(&self) -> bool {
		self.failed.is_empty()
	}
}

/// Convert every file in `inputs` with [`convert_path`]
///
/// Files are converted independently, a failure is recorded in the [`BatchReport`] and the
/// batch moves on.
pub fn convert_all<I, P>(inputs: I, options: &BatchOptions, dry_run: bool) -> BatchReport
where
	I: IntoIterator<Item = P>,
	P: AsRef<Path>,
{
	let mut report = BatchReport::default();

	for input in inputs {
		let input = input.as_ref();
		match convert_path(input, options, dry_run) {
			Ok(summary) => {
				log::info!(
					"Converted {} ({} frames transcoded, {:+} bytes)",
					input.display(),
					summary.frames_transcoded,
					summary.size_delta()
				);
				report.converted.push((input.to_path_buf(), summary));
			},
			Err(e) => {
				log::info!("Failed to convert {}: {e}", input.display());
				report.failed.push((input.to_path_buf(), e));
			},
		}
	}

	report
}
