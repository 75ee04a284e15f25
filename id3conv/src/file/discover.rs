use crate::config::BatchOptions;
use crate::error::Result;

use std::fs;
use std::path::{Path, PathBuf};

/// Expand a user-provided path into the files to convert
///
/// * A file yields itself, regardless of its extension
/// * A directory yields its direct children whose extension matches
///   [`BatchOptions::extension`], sorted by name. Subdirectories are not descended into.
///
/// # Errors
///
/// `path` doesn't exist, or the directory can't be read
///
/// # Examples
///
/// ```rust,no_run
/// use id3conv::config::BatchOptions;
/// use id3conv::file::collect_inputs;
///
/// # fn main() -> id3conv::error::Result<()> {
/// let inputs = collect_inputs("Music/", &BatchOptions::new())?;
/// for input in inputs {
/// 	println!("{}", input.display());
/// }
/// # Ok(()) }
/// ```
pub fn collect_inputs(path: impl AsRef<Path>, options: &BatchOptions) -> Result<Vec<PathBuf>> {
	let path = path.as_ref();

	if !fs::metadata(path)?.is_dir() {
		return Ok(vec![path.to_path_buf()]);
	}

	let mut inputs = Vec::new();
	for entry in fs::read_dir(path)? {
		let entry_path = entry?.path();
		if entry_path.is_dir() {
			continue;
		}

		if has_extension(&entry_path, &options.extension) {
			inputs.push(entry_path);
		}
	}

	inputs.sort();

	log::debug!("Found {} files in {}", inputs.len(), path.display());
	Ok(inputs)
}

fn has_extension(path: &Path, extension: &str) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
