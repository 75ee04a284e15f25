use crate::error::Result;

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Replace `original` with `converted`
///
/// This is a rename when possible. When it isn't (usually because the two paths are on
/// different devices), `converted` is copied next to `original` and renamed over it from
/// there. `converted` is only removed after the copy has been synced and its length
/// verified.
///
/// # Errors
///
/// Both the rename and the copy fallback failed. `original` and `converted` are left as
/// they were.
pub fn replace_file(converted: impl AsRef<Path>, original: impl AsRef<Path>) -> Result<()> {
	let (converted, original) = (converted.as_ref(), original.as_ref());

	match fs::rename(converted, original) {
		Ok(()) => return Ok(()),
		Err(e) => log::debug!(
			"Unable to rename {} to {}, falling back to copying: {e}",
			converted.display(),
			original.display()
		),
	}

	replace_by_copy(converted, original)
}

// Copies `converted` to a staging sibling, renames that over `original`, then removes
// `converted`. Nothing is removed until the staged copy is in place.
fn replace_by_copy(converted: &Path, original: &Path) -> Result<()> {
	let staging = staging_path(original);
	if let Err(e) = copy_verified(converted, &staging) {
		let _ = fs::remove_file(&staging);
		return Err(e);
	}

	if let Err(e) = fs::rename(&staging, original) {
		let _ = fs::remove_file(&staging);
		return Err(e.into());
	}

	// `original` is already replaced at this point, a leftover converted file isn't fatal
	if let Err(e) = fs::remove_file(converted) {
		log::warn!("Failed to remove {}: {e}", converted.display());
	}

	Ok(())
}

// A hidden sibling of `original`, so the final rename never crosses devices
fn staging_path(original: &Path) -> PathBuf {
	let mut name = OsString::from(".");
	name.push(original.file_name().unwrap_or_default());
	name.push(".id3conv");

	original.with_file_name(name)
}

fn copy_verified(from: &Path, to: &Path) -> Result<()> {
	let mut source = File::open(from)?;
	let expected_len = source.metadata()?.len();

	let mut dest = File::create(to)?;
	let copied = std::io::copy(&mut source, &mut dest)?;
	dest.sync_all()?;

	let written_len = dest.metadata()?.len();
	if copied != expected_len || written_len != expected_len {
		return Err(std::io::Error::other(format!(
			"Incomplete copy of {}: expected {expected_len} bytes, wrote {written_len}",
			from.display()
		))
		.into());
	}

	Ok(())
}
