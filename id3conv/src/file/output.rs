use crate::config::BatchOptions;
use crate::error::Result;

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Derive the staging path for a converted copy of `input`
///
/// The absolute path of `input` is flattened into a single file name by replacing every
/// separator with `!`, and placed in [`BatchOptions::temp_dir`]. Distinct inputs always get
/// distinct staging paths.
///
/// # Errors
///
/// The current directory is needed to make `input` absolute, and it can't be determined
///
/// # Examples
///
/// ```rust
/// use id3conv::config::BatchOptions;
/// use id3conv::file::output_path_for;
///
/// # fn main() -> id3conv::error::Result<()> {
/// # #[cfg(unix)] {
/// let options = BatchOptions::new().temp_dir("/tmp");
/// let output = output_path_for("/home/user/Music/song.mp3", &options)?;
///
/// assert_eq!(output.to_str(), Some("/tmp/!home!user!Music!song.mp3"));
/// # }
/// # Ok(()) }
/// ```
pub fn output_path_for(input: impl AsRef<Path>, options: &BatchOptions) -> Result<PathBuf> {
	let absolute = std::path::absolute(input.as_ref())?;

	let mut name = OsString::new();
	for component in absolute.components() {
		match component {
			Component::Normal(part) => {
				name.push("!");
				name.push(part);
			},
			Component::ParentDir => name.push("!.."),
			// Drive letters and roots aren't part of the name
			Component::Prefix(_) | Component::RootDir | Component::CurDir => {},
		}
	}

	Ok(options.staging_dir().join(name))
}
