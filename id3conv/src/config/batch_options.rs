use super::ConvertOptions;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Options to control how files are discovered, staged, and replaced
///
/// # Examples
///
/// ```rust
/// use id3conv::config::{BatchOptions, ConvertOptions};
///
/// let options = BatchOptions::new()
/// 	.temp_dir("/var/tmp")
/// 	.convert_options(ConvertOptions::new().allocation_limit(1024 * 1024));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct BatchOptions {
	pub(crate) temp_dir: Option<PathBuf>,
	pub(crate) extension: Cow<'static, str>,
	pub(crate) convert_options: ConvertOptions,
}

impl BatchOptions {
	/// Default extension collected when a directory is given as input
	pub const DEFAULT_EXTENSION: &'static str = "mp3";

	/// Creates a new `BatchOptions`, alias for `Default` implementation
	///
	/// See also: [`BatchOptions::default`]
	#[must_use]
	pub const fn new() -> Self {
		Self {
			temp_dir: None,
			extension: Cow::Borrowed(Self::DEFAULT_EXTENSION),
			convert_options: ConvertOptions::new(),
		}
	}

	/// The directory converted files are staged in before replacing the originals
	///
	/// If unset, [`std::env::temp_dir`] is used.
	pub fn temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
		self.temp_dir = Some(temp_dir.into());
		self
	}

	/// The file extension (without the leading `.`) to collect from directories
	///
	/// This is compared ASCII case-insensitively.
	pub fn extension(mut self, extension: impl Into<Cow<'static, str>>) -> Self {
		self.extension = extension.into();
		self
	}

	/// The [`ConvertOptions`] used for every file
	pub fn convert_options(mut self, convert_options: ConvertOptions) -> Self {
		self.convert_options = convert_options;
		self
	}

	pub(crate) fn staging_dir(&self) -> Cow<'_, Path> {
		match &self.temp_dir {
			Some(dir) => Cow::Borrowed(dir.as_path()),
			None => Cow::Owned(std::env::temp_dir()),
		}
	}
}

impl Default for BatchOptions {
	/// The default implementation for `BatchOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// BatchOptions {
	/// 	temp_dir: None,
	/// 	extension: Cow::Borrowed("mp3"),
	/// 	convert_options: ConvertOptions::default(),
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
