/// Options to control how a single tag is rewritten
///
/// # Examples
///
/// ```rust
/// use id3conv::config::ConvertOptions;
///
/// // I have files with gigantic titles, I'll double the allocation limit!
/// let options = ConvertOptions::new().allocation_limit(32 * 1024 * 1024);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ConvertOptions {
	pub(crate) allocation_limit: usize,
}

impl ConvertOptions {
	/// Default allocation limit for any single frame body
	pub const DEFAULT_ALLOCATION_LIMIT: usize = 16 * 1024 * 1024;

	/// Creates a new `ConvertOptions`, alias for `Default` implementation
	///
	/// See also: [`ConvertOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3conv::config::ConvertOptions;
	///
	/// let options = ConvertOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
		}
	}

	/// The maximum number of bytes to buffer for a single rewrite-eligible frame
	///
	/// Frames that are only copied through are streamed and never count against this limit.
	/// If an eligible frame exceeds it, the conversion fails with
	/// [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData).
	pub fn allocation_limit(mut self, allocation_limit: usize) -> Self {
		self.allocation_limit = allocation_limit;
		self
	}
}

impl Default for ConvertOptions {
	/// The default implementation for `ConvertOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ConvertOptions {
	/// 	allocation_limit: ConvertOptions::DEFAULT_ALLOCATION_LIMIT,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
