//! Various configuration options to control id3conv

mod batch_options;
mod convert_options;

pub use batch_options::BatchOptions;
pub use convert_options::ConvertOptions;
