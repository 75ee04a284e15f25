#![allow(missing_docs)]

mod files;
mod properties;
mod util;
