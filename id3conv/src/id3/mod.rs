//! ID3 specific items
//!
//! Only ID3v2.3 tags are understood. See [`v2`] for the supported subset.

pub mod v2;
