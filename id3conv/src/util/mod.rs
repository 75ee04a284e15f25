pub(crate) mod alloc;
pub mod text;
