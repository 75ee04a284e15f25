macro_rules! try_vec {
	($elem:expr; $size:expr, $limit:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size, $limit)? }};
}

// Shorthand for return Err(ConvertError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(ConvertError::new(ErrorKind::Variant))
// - err!(Variant(Value))   -> return Err(ConvertError::new(ErrorKind::Variant(Value)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::ConvertError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($($value:expr),+)) => {
		return Err(crate::error::ConvertError::new(
			crate::error::ErrorKind::$variant($($value),+),
		))
	};
}

pub(crate) use {err, try_vec};
