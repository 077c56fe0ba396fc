//! Validation helpers applied at the constructor boundary of value types.

use std::fmt::Display;

use crate::error::{ReversiError, Result};
use crate::range::Range;

pub fn against_out_of_range<T>(range: Range<T>, value: T, name: &'static str) -> Result<T>
where
    T: PartialOrd + Copy + Display + Into<i64>,
{
    if range.contains(value) {
        Ok(value)
    } else {
        Err(ReversiError::OutOfRange {
            name,
            value: value.into(),
            range: range.to_string(),
        })
    }
}

pub fn against_none<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(ReversiError::NullArgument(name))
}

/// Fails unless `value` is exactly `length` characters long.
pub fn against_length<'a>(length: usize, value: &'a str, name: &'static str) -> Result<&'a str> {
    let count = value.chars().count();
    if count == length {
        Ok(value)
    } else {
        Err(ReversiError::InvalidFormat(format!(
            "{name} must be {length} characters long, got {count} in {value:?}"
        )))
    }
}
