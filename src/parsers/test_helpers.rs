use crate::parsers::Span;
use nom::IResult;

/// Assertion helpers for parser results, used by tests and doc examples.
pub trait UnwrapValue<T> {
    /// Whether parsing succeeded with `value`, regardless of any remaining
    /// input.
    fn is_value(&self, value: T) -> bool;

    /// Whether parsing succeeded with `value` and consumed all input.
    fn is_exactly(&self, value: T) -> bool;
}

impl<'a, T: PartialEq, E> UnwrapValue<T> for IResult<Span<'a>, T, E> {
    fn is_value(&self, value: T) -> bool {
        matches!(self, Ok((_, parsed)) if *parsed == value)
    }

    fn is_exactly(&self, value: T) -> bool {
        matches!(self, Ok((remainder, parsed)) if remainder.is_empty() && *parsed == value)
    }
}
