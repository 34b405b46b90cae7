//! Provides parsers for the numeric tuples of a maze file.

use crate::{
    parsed_types::{Coordinate, WallRect},
    parsers::{after_comma, bracketed, ParseResult, Span},
};
use nom::{
    character::complete::{char, digit1},
    combinator::{map, map_opt, opt, recognize},
    error::context,
    sequence::{pair, tuple},
};

/// Parses a decimal integer with an optional leading minus sign.
///
/// ## Example
/// ```
/// # use mazesolver::parsers::{parse_integer, preamble::*};
/// assert!(parse_integer("42").is_value(42));
/// assert!(parse_integer("-3").is_value(-3));
/// assert!(parse_integer("x").is_err());
/// assert!(parse_integer("99999999999999999999").is_err());
/// ```
pub fn parse_integer<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, i64> {
    context(
        "integer",
        map_opt(recognize(pair(opt(char('-')), digit1)), |digits: Span| {
            digits.fragment().parse::<i64>().ok()
        }),
    )(input.into())
}

/// Parses a pair such as `(3, 4)` or `[3,4]`.
///
/// ## Example
/// ```
/// # use mazesolver::parsers::{parse_coordinate, preamble::*};
/// assert!(parse_coordinate("(3, 4)").is_value((3, 4)));
/// assert!(parse_coordinate("[5,11]").is_value((5, 11)));
/// assert!(parse_coordinate("(3, 4, 5)").is_err());
/// ```
pub fn parse_coordinate<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Coordinate> {
    context(
        "pair",
        bracketed(pair(parse_integer, after_comma(parse_integer))),
    )(input.into())
}

/// Parses a wall rectangle `(x, y, width, height)`.
///
/// ## Example
/// ```
/// # use mazesolver::parsers::{parse_wall, preamble::*};
/// # use mazesolver::parsed_types::WallRect;
/// assert!(parse_wall("(2,0,2,2)").is_value(WallRect::new(2, 0, 2, 2)));
/// assert!(parse_wall("( 8, 0, 1, 2 )").is_value(WallRect::new(8, 0, 1, 2)));
/// assert!(parse_wall("(1, 2)").is_err());
/// ```
pub fn parse_wall<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, WallRect> {
    context(
        "wall",
        map(
            bracketed(tuple((
                parse_integer,
                after_comma(parse_integer),
                after_comma(parse_integer),
                after_comma(parse_integer),
            ))),
            |(x, y, width, height)| WallRect::new(x, y, width, height),
        ),
    )(input.into())
}

impl crate::parsers::Parser for WallRect {
    type Item = WallRect;

    /// Parses a wall rectangle.
    ///
    /// ## See also
    /// See [`parse_wall`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_wall(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{Parser, UnwrapValue};

    #[test]
    fn coordinate_leaves_following_input() {
        let (remainder, value) = parse_coordinate("(1,2) | (3,4)").unwrap();
        assert_eq!(value, (1, 2));
        assert_eq!(remainder.fragment(), &" | (3,4)");
    }

    #[test]
    fn negative_values_parse() {
        assert!(parse_coordinate("(-1, 0)").is_exactly((-1, 0)));
    }

    #[test]
    fn wall_from_str() {
        assert_eq!(WallRect::from_str("[0, 1, 2, 1]").unwrap(), WallRect::new(0, 1, 2, 1));
        assert!(WallRect::from_str("[0, 1, 2]").is_err());
    }
}
