//! Provides parsers for whole maze files.

use crate::{
    parsed_types::{Coordinate, MazeDescription},
    parsers::{leading_whitespace, parse_coordinate, parse_wall, ParseResult, Span},
};
use nom::{
    character::complete::{char, multispace0},
    combinator::{all_consuming, map},
    error::context,
    multi::{many0, separated_list1},
    sequence::{terminated, tuple},
};

/// Parses the pipe separated goal list, i.e. `(r1, c1) | (r2, c2) | ...`.
///
/// ## Example
/// ```
/// # use mazesolver::parsers::{parse_goals, preamble::*};
/// assert!(parse_goals("(0, 5) | (4,1)").is_value(vec![(0, 5), (4, 1)]));
/// assert!(parse_goals("[2,2]").is_value(vec![(2, 2)]));
/// assert!(parse_goals("").is_err());
/// ```
pub fn parse_goals<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Coordinate>> {
    context(
        "goals",
        separated_list1(
            leading_whitespace(char('|')),
            leading_whitespace(parse_coordinate),
        ),
    )(input.into())
}

/// Parses a complete maze file: dimensions, start cell, goals, then any
/// number of wall rectangles. All input must be consumed.
///
/// ## Example
/// ```
/// # use mazesolver::parsers::{parse_maze, preamble::*};
/// # use mazesolver::parsed_types::{MazeDescription, WallRect};
/// let input = r#"[2,3]
/// (0,0)
/// (0,2) | (1,2)
/// (1,0,1,2)
/// "#;
/// assert!(parse_maze(input).is_value(MazeDescription::new(
///     (2, 3),
///     (0, 0),
///     vec![(0, 2), (1, 2)],
///     vec![WallRect::new(1, 0, 1, 2)],
/// )));
/// ```
pub fn parse_maze<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, MazeDescription> {
    map(
        all_consuming(terminated(
            tuple((
                context("dimensions", leading_whitespace(parse_coordinate)),
                context("start", leading_whitespace(parse_coordinate)),
                parse_goals,
                many0(leading_whitespace(parse_wall)),
            )),
            multispace0,
        )),
        |(dimensions, start, goals, walls)| MazeDescription::new(dimensions, start, goals, walls),
    )(input.into())
}

impl crate::parsers::Parser for MazeDescription {
    type Item = MazeDescription;

    /// Parses a maze file.
    ///
    /// ## See also
    /// See [`parse_maze`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_maze(input)
    }
}
