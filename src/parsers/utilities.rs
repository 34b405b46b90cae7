//! Utility parsers.

use nom::{
    character::complete::{char, multispace0, one_of},
    sequence::preceded,
};

use crate::parsers::{ParseError, ParseResult, Span};

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading whitespace, line breaks included, returning the output of
/// `inner`.
pub fn leading_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(multispace0, inner)
}

/// A combinator that takes a parser `inner` and produces a parser that
/// consumes surrounding parentheses or square brackets, returning the output
/// of `inner`. The closing bracket must match the opening one.
pub fn bracketed<'a, F, O>(mut inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    move |input: Span<'a>| {
        let (input, open) = one_of::<_, _, ParseError<'a>>("([")(input)?;
        let close = if open == '(' { ')' } else { ']' };
        let (input, value) = leading_whitespace(&mut inner)(input)?;
        let (input, _) = leading_whitespace(char(close))(input)?;
        Ok((input, value))
    }
}

/// A combinator that takes a parser `inner` and produces a parser that first
/// consumes a comma, with optional whitespace on either side.
pub fn after_comma<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(leading_whitespace(char(',')), leading_whitespace(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{parse_integer, UnwrapValue};

    #[test]
    fn bracketed_accepts_both_bracket_styles() {
        let mut parser = bracketed(parse_integer);
        assert!(parser(Span::new("(4)")).is_exactly(4));
        assert!(parser(Span::new("[ 4 ]")).is_exactly(4));
        assert!(parser(Span::new("( 4\n)")).is_exactly(4));
    }

    #[test]
    fn bracketed_requires_matching_close() {
        let mut parser = bracketed(parse_integer);
        assert!(parser(Span::new("(4]")).is_err());
        assert!(parser(Span::new("[4)")).is_err());
        assert!(parser(Span::new("4")).is_err());
    }

    #[test]
    fn after_comma_skips_whitespace() {
        let mut parser = after_comma(parse_integer);
        assert!(parser(Span::new(" , 7")).is_exactly(7));
        assert!(parser(Span::new(",7")).is_exactly(7));
        assert!(parser(Span::new("7")).is_err());
    }

    #[test]
    fn leading_whitespace_spans_lines() {
        let mut parser = leading_whitespace(parse_integer);
        assert!(parser(Span::new("\n\t 12")).is_exactly(12));
    }
}
