use winnow::ascii::{digit0, float, multispace0};
use winnow::combinator::{alt, delimited, opt};
use winnow::token::{literal, one_of};
use winnow::{ModalResult, Parser};

// Sign parser, true for a leading '-'
pub fn parse_sign(input: &mut &str) -> ModalResult<bool> {
    opt(one_of(['+', '-']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)
}

/// Digits of an integer literal: a lone `0`, or digits without a leading zero
pub fn parse_unsigned_digits<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    alt(((one_of('1'..='9'), digit0).take(), literal("0"))).parse_next(input)
}

/// Integer literal surrounded by optional whitespace, e.g. `" -42 "`
pub fn parse_integer_literal<'s>(input: &mut &'s str) -> ModalResult<(bool, &'s str)> {
    delimited(
        multispace0,
        (parse_sign, parse_unsigned_digits),
        multispace0,
    )
    .parse_next(input)
}

/// Float literal surrounded by optional whitespace, e.g. `" 2.25 "` or `"1e-3"`
pub fn parse_decimal_literal(input: &mut &str) -> ModalResult<f64> {
    delimited(multispace0, float, multispace0).parse_next(input)
}
