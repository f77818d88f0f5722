mod board_file;
mod utilities;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    /// Parse a string slice into the desired type. Fails unless the whole
    /// input is consumed.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError<'_>>> {
        let (remainder, value) = Self::parse(input)?;
        if !remainder.is_empty() {
            return Err(nom::Err::Error(ParseError::new(
                remainder,
                nom::error::ErrorKind::Eof,
            )));
        }
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom::error::Error<Span<'a>>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Describe a parse error by its position, e.g. `line 2, column 5: Digit`.
pub fn describe_error(error: &nom::Err<ParseError<'_>>) -> String {
    match error {
        nom::Err::Incomplete(_) => "incomplete input".to_string(),
        nom::Err::Error(e) | nom::Err::Failure(e) => format!(
            "line {}, column {}: {:?}",
            e.input.location_line(),
            e.input.get_utf8_column(),
            e.code
        ),
    }
}

// Parsers
pub use board_file::{parse_board_file, BoardFile, END_OF_FILE_MARKER};
pub use utilities::{leading_whitespace, space_separated_list0};
