//! Provides parsers for board files. A board file lists the tiles row by row
//! as whitespace separated integers, optionally followed by a line reading
//! `END OF FILE`, after which everything is ignored.

use crate::parsers::{space_separated_list0, ParseResult, Span};
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, u8 as tile},
    combinator::{opt, rest},
    sequence::{terminated, tuple},
};

pub const END_OF_FILE_MARKER: &str = "END OF FILE";

/// The tiles listed in a board file, in row-major order. The tiles are not
/// validated here, see [`crate::search::Board::from_slice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFile {
    tiles: Vec<u8>,
}

impl BoardFile {
    pub fn new(tiles: Vec<u8>) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }
}

/// Parses the contents of a board file.
///
/// ## Example
/// ```
/// # use tilesearch::parsers::{parse_board_file, BoardFile, Span};
/// let input = "1 2 3\n4 0 5\n6 7 8\nEND OF FILE";
/// let (_, board_file) = parse_board_file(Span::new(input)).unwrap();
/// assert_eq!(board_file, BoardFile::new(vec![1, 2, 3, 4, 0, 5, 6, 7, 8]));
/// ```
pub fn parse_board_file<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, BoardFile> {
    let (remainder, tiles) = terminated(
        space_separated_list0(tile),
        tuple((multispace0, opt(tuple((tag(END_OF_FILE_MARKER), rest))))),
    )(input.into())?;
    Ok((remainder, BoardFile::new(tiles)))
}

impl crate::parsers::Parser for BoardFile {
    type Item = BoardFile;

    /// Parses a board file.
    ///
    /// ## See also
    /// See [`parse_board_file`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_board_file(input)
    }
}
