//! A task is one puzzle instance: the board to start from and the board to
//! reach.

use crate::error::{Error, Result};
use crate::parsers::{describe_error, BoardFile, Parser};
use crate::search::Board;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    start: Board,
    goal: Board,
}

impl Task {
    pub fn new(start: Board, goal: Board) -> Self {
        Self { start, goal }
    }

    pub fn from_path(start_path: &Path, goal_path: &Path) -> Result<Self> {
        Ok(Self::new(
            Self::board_from_path(start_path)?,
            Self::board_from_path(goal_path)?,
        ))
    }

    pub fn from_text(start_text: &str, goal_text: &str) -> Result<Self> {
        Ok(Self::new(
            Self::board_from_text(start_text)?,
            Self::board_from_text(goal_text)?,
        ))
    }

    /// Parse and validate the contents of a board file.
    pub fn board_from_text(text: &str) -> Result<Board> {
        let board_file = BoardFile::from_str(text).map_err(|e| Error::Parse {
            path: "<text>".into(),
            message: describe_error(&e),
        })?;
        Ok(Board::from_slice(board_file.tiles())?)
    }

    pub fn board_from_path(path: &Path) -> Result<Board> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let board_file = BoardFile::from_str(&text).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: describe_error(&e),
        })?;
        Board::from_slice(board_file.tiles()).map_err(|source| Error::InvalidBoardFile {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn start(&self) -> &Board {
        &self.start
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }
}
