//! The JSON form of a board, used to send it to a worker.
//!
//! The board is an array of `width` columns, each an array of `height` cells:
//! `{"dl":false,"dw":true,"tl":false,"tw":false,"occupant":["C",true]}`,
//! with `"occupant":null` for an empty square.
use crate::grid::Premium;
use crate::tiles::{Letter, Occupant};
use crate::{Board, Cell, Error};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CellRecord {
    dl: bool,
    dw: bool,
    tl: bool,
    tw: bool,
    occupant: Option<(String, bool)>,
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        CellRecord {
            dl: cell.premium.dl,
            dw: cell.premium.dw,
            tl: cell.premium.tl,
            tw: cell.premium.tw,
            occupant: cell
                .occupant
                .map(|o| (o.letter.to_string(), o.significant)),
        }
    }
}

impl TryFrom<&CellRecord> for Cell {
    type Error = Error;
    fn try_from(record: &CellRecord) -> Result<Self, Self::Error> {
        let occupant = match &record.occupant {
            Some((text, significant)) => {
                let mut chars = text.chars();
                let letter = match (chars.next(), chars.next()) {
                    (Some(ch), None) => Letter::try_from(ch)?,
                    _ => return Err(Error::InvalidWord(text.clone())),
                };
                Some(Occupant::new(letter, *significant))
            }
            None => None,
        };
        Ok(Cell {
            premium: Premium {
                dl: record.dl,
                dw: record.dw,
                tl: record.tl,
                tw: record.tw,
            },
            occupant,
        })
    }
}

impl Board {
    /// Encode the board, premiums and tiles, as transfer JSON.
    ///
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Board, Error};
    /// let board = Board::new(2, 1).with_state_from_strings(&["Ab"])?;
    /// let text = board.to_transferable()?;
    /// assert!(text.starts_with(r#"[[{"dl":false,"dw":false,"tl":false,"tw":false,"occupant":["A",true]}]"#));
    /// assert_eq!(Board::from_transferable(&text)?, board);
    /// # Ok::<(), Error>(())
    /// ```
    /// ## Errors
    /// If serialization fails.
    pub fn to_transferable(&self) -> Result<String, Error> {
        let (width, height) = self.size();
        let columns: Vec<Vec<CellRecord>> = (0..width)
            .map(|x| {
                (0..height)
                    .filter_map(|y| self.cell(x, y))
                    .map(CellRecord::from)
                    .collect()
            })
            .collect();
        Ok(serde_json::to_string(&columns)?)
    }

    /// Decode a board from transfer JSON.
    /// The width is the number of columns, the height the length of the first column.
    /// ## Errors
    /// If `text` is not valid transfer JSON, a column has a different length than the
    /// first one, or an occupant is not a single letter.
    pub fn from_transferable(text: &str) -> Result<Board, Error> {
        let columns: Vec<Vec<CellRecord>> = serde_json::from_str(text)?;
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        let mut board = Board::new(width, height);
        for (x, column) in columns.iter().enumerate() {
            if column.len() != height {
                return Err(Error::InconsistentBoard {
                    column: x,
                    expected: height,
                    found: column.len(),
                });
            }
            for (y, record) in column.iter().enumerate() {
                let cell = board.cell_mut(x, y).ok_or(Error::OutOfBounds { x, y })?;
                *cell = Cell::try_from(record)?;
            }
        }
        Ok(board)
    }
}
