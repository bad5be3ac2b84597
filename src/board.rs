use crate::grid::{Premium, STANDARD_SIZE};
use crate::tiles::Occupant;
use crate::Error;
use std::convert::TryFrom;
use std::fmt;

/// A square on the board: its premium flags and the tile on it, if any.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub premium: Premium,
    pub occupant: Option<Occupant>,
}

impl Cell {
    /// An empty square without bonus
    pub const EMPTY: Cell = Cell {
        premium: Premium::NONE,
        occupant: None,
    };

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Display the board state as `height` lines of `width` squares.
/// Empty squares show as ".", tiles placed with a blank in lowercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self.to_strings().join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// A rectangular grid of [`Cell`]s, stored row by row (index `y * width + x`).
///
/// The size is fixed at creation. Coordinates are `x` (column, `0..width`)
/// and `y` (row, `0..height`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of `width` x `height` empty squares without any premium.
    ///
    /// ## Examples
    ///```
    /// use wordgrid_solver::Board;
    ///
    /// let board = Board::new(11, 9);
    /// assert_eq!(board.size(), (11, 9));
    /// assert!(board.cell(10, 8).is_some());
    /// assert!(board.cell(11, 0).is_none());
    ///```
    #[must_use]
    pub fn new(width: usize, height: usize) -> Board {
        Board {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    /// Create an empty 15x15 board with the standard premium layout.
    #[must_use]
    pub fn standard() -> Board {
        let mut board = Board::new(STANDARD_SIZE, STANDARD_SIZE);
        board.standardize();
        board
    }

    /// Recompute the premium flags of every cell with the standard layout.
    /// Tiles on the board are left in place.
    pub fn standardize(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = y * self.width + x;
                self.cells[i].premium = Premium::standard(x, y);
            }
        }
    }

    /// Apply the standard premium layout, and return the modified board.
    #[must_use]
    pub fn with_standard_premiums(mut self) -> Board {
        self.standardize();
        self
    }

    /// Return (`width`, `height`)
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Get the cell at `x`, `y`, or `None` if outside the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get the mutable cell at `x`, `y`, or `None` if outside the board.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        match self.index(x, y) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// Return the tile at `x`, `y`, or `None` if the cell is empty or outside the board.
    pub fn occupant(&self, x: usize, y: usize) -> Option<Occupant> {
        self.cell(x, y).and_then(|cell| cell.occupant)
    }

    /// Check if cell at `x`, `y` is occupied. Cells outside the board are never occupied.
    ///
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Board, Error};
    /// let board = Board::new(3, 1).with_state_from_strings(&["A.b"])?;
    /// assert!(board.is_occupied(0, 0));
    /// assert!(!board.is_occupied(1, 0));
    /// assert!(board.is_occupied(2, 0));
    /// assert!(!board.is_occupied(3, 0));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.occupant(x, y).is_some()
    }

    /// Check if no tile has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Put `occupant` on cell `x`, `y`, or clear the cell with `None`.
    /// ## Errors
    /// If `x`, `y` is outside the board.
    pub fn set_occupant(
        &mut self,
        x: usize,
        y: usize,
        occupant: Option<Occupant>,
    ) -> Result<(), Error> {
        let cell = self.cell_mut(x, y).ok_or(Error::OutOfBounds { x, y })?;
        cell.occupant = occupant;
        Ok(())
    }

    /// Set the premium flags of cell `x`, `y`.
    /// ## Errors
    /// If `x`, `y` is outside the board.
    pub fn set_premium(&mut self, x: usize, y: usize, premium: Premium) -> Result<(), Error> {
        let cell = self.cell_mut(x, y).ok_or(Error::OutOfBounds { x, y })?;
        cell.premium = premium;
        Ok(())
    }

    /// The center column(s): a single one for an odd width, the two middle ones for an even width.
    pub fn center_columns(&self) -> [usize; 2] {
        middle(self.width)
    }

    /// The center row(s): a single one for an odd height, the two middle ones for an even height.
    pub fn center_rows(&self) -> [usize; 2] {
        middle(self.height)
    }

    /// Parse board state from a list of strings.
    /// The list must contain `height` rows of `width` characters:
    /// `.` or ` ` for an empty square, `A`..`Z` for a tile, `a`..`z` for a tile placed with a blank.
    /// Premiums are not changed.
    /// ## Errors
    /// If the list of strings has wrong dimensions or contains something else than letters and empty squares.
    pub fn set_state_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        if rows.len() != self.height {
            return Err(Error::InvalidRowCount {
                expected: self.height,
                found: rows.len(),
            });
        }
        let mut occupants = Vec::with_capacity(self.cells.len());
        for row in rows {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != self.width {
                return Err(Error::InvalidRowLength {
                    row: String::from(row),
                    expected: self.width,
                    found: len,
                });
            }
            for ch in row.chars() {
                let occupant = match ch {
                    '.' | ' ' => None,
                    _ => Some(Occupant::try_from(ch)?),
                };
                occupants.push(occupant);
            }
        }
        for (cell, occupant) in self.cells.iter_mut().zip(occupants) {
            cell.occupant = occupant;
        }
        Ok(())
    }

    /// Set board state from list of strings, and return the modified board.
    /// See [`set_state_from_strings`](Board::set_state_from_strings).
    ///
    /// ## Examples
    /// ```
    /// use wordgrid_solver::Board;
    /// let state = &[
    /// ".....",
    /// ".CAT.",
    /// "..x..",
    /// ];
    /// let board = Board::new(5, 3).with_state_from_strings(state).unwrap();
    /// assert_eq!(board.to_string(), state.join("\n"));
    /// ```
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Get board state as a vec of `height` strings
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.occupant(x, y).map_or('.', Occupant::to_char))
                    .collect::<String>()
            })
            .collect()
    }

    /// Get the premium layout as a vec of `height` strings of space separated squares.
    pub fn premium_strings(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[y * self.width + x].premium.to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }
}

fn middle(n: usize) -> [usize; 2] {
    let n = n.max(1);
    [(n - 1) / 2, n / 2]
}
