//! Reading runs of adjacent tiles on the board.
//!
//! A scan starts next to a square and moves away from it, one square at a time,
//! until it reaches an empty square or the edge of the board. The start square itself
//! is never part of the result.
use crate::tiles::DIM;
use crate::{Board, Letter, Occupant};
use tinyvec::TinyVec;

/// Letters of consecutive occupied squares, in reading order.
pub type Run = TinyVec<[Letter; DIM]>;

/// Direction of a word on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// left to right
    Horizontal,
    /// top to bottom
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    pub fn from_horizontal(horizontal: bool) -> Orientation {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    /// The crossing orientation
    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Step towards the start of a word
    pub fn backward(self) -> Step {
        match self {
            Orientation::Horizontal => Step::Left,
            Orientation::Vertical => Step::Up,
        }
    }

    /// Step towards the end of a word
    pub fn forward(self) -> Step {
        match self {
            Orientation::Horizontal => Step::Right,
            Orientation::Vertical => Step::Down,
        }
    }

    /// Square `k` positions after `x`, `y` along this orientation. Not bounds checked.
    pub fn offset(self, x: usize, y: usize, k: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (x + k, y),
            Orientation::Vertical => (x, y + k),
        }
    }
}

/// A single step on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
    Up,
    Down,
}

impl Step {
    /// Neighbour of `x`, `y` in this direction, or `None` past the edge of a `width` x `height` board.
    fn apply(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        match self {
            Step::Left => x.checked_sub(1).map(|x| (x, y)),
            Step::Up => y.checked_sub(1).map(|y| (x, y)),
            Step::Right if x + 1 < width => Some((x + 1, y)),
            Step::Down if y + 1 < height => Some((x, y + 1)),
            _ => None,
        }
    }
}

/// Iterator over the occupied squares next to a start square, moving away from it.
/// Yields (`x`, `y`, `occupant`) and stops at the first empty square or the edge.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    board: &'a Board,
    x: usize,
    y: usize,
    step: Step,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, usize, Occupant);
    fn next(&mut self) -> Option<Self::Item> {
        let (width, height) = self.board.size();
        let (x, y) = self.step.apply(self.x, self.y, width, height)?;
        let occupant = self.board.occupant(x, y)?;
        self.x = x;
        self.y = y;
        Some((x, y, occupant))
    }
}

impl Board {
    /// Walk from `x`, `y` in direction `step`, over occupied squares only.
    pub fn walk(&self, x: usize, y: usize, step: Step) -> Walk {
        Walk {
            board: self,
            x,
            y,
            step,
        }
    }

    fn scan(&self, x: usize, y: usize, step: Step) -> Run {
        let mut run: Run = self.walk(x, y, step).map(|(_, _, o)| o.letter).collect();
        if let Step::Left | Step::Up = step {
            run.reverse();
        }
        run
    }

    /// Letters directly left of `x`, `y`, in reading order.
    ///
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Board, Error};
    /// let board = Board::new(6, 1).with_state_from_strings(&["X.CAT."])?;
    /// let run = board.scan_before(5, 0);
    /// assert_eq!(run.iter().map(|l| l.to_char()).collect::<String>(), "CAT");
    /// assert!(board.scan_before(2, 0).is_empty());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn scan_before(&self, x: usize, y: usize) -> Run {
        self.scan(x, y, Step::Left)
    }

    /// Letters directly right of `x`, `y`, in reading order.
    pub fn scan_after(&self, x: usize, y: usize) -> Run {
        self.scan(x, y, Step::Right)
    }

    /// Letters directly above `x`, `y`, in reading order.
    pub fn scan_above(&self, x: usize, y: usize) -> Run {
        self.scan(x, y, Step::Up)
    }

    /// Letters directly below `x`, `y`, in reading order.
    pub fn scan_below(&self, x: usize, y: usize) -> Run {
        self.scan(x, y, Step::Down)
    }

    /// Letters before and after `x`, `y` along `orientation`.
    pub fn scan_around(&self, x: usize, y: usize, orientation: Orientation) -> (Run, Run) {
        (
            self.scan(x, y, orientation.backward()),
            self.scan(x, y, orientation.forward()),
        )
    }
}
