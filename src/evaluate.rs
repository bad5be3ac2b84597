use crate::scan::Orientation;
use crate::tiles::Tally;
use crate::{Board, Dictionary, Letter, LetterValues, Rack};

#[cfg(feature = "flame_it")]
use flamer::flame;

/// Scoring rules that do not depend on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Rack size for a bingo: all of these tiles must be played at once.
    pub bingo_tiles: usize,
    /// Bonus points for a bingo
    pub bingo_bonus: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            bingo_tiles: 7,
            bingo_bonus: 50,
        }
    }
}

impl Rules {
    /// Set the bingo rack size and bonus, and return the modified rules.
    #[must_use]
    pub fn with_bingo(mut self, tiles: usize, bonus: u32) -> Rules {
        self.bingo_tiles = tiles;
        self.bingo_bonus = bonus;
        self
    }
}

/// Score details of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Total score
    pub score: u32,
    /// Points for the placed word itself, word multipliers included
    pub main_points: u32,
    /// Points for all crossing words formed
    pub cross_points: u32,
    /// Number of crossing words formed
    pub cross_words: usize,
    /// Number of tiles taken from the rack
    pub placed: usize,
    /// True if the bingo bonus was awarded
    pub bingo: bool,
}

/// Checks single placements against the board, rack, dictionary and letter values,
/// and scores the legal ones.
///
/// The evaluator only reads its inputs. Tiles are deducted from a private
/// [`Tally`] copy for each placement.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
    values: &'a LetterValues,
    tally: Tally,
    rack_len: usize,
    rules: Rules,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        board: &'a Board,
        rack: &Rack,
        dictionary: &'a Dictionary,
        values: &'a LetterValues,
    ) -> Evaluator<'a> {
        Evaluator {
            board,
            dictionary,
            values,
            tally: rack.tally(),
            rack_len: rack.len(),
            rules: Rules::default(),
        }
    }

    /// Use `rules`, and return the modified evaluator.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Evaluator<'a> {
        self.rules = rules;
        self
    }

    /// Evaluate `word` placed from `x`, `y` in direction `orientation`.
    ///
    /// Returns `None` if the placement is not legal:
    /// - the word does not fit on the board,
    /// - a tile lies directly before or after the word,
    /// - a square holds a different letter, or the rack lacks a tile for an empty square,
    /// - no tile would be placed,
    /// - a new tile forms a crossing word that is not in the dictionary,
    /// - the word touches no tile and does not cover the center (opening move).
    ///
    /// Points that do not fit in a `u32` saturate at `u32::MAX`.
    ///
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Board, Dictionary, Error, Evaluator, LetterValues, Orientation, Rack};
    /// let board = Board::new(15, 15);
    /// let rack: Rack = "TAC".parse()?;
    /// let dictionary = Dictionary::from_words(&["CAT"])?;
    /// let values = LetterValues::standard();
    /// let evaluator = Evaluator::new(&board, &rack, &dictionary, &values);
    /// let eval = evaluator.evaluate("CAT", 6, 7, Orientation::Horizontal).unwrap();
    /// assert_eq!(eval.score, 5);
    /// // an opening move must cover the center square
    /// assert!(evaluator.evaluate("CAT", 0, 0, Orientation::Horizontal).is_none());
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn evaluate(
        &self,
        word: &str,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Option<Evaluation> {
        let len = word.len();
        if len == 0 {
            return None;
        }
        let (width, height) = self.board.size();
        if x >= width || y >= height {
            return None;
        }
        let (end_x, end_y) = orientation.offset(x, y, len - 1);
        if end_x >= width || end_y >= height {
            return None;
        }
        // the word must not be part of a longer run of tiles
        if self.board.walk(x, y, orientation.backward()).next().is_some()
            || self.board.walk(end_x, end_y, orientation.forward()).next().is_some()
        {
            return None;
        }

        let crossing = orientation.perpendicular();
        let mut tally = self.tally;
        let mut eval = Evaluation::default();
        let mut letter_points: u32 = 0;
        let mut word_multiplier: u32 = 1;
        let mut joined = false;

        for (k, byte) in word.bytes().enumerate() {
            let letter = Letter::from_ascii(byte)?;
            let (cx, cy) = orientation.offset(x, y, k);
            let cell = self.board.cell(cx, cy)?;
            if let Some(occupant) = cell.occupant {
                if occupant.letter != letter {
                    return None;
                }
                joined = true;
                letter_points = letter_points.saturating_add(self.values.occupant(occupant));
                continue;
            }
            let significant = tally.take(letter)?;
            eval.placed += 1;
            let value = if significant { self.values.get(letter) } else { 0 };
            let points = value.saturating_mul(cell.premium.letter_multiplier());
            let multiplier = cell.premium.word_multiplier();
            letter_points = letter_points.saturating_add(points);
            word_multiplier = word_multiplier.saturating_mul(multiplier);

            let (before, after) = self.board.scan_around(cx, cy, crossing);
            if before.is_empty() && after.is_empty() {
                continue;
            }
            let mut cross = String::with_capacity(before.len() + after.len() + 1);
            cross.extend(before.iter().map(|l| l.to_char()));
            cross.push(letter.to_char());
            cross.extend(after.iter().map(|l| l.to_char()));
            if !self.dictionary.contains(&cross) {
                return None;
            }
            let base: u32 = self
                .board
                .walk(cx, cy, crossing.backward())
                .chain(self.board.walk(cx, cy, crossing.forward()))
                .map(|(_, _, occupant)| self.values.occupant(occupant))
                .fold(0, u32::saturating_add);
            let cross_score = base.saturating_add(points).saturating_mul(multiplier);
            eval.cross_points = eval.cross_points.saturating_add(cross_score);
            eval.cross_words += 1;
            joined = true;
        }

        if eval.placed == 0 {
            return None;
        }
        if !joined && !self.covers_center(x, y, len, orientation) {
            return None;
        }
        eval.main_points = letter_points.saturating_mul(word_multiplier);
        eval.bingo = self.rack_len == self.rules.bingo_tiles && eval.placed == self.rack_len;
        eval.score = eval.main_points.saturating_add(eval.cross_points);
        if eval.bingo {
            eval.score = eval.score.saturating_add(self.rules.bingo_bonus);
        }
        Some(eval)
    }

    /// Check if a word of `len` squares from `x`, `y` lies on a center line and covers
    /// the center square. On an even sized board either middle line counts.
    fn covers_center(&self, x: usize, y: usize, len: usize, orientation: Orientation) -> bool {
        let columns = self.board.center_columns();
        let rows = self.board.center_rows();
        let (line, start, line_centers, span_centers) = match orientation {
            Orientation::Horizontal => (y, x, rows, columns),
            Orientation::Vertical => (x, y, columns, rows),
        };
        line_centers.contains(&line)
            && span_centers
                .iter()
                .any(|&center| start <= center && center < start + len)
    }
}
