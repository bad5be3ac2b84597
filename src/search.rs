//! The search driver: every dictionary word, at every square, in both orientations.
use crate::control::Checkpoint;
use crate::evaluate::{Evaluator, Rules};
use crate::scan::Orientation;
use crate::{Board, Dictionary, Error, LetterValues, Rack};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "flame_it")]
use flamer::flame;

/// A legal word placement: the first square, the direction and the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Playable {
    pub x: usize,
    pub y: usize,
    pub horizontal: bool,
    pub word: String,
}

impl Playable {
    pub fn new(x: usize, y: usize, orientation: Orientation, word: &str) -> Playable {
        Playable {
            x,
            y,
            horizontal: orientation.is_horizontal(),
            word: String::from(word),
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_horizontal(self.horizontal)
    }
}

impl fmt::Display for Playable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dir = if self.horizontal { 'H' } else { 'V' };
        write!(f, "{} {} {} {}", self.x, self.y, dir, self.word)
    }
}

/// Placements grouped by score.
///
/// Within a score the placements keep the order in which they were found.
/// Serializes as a JSON object from score to a list of placements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playables(BTreeMap<u32, Vec<Playable>>);

impl Playables {
    pub fn new() -> Playables {
        Playables::default()
    }

    /// Append `playable` to the bucket for `score`.
    pub fn push(&mut self, score: u32, playable: Playable) {
        self.0.entry(score).or_insert_with(Vec::new).push(playable);
    }

    /// The placements with `score`, in discovery order.
    pub fn get(&self, score: u32) -> Option<&[Playable]> {
        self.0.get(&score).map(Vec::as_slice)
    }

    /// Total number of placements
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The scores that have placements, highest first.
    pub fn scores(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().rev().copied()
    }

    /// All placements with their score, highest score first.
    /// Placements with equal score come in discovery order.
    pub fn best(&self) -> impl Iterator<Item = (u32, &Playable)> {
        self.0
            .iter()
            .rev()
            .flat_map(|(&score, bucket)| bucket.iter().map(move |playable| (score, playable)))
    }

    pub fn buckets(&self) -> &BTreeMap<u32, Vec<Playable>> {
        &self.0
    }

    /// Add the placements of `other`: buckets are joined per score,
    /// with the placements of `other` after those already present.
    pub fn merge(&mut self, other: Playables) {
        for (score, bucket) in other.0 {
            self.0.entry(score).or_insert_with(Vec::new).extend(bucket);
        }
    }

    /// Encode as JSON text.
    /// ## Errors
    /// If serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON text.
    /// ## Errors
    /// If `text` is not a valid score map.
    pub fn from_json(text: &str) -> Result<Playables, Error> {
        Ok(serde_json::from_str(text)?)
    }
}

/// An exhaustive search for placements on one board with one rack.
///
/// The inputs are only read. Each call to [`run`](Search::run) starts over and
/// returns a fresh result.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    board: &'a Board,
    rack: &'a Rack,
    dictionary: &'a Dictionary,
    values: &'a LetterValues,
    rules: Rules,
}

impl<'a> Search<'a> {
    pub fn new(
        board: &'a Board,
        rack: &'a Rack,
        dictionary: &'a Dictionary,
        values: &'a LetterValues,
    ) -> Search<'a> {
        Search {
            board,
            rack,
            dictionary,
            values,
            rules: Rules::default(),
        }
    }

    /// Use `rules`, and return the modified search.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Search<'a> {
        self.rules = rules;
        self
    }

    fn evaluator(&self) -> Evaluator<'a> {
        Evaluator::new(self.board, self.rack, self.dictionary, self.values).with_rules(self.rules)
    }

    /// Search the whole dictionary, yielding the thread between words.
    pub fn run(&self) -> Playables {
        let evaluator = self.evaluator();
        let mut playables = Playables::new();
        for word in self.dictionary {
            std::thread::yield_now();
            self.search_word(&evaluator, word, &mut playables);
        }
        playables
    }

    /// Search the whole dictionary, calling `checkpoint` before each word.
    /// ## Errors
    /// The first error returned by `checkpoint`.
    pub fn run_with<C: Checkpoint>(&self, checkpoint: &mut C) -> Result<Playables, Error> {
        self.run_slice(0, self.dictionary.len(), checkpoint)
    }

    /// Search only the `count` words from index `start`, calling `checkpoint` before each word.
    /// Cross words are still checked against the whole dictionary.
    ///
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Board, Dictionary, Error, LetterValues, Rack, Search, Unbounded};
    /// let board = Board::new(15, 15);
    /// let rack: Rack = "CAT".parse()?;
    /// let dictionary = Dictionary::from_words(&["CAT", "AT", "ACT"])?;
    /// let values = LetterValues::standard();
    /// let search = Search::new(&board, &rack, &dictionary, &values);
    /// let playables = search.run_slice(1, 1, &mut Unbounded)?;
    /// assert_eq!(playables.len(), 4);
    /// assert!(playables.best().all(|(score, p)| score == 2 && p.word == "AT"));
    /// # Ok::<(), Error>(())
    /// ```
    /// ## Errors
    /// The first error returned by `checkpoint`.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn run_slice<C: Checkpoint>(
        &self,
        start: usize,
        count: usize,
        checkpoint: &mut C,
    ) -> Result<Playables, Error> {
        let evaluator = self.evaluator();
        let mut playables = Playables::new();
        let range = self.dictionary.slice_range(start, count);
        let offset = range.start;
        for (i, word) in self.dictionary.words()[range].iter().enumerate() {
            checkpoint.checkpoint(offset + i, word)?;
            self.search_word(&evaluator, word, &mut playables);
        }
        Ok(playables)
    }

    /// Columns outer, rows inner, horizontal before vertical.
    fn search_word(&self, evaluator: &Evaluator, word: &str, playables: &mut Playables) {
        let (width, height) = self.board.size();
        if word.len() > width.max(height) {
            return;
        }
        for x in 0..width {
            for y in 0..height {
                for &orientation in &Orientation::BOTH {
                    if let Some(eval) = evaluator.evaluate(word, x, y, orientation) {
                        playables.push(eval.score, Playable::new(x, y, orientation, word));
                    }
                }
            }
        }
    }
}

/// Find every legal placement of the words in `dictionary` on `board`,
/// using tiles from `rack`, grouped by score.
///
/// ## Examples
/// ```
/// # use wordgrid_solver::{find_highest_score_playables, Board, Dictionary, Error, LetterValues, Rack};
/// let board = Board::standard().with_state_from_strings(&[
///     "...............",
///     "...............",
///     "...............",
///     "...............",
///     "...............",
///     "...............",
///     "...............",
///     "......CAT......",
///     "...............",
///     "...............",
///     "...............",
///     "...............",
///     "...............",
///     "...............",
///     "...............",
/// ])?;
/// let rack: Rack = "S".parse()?;
/// let dictionary = Dictionary::from_words(&["CATS", "S"])?;
/// let playables = find_highest_score_playables(&board, &rack, &dictionary, &LetterValues::standard());
/// let (score, best) = playables.best().next().unwrap();
/// assert_eq!((score, best.x, best.y, best.horizontal, best.word.as_str()), (7, 9, 7, false, "S"));
/// # Ok::<(), Error>(())
/// ```
pub fn find_highest_score_playables(
    board: &Board,
    rack: &Rack,
    dictionary: &Dictionary,
    values: &LetterValues,
) -> Playables {
    Search::new(board, rack, dictionary, values).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{CancelToken, Deadline, Unbounded};
    use crate::scan::Run;
    use crate::{Letter, Occupant, Tile};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::convert::TryFrom;
    use std::time::Instant;

    type Result<T> = std::result::Result<T, Error>;

    const TOE_STATE: &[&str] = &[
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "......CAT......",
        "........o......",
        "........E......",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
    ];

    /// A 15x15 state, empty except for the given rows.
    fn state_with(rows: &[(usize, &str)]) -> Vec<String> {
        let mut state = vec![String::from("..............."); 15];
        for &(y, row) in rows {
            state[y] = String::from(row);
        }
        state
    }

    fn placements(playables: &Playables, score: u32) -> Vec<(usize, usize, bool, &str)> {
        playables
            .get(score)
            .unwrap_or(&[])
            .iter()
            .map(|p| (p.x, p.y, p.horizontal, p.word.as_str()))
            .collect()
    }

    fn text(run: &Run) -> String {
        run.iter().map(|l| l.to_char()).collect()
    }

    #[test]
    fn test_opening_search() -> Result<()> {
        let board = Board::new(15, 15);
        let rack = Rack::from_hand(&[
            Some('C'),
            Some('A'),
            Some('T'),
            Some('A'),
            Some('T'),
            None,
            None,
        ])?;
        let dictionary = Dictionary::from_words(&["CAT", "AT", "CATS"])?;
        let values = LetterValues::standard();
        let playables = find_highest_score_playables(&board, &rack, &dictionary, &values);
        assert_eq!(playables.len(), 18);
        assert_eq!(playables.scores().collect::<Vec<_>>(), vec![5, 2]);
        let fives = placements(&playables, 5);
        assert_eq!(
            fives[..6],
            [
                (5, 7, true, "CAT"),
                (6, 7, true, "CAT"),
                (7, 5, false, "CAT"),
                (7, 6, false, "CAT"),
                (7, 7, true, "CAT"),
                (7, 7, false, "CAT"),
            ]
        );
        // the S of CATS comes from a blank
        assert_eq!(fives.len(), 14);
        assert!(fives[6..].iter().all(|p| p.3 == "CATS"));
        assert_eq!(placements(&playables, 2).len(), 4);
        Ok(())
    }

    #[test]
    fn test_extend_word_on_board() -> Result<()> {
        let board =
            Board::standard().with_state_from_strings(&state_with(&[(7, "......CAT......")])[..])?;
        let rack: Rack = "S".parse()?;
        let dictionary = Dictionary::from_words(&["CATS", "S"])?;
        let values = LetterValues::standard();
        let playables = find_highest_score_playables(&board, &rack, &dictionary, &values);
        assert_eq!(playables.len(), 2);
        assert_eq!(placements(&playables, 6), vec![(6, 7, true, "CATS")]);
        assert_eq!(placements(&playables, 7), vec![(9, 7, false, "S")]);
        assert_eq!(board.to_strings()[7], "......CAT......");
        Ok(())
    }

    #[test]
    fn test_blank_on_board_keeps_zero_value() -> Result<()> {
        let board =
            Board::standard().with_state_from_strings(&state_with(&[(7, "......cAT......")])[..])?;
        let rack: Rack = "S".parse()?;
        let dictionary = Dictionary::from_words(&["CATS", "S"])?;
        let values = LetterValues::standard();
        let playables = find_highest_score_playables(&board, &rack, &dictionary, &values);
        assert_eq!(placements(&playables, 3), vec![(6, 7, true, "CATS")]);
        assert_eq!(placements(&playables, 4), vec![(9, 7, false, "S")]);
        Ok(())
    }

    #[test]
    fn test_no_placement_next_to_a_tile() -> Result<()> {
        let board = Board::new(7, 1).with_state_from_strings(&["....S.."])?;
        let rack: Rack = "CAT".parse()?;
        let dictionary = Dictionary::from_words(&["CAT", "CATS"])?;
        let values = LetterValues::standard();
        let playables = Search::new(&board, &rack, &dictionary, &values).run();
        assert_eq!(playables.len(), 1);
        assert_eq!(placements(&playables, 6), vec![(1, 0, true, "CATS")]);
        Ok(())
    }

    #[test]
    fn test_opening_covers_center() -> Result<()> {
        let board = Board::standard();
        let rack: Rack = "ETAOS*R".parse()?;
        let dictionary =
            Dictionary::from_words(&["EAT", "TEA", "ROAST", "TO", "STARE", "OATERS", "ZOO"])?;
        let values = LetterValues::standard();
        let playables = find_highest_score_playables(&board, &rack, &dictionary, &values);
        assert!(!playables.is_empty());
        for (_, p) in playables.best() {
            let len = p.word.len();
            if p.horizontal {
                assert!(p.y == 7 && p.x <= 7 && 7 < p.x + len, "{}", p);
            } else {
                assert!(p.x == 7 && p.y <= 7 && 7 < p.y + len, "{}", p);
            }
        }
        Ok(())
    }

    #[test]
    fn test_center_double_word() -> Result<()> {
        let board = Board::standard();
        assert!(board.cell(7, 7).unwrap().premium.dw);
        let rack: Rack = "CAT".parse()?;
        let dictionary = Dictionary::from_words(&["CAT"])?;
        let values = LetterValues::standard();
        let playables = find_highest_score_playables(&board, &rack, &dictionary, &values);
        assert_eq!(playables.scores().collect::<Vec<_>>(), vec![10]);
        assert_eq!(
            placements(&playables, 10),
            [
                (5, 7, true, "CAT"),
                (6, 7, true, "CAT"),
                (7, 5, false, "CAT"),
                (7, 6, false, "CAT"),
                (7, 7, true, "CAT"),
                (7, 7, false, "CAT"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_bingo_only_for_full_rack() -> Result<()> {
        let board = Board::new(15, 15);
        let rack: Rack = "RETAINS".parse()?;
        let dictionary = Dictionary::from_words(&["RETAINS", "RETAIN", "STAINER"])?;
        let values = LetterValues::standard();
        let playables = find_highest_score_playables(&board, &rack, &dictionary, &values);
        assert_eq!(playables.scores().collect::<Vec<_>>(), vec![57, 6]);
        assert_eq!(placements(&playables, 57).len(), 28);
        assert_eq!(placements(&playables, 6).len(), 12);
        let rules = Rules::default().with_bingo(7, 35);
        let playables = Search::new(&board, &rack, &dictionary, &values)
            .with_rules(rules)
            .run();
        assert_eq!(playables.scores().collect::<Vec<_>>(), vec![42, 6]);
        Ok(())
    }

    #[test]
    fn test_blanks_score_zero() -> Result<()> {
        let board = Board::new(15, 15);
        let rack: Rack = "**".parse()?;
        let dictionary = Dictionary::from_words(&["AT", "ZA"])?;
        let values = LetterValues::standard();
        let playables = find_highest_score_playables(&board, &rack, &dictionary, &values);
        assert_eq!(playables.scores().collect::<Vec<_>>(), vec![0]);
        assert_eq!(playables.len(), 8);
        Ok(())
    }

    #[test]
    fn test_slices_merge_to_full_search() -> Result<()> {
        let board = Board::standard().with_state_from_strings(TOE_STATE)?;
        let rack: Rack = "SATE*".parse()?;
        let dictionary =
            Dictionary::from_words(&["CATS", "TOES", "SAT", "EAST", "TOE", "SEAT", "AT", "TA"])?;
        let values = LetterValues::standard();
        let search = Search::new(&board, &rack, &dictionary, &values);
        let full = search.run();
        assert_eq!(search.run_with(&mut Unbounded)?, full);
        for split in 0..=dictionary.len() {
            let mut merged = search.run_slice(0, split, &mut Unbounded)?;
            merged.merge(search.run_slice(split, dictionary.len(), &mut Unbounded)?);
            assert_eq!(merged, full, "split at {}", split);
        }
        Ok(())
    }

    #[test]
    fn test_cancelled_search() -> Result<()> {
        let board = Board::new(15, 15);
        let rack: Rack = "CAT".parse()?;
        let dictionary = Dictionary::from_words(&["CAT", "AT", "ACT", "TA"])?;
        let values = LetterValues::standard();
        let search = Search::new(&board, &rack, &dictionary, &values);
        let token = CancelToken::new();
        token.cancel();
        assert!(matches!(
            search.run_with(&mut token.clone()),
            Err(Error::Cancelled { index: 0 })
        ));
        assert!(matches!(
            search.run_slice(2, 5, &mut token.clone()),
            Err(Error::Cancelled { index: 2 })
        ));
        assert!(matches!(
            search.run_with(&mut Deadline::at(Instant::now())),
            Err(Error::TimedOut { index: 0 })
        ));
        Ok(())
    }

    #[test]
    fn test_progress_checkpoint() -> Result<()> {
        let board = Board::new(15, 15);
        let rack: Rack = "CAT".parse()?;
        let dictionary = Dictionary::from_words(&["CAT", "AT", "ACT", "TA"])?;
        let values = LetterValues::standard();
        let search = Search::new(&board, &rack, &dictionary, &values);
        let mut seen = Vec::new();
        let result = search.run_with(&mut |index: usize, word: &str| -> Result<()> {
            seen.push(String::from(word));
            if index == 2 {
                Err(Error::Cancelled { index })
            } else {
                Ok(())
            }
        });
        assert!(matches!(result, Err(Error::Cancelled { index: 2 })));
        assert_eq!(seen, vec!["CAT", "AT", "ACT"]);
        Ok(())
    }

    #[test]
    fn test_playables_json() -> Result<()> {
        let mut playables = Playables::new();
        playables.push(5, Playable::new(7, 7, Orientation::Horizontal, "CAT"));
        playables.push(2, Playable::new(7, 6, Orientation::Vertical, "AT"));
        let json = playables.to_json()?;
        assert_eq!(
            json,
            r#"{"2":[{"x":7,"y":6,"horizontal":false,"word":"AT"}],"5":[{"x":7,"y":7,"horizontal":true,"word":"CAT"}]}"#
        );
        assert_eq!(Playables::from_json(&json)?, playables);
        let best: Vec<String> = playables.best().map(|(s, p)| format!("{} {}", s, p)).collect();
        assert_eq!(best, vec!["5 7 7 H CAT", "2 7 6 V AT"]);
        Ok(())
    }

    /// Put the placement on a copy of the board, read the words back, and score it
    /// again square by square.
    fn check_replay(
        board: &Board,
        rack: &Rack,
        dictionary: &Dictionary,
        values: &LetterValues,
        playable: &Playable,
        score: u32,
    ) -> Result<()> {
        let original = board;
        let mut board = board.clone();
        let orientation = playable.orientation();
        let mut letters: Vec<usize> = Letter::all()
            .map(|l| rack.count_of(&Tile::Letter(l)))
            .collect();
        let mut blanks = rack.count_of(&Tile::Blank);
        let mut placed = Vec::new();
        for (k, ch) in playable.word.chars().enumerate() {
            let (x, y) = orientation.offset(playable.x, playable.y, k);
            if board.is_occupied(x, y) {
                continue;
            }
            let letter = Letter::try_from(ch)?;
            let significant = if letters[letter.index()] > 0 {
                letters[letter.index()] -= 1;
                true
            } else {
                assert!(blanks > 0, "{} needs more tiles than the rack has", playable);
                blanks -= 1;
                false
            };
            board.set_occupant(x, y, Some(Occupant::new(letter, significant)))?;
            placed.push((x, y));
        }
        assert!(!placed.is_empty(), "{}", playable);
        let (before, after) = board.scan_around(playable.x, playable.y, orientation);
        assert!(before.is_empty(), "{}", playable);
        assert_eq!(text(&after), &playable.word[1..]);
        let crossing = orientation.perpendicular();
        for &(x, y) in &placed {
            let (before, after) = board.scan_around(x, y, crossing);
            if before.is_empty() && after.is_empty() {
                continue;
            }
            let letter = board.occupant(x, y).map_or('?', |o| o.letter.to_char());
            let cross = format!("{}{}{}", text(&before), letter, text(&after));
            assert!(dictionary.contains(&cross), "{} forms {}", playable, cross);
        }

        let worth = |o: Occupant| -> u64 {
            if o.significant {
                u64::from(values.get(o.letter))
            } else {
                0
            }
        };
        let mut main = 0;
        let mut word_factor = 1;
        for k in 0..playable.word.len() {
            let (x, y) = orientation.offset(playable.x, playable.y, k);
            let cell = board.cell(x, y).unwrap();
            let value = worth(cell.occupant.unwrap());
            if original.is_occupied(x, y) {
                main += value;
            } else {
                main += value * u64::from(cell.premium.letter_multiplier());
                word_factor *= u64::from(cell.premium.word_multiplier());
            }
        }
        let mut expected = main * word_factor;
        for &(x, y) in &placed {
            let neighbours: Vec<u64> = board
                .walk(x, y, crossing.backward())
                .chain(board.walk(x, y, crossing.forward()))
                .map(|(_, _, o)| worth(o))
                .collect();
            if neighbours.is_empty() {
                continue;
            }
            let cell = board.cell(x, y).unwrap();
            let new_letter =
                worth(cell.occupant.unwrap()) * u64::from(cell.premium.letter_multiplier());
            let crossing_points = neighbours.iter().sum::<u64>() + new_letter;
            expected += crossing_points * u64::from(cell.premium.word_multiplier());
        }
        if rack.len() == 7 && placed.len() == 7 {
            expected += 50;
        }
        assert_eq!(expected, u64::from(score), "{}", playable);
        Ok(())
    }

    #[test]
    fn test_random_racks_give_legal_placements() -> Result<()> {
        const WORDS: &[&str] = &[
            "CAT", "CATS", "AT", "TA", "TOE", "TOES", "ACT", "SAT", "SEA", "EAT", "TEA", "OE",
            "ET", "TO", "ES", "SO", "OS", "OAT", "COT", "SCAT", "TACO", "COAT", "STOAT", "EAST",
            "SEAT", "TOAST", "COST", "CASE", "ACE", "ACES",
        ];
        let board = Board::standard().with_state_from_strings(TOE_STATE)?;
        let dictionary = Dictionary::from_words(WORDS)?;
        let values = LetterValues::standard();
        let pool: Vec<char> = "AACEEOOSSTT**".chars().collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut found = 0;
        for _ in 0..20 {
            let hand: String = pool.choose_multiple(&mut rng, 7).collect();
            let rack: Rack = hand.parse()?;
            let playables = Search::new(&board, &rack, &dictionary, &values).run();
            for (score, p) in playables.best() {
                check_replay(&board, &rack, &dictionary, &values, p, score)?;
                found += 1;
            }
        }
        assert!(found > 0);
        Ok(())
    }

    #[test]
    fn test_hand_scored_placements() -> Result<()> {
        let board = Board::standard().with_state_from_strings(TOE_STATE)?;
        let dictionary = Dictionary::from_words(&["TOES", "SEA", "CATS", "STOAT", "AT"])?;
        let values = LetterValues::standard();
        for hand in &["SEA*", "STOA", "SA*", "ASTTO*E"] {
            let rack: Rack = hand.parse()?;
            let playables = Search::new(&board, &rack, &dictionary, &values).run();
            for (score, p) in playables.best() {
                check_replay(&board, &rack, &dictionary, &values, p, score)?;
            }
        }
        Ok(())
    }
}
