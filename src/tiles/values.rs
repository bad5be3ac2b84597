use super::{Letter, Occupant};
use crate::error::Error;
use std::collections::BTreeMap;
use std::convert::TryFrom;

/// Points per letter, in alphabet order: A=1, B=3, ..
const STANDARD_VALUES: [u32; Letter::COUNT] = [
    1, 3, 3, 2, 1, 5, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// The point value of each letter. A blank is always worth 0, whatever letter it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterValues([u32; Letter::COUNT]);

impl LetterValues {
    /// A table where every letter is worth 0.
    pub fn new() -> LetterValues {
        LetterValues([0; Letter::COUNT])
    }

    /// The standard english letter values.
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// use wordgrid_solver::{Letter, LetterValues};
    /// let values = LetterValues::standard();
    /// assert_eq!(values.get(Letter::try_from('Q')?), 10);
    /// # Ok::<(), wordgrid_solver::Error>(())
    /// ```
    pub fn standard() -> LetterValues {
        LetterValues(STANDARD_VALUES)
    }

    /// Set the value of `letter`, and return the modified table.
    #[must_use]
    pub fn with(mut self, letter: Letter, value: u32) -> LetterValues {
        self.0[letter.index()] = value;
        self
    }

    /// The value of `letter`
    pub fn get(&self, letter: Letter) -> u32 {
        self.0[letter.index()]
    }

    /// The value of a tile on the board: 0 if it was placed with a blank.
    pub fn occupant(&self, occupant: Occupant) -> u32 {
        if occupant.significant {
            self.get(occupant.letter)
        } else {
            0
        }
    }

    /// The table as a map from letter to value, as used in the job protocol.
    pub fn to_map(&self) -> BTreeMap<String, u32> {
        Letter::all()
            .map(|letter| (letter.to_string(), self.get(letter)))
            .collect()
    }
}

impl TryFrom<&BTreeMap<String, u32>> for LetterValues {
    type Error = Error;
    /// Read a table keyed by single letters. Letters that are missing are worth 0.
    fn try_from(map: &BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        let mut values = LetterValues::new();
        for (key, &value) in map {
            let mut chars = key.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(ch), None) => {
                    Letter::try_from(ch).map_err(|_| Error::InvalidValueKey(key.clone()))?
                }
                _ => return Err(Error::InvalidValueKey(key.clone())),
            };
            values = values.with(letter, value);
        }
        Ok(values)
    }
}
