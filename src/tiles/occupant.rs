use super::Letter;
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

/// A tile lying on the board.
///
/// `significant` is false when the tile was placed with a blank: the letter takes
/// part in every word through the cell but is worth 0 points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub letter: Letter,
    pub significant: bool,
}

impl Occupant {
    pub fn new(letter: Letter, significant: bool) -> Occupant {
        Occupant {
            letter,
            significant,
        }
    }

    /// A regular tile showing `letter`.
    pub fn letter(letter: Letter) -> Occupant {
        Occupant::new(letter, true)
    }

    /// A blank tile assigned to `letter`.
    pub fn blank(letter: Letter) -> Occupant {
        Occupant::new(letter, false)
    }

    /// Text form used for board rows: uppercase for a regular tile,
    /// lowercase for a blank.
    pub fn to_char(self) -> char {
        if self.significant {
            self.letter.to_char()
        } else {
            self.letter.to_char().to_ascii_lowercase()
        }
    }
}

impl TryFrom<char> for Occupant {
    type Error = Error;
    /// Parse the text form: `'A'` is a regular tile, `'a'` a blank showing `A`.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        let letter = Letter::try_from(ch)?;
        Ok(Occupant::new(letter, ch.is_ascii_uppercase()))
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
