use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU8;

/// An uninitialized letter, only used to fill unused inline slots.
const UNINIT: u8 = 0x7f;

/// An uppercase letter `A`..`Z`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(NonZeroU8);

impl Default for Letter {
    fn default() -> Self {
        Letter(NonZeroU8::new(UNINIT).unwrap())
    }
}

impl Letter {
    /// Number of distinct letters.
    pub const COUNT: usize = 26;

    /// Create a letter from an ASCII byte, case insensitive.
    /// Returns `None` for anything but `a`..`z` and `A`..`Z`.
    pub fn from_ascii(byte: u8) -> Option<Letter> {
        if byte.is_ascii_alphabetic() {
            NonZeroU8::new(byte.to_ascii_uppercase()).map(Letter)
        } else {
            None
        }
    }

    /// Create the letter with alphabet index `index` (0 for `A`).
    /// Returns `None` if `index` is not below [`Letter::COUNT`].
    pub fn from_index(index: usize) -> Option<Letter> {
        if index < Self::COUNT {
            Self::from_ascii(b'A' + index as u8)
        } else {
            None
        }
    }

    /// Alphabet index: 0 for `A` up to 25 for `Z`.
    pub fn index(self) -> usize {
        (self.0.get() - b'A') as usize
    }

    /// The uppercase ASCII byte.
    pub fn byte(self) -> u8 {
        self.0.get()
    }

    /// The uppercase character.
    pub fn to_char(self) -> char {
        self.0.get() as char
    }

    /// Iterate over all letters `A`..`Z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT).filter_map(Letter::from_index)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii() {
            if let Some(letter) = Letter::from_ascii(ch as u8) {
                return Ok(letter);
            }
        }
        Err(Error::InvalidLetter(ch))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
