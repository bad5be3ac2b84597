use super::Letter;
use crate::error::Error;
use multiset::HashMultiSet;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A tile in the rack: a specific letter or a blank that can stand for any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    Letter(Letter),
    Blank,
}

impl Tile {
    /// Check if the tile is a blank
    pub fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank)
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    /// `'*'` and `' '` are blanks, letters are case insensitive.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '*' | ' ' => Ok(Tile::Blank),
            _ => Letter::try_from(ch)
                .map(Tile::Letter)
                .map_err(|_| Error::InvalidRackTile(ch)),
        }
    }
}

impl From<Option<Letter>> for Tile {
    fn from(letter: Option<Letter>) -> Self {
        letter.map_or(Tile::Blank, Tile::Letter)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tile::Letter(letter) => write!(f, "{}", letter),
            Tile::Blank => write!(f, "*"),
        }
    }
}

/// The tiles a player holds. Logically unordered.
#[derive(Debug, Clone)]
pub struct Rack(HashMultiSet<Tile>);

impl Deref for Rack {
    type Target = HashMultiSet<Tile>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for Rack {
    fn default() -> Self {
        Rack::new()
    }
}

impl Rack {
    /// An empty rack
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// Add a tile
    pub fn push(&mut self, tile: Tile) {
        self.0.insert(tile);
    }

    /// Remove one instance of `tile`. Returns false if the rack did not hold it.
    pub fn remove(&mut self, tile: Tile) -> bool {
        self.0.remove(&tile)
    }

    /// The tiles in a stable order: letters alphabetically, then blanks.
    pub fn tiles(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.0.iter().copied().collect();
        tiles.sort_unstable();
        tiles
    }

    /// The rack in the job protocol form: a letter per tile, `None` for a blank.
    pub fn to_hand(&self) -> Vec<Option<char>> {
        self.tiles()
            .into_iter()
            .map(|tile| match tile {
                Tile::Letter(letter) => Some(letter.to_char()),
                Tile::Blank => None,
            })
            .collect()
    }

    /// Read a hand from the job protocol: a letter per tile, `None` for a blank.
    /// ## Errors
    /// If a hand entry is not a letter.
    pub fn from_hand(hand: &[Option<char>]) -> Result<Rack, Error> {
        hand.iter()
            .map(|entry| match entry {
                Some(ch) => Letter::try_from(*ch)
                    .map(Tile::Letter)
                    .map_err(|_| Error::InvalidRackTile(*ch)),
                None => Ok(Tile::Blank),
            })
            .collect()
    }

    /// Compact counts for deducting tiles during one candidate evaluation.
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for tile in self.0.iter() {
            match tile {
                Tile::Letter(letter) => tally.letters[letter.index()] += 1,
                Tile::Blank => tally.blanks += 1,
            }
        }
        tally
    }
}

impl std::iter::FromIterator<Tile> for Rack {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut rack = Rack::new();
        for tile in iter {
            rack.push(tile);
        }
        rack
    }
}

impl FromStr for Rack {
    type Err = Error;
    /// Parse a rack like `"CATS*"`, where `*` (or a space) is a blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Tile::try_from).collect()
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for tile in self.tiles() {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

/// Remaining rack tiles while a single candidate is evaluated.
///
/// A `Tally` is `Copy`, so each candidate deducts from its own copy and
/// the rack itself is never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    letters: [u16; Letter::COUNT],
    blanks: u16,
}

impl Tally {
    /// Take a tile for `letter`, preferring the exact letter over a blank.
    /// Returns `Some(true)` if the exact letter was used, `Some(false)` if a blank was used,
    /// and `None` if neither is left.
    pub fn take(&mut self, letter: Letter) -> Option<bool> {
        let count = &mut self.letters[letter.index()];
        if *count > 0 {
            *count -= 1;
            Some(true)
        } else if self.blanks > 0 {
            self.blanks -= 1;
            Some(false)
        } else {
            None
        }
    }

    /// Number of tiles left
    pub fn len(&self) -> usize {
        self.letters.iter().map(|&n| n as usize).sum::<usize>() + self.blanks as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of blanks left
    pub fn blanks(&self) -> usize {
        self.blanks as usize
    }
}
