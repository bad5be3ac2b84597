use std::fmt;

/// Size of the canonical board the standard premium layout is designed for.
pub const STANDARD_SIZE: usize = 15;

/// Premium flags of a board square.
///
/// The flags are independent: a square can carry more than one of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Premium {
    /// double letter
    pub dl: bool,
    /// double word
    pub dw: bool,
    /// triple letter
    pub tl: bool,
    /// triple word
    pub tw: bool,
}

impl Premium {
    /// A square without any bonus
    pub const NONE: Premium = Premium {
        dl: false,
        dw: false,
        tl: false,
        tw: false,
    };

    /// Premium of square `x`, `y` in the standard layout.
    ///
    /// Only coordinates of the canonical 15x15 board carry a bonus;
    /// any other square of a larger board has none.
    pub fn standard(x: usize, y: usize) -> Premium {
        fn is(v: usize, set: &[usize]) -> bool {
            set.contains(&v)
        }
        let dl = (is(x, &[3, 11]) && is(y, &[0, 7, 14]))
            || (is(x, &[0, 7, 14]) && is(y, &[3, 11]))
            || (is(x, &[6, 8]) && is(y, &[2, 6, 8, 12]))
            || (is(x, &[2, 6, 8, 12]) && is(y, &[6, 8]));
        let dw = is(x, &[1, 2, 3, 4, 7, 10, 11, 12, 13]) && (x == y || x + y == 14);
        let tl = (is(x, &[5, 9]) && is(y, &[1, 5, 9, 13]))
            || (is(y, &[5, 9]) && is(x, &[1, 5, 9, 13]));
        let tw = is(x, &[0, 7, 14]) && is(y, &[0, 7, 14]) && !(x == 7 && y == 7);
        Premium { dl, dw, tl, tw }
    }

    /// Factor for the letter placed on this square.
    pub fn letter_multiplier(&self) -> u32 {
        (if self.dl { 2 } else { 1 }) * (if self.tl { 3 } else { 1 })
    }

    /// Factor for every word through a tile newly placed on this square.
    pub fn word_multiplier(&self) -> u32 {
        (if self.dw { 2 } else { 1 }) * (if self.tw { 3 } else { 1 })
    }

    /// Check if the square has no bonus at all
    pub fn is_none(&self) -> bool {
        *self == Premium::NONE
    }
}

/// Text form: `--` for no bonus, else the bonuses joined (`2l`, `3l`, `2w`, `3w`, `2l2w`, ..)
impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_none() {
            return write!(f, "--");
        }
        let flags = [(self.dl, "2l"), (self.tl, "3l"), (self.dw, "2w"), (self.tw, "3w")];
        for (_, label) in flags.iter().filter(|(set, _)| *set) {
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}
