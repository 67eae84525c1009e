use std::fmt;

/// Represents the content of a single cell.
///
/// The `Disc` enum has three variants:
///
/// * `Empty` - Represents an empty cell on the board.
/// * `Black` - Represents a black disc.
/// * `White` - Represents a white disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disc {
    #[default]
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses the character produced by [`Disc::to_char`].
    ///
    /// Anything other than `'X'` or `'O'` (case-insensitive) is an empty cell.
    pub fn from_char(c: char) -> Disc {
        match c.to_ascii_uppercase() {
            'X' => Disc::Black,
            'O' => Disc::White,
            _ => Disc::Empty,
        }
    }

    /// Returns the opposite disc.
    ///
    /// # Returns
    ///
    /// * `Disc::White` for `Disc::Black`
    /// * `Disc::Black` for `Disc::White`
    /// * `Disc::Empty` for `Disc::Empty`
    pub fn opposite(&self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Returns `true` for `Black` and `White`.
    #[inline]
    pub fn is_player(self) -> bool {
        self != Disc::Empty
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Disc::Empty => "Empty",
            Disc::Black => "Black",
            Disc::White => "White",
        };
        f.write_str(name)
    }
}
