use core::{cmp::max, fmt, num, str::FromStr};

use crate::util::overflow_error;

/// A file of the board, `A` to `H`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Gets a `File` from an integer index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=7`.
    pub const fn new(index: u32) -> File {
        match index {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => panic!("file index out of range"),
        }
    }

    pub const fn from_char(ch: char) -> Option<File> {
        match ch {
            'a'..='h' => Some(File::new(ch as u32 - 'a' as u32)),
            _ => None,
        }
    }

    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    pub const fn upper_char(self) -> char {
        (b'A' + self as u8) as char
    }

    pub fn offset(self, delta: i32) -> Option<File> {
        let index = self as i32 + delta;
        if 0 <= index && index < 8 {
            Some(File::new(index as u32))
        } else {
            None
        }
    }

    pub fn distance(self, other: File) -> u32 {
        (self as i32 - other as i32).unsigned_abs()
    }

    /// `A`, ..., `H`, in this order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

/// A rank of the board, `First` (rank 1) to `Eighth` (rank 8).
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Rank {
    First = 0,
    Second = 1,
    Third = 2,
    Fourth = 3,
    Fifth = 4,
    Sixth = 5,
    Seventh = 6,
    Eighth = 7,
}

impl Rank {
    /// Gets a `Rank` from an integer index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=7`.
    pub const fn new(index: u32) -> Rank {
        match index {
            0 => Rank::First,
            1 => Rank::Second,
            2 => Rank::Third,
            3 => Rank::Fourth,
            4 => Rank::Fifth,
            5 => Rank::Sixth,
            6 => Rank::Seventh,
            7 => Rank::Eighth,
            _ => panic!("rank index out of range"),
        }
    }

    pub const fn from_char(ch: char) -> Option<Rank> {
        match ch {
            '1'..='8' => Some(Rank::new(ch as u32 - '1' as u32)),
            _ => None,
        }
    }

    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }

    pub fn offset(self, delta: i32) -> Option<Rank> {
        let index = self as i32 + delta;
        if 0 <= index && index < 8 {
            Some(Rank::new(index as u32))
        } else {
            None
        }
    }

    pub fn distance(self, other: Rank) -> u32 {
        (self as i32 - other as i32).unsigned_abs()
    }

    /// `First`, ..., `Eighth`, in this order.
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

macro_rules! int_from_impl {
    ($from:ident, $($t:ty)+) => {
        $(impl From<$from> for $t {
            #[inline]
            fn from(value: $from) -> Self {
                value as Self
            }
        })+
    }
}

int_from_impl! { File, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
int_from_impl! { Rank, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

macro_rules! try_from_int_impl {
    ($into:ident, $($t:ty)+) => {
        $(impl core::convert::TryFrom<$t> for $into {
            type Error = num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<Self, Self::Error> {
                if let Ok(index @ 0..=7) = u32::try_from(value) {
                    Ok($into::new(index))
                } else {
                    Err(overflow_error())
                }
            }
        })+
    }
}

try_from_int_impl! { File, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
try_from_int_impl! { Rank, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

/// Error when parsing an invalid square name.
#[derive(Clone, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSquareError {}

/// A square of the board.
///
/// Squares are packed into a single byte, with the file in the low bits.
///
/// # Formatting
///
/// [`Display`](fmt::Display) uses the lowercase algebraic name, as in move
/// notation. [`Debug`](fmt::Debug) uses the uppercase coordinate name, as in
/// board dumps.
///
/// ```
/// use skak::Square;
///
/// assert_eq!(Square::E5.to_string(), "e5");
/// assert_eq!(format!("{:?}", Square::E5), "E5");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets a `Square` from an integer index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=63`.
    pub const fn new(index: u32) -> Square {
        assert!(index < 64, "square index out of range");
        Square(index as u8)
    }

    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square(file as u8 | ((rank as u8) << 3))
    }

    /// Gets a `Square` from zero-based row (rank) and column (file) indices.
    ///
    /// Row `0` is rank 1 and column `0` is file A, so `from_indices(0, 0)`
    /// is `A1` and `from_indices(7, 7)` is `H8`.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is outside the range `0..=7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skak::Square;
    ///
    /// assert_eq!(Square::from_indices(4, 4)?, Square::E5);
    /// assert!(Square::from_indices(8, 0).is_err());
    /// assert!(Square::from_indices(0, -1).is_err());
    /// # Ok::<_, core::num::TryFromIntError>(())
    /// ```
    pub fn from_indices(row: i32, column: i32) -> Result<Square, num::TryFromIntError> {
        Ok(Square::from_coords(File::try_from(column)?, Rank::try_from(row)?))
    }

    /// Parses a square name like `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not a valid square name.
    pub const fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        if s.len() != 2 {
            return Err(ParseSquareError);
        }
        match (File::from_char(s[0] as char), Rank::from_char(s[1] as char)) {
            (Some(file), Some(rank)) => Ok(Square::from_coords(file, rank)),
            _ => Err(ParseSquareError),
        }
    }

    #[inline]
    pub const fn file(self) -> File {
        File::new((self.0 & 7) as u32)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::new((self.0 >> 3) as u32)
    }

    /// Shifts the square by a file and rank delta, staying on the board.
    ///
    /// Steps in coordinates rather than packed indices, so a shift can
    /// never wrap around the edge onto a neighbouring rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use skak::Square;
    ///
    /// assert_eq!(Square::G1.offset(-1, 2), Some(Square::F3));
    /// assert_eq!(Square::H8.offset(1, 0), None);
    /// ```
    pub fn offset(self, file_delta: i32, rank_delta: i32) -> Option<Square> {
        match (self.file().offset(file_delta), self.rank().offset(rank_delta)) {
            (Some(file), Some(rank)) => Some(Square::from_coords(file, rank)),
            _ => None,
        }
    }

    /// The Chebyshev distance between two squares: the number of king
    /// steps from one to the other.
    pub fn distance(self, other: Square) -> u32 {
        max(
            self.file().distance(other.file()),
            self.rank().distance(other.rank()),
        )
    }

    /// `A1`, `B1`, ..., `H8`, in this order.
    pub const ALL: [Square; 64] = {
        let mut all = [Square(0); 64];
        let mut index = 0;
        while index < 64 {
            all[index] = Square(index as u8);
            index += 1;
        }
        all
    };
}

macro_rules! int_from_square_impl {
    ($($t:ty)+) => {
        $(impl From<Square> for $t {
            #[inline]
            fn from(Square(index): Square) -> Self {
                index as Self
            }
        })+
    }
}

int_from_square_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        use arbitrary::Arbitrary as _;
        Ok(Square::from_coords(File::arbitrary(u)?, Rank::arbitrary(u)?))
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().char(), self.rank().char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().upper_char(), self.rank().char())
    }
}

#[cfg(feature = "serde")]
str_serde_impl! { "square name", Square }

#[allow(missing_docs)]
impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "alloc")]
    use alloc::format;

    use super::*;

    #[test]
    fn test_coords() {
        for file in File::ALL {
            for rank in Rank::ALL {
                let square = Square::from_coords(file, rank);
                assert_eq!(square.file(), file);
                assert_eq!(square.rank(), rank);
            }
        }
    }

    #[test]
    fn test_from_indices() {
        for row in 0..8 {
            for column in 0..8 {
                let square = Square::from_indices(row, column).expect("in range");
                assert_eq!(i32::from(square.rank()), row);
                assert_eq!(i32::from(square.file()), column);
            }
        }

        assert!(Square::from_indices(8, 0).is_err());
        assert!(Square::from_indices(0, 8).is_err());
        assert!(Square::from_indices(-1, 0).is_err());
        assert!(Square::from_indices(0, -1).is_err());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_coordinate_names() {
        assert_eq!(format!("{:?}", Square::from_indices(0, 0).expect("in range")), "A1");
        assert_eq!(format!("{:?}", Square::from_indices(7, 7).expect("in range")), "H8");
        assert_eq!(format!("{:?}", Square::from_indices(4, 4).expect("in range")), "E5");
    }

    #[test]
    fn test_parse() {
        assert_eq!("e4".parse::<Square>().ok(), Some(Square::E4));
        assert!("e9".parse::<Square>().is_err());
        assert!("i4".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_distance() {
        assert_eq!(Square::D2.distance(Square::G3), 3);
        assert_eq!(Square::A1.distance(Square::A1), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Square::E4).expect("serialize");
        assert_eq!(json, "\"e4\"");
        let square: Square = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(square, Square::E4);
    }
}
