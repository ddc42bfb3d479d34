use core::fmt;

use crate::{
    color::Color,
    role::Role,
    square::{File, Rank, Square},
    types::Piece,
};

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// [`Piece`] positions on a board.
///
/// Cells are held in an 8x8 grid addressed by rank and file.
///
/// # Examples
///
/// ```
/// use skak::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
/// assert_eq!(board.piece_at(Square::E4), None);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Sets up the starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for (file, role) in File::ALL.into_iter().zip(BACK_RANK) {
            board.set_piece_at(Square::from_coords(file, Rank::First), role.of(Color::White));
            board.set_piece_at(Square::from_coords(file, Rank::Eighth), role.of(Color::Black));
        }
        for file in File::ALL {
            board.set_piece_at(Square::from_coords(file, Rank::Second), Color::White.pawn());
            board.set_piece_at(Square::from_coords(file, Rank::Seventh), Color::Black.pawn());
        }
        board
    }

    /// An empty board.
    pub const fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    #[inline]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.rank() as usize][sq.file() as usize]
    }

    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.rank() as usize][sq.file() as usize] = Some(piece);
    }

    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.rank() as usize][sq.file() as usize].take()
    }

    /// Finds the king of the given color.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|&(_, piece)| piece == color.king())
            .map(|(sq, _)| sq)
    }

    /// Iterates over occupied cells in square order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .into_iter()
            .filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// Renders the board as a text grid, rank 1 at the top.
///
/// Occupied cells show the color letter followed by the piece letter,
/// empty cells show `__`:
///
/// ```text
///    A  B  C  D  E  F  G  H
///    _________________________
/// 1  |WR|WN|WB|WQ|WK|WB|WN|WR|
/// 2  |WP|WP|WP|WP|WP|WP|WP|WP|
/// 3  |__|__|__|__|__|__|__|__|
/// ...
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   A  B  C  D  E  F  G  H\n")?;
        f.write_str("   _________________________\n")?;
        for rank in Rank::ALL {
            write!(f, "{}  |", rank.char())?;
            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        write!(f, "{}{}|", piece.color.upper_char(), piece.role.upper_char())?
                    }
                    None => f.write_str("__|")?,
                }
            }
            f.write_str("\n")?;
        }
        f.write_str("   _________________________\n")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ByColor;

    #[test]
    fn test_initial_position() {
        let board = Board::new();

        let mut counts = ByColor::new_with(|_| 0usize);
        for (_, piece) in board.occupied() {
            *counts.by_color_mut(piece.color) += 1;
        }
        assert_eq!(
            counts,
            ByColor {
                white: 16,
                black: 16,
            }
        );

        assert_eq!(board.piece_at(Square::A1), Some(Color::White.rook()));
        assert_eq!(board.piece_at(Square::D8), Some(Color::Black.queen()));
        assert_eq!(board.king_of(Color::White), Some(Square::E1));
        assert_eq!(board.king_of(Color::Black), Some(Square::E8));

        for (sq, piece) in board.occupied() {
            if piece.role == Role::Pawn {
                assert!(matches!(sq.rank(), Rank::Second | Rank::Seventh));
            }
        }
    }

    #[test]
    fn test_set_and_remove() {
        let mut board = Board::empty();
        assert_eq!(board.piece_at(Square::C3), None);

        board.set_piece_at(Square::C3, Color::Black.bishop());
        assert_eq!(board.piece_at(Square::C3), Some(Color::Black.bishop()));

        assert_eq!(board.remove_piece_at(Square::C3), Some(Color::Black.bishop()));
        assert_eq!(board.piece_at(Square::C3), None);
        assert_eq!(board.remove_piece_at(Square::C3), None);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_render() {
        use alloc::string::ToString;

        assert_eq!(
            Board::new().to_string(),
            concat!(
                "   A  B  C  D  E  F  G  H\n",
                "   _________________________\n",
                "1  |WR|WN|WB|WQ|WK|WB|WN|WR|\n",
                "2  |WP|WP|WP|WP|WP|WP|WP|WP|\n",
                "3  |__|__|__|__|__|__|__|__|\n",
                "4  |__|__|__|__|__|__|__|__|\n",
                "5  |__|__|__|__|__|__|__|__|\n",
                "6  |__|__|__|__|__|__|__|__|\n",
                "7  |BP|BP|BP|BP|BP|BP|BP|BP|\n",
                "8  |BR|BN|BB|BQ|BK|BB|BN|BR|\n",
                "   _________________________\n",
            )
        );
    }
}
