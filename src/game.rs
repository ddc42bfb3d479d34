//! Play a game move by move from algebraic notation.
//!
//! # Examples
//!
//! ```
//! use skak::{Color, Game, GameState};
//!
//! let mut game = Game::new();
//! let record = game.play_str("e4")?;
//! assert_eq!(record.to_string(), "1. e4");
//!
//! game.play_str("e5")?;
//! game.play_str("2. Nf3")?;
//!
//! assert_eq!(game.movetext().to_string(), "1. e4 e5 2. Nf3");
//! assert_eq!(game.state(), GameState::AwaitingMove(Color::Black));
//! # Ok::<_, skak::PlayError>(())
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::{
    attacks,
    board::Board,
    color::{ByColor, Color},
    role::Role,
    san::{NumberedSan, ParseSanError, San, SanError, SanPlus, Suffix},
    square::{File, Rank, Square},
    types::{CastlingSide, Move, MoveList},
};

/// Error when playing a notated move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayError {
    /// The notation is not syntactically valid.
    Parse(ParseSanError),
    /// The notation does not match a unique pseudo-legal move.
    San(SanError),
    /// The matched move would leave the mover's own king attacked.
    ExposesOwnKing,
    /// The game has already ended.
    GameOver,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PlayError::Parse(ref err) => write!(f, "{err}"),
            PlayError::San(ref err) => write!(f, "{err}"),
            PlayError::ExposesOwnKing => f.write_str("move exposes own king"),
            PlayError::GameOver => f.write_str("game over"),
        }
    }
}

impl From<ParseSanError> for PlayError {
    fn from(err: ParseSanError) -> PlayError {
        PlayError::Parse(err)
    }
}

impl From<SanError> for PlayError {
    fn from(err: SanError) -> PlayError {
        PlayError::San(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            PlayError::Parse(ref err) => Some(err),
            PlayError::San(ref err) => Some(err),
            _ => None,
        }
    }
}

/// The standing of a [`Game`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    /// The game continues with the given side to move.
    AwaitingMove(Color),
    /// The side to move has no legal moves and its king is attacked.
    Checkmate { winner: Color },
    /// The side to move has no legal moves and its king is safe.
    Stalemate,
    /// Neither side retains enough material to deliver mate.
    Drawn,
}

/// A played move as recorded in the game history.
///
/// The notation is canonical: origin coordinates appear only as far as
/// needed and the suffix reflects the position after the move.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MoveRecord {
    /// Number of the fullmove this was part of, starting at 1.
    pub number: u32,
    /// The side that moved.
    pub color: Color,
    /// The move in canonical SAN with suffix.
    pub san: SanPlus,
    /// The underlying move.
    pub m: Move,
}

/// Formats as in movetext: white moves with their number, black moves
/// without.
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.color.is_white() {
            write!(f, "{}. ", self.number)?;
        }
        write!(f, "{}", self.san)
    }
}

/// Displays a move history as movetext, like `1. e4 e5 2. Nf3`.
///
/// Returned by [`Game::movetext()`].
#[derive(Clone, Debug)]
pub struct Movetext<'a>(&'a [MoveRecord]);

impl fmt::Display for Movetext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

/// A chess game: board, side to move and move history.
///
/// Castling rights and en passant availability are judged from the
/// history rather than tracked as separate state.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    fullmoves: u32,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Starts a game from the initial position.
    pub fn new() -> Game {
        Game::from_board(Board::new(), Color::White)
    }

    /// Starts a game from an arbitrary position.
    ///
    /// The history starts empty: derived castling rights are fresh for
    /// pieces standing on their starting squares, and no en passant
    /// capture is available for the first move.
    pub fn from_board(board: Board, turn: Color) -> Game {
        Game {
            board,
            turn,
            fullmoves: 1,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current fullmove number, starting at 1 and incremented
    /// after each black move.
    pub fn fullmoves(&self) -> u32 {
        self.fullmoves
    }

    /// The moves played so far.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The history for display as movetext.
    pub fn movetext(&self) -> Movetext<'_> {
        Movetext(&self.history)
    }

    /// The standing of the game: whose turn it is, or how it ended.
    pub fn state(&self) -> GameState {
        if self.legal_moves().is_empty() {
            if self.is_check() {
                GameState::Checkmate { winner: !self.turn }
            } else {
                GameState::Stalemate
            }
        } else if self.has_insufficient_material() {
            GameState::Drawn
        } else {
            GameState::AwaitingMove(self.turn)
        }
    }

    /// Tests if the king of the side to move is attacked.
    pub fn is_check(&self) -> bool {
        king_attacked(&self.board, self.turn)
    }

    /// Tests if neither side retains enough material to deliver mate.
    ///
    /// True only for bare kings with at most one minor piece on the
    /// board in total.
    pub fn has_insufficient_material(&self) -> bool {
        let mut minors = ByColor::new_with(|_| 0u32);
        for (_, piece) in self.board.occupied() {
            match piece.role {
                Role::Pawn | Role::Rook | Role::Queen => return false,
                Role::Knight | Role::Bishop => *minors.by_color_mut(piece.color) += 1,
                Role::King => (),
            }
        }
        minors.white + minors.black <= 1
    }

    /// Generates all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        self.legal_moves_with(self.last_move())
    }

    /// Tests if castling rights remain on the given side for the side
    /// to move.
    ///
    /// Rights are gone once the king or the castling rook has moved,
    /// or the rook has been captured, even if the piece later returned
    /// to its starting square.
    pub fn castling_rights(&self, side: CastlingSide) -> bool {
        let king_from = side.king_from(self.turn);
        let rook_from = side.rook_from(self.turn);
        !self.history.iter().any(|record| {
            record.m.from() == king_from
                || record.m.from() == rook_from
                || record.m.to() == rook_from
        })
    }

    /// Parses a notated move and plays it.
    ///
    /// A move number prefix like `1. ` is tolerated but not checked:
    /// the game numbers its own records.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the notation cannot be parsed, does
    /// not match exactly one move, the move would expose the own king,
    /// or the game is already over.
    pub fn play_str(&mut self, san: &str) -> Result<MoveRecord, PlayError> {
        let token = san.parse::<NumberedSan>()?;
        self.play_san(&token.san.san)
    }

    /// Plays a parsed SAN move.
    ///
    /// A check or checkmate suffix in the input is ignored: the
    /// recorded suffix is recomputed from the resulting position, and
    /// the recorded SAN is re-disambiguated.
    pub fn play_san(&mut self, san: &San) -> Result<MoveRecord, PlayError> {
        if !matches!(self.state(), GameState::AwaitingMove(_)) {
            return Err(PlayError::GameOver);
        }

        // Resolve the origin against pseudo-legal moves first, so that
        // a uniquely named but self-checking move reports
        // ExposesOwnKing instead of NoLegalOrigin.
        let candidates = self.candidate_moves();
        let m = san.find_move(&candidates)?;
        if !self.is_safe(m) {
            return Err(PlayError::ExposesOwnKing);
        }

        let san = San::disambiguate(m, &candidates);
        let color = self.turn;
        let number = self.fullmoves;

        apply_move(&mut self.board, color, m);
        self.turn = !color;
        if color.is_black() {
            self.fullmoves += 1;
        }

        let suffix = if king_attacked(&self.board, self.turn) {
            if self.legal_moves_with(Some(m)).is_empty() {
                Some(Suffix::Checkmate)
            } else {
                Some(Suffix::Check)
            }
        } else {
            None
        };

        let record = MoveRecord {
            number,
            color,
            san: SanPlus { san, suffix },
            m,
        };
        self.history.push(record.clone());
        Ok(record)
    }

    fn last_move(&self) -> Option<Move> {
        self.history.last().map(|record| record.m)
    }

    fn legal_moves_with(&self, last: Option<Move>) -> MoveList {
        let mut moves = self.candidate_moves_with(last);
        moves.retain(|m| self.is_safe(*m));
        moves
    }

    fn candidate_moves(&self) -> MoveList {
        self.candidate_moves_with(self.last_move())
    }

    /// Pseudo-legal moves: everything movement templates, castling
    /// rights and en passant availability allow, without considering
    /// the safety of the own king.
    fn candidate_moves_with(&self, last: Option<Move>) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.board.occupied() {
            if piece.color == self.turn {
                attacks::piece_moves(&self.board, piece, from, &mut moves);
            }
        }
        self.en_passant_moves(last, &mut moves);
        self.castling_moves(&mut moves);
        moves
    }

    // An en passant capture is available only right after an enemy
    // pawn passed an adjacent pawn with a double step.
    fn en_passant_moves(&self, last: Option<Move>, moves: &mut MoveList) {
        let (from, to) = match last {
            Some(Move::Normal {
                role: Role::Pawn,
                from,
                to,
                ..
            }) if from.rank().distance(to.rank()) == 2 => (from, to),
            _ => return,
        };

        let target = Square::from_coords(
            to.file(),
            Rank::new((from.rank() as u32 + to.rank() as u32) / 2),
        );
        for file_delta in [-1, 1] {
            if let Some(origin) = to.offset(file_delta, 0) {
                if self.board.piece_at(origin) == Some(self.turn.pawn()) {
                    moves.push(Move::EnPassant {
                        from: origin,
                        to: target,
                    });
                }
            }
        }
    }

    fn castling_moves(&self, moves: &mut MoveList) {
        for side in CastlingSide::ALL {
            if !self.castling_rights(side) {
                continue;
            }

            let king = side.king_from(self.turn);
            let rook = side.rook_from(self.turn);
            if self.board.piece_at(king) != Some(self.turn.king())
                || self.board.piece_at(rook) != Some(self.turn.rook())
            {
                continue;
            }

            if self.files_between_empty(king, rook) {
                moves.push(Move::Castle { king, rook });
            }
        }
    }

    fn files_between_empty(&self, a: Square, b: Square) -> bool {
        let rank = a.rank();
        let (lo, hi) = if a.file() < b.file() {
            (a.file(), b.file())
        } else {
            (b.file(), a.file())
        };
        File::ALL
            .into_iter()
            .filter(|file| lo < *file && *file < hi)
            .all(|file| self.board.piece_at(Square::from_coords(file, rank)).is_none())
    }

    fn is_safe(&self, m: Move) -> bool {
        match m {
            // The king must not castle out of, through or into an
            // attack.
            Move::Castle { king, rook } => {
                let side = CastlingSide::from_king_side(king < rook);
                let transit = Square::from_coords(side.rook_to_file(), self.turn.backrank());
                if attacks::is_attacked(&self.board, king, !self.turn)
                    || attacks::is_attacked(&self.board, transit, !self.turn)
                {
                    return false;
                }
                let mut board = self.board.clone();
                apply_move(&mut board, self.turn, m);
                !attacks::is_attacked(&board, side.king_to(self.turn), !self.turn)
            }
            _ => {
                let mut board = self.board.clone();
                apply_move(&mut board, self.turn, m);
                !king_attacked(&board, self.turn)
            }
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

fn king_attacked(board: &Board, color: Color) -> bool {
    board
        .king_of(color)
        .map_or(false, |king| attacks::is_attacked(board, king, !color))
}

fn apply_move(board: &mut Board, turn: Color, m: Move) {
    match m {
        Move::Normal {
            role,
            from,
            to,
            promotion,
            ..
        } => {
            board.remove_piece_at(from);
            board.set_piece_at(to, promotion.unwrap_or(role).of(turn));
        }
        Move::EnPassant { from, to } => {
            board.remove_piece_at(from);
            board.remove_piece_at(Square::from_coords(to.file(), from.rank()));
            board.set_piece_at(to, turn.pawn());
        }
        Move::Castle { king, rook } => {
            let side = CastlingSide::from_king_side(king < rook);
            board.remove_piece_at(king);
            board.remove_piece_at(rook);
            board.set_piece_at(side.king_to(turn), turn.king());
            board.set_piece_at(side.rook_to(turn), turn.rook());
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_initial_moves() {
        let game = Game::new();
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.state(), GameState::AwaitingMove(Color::White));
        assert!(!game.is_check());
    }

    #[test]
    fn test_play_and_record() {
        let mut game = Game::new();

        let record = game.play_str("e4").expect("legal");
        assert_eq!(record.number, 1);
        assert_eq!(record.color, Color::White);
        assert_eq!(record.to_string(), "1. e4");
        assert_eq!(game.board().piece_at(Square::E4), Some(Color::White.pawn()));
        assert_eq!(game.board().piece_at(Square::E2), None);

        let record = game.play_str("e5").expect("legal");
        assert_eq!(record.number, 1);
        assert_eq!(record.color, Color::Black);
        assert_eq!(record.to_string(), "e5");
        assert_eq!(game.fullmoves(), 2);

        let record = game.play_str("2. Nf3").expect("legal");
        assert_eq!(record.number, 2);
        assert_eq!(record.to_string(), "2. Nf3");

        assert_eq!(game.history().len(), 3);
        assert_eq!(game.movetext().to_string(), "1. e4 e5 2. Nf3");
    }

    #[test]
    fn test_number_prefix_not_checked() {
        let mut game = Game::new();
        let record = game.play_str("99. e4").expect("legal");
        assert_eq!(record.number, 1);
    }

    #[test]
    fn test_capture() {
        let mut game = Game::new();
        for san in ["e4", "d5"] {
            game.play_str(san).expect("legal");
        }
        let record = game.play_str("exd5").expect("legal");
        assert!(record.m.is_capture());
        assert_eq!(record.m.capture(), Some(Role::Pawn));
        assert_eq!(record.san.to_string(), "exd5");
    }

    #[test]
    fn test_no_legal_origin() {
        let mut game = Game::new();
        assert_eq!(
            game.play_str("Na4"),
            Err(PlayError::San(SanError::NoLegalOrigin))
        );
        assert_eq!(
            game.play_str("e5"),
            Err(PlayError::San(SanError::NoLegalOrigin))
        );
    }

    #[test]
    fn test_ambiguous_move() {
        let mut game = Game::new();
        for san in ["Nf3", "a6", "d4", "b6"] {
            game.play_str(san).expect("legal");
        }
        // Both the b1 and the f3 knight reach d2.
        assert_eq!(
            game.play_str("Nd2"),
            Err(PlayError::San(SanError::AmbiguousMove))
        );
        let record = game.play_str("Nbd2").expect("legal");
        assert_eq!(record.san.to_string(), "Nbd2");
    }

    #[test]
    fn test_en_passant() {
        let mut game = Game::new();
        for san in ["e4", "a6", "e5", "d5"] {
            game.play_str(san).expect("legal");
        }
        let record = game.play_str("exd6").expect("en passant");
        assert!(record.m.is_en_passant());
        assert_eq!(record.san.to_string(), "exd6");
        assert_eq!(game.board().piece_at(Square::D5), None);
        assert_eq!(game.board().piece_at(Square::D6), Some(Color::White.pawn()));
    }

    #[test]
    fn test_en_passant_expires() {
        let mut game = Game::new();
        for san in ["e4", "a6", "e5", "d5", "h3", "h6"] {
            game.play_str(san).expect("legal");
        }
        assert_eq!(
            game.play_str("exd6"),
            Err(PlayError::San(SanError::NoLegalOrigin))
        );
    }

    #[test]
    fn test_castling() {
        let mut game = Game::new();
        for san in ["Nf3", "Nf6", "g3", "g6", "Bg2", "Bg7", "O-O", "O-O"] {
            game.play_str(san).expect("legal");
        }
        assert_eq!(game.board().piece_at(Square::G1), Some(Color::White.king()));
        assert_eq!(game.board().piece_at(Square::F1), Some(Color::White.rook()));
        assert_eq!(game.board().piece_at(Square::E1), None);
        assert_eq!(game.board().piece_at(Square::H1), None);
        assert_eq!(game.board().piece_at(Square::G8), Some(Color::Black.king()));
        assert_eq!(game.board().piece_at(Square::F8), Some(Color::Black.rook()));
        assert!(game.history()[6].m.is_castle());
        assert_eq!(game.history()[6].san.to_string(), "O-O");
    }

    #[test]
    fn test_castling_rights_lost_after_king_move() {
        let mut game = Game::new();
        for san in [
            "Nf3", "Nf6", "g3", "g6", "Bg2", "Bg7", "Kf1", "O-O", "Ke1", "d6",
        ] {
            game.play_str(san).expect("legal");
        }
        // The white king is back on e1, but it has moved.
        assert!(!game.castling_rights(CastlingSide::KingSide));
        assert_eq!(
            game.play_str("O-O"),
            Err(PlayError::San(SanError::NoLegalOrigin))
        );
    }

    #[test]
    fn test_castle_through_attacked_square() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::A1, Color::White.rook());
        board.set_piece_at(Square::H1, Color::White.rook());
        board.set_piece_at(Square::F8, Color::Black.rook());
        board.set_piece_at(Square::H8, Color::Black.king());

        let mut game = Game::from_board(board, Color::White);
        assert_eq!(game.play_str("O-O"), Err(PlayError::ExposesOwnKing));

        game.play_str("O-O-O").expect("queen side unaffected");
        assert_eq!(game.board().piece_at(Square::C1), Some(Color::White.king()));
        assert_eq!(game.board().piece_at(Square::D1), Some(Color::White.rook()));
    }

    #[test]
    fn test_promotion() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E7, Color::White.pawn());
        board.set_piece_at(Square::A1, Color::White.king());
        board.set_piece_at(Square::H6, Color::Black.king());

        let mut game = Game::from_board(board, Color::White);
        // A pawn cannot stay a pawn on the last rank.
        assert_eq!(
            game.play_str("e8"),
            Err(PlayError::San(SanError::NoLegalOrigin))
        );

        let record = game.play_str("e8=N").expect("legal");
        assert!(record.m.is_promotion());
        assert_eq!(record.san.to_string(), "e8=N");
        assert_eq!(
            game.board().piece_at(Square::E8),
            Some(Color::White.knight())
        );
    }

    #[test]
    fn test_pinned_piece() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E2, Color::White.knight());
        board.set_piece_at(Square::E8, Color::Black.rook());
        board.set_piece_at(Square::A8, Color::Black.king());

        let mut game = Game::from_board(board, Color::White);
        assert!(game.legal_moves().iter().all(|m| m.from() != Square::E2));
        assert_eq!(game.play_str("Nc3"), Err(PlayError::ExposesOwnKing));
        game.play_str("Kd1").expect("legal");
    }

    #[test]
    fn test_check_suffix_recomputed() {
        let mut game = Game::new();
        for san in ["e4", "d5"] {
            game.play_str(san).expect("legal");
        }
        // The claimed checkmate is downgraded to a check.
        let record = game.play_str("Bb5#").expect("legal");
        assert_eq!(record.san.suffix, Some(Suffix::Check));
        assert_eq!(record.san.to_string(), "Bb5+");
        assert_eq!(game.state(), GameState::AwaitingMove(Color::Black));
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::new();
        for san in ["f3", "e5", "g4"] {
            game.play_str(san).expect("legal");
        }
        let record = game.play_str("Qh4").expect("mate");
        assert_eq!(record.san.suffix, Some(Suffix::Checkmate));
        assert_eq!(record.san.to_string(), "Qh4#");
        assert_eq!(game.state(), GameState::Checkmate { winner: Color::Black });
        assert_eq!(game.play_str("a3"), Err(PlayError::GameOver));
    }

    #[test]
    fn test_protected_queen_mate() {
        let mut board = Board::empty();
        board.set_piece_at(Square::A8, Color::Black.king());
        board.set_piece_at(Square::B6, Color::White.king());
        board.set_piece_at(Square::A1, Color::White.queen());

        let mut game = Game::from_board(board, Color::White);
        let record = game.play_str("Qa7").expect("legal");
        assert_eq!(record.san.suffix, Some(Suffix::Checkmate));
        assert_eq!(game.state(), GameState::Checkmate { winner: Color::White });
    }

    #[test]
    fn test_unprotected_queen_is_not_mate() {
        let mut board = Board::empty();
        board.set_piece_at(Square::A8, Color::Black.king());
        board.set_piece_at(Square::E5, Color::White.king());
        board.set_piece_at(Square::A1, Color::White.queen());

        let mut game = Game::from_board(board, Color::White);
        let record = game.play_str("Qa7").expect("legal");
        assert_eq!(record.san.suffix, Some(Suffix::Check));

        let record = game.play_str("Kxa7").expect("legal");
        assert_eq!(record.m.capture(), Some(Role::Queen));
        assert_eq!(game.state(), GameState::Drawn);
    }

    #[test]
    fn test_stalemate() {
        let mut board = Board::empty();
        board.set_piece_at(Square::H8, Color::Black.king());
        board.set_piece_at(Square::F7, Color::White.queen());
        board.set_piece_at(Square::G6, Color::White.king());

        let mut game = Game::from_board(board, Color::Black);
        assert_eq!(game.state(), GameState::Stalemate);
        assert_eq!(game.play_str("Kg8"), Err(PlayError::GameOver));
    }

    #[test]
    fn test_insufficient_material() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E8, Color::Black.king());
        assert_eq!(
            Game::from_board(board.clone(), Color::White).state(),
            GameState::Drawn
        );

        board.set_piece_at(Square::C3, Color::White.bishop());
        assert_eq!(
            Game::from_board(board.clone(), Color::White).state(),
            GameState::Drawn
        );

        board.set_piece_at(Square::A2, Color::White.pawn());
        assert_eq!(
            Game::from_board(board, Color::White).state(),
            GameState::AwaitingMove(Color::White)
        );
    }
}
