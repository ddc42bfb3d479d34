//! Piece movement templates.
//!
//! Movement rules are direction-vector tables walked over the board:
//! knights and kings step once, bishops, rooks and queens slide until
//! blocked, pawns advance and capture by their own asymmetric rules.
//! En passant and castling depend on game history and are handled by
//! [`Game`](crate::Game), not here.

use crate::{
    board::Board,
    color::Color,
    role::Role,
    square::{Rank, Square},
    types::{Move, MoveList, Piece},
};

/// Knight jumps as `(file, rank)` deltas.
const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps, also the queen's sliding directions.
const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ROOK_DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Promotion choices, most common first.
const PROMOTIONS: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

/// The rank direction the color's pawns advance in.
pub fn pawn_direction(color: Color) -> i32 {
    color.fold_wb(1, -1)
}

/// Tests if `by` attacks the given square.
///
/// A defended piece of either color counts as attacked. Pins are not
/// considered.
///
/// # Examples
///
/// ```
/// use skak::{attacks, Board, Color, Square};
///
/// let board = Board::new();
/// assert!(attacks::is_attacked(&board, Square::F3, Color::White));
/// assert!(!attacks::is_attacked(&board, Square::E4, Color::Black));
/// ```
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    for (file_delta, rank_delta) in KNIGHT_DELTAS {
        if let Some(from) = sq.offset(file_delta, rank_delta) {
            if board.piece_at(from) == Some(by.knight()) {
                return true;
            }
        }
    }

    for (file_delta, rank_delta) in KING_DELTAS {
        if let Some(from) = sq.offset(file_delta, rank_delta) {
            if board.piece_at(from) == Some(by.king()) {
                return true;
            }
        }
    }

    // Pawns attack diagonally in their own forward direction, so look
    // one rank backwards from the target square.
    for file_delta in [-1, 1] {
        if let Some(from) = sq.offset(file_delta, -pawn_direction(by)) {
            if board.piece_at(from) == Some(by.pawn()) {
                return true;
            }
        }
    }

    for (file_delta, rank_delta) in ROOK_DIRS {
        if let Some(piece) = first_piece_along(board, sq, file_delta, rank_delta) {
            if piece.color == by && matches!(piece.role, Role::Rook | Role::Queen) {
                return true;
            }
        }
    }

    for (file_delta, rank_delta) in BISHOP_DIRS {
        if let Some(piece) = first_piece_along(board, sq, file_delta, rank_delta) {
            if piece.color == by && matches!(piece.role, Role::Bishop | Role::Queen) {
                return true;
            }
        }
    }

    false
}

fn first_piece_along(board: &Board, from: Square, file_delta: i32, rank_delta: i32) -> Option<Piece> {
    let mut sq = from;
    while let Some(next) = sq.offset(file_delta, rank_delta) {
        sq = next;
        if let Some(piece) = board.piece_at(sq) {
            return Some(piece);
        }
    }
    None
}

/// Appends the moves the piece on `from` can make by its movement
/// template alone.
///
/// Own-king safety is not considered. Pawn moves onto the last rank are
/// expanded into one move per promotion choice.
pub fn piece_moves(board: &Board, piece: Piece, from: Square, moves: &mut MoveList) {
    match piece.role {
        Role::Pawn => pawn_moves(board, piece.color, from, moves),
        Role::Knight => step_moves(board, piece, from, &KNIGHT_DELTAS, moves),
        Role::King => step_moves(board, piece, from, &KING_DELTAS, moves),
        Role::Bishop => slide_moves(board, piece, from, &BISHOP_DIRS, moves),
        Role::Rook => slide_moves(board, piece, from, &ROOK_DIRS, moves),
        Role::Queen => slide_moves(board, piece, from, &KING_DELTAS, moves),
    }
}

fn pawn_moves(board: &Board, color: Color, from: Square, moves: &mut MoveList) {
    let dir = pawn_direction(color);

    if let Some(to) = from.offset(0, dir) {
        if board.piece_at(to).is_none() {
            push_pawn_move(moves, color, from, None, to);

            let start = color.fold_wb(Rank::Second, Rank::Seventh);
            if from.rank() == start {
                if let Some(to) = from.offset(0, 2 * dir) {
                    if board.piece_at(to).is_none() {
                        moves.push(Move::Normal {
                            role: Role::Pawn,
                            from,
                            capture: None,
                            to,
                            promotion: None,
                        });
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(to) = from.offset(file_delta, dir) {
            if let Some(target) = board.piece_at(to) {
                if target.color != color {
                    push_pawn_move(moves, color, from, Some(target.role), to);
                }
            }
        }
    }
}

fn push_pawn_move(
    moves: &mut MoveList,
    color: Color,
    from: Square,
    capture: Option<Role>,
    to: Square,
) {
    if to.rank() == color.fold_wb(Rank::Eighth, Rank::First) {
        for promotion in PROMOTIONS {
            moves.push(Move::Normal {
                role: Role::Pawn,
                from,
                capture,
                to,
                promotion: Some(promotion),
            });
        }
    } else {
        moves.push(Move::Normal {
            role: Role::Pawn,
            from,
            capture,
            to,
            promotion: None,
        });
    }
}

fn step_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    deltas: &[(i32, i32)],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in deltas {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            match board.piece_at(to) {
                Some(target) if target.color == piece.color => {}
                target => moves.push(Move::Normal {
                    role: piece.role,
                    from,
                    capture: target.map(|t| t.role),
                    to,
                    promotion: None,
                }),
            }
        }
    }
}

fn slide_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    dirs: &[(i32, i32)],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in dirs {
        let mut to = from;
        while let Some(next) = to.offset(file_delta, rank_delta) {
            to = next;
            match board.piece_at(to) {
                None => moves.push(Move::Normal {
                    role: piece.role,
                    from,
                    capture: None,
                    to,
                    promotion: None,
                }),
                Some(target) => {
                    if target.color != piece.color {
                        moves.push(Move::Normal {
                            role: piece.role,
                            from,
                            capture: Some(target.role),
                            to,
                            promotion: None,
                        });
                    }
                    break;
                }
            }
        }
    }
}
