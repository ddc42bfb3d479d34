//! Read and write algebraic notation.
//!
//! # Examples
//!
//! Parse and write SANs:
//!
//! ```
//! use skak::san::San;
//!
//! let san: San = "Nf3".parse()?;
//! assert_eq!(san.to_string(), "Nf3");
//! # Ok::<_, skak::san::ParseSanError>(())
//! ```
//!
//! Movetext tokens carry an optional move number:
//!
//! ```
//! use skak::san::NumberedSan;
//!
//! let token: NumberedSan = "1. e4".parse()?;
//! assert_eq!(token.number, Some(1));
//! assert_eq!(token.san.to_string(), "e4");
//! assert_eq!(token.to_string(), "1. e4");
//! # Ok::<_, skak::san::ParseSanError>(())
//! ```

use core::{fmt, str::FromStr};

use crate::{
    role::Role,
    square::{File, Rank, Square},
    types::{CastlingSide, Move, MoveList},
};

/// Error when parsing a syntactically invalid SAN.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseSanError {
    /// A piece or promotion letter outside `NBRQK`.
    UnknownPieceLetter,
    /// The notation ends before naming a destination square.
    MissingDestination,
    /// The notation does not follow the SAN grammar.
    Malformed,
}

impl fmt::Display for ParseSanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            ParseSanError::UnknownPieceLetter => "unknown piece letter",
            ParseSanError::MissingDestination => "missing destination square",
            ParseSanError::Malformed => "malformed san",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSanError {}

/// `NoLegalOrigin` or `AmbiguousMove`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SanError {
    /// No piece can make the matching move.
    NoLegalOrigin,
    /// More than one piece can make the matching move.
    AmbiguousMove,
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            SanError::NoLegalOrigin => "no legal origin for san",
            SanError::AmbiguousMove => "ambiguous san",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SanError {}

/// Error when encoding a capturing pawn move without an origin file.
#[derive(Clone, Debug)]
pub struct AmbiguousPawnCapture;

impl fmt::Display for AmbiguousPawnCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pawn capture without origin file")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AmbiguousPawnCapture {}

/// A move in Standard Algebraic Notation.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum San {
    Normal {
        role: Role,
        file: Option<File>,
        rank: Option<Rank>,
        capture: bool,
        to: Square,
        promotion: Option<Role>,
    },
    Castle(CastlingSide),
}

// SAN names every piece except the pawn by an uppercase letter.
const fn role_from_letter(ch: u8) -> Option<Role> {
    Some(match ch {
        b'N' => Role::Knight,
        b'B' => Role::Bishop,
        b'R' => Role::Rook,
        b'Q' => Role::Queen,
        b'K' => Role::King,
        _ => return None,
    })
}

impl San {
    /// Parses a SAN. Ignores a possible check or checkmate suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSanError`] if `san` is not syntactically valid.
    /// Piece and promotion letters must come from `NBRQK`, so `Pe4`
    /// and `e8=q` are [`ParseSanError::UnknownPieceLetter`]. A
    /// capturing pawn move must name its origin file, so `xf5` is
    /// [`ParseSanError::Malformed`] while `exf5` is fine.
    pub fn from_ascii(mut san: &[u8]) -> Result<San, ParseSanError> {
        if san.ends_with(b"#") || san.ends_with(b"+") {
            san = &san[0..(san.len() - 1)];
        }

        if san == b"O-O" {
            return Ok(San::Castle(CastlingSide::KingSide));
        } else if san == b"O-O-O" {
            return Ok(San::Castle(CastlingSide::QueenSide));
        }

        let mut chars = san.iter().copied();

        let ch = chars.next().ok_or(ParseSanError::MissingDestination)?;
        let (role, next) = if ch.is_ascii_uppercase() {
            (
                role_from_letter(ch).ok_or(ParseSanError::UnknownPieceLetter)?,
                chars.next().ok_or(ParseSanError::MissingDestination)?,
            )
        } else {
            (Role::Pawn, ch)
        };

        let (file, next) = if let Some(file) = File::from_char(char::from(next)) {
            (Some(file), chars.next().ok_or(ParseSanError::MissingDestination)?)
        } else {
            (None, next)
        };

        let (rank, next) = if let Some(rank) = Rank::from_char(char::from(next)) {
            (Some(rank), chars.next())
        } else {
            (None, Some(next))
        };

        // Coordinates are already validated by File::from_char and
        // Rank::from_char.
        let (capture, file, rank, to, next) = if let Some(next) = next {
            if next == b'x' {
                let to_file = File::from_char(char::from(
                    chars.next().ok_or(ParseSanError::MissingDestination)?,
                ))
                .ok_or(ParseSanError::Malformed)?;
                let to_rank = Rank::from_char(char::from(
                    chars.next().ok_or(ParseSanError::MissingDestination)?,
                ))
                .ok_or(ParseSanError::Malformed)?;
                let square = Square::from_coords(to_file, to_rank);
                (true, file, rank, square, chars.next())
            } else if next == b'=' {
                let square = Square::from_coords(
                    file.ok_or(ParseSanError::Malformed)?,
                    rank.ok_or(ParseSanError::Malformed)?,
                );
                (false, None, None, square, Some(b'='))
            } else {
                let to_file = File::from_char(char::from(next)).ok_or(ParseSanError::Malformed)?;
                let to_rank = Rank::from_char(char::from(
                    chars.next().ok_or(ParseSanError::MissingDestination)?,
                ))
                .ok_or(ParseSanError::Malformed)?;
                let square = Square::from_coords(to_file, to_rank);
                (false, file, rank, square, chars.next())
            }
        } else {
            let square = Square::from_coords(
                file.ok_or(ParseSanError::MissingDestination)?,
                rank.ok_or(ParseSanError::MissingDestination)?,
            );
            (false, None, None, square, None)
        };

        let promotion = match next {
            Some(b'=') => {
                let ch = chars.next().ok_or(ParseSanError::Malformed)?;
                Some(role_from_letter(ch).ok_or(ParseSanError::UnknownPieceLetter)?)
            }
            Some(_) => return Err(ParseSanError::Malformed),
            None => None,
        };

        if chars.next().is_some() {
            return Err(ParseSanError::Malformed);
        }

        // A capturing pawn must name its origin file.
        if role == Role::Pawn && capture && file.is_none() {
            return Err(ParseSanError::Malformed);
        }

        Ok(San::Normal {
            role,
            file,
            rank,
            capture,
            to,
            promotion,
        })
    }

    /// Converts a move to SAN, disambiguating against the other moves
    /// the same side could make.
    ///
    /// Origin coordinates are included only as far as needed: the file
    /// if that settles it, the rank if origins share a file, and both
    /// as a last resort. Capturing pawn moves always name their origin
    /// file.
    pub fn disambiguate(m: Move, moves: &MoveList) -> San {
        match m {
            Move::Normal {
                role: Role::Pawn,
                from,
                capture,
                to,
                promotion,
            } => San::Normal {
                role: Role::Pawn,
                file: if capture.is_some() {
                    Some(from.file())
                } else {
                    None
                },
                rank: None,
                capture: capture.is_some(),
                to,
                promotion,
            },
            Move::Normal {
                role,
                from,
                capture,
                to,
                promotion,
            } => {
                let (rank, file) = moves
                    .iter()
                    .filter(|c| match **c {
                        Move::Normal {
                            role: r,
                            to: t,
                            promotion: p,
                            ..
                        } => role == r && to == t && promotion == p,
                        _ => false,
                    })
                    .fold((false, false), |(rank, file), c| match *c {
                        Move::Normal {
                            from: candidate, ..
                        } => {
                            if from == candidate {
                                (rank, file)
                            } else if from.rank() == candidate.rank()
                                || from.file() != candidate.file()
                            {
                                (rank, true)
                            } else {
                                (true, file)
                            }
                        }
                        _ => (rank, file),
                    });

                San::Normal {
                    role,
                    file: if file { Some(from.file()) } else { None },
                    rank: if rank { Some(from.rank()) } else { None },
                    capture: capture.is_some(),
                    to,
                    promotion,
                }
            }
            Move::EnPassant { from, to } => San::Normal {
                role: Role::Pawn,
                file: Some(from.file()),
                rank: None,
                capture: true,
                to,
                promotion: None,
            },
            Move::Castle { king, rook } if rook.file() < king.file() => {
                San::Castle(CastlingSide::QueenSide)
            }
            Move::Castle { .. } => San::Castle(CastlingSide::KingSide),
        }
    }

    /// Searches a [`MoveList`] for a unique matching move.
    ///
    /// # Errors
    ///
    /// Returns [`SanError::NoLegalOrigin`] if no move matches, and
    /// [`SanError::AmbiguousMove`] if more than one does.
    pub fn find_move(&self, moves: &MoveList) -> Result<Move, SanError> {
        let mut filtered = moves.iter().copied().filter(|m| self.matches(*m));

        let m = match filtered.next() {
            Some(m) => m,
            None => return Err(SanError::NoLegalOrigin),
        };

        if filtered.next().is_some() {
            Err(SanError::AmbiguousMove)
        } else {
            Ok(m)
        }
    }

    /// Test if the `San` can match the `Move` (in any position).
    ///
    /// # Examples
    ///
    /// ```
    /// use skak::{san::San, Move, Role, Square};
    ///
    /// let m = Move::Normal {
    ///     role: Role::Knight,
    ///     from: Square::G1,
    ///     to: Square::F3,
    ///     capture: None,
    ///     promotion: None,
    /// };
    ///
    /// let nf3 = San::from_ascii(b"Nf3")?;
    /// assert!(nf3.matches(m));
    ///
    /// let ng1f3 = San::from_ascii(b"Ng1f3")?;
    /// assert!(ng1f3.matches(m));
    ///
    /// // capture does not match
    /// let nxf3 = San::from_ascii(b"Nxf3")?;
    /// assert!(!nxf3.matches(m));
    ///
    /// // other file does not match
    /// let nef3 = San::from_ascii(b"Nef3")?;
    /// assert!(!nef3.matches(m));
    ///
    /// # Ok::<_, skak::san::ParseSanError>(())
    /// ```
    pub fn matches(&self, m: Move) -> bool {
        match *self {
            San::Normal {
                role,
                file,
                rank,
                capture,
                to,
                promotion,
            } => match m {
                Move::Normal {
                    role: r,
                    from,
                    capture: c,
                    to: t,
                    promotion: pr,
                } => {
                    role == r
                        && file.map_or(true, |f| f == from.file())
                        && rank.map_or(true, |r| r == from.rank())
                        && capture == c.is_some()
                        && to == t
                        && promotion == pr
                }
                Move::EnPassant { from, to: t } => {
                    role == Role::Pawn
                        && file.map_or(true, |f| f == from.file())
                        && rank.map_or(true, |r| r == from.rank())
                        && capture
                        && to == t
                        && promotion.is_none()
                }
                _ => false,
            },
            San::Castle(side) => m.castling_side().map_or(false, |s| side == s),
        }
    }

    /// Writes the SAN, rejecting a capturing pawn move that does not
    /// name its origin file.
    ///
    /// # Errors
    ///
    /// Returns [`AmbiguousPawnCapture`] if the origin file of a pawn
    /// capture is unknown.
    #[cfg(feature = "alloc")]
    pub fn notation(&self) -> Result<alloc::string::String, AmbiguousPawnCapture> {
        use alloc::string::ToString;

        match *self {
            San::Normal {
                role: Role::Pawn,
                file: None,
                capture: true,
                ..
            } => Err(AmbiguousPawnCapture),
            _ => Ok(self.to_string()),
        }
    }
}

impl FromStr for San {
    type Err = ParseSanError;

    fn from_str(san: &str) -> Result<San, ParseSanError> {
        San::from_ascii(san.as_bytes())
    }
}

impl fmt::Display for San {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            San::Normal {
                role,
                file,
                rank,
                capture,
                to,
                promotion,
            } => {
                if role != Role::Pawn {
                    write!(f, "{}", role.upper_char())?;
                }
                if let Some(file) = file {
                    write!(f, "{}", file.char())?;
                }
                if let Some(rank) = rank {
                    write!(f, "{}", rank.char())?;
                }
                if capture {
                    write!(f, "x")?;
                }
                write!(f, "{to}")?;
                if let Some(promotion) = promotion {
                    write!(f, "={}", promotion.upper_char())?;
                }
                Ok(())
            }
            San::Castle(CastlingSide::KingSide) => write!(f, "O-O"),
            San::Castle(CastlingSide::QueenSide) => write!(f, "O-O-O"),
        }
    }
}

#[cfg(feature = "serde")]
str_serde_impl! { "san", San }

/// Check (`+`) or checkmate (`#`) suffix.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Suffix {
    Check,
    Checkmate,
}

impl Suffix {
    pub const fn char(self) -> char {
        match self {
            Suffix::Check => '+',
            Suffix::Checkmate => '#',
        }
    }

    pub const fn from_char(ch: char) -> Option<Suffix> {
        match ch {
            '+' => Some(Suffix::Check),
            '#' => Some(Suffix::Checkmate),
            _ => None,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A [`San`] and possible check and checkmate suffixes.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct SanPlus {
    pub san: San,
    pub suffix: Option<Suffix>,
}

impl SanPlus {
    /// Parses a SAN and possible check and checkmate suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSanError`] if `san` is not syntactically valid.
    pub fn from_ascii(san: &[u8]) -> Result<SanPlus, ParseSanError> {
        San::from_ascii(san).map(|result| SanPlus {
            san: result,
            suffix: san
                .last()
                .copied()
                .and_then(|ch| Suffix::from_char(char::from(ch))),
        })
    }

    /// Writes the SAN and suffix, rejecting a capturing pawn move that
    /// does not name its origin file.
    ///
    /// # Errors
    ///
    /// Returns [`AmbiguousPawnCapture`] if the origin file of a pawn
    /// capture is unknown.
    #[cfg(feature = "alloc")]
    pub fn notation(&self) -> Result<alloc::string::String, AmbiguousPawnCapture> {
        use alloc::string::ToString;

        self.san.notation()?;
        Ok(self.to_string())
    }
}

impl FromStr for SanPlus {
    type Err = ParseSanError;

    fn from_str(san: &str) -> Result<SanPlus, ParseSanError> {
        SanPlus::from_ascii(san.as_bytes())
    }
}

impl fmt::Display for SanPlus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.san)?;
        if let Some(suffix) = self.suffix {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
str_serde_impl! { "san with suffix", SanPlus }

/// A movetext token: a [`SanPlus`] with an optional move number, like
/// `1. e4`.
///
/// White moves are conventionally written with their move number and
/// black moves without, but any token parses either way. The number is
/// informational and kept as written.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct NumberedSan {
    pub number: Option<u32>,
    pub san: SanPlus,
}

impl NumberedSan {
    /// Parses a SAN with an optional `<number>. ` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSanError`] if the remaining SAN is not
    /// syntactically valid or the move number does not fit.
    pub fn from_ascii(san: &[u8]) -> Result<NumberedSan, ParseSanError> {
        let digits = san.iter().take_while(|ch| ch.is_ascii_digit()).count();
        if digits > 0 && san[digits..].starts_with(b". ") {
            Ok(NumberedSan {
                number: Some(btoi::btou(&san[..digits]).map_err(|_| ParseSanError::Malformed)?),
                san: SanPlus::from_ascii(&san[digits + 2..])?,
            })
        } else {
            Ok(NumberedSan {
                number: None,
                san: SanPlus::from_ascii(san)?,
            })
        }
    }

    /// Writes the token, rejecting a capturing pawn move that does not
    /// name its origin file.
    ///
    /// # Errors
    ///
    /// Returns [`AmbiguousPawnCapture`] if the origin file of a pawn
    /// capture is unknown.
    #[cfg(feature = "alloc")]
    pub fn notation(&self) -> Result<alloc::string::String, AmbiguousPawnCapture> {
        use alloc::string::ToString;

        self.san.san.notation()?;
        Ok(self.to_string())
    }
}

impl FromStr for NumberedSan {
    type Err = ParseSanError;

    fn from_str(san: &str) -> Result<NumberedSan, ParseSanError> {
        NumberedSan::from_ascii(san.as_bytes())
    }
}

impl fmt::Display for NumberedSan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(number) = self.number {
            write!(f, "{number}. ")?;
        }
        write!(f, "{}", self.san)
    }
}

#[cfg(feature = "serde")]
str_serde_impl! { "san with move number", NumberedSan }

#[cfg(test)]
mod tests {
    #[cfg(feature = "alloc")]
    use alloc::string::ToString;
    use core::mem;

    use super::*;

    #[test]
    fn test_size() {
        assert!(mem::size_of::<San>() <= 8);
        assert!(mem::size_of::<SanPlus>() <= 8);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_read_write() {
        for san in &[
            "a1", "a8", "h1", "h8", "e4", "b6", "e4=Q", "f1=N#", "hxg7", "bxc1", "axe4", "bxc1+",
            "bxa8=R+", "Nf3", "Ba5", "Qh8", "Kh1", "Bba5", "N2c4", "Red3", "d1=N", "Ra1a8", "O-O",
            "O-O-O+",
        ] {
            let result = san.parse::<SanPlus>().expect("valid san").to_string();
            assert_eq!(*san, result, "read {} write {}", san, result);
        }
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_numbered_read_write() {
        for san in &[
            "1. e4", "e5", "2. Nf3", "Nc6", "8. e8=Q", "exf5#", "Rae5", "1. O-O", "12. Qxh7+",
            "100. Kh1",
        ] {
            let result = san.parse::<NumberedSan>().expect("valid san").to_string();
            assert_eq!(*san, result, "read {} write {}", san, result);
        }

        let token = "3. Bb5+".parse::<NumberedSan>().expect("valid san");
        assert_eq!(token.number, Some(3));
        assert_eq!(token.san.suffix, Some(Suffix::Check));

        let token = "Qh4#".parse::<NumberedSan>().expect("valid san");
        assert_eq!(token.number, None);
        assert_eq!(token.san.suffix, Some(Suffix::Checkmate));
    }

    #[test]
    fn test_parse_errors() {
        for (san, expected) in &[
            ("", ParseSanError::MissingDestination),
            ("N", ParseSanError::MissingDestination),
            ("Nx", ParseSanError::MissingDestination),
            ("Zf3", ParseSanError::UnknownPieceLetter),
            ("Pe4", ParseSanError::UnknownPieceLetter),
            ("e8=Z", ParseSanError::UnknownPieceLetter),
            ("e8=P", ParseSanError::UnknownPieceLetter),
            ("e8=q", ParseSanError::UnknownPieceLetter),
            ("e9", ParseSanError::Malformed),
            ("xf5", ParseSanError::Malformed),
            ("exf5x", ParseSanError::Malformed),
            ("e8=", ParseSanError::Malformed),
            ("e8=Qx", ParseSanError::Malformed),
            ("1.e4", ParseSanError::Malformed),
        ] {
            assert_eq!(
                san.parse::<NumberedSan>(),
                Err(expected.clone()),
                "parsing {}",
                san
            );
        }
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_lax_pawn_move_san_roundtrip() {
        let san = "6h8".parse::<San>().expect("kinda valid san");
        assert_eq!(
            san,
            San::Normal {
                role: Role::Pawn,
                file: None,
                rank: Some(Rank::Sixth),
                capture: false,
                to: Square::H8,
                promotion: None,
            }
        );
        assert_eq!(san.to_string(), "6h8");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_disambiguate() {
        let rook_to_e5 = |from: Square| Move::Normal {
            role: Role::Rook,
            from,
            capture: None,
            to: Square::E5,
            promotion: None,
        };

        let mut moves = MoveList::new();
        moves.push(rook_to_e5(Square::A5));
        moves.push(rook_to_e5(Square::H5));
        assert_eq!(
            San::disambiguate(rook_to_e5(Square::A5), &moves).to_string(),
            "Rae5"
        );

        let mut moves = MoveList::new();
        moves.push(rook_to_e5(Square::E1));
        moves.push(rook_to_e5(Square::E8));
        assert_eq!(
            San::disambiguate(rook_to_e5(Square::E1), &moves).to_string(),
            "R1e5"
        );

        let mut moves = MoveList::new();
        moves.push(rook_to_e5(Square::A5));
        assert_eq!(
            San::disambiguate(rook_to_e5(Square::A5), &moves).to_string(),
            "Re5"
        );

        // Queens on e4, h4 and h1 all reach e1. The h4 queen shares
        // its file with h1 and its rank with e4, so it takes both
        // coordinates, while the e4 queen gets by with its file.
        let queen_to_e1 = |from: Square| Move::Normal {
            role: Role::Queen,
            from,
            capture: None,
            to: Square::E1,
            promotion: None,
        };

        let mut moves = MoveList::new();
        moves.push(queen_to_e1(Square::E4));
        moves.push(queen_to_e1(Square::H4));
        moves.push(queen_to_e1(Square::H1));
        assert_eq!(
            San::disambiguate(queen_to_e1(Square::H4), &moves).to_string(),
            "Qh4e1"
        );
        assert_eq!(
            San::disambiguate(queen_to_e1(Square::E4), &moves).to_string(),
            "Qee1"
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_pawn_capture_notation() {
        let capture = San::Normal {
            role: Role::Pawn,
            file: Some(File::E),
            rank: None,
            capture: true,
            to: Square::F5,
            promotion: None,
        };
        assert_eq!(capture.notation().expect("has origin file"), "exf5");

        let missing_file = San::Normal {
            role: Role::Pawn,
            file: None,
            rank: None,
            capture: true,
            to: Square::F5,
            promotion: None,
        };
        assert!(missing_file.notation().is_err());
    }

    #[test]
    fn test_find_move() {
        let knight = |from: Square, to: Square| Move::Normal {
            role: Role::Knight,
            from,
            capture: None,
            to,
            promotion: None,
        };

        let mut moves = MoveList::new();
        moves.push(knight(Square::G1, Square::F3));
        moves.push(knight(Square::B1, Square::C3));

        let san = "Nf3".parse::<San>().expect("valid san");
        assert_eq!(san.find_move(&moves), Ok(knight(Square::G1, Square::F3)));

        let san = "Nd4".parse::<San>().expect("valid san");
        assert_eq!(san.find_move(&moves), Err(SanError::NoLegalOrigin));

        moves.push(knight(Square::D2, Square::F3));
        let san = "Nf3".parse::<San>().expect("valid san");
        assert_eq!(san.find_move(&moves), Err(SanError::AmbiguousMove));

        let san = "Ngf3".parse::<San>().expect("valid san");
        assert_eq!(san.find_move(&moves), Ok(knight(Square::G1, Square::F3)));
    }

    #[cfg(feature = "serde")]
    #[cfg(feature = "std")]
    #[test]
    fn test_serde() {
        let token: NumberedSan = serde_json::from_str("\"1. e4\"").expect("valid san");
        assert_eq!(token.number, Some(1));
        assert_eq!(
            serde_json::to_string(&token).expect("serialize"),
            "\"1. e4\""
        );
    }
}
