//! A library for chess board state and algebraic notation.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use skak::Game;
//!
//! let game = Game::new();
//! assert_eq!(game.legal_moves().len(), 20);
//! ```
//!
//! Play moves from notation and render the history as movetext:
//!
//! ```
//! use skak::Game;
//!
//! let mut game = Game::new();
//! game.play_str("1. e4")?;
//! game.play_str("e5")?;
//! game.play_str("2. Nf3")?;
//!
//! assert_eq!(game.movetext().to_string(), "1. e4 e5 2. Nf3");
//! # Ok::<_, skak::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! use skak::{Color, Game, GameState};
//!
//! let mut game = Game::new();
//! for san in ["f3", "e5", "g4", "Qh4"] {
//!     game.play_str(san)?;
//! }
//!
//! assert_eq!(game.state(), GameState::Checkmate { winner: Color::Black });
//! # Ok::<_, skak::PlayError>(())
//! ```
//!
//! Moves are read and written in [SAN](san), with an optional movetext
//! number prefix.
//!
//! # Feature flags
//!
//! * `alloc`: Enables APIs which require the
//!   [`alloc`](https://doc.rust-lang.org/stable/alloc/index.html) crate
//!   (e.g. playing games and rendering notation).
//! * `std`: Implies `alloc`. Enabled by default.
//!   For `no_std` environments, this must be disabled with `default-features = false`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![no_std]
#![doc(html_root_url = "https://docs.rs/skak/0.1.0")]
#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod util;
mod color;
mod role;
mod square;
mod types;

pub mod attacks;
pub mod board;
pub mod san;

#[cfg(feature = "alloc")]
pub mod game;

pub use board::Board;
pub use color::{ByColor, Color, ParseColorError};
#[cfg(feature = "alloc")]
pub use game::{Game, GameState, MoveRecord, Movetext, PlayError};
pub use role::Role;
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::{CastlingSide, Move, MoveList, Piece};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
