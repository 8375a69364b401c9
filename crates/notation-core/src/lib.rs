//! Move notation for board-game variants.
//!
//! A move arrives as a coordinate move plus board encodings before and after it.
//! The encodings are decoded into [`Position`]s in a shared frame (file 1 is the
//! first player's rightmost file, rank 1 the top row), the board diff classifies
//! the move, and the variant's notation style picks the generator that renders it.
//! The main entry point is [`Notator`].

pub mod classify;
pub mod disambiguation;
pub mod error;
pub mod notation;
pub mod piece;
pub mod position;
pub mod promotion;
pub mod square;
pub mod variant;

pub use error::NotationError;
pub use notation::mancala::mancala_score;
pub use notation::{notation_fn, MoveDescriptor, MoveInput, NotationFn, Notator};
pub use piece::Piece;
pub use position::Position;
pub use square::{Origin, Square};
pub use variant::{NotationStyle, Variant};
