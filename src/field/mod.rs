//! Player field and its end-of-game bookkeeping.

pub mod player_field;

pub use player_field::PlayerField;
