//! Core data models for the tournament desk.

mod ids;
mod pairing;
mod player;
mod round;

pub use ids::*;
pub use pairing::*;
pub use player::*;
pub use round::*;
