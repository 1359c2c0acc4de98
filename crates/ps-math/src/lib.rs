//! predstat math utilities.

pub mod math;

pub use math::accumulator::*;
pub use math::rank::*;
