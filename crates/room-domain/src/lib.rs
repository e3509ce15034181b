#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Domain types for room.

mod creature;

pub use creature::Creature;
pub use creature::DEFAULT_NAME;
pub use creature::DEFAULT_SIZE;
