extern crate alloc;

pub mod battle;
pub mod error;
pub mod log;

pub use battle::*;
pub use duel_data as data;
pub use duel_prng as rng;
pub use error::*;
