extern crate alloc;

mod mons;
mod moves;

#[cfg(test)]
mod test_util;

pub use mons::*;
pub use moves::*;
