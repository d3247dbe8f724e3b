//! Classic interview-book exercises: bit tricks, primitive arithmetic, array rearrangement
//! and sampling. Every routine is a standalone function without shared state.

pub mod arrays;
pub mod bits;
pub mod error;
pub mod permutation;
pub mod primes;
pub mod primitive;
pub mod sampling;
pub mod utils;

pub use error::{Error, InputError, PermutationError};
pub use permutation::apply_permutation;
