//! Sequin Sequence Utilities
//!
//! Pure, stateless operations over sequences: aggregation (maximum, sum)
//! and order reversal (strings, slices, palindrome testing).
//!
//! # Design
//!
//! All functions in this crate are pure - they have no side effects,
//! perform no I/O, and produce deterministic outputs given the same
//! inputs. Inputs are never mutated; outputs are freshly allocated and
//! unshared, so every operation is safe to call concurrently from any
//! number of threads.
//!
//! # Error Model
//!
//! The only fallible operation is [`find_max`], which rejects an empty
//! collection with [`EmptyInputError`]. Every other operation is total:
//! the empty input is a valid input with a well-defined result (empty
//! output for reversal, zero for summation, `true` for palindromes).

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod error;
pub mod reverse;

pub use aggregate::{find_max, sum};
pub use error::EmptyInputError;
pub use reverse::{is_palindrome, reverse_slice, reverse_string};
