//! Fuzz target for the public sequence operations
//!
//! # Strategy
//!
//! - Arbitrary strings: any UTF-8, including multi-byte scalar values
//! - Arbitrary integer vectors: any length, full i64 range
//!
//! # Invariants
//!
//! - `reverse_string` and `reverse_slice` are length-preserving involutions
//! - `find_max` fails iff the input is empty, and the result is an element
//!   no other element exceeds
//! - `is_palindrome(s)` iff `s == reverse_string(s)`
//! - NEVER panic on any input

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sequin_core::{find_max, is_palindrome, reverse_slice, reverse_string};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    text: String,
    numbers: Vec<i64>,
}

fuzz_target!(|input: FuzzInput| {
    let reversed = reverse_string(&input.text);
    assert_eq!(reversed.chars().count(), input.text.chars().count());
    assert_eq!(reverse_string(&reversed), input.text);
    assert_eq!(is_palindrome(&input.text), input.text == reversed);

    let reversed_nums = reverse_slice(&input.numbers);
    assert_eq!(reversed_nums.len(), input.numbers.len());
    assert_eq!(reverse_slice(&reversed_nums), input.numbers);

    match find_max(&input.numbers) {
        Ok(max) => {
            assert!(!input.numbers.is_empty());
            assert!(input.numbers.contains(&max));
            assert!(input.numbers.iter().all(|&n| n <= max));
        }
        Err(_) => assert!(input.numbers.is_empty()),
    }
});
