//! Order reversal for character and element sequences.
//!
//! Reversal operates on Unicode scalar values (`char`), not bytes and not
//! grapheme clusters: byte reversal would produce invalid UTF-8, and
//! combining-character awareness is out of scope. Every operation here is
//! total - the empty input succeeds and maps to the empty output.

/// Returns a new string with the `char`s of `s` in reverse order.
///
/// Length-preserving in `char` count, and an involution: reversing twice
/// yields the original.
///
/// # Example
///
/// ```
/// use sequin_core::reverse_string;
///
/// assert_eq!(reverse_string("hello"), "olleh");
/// assert_eq!(reverse_string(""), "");
/// ```
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Returns a new vector with the elements of `values` in reverse order.
///
/// The input is untouched. Like [`reverse_string`], this is a
/// length-preserving involution.
pub fn reverse_slice<T: Clone>(values: &[T]) -> Vec<T> {
    values.iter().rev().cloned().collect()
}

/// Returns true if the `char` sequence of `s` reads the same forwards and
/// backwards.
///
/// Case-sensitive; no whitespace or punctuation normalization. The empty
/// string and single-`char` strings are palindromes.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}
