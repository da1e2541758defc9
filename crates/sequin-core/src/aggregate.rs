//! Linear aggregation over numeric sequences.
//!
//! Both operations are single-pass folds: O(n) time, O(1) extra space,
//! no mutation of the input.

use crate::error::EmptyInputError;

/// Returns the maximum element of `values` by standard ordering.
///
/// Ties return that value; no index is reported.
///
/// # Errors
///
/// Fails with [`EmptyInputError`] if `values` is empty.
///
/// # Example
///
/// ```
/// use sequin_core::find_max;
///
/// assert_eq!(find_max(&[3, 1, 4, 1, 5, 9, 2, 6]), Ok(9));
/// assert!(find_max::<i64>(&[]).is_err());
/// ```
pub fn find_max<T: Ord + Copy>(values: &[T]) -> Result<T, EmptyInputError> {
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        tracing::trace!("find_max rejected empty input");
        return Err(EmptyInputError);
    };
    Ok(iter.fold(first, T::max))
}

/// Returns the sum of all elements in `values`.
///
/// The empty sequence sums to 0; there is no error condition. Inputs are
/// expected to fit an `i64` accumulator.
pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_max_returns_largest() {
        assert_eq!(find_max(&[3, 1, 4, 1, 5, 9, 2, 6]), Ok(9));
    }

    #[test]
    fn find_max_handles_all_negative() {
        assert_eq!(find_max(&[-5, -1, -10]), Ok(-1));
    }

    #[test]
    fn find_max_singleton_returns_element() {
        assert_eq!(find_max(&[42]), Ok(42));
    }

    #[test]
    fn find_max_rejects_empty() {
        assert_eq!(find_max::<i64>(&[]), Err(EmptyInputError));
    }

    #[test]
    fn find_max_ties_return_the_value() {
        assert_eq!(find_max(&[7, 7, 7]), Ok(7));
    }

    #[test]
    fn find_max_works_for_other_widths() {
        assert_eq!(find_max(&[1u8, 255, 3]), Ok(255));
        assert_eq!(find_max(&[i32::MIN, i32::MAX]), Ok(i32::MAX));
    }

    #[test]
    fn sum_of_empty_is_zero() {
        assert_eq!(sum(&[]), 0);
    }

    #[test]
    fn sum_accumulates() {
        assert_eq!(sum(&[1, 3, 5, 7, 9]), 25);
        assert_eq!(sum(&[-2, 2]), 0);
    }
}
