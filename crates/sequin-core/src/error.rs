//! Error types for sequence operations.

use thiserror::Error;

/// An operation requiring at least one element received zero elements.
///
/// Only [`find_max`](crate::find_max) produces this error; reversal and
/// summation treat the empty sequence as a valid input. The error carries
/// no state and propagates directly to the caller, who decides whether to
/// handle or re-raise it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The list is empty")]
pub struct EmptyInputError;
