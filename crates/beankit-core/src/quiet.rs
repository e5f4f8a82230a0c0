//! Quiet variants: log the error, hand back a sentinel.
//!
//! Every strict operation returns [`Result`]; call sites that prefer a
//! logged warning over an error go through [`QuietExt`] instead of a second
//! implementation of the operation.

use crate::errors::Result;

pub trait QuietExt<T> {
    /// `Some(value)` on success; on failure log a `suppressed` warning and
    /// return `None`.
    fn quietly(self, op: &str) -> Option<T>;

    /// Like [`quietly`](QuietExt::quietly), falling back to `T::default()`.
    fn quietly_or_default(self, op: &str) -> T
    where
        T: Default;
}

impl<T> QuietExt<T> for Result<T> {
    fn quietly(self, op: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                crate::log_op_suppressed!(op, err);
                None
            }
        }
    }

    fn quietly_or_default(self, op: &str) -> T
    where
        T: Default,
    {
        self.quietly(op).unwrap_or_default()
    }
}
