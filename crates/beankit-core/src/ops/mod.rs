//! The toolkit operations.
//!
//! Every public operation runs inside [`observe`], which emits the canonical
//! start and end/end_error events.

pub mod clone;
pub mod compare;
pub mod describe;
pub mod diff;
pub mod merge;

use std::time::Instant;

use crate::errors::{BeanError, Result};

pub(crate) fn observe<T>(
    op: &'static str,
    type_name: &str,
    run: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let started = Instant::now();
    crate::log_op_start!(op, type_name = type_name);

    let result = run();

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            crate::log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => {
            crate::log_op_error!(op, err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

/// Fail with `TypeMismatch` unless both operands report the same type
pub(crate) fn ensure_same_type(op: &str, source_type: &str, compare_type: &str) -> Result<()> {
    if source_type == compare_type {
        Ok(())
    } else {
        Err(BeanError::TypeMismatch {
            op: op.to_string(),
            source_type: source_type.to_string(),
            compare_type: compare_type.to_string(),
        })
    }
}
