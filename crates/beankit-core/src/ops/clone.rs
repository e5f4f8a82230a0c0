//! Object Cloner.
//!
//! Strategies are tried in a fixed order and the first success wins:
//!
//! 1. serialization round-trip, which shares nothing with the original
//! 2. the type's native clone
//! 3. a freshly instantiated blank value filled by property copy
//!
//! A strategy the type does not offer is skipped; a strategy that fails
//! hands over to the next one. When every offered strategy fails, the error
//! of the last one attempted is returned.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::merge::copy_unobserved;
use super::observe;
use crate::bean::{Bean, Replicate};
use crate::errors::{BeanError, Result};
use crate::quiet::QuietExt;

/// Serialize `value` into an in-memory buffer and read a fresh copy back.
///
/// # Errors
///
/// `Serialization` when either direction fails.
pub fn serial_round_trip<T: Serialize + DeserializeOwned>(value: &T) -> Result<T> {
    let mut buffer = Vec::new();
    serde_json::to_writer(&mut buffer, value)?;
    Ok(serde_json::from_slice(&buffer)?)
}

/// Element-wise copy of a slice.
///
/// Plain values are copied; shared handles such as `Rc` are cloned as
/// handles, so the copy points at the same underlying objects.
pub fn clone_array<T: Clone>(items: &[T]) -> Vec<T> {
    let mut copy = Vec::with_capacity(items.len());
    copy.extend(items.iter().cloned());
    copy
}

/// Clone `original` through the first strategy that succeeds.
///
/// # Errors
///
/// - the error of the last strategy attempted
/// - `Instantiation` when the type offers no strategy at all
pub fn clone_object<T: Replicate + Bean>(original: &T) -> Result<T> {
    observe("clone_object", original.type_name(), || replicate(original))
}

/// [`clone_object`] returning `None`, after logging, on failure.
pub fn clone_object_quietly<T: Replicate + Bean>(original: &T) -> Option<T> {
    clone_object(original).quietly("clone_object_quietly")
}

fn replicate<T: Replicate + Bean>(original: &T) -> Result<T> {
    let mut last_error = None;

    match original.serial_round_trip() {
        Some(Ok(copy)) => return Ok(copy),
        Some(Err(err)) => {
            tracing::debug!(strategy = "serial", error = %err, "clone strategy failed");
            last_error = Some(err);
        }
        None => {}
    }

    if let Some(copy) = original.native_clone() {
        return Ok(copy);
    }

    match T::instantiate() {
        Some(Ok(mut blank)) => {
            copy_unobserved(&mut blank, original)?;
            return Ok(blank);
        }
        Some(Err(err)) => {
            tracing::debug!(strategy = "instantiate", error = %err, "clone strategy failed");
            last_error = Some(err);
        }
        None => {}
    }

    Err(last_error.unwrap_or_else(|| BeanError::Instantiation {
        type_name: original.type_name().to_string(),
        reason: "no clone strategy available".to_string(),
    }))
}
