//! Structured logging facility for beankit
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`,
//!   `log_op_suppressed!`)
//! - Test capture mode for deterministic assertions
//!
//! Library code never installs a subscriber on its own. Until the host
//! application calls [`init`] (or installs any other `tracing` subscriber)
//! every event is discarded.
//!
//! # Usage
//!
//! ```rust
//! use beankit_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
