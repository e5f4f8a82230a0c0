//! Core types shared across beankit facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! logging facility and by structured error reporting in `beankit-core`.

pub mod schema;
