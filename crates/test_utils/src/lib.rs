//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! OGPO rating test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data and a shared validated calculator
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
