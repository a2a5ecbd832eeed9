//! Core Kernel - Foundational types and utilities for the OGPO rating system
//!
//! This crate provides the fundamental building blocks used across the rating
//! domain and the API layer:
//! - Money types with precise decimal arithmetic
//! - Coefficient: a validated positive multiplier for rating factors
//! - Strongly-typed identifiers

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, Coefficient, MoneyError};
pub use identifiers::QuoteId;
