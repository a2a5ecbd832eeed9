//! OGPO Rating Domain
//!
//! This crate implements premium rating for Kazakhstan's compulsory motor
//! third-party liability scheme (OGPO). The premium is a pure function of the
//! selected rating factors and the regulatory coefficient tables:
//!
//! ```text
//! premium = base_rate(vehicle_type) × Π coefficient(factor)
//! ```
//!
//! # Architecture
//!
//! - **Value Objects**: `RatingFactors` and the factor enums in [`factors`]
//! - **Reference Data**: [`CoefficientTables`], immutable after load and
//!   validated for completeness at construction
//! - **Domain Service**: [`PremiumCalculator`], a stateless calculation over
//!   the tables — no I/O, no clock, no hidden state, safe to share across
//!   threads
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{CoefficientTables, PremiumCalculator, RatingFactors};
//!
//! let calculator = PremiumCalculator::new(CoefficientTables::kazakhstan_2024())?;
//! let breakdown = calculator.calculate(&factors)?;
//! println!("premium: {} KZT", breakdown.premium());
//! ```

pub mod calculator;
pub mod error;
pub mod factors;
pub mod tables;

pub use calculator::{PremiumCalculator, PremiumBreakdown};
pub use error::RatingError;
pub use factors::{
    BonusMalusClass, DriverAge, DrivingExperience, EngineVolume, RatingFactors, Region,
    VehicleAge, VehicleType,
};
pub use tables::CoefficientTables;
