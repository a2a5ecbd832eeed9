//! Premium calculation
//!
//! The calculator is the one domain service: a pure function from
//! `RatingFactors` to a premium, closed over a validated table set. It holds
//! no mutable state and performs no I/O, so a single instance can be shared
//! across threads behind an `Arc` for the lifetime of the process.

use rust_decimal::{Decimal, RoundingStrategy};

use core_kernel::{Coefficient, Money};

use crate::error::RatingError;
use crate::factors::RatingFactors;
use crate::tables::CoefficientTables;

/// The result of one premium calculation
///
/// Carries the base rate, each applied coefficient, and the total rounded to
/// whole tenge, so a caller can show how the premium was composed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PremiumBreakdown {
    pub base_rate: Money,
    pub region: Coefficient,
    pub vehicle_age: Coefficient,
    pub engine_volume: Coefficient,
    pub insured_period: Coefficient,
    pub driver_age: Coefficient,
    pub driving_experience: Coefficient,
    pub bonus_malus: Coefficient,
    pub total: Money,
}

impl PremiumBreakdown {
    /// The headline premium in whole tenge
    pub fn premium(&self) -> i64 {
        self.total.to_whole_units()
    }
}

/// Stateless premium calculator over a validated coefficient table set
pub struct PremiumCalculator {
    tables: CoefficientTables,
}

impl PremiumCalculator {
    /// Creates a calculator, validating the tables once up front
    ///
    /// # Errors
    ///
    /// Returns the first table-validation failure (missing entry,
    /// non-positive coefficient, out-of-domain key). A calculator that
    /// constructs successfully can only ever fail with `InvalidFactor`.
    pub fn new(tables: CoefficientTables) -> Result<Self, RatingError> {
        tables.validate()?;
        Ok(Self { tables })
    }

    /// Returns the active coefficient tables
    pub fn tables(&self) -> &CoefficientTables {
        &self.tables
    }

    /// Calculates the OGPO premium for one set of rating factors
    ///
    /// The premium is the base rate for the vehicle category multiplied by
    /// seven coefficients. The product is carried at full `Decimal` precision
    /// and rounded exactly once at the end, half away from zero, to whole
    /// tenge. Multiplication order does not affect the result.
    ///
    /// # Errors
    ///
    /// `RatingError::InvalidFactor` when any factor value has no table entry;
    /// in practice that means `insured_period_months` outside [1,12], since
    /// the enum factors are closed and the tables validated complete.
    pub fn calculate(&self, factors: &RatingFactors) -> Result<PremiumBreakdown, RatingError> {
        let base_rate = self.tables.base_rate(factors.vehicle_type)?;

        let region = self.tables.region_coefficient(factors.region)?;
        let vehicle_age = self.tables.vehicle_age_coefficient(factors.vehicle_age)?;
        let insured_period = self
            .tables
            .insured_period_coefficient(factors.insured_period_months)?;
        let driver_age = self.tables.driver_age_coefficient(factors.driver_age)?;
        let driving_experience = self
            .tables
            .driving_experience_coefficient(factors.driving_experience)?;
        let bonus_malus = self.tables.bonus_malus_coefficient(factors.bonus_malus)?;

        // Engine volume is only rated for passenger cars.
        let engine_volume = if factors.vehicle_type.rates_engine_volume() {
            self.tables
                .engine_volume_coefficient(factors.engine_volume)?
        } else {
            Coefficient::unit()
        };

        let factor_product: Decimal = [
            region,
            vehicle_age,
            engine_volume,
            insured_period,
            driver_age,
            driving_experience,
            bonus_malus,
        ]
        .iter()
        .map(Coefficient::as_decimal)
        .product();

        let exact = base_rate.amount() * factor_product;
        let rounded = exact.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let total = Money::new(rounded, base_rate.currency());

        tracing::debug!(
            vehicle_type = %factors.vehicle_type,
            region = %factors.region,
            premium = %total,
            "Calculated OGPO premium"
        );

        Ok(PremiumBreakdown {
            base_rate,
            region,
            vehicle_age,
            engine_volume,
            insured_period,
            driver_age,
            driving_experience,
            bonus_malus,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::{
        BonusMalusClass, DriverAge, DrivingExperience, EngineVolume, Region, VehicleAge,
        VehicleType,
    };
    use rust_decimal_macros::dec;

    fn default_factors() -> RatingFactors {
        RatingFactors {
            vehicle_type: VehicleType::Passenger,
            region: Region::Almaty,
            vehicle_age: VehicleAge::UpToSeven,
            engine_volume: EngineVolume::UpTo1600,
            insured_period_months: 12,
            driver_age: DriverAge::TwentyFiveAndAbove,
            driving_experience: DrivingExperience::ThreeAndAbove,
            bonus_malus: BonusMalusClass::Class3,
        }
    }

    fn calculator() -> PremiumCalculator {
        PremiumCalculator::new(CoefficientTables::kazakhstan_2024()).unwrap()
    }

    #[test]
    fn test_baseline_passenger_quote() {
        // 1983 * 2.96 = 5869.68 -> 5870
        let breakdown = calculator().calculate(&default_factors()).unwrap();

        assert_eq!(breakdown.premium(), 5870);
        assert_eq!(breakdown.base_rate.amount(), dec!(1983));
        assert_eq!(breakdown.region.as_decimal(), dec!(2.96));
        assert_eq!(breakdown.engine_volume, Coefficient::unit());
    }

    #[test]
    fn test_malus_class_quote() {
        // 1983 * 2.96 * 2.45 = 14380.716 -> 14381
        let factors = RatingFactors {
            bonus_malus: BonusMalusClass::M,
            ..default_factors()
        };

        let breakdown = calculator().calculate(&factors).unwrap();
        assert_eq!(breakdown.premium(), 14381);
    }

    #[test]
    fn test_month_out_of_range_is_invalid_factor() {
        let factors = RatingFactors {
            insured_period_months: 13,
            ..default_factors()
        };

        let err = calculator().calculate(&factors).unwrap_err();
        assert_eq!(
            err,
            RatingError::InvalidFactor {
                field: "insured_period_months",
                value: "13".to_string(),
            }
        );
    }

    #[test]
    fn test_construction_rejects_incomplete_tables() {
        let tables =
            CoefficientTables::from_json(r#"{"base_rates":{},"region":{},"vehicle_age":{},"engine_volume":{},"insured_period":{},"driver_age":{},"driving_experience":{},"bonus_malus":{}}"#)
                .unwrap();

        assert!(PremiumCalculator::new(tables).is_err());
    }
}
