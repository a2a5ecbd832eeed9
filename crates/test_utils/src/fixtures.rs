//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the rating test suite. These fixtures
//! are consistent and predictable so scenario tests can pin exact premiums.

use once_cell::sync::Lazy;

use domain_rating::{
    BonusMalusClass, CoefficientTables, DriverAge, DrivingExperience, EngineVolume,
    PremiumCalculator, RatingFactors, Region, VehicleAge, VehicleType,
};

static SHARED_CALCULATOR: Lazy<PremiumCalculator> = Lazy::new(|| {
    PremiumCalculator::new(CoefficientTables::kazakhstan_2024())
        .expect("built-in tariff must validate")
});

/// A process-wide calculator over the built-in tariff
///
/// The calculator is stateless, so sharing one instance across every test
/// also exercises the concurrent-use contract for free.
pub fn shared_calculator() -> &'static PremiumCalculator {
    &SHARED_CALCULATOR
}

/// Fixture for rating-factor test data
pub struct FactorFixtures;

impl FactorFixtures {
    /// The defaults the original front-end starts from:
    /// passenger / almaty / 0-7 / up-to-1600 / 12 months / 25-and-above /
    /// 3-and-above / class-3. Expected premium: 5870 KZT.
    pub fn frontend_defaults() -> RatingFactors {
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

    /// An old truck in Astana with a young, inexperienced class-0 driver on a
    /// half-year term. Expected premium: 14926 KZT.
    pub fn truck_astana_half_year() -> RatingFactors {
        RatingFactors {
            vehicle_type: VehicleType::Truck,
            region: Region::Astana,
            vehicle_age: VehicleAge::OverSeven,
            engine_volume: EngineVolume::UpTo1600,
            insured_period_months: 6,
            driver_age: DriverAge::Under25,
            driving_experience: DrivingExperience::UnderThree,
            bonus_malus: BonusMalusClass::Class0,
        }
    }

    /// Every factor at its most expensive value
    pub fn worst_risk() -> RatingFactors {
        RatingFactors {
            vehicle_type: VehicleType::Passenger,
            region: Region::Almaty,
            vehicle_age: VehicleAge::OverSeven,
            engine_volume: EngineVolume::Over3000,
            insured_period_months: 12,
            driver_age: DriverAge::Under25,
            driving_experience: DrivingExperience::UnderThree,
            bonus_malus: BonusMalusClass::M,
        }
    }

    /// Every factor at its cheapest value
    pub fn best_risk() -> RatingFactors {
        RatingFactors {
            vehicle_type: VehicleType::Motorcycle,
            region: Region::Aqmola,
            vehicle_age: VehicleAge::UpToSeven,
            engine_volume: EngineVolume::UpTo1600,
            insured_period_months: 1,
            driver_age: DriverAge::TwentyFiveAndAbove,
            driving_experience: DrivingExperience::ThreeAndAbove,
            bonus_malus: BonusMalusClass::Class13,
        }
    }
}
