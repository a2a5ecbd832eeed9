//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use proptest::prelude::*;

use domain_rating::{
    BonusMalusClass, DriverAge, DrivingExperience, EngineVolume, RatingFactors, Region,
    VehicleAge, VehicleType,
};

/// Strategy for generating valid VehicleType values
pub fn vehicle_type_strategy() -> impl Strategy<Value = VehicleType> {
    proptest::sample::select(VehicleType::ALL.to_vec())
}

/// Strategy for generating non-passenger VehicleType values
pub fn non_passenger_vehicle_strategy() -> impl Strategy<Value = VehicleType> {
    proptest::sample::select(vec![
        VehicleType::Truck,
        VehicleType::Bus,
        VehicleType::Motorcycle,
        VehicleType::SpecialVehicle,
    ])
}

/// Strategy for generating valid Region values
pub fn region_strategy() -> impl Strategy<Value = Region> {
    proptest::sample::select(Region::ALL.to_vec())
}

/// Strategy for generating valid VehicleAge values
pub fn vehicle_age_strategy() -> impl Strategy<Value = VehicleAge> {
    proptest::sample::select(VehicleAge::ALL.to_vec())
}

/// Strategy for generating valid EngineVolume values
pub fn engine_volume_strategy() -> impl Strategy<Value = EngineVolume> {
    proptest::sample::select(EngineVolume::ALL.to_vec())
}

/// Strategy for generating valid insured-period months (1 to 12)
pub fn valid_months_strategy() -> impl Strategy<Value = u8> {
    1u8..=12u8
}

/// Strategy for generating out-of-range insured-period months
pub fn invalid_months_strategy() -> impl Strategy<Value = u8> {
    prop_oneof![Just(0u8), 13u8..=u8::MAX]
}

/// Strategy for generating valid DriverAge values
pub fn driver_age_strategy() -> impl Strategy<Value = DriverAge> {
    proptest::sample::select(DriverAge::ALL.to_vec())
}

/// Strategy for generating valid DrivingExperience values
pub fn driving_experience_strategy() -> impl Strategy<Value = DrivingExperience> {
    proptest::sample::select(DrivingExperience::ALL.to_vec())
}

/// Strategy for generating valid BonusMalusClass values
pub fn bonus_malus_strategy() -> impl Strategy<Value = BonusMalusClass> {
    proptest::sample::select(BonusMalusClass::ALL.to_vec())
}

/// Strategy for generating complete, valid RatingFactors values
pub fn rating_factors_strategy() -> impl Strategy<Value = RatingFactors> {
    (
        vehicle_type_strategy(),
        region_strategy(),
        vehicle_age_strategy(),
        engine_volume_strategy(),
        valid_months_strategy(),
        driver_age_strategy(),
        driving_experience_strategy(),
        bonus_malus_strategy(),
    )
        .prop_map(
            |(
                vehicle_type,
                region,
                vehicle_age,
                engine_volume,
                insured_period_months,
                driver_age,
                driving_experience,
                bonus_malus,
            )| RatingFactors {
                vehicle_type,
                region,
                vehicle_age,
                engine_volume,
                insured_period_months,
                driver_age,
                driving_experience,
                bonus_malus,
            },
        )
}
