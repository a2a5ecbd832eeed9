//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the factors under test and inherit the
//! front-end defaults for everything else.

use domain_rating::{
    BonusMalusClass, DriverAge, DrivingExperience, EngineVolume, RatingFactors, Region,
    VehicleAge, VehicleType,
};

use crate::fixtures::FactorFixtures;

/// Builder for constructing `RatingFactors` test data
pub struct RatingFactorsBuilder {
    factors: RatingFactors,
}

impl Default for RatingFactorsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingFactorsBuilder {
    /// Creates a new builder seeded with the front-end defaults
    pub fn new() -> Self {
        Self {
            factors: FactorFixtures::frontend_defaults(),
        }
    }

    /// Sets the vehicle type
    pub fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.factors.vehicle_type = vehicle_type;
        self
    }

    /// Sets the registration region
    pub fn with_region(mut self, region: Region) -> Self {
        self.factors.region = region;
        self
    }

    /// Sets the vehicle age band
    pub fn with_vehicle_age(mut self, vehicle_age: VehicleAge) -> Self {
        self.factors.vehicle_age = vehicle_age;
        self
    }

    /// Sets the engine volume band
    pub fn with_engine_volume(mut self, engine_volume: EngineVolume) -> Self {
        self.factors.engine_volume = engine_volume;
        self
    }

    /// Sets the insured period in months
    pub fn with_insured_period_months(mut self, months: u8) -> Self {
        self.factors.insured_period_months = months;
        self
    }

    /// Sets the driver age band
    pub fn with_driver_age(mut self, driver_age: DriverAge) -> Self {
        self.factors.driver_age = driver_age;
        self
    }

    /// Sets the driving experience band
    pub fn with_driving_experience(mut self, experience: DrivingExperience) -> Self {
        self.factors.driving_experience = experience;
        self
    }

    /// Sets the bonus-malus class
    pub fn with_bonus_malus(mut self, class: BonusMalusClass) -> Self {
        self.factors.bonus_malus = class;
        self
    }

    /// Builds the rating factors
    pub fn build(self) -> RatingFactors {
        self.factors
    }
}
