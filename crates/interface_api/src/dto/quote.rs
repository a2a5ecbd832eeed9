//! Quote DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Currency, QuoteId};
use domain_rating::{
    BonusMalusClass, DriverAge, DrivingExperience, EngineVolume, PremiumBreakdown, RatingFactors,
    Region, VehicleAge, VehicleType,
};

/// Request body for a premium quote
///
/// Field spellings match the published tariff keys (see `domain_rating`), so
/// a front-end can post its selector values unchanged. The month range is
/// validator-checked here as well, giving the caller a request-shaped error
/// before the calculation ever runs.
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    pub vehicle_type: VehicleType,
    pub region: Region,
    pub vehicle_age: VehicleAge,
    pub engine_volume: EngineVolume,
    #[validate(range(min = 1, max = 12, message = "insured period must be 1 to 12 months"))]
    pub insured_period_months: u8,
    pub driver_age: DriverAge,
    pub driving_experience: DrivingExperience,
    pub bonus_malus: BonusMalusClass,
}

impl QuoteRequest {
    /// Converts the request into domain rating factors
    pub fn into_factors(self) -> RatingFactors {
        RatingFactors {
            vehicle_type: self.vehicle_type,
            region: self.region,
            vehicle_age: self.vehicle_age,
            engine_volume: self.engine_volume,
            insured_period_months: self.insured_period_months,
            driver_age: self.driver_age,
            driving_experience: self.driving_experience,
            bonus_malus: self.bonus_malus,
        }
    }
}

/// Response body for a premium quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: QuoteId,
    /// Headline premium in whole tenge
    pub premium: i64,
    pub currency: Currency,
    /// Base rate and every applied coefficient
    pub breakdown: PremiumBreakdown,
    pub calculated_at: DateTime<Utc>,
}
