//! Regulatory coefficient tables
//!
//! The OGPO tariff is a set of fixed mappings: one base rate per vehicle
//! category plus seven coefficient tables, all published by the regulator.
//! Tables are plain serde-loadable data so an operator can deploy a new
//! regulatory revision as a JSON document, but they are immutable once
//! constructed and must pass [`CoefficientTables::validate`] before any
//! calculation uses them.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Coefficient, Currency, Money};

use crate::error::RatingError;
use crate::factors::{
    BonusMalusClass, DriverAge, DrivingExperience, EngineVolume, Region, VehicleAge, VehicleType,
};

/// Valid insured-period months, inclusive
const MIN_PERIOD_MONTHS: u8 = 1;
const MAX_PERIOD_MONTHS: u8 = 12;

/// The complete coefficient table set for one regulatory revision
///
/// Every lookup returns `Result`: a miss means the caller supplied a value
/// the tariff does not rate (always possible for the raw month count, and
/// possible for enum keys when a custom table document is incomplete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoefficientTables {
    base_rates: HashMap<VehicleType, Decimal>,
    region: HashMap<Region, Decimal>,
    vehicle_age: HashMap<VehicleAge, Decimal>,
    engine_volume: HashMap<EngineVolume, Decimal>,
    insured_period: HashMap<u8, Decimal>,
    driver_age: HashMap<DriverAge, Decimal>,
    driving_experience: HashMap<DrivingExperience, Decimal>,
    bonus_malus: HashMap<BonusMalusClass, Decimal>,
}

impl CoefficientTables {
    /// The built-in Kazakhstan OGPO tariff (2024 revision)
    pub fn kazakhstan_2024() -> Self {
        let base_rates = HashMap::from([
            (VehicleType::Passenger, dec!(1983)),
            (VehicleType::Truck, dec!(3166)),
            (VehicleType::Bus, dec!(3374)),
            (VehicleType::Motorcycle, dec!(1290)),
            (VehicleType::SpecialVehicle, dec!(1290)),
        ]);

        // Three cities carry their own coefficients; the 14 oblasts share one.
        let region = Region::ALL
            .into_iter()
            .map(|r| {
                let coeff = match r {
                    Region::Almaty => dec!(2.96),
                    Region::Astana => dec!(2.2),
                    Region::Shymkent => dec!(1.95),
                    _ => dec!(1.32),
                };
                (r, coeff)
            })
            .collect();

        let vehicle_age = HashMap::from([
            (VehicleAge::UpToSeven, dec!(1.0)),
            (VehicleAge::OverSeven, dec!(1.1)),
        ]);

        let engine_volume = HashMap::from([
            (EngineVolume::UpTo1600, dec!(1.0)),
            (EngineVolume::From1601To2000, dec!(1.1)),
            (EngineVolume::From2001To2500, dec!(1.2)),
            (EngineVolume::From2501To3000, dec!(1.5)),
            (EngineVolume::Over3000, dec!(1.8)),
        ]);

        let insured_period = HashMap::from([
            (1u8, dec!(0.2)),
            (2, dec!(0.3)),
            (3, dec!(0.4)),
            (4, dec!(0.5)),
            (5, dec!(0.6)),
            (6, dec!(0.7)),
            (7, dec!(0.8)),
            (8, dec!(0.9)),
            (9, dec!(0.95)),
            (10, dec!(1.0)),
            (11, dec!(1.0)),
            (12, dec!(1.0)),
        ]);

        let driver_age = HashMap::from([
            (DriverAge::Under25, dec!(1.1)),
            (DriverAge::TwentyFiveAndAbove, dec!(1.0)),
        ]);

        let driving_experience = HashMap::from([
            (DrivingExperience::UnderThree, dec!(1.1)),
            (DrivingExperience::ThreeAndAbove, dec!(1.0)),
        ]);

        let bonus_malus = HashMap::from([
            (BonusMalusClass::M, dec!(2.45)),
            (BonusMalusClass::Class0, dec!(2.3)),
            (BonusMalusClass::Class1, dec!(1.55)),
            (BonusMalusClass::Class2, dec!(1.4)),
            (BonusMalusClass::Class3, dec!(1.0)),
            (BonusMalusClass::Class4, dec!(0.95)),
            (BonusMalusClass::Class5, dec!(0.9)),
            (BonusMalusClass::Class6, dec!(0.85)),
            (BonusMalusClass::Class7, dec!(0.8)),
            (BonusMalusClass::Class8, dec!(0.75)),
            (BonusMalusClass::Class9, dec!(0.7)),
            (BonusMalusClass::Class10, dec!(0.65)),
            (BonusMalusClass::Class11, dec!(0.6)),
            (BonusMalusClass::Class12, dec!(0.55)),
            (BonusMalusClass::Class13, dec!(0.5)),
        ]);

        Self {
            base_rates,
            region,
            vehicle_age,
            engine_volume,
            insured_period,
            driver_age,
            driving_experience,
            bonus_malus,
        }
    }

    /// Parses a table set from a JSON document
    ///
    /// The result still has to pass [`validate`](Self::validate); parsing only
    /// checks structure, not completeness.
    pub fn from_json(document: &str) -> Result<Self, RatingError> {
        serde_json::from_str(document)
            .map_err(|e| RatingError::InvalidTableDocument(e.to_string()))
    }

    /// Checks completeness and positivity of every table
    ///
    /// Run once at startup: every enumerated key must resolve to exactly one
    /// strictly positive entry, and the insured-period table must cover
    /// months 1..=12 and nothing else. Catching regulatory-table drift here
    /// keeps `InvalidFactor` an input error, not a data error.
    pub fn validate(&self) -> Result<(), RatingError> {
        Self::check_complete("base_rates", &self.base_rates, &VehicleType::ALL)?;
        Self::check_complete("region", &self.region, &Region::ALL)?;
        Self::check_complete("vehicle_age", &self.vehicle_age, &VehicleAge::ALL)?;
        Self::check_complete("engine_volume", &self.engine_volume, &EngineVolume::ALL)?;
        Self::check_complete("driver_age", &self.driver_age, &DriverAge::ALL)?;
        Self::check_complete(
            "driving_experience",
            &self.driving_experience,
            &DrivingExperience::ALL,
        )?;
        Self::check_complete("bonus_malus", &self.bonus_malus, &BonusMalusClass::ALL)?;

        for month in MIN_PERIOD_MONTHS..=MAX_PERIOD_MONTHS {
            let value = self.insured_period.get(&month).ok_or(RatingError::MissingEntry {
                table: "insured_period",
                key: month.to_string(),
            })?;
            Self::check_positive("insured_period", month, *value)?;
        }
        for key in self.insured_period.keys() {
            if !(MIN_PERIOD_MONTHS..=MAX_PERIOD_MONTHS).contains(key) {
                return Err(RatingError::OutOfDomainKey {
                    table: "insured_period",
                    key: key.to_string(),
                });
            }
        }

        Ok(())
    }

    fn check_complete<K>(
        table: &'static str,
        map: &HashMap<K, Decimal>,
        domain: &[K],
    ) -> Result<(), RatingError>
    where
        K: std::hash::Hash + Eq + Copy + std::fmt::Display,
    {
        for key in domain {
            let value = map.get(key).ok_or(RatingError::MissingEntry {
                table,
                key: key.to_string(),
            })?;
            Self::check_positive(table, *key, *value)?;
        }
        Ok(())
    }

    fn check_positive(
        table: &'static str,
        key: impl std::fmt::Display,
        value: Decimal,
    ) -> Result<(), RatingError> {
        if value <= Decimal::ZERO {
            return Err(RatingError::NonPositiveCoefficient {
                table,
                key: key.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Base rate for a vehicle category, in whole tenge
    pub fn base_rate(&self, vehicle_type: VehicleType) -> Result<Money, RatingError> {
        let rate = self
            .base_rates
            .get(&vehicle_type)
            .ok_or_else(|| RatingError::invalid_factor("vehicle_type", vehicle_type))?;
        Ok(Money::new(*rate, Currency::KZT))
    }

    pub fn region_coefficient(&self, region: Region) -> Result<Coefficient, RatingError> {
        Self::coefficient_for("region", &self.region, region)
    }

    pub fn vehicle_age_coefficient(&self, age: VehicleAge) -> Result<Coefficient, RatingError> {
        Self::coefficient_for("vehicle_age", &self.vehicle_age, age)
    }

    pub fn engine_volume_coefficient(
        &self,
        volume: EngineVolume,
    ) -> Result<Coefficient, RatingError> {
        Self::coefficient_for("engine_volume", &self.engine_volume, volume)
    }

    /// Coefficient for the insured period; misses for months outside [1,12]
    pub fn insured_period_coefficient(&self, months: u8) -> Result<Coefficient, RatingError> {
        let value = self
            .insured_period
            .get(&months)
            .ok_or_else(|| RatingError::invalid_factor("insured_period_months", months))?;
        Coefficient::new(*value).map_err(|_| RatingError::NonPositiveCoefficient {
            table: "insured_period",
            key: months.to_string(),
            value: *value,
        })
    }

    pub fn driver_age_coefficient(&self, age: DriverAge) -> Result<Coefficient, RatingError> {
        Self::coefficient_for("driver_age", &self.driver_age, age)
    }

    pub fn driving_experience_coefficient(
        &self,
        experience: DrivingExperience,
    ) -> Result<Coefficient, RatingError> {
        Self::coefficient_for("driving_experience", &self.driving_experience, experience)
    }

    pub fn bonus_malus_coefficient(
        &self,
        class: BonusMalusClass,
    ) -> Result<Coefficient, RatingError> {
        Self::coefficient_for("bonus_malus", &self.bonus_malus, class)
    }

    fn coefficient_for<K>(
        field: &'static str,
        map: &HashMap<K, Decimal>,
        key: K,
    ) -> Result<Coefficient, RatingError>
    where
        K: std::hash::Hash + Eq + Copy + std::fmt::Display,
    {
        let value = map
            .get(&key)
            .ok_or_else(|| RatingError::invalid_factor(field, key))?;
        Coefficient::new(*value).map_err(|_| RatingError::NonPositiveCoefficient {
            table: field,
            key: key.to_string(),
            value: *value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        CoefficientTables::kazakhstan_2024().validate().unwrap();
    }

    #[test]
    fn test_base_rates_match_tariff() {
        let tables = CoefficientTables::kazakhstan_2024();
        assert_eq!(
            tables.base_rate(VehicleType::Passenger).unwrap().amount(),
            dec!(1983)
        );
        assert_eq!(
            tables.base_rate(VehicleType::Truck).unwrap().amount(),
            dec!(3166)
        );
        assert_eq!(
            tables.base_rate(VehicleType::Bus).unwrap().amount(),
            dec!(3374)
        );
        assert_eq!(
            tables.base_rate(VehicleType::Motorcycle).unwrap().amount(),
            dec!(1290)
        );
        assert_eq!(
            tables
                .base_rate(VehicleType::SpecialVehicle)
                .unwrap()
                .amount(),
            dec!(1290)
        );
    }

    #[test]
    fn test_city_regions_carry_own_coefficients() {
        let tables = CoefficientTables::kazakhstan_2024();
        assert_eq!(
            tables.region_coefficient(Region::Almaty).unwrap().as_decimal(),
            dec!(2.96)
        );
        assert_eq!(
            tables.region_coefficient(Region::Astana).unwrap().as_decimal(),
            dec!(2.2)
        );
        assert_eq!(
            tables
                .region_coefficient(Region::Shymkent)
                .unwrap()
                .as_decimal(),
            dec!(1.95)
        );
        assert_eq!(
            tables
                .region_coefficient(Region::Kyzylorda)
                .unwrap()
                .as_decimal(),
            dec!(1.32)
        );
    }

    #[test]
    fn test_month_lookup_misses_outside_range() {
        let tables = CoefficientTables::kazakhstan_2024();
        assert!(tables.insured_period_coefficient(0).is_err());
        assert!(tables.insured_period_coefficient(13).is_err());
        assert_eq!(
            tables.insured_period_coefficient(6).unwrap().as_decimal(),
            dec!(0.7)
        );
    }

    #[test]
    fn test_json_round_trip_preserves_tables() {
        let tables = CoefficientTables::kazakhstan_2024();
        let json = serde_json::to_string(&tables).unwrap();
        let back = CoefficientTables::from_json(&json).unwrap();

        back.validate().unwrap();
        assert_eq!(
            back.bonus_malus_coefficient(BonusMalusClass::M).unwrap(),
            tables.bonus_malus_coefficient(BonusMalusClass::M).unwrap()
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = CoefficientTables::from_json("{not json").unwrap_err();
        assert!(matches!(err, RatingError::InvalidTableDocument(_)));
    }

    #[test]
    fn test_validate_rejects_missing_entry() {
        let mut tables = CoefficientTables::kazakhstan_2024();
        tables.bonus_malus.remove(&BonusMalusClass::Class7);

        let err = tables.validate().unwrap_err();
        assert_eq!(
            err,
            RatingError::MissingEntry {
                table: "bonus_malus",
                key: "class-7".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_coefficient() {
        let mut tables = CoefficientTables::kazakhstan_2024();
        tables.region.insert(Region::Atyrau, dec!(0));

        let err = tables.validate().unwrap_err();
        assert!(matches!(
            err,
            RatingError::NonPositiveCoefficient { table: "region", .. }
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_domain_month() {
        let mut tables = CoefficientTables::kazakhstan_2024();
        tables.insured_period.insert(13, dec!(1.0));

        let err = tables.validate().unwrap_err();
        assert_eq!(
            err,
            RatingError::OutOfDomainKey {
                table: "insured_period",
                key: "13".to_string(),
            }
        );
    }
}
