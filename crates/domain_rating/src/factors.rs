//! Rating factors for OGPO premium calculation
//!
//! Each factor is a closed enumeration mirroring the regulatory rating
//! dimensions. Wire names (serde) follow the published tariff keys, so a
//! request body and a rating-table document use identical spellings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle category, determines the base rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleType {
    Passenger,
    Truck,
    Bus,
    Motorcycle,
    SpecialVehicle,
}

impl VehicleType {
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Passenger,
        VehicleType::Truck,
        VehicleType::Bus,
        VehicleType::Motorcycle,
        VehicleType::SpecialVehicle,
    ];

    /// Engine volume is only a rating dimension for passenger cars;
    /// all other categories carry a fixed 1.0 engine coefficient.
    pub fn rates_engine_volume(&self) -> bool {
        matches!(self, VehicleType::Passenger)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Passenger => "passenger",
            VehicleType::Truck => "truck",
            VehicleType::Bus => "bus",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::SpecialVehicle => "specialVehicle",
        }
    }
}

/// Registration region, one of the 17 rated jurisdictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Almaty,
    Astana,
    Shymkent,
    Aqmola,
    Aqtobe,
    AlmatyRegion,
    Atyrau,
    EastKazakhstan,
    Zhambyl,
    WestKazakhstan,
    Karaganda,
    Kostanay,
    Kyzylorda,
    Mangistau,
    Pavlodar,
    NorthKazakhstan,
    Turkistan,
}

impl Region {
    pub const ALL: [Region; 17] = [
        Region::Almaty,
        Region::Astana,
        Region::Shymkent,
        Region::Aqmola,
        Region::Aqtobe,
        Region::AlmatyRegion,
        Region::Atyrau,
        Region::EastKazakhstan,
        Region::Zhambyl,
        Region::WestKazakhstan,
        Region::Karaganda,
        Region::Kostanay,
        Region::Kyzylorda,
        Region::Mangistau,
        Region::Pavlodar,
        Region::NorthKazakhstan,
        Region::Turkistan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Almaty => "almaty",
            Region::Astana => "astana",
            Region::Shymkent => "shymkent",
            Region::Aqmola => "aqmola",
            Region::Aqtobe => "aqtobe",
            Region::AlmatyRegion => "almaty_region",
            Region::Atyrau => "atyrau",
            Region::EastKazakhstan => "east_kazakhstan",
            Region::Zhambyl => "zhambyl",
            Region::WestKazakhstan => "west_kazakhstan",
            Region::Karaganda => "karaganda",
            Region::Kostanay => "kostanay",
            Region::Kyzylorda => "kyzylorda",
            Region::Mangistau => "mangistau",
            Region::Pavlodar => "pavlodar",
            Region::NorthKazakhstan => "north_kazakhstan",
            Region::Turkistan => "turkistan",
        }
    }
}

/// Vehicle age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleAge {
    #[serde(rename = "0-7")]
    UpToSeven,
    #[serde(rename = "7-plus")]
    OverSeven,
}

impl VehicleAge {
    pub const ALL: [VehicleAge; 2] = [VehicleAge::UpToSeven, VehicleAge::OverSeven];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleAge::UpToSeven => "0-7",
            VehicleAge::OverSeven => "7-plus",
        }
    }
}

/// Engine displacement band in cubic centimetres (passenger cars only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineVolume {
    #[serde(rename = "up-to-1600")]
    UpTo1600,
    #[serde(rename = "1601-2000")]
    From1601To2000,
    #[serde(rename = "2001-2500")]
    From2001To2500,
    #[serde(rename = "2501-3000")]
    From2501To3000,
    #[serde(rename = "3001-plus")]
    Over3000,
}

impl EngineVolume {
    pub const ALL: [EngineVolume; 5] = [
        EngineVolume::UpTo1600,
        EngineVolume::From1601To2000,
        EngineVolume::From2001To2500,
        EngineVolume::From2501To3000,
        EngineVolume::Over3000,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EngineVolume::UpTo1600 => "up-to-1600",
            EngineVolume::From1601To2000 => "1601-2000",
            EngineVolume::From2001To2500 => "2001-2500",
            EngineVolume::From2501To3000 => "2501-3000",
            EngineVolume::Over3000 => "3001-plus",
        }
    }
}

/// Driver age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverAge {
    #[serde(rename = "under-25")]
    Under25,
    #[serde(rename = "25-and-above")]
    TwentyFiveAndAbove,
}

impl DriverAge {
    pub const ALL: [DriverAge; 2] = [DriverAge::Under25, DriverAge::TwentyFiveAndAbove];

    pub fn as_str(&self) -> &'static str {
        match self {
            DriverAge::Under25 => "under-25",
            DriverAge::TwentyFiveAndAbove => "25-and-above",
        }
    }
}

/// Driving experience band in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrivingExperience {
    #[serde(rename = "under-3")]
    UnderThree,
    #[serde(rename = "3-and-above")]
    ThreeAndAbove,
}

impl DrivingExperience {
    pub const ALL: [DrivingExperience; 2] = [
        DrivingExperience::UnderThree,
        DrivingExperience::ThreeAndAbove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrivingExperience::UnderThree => "under-3",
            DrivingExperience::ThreeAndAbove => "3-and-above",
        }
    }
}

/// Bonus-malus class reflecting claims history
///
/// Class M is the worst (malus) class; class 13 is the best. Class 3 is the
/// entry class for drivers with no history, carrying a neutral 1.0 multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusMalusClass {
    #[serde(rename = "class-M")]
    M,
    #[serde(rename = "class-0")]
    Class0,
    #[serde(rename = "class-1")]
    Class1,
    #[serde(rename = "class-2")]
    Class2,
    #[serde(rename = "class-3")]
    Class3,
    #[serde(rename = "class-4")]
    Class4,
    #[serde(rename = "class-5")]
    Class5,
    #[serde(rename = "class-6")]
    Class6,
    #[serde(rename = "class-7")]
    Class7,
    #[serde(rename = "class-8")]
    Class8,
    #[serde(rename = "class-9")]
    Class9,
    #[serde(rename = "class-10")]
    Class10,
    #[serde(rename = "class-11")]
    Class11,
    #[serde(rename = "class-12")]
    Class12,
    #[serde(rename = "class-13")]
    Class13,
}

impl BonusMalusClass {
    pub const ALL: [BonusMalusClass; 15] = [
        BonusMalusClass::M,
        BonusMalusClass::Class0,
        BonusMalusClass::Class1,
        BonusMalusClass::Class2,
        BonusMalusClass::Class3,
        BonusMalusClass::Class4,
        BonusMalusClass::Class5,
        BonusMalusClass::Class6,
        BonusMalusClass::Class7,
        BonusMalusClass::Class8,
        BonusMalusClass::Class9,
        BonusMalusClass::Class10,
        BonusMalusClass::Class11,
        BonusMalusClass::Class12,
        BonusMalusClass::Class13,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BonusMalusClass::M => "class-M",
            BonusMalusClass::Class0 => "class-0",
            BonusMalusClass::Class1 => "class-1",
            BonusMalusClass::Class2 => "class-2",
            BonusMalusClass::Class3 => "class-3",
            BonusMalusClass::Class4 => "class-4",
            BonusMalusClass::Class5 => "class-5",
            BonusMalusClass::Class6 => "class-6",
            BonusMalusClass::Class7 => "class-7",
            BonusMalusClass::Class8 => "class-8",
            BonusMalusClass::Class9 => "class-9",
            BonusMalusClass::Class10 => "class-10",
            BonusMalusClass::Class11 => "class-11",
            BonusMalusClass::Class12 => "class-12",
            BonusMalusClass::Class13 => "class-13",
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_via_as_str!(
    VehicleType,
    Region,
    VehicleAge,
    EngineVolume,
    DriverAge,
    DrivingExperience,
    BonusMalusClass,
);

/// The complete set of rating-factor selections for one calculation
///
/// `insured_period_months` is carried as a raw integer; the [1,12] range is
/// enforced through table lookup so an out-of-range value surfaces as
/// `InvalidFactor` rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingFactors {
    pub vehicle_type: VehicleType,
    pub region: Region,
    pub vehicle_age: VehicleAge,
    pub engine_volume: EngineVolume,
    pub insured_period_months: u8,
    pub driver_age: DriverAge,
    pub driving_experience: DrivingExperience,
    pub bonus_malus: BonusMalusClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&VehicleType::SpecialVehicle).unwrap(),
            "\"specialVehicle\""
        );
        assert_eq!(
            serde_json::from_str::<VehicleType>("\"passenger\"").unwrap(),
            VehicleType::Passenger
        );
    }

    #[test]
    fn test_region_wire_names() {
        assert_eq!(
            serde_json::to_string(&Region::EastKazakhstan).unwrap(),
            "\"east_kazakhstan\""
        );
        assert_eq!(
            serde_json::from_str::<Region>("\"almaty_region\"").unwrap(),
            Region::AlmatyRegion
        );
    }

    #[test]
    fn test_banded_factor_wire_names() {
        assert_eq!(VehicleAge::UpToSeven.as_str(), "0-7");
        assert_eq!(EngineVolume::Over3000.as_str(), "3001-plus");
        assert_eq!(DriverAge::Under25.as_str(), "under-25");
        assert_eq!(DrivingExperience::ThreeAndAbove.as_str(), "3-and-above");
        assert_eq!(BonusMalusClass::M.as_str(), "class-M");
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for region in Region::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.as_str()));
        }
        for class in BonusMalusClass::ALL {
            let json = serde_json::to_string(&class).unwrap();
            assert_eq!(json, format!("\"{}\"", class.as_str()));
        }
        for volume in EngineVolume::ALL {
            let json = serde_json::to_string(&volume).unwrap();
            assert_eq!(json, format!("\"{}\"", volume.as_str()));
        }
    }

    #[test]
    fn test_only_passenger_rates_engine_volume() {
        assert!(VehicleType::Passenger.rates_engine_volume());
        for vt in [
            VehicleType::Truck,
            VehicleType::Bus,
            VehicleType::Motorcycle,
            VehicleType::SpecialVehicle,
        ] {
            assert!(!vt.rates_engine_volume(), "{vt} must not rate engine volume");
        }
    }

    #[test]
    fn test_rating_factors_round_trip() {
        let factors = RatingFactors {
            vehicle_type: VehicleType::Passenger,
            region: Region::Almaty,
            vehicle_age: VehicleAge::UpToSeven,
            engine_volume: EngineVolume::UpTo1600,
            insured_period_months: 12,
            driver_age: DriverAge::TwentyFiveAndAbove,
            driving_experience: DrivingExperience::ThreeAndAbove,
            bonus_malus: BonusMalusClass::Class3,
        };

        let json = serde_json::to_string(&factors).unwrap();
        let back: RatingFactors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, factors);
    }
}
