//! Validated input records
//!
//! The engine performs no prompting or raw-string parsing; an external
//! collector builds these records and the calculation modules consume them
//! immutably. Construction is plain struct literals, and every calculation
//! entry point runs the record's `validate` first, so out-of-range figures
//! and unknown categorical keys never reach a formula.

use crate::errors::{KarbonError, KarbonResult};
use crate::parameters::EmissionFactorConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Questionnaire options for the composting choice.
pub const COMPOSTING_CHOICES: [&str; 3] = ["Hiç", "Bazen", "Her zaman"];

/// Questionnaire options for the food waste choice.
pub const FOOD_WASTE_CHOICES: [&str; 4] = [
    "Ortalamanın üzerinde(50% çok)",
    "Ortalama",
    "Ortalamanın altında (50% az)",
    "Çok az (90% az)",
];

/// Vehicle size class used for fuel efficiency lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleClass {
    Small,
    Medium,
    Large,
}

impl VehicleClass {
    /// The questionnaire label for this class.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Small => "küçük",
            VehicleClass::Medium => "orta",
            VehicleClass::Large => "büyük",
        }
    }
}

impl FromStr for VehicleClass {
    type Err = KarbonError;

    fn from_str(label: &str) -> KarbonResult<Self> {
        match label {
            "küçük" => Ok(VehicleClass::Small),
            "orta" => Ok(VehicleClass::Medium),
            "büyük" => Ok(VehicleClass::Large),
            other => Err(KarbonError::UnknownVehicleClass(other.to_string())),
        }
    }
}

/// One vehicle in a household or company fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub class: VehicleClass,
    pub annual_distance_km: f64,
}

/// Household energy and vehicle usage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdRecord {
    /// Number of people sharing the household. Must be at least 1.
    pub members: u32,
    pub electricity_kwh: f64,
    /// Certified green electricity tariff.
    pub electricity_green: bool,
    pub gas_kwh: f64,
    /// Declared secondary heating (fuel oil, coal, wood, LPG). Recorded but
    /// not weighted.
    pub other_heating: bool,
    /// Up to four vehicles.
    pub vehicles: Vec<Vehicle>,
}

impl HouseholdRecord {
    pub fn validate(&self) -> KarbonResult<()> {
        if self.members == 0 {
            return Err(KarbonError::DivisionByZero("members"));
        }
        non_negative("electricity_kwh", self.electricity_kwh)?;
        non_negative("gas_kwh", self.gas_kwh)?;
        validate_fleet(&self.vehicles, Some(4))
    }
}

/// Personal lifestyle choices: food, public transport, flights, spending.
///
/// The six categorical fields hold questionnaire option strings and are
/// checked against their tables during validation. `composting`,
/// `food_waste` and the recycling flags are recorded but not weighted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub organic_food: String,
    pub meat_dairy: String,
    pub local_food: String,
    pub processed_food: String,
    pub composting: String,
    pub food_waste: String,
    #[serde(default)]
    pub bus_km: f64,
    #[serde(default)]
    pub train_km: f64,
    #[serde(default)]
    pub flight_hours: f64,
    pub spending_tier: String,
    pub recycles_basic: bool,
    pub recycles_plastic: bool,
}

impl PersonalRecord {
    pub fn validate(&self, config: &EmissionFactorConfig) -> KarbonResult<()> {
        let modifiers = &config.food_modifiers;
        modifiers.organic_modifier(&self.organic_food)?;
        modifiers.meat_dairy_modifier(&self.meat_dairy)?;
        modifiers.local_modifier(&self.local_food)?;
        modifiers.processed_modifier(&self.processed_food)?;
        fixed_choice("composting", &COMPOSTING_CHOICES, &self.composting)?;
        fixed_choice("food_waste", &FOOD_WASTE_CHOICES, &self.food_waste)?;
        config.spending_tier_t(&self.spending_tier)?;
        non_negative("bus_km", self.bus_km)?;
        non_negative("train_km", self.train_km)?;
        non_negative("flight_hours", self.flight_hours)
    }
}

/// Supply chain environmental assessment level. Recorded but not weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyChainAssessment {
    NotAssessed,
    Basic,
    KeySuppliers,
    AllSuppliers,
}

impl SupplyChainAssessment {
    pub fn label(&self) -> &'static str {
        match self {
            SupplyChainAssessment::NotAssessed => "Değerlendirme yok",
            SupplyChainAssessment::Basic => "Temel değerlendirme",
            SupplyChainAssessment::KeySuppliers => "Bazı tedarikçilerle kapsamlı değerlendirme",
            SupplyChainAssessment::AllSuppliers => "Tüm tedarikçilerle tam değerlendirme",
        }
    }
}

impl FromStr for SupplyChainAssessment {
    type Err = KarbonError;

    fn from_str(label: &str) -> KarbonResult<Self> {
        [
            SupplyChainAssessment::NotAssessed,
            SupplyChainAssessment::Basic,
            SupplyChainAssessment::KeySuppliers,
            SupplyChainAssessment::AllSuppliers,
        ]
        .into_iter()
        .find(|level| level.label() == label)
        .ok_or_else(|| KarbonError::ConfigLookup {
            table: "supply_chain_assessment",
            key: label.to_string(),
        })
    }
}

/// Organisational metrics for a business footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    /// Sector key into the multiplier table.
    pub sector: String,
    /// Must be at least 1.
    pub num_employees: u32,
    pub office_area_sqft: f64,
    pub electricity_kwh: f64,
    pub electricity_green: bool,
    pub gas_kwh: f64,
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub air_travel_hours: f64,
    /// Fraction of waste recycled, 0–1. Recorded but not weighted.
    pub waste_recycling_rate: f64,
    #[serde(default)]
    pub data_center_kwh: f64,
    pub supply_chain_assessment: SupplyChainAssessment,
    /// Share of energy from renewable sources, 0–100.
    pub renewable_energy_percent: f64,
}

impl BusinessRecord {
    pub fn validate(&self, config: &EmissionFactorConfig) -> KarbonResult<()> {
        if self.num_employees == 0 {
            return Err(KarbonError::DivisionByZero("num_employees"));
        }
        config.sector_multiplier(&self.sector)?;
        non_negative("office_area_sqft", self.office_area_sqft)?;
        non_negative("electricity_kwh", self.electricity_kwh)?;
        non_negative("gas_kwh", self.gas_kwh)?;
        non_negative("air_travel_hours", self.air_travel_hours)?;
        non_negative("data_center_kwh", self.data_center_kwh)?;
        in_range("waste_recycling_rate", self.waste_recycling_rate, 0.0, 1.0)?;
        in_range(
            "renewable_energy_percent",
            self.renewable_energy_percent,
            0.0,
            100.0,
        )?;
        validate_fleet(&self.vehicles, None)
    }
}

fn validate_fleet(vehicles: &[Vehicle], limit: Option<usize>) -> KarbonResult<()> {
    if let Some(limit) = limit {
        if vehicles.len() > limit {
            return Err(KarbonError::Validation {
                field: "vehicles",
                message: format!("at most {} vehicles, got {}", limit, vehicles.len()),
            });
        }
    }
    for vehicle in vehicles {
        non_negative("annual_distance_km", vehicle.annual_distance_km)?;
    }
    Ok(())
}

fn fixed_choice(
    table: &'static str,
    choices: &'static [&'static str],
    choice: &str,
) -> KarbonResult<()> {
    if choices.contains(&choice) {
        Ok(())
    } else {
        Err(KarbonError::ConfigLookup {
            table,
            key: choice.to_string(),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> KarbonResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(KarbonError::Validation {
            field,
            message: format!("must not be negative, got {value}"),
        })
    }
}

fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> KarbonResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(KarbonError::Validation {
            field,
            message: format!("must be between {min} and {max}, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household() -> HouseholdRecord {
        HouseholdRecord {
            members: 2,
            electricity_kwh: 4800.0,
            electricity_green: false,
            gas_kwh: 18000.0,
            other_heating: false,
            vehicles: vec![Vehicle {
                class: VehicleClass::Medium,
                annual_distance_km: 12000.0,
            }],
        }
    }

    fn personal() -> PersonalRecord {
        PersonalRecord {
            organic_food: "Bazıları".to_string(),
            meat_dairy: "Ortalama et/süt".to_string(),
            local_food: "Ortalama".to_string(),
            processed_food: "Ortalama".to_string(),
            composting: "Bazen".to_string(),
            food_waste: "Ortalama".to_string(),
            bus_km: 500.0,
            train_km: 1000.0,
            flight_hours: 4.0,
            spending_tier: "Ortalama".to_string(),
            recycles_basic: true,
            recycles_plastic: false,
        }
    }

    #[test]
    fn test_vehicle_class_labels_roundtrip() {
        for class in [VehicleClass::Small, VehicleClass::Medium, VehicleClass::Large] {
            assert_eq!(class.label().parse::<VehicleClass>().unwrap(), class);
        }
    }

    #[test]
    fn test_unknown_vehicle_class() {
        let err = "kamyon".parse::<VehicleClass>().unwrap_err();
        assert!(matches!(err, KarbonError::UnknownVehicleClass(label) if label == "kamyon"));
    }

    #[test]
    fn test_supply_chain_labels_roundtrip() {
        for level in [
            SupplyChainAssessment::NotAssessed,
            SupplyChainAssessment::Basic,
            SupplyChainAssessment::KeySuppliers,
            SupplyChainAssessment::AllSuppliers,
        ] {
            assert_eq!(
                level.label().parse::<SupplyChainAssessment>().unwrap(),
                level
            );
        }
        assert!("Bilinmiyor".parse::<SupplyChainAssessment>().is_err());
    }

    #[test]
    fn test_household_zero_members_rejected() {
        let mut record = household();
        record.members = 0;

        let err = record.validate().unwrap_err();
        assert!(matches!(err, KarbonError::DivisionByZero("members")));
    }

    #[test]
    fn test_household_negative_energy_rejected() {
        let mut record = household();
        record.electricity_kwh = -1.0;

        let err = record.validate().unwrap_err();
        assert!(matches!(
            err,
            KarbonError::Validation {
                field: "electricity_kwh",
                ..
            }
        ));
    }

    #[test]
    fn test_household_fleet_limit() {
        let mut record = household();
        record.vehicles = vec![
            Vehicle {
                class: VehicleClass::Small,
                annual_distance_km: 1000.0,
            };
            5
        ];

        let err = record.validate().unwrap_err();
        assert!(matches!(
            err,
            KarbonError::Validation { field: "vehicles", .. }
        ));
    }

    #[test]
    fn test_personal_unknown_choice_rejected() {
        let config = EmissionFactorConfig::default();
        let mut record = personal();
        record.meat_dairy = "Sadece balık".to_string();

        let err = record.validate(&config).unwrap_err();
        assert!(matches!(
            err,
            KarbonError::ConfigLookup {
                table: "meat_dairy",
                ..
            }
        ));
    }

    #[test]
    fn test_personal_negative_travel_rejected() {
        let config = EmissionFactorConfig::default();
        let mut record = personal();
        record.flight_hours = -2.0;

        let err = record.validate(&config).unwrap_err();
        assert!(matches!(
            err,
            KarbonError::Validation {
                field: "flight_hours",
                ..
            }
        ));
    }

    #[test]
    fn test_business_ranges() {
        let config = EmissionFactorConfig::default();
        let mut record = BusinessRecord {
            name: "Örnek A.Ş.".to_string(),
            sector: "Teknoloji".to_string(),
            num_employees: 10,
            office_area_sqft: 5000.0,
            electricity_kwh: 50000.0,
            electricity_green: false,
            gas_kwh: 20000.0,
            vehicles: vec![],
            air_travel_hours: 40.0,
            waste_recycling_rate: 0.5,
            data_center_kwh: 10000.0,
            supply_chain_assessment: SupplyChainAssessment::Basic,
            renewable_energy_percent: 20.0,
        };
        assert!(record.validate(&config).is_ok());

        record.waste_recycling_rate = 1.5;
        assert!(record.validate(&config).is_err());

        record.waste_recycling_rate = 0.5;
        record.renewable_energy_percent = 120.0;
        assert!(record.validate(&config).is_err());

        record.renewable_energy_percent = 20.0;
        record.num_employees = 0;
        let err = record.validate(&config).unwrap_err();
        assert!(matches!(err, KarbonError::DivisionByZero("num_employees")));
    }
}
