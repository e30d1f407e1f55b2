//! Emission factor configuration
//!
//! Every fixed multiplier and categorical lookup table used by the
//! calculation modules lives here, in one read-only value that callers build
//! once at startup and pass by reference into each calculation. Defaults
//! match the questionnaire the records are collected with.
//!
//! Categorical lookups are exhaustive: a key that is absent from its table is
//! an error, never a silent `1.0`. A choice field that reaches a lookup only
//! does so after the record carrying it has been validated, so a lookup
//! failure here means the table and the questionnaire disagree.

use crate::errors::{KarbonError, KarbonResult};
use crate::records::VehicleClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fleet fuel efficiency (miles per gallon) by vehicle size class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleEfficiency {
    /// Small vehicles ("küçük"). Default: 52 mpg
    pub small: f64,
    /// Medium vehicles ("orta"). Default: 46 mpg
    pub medium: f64,
    /// Large vehicles ("büyük"). Default: 35 mpg
    pub large: f64,
}

impl Default for VehicleEfficiency {
    fn default() -> Self {
        Self {
            small: 52.0,
            medium: 46.0,
            large: 35.0,
        }
    }
}

impl VehicleEfficiency {
    /// Miles per gallon for the given size class.
    pub fn for_class(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Small => self.small,
            VehicleClass::Medium => self.medium,
            VehicleClass::Large => self.large,
        }
    }
}

/// Multiplicative food emission modifiers keyed by questionnaire choice.
///
/// The four tables are independent; the food model multiplies one modifier
/// from each onto the base figure. All lookups are fail-fast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodModifiers {
    /// Share of organic food.
    pub organic: HashMap<String, f64>,
    /// Meat and dairy consumption tier.
    pub meat_dairy: HashMap<String, f64>,
    /// Share of locally produced food.
    pub local: HashMap<String, f64>,
    /// Share of packaged/processed food.
    pub processed: HashMap<String, f64>,
}

impl Default for FoodModifiers {
    fn default() -> Self {
        Self {
            organic: table([
                ("Hiçbiri", 1.0),
                ("Bazıları", 0.9),
                ("Çoğu", 0.7),
                ("Hepsi", 0.5),
            ]),
            meat_dairy: table([
                ("Ortalamanın üstünde et/süt", 1.2),
                ("Ortalama et/süt", 1.0),
                ("Ortalamanın altında et/süt", 0.8),
                ("Lakto-vejetaryen", 0.5),
                ("Vegan", 0.3),
            ]),
            // The "Tamamıl" key does not match the questionnaire option
            // "Tamamı"; the lookup rejects that choice instead of guessing.
            local: table([
                ("Çok azı", 1.2),
                ("Ortalama", 1.0),
                ("Ortalamanın üzerinde", 0.8),
                ("Tamamıl", 0.6),
            ]),
            processed: table([
                ("Ortalamanın üzerinde", 1.2),
                ("Ortalama", 1.0),
                ("Ortalamanın altında", 0.8),
                ("Çok az", 0.6),
            ]),
        }
    }
}

impl FoodModifiers {
    pub fn organic_modifier(&self, choice: &str) -> KarbonResult<f64> {
        lookup(&self.organic, "organic_food", choice)
    }

    pub fn meat_dairy_modifier(&self, choice: &str) -> KarbonResult<f64> {
        lookup(&self.meat_dairy, "meat_dairy", choice)
    }

    pub fn local_modifier(&self, choice: &str) -> KarbonResult<f64> {
        lookup(&self.local, "local_food", choice)
    }

    pub fn processed_modifier(&self, choice: &str) -> KarbonResult<f64> {
        lookup(&self.processed, "processed_food", choice)
    }
}

/// Fixed per-category benchmark emissions (tonnes CO2e per person per year)
/// used to compute relative-impact ratios.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceAverages {
    /// Household energy benchmark. Default: 2.5 t
    pub household_energy_t: f64,
    /// Transport benchmark. Default: 3.0 t
    pub transport_t: f64,
    /// Food benchmark. Default: 2.2 t
    pub food_t: f64,
    /// Consumer spending benchmark. Default: 3.4 t
    pub spending_t: f64,
    /// Public services benchmark. Default: 1.1 t
    pub public_services_t: f64,
}

impl Default for ReferenceAverages {
    fn default() -> Self {
        Self {
            household_energy_t: 2.5,
            transport_t: 3.0,
            food_t: 2.2,
            spending_t: 3.4,
            public_services_t: 1.1,
        }
    }
}

/// Process-wide emission factor configuration.
///
/// Built once, never mutated, passed by reference into every calculation.
/// `Default` carries the canonical factors; a partial TOML document can
/// override any subset of fields via [`EmissionFactorConfig::from_toml_str`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactorConfig {
    /// Grid electricity intensity (kg CO2e per kWh). Default: 0.309
    pub electricity_kg_per_kwh: f64,
    /// Fractional reduction for certified green tariffs. Default: 0.25
    pub green_tariff_reduction: f64,
    /// Natural gas intensity (kg CO2e per kWh). Default: 0.203
    pub gas_kg_per_kwh: f64,
    /// Vehicle fuel intensity (kg CO2e per gallon). Default: 14.3
    pub vehicle_fuel_kg_per_gallon: f64,
    /// Kilometre figures feed the mile-based mpg tables through this
    /// bridge constant. Default: 1.60934
    pub km_per_mile: f64,
    /// Fleet fuel efficiency by size class.
    pub vehicle_mpg: VehicleEfficiency,
    /// Office floor space intensity (tonnes CO2e per sq ft per year).
    /// Default: 0.05
    pub office_space_t_per_sqft: f64,
    /// Per-employee overhead (tonnes CO2e per employee per year).
    /// Default: 2.5
    pub employee_t_per_year: f64,
    /// Data centre electricity intensity (tonnes CO2e per kWh).
    /// Default: 0.000475
    pub data_center_t_per_kwh: f64,
    /// Sector scaling applied to aggregate business emissions.
    pub sector_multipliers: HashMap<String, f64>,
    /// Baseline food emissions (tonnes CO2e per year). Default: 2.2
    pub food_base_t: f64,
    /// Food emission modifiers by questionnaire choice.
    pub food_modifiers: FoodModifiers,
    /// Bus and train intensity (tonnes CO2e per km). Default: 0.0001
    pub surface_transit_t_per_km: f64,
    /// Flight intensity (tonnes CO2e per hour in the air). Default: 0.25
    pub flight_t_per_hour: f64,
    /// Annual consumer-spending emissions by declared tier (tonnes CO2e).
    pub spending_tiers: HashMap<String, f64>,
    /// Flat per-person allocation for public services (tonnes CO2e per
    /// year). Default: 1.1
    pub public_services_t: f64,
    /// Per-category benchmarks for relative-impact ratios.
    pub reference_averages: ReferenceAverages,
}

impl Default for EmissionFactorConfig {
    fn default() -> Self {
        Self {
            electricity_kg_per_kwh: 0.309,
            green_tariff_reduction: 0.25,
            gas_kg_per_kwh: 0.203,
            vehicle_fuel_kg_per_gallon: 14.3,
            km_per_mile: 1.60934,
            vehicle_mpg: VehicleEfficiency::default(),
            office_space_t_per_sqft: 0.05,
            employee_t_per_year: 2.5,
            data_center_t_per_kwh: 0.000475,
            sector_multipliers: table([
                ("Teknoloji", 1.0),
                ("Üretim", 1.8),
                ("Perakende", 1.2),
                ("Sağlık", 1.3),
                ("Finansal Hizmetler", 0.9),
                ("İnşaat", 1.6),
                ("Ulaşım", 2.0),
                ("Tarım", 1.7),
                ("Diğer", 1.0),
            ]),
            food_base_t: 2.2,
            food_modifiers: FoodModifiers::default(),
            surface_transit_t_per_km: 0.0001,
            flight_t_per_hour: 0.25,
            spending_tiers: table([
                ("Ortalamanın Üstünde", 5.0),
                ("Ortalama", 3.4),
                ("Ortalamanın Altında", 2.4),
                ("Ortalamanın Çok Altında", 1.4),
            ]),
            public_services_t: 1.1,
            reference_averages: ReferenceAverages::default(),
        }
    }
}

impl EmissionFactorConfig {
    /// Deserialize a configuration from TOML. Absent fields keep their
    /// defaults, so a document overriding a single factor is valid.
    pub fn from_toml_str(document: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(document)
    }

    /// Sector multiplier for the given business sector.
    pub fn sector_multiplier(&self, sector: &str) -> KarbonResult<f64> {
        lookup(&self.sector_multipliers, "sector", sector)
    }

    /// Annual emissions (tonnes CO2e) for the given spending tier.
    pub fn spending_tier_t(&self, tier: &str) -> KarbonResult<f64> {
        lookup(&self.spending_tiers, "spending_tier", tier)
    }
}

fn lookup(table: &HashMap<String, f64>, name: &'static str, key: &str) -> KarbonResult<f64> {
    table
        .get(key)
        .copied()
        .ok_or_else(|| KarbonError::ConfigLookup {
            table: name,
            key: key.to_string(),
        })
}

fn table<const N: usize>(entries: [(&str, f64); N]) -> HashMap<String, f64> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
