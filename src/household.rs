//! Household emission model
//!
//! Converts a household's energy and vehicle usage into tonnes CO2e per
//! person per year. Electricity and gas contribute in kilograms per kWh,
//! the fleet through a distance-to-fuel conversion, and the sum is divided
//! down to tonnes per household member.
//!
//! The fleet conversion defined here ([`fleet_kg`]) is the single code path
//! for vehicle emissions; the business model and the category analysis both
//! reuse it.

use crate::errors::KarbonResult;
use crate::parameters::EmissionFactorConfig;
use crate::records::{HouseholdRecord, Vehicle};

/// Annual household emissions in tonnes CO2e per member.
pub fn household_emissions_per_capita(
    record: &HouseholdRecord,
    config: &EmissionFactorConfig,
) -> KarbonResult<f64> {
    record.validate()?;

    let total_kg = energy_kg(record, config) + fleet_kg(&record.vehicles, config);
    Ok(total_kg / 1000.0 / f64::from(record.members))
}

/// Electricity and gas emissions in kilograms CO2e, before the per-capita
/// division. A certified green tariff reduces the electricity share only.
pub(crate) fn energy_kg(record: &HouseholdRecord, config: &EmissionFactorConfig) -> f64 {
    let mut electricity = record.electricity_kwh * config.electricity_kg_per_kwh;
    if record.electricity_green {
        electricity *= 1.0 - config.green_tariff_reduction;
    }
    electricity + record.gas_kwh * config.gas_kg_per_kwh
}

/// Fleet emissions in kilograms CO2e.
///
/// Declared kilometre figures run through the mile-based mpg table via the
/// bridge constant: `fuel = km * km_per_mile / mpg`, each gallon weighted by
/// the fuel factor.
pub(crate) fn fleet_kg(vehicles: &[Vehicle], config: &EmissionFactorConfig) -> f64 {
    vehicles
        .iter()
        .map(|vehicle| {
            let gallons = vehicle.annual_distance_km * config.km_per_mile
                / config.vehicle_mpg.for_class(vehicle.class);
            gallons * config.vehicle_fuel_kg_per_gallon
        })
        .sum()
}
