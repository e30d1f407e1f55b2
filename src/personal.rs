//! Personal lifestyle emission model
//!
//! Converts food, public transport, flight and spending choices into tonnes
//! CO2e per year. Food starts from a fixed baseline and is scaled by one
//! modifier from each of the four food tables; the modifiers compound, so an
//! unknown choice is a hard error rather than a neutral factor.

use crate::errors::KarbonResult;
use crate::parameters::EmissionFactorConfig;
use crate::records::PersonalRecord;

/// Annual personal emissions in tonnes CO2e.
pub fn personal_emissions(
    record: &PersonalRecord,
    config: &EmissionFactorConfig,
) -> KarbonResult<f64> {
    record.validate(config)?;

    let food = food_emissions_t(record, config)?;
    let surface_transit =
        (record.bus_km + record.train_km) * config.surface_transit_t_per_km;
    let flights = record.flight_hours * config.flight_t_per_hour;
    let spending = config.spending_tier_t(&record.spending_tier)?;

    Ok(food + surface_transit + flights + spending + config.public_services_t)
}

/// Food emissions in tonnes CO2e: the baseline scaled by all four category
/// modifiers. Shared with the category analysis so both report the same
/// food figure.
pub(crate) fn food_emissions_t(
    record: &PersonalRecord,
    config: &EmissionFactorConfig,
) -> KarbonResult<f64> {
    let modifiers = &config.food_modifiers;
    Ok(config.food_base_t
        * modifiers.organic_modifier(&record.organic_food)?
        * modifiers.meat_dairy_modifier(&record.meat_dairy)?
        * modifiers.local_modifier(&record.local_food)?
        * modifiers.processed_modifier(&record.processed_food)?)
}
