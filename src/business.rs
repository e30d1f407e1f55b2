//! Business emission model
//!
//! Converts organisational metrics into a categorised annual footprint.
//! Seven category figures are computed independently, summed, scaled by the
//! sector multiplier and discounted by the declared renewable energy share.
//! The stored category figures are the unscaled ones, matching how they are
//! reported; only the total carries the sector and renewable adjustments.

use crate::errors::{KarbonError, KarbonResult};
use crate::household;
use crate::parameters::EmissionFactorConfig;
use crate::records::BusinessRecord;
use serde::{Deserialize, Serialize};

/// Business footprint by category, in tonnes CO2e per year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessBreakdown {
    /// Building operations (floor space).
    pub building_t: f64,
    /// Electricity usage.
    pub electricity_t: f64,
    /// Natural gas usage.
    pub gas_t: f64,
    /// Company fleet.
    pub vehicles_t: f64,
    /// Business air travel.
    pub air_travel_t: f64,
    /// Per-employee overhead.
    pub employees_t: f64,
    /// Data centre usage.
    pub data_center_t: f64,
    /// Category sum after the sector multiplier and renewable discount.
    pub total_t: f64,
    /// Total divided over the workforce.
    pub per_employee_t: f64,
}

impl BusinessBreakdown {
    /// Category sum before the sector multiplier and renewable discount.
    pub fn subtotal_t(&self) -> f64 {
        self.building_t
            + self.electricity_t
            + self.gas_t
            + self.vehicles_t
            + self.air_travel_t
            + self.employees_t
            + self.data_center_t
    }

    /// Threshold-triggered reduction suggestions for the presentation layer.
    pub fn recommendations(&self) -> Vec<&'static str> {
        let mut suggestions = Vec::new();
        if self.electricity_t > 50.0 {
            suggestions.push("Yenilenebilir enerji kullanımını artırmayı düşünün");
        }
        if self.vehicles_t > 20.0 {
            suggestions.push("Filonuz için elektrikli veya hibrit araçları inceleyin");
        }
        if self.per_employee_t > 5.0 {
            suggestions.push("Sürdürülebilirlik için çalışan katılım programları uygulayın");
        }
        if self.building_t > 100.0 {
            suggestions.push("Bina enerji verimliliği iyileştirmelerine yatırım yapın");
        }
        if self.data_center_t > 10.0 {
            suggestions
                .push("Veri merkezi operasyonlarını optimize edin veya verimli sağlayıcılara geçin");
        }
        suggestions
    }
}

/// Annual business emissions by category.
pub fn business_emissions(
    record: &BusinessRecord,
    config: &EmissionFactorConfig,
) -> KarbonResult<BusinessBreakdown> {
    record.validate(config)?;

    let building_t = record.office_area_sqft * config.office_space_t_per_sqft;

    let mut electricity_t = record.electricity_kwh * config.electricity_kg_per_kwh / 1000.0;
    if record.electricity_green {
        electricity_t *= 1.0 - config.green_tariff_reduction;
    }
    let gas_t = record.gas_kwh * config.gas_kg_per_kwh / 1000.0;

    let vehicles_t = household::fleet_kg(&record.vehicles, config) / 1000.0;
    let air_travel_t = record.air_travel_hours * config.flight_t_per_hour;
    let employees_t = f64::from(record.num_employees) * config.employee_t_per_year;
    let data_center_t = record.data_center_kwh * config.data_center_t_per_kwh;

    let subtotal = building_t
        + electricity_t
        + gas_t
        + vehicles_t
        + air_travel_t
        + employees_t
        + data_center_t;

    let multiplier = config.sector_multiplier(&record.sector)?;
    let total_t = subtotal * multiplier * (1.0 - record.renewable_energy_percent / 100.0);

    if record.num_employees == 0 {
        return Err(KarbonError::DivisionByZero("num_employees"));
    }
    let per_employee_t = total_t / f64::from(record.num_employees);

    Ok(BusinessBreakdown {
        building_t,
        electricity_t,
        gas_t,
        vehicles_t,
        air_travel_t,
        employees_t,
        data_center_t,
        total_t,
        per_employee_t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{SupplyChainAssessment, Vehicle, VehicleClass};
    use is_close::is_close;

    fn record() -> BusinessRecord {
        BusinessRecord {
            name: "Örnek A.Ş.".to_string(),
            sector: "Teknoloji".to_string(),
            num_employees: 20,
            office_area_sqft: 4000.0,
            electricity_kwh: 80000.0,
            electricity_green: false,
            gas_kwh: 30000.0,
            vehicles: vec![Vehicle {
                class: VehicleClass::Medium,
                annual_distance_km: 20000.0,
            }],
            air_travel_hours: 60.0,
            waste_recycling_rate: 0.4,
            data_center_kwh: 50000.0,
            supply_chain_assessment: SupplyChainAssessment::Basic,
            renewable_energy_percent: 0.0,
        }
    }

    #[test]
    fn test_category_figures() {
        let config = EmissionFactorConfig::default();
        let breakdown = business_emissions(&record(), &config).unwrap();

        assert!(is_close!(breakdown.building_t, 4000.0 * 0.05));
        assert!(is_close!(breakdown.electricity_t, 80000.0 * 0.309 / 1000.0));
        assert!(is_close!(breakdown.gas_t, 30000.0 * 0.203 / 1000.0));
        assert!(is_close!(breakdown.air_travel_t, 60.0 * 0.25));
        assert!(is_close!(breakdown.employees_t, 20.0 * 2.5));
        assert!(is_close!(breakdown.data_center_t, 50000.0 * 0.000475));
        assert!(is_close!(
            breakdown.vehicles_t,
            20000.0 * 1.60934 / 46.0 * 14.3 / 1000.0
        ));
    }

    #[test]
    fn test_total_scales_with_sector_multiplier() {
        let config = EmissionFactorConfig::default();
        let technology = business_emissions(&record(), &config).unwrap();

        let mut transport = record();
        transport.sector = "Ulaşım".to_string();
        let transport = business_emissions(&transport, &config).unwrap();

        // Ulaşım carries twice Teknoloji's multiplier
        assert!(is_close!(transport.total_t, 2.0 * technology.total_t));
        // Unscaled category figures are identical
        assert!(is_close!(transport.subtotal_t(), technology.subtotal_t()));
    }

    #[test]
    fn test_full_renewable_share_zeroes_total() {
        let config = EmissionFactorConfig::default();
        let mut green = record();
        green.renewable_energy_percent = 100.0;

        let breakdown = business_emissions(&green, &config).unwrap();
        assert!(breakdown.total_t.abs() < 1e-12);
        assert!(breakdown.per_employee_t.abs() < 1e-12);
        // The categories themselves are still reported
        assert!(breakdown.subtotal_t() > 0.0);
    }

    #[test]
    fn test_green_tariff_reduces_electricity() {
        let config = EmissionFactorConfig::default();
        let mut green = record();
        green.electricity_green = true;

        let plain = business_emissions(&record(), &config).unwrap();
        let tariffed = business_emissions(&green, &config).unwrap();
        assert!(is_close!(tariffed.electricity_t, plain.electricity_t * 0.75));
        assert!(is_close!(tariffed.gas_t, plain.gas_t));
    }

    #[test]
    fn test_per_employee_division() {
        let config = EmissionFactorConfig::default();
        let breakdown = business_emissions(&record(), &config).unwrap();

        assert!(is_close!(
            breakdown.per_employee_t,
            breakdown.total_t / 20.0
        ));
    }

    #[test]
    fn test_unknown_sector_computes_nothing() {
        let config = EmissionFactorConfig::default();
        let mut unknown = record();
        unknown.sector = "Uzay".to_string();

        let err = business_emissions(&unknown, &config).unwrap_err();
        assert!(matches!(
            err,
            KarbonError::ConfigLookup { table: "sector", .. }
        ));
    }

    #[test]
    fn test_recommendations_trigger_on_thresholds() {
        let config = EmissionFactorConfig::default();
        let modest = business_emissions(&record(), &config).unwrap();
        // electricity 24.7 t, vehicles ~10 t, building 200 t, per-employee
        // ~15 t, data centre ~23.75 t
        let suggestions = modest.recommendations();
        assert!(suggestions.contains(&"Bina enerji verimliliği iyileştirmelerine yatırım yapın"));
        assert!(!suggestions
            .contains(&"Yenilenebilir enerji kullanımını artırmayı düşünün"));

        let mut heavy = record();
        heavy.electricity_kwh = 300000.0;
        let heavy = business_emissions(&heavy, &config).unwrap();
        assert!(heavy
            .recommendations()
            .contains(&"Yenilenebilir enerji kullanımını artırmayı düşünün"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = EmissionFactorConfig::default();
        let breakdown = business_emissions(&record(), &config).unwrap();

        let json = serde_json::to_string(&breakdown).unwrap();
        let restored: BusinessBreakdown = serde_json::from_str(&json).unwrap();
        assert!(is_close!(breakdown.total_t, restored.total_t));
        assert!(is_close!(breakdown.vehicles_t, restored.vehicles_t));
    }
}
