//! Report builder
//!
//! Assembles the plain-text footprint report: a fixed preamble, a
//! timestamped identity line, an individual or business body and a trailing
//! attribution line. Pure formatting: every figure is computed upstream
//! and the generation time is injected, so rendering the same inputs always
//! yields the same text. Persisting the text to its timestamped file stays
//! with the caller; [`Report::suggested_filename`] provides the
//! conventional name.

use crate::business::BusinessBreakdown;
use chrono::NaiveDateTime;
use std::fmt::Write;

/// Global average individual footprint (tonnes CO2e per year).
pub const WORLD_AVERAGE_T: f64 = 4.4;
/// UK average individual footprint (tonnes CO2e per year).
pub const UK_AVERAGE_T: f64 = 14.1;

const TITLE: &str = "Karbon Ayak İzi Analiz Raporu";
const ATTRIBUTION: &str = "Rapor, Karbon Ayak İzi Hesaplayıcı v1.0 tarafından oluşturuldu";

/// The body of a footprint report.
#[derive(Debug, Clone)]
pub enum ReportBody {
    /// An individual footprint: the annual total against the fixed world
    /// and UK averages.
    Individual { total_t: f64 },
    /// A business footprint: per-category figures plus the per-employee
    /// number.
    Business {
        name: String,
        sector: String,
        breakdown: BusinessBreakdown,
    },
}

/// A renderable footprint report.
#[derive(Debug, Clone)]
pub struct Report {
    body: ReportBody,
    generated_at: NaiveDateTime,
}

impl Report {
    pub fn individual(total_t: f64, generated_at: NaiveDateTime) -> Self {
        Self {
            body: ReportBody::Individual { total_t },
            generated_at,
        }
    }

    pub fn business(
        name: &str,
        sector: &str,
        breakdown: BusinessBreakdown,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            body: ReportBody::Business {
                name: name.to_string(),
                sector: sector.to_string(),
                breakdown,
            },
            generated_at,
        }
    }

    /// The conventional timestamped artifact name for this report.
    pub fn suggested_filename(&self) -> String {
        format!(
            "karbon_ayak_izi_raporu_{}.txt",
            self.generated_at.format("%Y-%m-%d_%H-%M-%S")
        )
    }

    /// Render the full report text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{TITLE}");
        let _ = writeln!(
            out,
            "Oluşturulma Tarihi: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(out);

        match &self.body {
            ReportBody::Individual { total_t } => {
                let _ = writeln!(out, "=== Bireysel Karbon Ayak İzi ===");
                let _ = writeln!(out, "Toplam yıllık emisyonlar: {total_t:.1} ton CO2e");
                let _ = writeln!(out);
                let _ = writeln!(out, "Ortalamalarla Karşılaştırma:");
                let _ = writeln!(out, "Sizin ayak iziniz: {total_t:.1} ton CO2e");
                let _ = writeln!(out, "Dünya ortalaması:  {WORLD_AVERAGE_T:.1} ton CO2e");
                let _ = writeln!(
                    out,
                    "Birleşik Krallık ortalaması: {UK_AVERAGE_T:.1} ton CO2e"
                );
            }
            ReportBody::Business {
                name,
                sector,
                breakdown,
            } => {
                let _ = writeln!(out, "=== İşletme Karbon Ayak İzi: {name} ===");
                let _ = writeln!(out, "Sektör: {sector}");
                let _ = writeln!(out);
                let _ = writeln!(out, "Kategoriye göre emisyonlar (ton CO2e):");
                for (label, value) in [
                    ("Bina operasyonları:", breakdown.building_t),
                    ("Elektrik kullanımı:", breakdown.electricity_t),
                    ("Doğalgaz kullanımı:", breakdown.gas_t),
                    ("Şirket araçları:", breakdown.vehicles_t),
                    ("İş hava yolculuğu:", breakdown.air_travel_t),
                    ("Çalışanla ilgili:", breakdown.employees_t),
                    ("Veri merkezi:", breakdown.data_center_t),
                ] {
                    let _ = writeln!(out, "{label:<26} {value:.1}");
                }
                let _ = writeln!(out);
                let _ = writeln!(
                    out,
                    "Toplam yıllık emisyonlar: {:.1} ton CO2e",
                    breakdown.total_t
                );
                let _ = writeln!(
                    out,
                    "Çalışan başına emisyonlar: {:.1} ton CO2e",
                    breakdown.per_employee_t
                );
            }
        }

        let _ = writeln!(out);
        let _ = write!(out, "{ATTRIBUTION}");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::business_emissions;
    use crate::parameters::EmissionFactorConfig;
    use crate::records::{BusinessRecord, SupplyChainAssessment};
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap()
    }

    #[test]
    fn test_individual_report_lines() {
        let report = Report::individual(12.34, timestamp());
        let text = report.render();

        assert!(text.starts_with("Karbon Ayak İzi Analiz Raporu\n"));
        assert!(text.contains("Oluşturulma Tarihi: 2024-03-15 14:30:05"));
        assert!(text.contains("Toplam yıllık emisyonlar: 12.3 ton CO2e"));
        assert!(text.contains("Dünya ortalaması:  4.4 ton CO2e"));
        assert!(text.contains("Birleşik Krallık ortalaması: 14.1 ton CO2e"));
        assert!(text.ends_with(
            "Rapor, Karbon Ayak İzi Hesaplayıcı v1.0 tarafından oluşturuldu"
        ));
    }

    #[test]
    fn test_business_report_lines() {
        let config = EmissionFactorConfig::default();
        let record = BusinessRecord {
            name: "Örnek A.Ş.".to_string(),
            sector: "Perakende".to_string(),
            num_employees: 8,
            office_area_sqft: 2000.0,
            electricity_kwh: 40000.0,
            electricity_green: true,
            gas_kwh: 15000.0,
            vehicles: vec![],
            air_travel_hours: 12.0,
            waste_recycling_rate: 0.6,
            data_center_kwh: 0.0,
            supply_chain_assessment: SupplyChainAssessment::KeySuppliers,
            renewable_energy_percent: 10.0,
        };
        let breakdown = business_emissions(&record, &config).unwrap();
        let text = Report::business("Örnek A.Ş.", "Perakende", breakdown.clone(), timestamp())
            .render();

        assert!(text.contains("=== İşletme Karbon Ayak İzi: Örnek A.Ş. ==="));
        assert!(text.contains("Sektör: Perakende"));
        assert!(text.contains("Bina operasyonları:"));
        assert!(text.contains("Veri merkezi:"));
        assert!(text.contains(&format!(
            "Toplam yıllık emisyonlar: {:.1} ton CO2e",
            breakdown.total_t
        )));
        assert!(text.contains(&format!(
            "Çalışan başına emisyonlar: {:.1} ton CO2e",
            breakdown.per_employee_t
        )));
    }

    #[test]
    fn test_suggested_filename_is_timestamped() {
        let report = Report::individual(7.0, timestamp());
        assert_eq!(
            report.suggested_filename(),
            "karbon_ayak_izi_raporu_2024-03-15_14-30-05.txt"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let report = Report::individual(9.9, timestamp());
        assert_eq!(report.render(), report.render());
    }
}
