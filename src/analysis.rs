//! Analysis and comparison engine
//!
//! Decomposes an individual footprint into five fixed categories and
//! compares each against its benchmark average. The decomposition is the
//! only code path that splits a footprint into categories: it is built on
//! the same energy, fleet and food calculations the totals use, so the
//! category figures always sum to the household + personal total.
//!
//! Category semantics: vehicles count towards Transport, not Household
//! Energy; bus, train and flights join Transport; Public Services is a
//! fixed allocation whose benchmark ratio is pinned at 1.0.

use crate::errors::KarbonResult;
use crate::household;
use crate::parameters::{EmissionFactorConfig, ReferenceAverages};
use crate::personal;
use crate::records::{HouseholdRecord, PersonalRecord};
use serde::{Deserialize, Serialize};

/// The fixed footprint categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    HouseholdEnergy,
    Transport,
    Food,
    ConsumerSpending,
    PublicServices,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::HouseholdEnergy,
        Category::Transport,
        Category::Food,
        Category::ConsumerSpending,
        Category::PublicServices,
    ];

    /// Display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::HouseholdEnergy => "Ev Enerjisi",
            Category::Transport => "Ulaşım",
            Category::Food => "Gıda",
            Category::ConsumerSpending => "Tüketici Harcaması",
            Category::PublicServices => "Kamu Hizmetleri",
        }
    }
}

/// Per-category results of an individual analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryFigures {
    /// Annual emissions in tonnes CO2e.
    pub emissions_t: f64,
    /// Share of the footprint total, 0–100.
    pub percent_of_total: f64,
    /// Emissions relative to the category's benchmark average.
    pub ratio_to_reference: f64,
}

/// Category decomposition of an individual footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    categories: Vec<(Category, CategoryFigures)>,
    /// Sum over all categories, tonnes CO2e per year.
    pub total_t: f64,
}

impl AnalysisResult {
    /// Figures for one category.
    pub fn figures(&self, category: Category) -> &CategoryFigures {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, figures)| figures)
            .expect("analysis carries every category")
    }

    /// Categories with their figures, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryFigures)> {
        self.categories.iter().map(|(c, figures)| (*c, figures))
    }

    /// The top two benchmark-exceeding categories, strongest first.
    ///
    /// Public Services is constant and never listed. Ties keep report
    /// order; only ratios above 1 qualify.
    pub fn priority_areas(&self) -> Vec<(Category, f64)> {
        let mut ranked: Vec<(Category, f64)> = self
            .categories
            .iter()
            .filter(|(category, _)| *category != Category::PublicServices)
            .map(|(category, figures)| (*category, figures.ratio_to_reference))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(2);
        ranked.retain(|(_, ratio)| *ratio > 1.0);
        ranked
    }

    /// Reduction advice for every category running more than 20% over its
    /// benchmark, for the presentation layer.
    pub fn reduction_hints(&self) -> Vec<(Category, &'static [&'static str])> {
        self.categories
            .iter()
            .filter(|(_, figures)| figures.ratio_to_reference > 1.2)
            .filter_map(|(category, _)| hints_for(*category).map(|hints| (*category, hints)))
            .collect()
    }
}

/// Decompose an individual footprint into categories and compare each
/// against its benchmark.
pub fn analyze_individual(
    household: &HouseholdRecord,
    personal: &PersonalRecord,
    config: &EmissionFactorConfig,
) -> KarbonResult<AnalysisResult> {
    household.validate()?;
    personal.validate(config)?;

    let members = f64::from(household.members);
    let household_energy = household::energy_kg(household, config) / 1000.0 / members;
    let transport = household::fleet_kg(&household.vehicles, config) / 1000.0 / members
        + (personal.bus_km + personal.train_km) * config.surface_transit_t_per_km
        + personal.flight_hours * config.flight_t_per_hour;
    let food = personal::food_emissions_t(personal, config)?;
    let spending = config.spending_tier_t(&personal.spending_tier)?;
    let public_services = config.public_services_t;

    // Same order as Category::ALL
    let emissions = [household_energy, transport, food, spending, public_services];
    let total_t: f64 = emissions.iter().sum();

    let categories = Category::ALL
        .iter()
        .zip(emissions)
        .map(|(&category, emissions_t)| {
            let ratio_to_reference = match category {
                // A constant allocation always matches its benchmark
                Category::PublicServices => 1.0,
                _ => emissions_t / reference_for(&config.reference_averages, category),
            };
            (
                category,
                CategoryFigures {
                    emissions_t,
                    percent_of_total: emissions_t / total_t * 100.0,
                    ratio_to_reference,
                },
            )
        })
        .collect();

    Ok(AnalysisResult { categories, total_t })
}

fn reference_for(averages: &ReferenceAverages, category: Category) -> f64 {
    match category {
        Category::HouseholdEnergy => averages.household_energy_t,
        Category::Transport => averages.transport_t,
        Category::Food => averages.food_t,
        Category::ConsumerSpending => averages.spending_t,
        Category::PublicServices => averages.public_services_t,
    }
}

const HOUSEHOLD_ENERGY_HINTS: [&str; 2] = [
    "Enerji verimliliği iyileştirmelerini göz önünde bulundurun",
    "Yeşil enerji sağlayıcılarına bakın",
];
const TRANSPORT_HINTS: [&str; 2] = [
    "Araba kullanımını azaltmayı veya elektrikli araçlara geçmeyi düşünün",
    "Hava yolculuğuna alternatifler arayın",
];
const FOOD_HINTS: [&str; 2] = [
    "Et tüketimini azaltmayı düşünün",
    "Daha fazla yerel ve mevsimlik gıda satın alın",
];
const SPENDING_HINTS: [&str; 2] = [
    "Tüketimi azaltmanın yollarını arayın",
    "İkinci el veya tamir seçeneklerini göz önünde bulundurun",
];

fn hints_for(category: Category) -> Option<&'static [&'static str]> {
    match category {
        Category::HouseholdEnergy => Some(&HOUSEHOLD_ENERGY_HINTS),
        Category::Transport => Some(&TRANSPORT_HINTS),
        Category::Food => Some(&FOOD_HINTS),
        Category::ConsumerSpending => Some(&SPENDING_HINTS),
        Category::PublicServices => None,
    }
}
