//! Reference data loader
//!
//! Loads the external comparison datasets (location / CO2-per-capita pairs)
//! the presentation layer plots the user's footprint against. Two tabular
//! sources are read and concatenated; only the first two columns of each
//! matter, whatever their headers say. Rows whose CO2 cell fails numeric
//! coercion are dropped with a warning rather than failing the load, while
//! a source that cannot be opened at all is reported as unavailable so the
//! caller can skip the comparison step and still present the core result.

use crate::errors::{KarbonError, KarbonResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One comparison row: a location and its per-capita emissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub location: String,
    pub co2_per_capita: f64,
}

/// The merged comparison dataset, cities first, countries second.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonDataset {
    points: Vec<ReferencePoint>,
}

impl ComparisonDataset {
    /// Load and merge both sources from disk.
    pub fn load(
        cities_path: impl AsRef<Path>,
        countries_path: impl AsRef<Path>,
    ) -> KarbonResult<Self> {
        let cities = open(cities_path.as_ref())?;
        let countries = open(countries_path.as_ref())?;
        Self::from_readers(cities, countries)
    }

    /// Load and merge both sources from already-opened readers.
    pub fn from_readers(cities: impl Read, countries: impl Read) -> KarbonResult<Self> {
        let mut points = read_source(cities, "cities");
        points.extend(read_source(countries, "countries"));
        Ok(Self { points })
    }

    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The comparison table for display: every reference row plus the
    /// user's own entry, ordered by location name.
    pub fn ranked_against(&self, label: &str, user_t: f64) -> Vec<ReferencePoint> {
        let mut rows = self.points.clone();
        rows.push(ReferencePoint {
            location: label.to_string(),
            co2_per_capita: user_t,
        });
        rows.sort_by(|a, b| a.location.cmp(&b.location));
        rows
    }
}

fn open(path: &Path) -> KarbonResult<File> {
    File::open(path).map_err(|err| {
        KarbonError::ReferenceDataUnavailable(format!("{}: {err}", path.display()))
    })
}

/// Read one source, keeping the rows whose first two cells form a
/// (location, numeric CO2) pair and dropping the rest.
fn read_source(reader: impl Read, source: &str) -> Vec<ReferencePoint> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let mut points = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!("{source} row {row}: unreadable row dropped: {err}");
                continue;
            }
        };
        let location = match record.get(0).map(str::trim) {
            Some(location) if !location.is_empty() => location.to_string(),
            _ => {
                warn!("{source} row {row}: missing location, row dropped");
                continue;
            }
        };
        let co2_per_capita = match record.get(1).and_then(|cell| cell.trim().parse::<f64>().ok())
        {
            Some(value) => value,
            None => {
                warn!("{source} row {row}: non-numeric CO2 cell, row dropped");
                continue;
            }
        };
        points.push(ReferencePoint {
            location,
            co2_per_capita,
        });
    }
    points
}
