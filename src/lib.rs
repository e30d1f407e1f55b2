//! Estimation engine for annual greenhouse-gas footprints.
//!
//! Estimates annual emissions (tonnes CO2e) for a household/individual or a
//! business from a small set of self-reported activity metrics, decomposes
//! individual footprints into categories, compares them against benchmark
//! averages and assembles a plain-text report. Interactive data collection
//! and chart rendering live outside this crate: callers hand in validated
//! records and take data values or rendered text back out.
//!
//! # Module Organisation
//!
//! - `parameters`: the read-only emission factor configuration every
//!   calculation is driven by
//! - `records`: validated input records (household, personal, business)
//! - `household`, `personal`, `business`: the three emission models
//! - `analysis`: category decomposition and benchmark comparison
//! - `reference`: loader for the external comparison datasets
//! - `report`: plain-text report assembly

pub mod analysis;
pub mod business;
pub mod errors;
pub mod household;
pub mod parameters;
pub mod personal;
pub mod records;
pub mod reference;
pub mod report;

pub use errors::{KarbonError, KarbonResult};
