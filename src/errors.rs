use thiserror::Error;

/// Error type for invalid records, unknown lookup keys and unusable inputs.
#[derive(Error, Debug)]
pub enum KarbonError {
    #[error("unknown key '{key}' in {table} table")]
    ConfigLookup { table: &'static str, key: String },
    #[error("unknown vehicle class '{0}', expected one of: küçük, orta, büyük")]
    UnknownVehicleClass(String),
    #[error("invalid value for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("{0} must be at least 1, a per-head figure cannot be derived")]
    DivisionByZero(&'static str),
    #[error("reference data unavailable: {0}")]
    ReferenceDataUnavailable(String),
}

/// Convenience type for `Result<T, KarbonError>`.
pub type KarbonResult<T> = Result<T, KarbonError>;
