use thiserror::Error;

/// Errors returned by [`simulate`](crate::simulate).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("unknown model `{0}`: expected one of SIR, SEIR, SIS")]
    UnknownModel(String),
}

/// A parameter value outside the domain a model accepts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("population_size must be positive, got {0}")]
    Population(i64),

    #[error("{name} must be finite and non-negative, got {value}")]
    Rate { name: &'static str, value: f64 },

    #[error("sigma is required for the SEIR model")]
    MissingSigma,

    #[error("days must be a non-negative step count, got {0}")]
    Days(i64),

    #[error("{name} must be non-negative, got {value}")]
    Count { name: &'static str, value: i64 },

    #[error("initial compartments hold {initial} people, more than population_size {population}")]
    ExceedsPopulation {
        initial: i64,
        exposed: i64,
        population: i64,
    },

    #[error("days {0} is more than a trajectory can hold")]
    TooManyDays(i64),
}

impl ParameterError {
    /// Returns the name of the offending parameter.
    #[must_use]
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::Population(_) => "population_size",
            Self::Rate { name, .. } | Self::Count { name, .. } => *name,
            Self::MissingSigma => "sigma",
            Self::Days(_) | Self::TooManyDays(_) => "days",
            Self::ExceedsPopulation { exposed: 0, .. } => "initial_infected",
            Self::ExceedsPopulation { .. } => "initial_exposed",
        }
    }
}
