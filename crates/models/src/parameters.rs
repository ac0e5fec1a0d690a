use serde::{Deserialize, Serialize};

use crate::{
    Compartments, ModelKind, ParameterError,
    rules::{Compartmental, Seir, Sir, Sis},
};

/// The parameter record a simulation is run from.
///
/// This is the flat record external inputs (command-line flags, YAML files)
/// map onto; field names match the YAML keys. Integer fields are signed so
/// that out-of-range input reaches validation and is reported as an invalid
/// parameter rather than a parse failure.
///
/// `sigma` and `initial_exposed` are only read by SEIR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    /// Total population.
    pub population_size: i64,

    /// Transmission rate per day.
    pub beta: f64,

    /// Recovery rate per day.
    pub gamma: f64,

    /// Incubation progression rate per day (SEIR only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,

    /// Number of days to simulate.
    pub days: i64,

    /// Infected people on day 0.
    pub initial_infected: i64,

    /// Exposed people on day 0 (SEIR only).
    #[serde(default)]
    pub initial_exposed: i64,
}

/// A validated run: the model rule, day-0 values, and step count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scenario {
    pub(crate) model: Compartmental,
    pub(crate) initial: Compartments,
    pub(crate) days: usize,
}

impl Parameters {
    /// Creates a record with the fields shared by every model.
    #[must_use]
    pub fn new(
        population_size: i64,
        beta: f64,
        gamma: f64,
        days: i64,
        initial_infected: i64,
    ) -> Self {
        Self {
            population_size,
            beta,
            gamma,
            sigma: None,
            days,
            initial_infected,
            initial_exposed: 0,
        }
    }

    /// Sets the SEIR incubation rate and initial exposed count.
    #[must_use]
    pub fn with_exposure(mut self, sigma: f64, initial_exposed: i64) -> Self {
        self.sigma = Some(sigma);
        self.initial_exposed = initial_exposed;
        self
    }

    /// Validates the record for `kind`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found, checking the population,
    /// then rates, then the step count, then initial counts.
    pub fn validate(&self, kind: ModelKind) -> Result<(), ParameterError> {
        self.scenario(kind).map(|_| ())
    }

    /// Validates the record and builds the run it describes.
    pub(crate) fn scenario(&self, kind: ModelKind) -> Result<Scenario, ParameterError> {
        if self.population_size <= 0 {
            return Err(ParameterError::Population(self.population_size));
        }
        #[allow(clippy::cast_precision_loss)]
        let population = self.population_size as f64;
        let beta = rate("beta", self.beta)?;
        let gamma = rate("gamma", self.gamma)?;
        let model = match kind {
            ModelKind::Sir => Compartmental::Sir(Sir {
                population,
                beta,
                gamma,
            }),
            ModelKind::Seir => Compartmental::Seir(Seir {
                population,
                beta,
                gamma,
                sigma: rate("sigma", self.sigma.ok_or(ParameterError::MissingSigma)?)?,
            }),
            ModelKind::Sis => Compartmental::Sis(Sis {
                population,
                beta,
                gamma,
            }),
        };

        let days = usize::try_from(self.days).map_err(|_| ParameterError::Days(self.days))?;

        let infected = count("initial_infected", self.initial_infected)?;
        let exposed = match kind {
            ModelKind::Seir => count("initial_exposed", self.initial_exposed)?,
            ModelKind::Sir | ModelKind::Sis => 0,
        };
        let seeded = infected.saturating_add(exposed);
        if seeded > self.population_size {
            return Err(ParameterError::ExceedsPopulation {
                initial: seeded,
                exposed,
                population: self.population_size,
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let (infected, exposed) = (infected as f64, exposed as f64);

        let initial = Compartments {
            susceptible: population - infected - exposed,
            exposed,
            infected,
            recovered: 0.0,
        };

        Ok(Scenario {
            model,
            initial,
            days,
        })
    }
}

fn rate(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ParameterError::Rate { name, value });
    }
    Ok(value)
}

fn count(name: &'static str, value: i64) -> Result<i64, ParameterError> {
    if value < 0 {
        return Err(ParameterError::Count { name, value });
    }
    Ok(value)
}
