use serde::Serialize;

use crate::{Compartment, Compartments, ModelKind};

/// Daily compartment values produced by one simulation.
///
/// Each reported compartment holds one value per day from day 0 (the initial
/// condition) through the last simulated day, so every series has the same
/// length. Values are not clamped: an aggressive parameter set can push a
/// compartment below zero or above the population, exactly as the forward
/// Euler scheme computes it.
///
/// SEIR reports an exposed series; SIS reports no recovered series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    model: ModelKind,
    population: f64,
    susceptible: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exposed: Option<Vec<f64>>,
    infected: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recovered: Option<Vec<f64>>,
}

impl Trajectory {
    /// Collects per-day compartment states into per-compartment series.
    pub(crate) fn collect<'a>(
        model: ModelKind,
        population: f64,
        days: impl ExactSizeIterator<Item = &'a Compartments>,
    ) -> Self {
        let len = days.len();
        let mut trajectory = Self {
            model,
            population,
            susceptible: Vec::with_capacity(len),
            exposed: model
                .has(Compartment::Exposed)
                .then(|| Vec::with_capacity(len)),
            infected: Vec::with_capacity(len),
            recovered: model
                .has(Compartment::Recovered)
                .then(|| Vec::with_capacity(len)),
        };

        for day in days {
            trajectory.susceptible.push(day.susceptible);
            if let Some(exposed) = &mut trajectory.exposed {
                exposed.push(day.exposed);
            }
            trajectory.infected.push(day.infected);
            if let Some(recovered) = &mut trajectory.recovered {
                recovered.push(day.recovered);
            }
        }

        trajectory
    }

    /// The model that produced this trajectory.
    #[must_use]
    pub fn model(&self) -> ModelKind {
        self.model
    }

    /// The total population the run conserves.
    #[must_use]
    pub fn population(&self) -> f64 {
        self.population
    }

    /// Number of recorded days, including day 0.
    #[must_use]
    pub fn len(&self) -> usize {
        self.susceptible.len()
    }

    /// Always `false`: day 0 is recorded even when no days are simulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.susceptible.is_empty()
    }

    /// Index of the last recorded day.
    #[must_use]
    pub fn last_day(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Compartments reported by this trajectory, in display order.
    #[must_use]
    pub fn compartments(&self) -> &'static [Compartment] {
        self.model.compartments()
    }

    /// Returns the series for a compartment, or `None` if the model does not
    /// report it.
    #[must_use]
    pub fn series(&self, compartment: Compartment) -> Option<&[f64]> {
        match compartment {
            Compartment::Susceptible => Some(&self.susceptible),
            Compartment::Exposed => self.exposed.as_deref(),
            Compartment::Infected => Some(&self.infected),
            Compartment::Recovered => self.recovered.as_deref(),
        }
    }

    /// Iterates over `(compartment, series)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Compartment, &[f64])> {
        self.compartments()
            .iter()
            .filter_map(|&c| self.series(c).map(|series| (c, series)))
    }

    #[must_use]
    pub fn susceptible(&self) -> &[f64] {
        &self.susceptible
    }

    #[must_use]
    pub fn exposed(&self) -> Option<&[f64]> {
        self.exposed.as_deref()
    }

    #[must_use]
    pub fn infected(&self) -> &[f64] {
        &self.infected
    }

    #[must_use]
    pub fn recovered(&self) -> Option<&[f64]> {
        self.recovered.as_deref()
    }

    /// Values of every reported compartment on `day`, in display order.
    #[must_use]
    pub fn row(&self, day: usize) -> Option<Vec<f64>> {
        (day < self.len()).then(|| self.iter().map(|(_, series)| series[day]).collect())
    }

    /// Sum over every compartment on `day`.
    #[must_use]
    pub fn total(&self, day: usize) -> Option<f64> {
        self.row(day).map(|values| values.iter().sum())
    }

    /// The day with the most infected people and that count.
    ///
    /// Ties resolve to the earliest day.
    #[must_use]
    pub fn peak_infected(&self) -> (usize, f64) {
        self.infected
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (day, value)| {
                if value > best.1 { (day, value) } else { best }
            })
    }

    /// People outside the susceptible pool on the last day.
    ///
    /// For SIR and SEIR this is everyone ever infected; for SIS it is the
    /// current infected count.
    #[must_use]
    pub fn final_size(&self) -> f64 {
        self.population - self.susceptible.last().copied().unwrap_or(self.population)
    }
}
