use epi_core::StepIntegrable;

/// Compartment counts on a single day.
///
/// Every model uses the same four fields. Compartments a model does not track
/// stay at zero for the whole run: `exposed` outside SEIR and `recovered` in
/// SIS.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Compartments {
    pub susceptible: f64,
    pub exposed: f64,
    pub infected: f64,
    pub recovered: f64,
}

/// Change in each compartment over one day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Deltas {
    pub susceptible: f64,
    pub exposed: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl Compartments {
    /// Sum over all compartments.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.susceptible + self.exposed + self.infected + self.recovered
    }
}

impl StepIntegrable<f64> for Compartments {
    type Derivative = Deltas;

    fn step(&self, deltas: Deltas, days: f64) -> Self {
        Self {
            susceptible: self.susceptible + deltas.susceptible * days,
            exposed: self.exposed + deltas.exposed * days,
            infected: self.infected + deltas.infected * days,
            recovered: self.recovered + deltas.recovered * days,
        }
    }
}
