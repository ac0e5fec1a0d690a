//! Daily transition rules for each model variant.
//!
//! Every rule reads only the current day's [`Compartments`] and returns a full
//! [`Deltas`] record. The next day is built from that record by the solver, so
//! no compartment is ever updated from a value already advanced to tomorrow.

use std::convert::Infallible;

use epi_core::Model;

use crate::{Compartments, Deltas};

/// SIR: susceptible → infected → recovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sir {
    pub(crate) population: f64,
    pub(crate) beta: f64,
    pub(crate) gamma: f64,
}

/// SEIR: susceptible → exposed → infected → recovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Seir {
    pub(crate) population: f64,
    pub(crate) beta: f64,
    pub(crate) gamma: f64,
    pub(crate) sigma: f64,
}

/// SIS: susceptible → infected → susceptible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sis {
    pub(crate) population: f64,
    pub(crate) beta: f64,
    pub(crate) gamma: f64,
}

/// A validated model rule, tagged by variant.
///
/// Only [`Parameters::scenario`](crate::Parameters) builds one, after every
/// parameter has been checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Compartmental {
    Sir(Sir),
    Seir(Seir),
    Sis(Sis),
}

impl Sir {
    fn deltas(&self, today: &Compartments) -> Deltas {
        let susceptible = -self.beta * today.susceptible * today.infected / self.population;
        let recovered = self.gamma * today.infected;
        Deltas {
            susceptible,
            exposed: 0.0,
            infected: -(susceptible + recovered),
            recovered,
        }
    }
}

impl Seir {
    fn deltas(&self, today: &Compartments) -> Deltas {
        let susceptible = -self.beta * today.susceptible * today.infected / self.population;
        let incubated = self.sigma * today.exposed;
        let recovered = self.gamma * today.infected;
        Deltas {
            susceptible,
            exposed: -susceptible - incubated,
            infected: incubated - recovered,
            recovered,
        }
    }
}

impl Sis {
    fn deltas(&self, today: &Compartments) -> Deltas {
        let susceptible = -self.beta * today.susceptible * today.infected / self.population
            + self.gamma * today.infected;
        Deltas {
            susceptible,
            exposed: 0.0,
            infected: -susceptible,
            recovered: 0.0,
        }
    }
}

impl Compartmental {
    /// Returns the total population the rule was validated against.
    #[must_use]
    pub(crate) fn population(&self) -> f64 {
        match self {
            Self::Sir(Sir { population, .. })
            | Self::Seir(Seir { population, .. })
            | Self::Sis(Sis { population, .. }) => *population,
        }
    }

    /// Computes one day's change in every compartment from today's values.
    #[must_use]
    pub(crate) fn deltas(&self, today: &Compartments) -> Deltas {
        match self {
            Self::Sir(rule) => rule.deltas(today),
            Self::Seir(rule) => rule.deltas(today),
            Self::Sis(rule) => rule.deltas(today),
        }
    }
}

impl Model for Compartmental {
    type Input = Compartments;
    type Output = Deltas;
    type Error = Infallible;

    fn call(&self, today: &Compartments) -> Result<Deltas, Infallible> {
        Ok(self.deltas(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn today(susceptible: f64, exposed: f64, infected: f64, recovered: f64) -> Compartments {
        Compartments {
            susceptible,
            exposed,
            infected,
            recovered,
        }
    }

    fn sum(d: &Deltas) -> f64 {
        d.susceptible + d.exposed + d.infected + d.recovered
    }

    #[test]
    fn sir_first_day_flows() {
        let rule = Sir {
            population: 1000.0,
            beta: 0.5,
            gamma: 0.1,
        };

        let d = rule.deltas(&today(990.0, 0.0, 10.0, 0.0));

        assert_relative_eq!(d.susceptible, -4.95);
        assert_relative_eq!(d.recovered, 1.0);
        assert_relative_eq!(d.infected, 3.95);
        assert_eq!(d.exposed, 0.0);
    }

    #[test]
    fn seir_flows_move_through_exposed() {
        let rule = Seir {
            population: 1000.0,
            beta: 0.5,
            gamma: 0.1,
            sigma: 0.2,
        };

        let d = rule.deltas(&today(940.0, 50.0, 10.0, 0.0));

        // New exposures: 0.5 * 940 * 10 / 1000 = 4.7; incubated: 0.2 * 50 = 10.
        assert_relative_eq!(d.susceptible, -4.7);
        assert_relative_eq!(d.exposed, 4.7 - 10.0);
        assert_relative_eq!(d.infected, 10.0 - 1.0);
        assert_relative_eq!(d.recovered, 1.0);
        assert_relative_eq!(sum(&d), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sis_recoveries_return_to_susceptible() {
        let rule = Sis {
            population: 1000.0,
            beta: 0.5,
            gamma: 0.1,
        };

        let d = rule.deltas(&today(990.0, 0.0, 10.0, 0.0));

        assert_relative_eq!(d.susceptible, -4.95 + 1.0);
        assert_relative_eq!(d.infected, 4.95 - 1.0);
        assert_eq!(d.recovered, 0.0);
    }

    #[test]
    fn deltas_conserve_population() {
        let state = today(700.0, 120.0, 130.0, 50.0);
        let rules = [
            Compartmental::Sir(Sir {
                population: 1000.0,
                beta: 1.3,
                gamma: 0.4,
            }),
            Compartmental::Seir(Seir {
                population: 1000.0,
                beta: 1.3,
                gamma: 0.4,
                sigma: 0.25,
            }),
            Compartmental::Sis(Sis {
                population: 1000.0,
                beta: 1.3,
                gamma: 0.4,
            }),
        ];

        for rule in rules {
            assert_relative_eq!(sum(&rule.deltas(&state)), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn model_call_matches_deltas() {
        let rule = Compartmental::Sis(Sis {
            population: 50.0,
            beta: 0.3,
            gamma: 0.05,
        });
        let state = today(45.0, 0.0, 5.0, 0.0);

        assert_eq!(rule.call(&state).unwrap(), rule.deltas(&state));
        assert_eq!(rule.population(), 50.0);
    }
}
