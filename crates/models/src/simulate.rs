use std::convert::Infallible;

use epi_core::{DerivativeOf, OdeProblem};
use epi_solvers::transient::euler;
use tracing::{debug, debug_span, trace};

use crate::{Compartments, Deltas, Error, ModelKind, ParameterError, Parameters, Trajectory};

/// Step size of the integration, in days.
const ONE_DAY: f64 = 1.0;

/// Wires a compartmental rule into the Euler solver.
///
/// The model input is the day's compartments and its output is the day's
/// deltas, so the stepped state is the next day's input.
struct DailyProblem;

impl OdeProblem for DailyProblem {
    type Input = Compartments;
    type Output = Deltas;
    type Delta = f64;
    type State = Compartments;
    type Error = Infallible;

    fn state(&self, today: &Compartments) -> Result<Compartments, Infallible> {
        Ok(*today)
    }

    fn derivative(
        &self,
        _today: &Compartments,
        deltas: &Deltas,
    ) -> Result<DerivativeOf<Compartments, f64>, Infallible> {
        Ok(*deltas)
    }

    fn build_input(
        &self,
        _today: &Compartments,
        tomorrow: &Compartments,
        _days: &f64,
    ) -> Result<Compartments, Infallible> {
        Ok(*tomorrow)
    }
}

/// Simulates `kind` for `parameters.days` days.
///
/// Parameters are validated before any step is taken, so an error never comes
/// with a partial trajectory. Each call is independent and holds no state.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if any parameter is outside the domain
/// the model accepts, or if `days` is too large to hold in memory.
pub fn simulate(kind: ModelKind, parameters: &Parameters) -> Result<Trajectory, Error> {
    let scenario = parameters.scenario(kind)?;
    let _span = debug_span!("simulate", model = %kind, days = scenario.days).entered();
    debug!(population = scenario.model.population(), "validated parameters");

    let observer = |event: &euler::Event<Compartments, Deltas>| {
        let today = &event.snapshot.input;
        trace!(
            day = event.step,
            s = today.susceptible,
            e = today.exposed,
            i = today.infected,
            r = today.recovered,
            "integrated day"
        );
    };

    let solution = match euler::solve(
        &scenario.model,
        &DailyProblem,
        scenario.initial,
        ONE_DAY,
        scenario.days,
        observer,
    ) {
        Ok(solution) => solution,
        Err(euler::Error::History { .. }) => {
            return Err(ParameterError::TooManyDays(parameters.days).into());
        }
        Err(euler::Error::Model(never) | euler::Error::Problem(never)) => match never {},
    };

    let trajectory = Trajectory::collect(kind, scenario.model.population(), solution.inputs());

    let (peak_day, peak) = trajectory.peak_infected();
    debug!(peak_day, peak, "simulation complete");

    Ok(trajectory)
}

/// Simulates the model named by `model`, e.g. `"SIR"`.
///
/// # Errors
///
/// Returns [`Error::UnknownModel`] if `model` is not one of SIR, SEIR, or SIS,
/// and [`Error::InvalidParameter`] as [`simulate`] does.
pub fn simulate_by_name(model: &str, parameters: &Parameters) -> Result<Trajectory, Error> {
    simulate(model.parse()?, parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sir_matches_hand_computed_steps() {
        let params = Parameters::new(1000, 0.5, 0.1, 2, 10);

        let t = simulate(ModelKind::Sir, &params).unwrap();

        assert_eq!(t.susceptible()[0], 990.0);
        assert_eq!(t.infected()[0], 10.0);
        assert_eq!(t.recovered().unwrap()[0], 0.0);

        assert_relative_eq!(t.susceptible()[1], 985.05, epsilon = 1e-9);
        assert_relative_eq!(t.infected()[1], 13.95, epsilon = 1e-9);
        assert_relative_eq!(t.recovered().unwrap()[1], 1.0, epsilon = 1e-9);

        // Day 2 applies the rule to day 1 values.
        let ds = -0.5 * 985.05 * 13.95 / 1000.0;
        let dr = 0.1 * 13.95;
        assert_relative_eq!(t.susceptible()[2], 985.05 + ds, epsilon = 1e-9);
        assert_relative_eq!(t.infected()[2], 13.95 - (ds + dr), epsilon = 1e-9);
        assert_relative_eq!(t.recovered().unwrap()[2], 1.0 + dr, epsilon = 1e-9);
    }

    #[test]
    fn zero_days_returns_initial_conditions() {
        let params = Parameters::new(500, 0.3, 0.1, 0, 5).with_exposure(0.2, 7);

        let t = simulate(ModelKind::Seir, &params).unwrap();

        assert_eq!(t.len(), 1);
        assert_eq!(t.row(0), Some(vec![488.0, 7.0, 5.0, 0.0]));
    }

    #[test]
    fn rejects_before_integrating() {
        let params = Parameters::new(1000, -0.1, 0.1, 10, 10);

        assert_eq!(
            simulate(ModelKind::Sir, &params),
            Err(Error::InvalidParameter(ParameterError::Rate {
                name: "beta",
                value: -0.1
            }))
        );
    }

    #[test]
    fn unbounded_days_are_rejected_without_panicking() {
        let params = Parameters::new(1000, 0.5, 0.1, i64::MAX, 10);

        let err = simulate(ModelKind::Sir, &params).unwrap_err();

        match err {
            Error::InvalidParameter(err) => assert_eq!(err.parameter(), "days"),
            other => panic!("expected an invalid parameter, got {other:?}"),
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let params = Parameters::new(1000, 0.5, 0.1, 10, 10);

        assert_eq!(
            simulate_by_name("XYZ", &params),
            Err(Error::UnknownModel("XYZ".into()))
        );
        assert!(simulate_by_name("sis", &params).is_ok());
    }
}
