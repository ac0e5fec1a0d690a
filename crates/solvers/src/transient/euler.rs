//! Forward Euler solver for ODE problems.
//!
//! Steps a model forward with a fixed increment:
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * dt
//! ```
//!
//! The derivative for step `n` is computed from the snapshot at step `n` only,
//! so every component of the state advances from the same point in time.
//!
//! # Example
//!
//! ```ignore
//! use epi_solvers::transient::euler;
//!
//! let solution = euler::solve(&model, &problem, initial_input, 1.0, days, ())?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod error;
mod event;
mod solution;

pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use epi_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Type alias for the result of [`solve`].
pub type SolveResult<M, P> = Result<
    Solution<<M as Model>::Input, <M as Model>::Output>,
    Error<<M as Model>::Error, <P as OdeProblem>::Error>,
>;

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Reserve room for `steps + 1` snapshots.
/// 2. Call the model with the initial input to get the initial snapshot.
/// 3. For each step:
///    - Extract the state from the current input.
///    - Compute the derivative from the current input and output.
///    - Step the state forward: `state + derivative * dt`.
///    - Build the next input from the stepped state.
///    - Call the model to get the next output.
///    - Emit an [`Event`] to the observer.
/// 4. Return the solution with the full history.
///
/// Pass `()` as the observer to ignore events.
///
/// # Errors
///
/// Returns [`Error::History`] if the history for `steps` cannot be allocated,
/// and an error if the model or problem returns one at any point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> SolveResult<M, P>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>>,
{
    let mut history: Vec<Snapshot<M::Input, M::Output>> = Vec::new();
    steps
        .checked_add(1)
        .and_then(|len| history.try_reserve_exact(len).ok())
        .ok_or(Error::History { steps })?;

    let initial_output = model.call(&initial).map_err(Error::Model)?;
    let mut current = Snapshot::new(initial, initial_output);
    history.push(current.clone());
    observer.observe(&Event {
        step: 0,
        snapshot: current.clone(),
    });

    for step in 1..=steps {
        let state = problem.state(&current.input).map_err(Error::Problem)?;
        let derivative = problem
            .derivative(&current.input, &current.output)
            .map_err(Error::Problem)?;

        let next_state = state.step(derivative, dt.clone());
        let next_input = problem
            .build_input(&current.input, &next_state, &dt)
            .map_err(Error::Problem)?;
        let next_output = model.call(&next_input).map_err(Error::Model)?;

        current = Snapshot::new(next_input, next_output);
        history.push(current.clone());
        observer.observe(&Event {
            step,
            snapshot: current.clone(),
        });
    }

    Ok(Solution { history })
}
