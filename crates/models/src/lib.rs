//! Discrete-time compartmental epidemic models.
//!
//! Three model variants are supported, selected with [`ModelKind`]:
//!
//! - **SIR**: susceptible, infected, recovered
//! - **SEIR**: adds an exposed (incubating) compartment
//! - **SIS**: recovered people return directly to the susceptible pool
//!
//! [`simulate`] validates a [`Parameters`] record, seeds day 0, and integrates
//! the model one day at a time with forward Euler, returning a [`Trajectory`]
//! with one value per compartment per day.
//!
//! ```
//! use epi_models::{ModelKind, Parameters, simulate};
//!
//! let params = Parameters::new(1000, 0.5, 0.1, 2, 10);
//! let trajectory = simulate(ModelKind::Sir, &params)?;
//!
//! assert_eq!(trajectory.len(), 3);
//! assert_eq!(trajectory.susceptible()[0], 990.0);
//! # Ok::<(), epi_models::Error>(())
//! ```

mod compartments;
mod error;
mod kind;
mod parameters;
mod rules;
mod simulate;
mod trajectory;

pub use compartments::{Compartments, Deltas};
pub use error::{Error, ParameterError};
pub use kind::{Compartment, ModelKind};
pub use parameters::Parameters;
pub use simulate::{simulate, simulate_by_name};
pub use trajectory::Trajectory;
