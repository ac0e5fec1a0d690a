//! Core traits for defining and integrating compartmental models.
//!
//! This crate holds the abstractions the solver and the epidemic models share:
//!
//! - [`Model`]: a deterministic callable mapping a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events as the iteration proceeds
//! - [`OdeProblem`]: adapts a model's input and output to a steppable state
//! - [`StepIntegrable`]: a state that advances by `derivative * delta`

mod model;
mod observer;
mod ode;
mod step;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use ode::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
