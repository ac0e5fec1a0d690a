//! Solvers that march an [`OdeProblem`] forward in time.
//!
//! # Solvers
//!
//! - [`euler`]: explicit forward Euler with a fixed step size
//!
//! [`OdeProblem`]: epi_core::OdeProblem

pub mod euler;
