//! Fixed-step solvers for compartmental models.
//!
//! # Modules
//!
//! - [`transient`]: time integration of [`OdeProblem`]s
//!
//! [`OdeProblem`]: epi_core::OdeProblem

pub mod transient;
