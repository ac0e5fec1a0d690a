//! Time-series plots of compartmental model trajectories.
//!
//! [`TrajectoryPlot`] turns a [`Trajectory`] into one labeled line per
//! compartment (x: day, y: population). It can be saved as a PNG or SVG image
//! with [`TrajectoryPlot::save`], or opened in a native egui window with
//! `TrajectoryPlot::show` when the `window` feature is enabled.
//!
//! ```ignore
//! let trajectory = epi_models::simulate(ModelKind::Sir, &params)?;
//! TrajectoryPlot::from_trajectory(&trajectory).save(Path::new("SIR_model.png"), "SIR model")?;
//! ```

mod render;
#[cfg(feature = "window")]
mod window;

pub use render::{ImageFormat, RenderError};
#[cfg(feature = "window")]
pub use window::ShowConfig;

use epi_models::Trajectory;

const X_LABEL: &str = "Time /days";
const Y_LABEL: &str = "Population";

/// Named `[day, count]` traces ready to be drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryPlot {
    traces: Vec<(String, Vec<[f64; 2]>)>,
}

impl TrajectoryPlot {
    /// Creates an empty plot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plot with one trace per compartment the trajectory reports.
    #[must_use]
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        trajectory
            .iter()
            .fold(Self::new(), |plot, (compartment, series)| {
                plot.with_series(compartment.label(), series)
            })
    }

    /// Adds a trace whose x values are the day indices of `values`.
    #[must_use]
    pub fn with_series(mut self, name: &str, values: &[f64]) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let points = values
            .iter()
            .enumerate()
            .map(|(day, &y)| [day as f64, y])
            .collect();
        self.traces.push((name.to_owned(), points));
        self
    }

    /// Trace names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.traces.iter().map(|(name, _)| name.as_str())
    }

    /// Points of the named trace.
    #[must_use]
    pub fn points(&self, name: &str) -> Option<&[[f64; 2]]> {
        self.traces
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, points)| points.as_slice())
    }
}
