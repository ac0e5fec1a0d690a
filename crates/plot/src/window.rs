use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::{TrajectoryPlot, X_LABEL, Y_LABEL};

/// Configuration for showing a [`TrajectoryPlot`] in a window.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with no title and no legend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each compartment.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl TrajectoryPlot {
    /// Opens a blocking egui window displaying all traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    plot: self,
                    legend: config.legend,
                }))
            }),
        )
    }
}

/// The egui [`eframe::App`] that renders the traces.
struct PlotApp {
    plot: TrajectoryPlot,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trajectory_plot")
                .x_axis_label(X_LABEL)
                .y_axis_label(Y_LABEL);
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.plot.traces {
                    let plot_points = PlotPoints::from(points.clone());
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
