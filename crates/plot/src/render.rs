use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use plotters::{
    coord::Shift,
    prelude::*,
    style::{FontStyle, register_font},
};
use thiserror::Error;

use crate::{TrajectoryPlot, X_LABEL, Y_LABEL};

const SIZE: (u32, u32) = (960, 640);

const FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const COLORS: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(214, 39, 40),
    RGBColor(44, 160, 44),
];

/// Image formats a [`TrajectoryPlot`] can be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// Picks the format from the file extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

/// A plot that could not be drawn or written.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported image format for {}: expected a .png or .svg file", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to load plot font: {0}")]
    Font(String),

    #[error("failed to draw plot: {0}")]
    Draw(String),
}

impl TrajectoryPlot {
    /// Saves the plot as an image, choosing PNG or SVG by the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedFormat`] for any other extension, and
    /// [`RenderError::Font`] or [`RenderError::Draw`] if the chart cannot be
    /// drawn or written.
    pub fn save(&self, path: &Path, title: &str) -> Result<(), RenderError> {
        let format = ImageFormat::from_path(path)
            .ok_or_else(|| RenderError::UnsupportedFormat(path.to_owned()))?;
        register_fonts()?;

        match format {
            ImageFormat::Png => self.draw(&BitMapBackend::new(path, SIZE).into_drawing_area(), title),
            ImageFormat::Svg => self.draw(&SVGBackend::new(path, SIZE).into_drawing_area(), title),
        }
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        title: &str,
    ) -> Result<(), RenderError> {
        let (x_max, y_min, y_max) = self.bounds();

        root.fill(&WHITE).map_err(draw_error)?;
        let mut chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 24))
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(80)
            .build_cartesian_2d(0.0..x_max, y_min..y_max)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .draw()
            .map_err(draw_error)?;

        for ((name, points), color) in self.traces.iter().zip(COLORS.iter().cycle()) {
            let color = *color;
            chart
                .draw_series(LineSeries::new(
                    points.iter().map(|&[day, count]| (day, count)),
                    color.stroke_width(2),
                ))
                .map_err(draw_error)?
                .label(name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_error)?;

        root.present().map_err(draw_error)
    }

    /// Axis ranges covering every finite point, with the y range including zero.
    fn bounds(&self) -> (f64, f64, f64) {
        let finite = || {
            self.traces
                .iter()
                .flat_map(|(_, points)| points)
                .filter(|[day, count]| day.is_finite() && count.is_finite())
        };

        let x_max = finite().map(|[day, _]| *day).fold(1.0, f64::max);
        let y_min = finite().map(|[_, count]| *count).fold(0.0, f64::min);
        let y_max = finite().map(|[_, count]| *count).fold(1.0, f64::max);

        (x_max, y_min, y_max * 1.05)
    }
}

/// Registers the bundled font as the `sans-serif` family all chart text uses.
fn register_fonts() -> Result<(), RenderError> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

    REGISTERED
        .get_or_init(|| {
            register_font("sans-serif", FontStyle::Normal, FONT).map_err(|_| "invalid font data".to_string())
        })
        .clone()
        .map_err(RenderError::Font)
}

fn draw_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    fn sir() -> TrajectoryPlot {
        TrajectoryPlot::new()
            .with_series("S", &[990.0, 985.05, 978.2])
            .with_series("I", &[10.0, 13.95, 19.4])
            .with_series("R", &[0.0, 1.0, 2.4])
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("SIR_model.png")), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_path(Path::new("plot.SVG")), Some(ImageFormat::Svg));
        assert_eq!(ImageFormat::from_path(Path::new("plot.csv")), None);
        assert_eq!(ImageFormat::from_path(Path::new("plot")), None);
    }

    #[test]
    fn svg_has_axis_labels_and_a_legend_entry_per_compartment() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("SIR_model.svg");

        sir().save(&path, "SIR model").unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));

        let texts: Vec<&str> = svg
            .split("<text")
            .skip(1)
            .filter_map(|element| {
                let (_, rest) = element.split_once('>')?;
                let (content, _) = rest.split_once("</text>")?;
                Some(content.trim())
            })
            .collect();
        for label in ["SIR model", "Time /days", "Population", "S", "I", "R"] {
            assert!(texts.contains(&label), "missing text {label:?} in {texts:?}");
        }
    }

    #[test]
    fn png_is_written() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("SIR_model.png");

        sir().save(&path, "SIR model").unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("SIR_model.gif");

        let err = sir().save(&path, "SIR model").unwrap_err();

        assert!(matches!(err, RenderError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn bounds_cover_negative_overshoot() {
        let plot = TrajectoryPlot::new().with_series("I", &[10.0, -50.0, 200.0]);

        let (x_max, y_min, y_max) = plot.bounds();

        assert_eq!(x_max, 2.0);
        assert_eq!(y_min, -50.0);
        assert!(y_max >= 200.0);
    }
}
