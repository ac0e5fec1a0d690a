use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use epi_models::Trajectory;
use epi_plot::{ImageFormat, RenderError, TrajectoryPlot};

/// Output file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A plot of every compartment over time.
    Image(ImageFormat),
    /// One row per day: `day,S,[E,]I,[R]`.
    Csv,
    /// The serialized [`Trajectory`].
    Json,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(
        "unsupported output format for {}: expected a .png, .svg, .csv, or .json file",
        .0.display()
    )]
    UnsupportedFormat(PathBuf),

    #[error("plot error")]
    Render(#[from] RenderError),

    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl Format {
    /// Picks the format from the file extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => ImageFormat::from_path(path)
                .map(Self::Image)
                .ok_or_else(|| ExportError::UnsupportedFormat(path.to_owned())),
        }
    }
}

/// Writes a trajectory to `path` in the format its extension names.
///
/// # Errors
///
/// Returns an error if the format is unsupported or the file cannot be written.
pub fn write(trajectory: &Trajectory, path: &Path) -> Result<(), ExportError> {
    match Format::from_path(path)? {
        Format::Image(_) => {
            let title = format!("{} model", trajectory.model());
            TrajectoryPlot::from_trajectory(trajectory).save(path, &title)?;
            Ok(())
        }
        Format::Csv => write_csv(trajectory, BufWriter::new(File::create(path)?)),
        Format::Json => write_json(trajectory, BufWriter::new(File::create(path)?)),
    }
}

fn write_csv<W: Write>(trajectory: &Trajectory, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);

    let header = std::iter::once("day").chain(trajectory.compartments().iter().map(|c| c.label()));
    csv.write_record(header)?;

    for day in 0..trajectory.len() {
        let values = trajectory.row(day).unwrap_or_default();
        let record = std::iter::once(day.to_string()).chain(values.iter().map(f64::to_string));
        csv.write_record(record)?;
    }

    csv.flush()?;
    Ok(())
}

fn write_json<W: Write>(trajectory: &Trajectory, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, trajectory)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
