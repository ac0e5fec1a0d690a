use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

#[cfg(feature = "plot")]
use epi_models::Trajectory;
use epi_models::{ModelKind, simulate};

use crate::{cli::Cli, config, export};

/// Simulate the requested model, save the trajectory, and optionally plot it.
pub fn run(cli: Cli) -> Result<()> {
    // Step 1: Resolve the model and its parameters
    if cli.show && !cfg!(feature = "plot") {
        anyhow::bail!("--show requires the `plot` feature");
    }
    let kind: ModelKind = cli.model.parse()?;
    let file = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "reading parameter file");
            config::load(path)?
        }
        None => config::ParameterFile::default(),
    };
    let parameters = config::resolve(&cli.parameters, &file);

    // Step 2: Simulate
    info!(model = %kind, ?parameters, "running simulation");
    let trajectory = simulate(kind, &parameters)?;

    let (peak_day, peak) = trajectory.peak_infected();
    info!(
        days = trajectory.last_day(),
        peak_day,
        peak,
        final_size = trajectory.final_size(),
        "simulation finished"
    );

    // Step 3: Save
    let output = cli.output.unwrap_or_else(|| default_output(kind));
    export::write(&trajectory, &output)
        .with_context(|| format!("failed to write trajectory to {}", output.display()))?;
    info!(path = %output.display(), "trajectory saved");

    // Step 4: Show
    #[cfg(feature = "plot")]
    if cli.show {
        show(&trajectory)?;
    }

    Ok(())
}

fn default_output(kind: ModelKind) -> PathBuf {
    PathBuf::from(format!("{kind}_model.png"))
}

#[cfg(feature = "plot")]
fn show(trajectory: &Trajectory) -> Result<()> {
    use epi_plot::{ShowConfig, TrajectoryPlot};

    let title = format!("{} model", trajectory.model());
    TrajectoryPlot::from_trajectory(trajectory)
        .show(ShowConfig::new().title(title).legend())
        .map_err(|e| anyhow::anyhow!("failed to open plot window: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;

    #[test]
    fn default_output_is_named_after_the_model() {
        assert_eq!(default_output(ModelKind::Seir), PathBuf::from("SEIR_model.png"));
    }

    #[test]
    fn writes_the_requested_output() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("run.csv");
        let cli = Cli::try_parse_from([
            "epi-models",
            "sis",
            "-p",
            "100",
            "-d",
            "3",
            "-i",
            "1",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        run(cli).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 5); // header + days 0..=3
        assert!(text.starts_with("day,S,I\n0,99,1\n"));
    }

    #[test]
    fn unknown_model_fails_before_writing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("run.csv");
        let cli = Cli::try_parse_from(["epi-models", "XYZ", "-o", output.to_str().unwrap()])
            .unwrap();

        let err = run(cli).unwrap_err();

        assert!(err.to_string().contains("unknown model `XYZ`"));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_parameters_name_the_offender() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("run.csv");
        let cli = Cli::try_parse_from([
            "epi-models",
            "SIR",
            "--beta",
            "-0.1",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(cli).unwrap_err();

        assert!(format!("{err:#}").contains("beta must be finite and non-negative"));
        assert!(!output.exists());
    }

    #[test]
    fn writes_a_plot_image() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("SIR_model.png");
        let cli = Cli::try_parse_from([
            "epi-models",
            "SIR",
            "-p",
            "1000",
            "-d",
            "30",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        run(cli).unwrap();

        assert!(std::fs::read(&output).unwrap().starts_with(b"\x89PNG"));
    }

    #[cfg(not(feature = "plot"))]
    #[test]
    fn show_without_plot_feature_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("run.csv");
        let cli = Cli::try_parse_from([
            "epi-models",
            "SIR",
            "--show",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(cli).unwrap_err();

        assert!(err.to_string().contains("--show requires the `plot` feature"));
        assert!(!output.exists());
    }
}
