use std::path::PathBuf;

use clap::Parser;

/// Solve SIR, SEIR, and SIS epidemic models.
#[derive(Debug, Parser)]
#[command(
    name = "epi-models",
    version,
    about = "Tool for solving epidemiology models"
)]
pub struct Cli {
    /// Model to simulate: SIR, SEIR, or SIS.
    pub model: String,

    /// YAML file with model parameters. Flags override values from the file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub parameters: ParameterArgs,

    /// File to save to: a .png or .svg plot, or .csv or .json data [default: <MODEL>_model.png].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Open an interactive plot of the trajectory (requires the `plot` feature).
    #[arg(long)]
    pub show: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Model parameter flags.
///
/// Every flag is optional: unset flags fall back to the config file, then to
/// built-in defaults.
#[derive(Debug, Default, clap::Args)]
pub struct ParameterArgs {
    /// Total population size [default: 10000000].
    #[arg(short, long = "pop-size", visible_alias = "pop_size", allow_negative_numbers = true)]
    pub pop_size: Option<i64>,

    /// Average no. of new infections per infected person per day [default: 0.5].
    #[arg(short, long, allow_negative_numbers = true)]
    pub beta: Option<f64>,

    /// Inverse of average number of days taken to recover [default: 0.1].
    #[arg(short, long, allow_negative_numbers = true)]
    pub gamma: Option<f64>,

    /// Inverse of average number of days spent exposed, SEIR only [default: 0.2].
    #[arg(short, long, allow_negative_numbers = true)]
    pub sigma: Option<f64>,

    /// Number of days to run the simulation [default: 150].
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Number of infected people at the start of the simulation [default: 10].
    #[arg(short, long, allow_negative_numbers = true)]
    pub i0: Option<i64>,

    /// Number of exposed people at the start of the simulation, SEIR only [default: 0].
    #[arg(short, long, allow_negative_numbers = true)]
    pub e0: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_model_and_flags() {
        let cli = Cli::try_parse_from([
            "epi-models", "SEIR", "-p", "1000", "-b", "0.3", "--gamma", "0.05", "-s", "0.25",
            "-d", "30", "-i", "4", "-e", "6", "-o", "out.json", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.model, "SEIR");
        assert_eq!(cli.parameters.pop_size, Some(1000));
        assert_eq!(cli.parameters.beta, Some(0.3));
        assert_eq!(cli.parameters.gamma, Some(0.05));
        assert_eq!(cli.parameters.sigma, Some(0.25));
        assert_eq!(cli.parameters.days, Some(30));
        assert_eq!(cli.parameters.i0, Some(4));
        assert_eq!(cli.parameters.e0, Some(6));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.show);
    }

    #[test]
    fn unset_flags_stay_unset() {
        let cli = Cli::try_parse_from(["epi-models", "SIR"]).unwrap();

        assert_eq!(cli.parameters.beta, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["epi-models", "SIR", "--beta", "-0.1", "-d", "-3"]).unwrap();

        assert_eq!(cli.parameters.beta, Some(-0.1));
        assert_eq!(cli.parameters.days, Some(-3));
    }

    #[test]
    fn accepts_the_underscore_spelling() {
        let cli = Cli::try_parse_from(["epi-models", "SIS", "--pop_size", "500"]).unwrap();

        assert_eq!(cli.parameters.pop_size, Some(500));
    }

    #[test]
    fn model_is_required() {
        assert!(Cli::try_parse_from(["epi-models"]).is_err());
    }
}
