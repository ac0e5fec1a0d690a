use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use epi_models::Parameters;

use crate::cli::ParameterArgs;

const DEFAULT_POPULATION: i64 = 10_000_000;
const DEFAULT_BETA: f64 = 0.5;
const DEFAULT_GAMMA: f64 = 0.1;
const DEFAULT_SIGMA: f64 = 0.2;
const DEFAULT_DAYS: i64 = 150;
const DEFAULT_INFECTED: i64 = 10;
const DEFAULT_EXPOSED: i64 = 0;

/// Parameters read from a YAML file.
///
/// Keys match [`Parameters`] field names. Any key may be omitted.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterFile {
    pub population_size: Option<i64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
    pub sigma: Option<f64>,
    pub days: Option<i64>,
    pub initial_infected: Option<i64>,
    pub initial_exposed: Option<i64>,
}

/// A parameter file that could not be read or parsed.
#[derive(Debug, Error)]
pub enum InputFormatError {
    #[error("failed to read parameter file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed parameter file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Loads a YAML parameter file.
///
/// An empty file yields a [`ParameterFile`] with every key unset.
///
/// # Errors
///
/// Returns [`InputFormatError`] if the file cannot be read, is not valid YAML,
/// has a value of the wrong type, or has an unknown key.
pub fn load(path: &Path) -> Result<ParameterFile, InputFormatError> {
    let text = fs::read_to_string(path).map_err(|source| InputFormatError::Read {
        path: path.to_owned(),
        source,
    })?;

    if text.trim().is_empty() {
        return Ok(ParameterFile::default());
    }

    serde_yaml::from_str(&text).map_err(|source| InputFormatError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Merges flags over file values over defaults.
pub fn resolve(args: &ParameterArgs, file: &ParameterFile) -> Parameters {
    Parameters {
        population_size: args
            .pop_size
            .or(file.population_size)
            .unwrap_or(DEFAULT_POPULATION),
        beta: args.beta.or(file.beta).unwrap_or(DEFAULT_BETA),
        gamma: args.gamma.or(file.gamma).unwrap_or(DEFAULT_GAMMA),
        sigma: Some(args.sigma.or(file.sigma).unwrap_or(DEFAULT_SIGMA)),
        days: args.days.or(file.days).unwrap_or(DEFAULT_DAYS),
        initial_infected: args
            .i0
            .or(file.initial_infected)
            .unwrap_or(DEFAULT_INFECTED),
        initial_exposed: args
            .e0
            .or(file.initial_exposed)
            .unwrap_or(DEFAULT_EXPOSED),
    }
}
