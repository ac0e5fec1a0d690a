use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Selects which compartmental model to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelKind {
    Sir,
    Seir,
    Sis,
}

/// A named sub-population tracked by a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compartment {
    Susceptible,
    Exposed,
    Infected,
    Recovered,
}

impl ModelKind {
    /// All supported models.
    pub const ALL: [Self; 3] = [Self::Sir, Self::Seir, Self::Sis];

    /// Returns the compartments this model reports, in display order.
    ///
    /// SIS reports no recovered compartment: recovered people rejoin the
    /// susceptible pool within the same step.
    #[must_use]
    pub fn compartments(self) -> &'static [Compartment] {
        use Compartment::{Exposed, Infected, Recovered, Susceptible};

        match self {
            Self::Sir => &[Susceptible, Infected, Recovered],
            Self::Seir => &[Susceptible, Exposed, Infected, Recovered],
            Self::Sis => &[Susceptible, Infected],
        }
    }

    /// Returns the canonical upper-case name, e.g. `"SEIR"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sir => "SIR",
            Self::Seir => "SEIR",
            Self::Sis => "SIS",
        }
    }

    /// Returns `true` if the model tracks the given compartment.
    #[must_use]
    pub fn has(self, compartment: Compartment) -> bool {
        self.compartments().contains(&compartment)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    /// Parses a model name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownModel(s.to_owned()))
    }
}

impl Compartment {
    /// Single-letter label used for series names and column headers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Susceptible => "S",
            Self::Exposed => "E",
            Self::Infected => "I",
            Self::Recovered => "R",
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Susceptible => "susceptible",
            Self::Exposed => "exposed",
            Self::Infected => "infected",
            Self::Recovered => "recovered",
        };
        f.write_str(name)
    }
}
