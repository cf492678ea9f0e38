use serde::{Deserialize, Serialize};

/// Gathering professions, one per raw spreadsheet export.
///
/// The serialized form (`"miner"`, `"botanist"`) is the `job` field of the
/// items store and the UI string key for the profession's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profession {
    Miner,
    Botanist,
}

/// All professions in import order.
const ALL_PROFESSIONS: &[Profession] = &[Profession::Miner, Profession::Botanist];

impl Profession {
    /// Short name used for the `job` field, CLI flags, and UI keys.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Miner => "miner",
            Self::Botanist => "botanist",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Miner => "Miner",
            Self::Botanist => "Botanist",
        }
    }

    /// File name of the raw export this profession is usually read from.
    pub fn default_source(&self) -> &'static str {
        match self {
            Self::Miner => "Mining and Quarrying.csv",
            Self::Botanist => "Logging and Harvesting.csv",
        }
    }

    pub fn all() -> &'static [Profession] {
        ALL_PROFESSIONS
    }
}

impl std::fmt::Display for Profession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Profession`.
#[derive(Debug, Clone)]
pub struct ProfessionParseError(pub String);

impl std::fmt::Display for ProfessionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown profession: '{}'", self.0)
    }
}

impl std::error::Error for ProfessionParseError {}

impl std::str::FromStr for Profession {
    type Err = ProfessionParseError;

    /// Parse a profession from its short name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PROFESSIONS
            .iter()
            .copied()
            .find(|p| p.short_name() == lower)
            .ok_or_else(|| ProfessionParseError(s.to_string()))
    }
}
