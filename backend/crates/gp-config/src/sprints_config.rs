use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// What `PUT`/`DELETE /sprint/{id}` do when no row has that id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRowPolicy {
    /// Report success anyway: update echoes the body, delete says "success".
    #[default]
    Ignore,
    /// Report "Sprint not found" (404).
    NotFound,
}

impl MissingRowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for MissingRowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingRowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "not_found" => Ok(Self::NotFound),
            other => Err(format!("unknown missing_row policy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SprintsConfig {
    pub missing_row: MissingRowPolicy,
}
