use std::fmt;
use std::str::FromStr;

use crate::error::ReleaseError;

/// How far a release moves the version, ordered `None < Patch < Minor < Major`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityLevel {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl SeverityLevel {
    /// Severities a rule may be configured with, highest first
    pub const BUMPS: [SeverityLevel; 3] = [
        SeverityLevel::Major,
        SeverityLevel::Minor,
        SeverityLevel::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::None => "none",
            SeverityLevel::Patch => "patch",
            SeverityLevel::Minor => "minor",
            SeverityLevel::Major => "major",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the rule words `patch`, `minor` and `major`, ignoring case and
/// surrounding whitespace. `none` is not a valid rule word.
impl FromStr for SeverityLevel {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "patch" => Ok(SeverityLevel::Patch),
            "minor" => Ok(SeverityLevel::Minor),
            "major" => Ok(SeverityLevel::Major),
            _ => Err(ReleaseError::invalid_severity("", s)),
        }
    }
}
