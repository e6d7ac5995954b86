use crate::domain::SeverityLevel;
use crate::error::{ReleaseError, Result};
use std::fmt;

/// Release version, rendered as `vMAJOR.MINOR.PATCH`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Bump the version for a release of the given severity.
    ///
    /// `SeverityLevel::None` leaves the version untouched. Fails when the
    /// bumped component would overflow.
    pub fn bump(&self, severity: SeverityLevel) -> Result<Self> {
        let overflow = || ReleaseError::version(format!("Cannot bump {} any further", self));
        let next = match severity {
            SeverityLevel::None => *self,
            SeverityLevel::Patch => Version {
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
                ..*self
            },
            SeverityLevel::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            SeverityLevel::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
        };
        Ok(next)
    }
}

impl From<&semver::Version> for Version {
    fn from(v: &semver::Version) -> Self {
        Version::new(v.major, v.minor, v.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_from_semver_drops_prerelease() {
        let parsed = semver::Version::parse("2.0.0-rc.1+build.5").unwrap();
        assert_eq!(Version::from(&parsed), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(SeverityLevel::Major).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(SeverityLevel::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(SeverityLevel::Patch).unwrap(), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_none() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(SeverityLevel::None).unwrap(), v);
    }

    #[test]
    fn test_version_bump_overflow_is_an_error() {
        let err = Version::new(0, 0, u64::MAX)
            .bump(SeverityLevel::Patch)
            .unwrap_err();
        assert!(matches!(err, ReleaseError::Version(_)));

        assert!(Version::new(0, u64::MAX, 7).bump(SeverityLevel::Minor).is_err());
        assert!(Version::new(u64::MAX, 0, 0).bump(SeverityLevel::Major).is_err());
        assert_eq!(
            Version::new(0, u64::MAX, u64::MAX)
                .bump(SeverityLevel::Major)
                .unwrap(),
            Version::new(1, 0, 0)
        );
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "v1.2.3");
        assert_eq!(Version::default().to_string(), "v0.0.0");
    }
}
