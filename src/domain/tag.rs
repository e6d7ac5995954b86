/// A release tag whose name parses as `v`-prefixed semver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub name: String,
    pub version: semver::Version,
}

impl VersionTag {
    /// Returns `None` for tags that are not `vX.Y.Z[-pre][+build]`
    pub fn parse(name: &str) -> Option<Self> {
        let version = semver::Version::parse(name.strip_prefix('v')?).ok()?;
        Some(VersionTag {
            name: name.to_string(),
            version,
        })
    }
}

/// Pick the tag with the highest semver precedence, ignoring non-version tags
pub fn latest_version_tag<I, S>(tags: I) -> Option<VersionTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|name| VersionTag::parse(name.as_ref()))
        .max_by(|a, b| a.version.cmp_precedence(&b.version))
}
