//! Validated release configuration built from the `key=value` settings.

use crate::domain::{SeverityLevel, StructuredCommit};
use crate::eql::{self, ConfigMapping};
use crate::error::{ReleaseError, Result};

/// Rule name reserved for breaking commits
pub const BANG_RULE: &str = "bang";

/// Category key collecting commits no other category claims
pub const WILDCARD_CATEGORY: &str = "*";

/// Commit-type to severity rules, e.g. `fix=patch feat=minor bang=major`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    rules: Vec<(String, SeverityLevel)>,
    bang: Option<SeverityLevel>,
}

impl RuleSet {
    /// Validate every rule value before any commit is looked at
    pub fn from_mapping(mapping: &ConfigMapping) -> Result<Self> {
        let mut rules = Vec::with_capacity(mapping.len());
        let mut bang = None;

        for (name, value) in mapping.iter() {
            let severity = value
                .parse::<SeverityLevel>()
                .map_err(|_| ReleaseError::invalid_severity(name, value))?;
            if name == BANG_RULE {
                bang = Some(severity);
            } else {
                rules.push((name.to_string(), severity));
            }
        }

        Ok(RuleSet { rules, bang })
    }

    pub fn parse(input: &str) -> Result<Self> {
        Self::from_mapping(&eql::parse(input)?)
    }

    /// Severity applied to breaking commits, if a `bang` rule exists
    pub fn bang(&self) -> Option<SeverityLevel> {
        self.bang
    }

    /// Rule names configured with exactly `severity`
    pub fn names_for(&self, severity: SeverityLevel) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(move |(_, s)| *s == severity)
            .map(|(name, _)| name.as_str())
    }

    /// Rules other than `bang`, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, SeverityLevel)> {
        self.rules.iter().map(|(name, s)| (name.as_str(), *s))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.bang.is_none()
    }
}

/// Release-note sections, e.g. `feat="New Features" *="Other Changes"`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySet {
    categories: Vec<(String, String)>,
    wildcard: Option<String>,
}

impl CategorySet {
    pub fn from_mapping(mapping: &ConfigMapping) -> Self {
        let mut categories = Vec::with_capacity(mapping.len());
        let mut wildcard = None;

        for (key, title) in mapping.iter() {
            if key == WILDCARD_CATEGORY {
                wildcard = Some(title.to_string());
            } else {
                categories.push((key.to_string(), title.to_string()));
            }
        }

        CategorySet {
            categories,
            wildcard,
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self::from_mapping(&eql::parse(input)?))
    }

    /// Explicit categories as `(key, title)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .map(|(key, title)| (key.as_str(), title.as_str()))
    }

    /// Index of the first category whose key equals `commit_type`, ignoring case
    pub fn position(&self, commit_type: &str) -> Option<usize> {
        let commit_type = commit_type.to_lowercase();
        self.categories
            .iter()
            .position(|(key, _)| key.to_lowercase() == commit_type)
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(|(_, title)| title.as_str())
    }

    pub fn wildcard(&self) -> Option<&str> {
        self.wildcard.as_deref()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.wildcard.is_none()
    }
}

/// Commit types dropped before any processing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IgnoreList {
    types: Vec<String>,
}

impl IgnoreList {
    /// Split a space-separated list such as `chore ci docs`
    pub fn parse(input: &str) -> Self {
        IgnoreList {
            types: input.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn matches(&self, commit: &StructuredCommit) -> bool {
        let commit_type = commit.r#type.to_lowercase();
        self.types.iter().any(|t| *t == commit_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Everything the release pipeline needs to know about the user's settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseRules {
    pub rules: RuleSet,
    pub categories: CategorySet,
    pub ignore: IgnoreList,
}

impl ReleaseRules {
    /// Parse the three raw settings strings.
    ///
    /// Fails on the first syntax error or invalid severity word.
    pub fn parse(rules: &str, categories: &str, ignore: &str) -> Result<Self> {
        Ok(ReleaseRules {
            rules: RuleSet::parse(rules)?,
            categories: CategorySet::parse(categories)?,
            ignore: IgnoreList::parse(ignore),
        })
    }
}
