use regex::Regex;
use std::sync::LazyLock;

static HEADER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([^(:!\n]+)(?:\(([^)\n]+)\))?(!)?: ([^\n]+)$").ok());

// a non-empty line, a blank line or more, then further content
static MULTI_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r".+\n{2,}.+").ok());

const BREAKING_FOOTER: &str = "breaking change:";

/// A commit message as handed over by the git log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    /// Full commit id
    pub id: String,
    pub message: String,
}

impl RawCommit {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        RawCommit {
            id: id.into(),
            message: message.into(),
        }
    }

    /// First line of the message, used when reporting skipped commits
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Parsed representation of a conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredCommit {
    pub r#type: String,
    pub scope: Option<String>,
    pub description: String,
    pub body: Option<String>,
    pub breaking: bool,
}

impl StructuredCommit {
    /// Parse a commit message in the `type(scope)!: description` form.
    ///
    /// Returns `None` for messages that do not follow the convention. When the
    /// header is followed by a blank line, every later line starting with
    /// `BREAKING CHANGE:` (any case) marks the commit as breaking and the
    /// remaining lines become the body.
    pub fn parse(message: &str) -> Option<Self> {
        let multi_line = MULTI_LINE
            .as_ref()
            .is_some_and(|re| re.is_match(message));

        if multi_line {
            let mut lines = message.split('\n');
            let header = lines.next().unwrap_or_default();
            let mut commit = Self::parse_header(header)?;
            let rest: Vec<&str> = lines.collect();

            if rest
                .iter()
                .any(|line| line.to_lowercase().starts_with(BREAKING_FOOTER))
            {
                commit.breaking = true;
            }
            commit.body = Some(rest.join("\n"));
            return Some(commit);
        }

        Self::parse_header(message)
    }

    fn parse_header(line: &str) -> Option<Self> {
        let captures = HEADER.as_ref()?.captures(line)?;

        let r#type = captures.get(1)?.as_str().to_string();
        let scope = captures.get(2).map(|m| m.as_str().to_string());
        let breaking = captures.get(3).is_some();
        let description = captures.get(4)?.as_str().to_string();

        Some(StructuredCommit {
            r#type,
            scope,
            description,
            body: None,
            breaking,
        })
    }
}
