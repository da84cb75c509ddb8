//! Source repository resolution from registry metadata
//!
//! npm packuments describe their repository either as a bare string or as an
//! object with a `url` member (`{"type": "git", "url": "git+https://..."}`).
//! Both are reduced to a canonical GitHub `owner/repo` reference.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Matches a GitHub host followed by `/` or `:` and an `owner/repo` pair
static GITHUB_REPO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)github\.com[/:]([^/]+)/([^/]+)").expect("valid repository pattern")
});

/// Raw `repository` field as it appears in registry metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    /// `"repository": "git+https://github.com/foo/bar.git"`
    Url(String),
    /// `"repository": {"type": "git", "url": "..."}`
    Object {
        #[serde(default)]
        url: Option<String>,
    },
}

impl RepositoryField {
    /// Interpret an arbitrary JSON value; unexpected shapes yield `None`
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }

    /// The underlying URL string, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            RepositoryField::Url(url) => Some(url.as_str()),
            RepositoryField::Object { url } => url.as_deref(),
        }
    }
}

/// Canonical `owner/repo` reference on GitHub
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    /// Creates a new RepositoryRef
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Resolve a repository field to an `owner/repo` reference.
    ///
    /// The URL is normalized first: a leading `git+` and a trailing `.git`
    /// are dropped and a `git://` scheme becomes `https://`. Anything after
    /// the repository segment is discarded. Hosts other than GitHub yield
    /// `None`.
    pub fn locate(field: Option<&RepositoryField>) -> Option<Self> {
        let url = field?.url()?;
        if url.is_empty() {
            return None;
        }

        let normalized = normalize_url(url);
        let caps = GITHUB_REPO.captures(&normalized)?;
        Some(Self::new(&caps[1], &caps[2]))
    }

    /// Repository owner (user or organization)
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn normalize_url(url: &str) -> String {
    let url = url.strip_prefix("git+").unwrap_or(url);
    let url = url.strip_suffix(".git").unwrap_or(url);
    match url.strip_prefix("git://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
