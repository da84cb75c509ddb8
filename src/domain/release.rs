//! Release notes and the evidence gathered from them

use super::risk::matched_keywords;
use serde::{Deserialize, Serialize};

/// Maximum number of characters of release text kept for scoring
pub const MAX_RELEASE_TEXT_CHARS: usize = 12_000;

/// Clue used when the package has no GitHub repository
pub const NO_REPOSITORY_CLUE: &str = "No GitHub repo found";

/// Clue used when releases were read but no keyword matched
pub const NO_KEYWORDS_CLUE: &str = "No risky keywords in latest releases";

/// Clue used when the release listing could not be fetched
pub const FETCH_FAILED_CLUE: &str = "Could not load releases (rate limit or private repo)";

/// One entry of a repository's release listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEntry {
    /// Release title
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes body (markdown)
    #[serde(default)]
    pub body: Option<String>,
}

impl ReleaseEntry {
    /// Creates a new ReleaseEntry
    pub fn new(name: Option<&str>, body: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            body: body.map(str::to_string),
        }
    }
}

/// Textual evidence gathered from recent releases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEvidence {
    /// Human-readable flags, e.g. `mentions "breaking"`
    pub clues: Vec<String>,
    /// Concatenated release text used for scoring
    pub text: String,
}

impl ReleaseEvidence {
    /// Build evidence from release entries.
    ///
    /// Each entry contributes `name\nbody` (missing parts are empty) and
    /// entries are joined with `\n`. The result is capped at
    /// [`MAX_RELEASE_TEXT_CHARS`] characters.
    pub fn from_releases(releases: &[ReleaseEntry]) -> Self {
        let joined = releases
            .iter()
            .map(|r| {
                format!(
                    "{}\n{}",
                    r.name.as_deref().unwrap_or_default(),
                    r.body.as_deref().unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let text: String = joined.chars().take(MAX_RELEASE_TEXT_CHARS).collect();

        let mut clues: Vec<String> = matched_keywords(&text)
            .into_iter()
            .map(|k| format!("mentions \"{}\"", k))
            .collect();
        if clues.is_empty() {
            clues.push(NO_KEYWORDS_CLUE.to_string());
        }

        Self { clues, text }
    }

    /// Evidence for a package without a resolvable repository
    pub fn no_repository() -> Self {
        Self::placeholder(NO_REPOSITORY_CLUE)
    }

    /// Evidence for a package whose release listing failed to load
    pub fn fetch_failed() -> Self {
        Self::placeholder(FETCH_FAILED_CLUE)
    }

    fn placeholder(clue: &str) -> Self {
        Self {
            clues: vec![clue.to_string()],
            text: String::new(),
        }
    }

    /// First three clues joined with `"; "`
    pub fn summary(&self) -> String {
        self.clues
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
