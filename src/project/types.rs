//! Project records returned by the bridge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project owned by the caller.
///
/// ```rust
/// use bridge_sdk::project::{Project, Provider};
///
/// let project: Project = serde_json::from_value(serde_json::json!({
///     "_id": "6650f0c2",
///     "createdAt": "2024-05-24T10:00:00.000Z",
///     "name": "billing",
///     "owner": "user_1",
///     "serverUrl": "https://billing.example.com",
///     "provider": "github",
///     "subscribedLanguages": ["typescript"],
///     "lastCompilationSuccess": true,
///     "pendingCompilation": false
/// })).unwrap();
/// assert_eq!(project.provider, Provider::Github);
/// assert!(project.github_repo.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Display name.
    pub name: String,
    /// Id of the owning user.
    pub owner: String,
    /// URL of the project's server.
    pub server_url: String,
    /// Where the project source comes from.
    pub provider: Provider,
    /// Languages SDKs are generated for.
    pub subscribed_languages: Vec<Language>,
    /// Whether the last compilation succeeded.
    pub last_compilation_success: bool,
    /// Whether a compilation is queued or running.
    pub pending_compilation: bool,
    /// Linked GitHub repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<GithubRepo>,
}

impl Project {
    /// Returns `true` if the project is subscribed to `language`.
    pub fn is_subscribed_to(&self, language: Language) -> bool {
        self.subscribed_languages.contains(&language)
    }
}

/// Source provider of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Hosted on GitHub.
    Github,
    /// Hosted on GitLab.
    Gitlab,
    /// Pushed from the command line.
    Cli,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Provider::Github => "github",
            Provider::Gitlab => "gitlab",
            Provider::Cli => "cli",
        })
    }
}

/// Target language of a generated SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python.
    Python,
    /// JavaScript.
    Javascript,
    /// TypeScript.
    Typescript,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
        })
    }
}

/// GitHub repository linked to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubRepo {
    /// GitHub repository id.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Owner login.
    pub owner: String,
    /// `owner/name`.
    pub full_name: String,
    /// Repository visibility.
    pub visibility: Visibility,
    /// Time the link was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Visibility of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Private repository.
    Private,
    /// Public repository.
    Public,
}

/// One page of a skip/limit listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Number of items skipped before this page.
    pub skip: u64,
    /// Requested page size.
    pub limit: u64,
}

impl<T> Paginated<T> {
    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this page is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if items remain after this page.
    pub fn has_next(&self) -> bool {
        self.next_skip().is_some()
    }

    /// Returns the `skip` value for the next page, if there is one.
    ///
    /// A `skip` so large that it overflows past this page means there is
    /// no next page.
    pub fn next_skip(&self) -> Option<u64> {
        u64::try_from(self.data.len())
            .ok()
            .and_then(|len| self.skip.checked_add(len))
            .filter(|&end| end < self.total)
    }

    /// Returns an iterator over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
