//! Issue tracker port for reading and mutating the tracking issue.

use std::fmt;

/// Whether an issue is open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    /// The issue is open.
    Open,
    /// The issue is closed.
    Closed,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// A tracking issue as fetched from the tracker.
#[derive(Debug, Clone)]
pub struct TrackedIssue {
    /// The issue number within its repository.
    pub number: u64,
    /// The issue title.
    pub title: String,
    /// Link to the issue.
    pub html_url: String,
    /// Current open/closed state.
    pub state: IssueState,
    /// The issue body, if any.
    pub body: Option<String>,
}

/// A comment created on an issue.
#[derive(Debug, Clone)]
pub struct PostedComment {
    /// Link to the comment.
    pub html_url: String,
}

/// Read/write access to issues in an external tracker.
///
/// Abstracting the tracker allows the reporting logic to be exercised in
/// tests without touching a real API.
pub trait IssueTracker: Send + Sync {
    /// Fetches an issue by repository and number.
    ///
    /// Returns `Ok(None)` when the issue does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker cannot be reached or rejects the
    /// request.
    fn get_issue(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<Option<TrackedIssue>, Box<dyn std::error::Error + Send + Sync>>;

    /// Posts a comment on an issue.
    ///
    /// # Errors
    ///
    /// Returns an error if the comment cannot be created.
    fn add_comment(
        &self,
        repository: &str,
        number: u64,
        text: &str,
    ) -> Result<PostedComment, Box<dyn std::error::Error + Send + Sync>>;

    /// Closes an issue.
    ///
    /// # Errors
    ///
    /// Returns an error if the state change is rejected.
    fn close_issue(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Reopens a closed issue.
    ///
    /// # Errors
    ///
    /// Returns an error if the state change is rejected.
    fn reopen_issue(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Replaces the body text of an issue.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be updated.
    fn set_body(
        &self,
        repository: &str,
        number: u64,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
