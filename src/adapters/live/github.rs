//! Live adapter for the `IssueTracker` port using the GitHub REST API.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::ports::issues::{IssueState, IssueTracker, PostedComment, TrackedIssue};

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Live issue tracker backed by the GitHub REST API.
pub struct GitHubIssueTracker {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubIssueTracker {
    /// Creates a tracker using the given API token.
    ///
    /// A missing token only becomes an error when a call is made, so the
    /// cancelled short-circuit never requires one.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self { client: Client::new(), token, base_url: GITHUB_API_URL.to_string() }
    }

    /// Creates a tracker pointed at a non-default API host, e.g. a GitHub
    /// Enterprise instance.
    #[must_use]
    pub fn with_base_url(token: Option<String>, base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), token, base_url: base_url.into() }
    }

    fn authorized(
        &self,
        builder: RequestBuilder,
    ) -> Result<RequestBuilder, Box<dyn std::error::Error + Send + Sync>> {
        let token = self.token.as_deref().ok_or("GITHUB_TOKEN environment variable not set")?;
        Ok(builder
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header("User-Agent", "report-status"))
    }

    fn issue_url(&self, repository: &str, number: u64) -> String {
        format!("{}/repos/{repository}/issues/{number}", self.base_url)
    }
}

/// An issue as returned by the GitHub API.
#[derive(Deserialize)]
struct IssuePayload {
    number: u64,
    title: String,
    html_url: String,
    state: String,
    body: Option<String>,
}

/// A comment as returned by the GitHub API.
#[derive(Deserialize)]
struct CommentPayload {
    html_url: String,
}

/// Body for a comment creation request.
#[derive(Serialize)]
struct NewComment<'a> {
    body: &'a str,
}

/// Body for an issue state change.
#[derive(Serialize)]
struct StateChange<'a> {
    state: &'a str,
}

/// Body for an issue body rewrite.
#[derive(Serialize)]
struct BodyChange<'a> {
    body: &'a str,
}

/// Error response from the GitHub API.
#[derive(Deserialize)]
struct ApiError {
    message: String,
}

fn check_status(
    status: StatusCode,
    response_text: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if status.is_success() {
        return Ok(());
    }
    let msg = serde_json::from_str::<ApiError>(response_text)
        .map_or_else(|_| response_text.to_string(), |e| e.message);
    Err(format!("GitHub API error ({}): {msg}", status.as_u16()).into())
}

impl From<IssuePayload> for TrackedIssue {
    fn from(payload: IssuePayload) -> Self {
        let state =
            if payload.state == "open" { IssueState::Open } else { IssueState::Closed };
        Self {
            number: payload.number,
            title: payload.title,
            html_url: payload.html_url,
            state,
            body: payload.body,
        }
    }
}

impl IssueTracker for GitHubIssueTracker {
    fn get_issue(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<Option<TrackedIssue>, Box<dyn std::error::Error + Send + Sync>> {
        let request = self.authorized(self.client.get(self.issue_url(repository, number)))?;
        let response = request
            .send()
            .map_err(|e| format!("GitHub API request failed: {e}"))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response_text =
            response.text().map_err(|e| format!("Failed to read GitHub API response: {e}"))?;
        check_status(status, &response_text)?;

        let payload: IssuePayload = serde_json::from_str(&response_text)
            .map_err(|e| format!("Failed to parse GitHub API response: {e}"))?;
        Ok(Some(payload.into()))
    }

    fn add_comment(
        &self,
        repository: &str,
        number: u64,
        text: &str,
    ) -> Result<PostedComment, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/comments", self.issue_url(repository, number));
        let request = self.authorized(self.client.post(url))?.json(&NewComment { body: text });
        let response = request
            .send()
            .map_err(|e| format!("GitHub API request failed: {e}"))?;

        let status = response.status();
        let response_text =
            response.text().map_err(|e| format!("Failed to read GitHub API response: {e}"))?;
        check_status(status, &response_text)?;

        let payload: CommentPayload = serde_json::from_str(&response_text)
            .map_err(|e| format!("Failed to parse GitHub API response: {e}"))?;
        Ok(PostedComment { html_url: payload.html_url })
    }

    fn close_issue(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.patch_issue(repository, number, &StateChange { state: "closed" })
    }

    fn reopen_issue(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.patch_issue(repository, number, &StateChange { state: "open" })
    }

    fn set_body(
        &self,
        repository: &str,
        number: u64,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.patch_issue(repository, number, &BodyChange { body })
    }
}

impl GitHubIssueTracker {
    fn patch_issue<T: Serialize>(
        &self,
        repository: &str,
        number: u64,
        change: &T,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let request =
            self.authorized(self.client.patch(self.issue_url(repository, number)))?.json(change);
        let response = request
            .send()
            .map_err(|e| format!("GitHub API request failed: {e}"))?;

        let status = response.status();
        let response_text =
            response.text().map_err(|e| format!("Failed to read GitHub API response: {e}"))?;
        check_status(status, &response_text)
    }
}
