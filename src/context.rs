//! Service context bundling all port trait objects.

use crate::ports::clock::Clock;
use crate::ports::issues::IssueTracker;
use crate::ports::notices::Notices;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Command handlers
/// take the context by reference so tests can substitute fakes.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Issue tracker holding the tracking issue.
    pub issues: Box<dyn IssueTracker>,
    /// Notice sink for run annotations.
    pub notices: Box<dyn Notices>,
}

impl ServiceContext {
    /// Creates a live context: system clock, GitHub REST tracker and
    /// workflow-command notices.
    #[must_use]
    pub fn live(token: Option<String>) -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::github::GitHubIssueTracker;
        use crate::adapters::live::notices::WorkflowCommandNotices;

        Self {
            clock: Box::new(LiveClock),
            issues: Box::new(GitHubIssueTracker::new(token)),
            notices: Box::new(WorkflowCommandNotices),
        }
    }
}
