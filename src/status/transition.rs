//! Decides the issue transition and record merge for one build outcome.

use crate::ports::issues::IssueState;

use super::record::{Snapshot, StatusRecord};

/// How one persisted snapshot field changes in the new record.
///
/// `CarryForward` copies the prior record's value at merge time, so the
/// planner never needs a sentinel snapshot instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Overwrite the field with this value.
    Set(Option<Snapshot>),
    /// Keep the prior record's value; `None` when there is no prior record.
    CarryForward,
}

impl FieldUpdate {
    /// Resolves this update against the prior record's field value.
    #[must_use]
    pub fn resolve(self, prior: Option<Snapshot>) -> Option<Snapshot> {
        match self {
            Self::Set(value) => value,
            Self::CarryForward => prior,
        }
    }
}

/// State change to apply to the issue, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueAction {
    /// Leave the issue state alone.
    None,
    /// Close the issue.
    Close,
    /// Reopen the issue.
    Reopen,
}

/// Which comment to post on the issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// A success closed an open issue.
    Fixed,
    /// A failure hit an already-open issue.
    StillFailing,
    /// A failure reopened a closed issue.
    FailedReopened,
}

impl CommentKind {
    /// Renders the comment body, linking to the CI run that triggered it.
    #[must_use]
    pub fn render(self, repository: &str, run_id: Option<u64>) -> String {
        let link = match run_id {
            Some(id) => format!("https://github.com/{repository}/actions/runs/{id}"),
            None => format!("https://github.com/{repository}/actions"),
        };
        let lead = match self {
            Self::Fixed => "Build fixed:",
            Self::StillFailing => "The build is still failing:",
            Self::FailedReopened => "Unfortunately, the build failed:",
        };
        format!("{lead}\n* Link to latest CI run: {link}")
    }
}

/// The full decision for one build outcome against one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    /// State change to apply.
    pub issue_action: IssueAction,
    /// Comment to post, if any.
    pub comment: Option<CommentKind>,
    /// Update for the failure-streak start.
    pub first_failure: FieldUpdate,
    /// Update for the most recent failure.
    pub last_failure: FieldUpdate,
    /// Update for the most recent success.
    pub last_success: FieldUpdate,
}

/// Plans the issue transition for one build outcome.
///
/// A success always records itself as `last_success` and clears the failure
/// streak; it closes the issue (with a comment) only when the issue is
/// open. A failure records itself as `last_failure`; against a closed issue
/// it reopens it and starts a fresh streak, against an open issue it keeps
/// the existing streak start, falling back to the new snapshot for prior
/// records written before streak tracking existed.
#[must_use]
pub fn plan_transition(
    succeeded: bool,
    issue_state: IssueState,
    prior: Option<&StatusRecord>,
    snapshot: &Snapshot,
) -> TransitionPlan {
    if succeeded {
        let (issue_action, comment) = match issue_state {
            IssueState::Open => (IssueAction::Close, Some(CommentKind::Fixed)),
            IssueState::Closed => (IssueAction::None, None),
        };
        return TransitionPlan {
            issue_action,
            comment,
            first_failure: FieldUpdate::Set(None),
            last_failure: FieldUpdate::CarryForward,
            last_success: FieldUpdate::Set(Some(snapshot.clone())),
        };
    }

    match issue_state {
        IssueState::Open => TransitionPlan {
            issue_action: IssueAction::None,
            comment: Some(CommentKind::StillFailing),
            first_failure: if prior.is_some_and(|p| p.first_failure.is_some()) {
                FieldUpdate::CarryForward
            } else {
                FieldUpdate::Set(Some(snapshot.clone()))
            },
            last_failure: FieldUpdate::Set(Some(snapshot.clone())),
            last_success: FieldUpdate::CarryForward,
        },
        IssueState::Closed => TransitionPlan {
            issue_action: IssueAction::Reopen,
            comment: Some(CommentKind::FailedReopened),
            first_failure: FieldUpdate::Set(Some(snapshot.clone())),
            last_failure: FieldUpdate::Set(Some(snapshot.clone())),
            last_success: FieldUpdate::CarryForward,
        },
    }
}
