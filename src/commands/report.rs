//! `report-status report` command.

use crate::cli::ReportArgs;
use crate::context::ServiceContext;
use crate::ports::issues::TrackedIssue;
use crate::status::{marker, plan_transition, IssueAction, Snapshot, StatusRecord, TransitionPlan};

/// Execute the `report` command against the live GitHub API.
///
/// # Errors
///
/// Returns an error string when a tracker call fails or the new status
/// record cannot be written back.
pub fn run(args: &ReportArgs) -> Result<(), String> {
    let ctx = ServiceContext::live(args.token.clone());
    run_with_context(&ctx, args)
}

/// Execute the `report` command with the given service context.
///
/// A `cancelled` status and a missing tracking issue both terminate cleanly
/// after a notice, without touching the issue.
///
/// # Errors
///
/// Returns an error string when a tracker call fails or the new status
/// record cannot be written back.
pub fn run_with_context(ctx: &ServiceContext, args: &ReportArgs) -> Result<(), String> {
    if args.status.eq_ignore_ascii_case("cancelled") {
        ctx.notices.warning("Job status is `cancelled` - exiting");
        return Ok(());
    }

    let succeeded = args.status.eq_ignore_ascii_case("success");
    ctx.notices.notice(&format!("The CI build had status {}.", args.status));

    let issue = ctx
        .issues
        .get_issue(&args.issue_repository, args.issue_number)
        .map_err(|e| {
            format!(
                "Failed to look up issue {} in repository {}: {e}",
                args.issue_number, args.issue_repository
            )
        })?;
    let Some(issue) = issue else {
        ctx.notices.error(&format!(
            "Unable to find the issue {} in repository {}",
            args.issue_number, args.issue_repository
        ));
        return Ok(());
    };
    ctx.notices.notice(&format!("Report issue found: {} - {}", issue.title, issue.html_url));
    ctx.notices.notice(&format!("The issue is currently {}", issue.state));

    let body = issue.body.clone().unwrap_or_default();
    let prior = match marker::extract_record(&body) {
        Ok(prior) => prior,
        Err(e) => {
            ctx.notices.warning(&format!("Unable to extract status from issue body: {e}"));
            None
        }
    };

    let snapshot = Snapshot {
        timestamp: ctx.clock.now(),
        source_commit_sha: args.source_sha.clone(),
        dependent_project_commit_sha: args.project_sha.clone(),
    };
    let plan = plan_transition(succeeded, issue.state, prior.as_ref(), &snapshot);

    // The comment names the repository whose CI ran, not the one holding
    // the issue; fall back to the latter when the runtime provides nothing.
    let repository =
        args.repository.clone().unwrap_or_else(|| args.issue_repository.clone());

    apply_transition(ctx, args, &issue, &plan, &repository)?;

    let record = StatusRecord {
        updated_at: snapshot.timestamp,
        is_failure: !succeeded,
        repository,
        run_id: args.run_id,
        source_commit_sha: args.source_sha.clone(),
        dependent_project_commit_sha: args.project_sha.clone(),
        first_failure: plan
            .first_failure
            .resolve(prior.as_ref().and_then(|p| p.first_failure.clone())),
        last_failure: plan
            .last_failure
            .resolve(prior.as_ref().and_then(|p| p.last_failure.clone())),
        last_success: plan
            .last_success
            .resolve(prior.as_ref().and_then(|p| p.last_success.clone())),
    };

    let new_body = marker::embed_record(&body, &record)
        .map_err(|e| format!("Unable to update the status descriptor: {e}"))?;
    ctx.issues
        .set_body(&args.issue_repository, args.issue_number, &new_body)
        .map_err(|e| format!("Failed to update the issue body: {e}"))
}

/// Posts the planned comment and applies the planned state change.
fn apply_transition(
    ctx: &ServiceContext,
    args: &ReportArgs,
    issue: &TrackedIssue,
    plan: &TransitionPlan,
    repository: &str,
) -> Result<(), String> {
    let Some(kind) = plan.comment else {
        return Ok(());
    };
    let text = kind.render(repository, args.run_id);

    match plan.issue_action {
        IssueAction::Reopen => {
            ctx.issues
                .reopen_issue(&args.issue_repository, args.issue_number)
                .map_err(|e| format!("Failed to reopen the issue: {e}"))?;
            let comment = ctx
                .issues
                .add_comment(&args.issue_repository, args.issue_number, &text)
                .map_err(|e| format!("Failed to comment on the issue: {e}"))?;
            ctx.notices.notice(&format!(
                "Comment added on issue {} - {}, the issue has been re-opened",
                issue.html_url, comment.html_url
            ));
        }
        IssueAction::Close => {
            let comment = ctx
                .issues
                .add_comment(&args.issue_repository, args.issue_number, &text)
                .map_err(|e| format!("Failed to comment on the issue: {e}"))?;
            ctx.issues
                .close_issue(&args.issue_repository, args.issue_number)
                .map_err(|e| format!("Failed to close the issue: {e}"))?;
            ctx.notices.notice(&format!(
                "Comment added on issue {} - {}, the issue has also been closed",
                issue.html_url, comment.html_url
            ));
        }
        IssueAction::None => {
            let comment = ctx
                .issues
                .add_comment(&args.issue_repository, args.issue_number, &text)
                .map_err(|e| format!("Failed to comment on the issue: {e}"))?;
            ctx.notices.notice(&format!(
                "Comment added on issue {} - {}",
                issue.html_url, comment.html_url
            ));
        }
    }
    Ok(())
}
