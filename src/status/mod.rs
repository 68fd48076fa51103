//! Persisted build-status record and the logic that evolves it.
//!
//! The tracking issue's body is the only store: a YAML-encoded
//! [`StatusRecord`] lives between HTML-comment markers and is merged with
//! each new build outcome.

pub mod marker;
pub mod record;
pub mod transition;

pub use record::{Snapshot, StatusRecord};
pub use transition::{plan_transition, CommentKind, FieldUpdate, IssueAction, TransitionPlan};
