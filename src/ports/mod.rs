//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (time, issue tracker, notice sink). Implementations
//! live in `src/adapters/`.

pub mod clock;
pub mod issues;
pub mod notices;

pub use clock::Clock;
pub use issues::{IssueState, IssueTracker, PostedComment, TrackedIssue};
pub use notices::Notices;
