//! Notice port for reporting progress to the CI runtime.

/// Observability sink for run annotations.
///
/// Mirrors the three annotation levels CI runtimes understand. No return
/// values are consumed; emitting a notice never fails the run.
pub trait Notices: Send + Sync {
    /// Emits an informational notice.
    fn notice(&self, message: &str);

    /// Emits a warning.
    fn warning(&self, message: &str);

    /// Emits an error annotation.
    fn error(&self, message: &str);
}
