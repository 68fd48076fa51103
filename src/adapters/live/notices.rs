//! Live notice sink emitting GitHub Actions workflow commands.

use crate::ports::notices::Notices;

/// Notice sink that prints `::notice::`-style workflow commands on stdout,
/// which the Actions runner turns into run annotations.
pub struct WorkflowCommandNotices;

/// Formats one workflow command line.
///
/// Message data must have `%`, CR and LF percent-encoded or the runner
/// truncates the annotation at the first newline.
fn format_command(level: &str, message: &str) -> String {
    let escaped = message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A");
    format!("::{level}::{escaped}")
}

impl Notices for WorkflowCommandNotices {
    fn notice(&self, message: &str) {
        println!("{}", format_command("notice", message));
    }

    fn warning(&self, message: &str) {
        println!("{}", format_command("warning", message));
    }

    fn error(&self, message: &str) {
        println!("{}", format_command("error", message));
    }
}

#[cfg(test)]
mod tests {
    use super::format_command;

    #[test]
    fn formats_plain_message() {
        assert_eq!(format_command("notice", "all good"), "::notice::all good");
    }

    #[test]
    fn escapes_newlines_and_percent() {
        assert_eq!(
            format_command("warning", "50% done\r\nnext line"),
            "::warning::50%25 done%0D%0Anext line"
        );
    }
}
