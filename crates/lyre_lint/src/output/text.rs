//! Plain text output.

use crate::diagnostic::Severity;
use crate::linter::LintResult;
use std::fmt::Write;

/// Format lint results as plain terminal output.
///
/// One `file:row:column severity [rule] message` line per diagnostic, with
/// an indented help line when the diagnostic carries one.
pub fn format_text(results: &[LintResult]) -> String {
    let mut output = String::new();

    for result in results {
        for diagnostic in &result.diagnostics {
            let severity = match diagnostic.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let _ = writeln!(
                output,
                "{}:{}:{} {} [{}] {}",
                result.filename,
                diagnostic.range.start.row,
                diagnostic.range.start.column,
                severity,
                diagnostic.rule_name,
                diagnostic.message
            );
            if let Some(help) = &diagnostic.help {
                let _ = writeln!(output, "  help: {}", help);
            }
        }
    }

    output
}

/// Format a summary line
pub fn format_summary(error_count: usize, warning_count: usize, file_count: usize) -> String {
    let mut parts = Vec::new();

    if error_count > 0 {
        parts.push(format!(
            "{} error{}",
            error_count,
            if error_count == 1 { "" } else { "s" }
        ));
    }

    if warning_count > 0 {
        parts.push(format!(
            "{} warning{}",
            warning_count,
            if warning_count == 1 { "" } else { "s" }
        ));
    }

    if parts.is_empty() {
        format!("No problems found in {} file(s)", file_count)
    } else {
        format!(
            "{} in {} file{}",
            parts.join(", "),
            file_count,
            if file_count == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::LintDiagnostic;
    use lyre_syntax::ast::Range;

    #[test]
    fn test_format_text_line_shape() {
        let result = LintResult {
            filename: "Main.lyre".to_string(),
            diagnostics: vec![LintDiagnostic::warn(
                "lyre/no-unused-bindings",
                "Pattern variable 'x' is never used",
                Range::on_row(2, 5, 6),
            )
            .with_help("prefix it with underscore")],
            error_count: 0,
            warning_count: 1,
        };
        let output = format_text(&[result]);
        assert!(output.starts_with(
            "Main.lyre:2:5 warning [lyre/no-unused-bindings] Pattern variable 'x' is never used"
        ));
        assert!(output.contains("  help: prefix it with underscore"));
    }

    #[test]
    fn test_format_summary_pluralization() {
        assert_eq!(format_summary(0, 0, 3), "No problems found in 3 file(s)");
        assert_eq!(format_summary(1, 0, 1), "1 error in 1 file");
        assert_eq!(format_summary(2, 1, 2), "2 errors, 1 warning in 2 files");
    }
}
