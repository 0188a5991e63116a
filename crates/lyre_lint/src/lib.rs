//! # lyre_lint
//!
//! Lint rules and diagnostics for Lyre source files.
//!
//! The crate sits on top of [`lyre_semantic`]'s usage analysis: rules
//! consume the analysis results and report through a [`LintContext`];
//! the [`Linter`] drives the registered rules over an already-parsed
//! [`SourceFile`](lyre_syntax::ast::SourceFile). Parsing is the caller's
//! responsibility.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lyre_lint::{lint, format_results, OutputFormat};
//!
//! let file = parse(source)?; // external parser
//! let result = lint(&file, source, "Main.lyre");
//!
//! if result.has_diagnostics() {
//!     println!("{}", format_results(&[result], OutputFormat::Text));
//! }
//! ```
//!
//! ## Rules
//!
//! - `lyre/no-unused-bindings` - Disallow local bindings that are never
//!   referenced (arguments, lambda parameters, let bindings, case pattern
//!   variables)
//! - `lyre/no-unused-top-level` - Disallow module-level declarations that
//!   are never referenced within the file

pub mod config;
mod context;
mod diagnostic;
mod linter;
pub mod output;
mod rule;
pub mod rules;

pub use config::{load_config, ConfigError, LintConfig};
pub use context::LintContext;
pub use diagnostic::{Fix, Label, LintDiagnostic, LintSummary, Severity, TextEdit};
pub use linter::{LintResult, Linter};
pub use output::{format_results, format_summary, OutputFormat};
pub use rule::{Rule, RuleCategory, RuleMeta, RuleRegistry};

use lyre_syntax::ast::SourceFile;

/// Lint a parsed source file with the recommended rules
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn lint(file: &SourceFile, source: &str, filename: &str) -> LintResult {
    Linter::new().lint_file(file, source, filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyre_syntax::ast::{Declaration, Expr, FunctionDecl, Name, Range};

    #[test]
    fn test_lint_function() {
        let file = SourceFile::new(vec![Declaration::Function(FunctionDecl {
            name: Name::new("orphan", Range::on_row(1, 1, 7)),
            signature: None,
            args: vec![],
            body: Expr::int(1),
            range: Range::on_row(1, 1, 11),
        })]);
        let result = lint(&file, "orphan = 1", "Main.lyre");
        assert!(result.has_diagnostics());
    }

    #[test]
    fn test_lint_clean_file() {
        let result = lint(&SourceFile::default(), "", "Empty.lyre");
        assert!(!result.has_diagnostics());
    }
}
