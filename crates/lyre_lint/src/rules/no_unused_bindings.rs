//! lyre/no-unused-bindings
//!
//! Disallow local bindings that are never referenced.
//!
//! Reports function arguments, lambda parameters, `let` bindings, and case
//! pattern variables whose scope closed without a single resolved reference.
//!
//! ## Examples
//!
//! ### Invalid
//! ```lyre
//! -- 'index' is bound but never used
//! render index item = show item
//!
//! -- 'y' is bound but never used
//! f = let y = 1 in 2
//! ```
//!
//! ### Valid
//! ```lyre
//! render item = show item
//!
//! -- Underscore prefix indicates intentionally unused
//! render _index item = show item
//! ```
//!
//! ## Options
//!
//! Names starting with `_` are ignored by default.

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use crate::rules::matches_ignore_pattern;
use lyre_semantic::usage::analyze;
use lyre_semantic::VariableKind;
use lyre_syntax::ast::SourceFile;

static META: RuleMeta = RuleMeta {
    name: "lyre/no-unused-bindings",
    description: "Disallow local bindings that are never referenced",
    category: RuleCategory::Usage,
    fixable: false,
    default_severity: Severity::Warning,
};

/// Disallow unused local bindings
pub struct NoUnusedBindings {
    /// Prefix for names to ignore (default: `^_`)
    ignore_pattern: Option<String>,
}

impl Default for NoUnusedBindings {
    fn default() -> Self {
        Self {
            ignore_pattern: Some("^_".to_string()),
        }
    }
}

impl NoUnusedBindings {
    /// Create the rule with a custom ignore prefix
    pub fn with_ignore_pattern(pattern: impl Into<String>) -> Self {
        Self {
            ignore_pattern: Some(pattern.into()),
        }
    }
}

fn describe(kind: VariableKind) -> &'static str {
    match kind {
        VariableKind::Defined => "Binding",
        VariableKind::Pattern => "Pattern variable",
        VariableKind::TopLevel | VariableKind::Type => "Name",
    }
}

impl Rule for NoUnusedBindings {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_>, file: &SourceFile) {
        let analysis = analyze(file);

        for unused in analysis.unused_locals() {
            if matches_ignore_pattern(unused.name.as_str(), self.ignore_pattern.as_deref()) {
                continue;
            }

            ctx.warn_with_help(
                format!("{} '{}' is never used", describe(unused.kind), unused.name),
                unused.range,
                "If the binding is intentionally unused, prefix it with underscore",
            );
        }
    }
}
