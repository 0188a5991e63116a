//! lyre/no-unused-top-level
//!
//! Disallow module-level declarations that are never referenced within
//! the file.
//!
//! Names included in the exposed set are exempt: export lists are resolved
//! by the caller, so a module's public surface is handed in through the
//! config rather than inferred here.
//!
//! ## Examples
//!
//! ### Invalid
//! ```lyre
//! -- 'helper' is declared but never used
//! helper x = x + 1
//!
//! main = 42
//! ```
//!
//! ### Valid
//! ```lyre
//! helper x = x + 1
//!
//! main = helper 41
//! ```

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use crate::rules::matches_ignore_pattern;
use lyre_semantic::usage::analyze;
use lyre_semantic::VariableKind;
use lyre_syntax::ast::SourceFile;
use rustc_hash::FxHashSet;

static META: RuleMeta = RuleMeta {
    name: "lyre/no-unused-top-level",
    description: "Disallow module-level declarations that are never referenced",
    category: RuleCategory::Usage,
    fixable: false,
    default_severity: Severity::Warning,
};

/// Disallow unused top-level declarations
#[derive(Default)]
pub struct NoUnusedTopLevel {
    /// Names exposed by the module's export list; never reported
    exposed: FxHashSet<String>,
}

impl NoUnusedTopLevel {
    /// Create the rule with an exposed-name exemption set
    pub fn with_exposed(exposed: impl IntoIterator<Item = String>) -> Self {
        Self {
            exposed: exposed.into_iter().collect(),
        }
    }
}

fn describe(kind: VariableKind) -> &'static str {
    match kind {
        VariableKind::Type => "Type",
        _ => "Declaration",
    }
}

impl Rule for NoUnusedTopLevel {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_>, file: &SourceFile) {
        let analysis = analyze(file);

        for unused in analysis.unused_top_level() {
            if self.exposed.contains(unused.name.as_str()) {
                continue;
            }
            if matches_ignore_pattern(unused.name.as_str(), None) {
                continue;
            }

            ctx.warn_with_help(
                format!("{} '{}' is never used", describe(unused.kind), unused.name),
                unused.range,
                "Remove the declaration or add it to the module's exposed names",
            );
        }
    }
}
