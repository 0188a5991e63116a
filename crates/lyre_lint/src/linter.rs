//! Main linter entry point.

use crate::config::LintConfig;
use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::rule::RuleRegistry;
use crate::rules::{NoUnusedBindings, NoUnusedTopLevel};
use lyre_syntax::ast::SourceFile;
use rustc_hash::FxHashSet;

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Collected diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main linter struct.
///
/// The parser is an external collaborator: every entry point takes an
/// already-built [`SourceFile`] alongside the source text it came from.
pub struct Linter {
    registry: RuleRegistry,
    /// Optional set of enabled rule names (if None, all rules are enabled)
    enabled_rules: Option<FxHashSet<String>>,
}

impl Linter {
    /// Create a new linter with recommended rules
    #[inline]
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_recommended(),
            enabled_rules: None,
        }
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            enabled_rules: None,
        }
    }

    /// Create a linter from a loaded configuration
    pub fn from_config(config: &LintConfig) -> Self {
        let mut registry = RuleRegistry::new();

        let bindings = match &config.ignore_pattern {
            Some(pattern) => NoUnusedBindings::with_ignore_pattern(pattern.clone()),
            None => NoUnusedBindings::default(),
        };
        registry.register(Box::new(bindings));
        registry.register(Box::new(NoUnusedTopLevel::with_exposed(
            config.exposed.iter().cloned(),
        )));

        Self {
            registry,
            enabled_rules: config.rules.as_ref().map(|r| r.iter().cloned().collect()),
        }
    }

    /// Set enabled rules (if None, all rules are enabled)
    ///
    /// Pass a list of rule names to enable only those rules.
    /// Rules not in the list will be skipped during linting.
    #[inline]
    pub fn with_enabled_rules(mut self, rules: Option<Vec<String>>) -> Self {
        self.enabled_rules = rules.map(|r| r.into_iter().collect());
        self
    }

    /// Check if a rule is enabled
    #[inline]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match &self.enabled_rules {
            Some(set) => set.contains(rule_name),
            None => true,
        }
    }

    /// Lint one parsed source file
    pub fn lint_file(&self, file: &SourceFile, source: &str, filename: &str) -> LintResult {
        let mut ctx = LintContext::new(source, filename);
        ctx.set_enabled_rules(self.enabled_rules.clone());

        for rule in self.registry.rules() {
            let name = rule.meta().name;
            if !ctx.is_rule_enabled(name) {
                continue;
            }
            ctx.current_rule = name;
            rule.run(&mut ctx, file);
        }

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        let diagnostics = ctx.into_diagnostics();

        LintResult {
            filename: filename.to_string(),
            diagnostics,
            error_count,
            warning_count,
        }
    }

    /// Lint multiple files and aggregate results
    pub fn lint_files(
        &self,
        files: &[(&SourceFile, &str, &str)],
    ) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        for (file, source, filename) in files {
            let result = self.lint_file(file, source, filename);
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            results.push(result);
        }

        summary.file_count = files.len();
        (results, summary)
    }

    /// Get the rule registry
    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Get all registered rules
    #[inline]
    pub fn rules(&self) -> &[Box<dyn crate::rule::Rule>] {
        self.registry.rules()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyre_syntax::ast::{Declaration, Expr, FunctionDecl, Name, Range};

    fn value_decl(name: &str, body: Expr) -> Declaration {
        Declaration::Function(FunctionDecl {
            name: Name::new(name, Range::on_row(1, 1, 1 + name.len() as u32)),
            signature: None,
            args: vec![],
            body,
            range: Range::ZERO,
        })
    }

    #[test]
    fn test_lint_empty_file() {
        let linter = Linter::new();
        let result = linter.lint_file(&SourceFile::default(), "", "Empty.lyre");
        assert!(!result.has_errors());
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_lint_reports_unused_top_level() {
        let linter = Linter::new();
        let file = SourceFile::new(vec![value_decl("lonely", Expr::int(1))]);
        let result = linter.lint_file(&file, "lonely = 1", "Main.lyre");
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.diagnostics[0].rule_name, "lyre/no-unused-top-level");
    }

    #[test]
    fn test_enabled_rules_filter_skips_rule() {
        let linter =
            Linter::new().with_enabled_rules(Some(vec!["lyre/no-unused-bindings".to_string()]));
        let file = SourceFile::new(vec![value_decl("lonely", Expr::int(1))]);
        let result = linter.lint_file(&file, "lonely = 1", "Main.lyre");
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_from_config_exposed_exemption() {
        let config = LintConfig {
            exposed: vec!["main".to_string()],
            ..LintConfig::default()
        };
        let linter = Linter::from_config(&config);
        let file = SourceFile::new(vec![value_decl("main", Expr::int(0))]);
        let result = linter.lint_file(&file, "main = 0", "Main.lyre");
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_lint_files_batch() {
        let linter = Linter::new();
        let a = SourceFile::new(vec![value_decl("a", Expr::int(1))]);
        let b = SourceFile::default();

        let (results, summary) =
            linter.lint_files(&[(&a, "a = 1", "A.lyre"), (&b, "", "B.lyre")]);
        assert_eq!(results.len(), 2);
        assert_eq!(summary.file_count, 2);
        assert_eq!(summary.warning_count, 1);
    }
}
