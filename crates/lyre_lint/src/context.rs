//! Lint context for rule execution.

use crate::diagnostic::{LintDiagnostic, Severity};
use compact_str::CompactString;
use lyre_syntax::ast::Range;
use rustc_hash::FxHashSet;

/// Lint context provides utilities for rules during execution.
///
/// Rules report through the context; it owns the diagnostic sink and the
/// enabled-rule filter, so a rule never has to check whether it is active.
pub struct LintContext<'a> {
    /// Source code being linted
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Collected diagnostics (pre-allocated capacity)
    diagnostics: Vec<LintDiagnostic>,
    /// Current rule name (set by the linter before calling rule methods)
    pub current_rule: &'static str,
    /// Optional set of enabled rule names (if None, all rules are enabled)
    enabled_rules: Option<FxHashSet<String>>,
    /// Cached error count for fast access
    error_count: usize,
    /// Cached warning count for fast access
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    /// Initial capacity for diagnostics vector
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;

    /// Create a new lint context
    #[inline]
    pub fn new(source: &'a str, filename: &'a str) -> Self {
        Self {
            source,
            filename,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            current_rule: "",
            enabled_rules: None,
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Set enabled rules (if None, all rules are enabled)
    #[inline]
    pub fn set_enabled_rules(&mut self, rules: Option<FxHashSet<String>>) {
        self.enabled_rules = rules;
    }

    /// Check if a rule is enabled
    #[inline]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match &self.enabled_rules {
            Some(set) => set.contains(rule_name),
            None => true,
        }
    }

    /// Report a lint diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Report an error at a range
    #[inline]
    pub fn error(&mut self, message: impl Into<CompactString>, range: Range) {
        self.report(LintDiagnostic::error(self.current_rule, message, range));
    }

    /// Report a warning at a range
    #[inline]
    pub fn warn(&mut self, message: impl Into<CompactString>, range: Range) {
        self.report(LintDiagnostic::warn(self.current_rule, message, range));
    }

    /// Report an error with help message
    #[inline]
    pub fn error_with_help(
        &mut self,
        message: impl Into<CompactString>,
        range: Range,
        help: impl Into<CompactString>,
    ) {
        self.report(LintDiagnostic::error(self.current_rule, message, range).with_help(help));
    }

    /// Report a warning with help message
    #[inline]
    pub fn warn_with_help(
        &mut self,
        message: impl Into<CompactString>,
        range: Range,
        help: impl Into<CompactString>,
    ) {
        self.report(LintDiagnostic::warn(self.current_rule, message, range).with_help(help));
    }

    /// Get collected diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    /// Get reference to collected diagnostics
    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Get the error count (cached, O(1))
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the warning count (cached, O(1))
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}
