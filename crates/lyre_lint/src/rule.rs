//! Rule trait and registry for lint rules.

use crate::context::LintContext;
use crate::diagnostic::Severity;
use lyre_syntax::ast::SourceFile;

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Usage rules (lyre/usage) - dead code and unused names
    Usage,
    /// Style rules (lyre/style) - readability and consistency
    Style,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "lyre/no-unused-bindings")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing lint rules
///
/// A rule runs once over the analyzed file and reports through the context.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Run on one source file
    fn run(&self, ctx: &mut LintContext<'_>, file: &SourceFile);
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Create registry with the recommended rules enabled
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(crate::rules::NoUnusedBindings::default()));
        registry.register(Box::new(crate::rules::NoUnusedTopLevel::default()));

        registry
    }

    /// Create registry with all available rules (including opt-in)
    pub fn with_all() -> Self {
        // Every current rule is recommended; opt-in rules land here as they
        // are added.
        Self::with_recommended()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_registry_has_usage_rules() {
        let registry = RuleRegistry::with_recommended();
        let names: Vec<&str> = registry.rules().iter().map(|r| r.meta().name).collect();
        assert!(names.contains(&"lyre/no-unused-bindings"));
        assert!(names.contains(&"lyre/no-unused-top-level"));
    }
}
