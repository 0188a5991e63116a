//! Usage analysis: which bindings are ever referenced.
//!
//! Wires scope push/pop and usage-flagging hooks into the tree inspector
//! for every binding-introducing or name-referencing node kind, then
//! projects the finished [`ScopeStack`] into unused-binding reports.
//!
//! The analysis is strictly intra-file and syntactic. Qualified references
//! (`List.map`) always point at another module and are never flagged;
//! unqualified names that no frame resolves are imports or primitives and
//! are ignored by [`ScopeStack::flag`] itself.

use compact_str::CompactString;
use lyre_syntax::ast::{
    CaseArm, Declaration, Destructuring, FunctionDecl, Lambda, LetBlock, Name,
    OperatorApplication, Range, RecordUpdate, SourceFile, TypeAnnotation, TypeRefKind, ValueRef,
};
use lyre_syntax::pattern::{bound_names, referenced_names};

use crate::inspector::{Hook, Inspection};
use crate::scope::{ScopeStack, UnusedBinding, VariableKind};

type Binding = (CompactString, VariableKind, Range);

fn as_binding(name: &Name, kind: VariableKind) -> Binding {
    (name.text.clone(), kind, name.range)
}

/// Module-level names, in declaration order. Constructors of a custom type
/// are value-level bindings; the type names themselves are tracked so that
/// signature references keep them alive.
fn top_level_bindings(file: &SourceFile) -> Vec<Binding> {
    let mut bindings = Vec::new();
    for declaration in &file.declarations {
        match declaration {
            Declaration::Function(func) => {
                bindings.push(as_binding(&func.name, VariableKind::TopLevel));
            }
            Declaration::Destructuring(destructuring) => {
                for name in bound_names(&destructuring.pattern) {
                    bindings.push(as_binding(&name, VariableKind::Pattern));
                }
            }
            Declaration::TypeAlias(alias) => {
                bindings.push(as_binding(&alias.name, VariableKind::Type));
            }
            Declaration::CustomType(custom) => {
                bindings.push(as_binding(&custom.name, VariableKind::Type));
                for variant in &custom.variants {
                    bindings.push(as_binding(&variant.name, VariableKind::TopLevel));
                }
            }
        }
    }
    bindings
}

/// Names a `let` block binds locally. Redeclarations of top-level names are
/// excluded: a `let` binding never shadows into the top-level accounting.
fn let_bindings(block: &LetBlock, stack: &ScopeStack) -> Vec<Binding> {
    let mut bindings = Vec::new();
    for declaration in &block.declarations {
        match declaration {
            Declaration::Function(func) => {
                bindings.push(as_binding(&func.name, VariableKind::Defined));
            }
            Declaration::Destructuring(destructuring) => {
                for name in bound_names(&destructuring.pattern) {
                    bindings.push(as_binding(&name, VariableKind::Pattern));
                }
            }
            Declaration::TypeAlias(_) | Declaration::CustomType(_) => {}
        }
    }
    bindings.retain(|(name, _, _)| !stack.declared_at_top_level(name));
    bindings
}

fn flag_all(stack: ScopeStack, names: impl IntoIterator<Item = Name>) -> ScopeStack {
    names
        .into_iter()
        .fold(stack, |stack, name| stack.flag(name.as_str()))
}

/// The hook table implementing the usage analysis over a [`ScopeStack`]
/// accumulator.
pub fn usage_inspection() -> Inspection<ScopeStack> {
    Inspection {
        on_file: Some(Hook::pre(|file: &SourceFile, stack: ScopeStack| {
            stack.push(top_level_bindings(file))
        })),
        on_function: Some(Hook::inner(
            |f: &mut dyn FnMut(ScopeStack) -> ScopeStack,
             func: &FunctionDecl,
             stack: ScopeStack| {
                // Constructors referenced by the argument patterns are uses
                // against the enclosing scope, flagged once the function's
                // own frame is gone again.
                let used_in_patterns: Vec<Name> = func
                    .args
                    .iter()
                    .flat_map(referenced_names)
                    .collect();
                let args: Vec<Binding> = func
                    .args
                    .iter()
                    .flat_map(bound_names)
                    .map(|name| as_binding(&name, VariableKind::Pattern))
                    .collect();

                // Masking the function's own name keeps self-recursion from
                // counting as use: `fact` calling only itself stays unused.
                let stack = stack.mask(func.name.as_str());
                let stack = f(stack.push(args));
                let stack = stack.pop().unmask(func.name.as_str());
                flag_all(stack, used_in_patterns)
            },
        )),
        on_lambda: Some(Hook::inner(
            |f: &mut dyn FnMut(ScopeStack) -> ScopeStack, lambda: &Lambda, stack: ScopeStack| {
                let args: Vec<Binding> = lambda
                    .args
                    .iter()
                    .flat_map(bound_names)
                    .map(|name| as_binding(&name, VariableKind::Pattern))
                    .collect();
                f(stack.push(args)).pop()
            },
        )),
        on_let_block: Some(Hook::inner(
            |f: &mut dyn FnMut(ScopeStack) -> ScopeStack, block: &LetBlock, stack: ScopeStack| {
                let bindings = let_bindings(block, &stack);
                f(stack.push(bindings)).pop()
            },
        )),
        on_case_arm: Some(Hook::inner(
            |f: &mut dyn FnMut(ScopeStack) -> ScopeStack, arm: &CaseArm, stack: ScopeStack| {
                let used_in_pattern: Vec<Name> =
                    referenced_names(&arm.pattern).into_iter().collect();
                let vars: Vec<Binding> = bound_names(&arm.pattern)
                    .iter()
                    .map(|name| as_binding(name, VariableKind::Pattern))
                    .collect();
                let stack = f(stack.push(vars)).pop();
                flag_all(stack, used_in_pattern)
            },
        )),
        on_destructuring: Some(Hook::post(
            |destructuring: &Destructuring, stack: ScopeStack| {
                flag_all(stack, referenced_names(&destructuring.pattern))
            },
        )),
        on_function_or_value: Some(Hook::post(|value: &ValueRef, stack: ScopeStack| {
            if value.module.is_empty() {
                stack.flag(value.name.as_str())
            } else {
                stack
            }
        })),
        on_prefix_operator: Some(Hook::post(|op: &Name, stack: ScopeStack| {
            stack.flag(op.as_str())
        })),
        on_operator_application: Some(Hook::post(
            |application: &OperatorApplication, stack: ScopeStack| {
                stack.flag(application.op.as_str())
            },
        )),
        on_record_update: Some(Hook::post(|update: &RecordUpdate, stack: ScopeStack| {
            stack.flag(update.base.as_str())
        })),
        on_type_annotation: Some(Hook::post(
            |annotation: &TypeAnnotation, stack: ScopeStack| {
                // A bare, argument-free type reference in a signature keeps
                // that type name from reading as unused.
                match &annotation.type_ref.kind {
                    TypeRefKind::Named { module, name, args }
                        if module.is_empty() && args.is_empty() =>
                    {
                        stack.flag(name.as_str())
                    }
                    _ => stack,
                }
            },
        )),
    }
}

/// The finished analysis of one file
#[derive(Debug, Clone)]
pub struct UsageAnalysis {
    stack: ScopeStack,
}

impl UsageAnalysis {
    /// Unused bindings from closed scopes: arguments, lambda parameters,
    /// `let` bindings, case pattern variables
    pub fn unused_locals(&self) -> Vec<UnusedBinding> {
        self.stack.unused_in_popped_frames()
    }

    /// Unused module-level declarations
    pub fn unused_top_level(&self) -> Vec<UnusedBinding> {
        self.stack.unused_in_top_frame()
    }

    /// The finished scope stack, for callers that want the raw counts
    pub fn scope_stack(&self) -> &ScopeStack {
        &self.stack
    }
}

/// Run the usage analysis over one file.
///
/// The walk is synchronous and total: it cannot fail on a well-formed tree,
/// and running it twice on the same tree yields the same reports.
pub fn analyze(file: &SourceFile) -> UsageAnalysis {
    UsageAnalysis {
        stack: usage_inspection().run(file, ScopeStack::new()),
    }
}
