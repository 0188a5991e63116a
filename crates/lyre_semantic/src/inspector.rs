//! Configurable AST traversal.
//!
//! An [`Inspection`] maps node kinds to hooks and threads an accumulator
//! value through one deterministic walk of a [`SourceFile`]: declaration
//! list order, expression sub-nodes in the order they appear syntactically.
//! Node kinds without a registered hook traverse their children with no
//! other effect.
//!
//! A hook fires in one of three modes. [`Hook::Pre`] runs before the node's
//! children and its result becomes the accumulator the children see.
//! [`Hook::Post`] runs after the children. [`Hook::Inner`] owns the
//! recursion: it receives the continuation that visits the children and
//! decides when, and how many times, to invoke it. Binding constructs need
//! this last mode to bracket their child traversal with scope push/pop,
//! which a pre/post pair alone cannot express.

use lyre_syntax::ast::{
    CaseArm, Declaration, Destructuring, Expr, ExprKind, FunctionDecl, Lambda, LetBlock, Name,
    OperatorApplication, RecordUpdate, SourceFile, TypeAnnotation, ValueRef,
};

/// A traversal hook for one node kind
pub enum Hook<A, N> {
    /// Runs before the node's children; its result feeds the child walk
    Pre(Box<dyn Fn(&N, A) -> A>),
    /// Runs after the node's children
    Post(Box<dyn Fn(&N, A) -> A>),
    /// Owns the recursion: the first argument visits the node's children
    Inner(Box<dyn Fn(&mut dyn FnMut(A) -> A, &N, A) -> A>),
}

impl<A, N> Hook<A, N> {
    pub fn pre(f: impl Fn(&N, A) -> A + 'static) -> Self {
        Hook::Pre(Box::new(f))
    }

    pub fn post(f: impl Fn(&N, A) -> A + 'static) -> Self {
        Hook::Post(Box::new(f))
    }

    pub fn inner(f: impl Fn(&mut dyn FnMut(A) -> A, &N, A) -> A + 'static) -> Self {
        Hook::Inner(Box::new(f))
    }
}

/// Apply a hook slot around a child-visiting continuation
fn dispatch<A, N>(
    hook: &Option<Hook<A, N>>,
    node: &N,
    acc: A,
    mut children: impl FnMut(A) -> A,
) -> A {
    match hook {
        None => children(acc),
        Some(Hook::Pre(f)) => {
            let acc = f(node, acc);
            children(acc)
        }
        Some(Hook::Post(f)) => {
            let acc = children(acc);
            f(node, acc)
        }
        Some(Hook::Inner(f)) => f(&mut children, node, acc),
    }
}

/// Hook table: one optional slot per hookable node kind.
///
/// The default value hooks nothing, which makes the walk a pure
/// pass-through over the accumulator.
pub struct Inspection<A> {
    pub on_file: Option<Hook<A, SourceFile>>,
    pub on_function: Option<Hook<A, FunctionDecl>>,
    pub on_lambda: Option<Hook<A, Lambda>>,
    pub on_let_block: Option<Hook<A, LetBlock>>,
    pub on_case_arm: Option<Hook<A, CaseArm>>,
    pub on_destructuring: Option<Hook<A, Destructuring>>,
    pub on_function_or_value: Option<Hook<A, ValueRef>>,
    pub on_prefix_operator: Option<Hook<A, Name>>,
    pub on_operator_application: Option<Hook<A, OperatorApplication>>,
    pub on_record_update: Option<Hook<A, RecordUpdate>>,
    pub on_type_annotation: Option<Hook<A, TypeAnnotation>>,
}

impl<A> Default for Inspection<A> {
    fn default() -> Self {
        Self {
            on_file: None,
            on_function: None,
            on_lambda: None,
            on_let_block: None,
            on_case_arm: None,
            on_destructuring: None,
            on_function_or_value: None,
            on_prefix_operator: None,
            on_operator_application: None,
            on_record_update: None,
            on_type_annotation: None,
        }
    }
}

impl<A> Inspection<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the whole file once, threading `acc` through every hook
    pub fn run(&self, file: &SourceFile, acc: A) -> A {
        dispatch(&self.on_file, file, acc, |acc| {
            file.declarations
                .iter()
                .fold(acc, |acc, decl| self.visit_declaration(decl, acc))
        })
    }

    fn visit_declaration(&self, decl: &Declaration, acc: A) -> A {
        match decl {
            Declaration::Function(func) => self.visit_function(func, acc),
            Declaration::Destructuring(destructuring) => {
                self.visit_destructuring(destructuring, acc)
            }
            // Type declarations have no hookable children; their names are
            // handled where the file-level hook collects them.
            Declaration::TypeAlias(_) | Declaration::CustomType(_) => acc,
        }
    }

    fn visit_function(&self, func: &FunctionDecl, acc: A) -> A {
        dispatch(&self.on_function, func, acc, |acc| {
            let acc = match &func.signature {
                Some(signature) => self.visit_type_annotation(signature, acc),
                None => acc,
            };
            self.visit_expr(&func.body, acc)
        })
    }

    fn visit_destructuring(&self, destructuring: &Destructuring, acc: A) -> A {
        dispatch(&self.on_destructuring, destructuring, acc, |acc| {
            self.visit_expr(&destructuring.expr, acc)
        })
    }

    fn visit_type_annotation(&self, annotation: &TypeAnnotation, acc: A) -> A {
        dispatch(&self.on_type_annotation, annotation, acc, |acc| acc)
    }

    fn visit_expr(&self, expr: &Expr, acc: A) -> A {
        match &expr.kind {
            ExprKind::FunctionOrValue(value) => {
                dispatch(&self.on_function_or_value, value, acc, |acc| acc)
            }
            ExprKind::PrefixOperator(op) => {
                dispatch(&self.on_prefix_operator, op, acc, |acc| acc)
            }
            ExprKind::OperatorApplication(application) => {
                dispatch(&self.on_operator_application, application, acc, |acc| {
                    let acc = self.visit_expr(&application.left, acc);
                    self.visit_expr(&application.right, acc)
                })
            }
            ExprKind::Application(items) => items
                .iter()
                .fold(acc, |acc, item| self.visit_expr(item, acc)),
            ExprKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let acc = self.visit_expr(condition, acc);
                let acc = self.visit_expr(then_branch, acc);
                self.visit_expr(else_branch, acc)
            }
            ExprKind::Lambda(lambda) => dispatch(&self.on_lambda, lambda, acc, |acc| {
                self.visit_expr(&lambda.body, acc)
            }),
            ExprKind::LetBlock(block) => dispatch(&self.on_let_block, block, acc, |acc| {
                let acc = block
                    .declarations
                    .iter()
                    .fold(acc, |acc, decl| self.visit_declaration(decl, acc));
                self.visit_expr(&block.body, acc)
            }),
            ExprKind::Case(case) => {
                let acc = self.visit_expr(&case.scrutinee, acc);
                case.arms.iter().fold(acc, |acc, arm| {
                    dispatch(&self.on_case_arm, arm, acc, |acc| {
                        self.visit_expr(&arm.body, acc)
                    })
                })
            }
            ExprKind::RecordUpdate(update) => {
                dispatch(&self.on_record_update, update, acc, |acc| {
                    update
                        .fields
                        .iter()
                        .fold(acc, |acc, field| self.visit_expr(&field.value, acc))
                })
            }
            ExprKind::Record(fields) => fields
                .iter()
                .fold(acc, |acc, field| self.visit_expr(&field.value, acc)),
            ExprKind::RecordAccess { record, .. } => self.visit_expr(record, acc),
            ExprKind::List(items) | ExprKind::Tuple(items) => items
                .iter()
                .fold(acc, |acc, item| self.visit_expr(item, acc)),
            ExprKind::Parenthesized(inner) | ExprKind::Negation(inner) => {
                self.visit_expr(inner, acc)
            }
            ExprKind::RecordAccessFunction(_) | ExprKind::Literal(_) | ExprKind::Unit => acc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyre_syntax::ast::{CaseExpr, Pattern};

    /// f x = case x of _ -> helper x
    fn sample_file() -> SourceFile {
        SourceFile::new(vec![Declaration::Function(FunctionDecl {
            name: Name::synthetic("f"),
            signature: None,
            args: vec![Pattern::var("x")],
            body: Expr::synthetic(ExprKind::Case(CaseExpr {
                scrutinee: Box::new(Expr::value("x")),
                arms: vec![CaseArm {
                    pattern: Pattern::wildcard(),
                    body: Expr::synthetic(ExprKind::Application(vec![
                        Expr::value("helper"),
                        Expr::value("x"),
                    ])),
                }],
            })),
            range: lyre_syntax::ast::Range::ZERO,
        })])
    }

    #[test]
    fn test_unhooked_walk_passes_accumulator_through() {
        let inspection: Inspection<u32> = Inspection::new();
        assert_eq!(inspection.run(&sample_file(), 7), 7);
    }

    #[test]
    fn test_reference_hook_sees_document_order() {
        let inspection = Inspection {
            on_function_or_value: Some(Hook::post(|value: &ValueRef, mut acc: Vec<String>| {
                acc.push(value.name.as_str().to_string());
                acc
            })),
            ..Inspection::default()
        };
        let order = inspection.run(&sample_file(), Vec::new());
        assert_eq!(order, vec!["x", "helper", "x"]);
    }

    #[test]
    fn test_pre_hook_result_feeds_children() {
        // The pre hook doubles the accumulator before any reference is
        // counted, so references add on top of the doubled value.
        let inspection = Inspection {
            on_file: Some(Hook::pre(|_: &SourceFile, acc: u32| acc * 2)),
            on_function_or_value: Some(Hook::post(|_: &ValueRef, acc: u32| acc + 1)),
            ..Inspection::default()
        };
        assert_eq!(inspection.run(&sample_file(), 3), 9);
    }

    #[test]
    fn test_post_hook_runs_after_children() {
        // Record the function body's references first, then the function
        // post hook's marker.
        let inspection = Inspection {
            on_function: Some(Hook::post(|func: &FunctionDecl, mut acc: Vec<String>| {
                acc.push(format!("fn:{}", func.name.as_str()));
                acc
            })),
            on_function_or_value: Some(Hook::post(|value: &ValueRef, mut acc: Vec<String>| {
                acc.push(value.name.as_str().to_string());
                acc
            })),
            ..Inspection::default()
        };
        let order = inspection.run(&sample_file(), Vec::new());
        assert_eq!(order, vec!["x", "helper", "x", "fn:f"]);
    }

    #[test]
    fn test_inner_hook_can_skip_children() {
        let inspection = Inspection {
            on_function: Some(Hook::inner(
                |_f: &mut dyn FnMut(u32) -> u32, _: &FunctionDecl, acc: u32| acc,
            )),
            on_function_or_value: Some(Hook::post(|_: &ValueRef, acc: u32| acc + 1)),
            ..Inspection::default()
        };
        assert_eq!(inspection.run(&sample_file(), 0), 0);
    }

    #[test]
    fn test_inner_hook_controls_repeat_count() {
        let inspection = Inspection {
            on_function: Some(Hook::inner(
                |f: &mut dyn FnMut(u32) -> u32, _: &FunctionDecl, acc: u32| {
                    let acc = f(acc);
                    f(acc)
                },
            )),
            on_function_or_value: Some(Hook::post(|_: &ValueRef, acc: u32| acc + 1)),
            ..Inspection::default()
        };
        // Three references per pass, two passes.
        assert_eq!(inspection.run(&sample_file(), 0), 6);
    }

    #[test]
    fn test_case_arm_hook_brackets_arm_body() {
        let inspection = Inspection {
            on_case_arm: Some(Hook::inner(
                |f: &mut dyn FnMut(Vec<String>) -> Vec<String>,
                 _: &CaseArm,
                 mut acc: Vec<String>| {
                    acc.push("enter".to_string());
                    let mut acc = f(acc);
                    acc.push("exit".to_string());
                    acc
                },
            )),
            on_function_or_value: Some(Hook::post(|value: &ValueRef, mut acc: Vec<String>| {
                acc.push(value.name.as_str().to_string());
                acc
            })),
            ..Inspection::default()
        };
        let order = inspection.run(&sample_file(), Vec::new());
        // The scrutinee is visited before the arm is entered.
        assert_eq!(order, vec!["x", "enter", "helper", "x", "exit"]);
    }
}
