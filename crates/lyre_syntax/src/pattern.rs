//! Pattern name extraction.
//!
//! Two projections over a pattern tree feed the usage analysis: the names a
//! pattern *binds* (variables it introduces into scope) and the names it
//! *references* (constructors the match itself depends on).

use crate::ast::{Name, Pattern, PatternKind};
use smallvec::SmallVec;

/// Most patterns bind a handful of names at most
pub type NameList = SmallVec<[Name; 4]>;

/// Names bound by a pattern, in source order.
///
/// Covers variable patterns, record field binders, and `as` aliases,
/// recursing through every composite pattern. Wildcards, literals, and
/// constructor heads bind nothing.
pub fn bound_names(pattern: &Pattern) -> NameList {
    let mut out = NameList::new();
    collect_bound(pattern, &mut out);
    out
}

fn collect_bound(pattern: &Pattern, out: &mut NameList) {
    match &pattern.kind {
        PatternKind::Var(name) => out.push(Name::new(name.clone(), pattern.range)),
        PatternKind::Record(fields) => out.extend(fields.iter().cloned()),
        PatternKind::As { pattern: inner, alias } => {
            collect_bound(inner, out);
            out.push(alias.clone());
        }
        PatternKind::Tuple(items) | PatternKind::List(items) => {
            for item in items {
                collect_bound(item, out);
            }
        }
        PatternKind::Cons { head, tail } => {
            collect_bound(head, out);
            collect_bound(tail, out);
        }
        PatternKind::Constructor { args, .. } => {
            for arg in args {
                collect_bound(arg, out);
            }
        }
        PatternKind::Paren(inner) => collect_bound(inner, out),
        PatternKind::Wildcard | PatternKind::Unit | PatternKind::Literal(_) => {}
    }
}

/// Names referenced (not bound) by a pattern, in source order.
///
/// These are the unqualified constructor heads the match itself uses.
/// Qualified constructors belong to other modules and are outside the
/// intra-file analysis, so they are skipped here.
pub fn referenced_names(pattern: &Pattern) -> NameList {
    let mut out = NameList::new();
    collect_referenced(pattern, &mut out);
    out
}

fn collect_referenced(pattern: &Pattern, out: &mut NameList) {
    match &pattern.kind {
        PatternKind::Constructor { module, name, args } => {
            if module.is_empty() {
                out.push(name.clone());
            }
            for arg in args {
                collect_referenced(arg, out);
            }
        }
        PatternKind::Tuple(items) | PatternKind::List(items) => {
            for item in items {
                collect_referenced(item, out);
            }
        }
        PatternKind::Cons { head, tail } => {
            collect_referenced(head, out);
            collect_referenced(tail, out);
        }
        PatternKind::As { pattern: inner, .. } | PatternKind::Paren(inner) => {
            collect_referenced(inner, out)
        }
        PatternKind::Wildcard
        | PatternKind::Unit
        | PatternKind::Var(_)
        | PatternKind::Literal(_)
        | PatternKind::Record(_) => {}
    }
}
