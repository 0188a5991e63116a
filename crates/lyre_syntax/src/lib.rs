//! # lyre_syntax
//!
//! AST surface for Lyre source files.
//!
//! One parsed file is a [`SourceFile`]: an ordered list of declarations over
//! expressions, patterns, and type references, every node carrying the source
//! range it covers. The tree is produced once by the parser and treated as
//! immutable by every downstream consumer (semantic analysis, linting).
//!
//! The [`pattern`] module provides the two projections the usage analysis
//! needs from a pattern: the names it binds and the names it references.

pub mod ast;
pub mod pattern;

pub use ast::*;
pub use pattern::{bound_names, referenced_names, NameList};
