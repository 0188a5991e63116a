//! Semantic analysis for Lyre source trees.
//!
//! The crate is built from three layers:
//!
//! - [`inspector`]: a generic single-pass tree walker driven by a hook
//!   table. Hooks fold an accumulator through the tree in document order.
//! - [`scope`]: a pure scope stack modelling lexical frames, name masking,
//!   and per-binding usage counts.
//! - [`usage`]: the wiring of the two, producing unused-binding reports
//!   for one file.
//!
//! ```
//! use lyre_semantic::usage::analyze;
//! use lyre_syntax::ast::{Declaration, Expr, FunctionDecl, Name, Range, SourceFile};
//!
//! let file = SourceFile::new(vec![Declaration::Function(FunctionDecl {
//!     name: Name::new("unused", Range::on_row(1, 1, 7)),
//!     signature: None,
//!     args: vec![],
//!     body: Expr::int(1),
//!     range: Range::on_row(1, 1, 12),
//! })]);
//!
//! let analysis = analyze(&file);
//! assert_eq!(analysis.unused_top_level()[0].name, "unused");
//! ```

pub mod inspector;
pub mod scope;
pub mod usage;

pub use inspector::{Hook, Inspection};
pub use scope::{Bindings, ScopeEntry, ScopeStack, UnusedBinding, VariableKind};
pub use usage::{analyze, usage_inspection, UsageAnalysis};
