//! Lyre AST node types.
//!
//! This module defines the AST (Abstract Syntax Tree) for one Lyre source
//! file. The tree is an owned, immutable value: the parser builds it once
//! and every consumer reads it by structural matching. No mutating API is
//! exported.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Source position, 1-indexed row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { row: 1, column: 1 }
    }
}

/// Source range `[start, end)`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Stub range for synthesized nodes
    pub const ZERO: Self = Self {
        start: Position { row: 1, column: 1 },
        end: Position { row: 1, column: 1 },
    };

    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Build a range on a single row from column `start` to column `end`
    pub const fn on_row(row: u32, start: u32, end: u32) -> Self {
        Self {
            start: Position { row, column: start },
            end: Position { row, column: end },
        }
    }
}

/// An identifier occurrence: its text and where it appears
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    pub text: CompactString,
    pub range: Range,
}

impl Name {
    pub fn new(text: impl Into<CompactString>, range: Range) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    /// A name with a stub range, for synthesized nodes and tests
    pub fn synthetic(text: impl Into<CompactString>) -> Self {
        Self::new(text, Range::ZERO)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

/// A module path prefix on a qualified reference (`List.map` -> `["List"]`).
/// Empty for bare references.
pub type ModulePath = Vec<CompactString>;

/// One parsed Lyre source file: an ordered list of module-level declarations
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceFile {
    pub declarations: Vec<Declaration>,
}

impl SourceFile {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }
}

/// A declaration, at module level or inside a `let` block
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Destructuring(Destructuring),
    TypeAlias(TypeAliasDecl),
    CustomType(CustomTypeDecl),
}

/// A named function or value declaration (`f x = ...`, `answer = 42`)
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Name,
    /// Optional type signature written directly above the declaration
    pub signature: Option<TypeAnnotation>,
    /// Argument patterns; empty for a plain value binding
    pub args: Vec<Pattern>,
    pub body: Expr,
    pub range: Range,
}

/// A pattern binding (`(a, b) = pair`)
#[derive(Debug, Clone, PartialEq)]
pub struct Destructuring {
    pub pattern: Pattern,
    pub expr: Expr,
    pub range: Range,
}

/// A type alias declaration (`alias Point = { x : Int, y : Int }`)
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDecl {
    pub name: Name,
    pub type_params: Vec<Name>,
    pub aliased: TypeRef,
    pub range: Range,
}

/// A custom (sum) type declaration with its constructor variants
#[derive(Debug, Clone, PartialEq)]
pub struct CustomTypeDecl {
    pub name: Name,
    pub type_params: Vec<Name>,
    pub variants: Vec<TypeVariant>,
    pub range: Range,
}

/// One constructor variant of a custom type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeVariant {
    pub name: Name,
    pub args: Vec<TypeRef>,
}

/// A type signature (`inc : Int -> Int`)
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub name: Name,
    pub type_ref: TypeRef,
    pub range: Range,
}

/// An expression node: its kind plus the source range it covers
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub range: Range,
}

impl Expr {
    pub fn new(kind: ExprKind, range: Range) -> Self {
        Self { kind, range }
    }

    /// An expression with a stub range, for synthesized nodes and tests
    pub fn synthetic(kind: ExprKind) -> Self {
        Self::new(kind, Range::ZERO)
    }

    /// A bare value reference (`foo`)
    pub fn value(name: impl Into<CompactString>) -> Self {
        Self::synthetic(ExprKind::FunctionOrValue(ValueRef {
            module: ModulePath::new(),
            name: Name::synthetic(name),
        }))
    }

    /// A module-qualified value reference (`List.map`)
    pub fn qualified(module: &[&str], name: impl Into<CompactString>) -> Self {
        Self::synthetic(ExprKind::FunctionOrValue(ValueRef {
            module: module.iter().map(|m| CompactString::from(*m)).collect(),
            name: Name::synthetic(name),
        }))
    }

    pub fn int(value: i64) -> Self {
        Self::synthetic(ExprKind::Literal(Literal::Int(value)))
    }
}

/// Expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Reference to a function, value, or constructor, possibly qualified
    FunctionOrValue(ValueRef),
    /// An operator used in prefix position (`(+) 1 2`)
    PrefixOperator(Name),
    /// Binary operator application (`a + b`)
    OperatorApplication(OperatorApplication),
    /// Function application (`f x y`)
    Application(Vec<Expr>),
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Lambda(Lambda),
    LetBlock(LetBlock),
    Case(CaseExpr),
    /// Record update (`{ base | field = value }`)
    RecordUpdate(RecordUpdate),
    /// Record literal (`{ x = 1, y = 2 }`)
    Record(Vec<RecordField>),
    /// Field access (`point.x`)
    RecordAccess { record: Box<Expr>, field: Name },
    /// Field access function (`.x`)
    RecordAccessFunction(Name),
    List(Vec<Expr>),
    Tuple(Vec<Expr>),
    Parenthesized(Box<Expr>),
    Negation(Box<Expr>),
    Literal(Literal),
    Unit,
}

/// A reference to a function, value, or constructor, possibly qualified
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRef {
    /// Module prefix; empty for a bare reference
    pub module: ModulePath,
    pub name: Name,
}

/// Binary operator application payload
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorApplication {
    pub op: Name,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// An anonymous function (`\x -> x + 1`)
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub args: Vec<Pattern>,
    pub body: Box<Expr>,
}

/// A `let ... in ...` block
#[derive(Debug, Clone, PartialEq)]
pub struct LetBlock {
    pub declarations: Vec<Declaration>,
    pub body: Box<Expr>,
}

/// A `case ... of ...` expression
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    pub scrutinee: Box<Expr>,
    pub arms: Vec<CaseArm>,
}

/// One arm of a case expression: a pattern and the body it guards
#[derive(Debug, Clone, PartialEq)]
pub struct CaseArm {
    pub pattern: Pattern,
    pub body: Expr,
}

/// Record update expression payload
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    /// The record being updated; always a bare name in Lyre
    pub base: Name,
    pub fields: Vec<RecordField>,
}

/// One `name = value` field in a record literal or update
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: Name,
    pub value: Expr,
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Char(char),
}

/// A pattern node: its kind plus the source range it covers
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub kind: PatternKind,
    pub range: Range,
}

impl Pattern {
    pub fn new(kind: PatternKind, range: Range) -> Self {
        Self { kind, range }
    }

    /// A pattern with a stub range, for synthesized nodes and tests
    pub fn synthetic(kind: PatternKind) -> Self {
        Self::new(kind, Range::ZERO)
    }

    /// A variable pattern (`x`)
    pub fn var(name: impl Into<CompactString>) -> Self {
        Self::synthetic(PatternKind::Var(name.into()))
    }

    pub fn wildcard() -> Self {
        Self::synthetic(PatternKind::Wildcard)
    }
}

/// Pattern kinds
#[derive(Debug, Clone, PartialEq)]
pub enum PatternKind {
    /// `_`
    Wildcard,
    /// `()`
    Unit,
    /// A variable binder
    Var(CompactString),
    Literal(Literal),
    Tuple(Vec<Pattern>),
    List(Vec<Pattern>),
    /// `head :: tail`
    Cons { head: Box<Pattern>, tail: Box<Pattern> },
    /// Constructor match (`Just x`), possibly qualified (`Maybe.Just x`)
    Constructor {
        module: ModulePath,
        name: Name,
        args: Vec<Pattern>,
    },
    /// Record destructuring (`{ x, y }`); each field name is a binder
    Record(Vec<Name>),
    /// `pattern as alias`
    As { pattern: Box<Pattern>, alias: Name },
    Paren(Box<Pattern>),
}

/// A type reference node: its kind plus the source range it covers
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    pub kind: TypeRefKind,
    pub range: Range,
}

impl TypeRef {
    pub fn new(kind: TypeRefKind, range: Range) -> Self {
        Self { kind, range }
    }

    /// A type reference with a stub range, for synthesized nodes and tests
    pub fn synthetic(kind: TypeRefKind) -> Self {
        Self::new(kind, Range::ZERO)
    }

    /// A bare, argument-free named type (`Int`)
    pub fn named(name: impl Into<CompactString>) -> Self {
        Self::synthetic(TypeRefKind::Named {
            module: ModulePath::new(),
            name: Name::synthetic(name),
            args: Vec::new(),
        })
    }
}

/// Type reference kinds
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRefKind {
    /// A named type, possibly qualified and applied to arguments
    Named {
        module: ModulePath,
        name: Name,
        args: Vec<TypeRef>,
    },
    /// A type variable (`a`)
    Var(CompactString),
    /// `argument -> result`
    Function {
        argument: Box<TypeRef>,
        result: Box<TypeRef>,
    },
    Tuple(Vec<TypeRef>),
    Record(Vec<(Name, TypeRef)>),
    Unit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_ordering() {
        let a = Range::on_row(1, 1, 4);
        let b = Range::on_row(2, 1, 4);
        assert!(a < b);
        assert!(Range::on_row(3, 2, 5) < Range::on_row(3, 4, 5));
    }

    #[test]
    fn test_name_helpers() {
        let name = Name::new("foo", Range::on_row(2, 1, 4));
        assert_eq!(name.as_str(), "foo");
        assert_eq!(Name::synthetic("bar").range, Range::ZERO);
    }

    #[test]
    fn test_expr_value_is_unqualified() {
        let expr = Expr::value("foo");
        match expr.kind {
            ExprKind::FunctionOrValue(ref value) => {
                assert!(value.module.is_empty());
                assert_eq!(value.name.as_str(), "foo");
            }
            _ => panic!("expected FunctionOrValue"),
        }
    }

    #[test]
    fn test_expr_qualified_keeps_module_path() {
        let expr = Expr::qualified(&["List"], "map");
        match expr.kind {
            ExprKind::FunctionOrValue(ref value) => {
                assert_eq!(value.module.len(), 1);
                assert_eq!(value.module[0], "List");
            }
            _ => panic!("expected FunctionOrValue"),
        }
    }
}
