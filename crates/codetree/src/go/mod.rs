//! Go source fragments.
//!
//! Node kinds are grouped into closed capability enums, each usable in the
//! structural positions Go allows for it:
//!
//! - [`Expr`]: literals, composite literals, identifiers, operators, calls
//! - [`Stmt`]: statements and statement idioms
//! - [`Decl`]: top-level declarations
//! - [`Spec`]: elements of `var`/`const`/`import` declarations
//! - [`Comment`]: comments and blank lines
//! - [`Type`]: type expressions
//!
//! Every concrete node converts into the capabilities it belongs to with
//! `From`, so builders accept `impl Into<Expr>` and friends.
//!
//! # Example
//! ```
//! use codetree::go::{IntLit, SliceLit, Type};
//!
//! let lit = SliceLit::new(vec![IntLit(1).into(), IntLit(2).into()])
//!     .typ(Type::slice(Type::name("int")))
//!     .compact(true);
//! assert_eq!(codetree::to_string(&lit)?, "[]int{1, 2}");
//! # Ok::<(), codetree::Error>(())
//! ```

mod decls;
mod exprs;
mod literals;
mod stmts;
mod types;

pub use decls::{DeclToken, FuncDecl, GenDecl, ImportSpec, LineComment, ValueSpec};
pub use exprs::{
    BinaryExpr, BinaryOp, CallExpr, ExprList, Ident, RawStringInsertExpr, SelectorExpr, StarExpr,
    UnaryExpr, UnaryOp,
};
pub use literals::{
    FieldElement, FuncLit, IntLit, KeyElement, MapLit, RawStringLit, RuneLit, SliceLit, StringLit,
    StructLit, ValueLit,
};
pub use stmts::{
    AssignStmt, AssignToken, BlockStmt, ExprStmt, IfErrReturn, IfStmt, NL, NoOp, ReturnStmt,
    StmtList,
};
pub use types::{FuncType, Param, Type};

use crate::impl_capability;
use crate::node::Node;
use crate::writer::Writer;
use std::borrow::Cow;

/// `...`
pub const ELLIPSIS: Expr = Expr::Value(ValueLit(Cow::Borrowed("...")));
/// `true`
pub const TRUE: Expr = Expr::Value(ValueLit(Cow::Borrowed("true")));
/// `false`
pub const FALSE: Expr = Expr::Value(ValueLit(Cow::Borrowed("false")));
/// `nil`
pub const NIL: Expr = Expr::Value(ValueLit(Cow::Borrowed("nil")));

/// Expression capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Value(ValueLit),
    Int(IntLit),
    Rune(RuneLit),
    String(StringLit),
    RawString(RawStringLit),
    Func(Box<FuncLit>),
    Slice(SliceLit),
    Struct(StructLit),
    Map(MapLit),
    Key(Box<KeyElement>),
    Ident(Ident),
    Selector(Box<SelectorExpr>),
    Call(Box<CallExpr>),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
    Star(Box<StarExpr>),
    RawStringInsert(Box<RawStringInsertExpr>),
    NoOp,
}

impl Node for Expr {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            Expr::Value(x) => x.render(w),
            Expr::Int(x) => x.render(w),
            Expr::Rune(x) => x.render(w),
            Expr::String(x) => x.render(w),
            Expr::RawString(x) => x.render(w),
            Expr::Func(x) => x.render(w),
            Expr::Slice(x) => x.render(w),
            Expr::Struct(x) => x.render(w),
            Expr::Map(x) => x.render(w),
            Expr::Key(x) => x.render(w),
            Expr::Ident(x) => x.render(w),
            Expr::Selector(x) => x.render(w),
            Expr::Call(x) => x.render(w),
            Expr::Unary(x) => x.render(w),
            Expr::Binary(x) => x.render(w),
            Expr::Star(x) => x.render(w),
            Expr::RawStringInsert(x) => x.render(w),
            Expr::NoOp => {}
        }
    }
}

impl_capability!(Expr {
    ValueLit => Value,
    IntLit => Int,
    RuneLit => Rune,
    StringLit => String,
    RawStringLit => RawString,
    FuncLit => Func,
    SliceLit => Slice,
    StructLit => Struct,
    MapLit => Map,
    KeyElement => Key,
    Ident => Ident,
    SelectorExpr => Selector,
    CallExpr => Call,
    UnaryExpr => Unary,
    BinaryExpr => Binary,
    StarExpr => Star,
    RawStringInsertExpr => RawStringInsert,
});

impl From<NoOp> for Expr {
    fn from(_: NoOp) -> Self {
        Expr::NoOp
    }
}

/// Statement capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expr(ExprStmt),
    Assign(AssignStmt),
    Return(ReturnStmt),
    Block(BlockStmt),
    If(Box<IfStmt>),
    List(StmtList),
    Decl(Box<Decl>),
    Comment(Comment),
    IfErrReturn,
    NL,
    NoOp,
}

impl Node for Stmt {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            Stmt::Expr(x) => x.render(w),
            Stmt::Assign(x) => x.render(w),
            Stmt::Return(x) => x.render(w),
            Stmt::Block(x) => x.render(w),
            Stmt::If(x) => x.render(w),
            Stmt::List(x) => x.render(w),
            Stmt::Decl(x) => x.render(w),
            Stmt::Comment(x) => x.render(w),
            Stmt::IfErrReturn => IfErrReturn.render(w),
            Stmt::NL => NL.render(w),
            Stmt::NoOp => {}
        }
    }
}

impl_capability!(Stmt {
    ExprStmt => Expr,
    AssignStmt => Assign,
    ReturnStmt => Return,
    BlockStmt => Block,
    IfStmt => If,
    StmtList => List,
    Decl => Decl,
    Comment => Comment,
    LineComment => Comment,
});

impl From<GenDecl> for Stmt {
    fn from(decl: GenDecl) -> Self {
        Stmt::Decl(Box::new(decl.into()))
    }
}

impl From<FuncDecl> for Stmt {
    fn from(decl: FuncDecl) -> Self {
        Stmt::Decl(Box::new(decl.into()))
    }
}

impl From<IfErrReturn> for Stmt {
    fn from(_: IfErrReturn) -> Self {
        Stmt::IfErrReturn
    }
}

impl From<NL> for Stmt {
    fn from(_: NL) -> Self {
        Stmt::NL
    }
}

impl From<NoOp> for Stmt {
    fn from(_: NoOp) -> Self {
        Stmt::NoOp
    }
}

/// Declaration capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Gen(GenDecl),
    Func(Box<FuncDecl>),
    NoOp,
}

impl Node for Decl {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            Decl::Gen(x) => x.render(w),
            Decl::Func(x) => x.render(w),
            Decl::NoOp => {}
        }
    }
}

impl_capability!(Decl {
    GenDecl => Gen,
    FuncDecl => Func,
});

impl From<NoOp> for Decl {
    fn from(_: NoOp) -> Self {
        Decl::NoOp
    }
}

/// Spec-element capability: one entry of a `var`, `const` or `import` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    Value(ValueSpec),
    Import(ImportSpec),
    NoOp,
}

impl Node for Spec {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            Spec::Value(x) => x.render(w),
            Spec::Import(x) => x.render(w),
            Spec::NoOp => {}
        }
    }
}

impl_capability!(Spec {
    ValueSpec => Value,
    ImportSpec => Import,
});

impl From<NoOp> for Spec {
    fn from(_: NoOp) -> Self {
        Spec::NoOp
    }
}

/// Comment capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comment {
    Line(LineComment),
    NL,
    NoOp,
}

impl Node for Comment {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            Comment::Line(x) => x.render(w),
            Comment::NL => NL.render(w),
            Comment::NoOp => {}
        }
    }
}

impl_capability!(Comment {
    LineComment => Line,
});

impl From<NL> for Comment {
    fn from(_: NL) -> Self {
        Comment::NL
    }
}

impl From<NoOp> for Comment {
    fn from(_: NoOp) -> Self {
        Comment::NoOp
    }
}
