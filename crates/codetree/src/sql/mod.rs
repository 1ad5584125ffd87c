//! SQL fragments.
//!
//! The family is organised around closed capability enums:
//!
//! - [`Expr`]: general expressions (`NULL`, `IS [NOT] x`, `a + b`, values)
//! - [`ValueExpr`]: anything that yields a value (columns, literals,
//!   parameters, routine calls, host values)
//! - [`BoolValueExpr`]: search conditions
//! - [`BoolOpExpr`]: `AND` / `OR` continuations of a condition list
//! - [`ColumnExpr`]: entries of a `RETURNING` list
//! - [`TableExpr`]: relations and joins
//!
//! Identifier names are always double quoted. Qualifiers and aliases are
//! written verbatim.
//!
//! # Example
//! ```
//! use codetree::sql::{
//!     CmpOp, ColumnIdent, ComparisonPredicate, DeleteStatement, Ident, OrdinalParameterSpec,
//! };
//!
//! let stmt = DeleteStatement::new(Ident::new("users")?)
//!     .where_(ComparisonPredicate::new(
//!         ColumnIdent::new("id")?,
//!         CmpOp::Eq,
//!         OrdinalParameterSpec(1),
//!     ))
//!     .returning(ColumnIdent::new("id")?);
//!
//! assert_eq!(
//!     codetree::to_string(&stmt)?,
//!     "DELETE FROM \"users\"\n\tWHERE \"id\" = $1\n\tRETURNING \"id\"",
//! );
//! # Ok::<(), codetree::Error>(())
//! ```

mod delete;
mod ident;
mod join;
mod predicate;
mod value;

pub use delete::{DeleteStatement, ReturningClause, UsingClause};
pub use ident::{
    ColumnExprSlice, ColumnIdent, ColumnIdentSlice, ColumnReference, Ident, Name, NameSlice,
};
pub use join::{JoinCondition, JoinType, TableJoin};
pub use predicate::{BoolValueExprList, CmpOp, ComparisonPredicate, IsPredicate, WhereClause};
pub use value::{
    CastExpr, Coalesce, DynamicParameterSpec, HostValue, Literal, NullIf, OrdinalParameterSpec,
    PositionalParameter, QuantifiedExpr, Quantifier, RoutineInvocation, ValueExprList,
};

use crate::impl_capability;
use crate::node::Node;
use crate::writer::Writer;

/// `NULL`
pub const NULL: Expr = Expr::Null;
/// ` IS NULL`
pub const ISNULL: Expr = Expr::IsNull;
/// ` IS NOT NULL`
pub const ISNOTNULL: Expr = Expr::IsNotNull;
/// `DEFAULT`
pub const DEFAULT: ValueExpr = ValueExpr::Default;
/// Renders nothing.
pub const NOOP: ValueExpr = ValueExpr::NoOp;

/// Renders nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOp;

impl Node for NoOp {
    fn render(&self, _: &mut Writer<'_>) {}
}

/// A single space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceChar;

impl Node for SpaceChar {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(" ");
    }
}

/// A writer line break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewLine;

impl Node for NewLine {
    fn render(&self, w: &mut Writer<'_>) {
        w.new_line();
    }
}

/// A keyword written verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword(pub &'static str);

impl Node for Keyword {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(self.0);
    }
}

/// General expression capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Value(ValueExpr),
    Null,
    /// ` IS NULL`
    IsNull,
    /// ` IS NOT NULL`
    IsNotNull,
    Is(Box<IsExpr>),
    Binary(Box<BinaryExpr>),
    NoOp,
}

impl Node for Expr {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            Expr::Value(x) => x.render(w),
            Expr::Null => w.write("NULL"),
            Expr::IsNull => w.write(" IS NULL"),
            Expr::IsNotNull => w.write(" IS NOT NULL"),
            Expr::Is(x) => x.render(w),
            Expr::Binary(x) => x.render(w),
            Expr::NoOp => {}
        }
    }
}

impl_capability!(Expr {
    ValueExpr => Value,
    IsExpr => Is,
    BinaryExpr => Binary,
    ColumnIdent => Value,
    Literal => Value,
    PositionalParameter => Value,
    OrdinalParameterSpec => Value,
    Coalesce => Value,
    NullIf => Value,
});

impl From<NoOp> for Expr {
    fn from(_: NoOp) -> Self {
        Expr::NoOp
    }
}

/// ` IS x` or ` IS NOT x`, appended to whatever precedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsExpr {
    pub not: bool,
    pub x: Expr,
}

impl IsExpr {
    pub fn new(x: impl Into<Expr>) -> Self {
        Self {
            not: false,
            x: x.into(),
        }
    }

    pub fn not(x: impl Into<Expr>) -> Self {
        Self {
            not: true,
            x: x.into(),
        }
    }
}

impl Node for IsExpr {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(if self.not { " IS NOT " } else { " IS " });
        self.x.render(w);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
        }
    }
}

/// `x + y`, `x - y`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub x: Expr,
    pub op: BinaryOp,
    pub y: Expr,
}

impl BinaryExpr {
    pub fn new(x: impl Into<Expr>, op: BinaryOp, y: impl Into<Expr>) -> Self {
        Self {
            x: x.into(),
            op,
            y: y.into(),
        }
    }
}

impl Node for BinaryExpr {
    fn render(&self, w: &mut Writer<'_>) {
        self.x.render(w);
        w.write(" ");
        w.write(self.op.as_str());
        w.write(" ");
        self.y.render(w);
    }
}

/// Value expression capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueExpr {
    Column(ColumnIdent),
    Literal(Literal),
    DynamicParam(DynamicParameterSpec),
    OrdinalParam(OrdinalParameterSpec),
    Positional(PositionalParameter),
    Cast(Box<CastExpr>),
    Routine(RoutineInvocation),
    Coalesce(Box<Coalesce>),
    NullIf(Box<NullIf>),
    Quantified(Box<QuantifiedExpr>),
    Host(HostValue),
    List(ValueExprList),
    Default,
    NoOp,
}

impl Node for ValueExpr {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            ValueExpr::Column(x) => x.render(w),
            ValueExpr::Literal(x) => x.render(w),
            ValueExpr::DynamicParam(x) => x.render(w),
            ValueExpr::OrdinalParam(x) => x.render(w),
            ValueExpr::Positional(x) => x.render(w),
            ValueExpr::Cast(x) => x.render(w),
            ValueExpr::Routine(x) => x.render(w),
            ValueExpr::Coalesce(x) => x.render(w),
            ValueExpr::NullIf(x) => x.render(w),
            ValueExpr::Quantified(x) => x.render(w),
            ValueExpr::Host(x) => x.render(w),
            ValueExpr::List(x) => x.render(w),
            ValueExpr::Default => w.write("DEFAULT"),
            ValueExpr::NoOp => {}
        }
    }
}

impl_capability!(ValueExpr {
    ColumnIdent => Column,
    Literal => Literal,
    DynamicParameterSpec => DynamicParam,
    OrdinalParameterSpec => OrdinalParam,
    PositionalParameter => Positional,
    CastExpr => Cast,
    RoutineInvocation => Routine,
    Coalesce => Coalesce,
    NullIf => NullIf,
    QuantifiedExpr => Quantified,
    HostValue => Host,
    ValueExprList => List,
});

impl From<NoOp> for ValueExpr {
    fn from(_: NoOp) -> Self {
        ValueExpr::NoOp
    }
}

/// Column expression capability: entries of a `RETURNING` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnExpr {
    Column(ColumnIdent),
    Coalesce(Box<Coalesce>),
}

impl Node for ColumnExpr {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            ColumnExpr::Column(x) => x.render(w),
            ColumnExpr::Coalesce(x) => x.render(w),
        }
    }
}

impl_capability!(ColumnExpr {
    ColumnIdent => Column,
    Coalesce => Coalesce,
});

/// Boolean value expression capability: a search condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolValueExpr {
    Column(ColumnIdent),
    Comparison(Box<ComparisonPredicate>),
    Is(Box<IsPredicate>),
    List(Box<BoolValueExprList>),
    NoOp,
}

impl Node for BoolValueExpr {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            BoolValueExpr::Column(x) => x.render(w),
            BoolValueExpr::Comparison(x) => x.render(w),
            BoolValueExpr::Is(x) => x.render(w),
            BoolValueExpr::List(x) => x.render(w),
            BoolValueExpr::NoOp => {}
        }
    }
}

impl_capability!(BoolValueExpr {
    ColumnIdent => Column,
    ComparisonPredicate => Comparison,
    IsPredicate => Is,
    BoolValueExprList => List,
});

impl From<NoOp> for BoolValueExpr {
    fn from(_: NoOp) -> Self {
        BoolValueExpr::NoOp
    }
}

/// A continuation of a condition list: `AND [NOT] x` or `OR [NOT] x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolOpExpr {
    And { not: bool, operand: BoolValueExpr },
    Or { not: bool, operand: BoolValueExpr },
}

impl BoolOpExpr {
    pub fn and(operand: impl Into<BoolValueExpr>) -> Self {
        BoolOpExpr::And {
            not: false,
            operand: operand.into(),
        }
    }

    pub fn and_not(operand: impl Into<BoolValueExpr>) -> Self {
        BoolOpExpr::And {
            not: true,
            operand: operand.into(),
        }
    }

    pub fn or(operand: impl Into<BoolValueExpr>) -> Self {
        BoolOpExpr::Or {
            not: false,
            operand: operand.into(),
        }
    }

    pub fn or_not(operand: impl Into<BoolValueExpr>) -> Self {
        BoolOpExpr::Or {
            not: true,
            operand: operand.into(),
        }
    }
}

impl Node for BoolOpExpr {
    fn render(&self, w: &mut Writer<'_>) {
        let (keyword, operand) = match self {
            BoolOpExpr::And { not: false, operand } => ("AND ", operand),
            BoolOpExpr::And { not: true, operand } => ("AND NOT ", operand),
            BoolOpExpr::Or { not: false, operand } => ("OR ", operand),
            BoolOpExpr::Or { not: true, operand } => ("OR NOT ", operand),
        };
        w.write(keyword);
        operand.render(w);
    }
}

/// Table expression capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableExpr {
    Ident(Ident),
    Join(Box<TableJoin>),
}

impl Node for TableExpr {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            TableExpr::Ident(x) => x.render(w),
            TableExpr::Join(x) => x.render(w),
        }
    }
}

impl_capability!(TableExpr {
    Ident => Ident,
    TableJoin => Join,
});

#[cfg(test)]
mod tests;
