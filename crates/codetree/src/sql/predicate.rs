use super::{BoolOpExpr, BoolValueExpr, ValueExpr};
use crate::node::Node;
use crate::writer::Writer;

/// `WHERE <search condition>`, or nothing without a condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    pub search_condition: Option<BoolValueExpr>,
}

impl WhereClause {
    pub fn new(cond: impl Into<BoolValueExpr>) -> Self {
        Self {
            search_condition: Some(cond.into()),
        }
    }
}

impl Node for WhereClause {
    fn render(&self, w: &mut Writer<'_>) {
        if let Some(cond) = &self.search_condition {
            w.write("WHERE ");
            cond.render(w);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CmpOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::NotEq => "<>",
            CmpOp::Lt => "<",
            CmpOp::LtEq => "<=",
            CmpOp::Gt => ">",
            CmpOp::GtEq => ">=",
        }
    }
}

/// `lhs <op> rhs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPredicate {
    pub lhs: ValueExpr,
    pub op: CmpOp,
    pub rhs: ValueExpr,
}

impl ComparisonPredicate {
    pub fn new(lhs: impl Into<ValueExpr>, op: CmpOp, rhs: impl Into<ValueExpr>) -> Self {
        Self {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }
}

impl Node for ComparisonPredicate {
    fn render(&self, w: &mut Writer<'_>) {
        self.lhs.render(w);
        w.write(" ");
        w.write(self.op.as_str());
        w.write(" ");
        self.rhs.render(w);
    }
}

/// `x IS NULL` / `x IS NOT NULL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsPredicate {
    pub x: ValueExpr,
    pub not: bool,
}

impl IsPredicate {
    pub fn null(x: impl Into<ValueExpr>) -> Self {
        Self {
            x: x.into(),
            not: false,
        }
    }

    pub fn not_null(x: impl Into<ValueExpr>) -> Self {
        Self {
            x: x.into(),
            not: true,
        }
    }
}

impl Node for IsPredicate {
    fn render(&self, w: &mut Writer<'_>) {
        self.x.render(w);
        w.write(if self.not { " IS NOT NULL" } else { " IS NULL" });
    }
}

/// An initial condition followed by `AND`/`OR` continuations.
///
/// Operators are written in the order given; nothing is regrouped or
/// simplified.
///
/// - compact (default): `(a AND b OR NOT c)` on one line, parentheses only
///   when `parenthesized` is set
/// - list style: one operand per line, continuation lines led by their
///   operator; when parenthesized the operands are indented between `(`
///   and `)` lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolValueExprList {
    pub parenthesized: bool,
    pub initial: BoolValueExpr,
    pub items: Vec<BoolOpExpr>,
    pub list_style: bool,
}

impl BoolValueExprList {
    pub fn new(initial: impl Into<BoolValueExpr>) -> Self {
        Self {
            parenthesized: false,
            initial: initial.into(),
            items: Vec::new(),
            list_style: false,
        }
    }

    pub fn item(mut self, item: BoolOpExpr) -> Self {
        self.items.push(item);
        self
    }

    pub fn parenthesized(mut self, parenthesized: bool) -> Self {
        self.parenthesized = parenthesized;
        self
    }

    pub fn list_style(mut self, list_style: bool) -> Self {
        self.list_style = list_style;
        self
    }

    fn render_list(&self, w: &mut Writer<'_>) {
        if self.parenthesized {
            w.write("(");
            w.indent();
            w.new_line();
        }
        self.initial.render(w);
        for x in &self.items {
            w.new_line();
            x.render(w);
        }
        if self.parenthesized {
            w.unindent();
            w.new_line();
            w.write(")");
        }
    }

    fn render_compact(&self, w: &mut Writer<'_>) {
        if self.parenthesized {
            w.write("(");
        }
        self.initial.render(w);
        for x in &self.items {
            w.write(" ");
            x.render(w);
        }
        if self.parenthesized {
            w.write(")");
        }
    }
}

impl Node for BoolValueExprList {
    fn render(&self, w: &mut Writer<'_>) {
        if self.list_style {
            self.render_list(w);
        } else {
            self.render_compact(w);
        }
    }
}
