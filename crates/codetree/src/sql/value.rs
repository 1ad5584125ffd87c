use super::ValueExpr;
use super::ident::render_leading_comma;
use crate::go;
use crate::node::Node;
use crate::writer::Writer;
use std::borrow::Cow;

/// A value written verbatim: `42`, `'text'`, `now()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal(pub Cow<'static, str>);

impl Literal {
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }
}

impl Node for Literal {
    fn render(&self, w: &mut Writer<'_>) {
        w.write_raw(&self.0);
    }
}

/// `?`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynamicParameterSpec;

impl Node for DynamicParameterSpec {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("?");
    }
}

/// A PostgreSQL ordinal parameter: `$N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalParameterSpec(pub u32);

impl Node for OrdinalParameterSpec {
    fn render(&self, w: &mut Writer<'_>) {
        render_dollar(w, self.0);
    }
}

/// Same output as [`OrdinalParameterSpec`], usable as a general expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalParameter(pub u32);

impl Node for PositionalParameter {
    fn render(&self, w: &mut Writer<'_>) {
        render_dollar(w, self.0);
    }
}

fn render_dollar(w: &mut Writer<'_>, n: u32) {
    w.write("$");
    w.write(&n.to_string());
}

/// `expr::type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastExpr {
    pub expr: ValueExpr,
    pub typ: String,
}

impl CastExpr {
    pub fn new(expr: impl Into<ValueExpr>, typ: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            typ: typ.into(),
        }
    }
}

impl Node for CastExpr {
    fn render(&self, w: &mut Writer<'_>) {
        self.expr.render(w);
        w.write("::");
        w.write(&self.typ);
    }
}

/// A function call: `name(a, b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineInvocation {
    pub name: String,
    pub args: Vec<ValueExpr>,
}

impl RoutineInvocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<ValueExpr>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Node for RoutineInvocation {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(&self.name);
        w.write("(");
        render_args(w, &self.args);
        w.write(")");
    }
}

fn render_args(w: &mut Writer<'_>, args: &[ValueExpr]) {
    for (i, a) in args.iter().enumerate() {
        if i > 0 {
            w.write(", ");
        }
        a.render(w);
    }
}

/// `COALESCE(a, b, ...)`. The first two arguments are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coalesce {
    pub a: ValueExpr,
    pub b: ValueExpr,
    pub additional: Vec<ValueExpr>,
}

impl Coalesce {
    pub fn new(a: impl Into<ValueExpr>, b: impl Into<ValueExpr>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            additional: Vec::new(),
        }
    }

    pub fn additional(mut self, x: impl Into<ValueExpr>) -> Self {
        self.additional.push(x.into());
        self
    }
}

impl Node for Coalesce {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("COALESCE(");
        self.a.render(w);
        w.write(", ");
        self.b.render(w);
        for x in &self.additional {
            w.write(", ");
            x.render(w);
        }
        w.write(")");
    }
}

/// `NULLIF(value, expr)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullIf {
    pub value: ValueExpr,
    pub expr: ValueExpr,
}

impl NullIf {
    pub fn new(value: impl Into<ValueExpr>, expr: impl Into<ValueExpr>) -> Self {
        Self {
            value: value.into(),
            expr: expr.into(),
        }
    }
}

impl Node for NullIf {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("NULLIF(");
        self.value.render(w);
        w.write(", ");
        self.expr.render(w);
        w.write(")");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Any,
    Some,
    All,
}

impl Quantifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantifier::Any => "ANY",
            Quantifier::Some => "SOME",
            Quantifier::All => "ALL",
        }
    }
}

/// `ANY(expr)`, `SOME(expr)`, `ALL(expr)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantifiedExpr {
    pub quantifier: Quantifier,
    pub expr: ValueExpr,
}

impl QuantifiedExpr {
    pub fn new(quantifier: Quantifier, expr: impl Into<ValueExpr>) -> Self {
        Self {
            quantifier,
            expr: expr.into(),
        }
    }
}

impl Node for QuantifiedExpr {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(self.quantifier.as_str());
        w.write("(");
        self.expr.render(w);
        w.write(")");
    }
}

/// Go code standing where a SQL value is expected.
///
/// The expression is written as Go source. Wrap it in
/// [`go::RawStringInsertExpr`] (see [`HostValue::spliced`]) when the SQL
/// text itself is being emitted inside a Go raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostValue(pub go::Expr);

impl HostValue {
    pub fn new(value: impl Into<go::Expr>) -> Self {
        Self(value.into())
    }

    /// Close the surrounding raw string, concatenate `value`, reopen it.
    pub fn spliced(value: impl Into<go::Expr>) -> Self {
        Self::new(go::RawStringInsertExpr::new(value))
    }
}

impl Node for HostValue {
    fn render(&self, w: &mut Writer<'_>) {
        self.0.render(w);
    }
}

/// Value expressions separated by a line break and `, `.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueExprList(pub Vec<ValueExpr>);

impl Node for ValueExprList {
    fn render(&self, w: &mut Writer<'_>) {
        render_leading_comma(w, &self.0);
    }
}
