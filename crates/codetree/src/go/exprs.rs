use super::Expr;
use crate::node::Node;
use crate::writer::Writer;

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(pub String);

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Node for Ident {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(&self.0);
    }
}

/// A comma separated list of expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExprList(pub Vec<Expr>);

impl ExprList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Node for ExprList {
    fn render(&self, w: &mut Writer<'_>) {
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                w.write(", ");
            }
            x.render(w);
        }
    }
}

impl From<Vec<Expr>> for ExprList {
    fn from(list: Vec<Expr>) -> Self {
        Self(list)
    }
}

impl From<Expr> for ExprList {
    fn from(x: Expr) -> Self {
        Self(vec![x])
    }
}

/// `x.sel`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorExpr {
    pub x: Expr,
    pub sel: Ident,
}

impl SelectorExpr {
    pub fn new(x: impl Into<Expr>, sel: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            sel: Ident::new(sel),
        }
    }
}

impl Node for SelectorExpr {
    fn render(&self, w: &mut Writer<'_>) {
        self.x.render(w);
        w.write(".");
        self.sel.render(w);
    }
}

/// `fun(args...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub fun: Expr,
    pub args: ExprList,
    /// Spread the last argument: `f(xs...)`.
    pub ellipsis: bool,
}

impl CallExpr {
    pub fn new(fun: impl Into<Expr>, args: Vec<Expr>) -> Self {
        Self {
            fun: fun.into(),
            args: ExprList(args),
            ellipsis: false,
        }
    }

    pub fn ellipsis(mut self, ellipsis: bool) -> Self {
        self.ellipsis = ellipsis;
        self
    }
}

impl Node for CallExpr {
    fn render(&self, w: &mut Writer<'_>) {
        self.fun.render(w);
        w.write("(");
        self.args.render(w);
        if self.ellipsis {
            w.write("...");
        }
        w.write(")");
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
    Addr,
    Recv,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
            UnaryOp::Addr => "&",
            UnaryOp::Recv => "<-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub x: Expr,
}

impl UnaryExpr {
    pub fn new(op: UnaryOp, x: impl Into<Expr>) -> Self {
        Self { op, x: x.into() }
    }
}

impl Node for UnaryExpr {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(self.op.as_str());
        self.x.render(w);
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Quo,
    Rem,
    Eql,
    Neq,
    Lss,
    Gtr,
    Leq,
    Geq,
    LAnd,
    LOr,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Quo => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eql => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Lss => "<",
            BinaryOp::Gtr => ">",
            BinaryOp::Leq => "<=",
            BinaryOp::Geq => ">=",
            BinaryOp::LAnd => "&&",
            BinaryOp::LOr => "||",
        }
    }
}

/// `x op y`
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

/// `*x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarExpr {
    pub x: Expr,
}

impl StarExpr {
    pub fn new(x: impl Into<Expr>) -> Self {
        Self { x: x.into() }
    }
}

impl Node for StarExpr {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("*");
        self.x.render(w);
    }
}

/// Splices an expression into the middle of a raw string literal.
///
/// Renders as `` ` + x + ` ``: the surrounding raw string is closed, the
/// expression concatenated, and the raw string reopened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStringInsertExpr {
    pub x: Expr,
}

impl RawStringInsertExpr {
    /// Delimiter of the literal being spliced into.
    pub const DELIMITER: &'static str = "`";

    pub fn new(x: impl Into<Expr>) -> Self {
        Self { x: x.into() }
    }
}

impl Node for RawStringInsertExpr {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(Self::DELIMITER);
        w.write(" + ");
        self.x.render(w);
        w.write(" + ");
        w.write(Self::DELIMITER);
    }
}
