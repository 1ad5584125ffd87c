use super::{BinaryExpr, BinaryOp, Expr, ExprList, Ident, NIL, Stmt};
use crate::node::Node;
use crate::writer::Writer;
use std::sync::LazyLock;

/// An expression used as a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStmt(pub Expr);

impl ExprStmt {
    pub fn new(x: impl Into<Expr>) -> Self {
        Self(x.into())
    }
}

impl Node for ExprStmt {
    fn render(&self, w: &mut Writer<'_>) {
        self.0.render(w);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignToken {
    /// `=`
    Assign,
    /// `:=`
    Define,
}

/// `lhs = rhs` or `lhs := rhs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    pub lhs: ExprList,
    pub tok: AssignToken,
    pub rhs: ExprList,
}

impl AssignStmt {
    pub fn new(lhs: impl Into<ExprList>, tok: AssignToken, rhs: impl Into<ExprList>) -> Self {
        Self {
            lhs: lhs.into(),
            tok,
            rhs: rhs.into(),
        }
    }
}

impl Node for AssignStmt {
    fn render(&self, w: &mut Writer<'_>) {
        self.lhs.render(w);
        w.write(match self.tok {
            AssignToken::Assign => " = ",
            AssignToken::Define => " := ",
        });
        self.rhs.render(w);
    }
}

/// `return` with optional results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnStmt {
    pub results: ExprList,
}

impl ReturnStmt {
    pub fn new(results: impl Into<ExprList>) -> Self {
        Self {
            results: results.into(),
        }
    }
}

impl Node for ReturnStmt {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("return");
        if !self.results.is_empty() {
            w.write(" ");
            self.results.render(w);
        }
    }
}

/// A braced block, one statement per indented line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStmt {
    pub list: Vec<Stmt>,
}

impl BlockStmt {
    pub fn new(list: Vec<Stmt>) -> Self {
        Self { list }
    }
}

impl Node for BlockStmt {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("{");
        if self.list.is_empty() {
            w.write("}");
            return;
        }
        w.indent();
        for stmt in &self.list {
            w.new_line();
            stmt.render(w);
        }
        w.unindent();
        w.new_line();
        w.write("}");
    }
}

/// `if init; cond { ... } else ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub init: Option<Stmt>,
    pub cond: Expr,
    pub body: BlockStmt,
    /// Either another `IfStmt` or a `BlockStmt`.
    pub els: Option<Stmt>,
}

impl IfStmt {
    pub fn new(cond: impl Into<Expr>, body: BlockStmt) -> Self {
        Self {
            init: None,
            cond: cond.into(),
            body,
            els: None,
        }
    }

    pub fn init(mut self, init: impl Into<Stmt>) -> Self {
        self.init = Some(init.into());
        self
    }

    pub fn els(mut self, els: impl Into<Stmt>) -> Self {
        self.els = Some(els.into());
        self
    }
}

impl Node for IfStmt {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("if ");
        if let Some(init) = &self.init {
            init.render(w);
            w.write("; ");
        }
        self.cond.render(w);
        w.write(" ");
        self.body.render(w);
        if let Some(els) = &self.els {
            w.write(" else ");
            els.render(w);
        }
    }
}

/// Statements, one per line, with no line break after the last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StmtList(pub Vec<Stmt>);

impl StmtList {
    pub fn add(&mut self, stmts: impl IntoIterator<Item = Stmt>) {
        self.0.extend(stmts);
    }
}

impl Node for StmtList {
    fn render(&self, w: &mut Writer<'_>) {
        for stmt in &self.0 {
            stmt.render(w);
            w.new_line();
        }
        w.no_new_line();
    }
}

static IF_ERR_RETURN: LazyLock<IfStmt> = LazyLock::new(|| {
    let err = || Expr::from(Ident::new("err"));
    IfStmt::new(
        BinaryExpr::new(err(), BinaryOp::Neq, NIL),
        BlockStmt::new(vec![ReturnStmt::new(err()).into()]),
    )
});

/// `if err != nil { return err }` laid out over three lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IfErrReturn;

impl Node for IfErrReturn {
    fn render(&self, w: &mut Writer<'_>) {
        IF_ERR_RETURN.render(w);
    }
}

/// A raw line break. Usable as a statement or a comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NL;

impl Node for NL {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("\n");
    }
}

/// Renders nothing. Fills any required slot when there is nothing to say.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOp;

impl Node for NoOp {
    fn render(&self, _: &mut Writer<'_>) {}
}
