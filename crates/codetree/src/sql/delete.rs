use super::{BoolValueExpr, ColumnExpr, ColumnExprSlice, Ident, TableExpr, WhereClause};
use crate::node::Node;
use crate::writer::Writer;

/// `DELETE FROM <table>` followed by the USING, WHERE and RETURNING
/// clauses, each on its own line one level deeper.
///
/// Always starts at column zero, whatever the writer's depth. Clauses
/// without a body write nothing and leave no blank line behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStatement {
    pub table: Ident,
    pub using: UsingClause,
    pub where_: WhereClause,
    pub returning: ReturningClause,
}

impl DeleteStatement {
    pub fn new(table: Ident) -> Self {
        Self {
            table,
            using: UsingClause::default(),
            where_: WhereClause::default(),
            returning: ReturningClause::default(),
        }
    }

    pub fn using(mut self, table: impl Into<TableExpr>) -> Self {
        self.using.list.push(table.into());
        self
    }

    pub fn where_(mut self, cond: impl Into<BoolValueExpr>) -> Self {
        self.where_ = WhereClause::new(cond);
        self
    }

    pub fn returning(mut self, col: impl Into<ColumnExpr>) -> Self {
        self.returning.list.0.push(col.into());
        self
    }
}

impl Node for DeleteStatement {
    fn render(&self, w: &mut Writer<'_>) {
        w.no_indent();
        w.write("DELETE FROM ");
        self.table.render(w);
        w.new_line();
        w.indent();
        self.using.render(w);
        w.new_line();
        self.where_.render(w);
        w.new_line();
        self.returning.render(w);
        w.no_new_line();
        w.unindent();
    }
}

/// `USING a` with further tables on following lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsingClause {
    pub list: Vec<TableExpr>,
}

impl Node for UsingClause {
    fn render(&self, w: &mut Writer<'_>) {
        if self.list.is_empty() {
            return;
        }
        w.write("USING ");
        for (i, x) in self.list.iter().enumerate() {
            if i > 0 {
                w.new_line();
            }
            x.render(w);
        }
    }
}

/// `RETURNING a\n, b`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturningClause {
    pub list: ColumnExprSlice,
}

impl Node for ReturningClause {
    fn render(&self, w: &mut Writer<'_>) {
        if self.list.is_empty() {
            return;
        }
        w.write("RETURNING ");
        self.list.render(w);
    }
}
