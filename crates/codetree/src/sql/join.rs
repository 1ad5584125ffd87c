use super::{BoolValueExpr, Ident};
use crate::node::Node;
use crate::writer::Writer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinType {
    /// No keyword; the relation is written on its own.
    #[default]
    None,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::None => "",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL JOIN",
            JoinType::Cross => "CROSS JOIN",
        }
    }
}

impl Node for JoinType {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(self.as_str());
    }
}

/// `ON <search condition>`, or nothing without a condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinCondition {
    pub search_condition: Option<BoolValueExpr>,
}

impl JoinCondition {
    pub fn on(cond: impl Into<BoolValueExpr>) -> Self {
        Self {
            search_condition: Some(cond.into()),
        }
    }
}

impl Node for JoinCondition {
    fn render(&self, w: &mut Writer<'_>) {
        if let Some(cond) = &self.search_condition {
            w.write("ON ");
            cond.render(w);
        }
    }
}

/// `<join type> <relation> ON <condition>`
///
/// A cross join never writes its condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableJoin {
    pub typ: JoinType,
    pub rel: Ident,
    pub cond: JoinCondition,
}

impl TableJoin {
    pub fn new(typ: JoinType, rel: Ident, cond: JoinCondition) -> Self {
        Self { typ, rel, cond }
    }

    pub fn left(rel: Ident, cond: impl Into<BoolValueExpr>) -> Self {
        Self::new(JoinType::Left, rel, JoinCondition::on(cond))
    }

    pub fn right(rel: Ident, cond: impl Into<BoolValueExpr>) -> Self {
        Self::new(JoinType::Right, rel, JoinCondition::on(cond))
    }

    pub fn full(rel: Ident, cond: impl Into<BoolValueExpr>) -> Self {
        Self::new(JoinType::Full, rel, JoinCondition::on(cond))
    }

    pub fn cross(rel: Ident) -> Self {
        Self::new(JoinType::Cross, rel, JoinCondition::default())
    }
}

impl Node for TableJoin {
    fn render(&self, w: &mut Writer<'_>) {
        if self.typ != JoinType::None {
            self.typ.render(w);
            w.write(" ");
        }
        self.rel.render(w);

        if self.typ != JoinType::Cross && self.cond.search_condition.is_some() {
            w.write(" ");
            self.cond.render(w);
        }
    }
}
