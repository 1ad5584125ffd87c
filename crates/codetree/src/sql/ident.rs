//! Identifier nodes.
//!
//! - [`Name`]: a bare name, always written double quoted with `"` doubled
//! - [`Ident`]: optional qualifier, name, optional alias (`t."id" AS x`)
//! - [`ColumnIdent`]: optional qualifier and name; never aliased
//!
//! Qualifiers and aliases are written verbatim.

use super::ColumnExpr;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::writer::Writer;
use std::str::FromStr;

/// A quoted SQL name.
///
/// Construction rejects empty names and names containing NUL; every other
/// character is allowed and `"` is escaped on output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::validation("Name cannot be empty"));
        }
        if name.contains('\0') {
            return Err(Error::validation("Name cannot contain NUL character"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Node for Name {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("\"");
        let mut rest = self.0.as_str();
        while let Some(at) = rest.find('"') {
            w.write_raw(&rest[..at]);
            w.write("\"\"");
            rest = &rest[at + 1..];
        }
        w.write_raw(rest);
        w.write("\"");
    }
}

/// A relation or projection identifier: `qual."name" AS alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: Name,
    pub qual: Option<String>,
    pub alias: Option<String>,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self::from_name(Name::new(name)?))
    }

    pub fn from_name(name: Name) -> Self {
        Self {
            name,
            qual: None,
            alias: None,
        }
    }

    pub fn qual(mut self, qual: impl Into<String>) -> Self {
        self.qual = Some(qual.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl Node for Ident {
    fn render(&self, w: &mut Writer<'_>) {
        if let Some(qual) = &self.qual {
            w.write(qual);
            w.write(".");
        }
        self.name.render(w);
        if let Some(alias) = &self.alias {
            w.write(" AS ");
            w.write(alias);
        }
    }
}

/// A column reference: `qual."name"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIdent {
    pub name: Name,
    pub qual: Option<String>,
}

/// A column identifier used as a value or a boolean leaf.
pub type ColumnReference = ColumnIdent;

impl ColumnIdent {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self::from_name(Name::new(name)?))
    }

    pub fn from_name(name: Name) -> Self {
        Self { name, qual: None }
    }

    pub fn qual(mut self, qual: impl Into<String>) -> Self {
        self.qual = Some(qual.into());
        self
    }
}

impl Node for ColumnIdent {
    fn render(&self, w: &mut Writer<'_>) {
        if let Some(qual) = &self.qual {
            w.write(qual);
            w.write(".");
        }
        self.name.render(w);
    }
}

/// A parenthesized name list, one name per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSlice(pub Vec<Name>);

impl Node for NameSlice {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("(");
        for (i, name) in self.0.iter().enumerate() {
            w.new_line();
            if i > 0 {
                w.write(", ");
            }
            name.render(w);
        }
        w.new_line();
        w.write(")");
    }
}

/// Column identifiers separated by a line break and `, `.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIdentSlice(pub Vec<ColumnIdent>);

impl Node for ColumnIdentSlice {
    fn render(&self, w: &mut Writer<'_>) {
        render_leading_comma(w, &self.0);
    }
}

/// Column expressions separated by a line break and `, `.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnExprSlice(pub Vec<ColumnExpr>);

impl ColumnExprSlice {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Node for ColumnExprSlice {
    fn render(&self, w: &mut Writer<'_>) {
        render_leading_comma(w, &self.0);
    }
}

/// Leading-comma list layout shared by the column lists and
/// [`ValueExprList`](super::ValueExprList).
pub(crate) fn render_leading_comma<N: Node>(w: &mut Writer<'_>, items: &[N]) {
    for (i, x) in items.iter().enumerate() {
        if i > 0 {
            w.new_line();
            w.write(", ");
        }
        x.render(w);
    }
}
