use super::{BlockStmt, Expr, ExprList, FuncType, Type};
use crate::node::Node;
use crate::writer::Writer;
use std::borrow::Cow;

/// A literal written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueLit(pub Cow<'static, str>);

impl ValueLit {
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }
}

impl Node for ValueLit {
    fn render(&self, w: &mut Writer<'_>) {
        w.write_raw(&self.0);
    }
}

/// A base-10 integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLit(pub i64);

impl Node for IntLit {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(&self.0.to_string());
    }
}

/// A rune literal: `'x'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuneLit(pub char);

impl Node for RuneLit {
    fn render(&self, w: &mut Writer<'_>) {
        let mut buf = [0u8; 4];
        w.write("'");
        w.write(self.0.encode_utf8(&mut buf));
        w.write("'");
    }
}

/// An interpreted string literal: `"text"`.
///
/// The content is written as given; escaping is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLit(pub String);

impl StringLit {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Node for StringLit {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("\"");
        w.write_raw(&self.0);
        w.write("\"");
    }
}

/// A raw string literal: `` `text` ``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStringLit(pub String);

impl RawStringLit {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Node for RawStringLit {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("`");
        w.write_raw(&self.0);
        w.write("`");
    }
}

/// A function literal: signature followed by a block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncLit {
    pub typ: FuncType,
    pub body: BlockStmt,
}

impl FuncLit {
    pub fn new(typ: FuncType, body: BlockStmt) -> Self {
        Self { typ, body }
    }
}

impl Node for FuncLit {
    fn render(&self, w: &mut Writer<'_>) {
        self.typ.render(w);
        w.write(" ");
        self.body.render(w);
    }
}

/// Shared layout of slice, struct and map literals.
///
/// Compact: `T{a, b}`. Laid out: every element on its own indented line,
/// each followed by a comma, and the closing brace on a fresh line.
fn render_composite<N: Node>(w: &mut Writer<'_>, typ: Option<&Type>, elems: &[N], compact: bool) {
    if let Some(typ) = typ {
        typ.render(w);
    }
    w.write("{");

    if compact {
        for (i, x) in elems.iter().enumerate() {
            if i > 0 {
                w.write(", ");
            }
            x.render(w);
        }
    } else if !elems.is_empty() {
        w.indent();
        for x in elems {
            w.write("\n");
            x.render(w);
            w.write(",");
        }
        w.unindent();
        w.write("\n");
    }
    w.write("}");
}

/// A slice or array composite literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceLit {
    /// Slice or array type; omitted inside an enclosing composite literal.
    pub typ: Option<Type>,
    pub elems: ExprList,
    /// Render on a single line.
    pub compact: bool,
}

impl SliceLit {
    pub fn new(elems: Vec<Expr>) -> Self {
        Self {
            typ: None,
            elems: ExprList(elems),
            compact: false,
        }
    }

    pub fn typ(mut self, typ: Type) -> Self {
        self.typ = Some(typ);
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn add_elems(&mut self, elems: impl IntoIterator<Item = Expr>) {
        self.elems.0.extend(elems);
    }

    pub fn num_elems(&self) -> usize {
        self.elems.0.len()
    }
}

impl Node for SliceLit {
    fn render(&self, w: &mut Writer<'_>) {
        render_composite(w, self.typ.as_ref(), &self.elems.0, self.compact);
    }
}

/// A struct composite literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructLit {
    pub typ: Option<Type>,
    pub elems: Vec<FieldElement>,
    pub compact: bool,
}

impl StructLit {
    pub fn new(typ: Type) -> Self {
        Self {
            typ: Some(typ),
            elems: Vec::new(),
            compact: false,
        }
    }

    pub fn field(mut self, elem: FieldElement) -> Self {
        self.elems.push(elem);
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

impl Node for StructLit {
    fn render(&self, w: &mut Writer<'_>) {
        render_composite(w, self.typ.as_ref(), &self.elems, self.compact);
    }
}

/// A `Field: value` pair inside a struct literal.
///
/// With an empty field name only the value is written (positional form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldElement {
    /// Start the element on its own line even inside a compact literal.
    pub new_line: bool,
    pub field: String,
    pub value: Expr,
}

impl FieldElement {
    pub fn new(field: impl Into<String>, value: impl Into<Expr>) -> Self {
        Self {
            new_line: false,
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn positional(value: impl Into<Expr>) -> Self {
        Self::new(String::new(), value)
    }

    pub fn new_line(mut self, new_line: bool) -> Self {
        self.new_line = new_line;
        self
    }
}

impl Node for FieldElement {
    fn render(&self, w: &mut Writer<'_>) {
        if self.new_line {
            w.write("\n");
        }
        if !self.field.is_empty() {
            w.write(&self.field);
            w.write(": ");
        }
        self.value.render(w);
    }
}

/// A map composite literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapLit {
    pub typ: Option<Type>,
    pub elems: Vec<KeyElement>,
    pub compact: bool,
}

impl MapLit {
    pub fn new(typ: Type) -> Self {
        Self {
            typ: Some(typ),
            elems: Vec::new(),
            compact: false,
        }
    }

    pub fn entry(mut self, key: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        self.elems.push(KeyElement::new(key, value));
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

impl Node for MapLit {
    fn render(&self, w: &mut Writer<'_>) {
        render_composite(w, self.typ.as_ref(), &self.elems, self.compact);
    }
}

/// A `key: value` pair inside a map literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyElement {
    pub key: Expr,
    pub value: Expr,
}

impl KeyElement {
    pub fn new(key: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Node for KeyElement {
    fn render(&self, w: &mut Writer<'_>) {
        self.key.render(w);
        w.write(": ");
        self.value.render(w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_string;

    #[test]
    fn scalar_literals() {
        assert_eq!(to_string(&IntLit(-42)).unwrap(), "-42");
        assert_eq!(to_string(&RuneLit('x')).unwrap(), "'x'");
        assert_eq!(to_string(&RuneLit('é')).unwrap(), "'é'");
        assert_eq!(to_string(&StringLit::new("hi")).unwrap(), r#""hi""#);
        assert_eq!(to_string(&RawStringLit::new("a\"b")).unwrap(), "`a\"b`");
        assert_eq!(to_string(&ValueLit::new("3.14")).unwrap(), "3.14");
    }

    #[test]
    fn empty_composites() {
        let lit = SliceLit::new(vec![]).typ(Type::slice(Type::name("int")));
        assert_eq!(to_string(&lit).unwrap(), "[]int{}");
        assert_eq!(to_string(&lit.compact(true)).unwrap(), "[]int{}");
    }

    #[test]
    fn slice_add_elems() {
        let mut lit = SliceLit::new(vec![IntLit(1).into()]).compact(true);
        lit.add_elems([Expr::from(IntLit(2)), Expr::from(IntLit(3))]);
        assert_eq!(lit.num_elems(), 3);
        assert_eq!(to_string(&lit).unwrap(), "{1, 2, 3}");
    }

    #[test]
    fn field_element_forms() {
        let named = FieldElement::new("Name", StringLit::new("x"));
        assert_eq!(to_string(&named).unwrap(), r#"Name: "x""#);
        let positional = FieldElement::positional(IntLit(1));
        assert_eq!(to_string(&positional).unwrap(), "1");
    }
}
