use super::{BlockStmt, ExprList, FuncType, Ident, Param, Spec, StringLit, Type};
use crate::node::Node;
use crate::writer::Writer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclToken {
    Var,
    Const,
    Import,
}

impl DeclToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclToken::Var => "var",
            DeclToken::Const => "const",
            DeclToken::Import => "import",
        }
    }
}

/// A `var`, `const` or `import` declaration.
///
/// A single spec renders inline (`var x = 1`); several are grouped in
/// parentheses, one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenDecl {
    pub tok: DeclToken,
    pub specs: Vec<Spec>,
}

impl GenDecl {
    pub fn new(tok: DeclToken, specs: Vec<Spec>) -> Self {
        Self { tok, specs }
    }
}

impl Node for GenDecl {
    fn render(&self, w: &mut Writer<'_>) {
        w.write(self.tok.as_str());
        w.write(" ");
        if let [spec] = self.specs.as_slice() {
            spec.render(w);
            return;
        }

        w.write("(");
        w.indent();
        for spec in &self.specs {
            w.new_line();
            spec.render(w);
        }
        w.unindent();
        if !self.specs.is_empty() {
            w.new_line();
        }
        w.write(")");
    }
}

/// `name, other Type = a, b`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub typ: Option<Type>,
    pub values: ExprList,
}

impl ValueSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            names: vec![Ident::new(name)],
            typ: None,
            values: ExprList::default(),
        }
    }

    pub fn typ(mut self, typ: Type) -> Self {
        self.typ = Some(typ);
        self
    }

    pub fn values(mut self, values: impl Into<ExprList>) -> Self {
        self.values = values.into();
        self
    }
}

impl Node for ValueSpec {
    fn render(&self, w: &mut Writer<'_>) {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                w.write(", ");
            }
            name.render(w);
        }
        if let Some(typ) = &self.typ {
            w.write(" ");
            typ.render(w);
        }
        if !self.values.is_empty() {
            w.write(" = ");
            self.values.render(w);
        }
    }
}

/// `alias "path"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub name: Option<Ident>,
    pub path: StringLit,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: StringLit::new(path),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Ident::new(name));
        self
    }
}

impl Node for ImportSpec {
    fn render(&self, w: &mut Writer<'_>) {
        if let Some(name) = &self.name {
            name.render(w);
            w.write(" ");
        }
        self.path.render(w);
    }
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub doc: Option<LineComment>,
    pub recv: Option<Param>,
    pub name: Ident,
    pub typ: FuncType,
    pub body: BlockStmt,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>, typ: FuncType, body: BlockStmt) -> Self {
        Self {
            doc: None,
            recv: None,
            name: Ident::new(name),
            typ,
            body,
        }
    }

    pub fn recv(mut self, recv: Param) -> Self {
        self.recv = Some(recv);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(LineComment::new(doc));
        self
    }
}

impl Node for FuncDecl {
    fn render(&self, w: &mut Writer<'_>) {
        if let Some(doc) = &self.doc {
            doc.render(w);
            w.new_line();
        }
        w.write("func ");
        if let Some(recv) = &self.recv {
            w.write("(");
            recv.render(w);
            w.write(") ");
        }
        self.name.render(w);
        self.typ.render_signature(w);
        w.write(" ");
        self.body.render(w);
    }
}

/// `// text`. Multi-line text gets one `// ` line per line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComment(pub String);

impl LineComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Node for LineComment {
    fn render(&self, w: &mut Writer<'_>) {
        for (i, line) in self.0.lines().enumerate() {
            if i > 0 {
                w.new_line();
            }
            w.write("// ");
            w.write_raw(line);
        }
        if self.0.is_empty() {
            w.write("// ");
        }
    }
}
