use super::Ident;
use crate::node::Node;
use crate::writer::Writer;

/// Type expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// `int`, `User`
    Name(Ident),
    /// `pkg.Name`
    Qualified { pkg: String, name: String },
    /// `*T`
    Pointer(Box<Type>),
    /// `[]T`
    Slice(Box<Type>),
    /// `[N]T`
    Array(usize, Box<Type>),
    /// `map[K]V`
    Map(Box<Type>, Box<Type>),
    /// `func(...) ...`
    Func(Box<FuncType>),
}

impl Type {
    pub fn name(name: impl Into<String>) -> Self {
        Type::Name(Ident::new(name))
    }

    pub fn qualified(pkg: impl Into<String>, name: impl Into<String>) -> Self {
        Type::Qualified {
            pkg: pkg.into(),
            name: name.into(),
        }
    }

    pub fn pointer(elem: Type) -> Self {
        Type::Pointer(Box::new(elem))
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice(Box::new(elem))
    }

    pub fn array(len: usize, elem: Type) -> Self {
        Type::Array(len, Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map(Box::new(key), Box::new(value))
    }
}

impl Node for Type {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            Type::Name(ident) => ident.render(w),
            Type::Qualified { pkg, name } => {
                w.write(pkg);
                w.write(".");
                w.write(name);
            }
            Type::Pointer(elem) => {
                w.write("*");
                elem.render(w);
            }
            Type::Slice(elem) => {
                w.write("[]");
                elem.render(w);
            }
            Type::Array(len, elem) => {
                w.write("[");
                w.write(&len.to_string());
                w.write("]");
                elem.render(w);
            }
            Type::Map(key, value) => {
                w.write("map[");
                key.render(w);
                w.write("]");
                value.render(w);
            }
            Type::Func(func) => func.render(w),
        }
    }
}

impl From<FuncType> for Type {
    fn from(func: FuncType) -> Self {
        Type::Func(Box::new(func))
    }
}

/// A parameter or result in a function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: Option<Ident>,
    pub typ: Type,
    /// `...T`
    pub variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, typ: Type) -> Self {
        Self {
            name: Some(Ident::new(name)),
            typ,
            variadic: false,
        }
    }

    pub fn unnamed(typ: Type) -> Self {
        Self {
            name: None,
            typ,
            variadic: false,
        }
    }

    pub fn variadic(mut self, variadic: bool) -> Self {
        self.variadic = variadic;
        self
    }
}

impl Node for Param {
    fn render(&self, w: &mut Writer<'_>) {
        if let Some(name) = &self.name {
            name.render(w);
            w.write(" ");
        }
        if self.variadic {
            w.write("...");
        }
        self.typ.render(w);
    }
}

/// A function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncType {
    pub params: Vec<Param>,
    pub results: Vec<Param>,
}

impl FuncType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn result(mut self, result: Param) -> Self {
        self.results.push(result);
        self
    }

    /// Parameters and results without the leading `func` keyword.
    pub(crate) fn render_signature(&self, w: &mut Writer<'_>) {
        w.write("(");
        render_params(w, &self.params);
        w.write(")");

        match self.results.as_slice() {
            [] => {}
            [single] if single.name.is_none() => {
                w.write(" ");
                single.render(w);
            }
            results => {
                w.write(" (");
                render_params(w, results);
                w.write(")");
            }
        }
    }
}

impl Node for FuncType {
    fn render(&self, w: &mut Writer<'_>) {
        w.write("func");
        self.render_signature(w);
    }
}

fn render_params(w: &mut Writer<'_>, params: &[Param]) {
    for (i, p) in params.iter().enumerate() {
        if i > 0 {
            w.write(", ");
        }
        p.render(w);
    }
}
