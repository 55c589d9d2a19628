use std::{fmt, sync::Arc};

/// Named bound-parameter placeholder.
///
/// The name is resolved to a concrete value by whatever binds the rendered
/// statement; this crate only assigns it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Param {
    name: Arc<str>,
}

impl Param {
    /// Creates a placeholder bound under `name`.
    #[must_use]
    pub fn new<N>(name: N) -> Self
    where
        N: Into<Arc<str>>,
    {
        Self { name: name.into() }
    }

    /// Name the placeholder is bound under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn write_cql(&self, cql: &mut String, names: &mut Vec<Arc<str>>) {
        cql.push('?');
        names.push(Arc::clone(&self.name));
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name)
    }
}

/// Function call over bound parameters, e.g. `token(?,?)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Func {
    name: Arc<str>,
    params: Vec<Param>,
}

impl Func {
    /// Creates a call to `name` with one placeholder per parameter.
    #[must_use]
    pub fn new<N, I>(name: N, params: I) -> Self
    where
        N: Into<Arc<str>>,
        I: IntoIterator<Item = Param>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }

    /// Called function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in call order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    fn write_cql(&self, cql: &mut String, names: &mut Vec<Arc<str>>) {
        cql.push_str(&self.name);
        cql.push('(');
        for (idx, param) in self.params.iter().enumerate() {
            if idx > 0 {
                cql.push(',');
            }
            param.write_cql(cql, names);
        }
        cql.push(')');
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (idx, param) in self.params.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}

/// Right-hand side of a token comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Single bound parameter holding an already computed token.
    Param(Param),
    /// Hash function applied to per-column parameters.
    Func(Func),
}

impl Value {
    /// Appends the positional CQL form and records bound names in order.
    pub(crate) fn write_cql(&self, cql: &mut String, names: &mut Vec<Arc<str>>) {
        match self {
            Value::Param(param) => param.write_cql(cql, names),
            Value::Func(func) => func.write_cql(cql, names),
        }
    }

    /// Bound parameter names in placeholder order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Value::Param(param) => vec![param.name()],
            Value::Func(func) => func.params().iter().map(Param::name).collect(),
        }
    }
}

impl From<Param> for Value {
    fn from(value: Param) -> Self {
        Self::Param(value)
    }
}

impl From<Func> for Value {
    fn from(value: Func) -> Self {
        Self::Func(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Param(param) => fmt::Display::fmt(param, f),
            Value::Func(func) => fmt::Display::fmt(func, f),
        }
    }
}
