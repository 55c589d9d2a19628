//! Comparison expressions emitted by the token builders.

mod value;

use std::{fmt, sync::Arc};

pub use value::{Func, Param, Value};

/// Comparison operator used by token comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// Equals (`=`).
    Equal,
    /// Less than (`<`).
    LessThan,
    /// Less than or equal to (`<=`).
    LessThanOrEqual,
    /// Greater than (`>`).
    GreaterThan,
    /// Greater than or equal to (`>=`).
    GreaterThanOrEqual,
}

impl ComparisonOp {
    /// Every operator, in declaration order.
    pub const ALL: [ComparisonOp; 5] = [
        ComparisonOp::Equal,
        ComparisonOp::LessThan,
        ComparisonOp::LessThanOrEqual,
        ComparisonOp::GreaterThan,
        ComparisonOp::GreaterThanOrEqual,
    ];

    /// Returns a textual representation of the operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "=",
            ComparisonOp::LessThan => "<",
            ComparisonOp::LessThanOrEqual => "<=",
            ComparisonOp::GreaterThan => ">",
            ComparisonOp::GreaterThanOrEqual => ">=",
        }
    }

    /// Returns the operator that swaps the left/right side of the comparison.
    ///
    /// Useful when paging backwards over the same boundary token.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ComparisonOp::Equal => ComparisonOp::Equal,
            ComparisonOp::LessThan => ComparisonOp::GreaterThan,
            ComparisonOp::LessThanOrEqual => ComparisonOp::GreaterThanOrEqual,
            ComparisonOp::GreaterThan => ComparisonOp::LessThan,
            ComparisonOp::GreaterThanOrEqual => ComparisonOp::LessThanOrEqual,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single comparison between a token over columns and a bound right-hand side.
///
/// Produced by [`TokenBuilder`](crate::TokenBuilder); owned by the caller and
/// independent of the builder that made it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cmp {
    op: ComparisonOp,
    column: Arc<str>,
    value: Value,
}

impl Cmp {
    pub(crate) fn new(op: ComparisonOp, column: Arc<str>, value: Value) -> Self {
        Self { op, column, value }
    }

    /// Operator of the comparison.
    #[must_use]
    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    /// Rendered left-hand side, e.g. `token(a,b)`.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Right-hand side expression.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Bound parameter names in placeholder order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.value.names()
    }

    /// Appends the positional CQL form (`token(a,b)>token(?,?)`) to `cql`.
    ///
    /// Returns the bound parameter names in the order their placeholders
    /// were written.
    pub fn write_cql(&self, cql: &mut String) -> Vec<Arc<str>> {
        let mut names = Vec::new();
        cql.push_str(&self.column);
        cql.push_str(self.op.as_str());
        self.value.write_cql(cql, &mut names);
        names
    }
}

impl fmt::Display for Cmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.op, self.value)
    }
}
