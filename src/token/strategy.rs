use std::{fmt, sync::Arc};

use crate::{
    cmp::{Func, Param, Value},
    error::TokenError,
    option::TokenOptions,
};

/// Renders the right-hand side of a token comparison.
///
/// Selected at builder construction through the builder's type parameter.
pub trait RhsStrategy: Clone + fmt::Debug + Send + Sync {
    /// Short label used in log records.
    const KIND: &'static str;

    /// Right-hand side used when the caller supplies no parameter names.
    fn default_value(&self, columns: &[Arc<str>], options: &TokenOptions) -> Value;

    /// Right-hand side built from explicit parameter names.
    ///
    /// An empty `names` list behaves like [`RhsStrategy::default_value`].
    fn named_value(
        &self,
        columns: &[Arc<str>],
        names: Vec<Arc<str>>,
        options: &TokenOptions,
    ) -> Result<Value, TokenError>;
}

/// Wraps per-column parameters in the hash function: `token(?,?)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WrapColumns;

impl RhsStrategy for WrapColumns {
    const KIND: &'static str = "column";

    fn default_value(&self, columns: &[Arc<str>], options: &TokenOptions) -> Value {
        Func::new(
            Arc::clone(&options.function),
            columns.iter().cloned().map(Param::new),
        )
        .into()
    }

    fn named_value(
        &self,
        columns: &[Arc<str>],
        names: Vec<Arc<str>>,
        options: &TokenOptions,
    ) -> Result<Value, TokenError> {
        if names.is_empty() {
            return Ok(self.default_value(columns, options));
        }
        if names.len() != columns.len() {
            return Err(TokenError::ArgumentCountMismatch {
                expected: columns.len(),
                got: names.len(),
            });
        }
        Ok(Func::new(Arc::clone(&options.function), names.into_iter().map(Param::new)).into())
    }
}

/// Compares against a single already computed token: `?`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactValue;

impl ExactValue {
    pub(crate) fn param(name: Option<&str>, options: &TokenOptions) -> Value {
        match name {
            Some(name) if !name.is_empty() => Param::new(name).into(),
            _ => Param::new(Arc::clone(&options.exact_param)).into(),
        }
    }
}

impl RhsStrategy for ExactValue {
    const KIND: &'static str = "exact";

    fn default_value(&self, _columns: &[Arc<str>], options: &TokenOptions) -> Value {
        Self::param(None, options)
    }

    fn named_value(
        &self,
        _columns: &[Arc<str>],
        names: Vec<Arc<str>>,
        options: &TokenOptions,
    ) -> Result<Value, TokenError> {
        match names.as_slice() {
            [] => Ok(Self::param(None, options)),
            [name] => Ok(Self::param(Some(&**name), options)),
            _ => Err(TokenError::UnexpectedArgumentCount {
                max: 1,
                got: names.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<Arc<str>> {
        names.iter().map(|name| Arc::from(*name)).collect()
    }

    #[test]
    fn wrap_columns_defaults_to_column_names() {
        let value = WrapColumns.default_value(&cols(&["a", "b"]), &TokenOptions::default());
        assert_eq!(value.to_string(), "token(:a,:b)");
    }

    #[test]
    fn wrap_columns_rejects_count_mismatch() {
        let err = WrapColumns
            .named_value(&cols(&["a", "b"]), cols(&["x"]), &TokenOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::ArgumentCountMismatch {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn wrap_columns_uses_configured_function() {
        let options = TokenOptions::default().function("murmur3");
        let value = WrapColumns
            .named_value(&cols(&["a"]), cols(&["p"]), &options)
            .expect("matching count");
        assert_eq!(value.to_string(), "murmur3(:p)");
    }

    #[test]
    fn exact_value_falls_back_on_empty_name() {
        let options = TokenOptions::default();
        let value = ExactValue
            .named_value(&cols(&["a"]), cols(&[""]), &options)
            .expect("single name");
        assert_eq!(value, Value::Param(Param::new("token")));
    }

    #[test]
    fn exact_value_rejects_multiple_names() {
        let err = ExactValue
            .named_value(&cols(&["a"]), cols(&["x", "y"]), &TokenOptions::default())
            .unwrap_err();
        assert_eq!(err, TokenError::UnexpectedArgumentCount { max: 1, got: 2 });
    }

    #[test]
    fn exact_value_honours_configured_default() {
        let options = TokenOptions::default().exact_param("last_token");
        assert_eq!(
            ExactValue.default_value(&cols(&["a"]), &options),
            Value::Param(Param::new("last_token"))
        );
    }
}
