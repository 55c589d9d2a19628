//! Token comparison builders for keyset pagination.
//!
//! A builder captures the partition-key columns once and emits one [`Cmp`] per
//! call. The left-hand side is always the hash function over every column in
//! construction order; the [`RhsStrategy`] decides what the right-hand side
//! looks like.

mod strategy;

use std::sync::Arc;

pub use strategy::{ExactValue, RhsStrategy, WrapColumns};

use crate::{
    cmp::{Cmp, ComparisonOp, Value},
    error::TokenError,
    logging::{token_log, LogContext},
    option::TokenOptions,
};

const TOKEN_LOG_CTX: LogContext = LogContext::new("component=token_builder");

/// Builder comparing `token(columns)` against per-column parameters.
pub type ColumnTokenBuilder = TokenBuilder<WrapColumns>;

/// Builder comparing `token(columns)` against a single precomputed token.
pub type ExactTokenBuilder = TokenBuilder<ExactValue>;

/// Creates a builder producing `token(c1,..)<op>token(?,..)` comparisons.
pub fn token<I, C>(columns: I) -> Result<ColumnTokenBuilder, TokenError>
where
    I: IntoIterator<Item = C>,
    C: Into<Arc<str>>,
{
    TokenBuilder::new(columns)
}

/// Creates a builder producing `token(c1,..)<op>?` comparisons.
pub fn token_exact<I, C>(columns: I) -> Result<ExactTokenBuilder, TokenError>
where
    I: IntoIterator<Item = C>,
    C: Into<Arc<str>>,
{
    TokenBuilder::new(columns)
}

/// Immutable builder over an ordered, non-empty set of partition-key columns.
#[derive(Clone, Debug)]
pub struct TokenBuilder<R> {
    columns: Arc<[Arc<str>]>,
    column: Arc<str>,
    options: TokenOptions,
    rhs: R,
}

impl<R> TokenBuilder<R>
where
    R: RhsStrategy + Default,
{
    /// Creates a builder with [`TokenOptions::default`].
    pub fn new<I, C>(columns: I) -> Result<Self, TokenError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Arc<str>>,
    {
        Self::with_options(columns, TokenOptions::default())
    }

    /// Creates a builder rendering with the supplied options.
    pub fn with_options<I, C>(columns: I, options: TokenOptions) -> Result<Self, TokenError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Arc<str>>,
    {
        let columns: Arc<[Arc<str>]> = columns.into_iter().map(Into::into).collect();
        if options.function.is_empty() {
            return Err(Self::rejected(TokenError::EmptyFunctionName));
        }
        if columns.is_empty() {
            return Err(Self::rejected(TokenError::EmptyColumnSet));
        }

        let column = render_call(&options.function, &columns);
        token_log!(
            log::Level::Debug,
            ctx: TOKEN_LOG_CTX,
            "token_builder_created",
            "kind={} column={}",
            R::KIND,
            column,
        );
        Ok(Self {
            columns,
            column,
            options,
            rhs: R::default(),
        })
    }

    fn rejected(err: TokenError) -> TokenError {
        token_log!(
            log::Level::Debug,
            ctx: TOKEN_LOG_CTX,
            "token_builder_rejected",
            "kind={} error={}",
            R::KIND,
            err,
        );
        err
    }
}

impl<R> TokenBuilder<R>
where
    R: RhsStrategy,
{
    /// Columns in construction order.
    #[must_use]
    pub fn columns(&self) -> &[Arc<str>] {
        &self.columns
    }

    /// Options every comparison is rendered with.
    #[must_use]
    pub fn options(&self) -> &TokenOptions {
        &self.options
    }

    /// Produces a comparison with default parameter names.
    #[must_use]
    pub fn compare(&self, op: ComparisonOp) -> Cmp {
        self.cmp(op, self.rhs.default_value(&self.columns, &self.options))
    }

    /// Produces a comparison with explicit parameter names.
    ///
    /// Supplying no names is the same as [`TokenBuilder::compare`].
    pub fn compare_named<I, N>(&self, op: ComparisonOp, names: I) -> Result<Cmp, TokenError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Arc<str>>,
    {
        let names: Vec<Arc<str>> = names.into_iter().map(Into::into).collect();
        match self.rhs.named_value(&self.columns, names, &self.options) {
            Ok(value) => Ok(self.cmp(op, value)),
            Err(err) => {
                token_log!(
                    log::Level::Debug,
                    ctx: TOKEN_LOG_CTX,
                    "token_cmp_rejected",
                    "kind={} op={} column={} error={}",
                    R::KIND,
                    op,
                    self.column,
                    err,
                );
                Err(err)
            }
        }
    }

    /// Produces `token(columns)=<rhs>`.
    #[must_use]
    pub fn eq(&self) -> Cmp {
        self.compare(ComparisonOp::Equal)
    }

    /// Produces `token(columns)=<rhs>` with custom parameter names.
    pub fn eq_named<I, N>(&self, names: I) -> Result<Cmp, TokenError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Arc<str>>,
    {
        self.compare_named(ComparisonOp::Equal, names)
    }

    /// Produces `token(columns)<<rhs>`.
    #[must_use]
    pub fn lt(&self) -> Cmp {
        self.compare(ComparisonOp::LessThan)
    }

    /// Produces `token(columns)<<rhs>` with custom parameter names.
    pub fn lt_named<I, N>(&self, names: I) -> Result<Cmp, TokenError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Arc<str>>,
    {
        self.compare_named(ComparisonOp::LessThan, names)
    }

    /// Produces `token(columns)<=<rhs>`.
    #[must_use]
    pub fn lt_or_eq(&self) -> Cmp {
        self.compare(ComparisonOp::LessThanOrEqual)
    }

    /// Produces `token(columns)<=<rhs>` with custom parameter names.
    pub fn lt_or_eq_named<I, N>(&self, names: I) -> Result<Cmp, TokenError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Arc<str>>,
    {
        self.compare_named(ComparisonOp::LessThanOrEqual, names)
    }

    /// Produces `token(columns)><rhs>`.
    #[must_use]
    pub fn gt(&self) -> Cmp {
        self.compare(ComparisonOp::GreaterThan)
    }

    /// Produces `token(columns)><rhs>` with custom parameter names.
    pub fn gt_named<I, N>(&self, names: I) -> Result<Cmp, TokenError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Arc<str>>,
    {
        self.compare_named(ComparisonOp::GreaterThan, names)
    }

    /// Produces `token(columns)>=<rhs>`.
    #[must_use]
    pub fn gt_or_eq(&self) -> Cmp {
        self.compare(ComparisonOp::GreaterThanOrEqual)
    }

    /// Produces `token(columns)>=<rhs>` with custom parameter names.
    pub fn gt_or_eq_named<I, N>(&self, names: I) -> Result<Cmp, TokenError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Arc<str>>,
    {
        self.compare_named(ComparisonOp::GreaterThanOrEqual, names)
    }

    fn cmp(&self, op: ComparisonOp, value: Value) -> Cmp {
        let cmp = Cmp::new(op, Arc::clone(&self.column), value);
        token_log!(
            log::Level::Trace,
            ctx: TOKEN_LOG_CTX,
            "token_cmp_built",
            "kind={} cmp={}",
            R::KIND,
            cmp,
        );
        cmp
    }
}

impl ExactTokenBuilder {
    /// Produces a comparison against a single parameter.
    ///
    /// `None` or an empty name binds under the configured default
    /// (`token` unless overridden).
    #[must_use]
    pub fn cmp_param(&self, op: ComparisonOp, name: Option<&str>) -> Cmp {
        self.cmp(op, ExactValue::param(name, &self.options))
    }
}

fn render_call(function: &str, columns: &[Arc<str>]) -> Arc<str> {
    let mut rendered = String::with_capacity(
        function.len() + 2 + columns.iter().map(|c| c.len() + 1).sum::<usize>(),
    );
    rendered.push_str(function);
    rendered.push('(');
    for (idx, column) in columns.iter().enumerate() {
        if idx > 0 {
            rendered.push(',');
        }
        rendered.push_str(column);
    }
    rendered.push(')');
    Arc::from(rendered)
}
