use std::sync::Arc;

/// Default name of the partitioner hash function.
pub const DEFAULT_FUNCTION: &str = "token";

/// Default bound-parameter name used by exact token comparisons.
pub const DEFAULT_EXACT_PARAM: &str = "token";

/// Rendering options shared by every comparison a builder produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOptions {
    pub(crate) function: Arc<str>,
    pub(crate) exact_param: Arc<str>,
}

impl Default for TokenOptions {
    fn default() -> Self {
        TokenOptions {
            function: Arc::from(DEFAULT_FUNCTION),
            exact_param: Arc::from(DEFAULT_EXACT_PARAM),
        }
    }
}

impl TokenOptions {
    /// Name of the hash function wrapped around columns and parameters.
    pub fn function(self, function: impl Into<Arc<str>>) -> Self {
        TokenOptions {
            function: function.into(),
            ..self
        }
    }

    /// Parameter name exact comparisons fall back to when none is given.
    ///
    /// An empty name restores [`DEFAULT_EXACT_PARAM`].
    pub fn exact_param(self, exact_param: impl Into<Arc<str>>) -> Self {
        let exact_param = exact_param.into();
        let exact_param = if exact_param.is_empty() {
            Arc::from(DEFAULT_EXACT_PARAM)
        } else {
            exact_param
        };
        TokenOptions {
            exact_param,
            ..self
        }
    }

    /// Configured hash function name.
    #[must_use]
    pub fn function_name(&self) -> &str {
        &self.function
    }

    /// Configured default parameter name for exact comparisons.
    #[must_use]
    pub fn exact_param_name(&self) -> &str {
        &self.exact_param
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cql_token_function() {
        let options = TokenOptions::default();
        assert_eq!(options.function_name(), "token");
        assert_eq!(options.exact_param_name(), "token");
    }

    #[test]
    fn setters_replace_single_field() {
        let options = TokenOptions::default()
            .function("partition_hash")
            .exact_param("cursor");
        assert_eq!(options.function_name(), "partition_hash");
        assert_eq!(options.exact_param_name(), "cursor");

        let options = options.exact_param("");
        assert_eq!(options.exact_param_name(), DEFAULT_EXACT_PARAM);
        assert_eq!(options.function_name(), "partition_hash");
    }
}
