#![deny(missing_docs)]
//! Token comparison builders for keyset pagination over partitioned tables.
//!
//! Partitioned stores cannot page with row offsets; instead a query resumes
//! from the partitioner hash (`token(...)`) of the last row it saw. The
//! builders here emit exactly one such comparison at a time, ready to be
//! embedded into a larger `WHERE` clause by a statement builder:
//!
//! ```
//! use token_cmp::{token, token_exact};
//!
//! let next_page = token(["tenant", "id"])?.gt();
//! assert_eq!(next_page.to_string(), "token(tenant,id)>token(:tenant,:id)");
//!
//! let mut cql = String::new();
//! let names = token_exact(["tenant", "id"])?
//!     .gt_named(["cursor"])?
//!     .write_cql(&mut cql);
//! assert_eq!(cql, "token(tenant,id)>?");
//! assert_eq!(&*names[0], "cursor");
//! # Ok::<(), token_cmp::TokenError>(())
//! ```

mod cmp;
mod error;
mod logging;
mod option;
mod token;

pub use crate::{
    cmp::{Cmp, ComparisonOp, Func, Param, Value},
    error::TokenError,
    option::{TokenOptions, DEFAULT_EXACT_PARAM, DEFAULT_FUNCTION},
    token::{
        token, token_exact, ColumnTokenBuilder, ExactTokenBuilder, ExactValue, RhsStrategy,
        TokenBuilder, WrapColumns,
    },
};
