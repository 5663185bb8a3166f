//! Name pattern matching and naming-convention normalization.
//!
//! - [`wildcard`]: compiles `get*`-style patterns and extracts the wildcard span
//! - [`naming`]: generates camelCase / snake_case variants of a fragment

pub mod naming;
pub mod wildcard;

pub use naming::{camel_to_snake, name_variants, snake_to_camel};
pub use wildcard::{compile_all, match_name, CompiledPattern, PatternMatch};
