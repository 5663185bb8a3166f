// Export modules for library usage
pub mod cache;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod core;
pub mod correlation;
pub mod errors;
pub mod patterns;

// Re-export commonly used types
pub use crate::core::{
    Member, MemberKind, MethodRole, MethodVerdict, ProjectId, ProjectRef, Structure, Verdict,
};

pub use crate::classifier::{classify, classify_structure};

pub use crate::config::{
    merge, resolve, ConfigResolver, Configuration, EffectiveConfiguration, GlobalConfig,
    ProjectConfiguration,
};

pub use crate::cache::{ConfigFileSource, FsConfigSource, ProjectConfigStore};

pub use crate::correlation::{extract_documented_properties, find_member, member_exists};

pub use crate::patterns::{
    camel_to_snake, match_name, name_variants, snake_to_camel, CompiledPattern, PatternMatch,
};

pub use crate::errors::ConfigError;
