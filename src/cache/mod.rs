//! Caching of file-backed project configuration.

pub mod project_config;

pub use project_config::{ConfigFileSource, FsConfigSource, ProjectConfigStore, StoreStats};
