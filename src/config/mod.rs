//! Configuration for accessor/mutator classification.
//!
//! ## Process-wide settings
//!
//! Persisted by the host as comma-joined pattern strings plus an `enabled`
//! flag. The CLI keeps them in `<config_dir>/getsetmap/settings.toml`
//! (override with `GETSETMAP_SETTINGS`):
//!
//! ```toml
//! getter_patterns = "get*,is*,has*"
//! setter_patterns = "set*"
//! enabled = true
//! ```
//!
//! ## Project settings
//!
//! Optional `<root>/.plugin/get-set-highlighter/config.json`, parsed
//! tolerantly (see [`project`]) and cached by modification time
//! (see [`crate::cache::ProjectConfigStore`]).
//!
//! Use the [`resolver`] module to merge the two tiers.

pub mod core;
pub mod loader;
pub mod project;
pub mod resolver;
pub mod settings;

pub use self::core::{Configuration, EffectiveConfiguration, GlobalConfig};
pub use loader::{default_settings_path, load_settings, parse_settings, save_settings};
pub use project::{parse_project_config, ProjectConfiguration};
pub use resolver::{merge, resolve, ConfigResolver};
pub use settings::{split_patterns, PersistedSettings};
