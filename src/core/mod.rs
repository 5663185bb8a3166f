//! Core data model shared by the classifier, correlator and configuration layers.
//!
//! Everything here is supplied by the host (structures, members, method names)
//! or produced by classification (verdicts). None of these values are mutated
//! once constructed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of data member a structure exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// Declared field
    Field,
    /// Property that only exists in documentation (e.g. `@property` tags)
    DocumentedProperty,
}

/// A data member belonging to a structure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    /// Raw member name as reported by the host, possibly with a sigil (`$name`)
    pub name: String,
    pub kind: MemberKind,
}

impl Member {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
        }
    }
}

/// Structural facts about one class-like entity, as supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// Structure name, used only for diagnostics
    #[serde(default)]
    pub name: String,

    /// Declared fields
    #[serde(default)]
    pub fields: Vec<String>,

    /// Documented-but-undeclared member names
    #[serde(default)]
    pub documented: Vec<String>,

    /// Raw documentation text; `@property` tags found here are added to `documented`
    #[serde(default)]
    pub doc_comment: Option<String>,

    /// Callable member names to classify
    #[serde(default)]
    pub methods: Vec<String>,
}

impl Structure {
    /// Declared fields as members
    pub fn members(&self) -> Vec<Member> {
        self.fields.iter().map(Member::field).collect()
    }

    /// Documented names from both the explicit list and the doc comment
    pub fn documented_names(&self) -> Vec<String> {
        let mut names = self.documented.clone();
        if let Some(doc) = &self.doc_comment {
            names.extend(crate::correlation::extract_documented_properties(doc));
        }
        names
    }
}

/// Role a method plays with respect to a data member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodRole {
    Accessor,
    Mutator,
    None,
}

impl MethodRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodRole::Accessor => "accessor",
            MethodRole::Mutator => "mutator",
            MethodRole::None => "none",
        }
    }
}

impl fmt::Display for MethodRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result for one method.
///
/// `fragment` is `Some` exactly when `kind` is not [`MethodRole::None`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verdict {
    pub kind: MethodRole,
    pub fragment: Option<String>,
}

impl Verdict {
    pub fn none() -> Self {
        Self {
            kind: MethodRole::None,
            fragment: None,
        }
    }

    pub fn accessor(fragment: impl Into<String>) -> Self {
        Self {
            kind: MethodRole::Accessor,
            fragment: Some(fragment.into()),
        }
    }

    pub fn mutator(fragment: impl Into<String>) -> Self {
        Self {
            kind: MethodRole::Mutator,
            fragment: Some(fragment.into()),
        }
    }

    pub fn is_none(&self) -> bool {
        self.kind == MethodRole::None
    }
}

/// Verdict paired with the method it was computed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodVerdict {
    pub method: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Stable identifier for a project, used as the project configuration cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Path> for ProjectId {
    fn from(root: &Path) -> Self {
        Self(root.to_string_lossy().into_owned())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directory under the project root that holds plugin data
pub const PLUGIN_DATA_DIR: &str = ".plugin";
/// Per-plugin directory name inside [`PLUGIN_DATA_DIR`]
pub const PLUGIN_NAME: &str = "get-set-highlighter";
/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "config.json";

/// A project identifier together with the location of its configuration file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRef {
    pub id: ProjectId,
    pub config_path: PathBuf,
}

impl ProjectRef {
    pub fn new(id: ProjectId, config_path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            config_path: config_path.into(),
        }
    }

    /// Project rooted at `root`, using the conventional
    /// `<root>/.plugin/get-set-highlighter/config.json` location
    pub fn from_root(root: &Path) -> Self {
        Self {
            id: ProjectId::from(root),
            config_path: project_config_path(root),
        }
    }
}

pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(PLUGIN_DATA_DIR)
        .join(PLUGIN_NAME)
        .join(PROJECT_CONFIG_FILE)
}
