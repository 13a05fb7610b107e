use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A path relative to the build tool's execution root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionRootPath(PathBuf);

impl ExecutionRootPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ExecutionRootPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for ExecutionRootPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A file produced or referenced by the build.
///
/// `root_execution_path_fragment` is empty for source files in the main
/// workspace, `bazel-out/<config>/bin` style for generated files and
/// `external/<repo>` for files in external repositories. Locations are always
/// stored in the current external encoding; legacy records are rewritten on
/// the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactLocation {
    pub root_execution_path_fragment: String,
    pub relative_path: String,
    pub is_source: bool,
    pub is_external: bool,
}

impl ArtifactLocation {
    pub fn builder() -> ArtifactLocationBuilder {
        ArtifactLocationBuilder::default()
    }

    pub fn is_generated(&self) -> bool {
        !self.is_source
    }

    /// Path relative to the execution root: the root fragment joined with the
    /// relative path.
    pub fn execution_root_relative_path(&self) -> String {
        if self.root_execution_path_fragment.is_empty() {
            self.relative_path.clone()
        } else {
            format!(
                "{}/{}",
                self.root_execution_path_fragment, self.relative_path
            )
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArtifactLocationBuilder {
    root_execution_path_fragment: String,
    relative_path: String,
    is_source: bool,
    is_external: bool,
}

impl ArtifactLocationBuilder {
    pub fn root_execution_path_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.root_execution_path_fragment = fragment.into();
        self
    }

    pub fn relative_path(mut self, path: impl Into<String>) -> Self {
        self.relative_path = path.into();
        self
    }

    pub fn is_source(mut self, is_source: bool) -> Self {
        self.is_source = is_source;
        self
    }

    pub fn is_external(mut self, is_external: bool) -> Self {
        self.is_external = is_external;
        self
    }

    pub fn build(self) -> ArtifactLocation {
        ArtifactLocation {
            root_execution_path_fragment: self.root_execution_path_fragment,
            relative_path: self.relative_path,
            is_source: self.is_source,
            is_external: self.is_external,
        }
    }
}

/// A jar dependency: interface jar, class jar and optional source jar.
///
/// At least one of `interface_jar` / `class_jar` is always present, also when
/// decoded from previously written targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LibraryArtifactFields")]
pub struct LibraryArtifact {
    interface_jar: Option<ArtifactLocation>,
    class_jar: Option<ArtifactLocation>,
    source_jar: Option<ArtifactLocation>,
}

impl LibraryArtifact {
    /// Returns `None` when neither an interface jar nor a class jar is known.
    pub fn new(
        interface_jar: Option<ArtifactLocation>,
        class_jar: Option<ArtifactLocation>,
        source_jar: Option<ArtifactLocation>,
    ) -> Option<Self> {
        if interface_jar.is_none() && class_jar.is_none() {
            return None;
        }
        Some(Self {
            interface_jar,
            class_jar,
            source_jar,
        })
    }

    pub fn interface_jar(&self) -> Option<&ArtifactLocation> {
        self.interface_jar.as_ref()
    }

    pub fn class_jar(&self) -> Option<&ArtifactLocation> {
        self.class_jar.as_ref()
    }

    pub fn source_jar(&self) -> Option<&ArtifactLocation> {
        self.source_jar.as_ref()
    }

    /// The jar the IDE should index: the interface jar when there is one.
    pub fn jar_for_ide(&self) -> Option<&ArtifactLocation> {
        self.interface_jar.as_ref().or(self.class_jar.as_ref())
    }
}

#[derive(Deserialize)]
struct LibraryArtifactFields {
    #[serde(default)]
    interface_jar: Option<ArtifactLocation>,
    #[serde(default)]
    class_jar: Option<ArtifactLocation>,
    #[serde(default)]
    source_jar: Option<ArtifactLocation>,
}

impl TryFrom<LibraryArtifactFields> for LibraryArtifact {
    type Error = ApiError;

    fn try_from(fields: LibraryArtifactFields) -> Result<Self, Self::Error> {
        LibraryArtifact::new(fields.interface_jar, fields.class_jar, fields.source_jar).ok_or_else(
            || ApiError::InvalidArgument("library artifact needs an interface or class jar".into()),
        )
    }
}
