use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;
use std::str::FromStr;

/// A build target label of the form `[@repo]//package[:name]`.
///
/// When the `:name` part is omitted the target name defaults to the last
/// segment of the package, so `//foo/bar` and `//foo/bar:bar` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label {
    workspace: Option<SmolStr>,
    package: SmolStr,
    name: SmolStr,
}

impl Label {
    pub fn parse(text: &str) -> ApiResult<Self> {
        let invalid = || ApiError::InvalidLabel(text.to_string());

        let (workspace, rest) = match text.strip_prefix('@') {
            Some(stripped) => {
                let idx = stripped.find("//").ok_or_else(invalid)?;
                (Some(SmolStr::new(&stripped[..idx])), &stripped[idx..])
            }
            None => (None, text),
        };

        let rest = rest.strip_prefix("//").ok_or_else(invalid)?;
        let (package, name) = match rest.split_once(':') {
            Some((package, name)) => (package, name),
            None => (rest, rest.rsplit('/').next().unwrap_or(rest)),
        };

        if name.is_empty()
            || name.contains(':')
            || name.starts_with('/')
            || name.ends_with('/')
            || name.contains("//")
        {
            return Err(invalid());
        }
        if package.starts_with('/') || package.ends_with('/') || package.contains("//") {
            return Err(invalid());
        }

        Ok(Self {
            workspace,
            package: SmolStr::new(package),
            name: SmolStr::new(name),
        })
    }

    /// External repository name, `None` for labels in the main workspace.
    pub fn external_workspace(&self) -> Option<&str> {
        self.workspace.as_deref()
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// The part after `:`. May itself contain `/`, e.g. `foo/FooTest`.
    pub fn target_name(&self) -> &str {
        &self.name
    }

    /// The last `/` segment of the target name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// The directory part of the target name, if it has one.
    pub fn name_directory(&self) -> Option<&str> {
        self.name.rsplit_once('/').map(|(dir, _)| dir)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(workspace) = &self.workspace {
            write!(f, "@{}", workspace)?;
        }
        write!(f, "//{}:{}", self.package, self.name)
    }
}

impl FromStr for Label {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Label {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.to_string()
    }
}

/// Identifies a target together with the aspects that were applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetKey {
    pub label: Label,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aspect_ids: Vec<String>,
}

impl TargetKey {
    pub fn for_plain_target(label: Label) -> Self {
        Self {
            label,
            aspect_ids: Vec::new(),
        }
    }

    pub fn for_general_target(label: Label, aspect_ids: Vec<String>) -> Self {
        Self { label, aspect_ids }
    }

    pub fn is_plain(&self) -> bool {
        self.aspect_ids.is_empty()
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        for aspect in &self.aspect_ids {
            write!(f, "#{}", aspect)?;
        }
        Ok(())
    }
}
