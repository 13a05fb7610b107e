use super::label::TargetKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyType {
    #[default]
    CompileTime,
    Runtime,
}

/// An edge from a target to one of its dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub target_key: TargetKey,
    pub dependency_type: DependencyType,
}

impl Dependency {
    pub fn new(target_key: TargetKey, dependency_type: DependencyType) -> Self {
        Self {
            target_key,
            dependency_type,
        }
    }
}
