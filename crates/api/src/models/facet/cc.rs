use crate::models::artifact::{ArtifactLocation, ExecutionRootPath};
use serde::{Deserialize, Serialize};

/// Native (C/C++) compilation facts for one target.
///
/// `local_*` values come from the target's own copts; `transitive_*` values
/// are taken as reported by the aspect.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CIdeInfo {
    pub sources: Vec<ArtifactLocation>,
    pub local_defines: Vec<String>,
    pub local_include_directories: Vec<ExecutionRootPath>,
    pub transitive_include_directories: Vec<ExecutionRootPath>,
    pub transitive_quote_include_directories: Vec<ExecutionRootPath>,
    pub transitive_defines: Vec<String>,
    pub transitive_system_include_directories: Vec<ExecutionRootPath>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CToolchainIdeInfo {
    pub base_compiler_options: Vec<String>,
    pub c_compiler_options: Vec<String>,
    pub cpp_compiler_options: Vec<String>,
    pub link_options: Vec<String>,
    pub built_in_include_directories: Vec<ExecutionRootPath>,
    pub cpp_executable: ExecutionRootPath,
    pub preprocessor_executable: ExecutionRootPath,
    pub target_name: String,
    /// Raw unfiltered options minus the split-form `-isystem <dir>` pairs.
    pub unfiltered_compiler_options: Vec<String>,
    pub unfiltered_toolchain_system_includes: Vec<ExecutionRootPath>,
}
