//! Records as emitted by the IDE-info build aspect.
//!
//! Every field is defaulted: records written by older aspect versions lack
//! the newer fields and vice versa, and both must decode.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ArtifactLocation {
    pub relative_path: String,
    pub is_source: bool,
    pub is_external: bool,
    pub root_execution_path_fragment: String,
    pub is_new_external_version: bool,
}

/// How an external artifact's path is split between root fragment and
/// relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalPathEncoding {
    /// `external/<repo>` was written into the relative path.
    Legacy,
    Current,
}

impl ArtifactLocation {
    pub fn external_path_encoding(&self) -> ExternalPathEncoding {
        if self.is_new_external_version {
            ExternalPathEncoding::Current
        } else {
            ExternalPathEncoding::Legacy
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LibraryArtifact {
    pub jar: Option<ArtifactLocation>,
    pub interface_jar: Option<ArtifactLocation>,
    pub source_jar: Option<ArtifactLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TargetKey {
    pub label: String,
    pub aspect_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DependencyType {
    #[default]
    CompileTime,
    Runtime,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Dependency {
    pub target: Option<TargetKey>,
    pub dependency_type: DependencyType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CIdeInfo {
    pub source: Vec<ArtifactLocation>,
    pub transitive_include_directory: Vec<String>,
    pub transitive_quote_include_directory: Vec<String>,
    pub transitive_define: Vec<String>,
    pub transitive_system_include_directory: Vec<String>,
    pub target_copt: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CToolchainIdeInfo {
    pub base_compiler_option: Vec<String>,
    pub c_option: Vec<String>,
    pub cpp_option: Vec<String>,
    pub link_option: Vec<String>,
    pub unfiltered_compiler_option: Vec<String>,
    pub preprocessor_executable: String,
    pub cpp_executable: String,
    pub built_in_include_directory: Vec<String>,
    pub target_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct JavaIdeInfo {
    pub jars: Vec<LibraryArtifact>,
    pub generated_jars: Vec<LibraryArtifact>,
    pub filtered_gen_jar: Option<LibraryArtifact>,
    pub sources: Vec<ArtifactLocation>,
    pub package_manifest: Option<ArtifactLocation>,
    pub jdeps: Option<ArtifactLocation>,
    pub main_class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AndroidIdeInfo {
    pub resources: Vec<ArtifactLocation>,
    pub manifest: Option<ArtifactLocation>,
    pub java_package: String,
    pub generate_resource_class: bool,
    pub legacy_resources: String,
    pub idl_jar: Option<LibraryArtifact>,
    pub has_idl_sources: bool,
    pub resource_jar: Option<LibraryArtifact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AndroidSdkIdeInfo {
    pub android_jar: Option<ArtifactLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PyIdeInfo {
    pub sources: Vec<ArtifactLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TestInfo {
    pub size: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiFlavor {
    Mutable,
    Immutable,
    Both,
    #[default]
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProtoLibraryLegacyJavaIdeInfo {
    pub api_version: i32,
    pub jars1: Vec<LibraryArtifact>,
    pub jars_mutable: Vec<LibraryArtifact>,
    pub jars_immutable: Vec<LibraryArtifact>,
    pub api_flavor: ApiFlavor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct JavaToolchainIdeInfo {
    pub source_version: String,
    pub target_version: String,
}

/// Which of the two dependency encodings a record uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyEncoding {
    /// Separate `dependencies` / `runtime_deps` label lists.
    Legacy,
    /// A single `deps` list with a type tag per entry.
    Unified,
}

/// One target as reported by the aspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TargetIdeInfo {
    pub label: String,
    pub key: Option<TargetKey>,
    pub kind_string: String,
    pub dependencies: Vec<String>,
    pub runtime_deps: Vec<String>,
    pub deps: Vec<Dependency>,
    pub tags: Vec<String>,
    pub build_file_artifact_location: Option<ArtifactLocation>,
    pub c_ide_info: Option<CIdeInfo>,
    pub c_toolchain_ide_info: Option<CToolchainIdeInfo>,
    pub java_ide_info: Option<JavaIdeInfo>,
    pub android_ide_info: Option<AndroidIdeInfo>,
    pub android_sdk_ide_info: Option<AndroidSdkIdeInfo>,
    pub py_ide_info: Option<PyIdeInfo>,
    pub test_info: Option<TestInfo>,
    pub proto_library_legacy_java_ide_info: Option<ProtoLibraryLegacyJavaIdeInfo>,
    pub java_toolchain_ide_info: Option<JavaToolchainIdeInfo>,
}

impl TargetIdeInfo {
    pub fn dependency_encoding(&self) -> DependencyEncoding {
        if self.deps.is_empty() {
            DependencyEncoding::Legacy
        } else {
            DependencyEncoding::Unified
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let record: TargetIdeInfo =
            serde_json::from_value(json!({ "label": "//foo:bar" })).unwrap();
        assert_eq!(record.label, "//foo:bar");
        assert!(record.kind_string.is_empty());
        assert!(record.java_ide_info.is_none());
        assert_eq!(record.dependency_encoding(), DependencyEncoding::Legacy);
    }

    #[test]
    fn test_unknown_enum_values_decode() {
        let dep: Dependency = serde_json::from_value(json!({
            "target": { "label": "//a:a" },
            "dependency_type": "SOMETHING_NEW"
        }))
        .unwrap();
        assert_eq!(dep.dependency_type, DependencyType::Unrecognized);

        let proto: ProtoLibraryLegacyJavaIdeInfo =
            serde_json::from_value(json!({ "api_flavor": "FUTURE" })).unwrap();
        assert_eq!(proto.api_flavor, ApiFlavor::Unrecognized);
    }

    #[test]
    fn test_external_path_encoding() {
        let legacy = ArtifactLocation {
            is_external: true,
            ..Default::default()
        };
        assert_eq!(legacy.external_path_encoding(), ExternalPathEncoding::Legacy);
        let current = ArtifactLocation {
            is_new_external_version: true,
            ..legacy
        };
        assert_eq!(current.external_path_encoding(), ExternalPathEncoding::Current);
    }
}
