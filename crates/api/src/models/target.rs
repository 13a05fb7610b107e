use super::artifact::ArtifactLocation;
use super::dependency::{Dependency, DependencyType};
use super::facet::{
    AndroidIdeInfo, AndroidSdkIdeInfo, CIdeInfo, CToolchainIdeInfo, JavaIdeInfo,
    JavaToolchainIdeInfo, ProtoLibraryLegacyInfo, PyIdeInfo, TestIdeInfo,
};
use super::kind::Kind;
use super::label::{Label, TargetKey};
use serde::{Deserialize, Serialize};

/// Everything the IDE knows about one build target.
///
/// Values are built once from an aspect record and not changed afterwards.
/// `sources` aggregates the sources of the native, Java and Python facets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetIdeInfo {
    pub key: TargetKey,
    pub kind: Kind,
    pub build_file: Option<ArtifactLocation>,
    pub dependencies: Vec<Dependency>,
    pub tags: Vec<String>,
    pub sources: Vec<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_ide_info: Option<CIdeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_toolchain_ide_info: Option<CToolchainIdeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_ide_info: Option<JavaIdeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_ide_info: Option<AndroidIdeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_sdk_ide_info: Option<AndroidSdkIdeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub py_ide_info: Option<PyIdeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_ide_info: Option<TestIdeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proto_library_legacy_info: Option<ProtoLibraryLegacyInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_toolchain_ide_info: Option<JavaToolchainIdeInfo>,
}

impl TargetIdeInfo {
    pub fn builder(key: TargetKey, kind: Kind) -> TargetIdeInfoBuilder {
        TargetIdeInfoBuilder::new(key, kind)
    }

    pub fn label(&self) -> &Label {
        &self.key.label
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn dependencies_of_type(
        &self,
        dependency_type: DependencyType,
    ) -> impl Iterator<Item = &Dependency> {
        self.dependencies
            .iter()
            .filter(move |d| d.dependency_type == dependency_type)
    }
}

pub struct TargetIdeInfoBuilder {
    info: TargetIdeInfo,
}

impl TargetIdeInfoBuilder {
    fn new(key: TargetKey, kind: Kind) -> Self {
        Self {
            info: TargetIdeInfo {
                key,
                kind,
                build_file: None,
                dependencies: Vec::new(),
                tags: Vec::new(),
                sources: Vec::new(),
                c_ide_info: None,
                c_toolchain_ide_info: None,
                java_ide_info: None,
                android_ide_info: None,
                android_sdk_ide_info: None,
                py_ide_info: None,
                test_ide_info: None,
                proto_library_legacy_info: None,
                java_toolchain_ide_info: None,
            },
        }
    }

    pub fn build_file(mut self, location: Option<ArtifactLocation>) -> Self {
        self.info.build_file = location;
        self
    }

    pub fn dependencies(mut self, dependencies: impl IntoIterator<Item = Dependency>) -> Self {
        self.info.dependencies.extend(dependencies);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.info.tags.extend(tags);
        self
    }

    pub fn sources(mut self, sources: impl IntoIterator<Item = ArtifactLocation>) -> Self {
        self.info.sources.extend(sources);
        self
    }

    pub fn c_ide_info(mut self, info: Option<CIdeInfo>) -> Self {
        self.info.c_ide_info = info;
        self
    }

    pub fn c_toolchain_ide_info(mut self, info: Option<CToolchainIdeInfo>) -> Self {
        self.info.c_toolchain_ide_info = info;
        self
    }

    pub fn java_ide_info(mut self, info: Option<JavaIdeInfo>) -> Self {
        self.info.java_ide_info = info;
        self
    }

    pub fn android_ide_info(mut self, info: Option<AndroidIdeInfo>) -> Self {
        self.info.android_ide_info = info;
        self
    }

    pub fn android_sdk_ide_info(mut self, info: Option<AndroidSdkIdeInfo>) -> Self {
        self.info.android_sdk_ide_info = info;
        self
    }

    pub fn py_ide_info(mut self, info: Option<PyIdeInfo>) -> Self {
        self.info.py_ide_info = info;
        self
    }

    pub fn test_ide_info(mut self, info: Option<TestIdeInfo>) -> Self {
        self.info.test_ide_info = info;
        self
    }

    pub fn proto_library_legacy_info(mut self, info: Option<ProtoLibraryLegacyInfo>) -> Self {
        self.info.proto_library_legacy_info = info;
        self
    }

    pub fn java_toolchain_ide_info(mut self, info: Option<JavaToolchainIdeInfo>) -> Self {
        self.info.java_toolchain_ide_info = info;
        self
    }

    pub fn build(self) -> TargetIdeInfo {
        self.info
    }
}
