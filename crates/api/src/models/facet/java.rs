use crate::models::artifact::{ArtifactLocation, LibraryArtifact};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JavaIdeInfo {
    pub jars: Vec<LibraryArtifact>,
    pub generated_jars: Vec<LibraryArtifact>,
    pub filtered_gen_jar: Option<LibraryArtifact>,
    pub package_manifest: Option<ArtifactLocation>,
    pub jdeps: Option<ArtifactLocation>,
    pub main_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JavaToolchainIdeInfo {
    pub source_version: String,
    pub target_version: String,
}

/// Which generated API a legacy `proto_library` exposes to Java.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiFlavor {
    #[default]
    None,
    Version1,
    Mutable,
    Immutable,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProtoLibraryLegacyInfo {
    pub api_flavor: ApiFlavor,
    pub jars1: Vec<LibraryArtifact>,
    pub jars_mutable: Vec<LibraryArtifact>,
    pub jars_immutable: Vec<LibraryArtifact>,
}

impl ProtoLibraryLegacyInfo {
    /// Jars matching the flavor the target was built with.
    pub fn jars_for_flavor(&self) -> Vec<&LibraryArtifact> {
        match self.api_flavor {
            ApiFlavor::Version1 => self.jars1.iter().collect(),
            ApiFlavor::Mutable => self.jars_mutable.iter().collect(),
            ApiFlavor::Immutable => self.jars_immutable.iter().collect(),
            ApiFlavor::Both => self
                .jars_mutable
                .iter()
                .chain(self.jars_immutable.iter())
                .collect(),
            ApiFlavor::None => Vec::new(),
        }
    }
}
