use crate::models::artifact::{ArtifactLocation, LibraryArtifact};
use crate::models::label::Label;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AndroidIdeInfo {
    pub resources: Vec<ArtifactLocation>,
    pub java_package: String,
    pub generate_resource_class: bool,
    pub manifest: Option<ArtifactLocation>,
    pub idl_jar: Option<LibraryArtifact>,
    pub resource_jar: Option<LibraryArtifact>,
    pub has_idl_sources: bool,
    pub legacy_resources: Option<Label>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AndroidSdkIdeInfo {
    pub android_jar: Option<ArtifactLocation>,
}
