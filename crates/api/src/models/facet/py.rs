use crate::models::artifact::ArtifactLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PyIdeInfo {
    pub sources: Vec<ArtifactLocation>,
}
