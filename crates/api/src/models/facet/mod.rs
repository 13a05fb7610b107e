//! Per-domain payloads attached to a target.
//!
//! Each facet is an independent value bundle; a target carries any subset of
//! them.

pub mod android;
pub mod cc;
pub mod java;
pub mod py;

pub use android::{AndroidIdeInfo, AndroidSdkIdeInfo};
pub use cc::{CIdeInfo, CToolchainIdeInfo};
pub use java::{ApiFlavor, JavaIdeInfo, JavaToolchainIdeInfo, ProtoLibraryLegacyInfo};
pub use py::PyIdeInfo;
pub use test::{TestIdeInfo, TestSize};
