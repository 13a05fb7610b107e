pub mod batch;
pub mod decode;
pub mod error;
pub mod options;
pub mod translate;
pub mod wire;

pub use batch::{TranslateConfig, TranslationReport, translate_all};
pub use decode::{RecordFormat, decode_records, read_records};
pub use error::IngestError;
pub use options::{UnfilteredCompilerOptions, UnfilteredCompilerOptionsBuilder};
pub use translate::{make_artifact_location, make_library_artifact, translate_target};
