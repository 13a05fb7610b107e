//! Reading aspect records from disk.

use crate::error::{IngestError, Result};
use crate::wire;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// A JSON array of records.
    #[default]
    Json,
    /// One JSON record per line.
    JsonLines,
    /// A MessagePack array of records.
    MessagePack,
}

impl RecordFormat {
    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("jsonl") | Some("ndjson") => RecordFormat::JsonLines,
            Some("msgpack") | Some("mpk") => RecordFormat::MessagePack,
            _ => RecordFormat::Json,
        }
    }
}

pub fn decode_records(bytes: &[u8], format: RecordFormat) -> Result<Vec<wire::TargetIdeInfo>> {
    match format {
        RecordFormat::Json => Ok(serde_json::from_slice(bytes)?),
        RecordFormat::MessagePack => Ok(rmp_serde::from_slice(bytes)?),
        RecordFormat::JsonLines => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| IngestError::InvalidRecord(format!("not UTF-8: {}", e)))?;
            text.lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(idx, line)| {
                    serde_json::from_str(line)
                        .map_err(|e| IngestError::InvalidRecord(format!("line {}: {}", idx + 1, e)))
                })
                .collect()
        }
    }
}

pub fn read_records(path: &Path, format: RecordFormat) -> Result<Vec<wire::TargetIdeInfo>> {
    let bytes = std::fs::read(path)?;
    decode_records(&bytes, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            RecordFormat::from_path(Path::new("out/targets.jsonl")),
            RecordFormat::JsonLines
        );
        assert_eq!(
            RecordFormat::from_path(Path::new("targets.msgpack")),
            RecordFormat::MessagePack
        );
        assert_eq!(RecordFormat::from_path(Path::new("targets")), RecordFormat::Json);
    }

    #[test]
    fn test_json_lines_skip_blank_lines() {
        let input = b"{\"label\":\"//a:a\"}\n\n{\"label\":\"//b:b\"}\n";
        let records = decode_records(input, RecordFormat::JsonLines).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].label, "//b:b");
    }

    #[test]
    fn test_json_lines_reports_line() {
        let input = b"{\"label\":\"//a:a\"}\nnot json\n";
        let err = decode_records(input, RecordFormat::JsonLines).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_message_pack() {
        let records = vec![wire::TargetIdeInfo {
            label: "//a:a".to_string(),
            kind_string: "java_library".to_string(),
            ..Default::default()
        }];
        let bytes = rmp_serde::to_vec_named(&records).unwrap();
        let decoded = decode_records(&bytes, RecordFormat::MessagePack).unwrap();
        assert_eq!(decoded, records);
    }
}
