//! Phone segment directory loading and lookup storage.
//!
//! This module handles loading carrier/geography records from the CSV
//! data file and provides the in-memory segment-keyed directory used by
//! the lookup service. The directory is built once at startup and never
//! mutated afterwards, so it can be shared freely between concurrent
//! readers.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Number of columns a data row must carry to be accepted.
const RECORD_FIELD_COUNT: usize = 8;

/// Carrier and geography metadata for one phone number segment.
///
/// Created once per data-file row at load time and never mutated.
/// Serializes in camelCase to match the HTTP wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberInfo {
    /// Number prefix (first 3 digits); nullable on the wire.
    pub prefix: Option<String>,
    /// Number segment (first 7 digits), the lookup key.
    pub segment: String,
    /// Province the segment is registered in.
    pub province: String,
    /// City the segment is registered in.
    pub city: String,
    /// Carrier operating the segment.
    pub service_provider: String,
    /// Telephone area code.
    pub area_code: String,
    /// Postal code.
    pub postal_code: String,
    /// Administrative area number.
    pub area_number: String,
}

/// In-memory mapping from 7-digit segment to its carrier/geography
/// record, loaded from a CSV data file.
#[derive(Debug, Clone, Default)]
pub struct PhoneDirectory {
    records: HashMap<String, PhoneNumberInfo>,
    source: Option<PathBuf>,
}

impl PhoneDirectory {
    /// Load a phone directory from a file path.
    ///
    /// The file must exist; a missing file is fatal since the service
    /// cannot answer queries without data. Malformed rows are skipped
    /// with a warning and the load continues.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::DataFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = fs::File::open(path)?;
        let mut directory = Self::from_reader(file)?;
        directory.source = Some(path.to_path_buf());
        Ok(directory)
    }

    /// Load a phone directory from a reader (e.g., file or in-memory
    /// buffer).
    ///
    /// The first row is treated as a header and skipped. Rows with
    /// fewer than eight comma-separated fields, and rows that fail to
    /// parse at all, are skipped with a warning. Later rows overwrite
    /// earlier ones that share a segment (last-write-wins).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        // Quoting stays disabled: fields are literal comma-separated
        // text, and an unbalanced quote in one bad row must not open a
        // quoted field that swallows the lines after it.
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut records = HashMap::new();
        for result in csv_reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    warn!(
                        line = err.position().map(|p| p.line()).unwrap_or(0),
                        error = %err,
                        "skipping unparseable data row"
                    );
                    continue;
                }
            };

            if record.len() < RECORD_FIELD_COUNT {
                warn!(
                    line = record.position().map(|p| p.line()).unwrap_or(0),
                    fields = record.len(),
                    "skipping data row with too few fields"
                );
                continue;
            }

            let info = PhoneNumberInfo {
                prefix: Some(record[0].to_string()),
                segment: record[1].to_string(),
                province: record[2].to_string(),
                city: record[3].to_string(),
                service_provider: record[4].to_string(),
                area_code: record[5].to_string(),
                postal_code: record[6].to_string(),
                area_number: record[7].to_string(),
            };

            // Last occurrence of a segment wins.
            records.insert(info.segment.clone(), info);
        }

        info!(record_count = records.len(), "phone directory loaded");

        Ok(Self {
            records,
            source: None,
        })
    }

    /// Look up the record for a 7-digit segment.
    pub fn get(&self, segment: &str) -> Option<&PhoneNumberInfo> {
        self.records.get(segment)
    }

    /// Number of segments in the directory.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path the directory was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
