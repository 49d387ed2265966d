use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use crate::CsvFormat;

/// Per-call options shared by every read operation.
#[derive(Debug, Clone, PartialEq, Eq, Setters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[setters(strip_option)]
pub struct ReadOptions {
    /// Whether the file carries a header row ahead of the data.
    pub header: bool,

    /// Physical lines to skip before the header (or before the data when
    /// there is no header). Useful for files with a preamble.
    pub skip_first_rows: u64,

    /// Wire-format options handed to the parser.
    pub format: CsvFormat,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            header: true,
            skip_first_rows: 0,
            format: CsvFormat::default(),
        }
    }
}
