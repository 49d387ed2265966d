use std::io::Cursor;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::record_batch::RecordBatch;
use csvpeek_domain::{CsvFormat, DataTable};
use csvpeek_services::TableParserInfra;

/// Records inspected during type inference when the caller sets no cap.
const DEFAULT_MAX_INFERENCE_RECORDS: usize = 1024;

/// Decodes extracted CSV text into a typed table with Arrow's CSV reader.
pub struct PeekTableParserService;

impl Default for PeekTableParserService {
    fn default() -> Self {
        Self
    }
}

impl PeekTableParserService {
    pub fn new() -> Self {
        Self
    }
}

impl TableParserInfra for PeekTableParserService {
    fn parse_table(
        &self,
        header_text: Option<&str>,
        data_text: &str,
        has_header: bool,
        format: &CsvFormat,
    ) -> Result<DataTable> {
        // A blank header line means the file had none
        let header = header_text.filter(|text| !text.trim().is_empty());
        let has_data = !data_text.trim().is_empty();

        let (content, with_header) = match (has_header, header, has_data) {
            (true, Some(header), false) => (header.to_string(), true),
            (true, Some(header), true) => (format!("{header}\n{data_text}"), true),
            (true, None, true) | (false, _, true) => (data_text.to_string(), false),
            (true, None, false) | (false, _, false) => return Ok(DataTable::empty()),
        };

        decode_csv(&content, with_header, format)
    }
}

fn to_arrow_format(with_header: bool, format: &CsvFormat) -> Format {
    let mut arrow_format = Format::default()
        .with_header(with_header)
        .with_delimiter(format.delimiter)
        .with_quote(format.quote);
    if let Some(escape) = format.escape {
        arrow_format = arrow_format.with_escape(escape);
    }
    if let Some(comment) = format.comment {
        arrow_format = arrow_format.with_comment(comment);
    }
    arrow_format
}

fn decode_csv(content: &str, with_header: bool, format: &CsvFormat) -> Result<DataTable> {
    let arrow_format = to_arrow_format(with_header, format);
    let max_records = format
        .max_inference_records
        .unwrap_or(DEFAULT_MAX_INFERENCE_RECORDS);

    let (schema, _) = arrow_format
        .infer_schema(&mut Cursor::new(content.as_bytes()), Some(max_records))
        .context("Failed to infer a schema from the CSV text")?;
    let schema = Arc::new(schema);

    let reader = ReaderBuilder::new(schema.clone())
        .with_format(arrow_format)
        .build(Cursor::new(content.as_bytes()))
        .context("Failed to open the CSV decoder")?;

    let batches = reader
        .collect::<std::result::Result<Vec<RecordBatch>, _>>()
        .context("Failed to decode CSV records")?;

    let batch = arrow::compute::concat_batches(&schema, &batches)
        .context("Failed to assemble the decoded table")?;
    Ok(DataTable::new(batch))
}
