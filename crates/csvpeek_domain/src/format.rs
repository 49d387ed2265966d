use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Wire-format options handed through to the table parser.
///
/// The defaults describe plain comma-separated text with double-quote
/// quoting. Everything here is opaque to the range-resolution core; only the
/// parser interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Setters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[setters(strip_option)]
pub struct CsvFormat {
    /// Field delimiter.
    pub delimiter: u8,

    /// Quote character used around fields that contain the delimiter.
    pub quote: u8,

    /// Escape character, when the dialect uses one.
    pub escape: Option<u8>,

    /// Lines starting with this byte are treated as comments by the parser.
    pub comment: Option<u8>,

    /// Upper bound on the number of records inspected during column-type
    /// inference.
    pub max_inference_records: Option<usize>,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            escape: None,
            comment: None,
            max_inference_records: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_format_is_comma_separated() {
        let fixture = CsvFormat::default();
        let actual = (fixture.delimiter, fixture.quote);
        let expected = (b',', b'"');
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_setters_override_delimiter() {
        let fixture = CsvFormat::default().delimiter(b';');
        let actual = fixture.delimiter;
        let expected = b';';
        assert_eq!(actual, expected);
    }
}
