use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use csvpeek_api::{CsvFormat, ReadOptions};

#[derive(Parser)]
#[command(
    name = "csvpeek",
    about = "Peek at large CSV files without reading them whole"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the first rows of the file.
    Head(CountArgs),
    /// Print the last rows of the file.
    Tail(CountArgs),
    /// Print the first and last rows of the file in one table.
    Headtail(HeadTailArgs),
    /// Print a range of rows starting at a 1-based data row.
    Range(RangeArgs),
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    /// CSV file to read.
    pub path: PathBuf,
    /// Treat the first line (after any skipped rows) as data, not a header.
    #[arg(long = "no-header")]
    pub no_header: bool,
    /// Skip this many physical lines at the top of the file.
    #[arg(long = "skip", value_name = "ROWS", default_value_t = 0)]
    pub skip_first_rows: u64,
    /// Field delimiter, a single character (use \t for tab).
    #[arg(long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter, default_value = ",")]
    pub delimiter: u8,
}

impl CommonArgs {
    pub fn to_options(&self) -> ReadOptions {
        ReadOptions::default()
            .header(!self.no_header)
            .skip_first_rows(self.skip_first_rows)
            .format(CsvFormat::default().delimiter(self.delimiter))
    }
}

#[derive(Args, Clone)]
pub struct CountArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Number of data rows to read.
    #[arg(short = 'n', long = "rows", value_name = "N", default_value_t = 10)]
    pub n_rows: u64,
}

#[derive(Args, Clone)]
pub struct HeadTailArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Number of rows from the start of the data.
    #[arg(long = "head", value_name = "N", default_value_t = 5)]
    pub n_rows_head: u64,
    /// Number of rows from the end of the data.
    #[arg(long = "tail", value_name = "N", default_value_t = 5)]
    pub n_rows_tail: u64,
}

#[derive(Args, Clone)]
pub struct RangeArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// 1-based data row to start from.
    #[arg(value_name = "START")]
    pub start_line: u64,
    /// Extra rows to read after the starting row; a negative value reads
    /// just the starting row.
    #[arg(
        long = "after",
        value_name = "ROWS",
        default_value_t = 0,
        allow_hyphen_values = true
    )]
    pub rows_after: i64,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] => Ok(*byte),
        [b'\\', b't'] => Ok(b'\t'),
        _ => Err(format!(
            "invalid delimiter '{value}': expected a single character"
        )),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_head_defaults() {
        let cli = Cli::try_parse_from(["csvpeek", "head", "data.csv"]).unwrap();
        let Command::Head(args) = cli.command else {
            panic!("expected the head subcommand")
        };

        assert_eq!(args.n_rows, 10);
        assert_eq!(args.common.path, PathBuf::from("data.csv"));
        assert_eq!(args.common.skip_first_rows, 0);
        assert!(!args.common.no_header);
    }

    #[test]
    fn test_parse_tail_with_row_count() {
        let cli = Cli::try_parse_from(["csvpeek", "tail", "data.csv", "-n", "25"]).unwrap();
        let Command::Tail(args) = cli.command else {
            panic!("expected the tail subcommand")
        };

        assert_eq!(args.n_rows, 25);
    }

    #[test]
    fn test_parse_headtail_counts() {
        let cli = Cli::try_parse_from([
            "csvpeek", "headtail", "data.csv", "--head", "3", "--tail", "2",
        ])
        .unwrap();
        let Command::Headtail(args) = cli.command else {
            panic!("expected the headtail subcommand")
        };

        assert_eq!((args.n_rows_head, args.n_rows_tail), (3, 2));
    }

    #[test]
    fn test_parse_range_with_negative_rows_after() {
        let cli =
            Cli::try_parse_from(["csvpeek", "range", "data.csv", "7", "--after", "-2"]).unwrap();
        let Command::Range(args) = cli.command else {
            panic!("expected the range subcommand")
        };

        assert_eq!(args.start_line, 7);
        assert_eq!(args.rows_after, -2);
    }

    #[test]
    fn test_common_flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "csvpeek",
            "head",
            "data.csv",
            "--no-header",
            "--skip",
            "2",
            "--delimiter",
            ";",
        ])
        .unwrap();
        let Command::Head(args) = cli.command else {
            panic!("expected the head subcommand")
        };

        let actual = args.common.to_options();
        let expected = ReadOptions::default()
            .header(false)
            .skip_first_rows(2)
            .format(CsvFormat::default().delimiter(b';'));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_delimiter_rejects_multiple_characters() {
        let actual = parse_delimiter(";;");
        assert!(actual.is_err());
    }

    #[test]
    fn test_parse_delimiter_accepts_tab_escape() {
        let actual = parse_delimiter("\\t").unwrap();
        assert_eq!(actual, b'\t');
    }
}
