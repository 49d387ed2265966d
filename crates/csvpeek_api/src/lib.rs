mod csvpeek_api;

pub use csvpeek_api::*;
pub use csvpeek_domain::{CsvFormat, DataTable, Error, LineWindow, ReadOptions};
