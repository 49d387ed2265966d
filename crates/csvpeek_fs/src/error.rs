#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Line numbers are 1-based, got range {start}..={end}")]
    ZeroLine { start: u64, end: u64 },

    #[error("Start line {start} is greater than end line {end}")]
    StartGreaterThanEnd { start: u64, end: u64 },
}
