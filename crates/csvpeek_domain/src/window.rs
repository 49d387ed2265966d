/// An inclusive range of physical line numbers, 1-based on both ends.
///
/// A window always covers at least one line; "nothing to fetch" is expressed
/// as `Option<LineWindow>::None` by the resolvers, never as a degenerate
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    /// First physical line of the window.
    pub start: u64,

    /// Last physical line of the window.
    pub end: u64,
}

impl LineWindow {
    /// Creates a window spanning `start..=end`.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// A window covering a single physical line.
    pub fn single(line: u64) -> Self {
        Self { start: line, end: line }
    }

    /// Number of lines covered by the window.
    pub fn line_count(&self) -> u64 {
        self.end - self.start + 1
    }
}
