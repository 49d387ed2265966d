use csvpeek_domain::{Error, LineWindow};

/// Resolved windows for a combined head and tail read.
///
/// Either side may be absent: the file may hold fewer data lines than
/// requested, and a head that already covers everything leaves nothing for
/// the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadTailWindows {
    pub head: Option<LineWindow>,
    pub tail: Option<LineWindow>,
}

/// Number of physical lines to ignore before data begins: the skipped
/// leading lines plus the header line when one is present.
pub fn data_offset(header: bool, skip_first_rows: u64) -> u64 {
    skip_first_rows.saturating_add(u64::from(header))
}

/// Data lines remaining once the header and skip offset are accounted for.
/// Saturates to zero when the offset reaches past the end of the file.
pub fn available_lines(total_lines: u64, header: bool, skip_first_rows: u64) -> u64 {
    total_lines.saturating_sub(data_offset(header, skip_first_rows))
}

/// Resolves the physical line window for the first `n_rows` data lines.
///
/// # Arguments
/// * `total_lines` - Total physical lines in the file
/// * `header` - Whether a header line precedes the data
/// * `skip_first_rows` - Physical lines skipped before the header
/// * `n_rows` - Requested number of data lines
///
/// # Behavior
/// - The request is clamped to the available data lines
/// - Returns `None` when no data line falls inside the window, so no
///   extraction needs to happen at all
pub fn resolve_head(
    total_lines: u64,
    header: bool,
    skip_first_rows: u64,
    n_rows: u64,
) -> Option<LineWindow> {
    let skip = data_offset(header, skip_first_rows);
    let available = total_lines.saturating_sub(skip);
    let n = n_rows.min(available);
    if n == 0 {
        return None;
    }
    Some(LineWindow::new(skip + 1, skip + n))
}

/// Resolves the physical line window for the last `n_rows` data lines.
///
/// The window always ends on the file's last line; clamping to the
/// available data lines keeps its start from reaching back into the header
/// or the skipped region.
pub fn resolve_tail(
    total_lines: u64,
    header: bool,
    skip_first_rows: u64,
    n_rows: u64,
) -> Option<LineWindow> {
    let available = available_lines(total_lines, header, skip_first_rows);
    let n = n_rows.min(available);
    if n == 0 {
        return None;
    }
    Some(LineWindow::new(total_lines - n + 1, total_lines))
}

/// Resolves the windows for a combined head and tail read.
///
/// # Behavior
/// - Each side is clamped to the available data lines
/// - When the clamped windows would overlap, the tail shrinks by the
///   overlap so the two windows never share a physical line; a tail
///   shrunk to nothing becomes `None`
pub fn resolve_head_tail(
    total_lines: u64,
    header: bool,
    skip_first_rows: u64,
    n_rows_head: u64,
    n_rows_tail: u64,
) -> HeadTailWindows {
    let skip = data_offset(header, skip_first_rows);
    let available = total_lines.saturating_sub(skip);
    if available == 0 {
        return HeadTailWindows { head: None, tail: None };
    }

    let head_n = n_rows_head.min(available);
    let mut tail_n = n_rows_tail.min(available);

    let overlap = head_n.saturating_add(tail_n).saturating_sub(available);
    tail_n = tail_n.saturating_sub(overlap);

    let head = if head_n > 0 {
        Some(LineWindow::new(skip + 1, skip + head_n))
    } else {
        None
    };
    let tail = if tail_n > 0 {
        Some(LineWindow::new(total_lines - tail_n + 1, total_lines))
    } else {
        None
    };

    HeadTailWindows { head, tail }
}

/// Resolves the physical line window for a range starting at the 1-based
/// data line `start_line` and extending `rows_after` further data lines.
///
/// # Behavior
/// - `start_line` outside `1..=available` is a hard error, never clamped
/// - A negative `rows_after` behaves as zero extra rows
/// - `rows_after` past the end of the data is clamped to the last line
pub fn resolve_line_range(
    total_lines: u64,
    header: bool,
    skip_first_rows: u64,
    start_line: u64,
    rows_after: i64,
) -> Result<LineWindow, Error> {
    let skip = data_offset(header, skip_first_rows);
    let available = total_lines.saturating_sub(skip);

    if start_line < 1 || start_line > available {
        return Err(Error::InvalidStartLine { start: start_line, available });
    }

    let extra = u64::try_from(rows_after)
        .unwrap_or(0)
        .min(available - start_line);

    Ok(LineWindow::new(skip + start_line, skip + start_line + extra))
}
