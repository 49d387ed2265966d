mod extract;
mod fs_meta;
mod line_count;
mod parser;
mod peek_infra;

pub use peek_infra::*;
