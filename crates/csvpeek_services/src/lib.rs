mod infra;
mod reader;
mod window;

pub use infra::*;
pub use reader::*;
pub use window::*;
