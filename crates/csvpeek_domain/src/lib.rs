mod error;
mod format;
mod options;
mod table;
mod window;

pub use error::*;
pub use format::*;
pub use options::*;
pub use table::*;
pub use window::*;
