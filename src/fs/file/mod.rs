mod error;
mod file;

pub use error::*;
pub use file::*;
