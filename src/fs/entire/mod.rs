//! Reading and writing a file in one call, through a [`StringBuilder`].
//!
//! [`StringBuilder`]: crate::collections::contiguous::StringBuilder

mod entire;
mod error;
mod tests;

pub use entire::*;
pub use error::*;
