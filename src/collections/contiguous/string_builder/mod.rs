//! A module containing [`StringBuilder`], a [`Vector`](super::Vector) of bytes for accumulating
//! text and binary data.
//!
//! [`StringBuilder`] is also re-exported under the parent module.

mod string_builder;

pub use string_builder::*;
