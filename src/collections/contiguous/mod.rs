//! Collections stored in a single contiguous allocation.
//!
//! [`Vector`] is the growable sequence everything else builds on, [`StringBuilder`] is a Vector of
//! bytes with some text-oriented conveniences.

pub mod string_builder;
pub mod vector;

#[doc(inline)]
pub use string_builder::StringBuilder;
#[doc(inline)]
pub use vector::Vector;
