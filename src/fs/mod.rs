//! File handles and whole-file helpers, built directly on Linux syscalls.
//!
//! Most code only needs [`read_entire_file`] and [`write_entire_file`]. [`File`] is there for
//! anything more involved.
//!
//! Every file descriptor is owned by a value whose [`Drop`] closes it, so leaving a function early
//! with `?` never leaks one. Errors are described in the crate root documentation.
#![cfg(target_os = "linux")]

pub mod entire;
pub mod file;

mod error;
mod fd;
mod panic;
mod syscall;

pub use entire::*;
pub use error::*;
pub use file::*;
pub use panic::*;
pub(crate) use fd::*;
pub(crate) use syscall::*;
