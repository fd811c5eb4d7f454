use std::error::Error;

use derive_more::{Display, Error};

/// An error which can only be caused by a bug, either in this crate or in unsafe code elsewhere
/// in the process. These are never returned, only panicked with.
pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub struct BadFdPanic;
impl Panic for BadFdPanic {}

#[derive(Debug, Display, Error)]
#[display("buffer outside of the accessible address space")]
pub struct BadAddrPanic;
impl Panic for BadAddrPanic {}
