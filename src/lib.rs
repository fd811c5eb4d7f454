//! Small utilities that keep turning up in every project: a growable [`Vector`], a byte-oriented
//! [`StringBuilder`] built on top of it, whole-file helpers and a few odds and ends.
//!
//! [`Vector`]: collections::contiguous::Vector
//! [`StringBuilder`]: collections::contiguous::StringBuilder
//!
//! # Error Handling
//! There are two kinds of failure in this crate, and they are handled differently on purpose.
//!
//! Running out of memory, overflowing the capacity of a [`Vector`] or shifting an argument off of
//! an empty list are treated as fatal. Allocation failure aborts the process and the others panic.
//! Each function that can do this documents it under a `# Panics` heading. There is no sensible
//! way to hand back a half-grown collection, so I haven't tried.
//!
//! Everything the operating system can reasonably refuse (opening, seeking, reading, writing) is
//! returned as a [`Result`]. The errors are strongly typed: each OS error is a zero-sized struct
//! and each operation has an enum over exactly the structs it can produce, so a `match` over an
//! [`OpenError`](fs::OpenError) only has to handle things `open` can actually do.
//!
//! # Logging
//! The [`fs`] helpers report failures through the [`log`](https://docs.rs/log) facade. Install
//! whatever logger suits the binary (anything writing to stderr reproduces the usual behaviour of
//! printing a diagnostic and returning).
//!
//! # Threads
//! Nothing here locks. A [`Vector`] is [`Send`] and [`Sync`] when its elements are, and the borrow
//! checker does the rest.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod args;
#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "fs")]
pub mod fs;
pub mod math;

pub(crate) mod util;
