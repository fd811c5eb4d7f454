//! Walking through command line arguments one at a time.
//!
//! # Examples
//! ```
//! # use dawn::args;
//! let argv = ["prog", "-o", "out.txt"];
//! let mut args = argv.as_slice();
//!
//! let program = args::shift_args(&mut args);
//! assert_eq!(*program, "prog");
//! while let Some(flag) = args::try_shift_args(&mut args) {
//!     if *flag == "-o" {
//!         assert_eq!(*args::shift_args(&mut args), "out.txt");
//!     }
//! }
//! assert!(args.is_empty());
//! ```

use crate::util::error::NoArgumentsLeft;
use crate::util::result::ResultExtension;

/// Removes the first argument from `args` and returns it. The slice is advanced past it, so its
/// length is the number of arguments left. Nothing is copied.
///
/// # Panics
/// Panics if `args` is empty. Running out of arguments here is a bug in the caller's parsing
/// loop; use [`try_shift_args`] when it is a possibility.
pub fn shift_args<'a, T>(args: &mut &'a [T]) -> &'a T {
    try_shift_args(args).ok_or(NoArgumentsLeft).throw()
}

/// Removes the first argument from `args` and returns it, or returns [`None`] if there are no
/// arguments left.
pub const fn try_shift_args<'a, T>(args: &mut &'a [T]) -> Option<&'a T> {
    match args.split_first() {
        Some((first, rest)) => {
            *args = rest;
            Some(first)
        },
        None => None,
    }
}
