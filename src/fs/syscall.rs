use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::c_int;

use crate::fs::InvalidPathError;

pub(crate) fn err_no() -> c_int {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

/// Converts a path into the nul-terminated form the kernel expects.
pub(crate) fn c_path(path: &Path) -> Result<CString, InvalidPathError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| InvalidPathError)
}
