use std::ffi::CStr;
use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::Deref;
use std::thread;

use libc::{c_int, mode_t, stat as Stat};

use crate::fs::file::{CloseError, OpenError};
use crate::fs::panic::{BadAddrPanic, BadFdPanic, Panic};
use crate::fs::{
    self, AccessError, BusyExecutableError, ExcessiveLinksError, FileCountError, IOError,
    InterruptError, InvalidPathError, IsDirectoryError, MissingComponentError,
    NonDirComponentError, OOMError, OtherOSError, OversizedFileError, PathLengthError,
    PermissionError, ReadOnlyFSError, StorageExhaustedError, UnsupportedFileError,
};

/// An owned file descriptor, closed when dropped.
pub(crate) struct Fd(pub c_int);

impl Fd {
    pub fn open(pathname: &CStr, flags: c_int, mode: mode_t) -> Result<Fd, OpenError> {
        // SAFETY: pathname is a valid nul-terminated string for the duration of the call.
        match unsafe { libc::open(pathname.as_ptr(), flags | libc::O_CLOEXEC, mode) } {
            -1 => Err(match fs::err_no() {
                libc::EACCES =>                  AccessError.into(),
                libc::EDQUOT | libc::ENOSPC =>   StorageExhaustedError.into(),
                libc::EFAULT =>                  BadAddrPanic.panic(),
                libc::EFBIG | libc::EOVERFLOW => OversizedFileError.into(),
                libc::EINTR =>                   InterruptError.into(),
                libc::EINVAL =>                  InvalidPathError.into(),
                libc::EISDIR =>                  IsDirectoryError.into(),
                libc::ELOOP =>                   ExcessiveLinksError.into(),
                libc::EMFILE | libc::ENFILE =>   FileCountError.into(),
                libc::ENAMETOOLONG =>            PathLengthError.into(),
                libc::ENODEV | libc::ENXIO =>    UnsupportedFileError.into(),
                libc::ENOENT =>                  MissingComponentError.into(),
                libc::ENOMEM =>                  OOMError.into(),
                libc::ENOTDIR =>                 NonDirComponentError.into(),
                libc::EPERM =>                   PermissionError.into(),
                libc::EROFS =>                   ReadOnlyFSError.into(),
                libc::ETXTBSY =>                 BusyExecutableError.into(),
                e =>                             OtherOSError(e).into(),
            }),
            fd => Ok(Fd(fd)),
        }
    }

    /// Fails with [`IsDirectoryError`] if the descriptor refers to a directory.
    pub fn assert_not_dir(self) -> Result<Fd, OpenError> {
        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        // SAFETY: raw_meta is valid for writes of a stat struct.
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            match fs::err_no() {
                libc::EBADF =>     BadFdPanic.panic(),
                libc::EFAULT =>    BadAddrPanic.panic(),
                libc::ENOMEM =>    Err(OOMError)?,
                libc::EOVERFLOW => Err(OversizedFileError)?,
                e =>               Err(OtherOSError(e))?,
            }
        }
        // SAFETY: fstat either initializes raw_meta or returns an error and diverges.
        let raw = unsafe { raw_meta.assume_init() };

        if raw.st_mode & libc::S_IFMT == libc::S_IFDIR {
            Err(IsDirectoryError)?
        }
        Ok(self)
    }

    pub fn close(self) -> Result<(), CloseError> {
        let fd = self.0;
        // close invalidates the descriptor regardless of the outcome, so Drop mustn't see it.
        mem::forget(self);

        // SAFETY: fd is owned and is never used again.
        if unsafe { libc::close(fd) } == -1 {
            match fs::err_no() {
                libc::EBADF =>                 BadFdPanic.panic(),
                libc::EINTR =>                 Err(InterruptError)?,
                libc::EIO =>                   Err(IOError)?,
                libc::ENOSPC | libc::EDQUOT => Err(StorageExhaustedError)?,
                e =>                           Err(OtherOSError(e))?,
            }
        }
        Ok(())
    }
}

impl Deref for Fd {
    type Target = c_int;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            match fs::err_no() {
                // Panic only if we aren't already, to prevent aborting an existing unwind.
                libc::EBADF if !thread::panicking() => BadFdPanic.panic(),
                e => log::warn!(
                    "error while dropping file descriptor {}: {}",
                    self.0,
                    std::io::Error::from_raw_os_error(e),
                ),
            }
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
