use std::io::SeekFrom;
use std::mem::MaybeUninit;
use std::path::Path;

use libc::{c_void, mode_t, off_t};

use super::{CloseError, OpenError, ReadError, SeekError, WriteError};
use crate::fs::panic::{BadAddrPanic, BadFdPanic, Panic};
use crate::fs::{
    self, BrokenPipeError, Fd, IOError, InterruptError, InvalidSeekError, IsDirectoryError,
    OtherOSError, OversizedFileError, ShortWriteError, StorageExhaustedError, UnseekableError,
    WouldBlockError,
};

/// The permissions given to files created by [`File::create_or_empty`], before the umask is
/// applied.
pub const DEFAULT_MODE: mode_t = 0o644;

/// An open file. The descriptor is closed when the File is dropped, or explicitly via
/// [`close`](File::close) to find out whether closing succeeded.
#[derive(Debug)]
pub struct File {
    pub(crate) fd: Fd,
}

impl File {
    /// Opens an existing file for reading.
    ///
    /// Directories are rejected with [`IsDirectoryError`] here, rather than failing on the first
    /// read.
    pub fn open_read<P: AsRef<Path>>(file_path: P) -> Result<File, OpenError> {
        let pathname = fs::c_path(file_path.as_ref())?;
        let fd = Fd::open(&pathname, libc::O_RDONLY, 0)?;

        Ok(File {
            fd: fd.assert_not_dir()?,
        })
    }

    /// Opens a file for writing, creating it with [`DEFAULT_MODE`] if it doesn't exist and
    /// truncating it if it does.
    pub fn create_or_empty<P: AsRef<Path>>(file_path: P) -> Result<File, OpenError> {
        let pathname = fs::c_path(file_path.as_ref())?;
        let fd = Fd::open(
            &pathname,
            libc::O_WRONLY | libc::O_CREAT | libc::O_TRUNC,
            DEFAULT_MODE,
        )?;

        Ok(File { fd })
    }

    pub(crate) fn read_raw(&self, buf: *mut c_void, size: usize) -> Result<usize, ReadError> {
        // SAFETY: The caller provides a buffer valid for writes of size bytes.
        match unsafe { libc::read(*self.fd, buf, size) } {
            -1 => match fs::err_no() {
                libc::EAGAIN =>  Err(WouldBlockError.into()),
                libc::EBADF =>   BadFdPanic.panic(),
                libc::EFAULT =>  BadAddrPanic.panic(),
                libc::EINTR =>   Err(InterruptError.into()),
                libc::EIO =>     Err(IOError.into()),
                libc::EISDIR =>  Err(IsDirectoryError.into()),
                e =>             Err(OtherOSError(e).into()),
            },
            count => Ok(count as usize),
        }
    }

    /// Reads up to `buf.len()` bytes, returning how many were read. 0 indicates the end of the
    /// file.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, ReadError> {
        self.read_raw(buf.as_mut_ptr().cast(), buf.len())
    }

    /// The same as [`read`](File::read), but for a buffer which hasn't been initialized. The first
    /// `n` bytes of `buf` are initialized when this returns `Ok(n)`.
    pub fn read_uninit(&self, buf: &mut [MaybeUninit<u8>]) -> Result<usize, ReadError> {
        self.read_raw(buf.as_mut_ptr().cast(), buf.len())
    }

    pub(crate) fn write_raw(&self, buf: *const c_void, size: usize) -> Result<usize, WriteError> {
        // SAFETY: The caller provides a buffer valid for reads of size bytes.
        match unsafe { libc::write(*self.fd, buf, size) } {
            -1 => match fs::err_no() {
                libc::EAGAIN =>                Err(WouldBlockError.into()),
                libc::EBADF =>                 BadFdPanic.panic(),
                libc::EDQUOT | libc::ENOSPC => Err(StorageExhaustedError.into()),
                libc::EFAULT =>                BadAddrPanic.panic(),
                libc::EFBIG =>                 Err(OversizedFileError.into()),
                libc::EINTR =>                 Err(InterruptError.into()),
                libc::EIO =>                   Err(IOError.into()),
                libc::EPIPE =>                 Err(BrokenPipeError.into()),
                e =>                           Err(OtherOSError(e).into()),
            },
            count => Ok(count as usize),
        }
    }

    /// Writes up to `buf.len()` bytes, returning how many were written.
    pub fn write(&self, buf: &[u8]) -> Result<usize, WriteError> {
        self.write_raw(buf.as_ptr().cast(), buf.len())
    }

    /// Writes the whole of `buf`, continuing after partial writes and interruptions. If the file
    /// stops accepting bytes, fails with [`ShortWriteError`].
    pub fn write_all(&self, buf: &[u8]) -> Result<(), WriteError> {
        let mut written = 0;

        while written < buf.len() {
            match self.write(&buf[written..]) {
                Ok(0) => Err(ShortWriteError {
                    written,
                    expected: buf.len(),
                })?,
                Ok(count) => written += count,
                Err(WriteError::Interrupt(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Moves the file offset, returning the new offset from the start of the file.
    ///
    /// Fails with [`InvalidSeekError`] if the new offset would be before the start of the file, or
    /// if the file doesn't support `pos`. Many `/proc` files can't seek relative to their end.
    pub fn seek(&self, pos: SeekFrom) -> Result<u64, SeekError> {
        let (offset, whence) = match pos {
            SeekFrom::Start(offset) => (
                off_t::try_from(offset).map_err(|_| OversizedFileError)?,
                libc::SEEK_SET,
            ),
            SeekFrom::End(offset) => (
                off_t::try_from(offset).map_err(|_| OversizedFileError)?,
                libc::SEEK_END,
            ),
            SeekFrom::Current(offset) => (
                off_t::try_from(offset).map_err(|_| OversizedFileError)?,
                libc::SEEK_CUR,
            ),
        };

        // SAFETY: There is no memory management here and any returned errors are handled.
        match unsafe { libc::lseek(*self.fd, offset, whence) } {
            -1 => match fs::err_no() {
                libc::EBADF =>     BadFdPanic.panic(),
                libc::EINVAL =>    Err(InvalidSeekError.into()),
                libc::EOVERFLOW => Err(OversizedFileError.into()),
                libc::ESPIPE =>    Err(UnseekableError.into()),
                e =>               Err(OtherOSError(e).into()),
            },
            new_offset => Ok(new_offset as u64),
        }
    }

    /// Measures the file by seeking to the end, then rewinds to the start.
    pub fn size(&self) -> Result<u64, SeekError> {
        let size = self.seek(SeekFrom::End(0))?;
        self.seek(SeekFrom::Start(0))?;
        Ok(size)
    }

    pub fn close(self) -> Result<(), CloseError> {
        self.fd.close()
    }
}
