use std::borrow::Borrow;
use std::ffi::CStr;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};
use std::str::{self, Utf8Error};

use crate::collections::contiguous::Vector;

/// A growable byte buffer for building up strings and file contents.
///
/// The length is authoritative: a StringBuilder never appends a terminator of its own, and bytes
/// are never interpreted, so it is just as happy holding binary data as text. Anything needing a
/// C-style string has to [`push`](StringBuilder::push) the `0` itself.
///
/// Growth follows the same rules as [`Vector`], since that's all this is underneath.
///
/// # Examples
/// ```
/// # use std::fmt::Write;
/// # use dawn::collections::contiguous::StringBuilder;
/// let mut sb = StringBuilder::new();
/// sb.append_str("Hello");
/// sb.append_cstr(c", ");
/// write!(sb, "{}!", "world").unwrap();
/// assert_eq!(sb.as_str(), Ok("Hello, world!"));
/// ```
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct StringBuilder {
    pub(crate) buf: Vector<u8>,
}

impl StringBuilder {
    /// Creates an empty StringBuilder without allocating.
    pub const fn new() -> StringBuilder {
        StringBuilder {
            buf: Vector::new(),
        }
    }

    /// Creates an empty StringBuilder with exactly `cap` bytes of capacity.
    ///
    /// # Panics
    /// Panics if `cap` exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> StringBuilder {
        StringBuilder {
            buf: Vector::with_cap(cap),
        }
    }

    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Appends a single byte.
    ///
    /// # Panics
    /// Panics if the capacity would exceed [`isize::MAX`].
    pub fn push(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Appends the contents of a nul-terminated string, excluding the terminator.
    ///
    /// # Panics
    /// Panics if the capacity would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dawn::collections::contiguous::StringBuilder;
    /// let mut sb = StringBuilder::new();
    /// sb.append_cstr(c"abc");
    /// assert_eq!(sb.len(), 3);
    /// ```
    pub fn append_cstr(&mut self, cstr: &CStr) {
        self.buf.append_slice(cstr.to_bytes());
    }

    /// Appends `bytes` verbatim, including any zero bytes.
    ///
    /// # Panics
    /// Panics if the capacity would exceed [`isize::MAX`].
    pub fn append_buf(&mut self, bytes: &[u8]) {
        self.buf.append_slice(bytes);
    }

    /// Appends the UTF-8 bytes of `s`.
    ///
    /// # Panics
    /// Panics if the capacity would exceed [`isize::MAX`].
    pub fn append_str(&mut self, s: &str) {
        self.buf.append_slice(s.as_bytes());
    }

    /// Removes all contents, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the contents as a `&str` if they are valid UTF-8.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(&self.buf)
    }

    pub fn into_vector(self) -> Vector<u8> {
        self.buf
    }
}

impl fmt::Write for StringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s);
        Ok(())
    }
}

impl Deref for StringBuilder {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl DerefMut for StringBuilder {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl AsRef<[u8]> for StringBuilder {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl Borrow<[u8]> for StringBuilder {
    fn borrow(&self) -> &[u8] {
        &self.buf
    }
}

impl From<&str> for StringBuilder {
    fn from(value: &str) -> Self {
        let mut sb = StringBuilder::new();
        sb.append_str(value);
        sb
    }
}

impl From<&[u8]> for StringBuilder {
    fn from(value: &[u8]) -> Self {
        StringBuilder {
            buf: Vector::from(value),
        }
    }
}

impl From<Vector<u8>> for StringBuilder {
    fn from(value: Vector<u8>) -> Self {
        StringBuilder {
            buf: value,
        }
    }
}

impl From<StringBuilder> for Vector<u8> {
    fn from(value: StringBuilder) -> Self {
        value.buf
    }
}

impl Extend<u8> for StringBuilder {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl Debug for StringBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringBuilder")
            .field("contents", &String::from_utf8_lossy(&self.buf))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

/// Displays the contents, replacing invalid UTF-8 with `U+FFFD`.
impl Display for StringBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.buf))
    }
}
