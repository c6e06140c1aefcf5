//! # Error Codes
//!
//! All operations of this library fail with plain Linux error codes,
//! represented by [`Errno`]. The codes are the kernel definitions from
//! [`uapi::linux::ffi::native::errno`]; this module merely wraps them
//! for use with `Result` and the standard error traits.

use uapi::linux::ffi::native::errno;

/// A Linux error code. Valid codes lie in the range `1..=4096`; the
/// kernel never reports `0` as an error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Errno(u16);

impl Errno {
    pub const EINVAL: Self = Self(errno::EINVAL);
    pub const ERANGE: Self = Self(errno::ERANGE);
    pub const EIO: Self = Self(errno::EIO);
    pub const EINTR: Self = Self(errno::EINTR);
    pub const ENOENT: Self = Self(errno::ENOENT);
    pub const ESRCH: Self = Self(errno::ESRCH);

    /// Creates an error from its raw code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the raw code of this error.
    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Returns the symbolic name of this error, if it has a fixed
    /// assignment.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        errno::name(self.0)
    }

    /// Creates an error from the `errno` value the C library recorded
    /// for the calling thread. Must be called directly after a failed
    /// foreign call, before any other operation clobbers the value.
    #[must_use]
    pub fn last_os_error() -> Self {
        Self::from(std::io::Error::last_os_error())
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        match self.name() {
            Some(name) => fmt.write_str(name),
            None => write!(fmt, "errno {}", self.0),
        }
    }
}

impl std::error::Error for Errno {
}

// Convert I/O errors to their underlying error code. I/O errors
// synthesized by the standard library carry no code and are reported
// as generic I/O failures.
impl From<std::io::Error> for Errno {
    fn from(e: std::io::Error) -> Self {
        match e.raw_os_error() {
            Some(code) if code > 0 && code <= 4096 => Self(code as u16),
            _ => Self::EIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        assert_eq!(Errno::EINVAL.code(), 22);
        assert_eq!(Errno::new(22), Errno::EINVAL);
        assert_eq!(Errno::EINVAL.name(), Some("EINVAL"));
        assert_eq!(Errno::new(4095).name(), None);
    }

    #[test]
    fn display() {
        assert_eq!(std::format!("{}", Errno::ERANGE), "ERANGE");
        assert_eq!(std::format!("{}", Errno::new(4095)), "errno 4095");
    }

    #[test]
    fn from_io_error() {
        let e = std::io::Error::from_raw_os_error(libc::ENOENT);
        assert_eq!(Errno::from(e), Errno::ENOENT);

        let synthesized = std::io::Error::other("no code");
        assert_eq!(Errno::from(synthesized), Errno::EIO);
    }
}
