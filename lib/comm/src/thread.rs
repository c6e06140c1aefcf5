//! # Thread Naming
//!
//! The kernel keeps one comm name per task. Renaming the calling
//! thread is a single `prctl(2)` call. Renaming a sibling task has no
//! syscall; instead the name is written to the task's `comm` entry in
//! `/proc`, which the kernel applies atomically. Both paths are
//! combined behind [`set_name()`], which picks the cheap one when the
//! target is the calling thread.

use std::io::{Read, Write};

use uapi::linux::ffi::native::{errno, prctl};

use crate::errno::Errno;

/// A kernel task id, identifying one thread of this process.
///
/// Task ids are the kernel's own names for threads, as shown in
/// `/proc/<pid>/task/`. They are unrelated to the thread ids of the
/// Rust standard library.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tid(u32);

impl Tid {
    /// Returns the task id of the calling thread.
    #[must_use]
    pub fn current() -> Self {
        // SAFETY: `gettid(2)` takes no arguments and cannot fail.
        Self(unsafe { libc::gettid() } as u32)
    }

    /// Creates a task id from its raw kernel value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw kernel value of this task id.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

// Validate a comm name: it must fit the kernel buffer with its
// terminating NUL byte, and cannot contain NUL bytes itself.
fn check_name(name: &str) -> Result<&[u8], Errno> {
    let bytes = name.as_bytes();

    if bytes.contains(&0) {
        return Err(Errno::EINVAL);
    }
    if bytes.len() >= prctl::TASK_COMM_LEN {
        return Err(Errno::ERANGE);
    }

    Ok(bytes)
}

// Path of the proc entry carrying the comm name of a sibling task.
fn comm_path(tid: Tid) -> std::path::PathBuf {
    std::path::PathBuf::from(format!("/proc/self/task/{}/comm", tid.as_raw()))
}

/// Changes the comm name of the task `tid`, which must belong to the
/// calling process.
///
/// The name must be shorter than [`TASK_COMM_LEN`](crate::TASK_COMM_LEN)
/// bytes (its terminating NUL byte is accounted for) and free of NUL
/// bytes. Renaming the calling thread uses `prctl(2)` directly; any
/// other task is renamed through its `comm` entry in `/proc`, retrying
/// a write that was interrupted by a signal.
///
/// Fails with `EINVAL` for the zero task id or a name carrying NUL
/// bytes, `ERANGE` for an over-long name, `EIO` for a short write, or
/// the error code of the failing syscall.
pub fn set_name(tid: Tid, name: &str) -> Result<(), Errno> {
    let bytes = check_name(name)?;

    if tid == Tid::from_raw(0) {
        return Err(Errno::EINVAL);
    }

    // Changing our own name is an easy special case.
    if tid == Tid::current() {
        let mut buf = [0u8; prctl::TASK_COMM_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);

        // SAFETY: `SET_NAME` reads a NUL-terminated string, which the
        //         copy into the zeroed buffer guarantees.
        let r = unsafe { libc::prctl(prctl::SET_NAME, buf.as_ptr()) };
        if r != 0 {
            return Err(Errno::last_os_error());
        }
        return Ok(());
    }

    // Have to change another task's name, which only works through its
    // proc entry.
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .open(comm_path(tid))?;

    loop {
        match file.write(bytes) {
            Ok(n) if n == bytes.len() => return Ok(()),
            Ok(_) => return Err(Errno::EIO),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Returns the comm name of the task `tid`, which must belong to the
/// calling process.
///
/// Reading the name of the calling thread uses `prctl(2)` directly;
/// any other task is read through its `comm` entry in `/proc`.
pub fn get_name(tid: Tid) -> Result<String, Errno> {
    if tid == Tid::from_raw(0) {
        return Err(Errno::EINVAL);
    }

    if tid == Tid::current() {
        let mut buf = [0u8; prctl::TASK_COMM_LEN];

        // SAFETY: `GET_NAME` fills the buffer with a NUL-terminated
        //         string of at most `TASK_COMM_LEN` bytes.
        let r = unsafe { libc::prctl(prctl::GET_NAME, buf.as_mut_ptr()) };
        if r != 0 {
            return Err(Errno::last_os_error());
        }

        let len = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
        return String::from_utf8(buf[..len].to_vec())
            .map_err(|_| Errno::new(errno::EILSEQ));
    }

    let mut name = String::new();
    std::fs::File::open(comm_path(tid))?
        .read_to_string(&mut name)
        .map_err(Errno::from)?;

    // The proc entry reports the name with a trailing newline.
    if name.ends_with('\n') {
        name.pop();
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Restores the original name of the calling thread on drop, so a
    // failing assertion does not leak a stale name into other tests.
    struct NameGuard(String);

    impl NameGuard {
        fn new() -> Self {
            Self(get_name(Tid::current()).unwrap())
        }
    }

    impl Drop for NameGuard {
        fn drop(&mut self) {
            let _ = set_name(Tid::current(), &self.0);
        }
    }

    #[test]
    fn name_validation() {
        let tid = Tid::current();

        // 15 bytes plus the terminator fill the kernel buffer exactly.
        let _guard = NameGuard::new();
        assert_eq!(set_name(tid, "123456789012345"), Ok(()));

        assert_eq!(set_name(tid, "1234567890123456"), Err(Errno::ERANGE));
        assert_eq!(set_name(tid, "nul\0name"), Err(Errno::EINVAL));
        assert_eq!(set_name(Tid::from_raw(0), "name"), Err(Errno::EINVAL));
        assert_eq!(get_name(Tid::from_raw(0)), Err(Errno::EINVAL));
    }

    #[test]
    fn rename_current() {
        let tid = Tid::current();
        let _guard = NameGuard::new();

        assert_eq!(set_name(tid, "comm-current"), Ok(()));
        assert_eq!(get_name(tid).unwrap(), "comm-current");

        // The proc entry must agree with the prctl read-back.
        let proc_name = std::fs::read_to_string(comm_path(tid)).unwrap();
        assert_eq!(proc_name.trim_end_matches('\n'), "comm-current");
    }

    #[test]
    fn rename_sibling() {
        let (tid_tx, tid_rx) = std::sync::mpsc::channel();
        let (done_tx, done_rx) = std::sync::mpsc::channel::<()>();

        let sibling = std::thread::spawn(move || {
            tid_tx.send(Tid::current()).unwrap();
            // Hold the task alive until the rename was verified.
            done_rx.recv().unwrap();
        });

        let tid = tid_rx.recv().unwrap();
        assert_ne!(tid, Tid::current());

        assert_eq!(set_name(tid, "comm-sibling"), Ok(()));
        assert_eq!(get_name(tid).unwrap(), "comm-sibling");

        done_tx.send(()).unwrap();
        sibling.join().unwrap();
    }

    #[test]
    fn unknown_task() {
        // Task ids are 32-bit, but the kernel caps them well below
        // this, so the entry cannot exist.
        let bogus = Tid::from_raw(u32::MAX);

        assert!(set_name(bogus, "name").is_err());
        assert!(get_name(bogus).is_err());
    }
}
