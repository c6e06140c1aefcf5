//! # Kernel Task Naming Interfaces
//!
//! Every Linux task carries a short human-readable name, its *comm
//! name*, shown by debuggers, profilers, and `/proc` tooling. This
//! library provides safe accessors for these names: renaming the
//! calling thread, renaming sibling tasks of the same process, and
//! reading names back.
//!
//! The kernel limits comm names to [`TASK_COMM_LEN`] bytes, including
//! the terminating NUL byte. All operations report failures as plain
//! kernel error codes via [`Errno`].

pub mod errno;
pub mod thread;

pub use errno::Errno;
pub use thread::{Tid, get_name, set_name};

/// Size of the kernel buffer holding a comm name, including the
/// terminating NUL byte.
pub const TASK_COMM_LEN: usize = uapi::linux::ffi::native::prctl::TASK_COMM_LEN;
