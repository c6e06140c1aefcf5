//! # Process Control Options
//!
//! The `prctl(2)` syscall multiplexes a wide range of per-task
//! controls behind a single entry point, selected by an integer option.
//! Only the task-naming options are provided here. The option is passed
//! as plain `int`, so the constants use `i32` as underlying data-type.

use super::abi;

/// Sets the comm name of the calling task to the NUL-terminated string
/// given as second argument.
pub const SET_NAME: abi::I32 = abi::num(15);
/// Copies the comm name of the calling task into the buffer given as
/// second argument, which must hold at least [`TASK_COMM_LEN`] bytes.
pub const GET_NAME: abi::I32 = abi::num(16);

/// Size of the buffer the kernel keeps a task's comm name in,
/// including the terminating NUL byte. The kernel headers do not
/// export this value; it mirrors the scheduler definition.
pub const TASK_COMM_LEN: usize = 16;
