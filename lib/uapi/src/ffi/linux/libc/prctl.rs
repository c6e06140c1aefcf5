// Process control options via libc. See `common/prctl.rs` for
// documentation.

use super::abi;

pub const SET_NAME: abi::I32 = abi::num(::libc::PR_SET_NAME);
pub const GET_NAME: abi::I32 = abi::num(::libc::PR_GET_NAME);

pub const TASK_COMM_LEN: usize = 16;
