//! # I/O Priorities
//!
//! The `ioprio_get(2)` and `ioprio_set(2)` syscalls operate on a
//! combined priority value: a scheduling class in the upper bits and
//! class-specific data (the priority level within the class) in the
//! lower bits. The kernel passes these values as plain `int`, so the
//! constants use `i32` as underlying data-type; the packing helpers
//! operate on native values.

use super::abi;

/// Total number of bits used by a priority value.
pub const BITS: u32 = 16;
/// Shift of the scheduling class within a priority value.
pub const CLASS_SHIFT: u32 = 13;
/// Mask of the class-specific data within a priority value.
pub const PRIO_MASK: i32 = (1 << CLASS_SHIFT) - 1;

// Scheduling classes
pub const CLASS_NONE: abi::I32 = abi::num(0);
pub const CLASS_RT: abi::I32 = abi::num(1);
pub const CLASS_BE: abi::I32 = abi::num(2);
pub const CLASS_IDLE: abi::I32 = abi::num(3);

/// Number of priority levels within the best-effort class.
pub const BE_NR: i32 = 8;
/// Default priority level of the best-effort class.
pub const NORM: i32 = 4;

// Targets of the syscalls, given as their `who` argument.
pub const WHO_PROCESS: abi::I32 = abi::num(1);
pub const WHO_PGRP: abi::I32 = abi::num(2);
pub const WHO_USER: abi::I32 = abi::num(3);

/// Extracts the scheduling class of a priority value.
pub const fn prio_class(mask: i32) -> i32 {
    mask >> CLASS_SHIFT
}

/// Extracts the class-specific data of a priority value.
pub const fn prio_data(mask: i32) -> i32 {
    mask & PRIO_MASK
}

/// Combines a scheduling class and class-specific data into a priority
/// value.
pub const fn prio_value(class: i32, data: i32) -> i32 {
    (class << CLASS_SHIFT) | data
}

/// Checks whether a priority value carries an assigned scheduling
/// class (any class but `CLASS_NONE`).
pub const fn prio_valid(mask: i32) -> bool {
    prio_class(mask) != 0
}
