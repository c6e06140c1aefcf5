//! # Foreign Function Interfaces
//!
//! This module is a collection of utilities that aid implementation of
//! foreign function interfaces in Rust.
//!
//! ## Foreign ABI
//!
//! When accessing foreign ABIs, care must be taken to ensure datatypes
//! have the correct layout. The builtin primitives like `u32`, `i64`,
//! etc., always follow the native ABI, and thus cannot be reliably used
//! to represent data-structures of foreign ABIs. The utilities in this
//! module can be used instead.
//!
//! As an example, imagine a 64-bit diagnostic tool that decodes ioctl
//! request buffers recorded on a 32-bit machine. It cannot model the
//! pointer-carrying structures with native Rust pointers, since those
//! would have the wrong size and alignment. [`Integer`] and [`Pointer`]
//! can model the exact ABI of the foreign system instead.

pub mod endian;
pub mod integer;
pub mod packed;
pub mod pointer;

pub use endian::{
    BigEndian,
    from_native,
    from_raw,
    LittleEndian,
    NativeEndian,
    to_native,
    to_raw,
};
pub use integer::Integer;
pub use packed::Packed;
pub use pointer::{NativeAddress, Pointer};

pub mod abi;
