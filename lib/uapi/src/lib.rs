//! # Linux Kernel UAPI Definitions
//!
//! This library provides Rust transpositions of Linux kernel user-space
//! interface definitions. It does not require any particular runtime,
//! but can optionally be combined with the Rust Standard Library.

#![no_std]

extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod ffi;

pub mod linux;
