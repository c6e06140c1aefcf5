//! Linux System Interfaces
//!
//! This module provides access to Linux system interfaces provided by
//! the kernel and common across all Linux systems.

pub use crate::ffi::linux as ffi;
