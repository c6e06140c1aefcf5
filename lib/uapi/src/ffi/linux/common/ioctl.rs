//! # Ioctl Request Encoding
//!
//! Ioctl request codes are 32-bit values that encode the transfer
//! direction, the size of the argument structure, a driver-specific
//! type character, and a command number. This module provides the
//! `asm-generic` encoding, which is shared by all platforms supported
//! here.
//!
//! Since the encoded size is taken from the argument structure of the
//! respective platform ABI, request codes for pointer-carrying
//! structures differ between 32-bit and 64-bit platforms. The encoders
//! are `const fn`s, so interface modules can define their request codes
//! as plain constants.

use super::abi;

/// Number of bits used for the command number.
pub const NRBITS: u32 = 8;
/// Number of bits used for the type character.
pub const TYPEBITS: u32 = 8;
/// Number of bits used for the argument size.
pub const SIZEBITS: u32 = 14;
/// Number of bits used for the transfer direction.
pub const DIRBITS: u32 = 2;

/// Transfer direction: no argument.
pub const NONE: u32 = 0;
/// Transfer direction: user-space writes the argument.
pub const WRITE: u32 = 1;
/// Transfer direction: user-space reads the argument.
pub const READ: u32 = 2;

const NRSHIFT: u32 = 0;
const TYPESHIFT: u32 = NRSHIFT + NRBITS;
const SIZESHIFT: u32 = TYPESHIFT + TYPEBITS;
const DIRSHIFT: u32 = SIZESHIFT + SIZEBITS;

// Compose a request code from its parts. The size is truncated to the
// available bits, matching the C macro.
const fn code(dir: u32, ty: u32, nr: u32, size: usize) -> abi::U32 {
    abi::num(
        (dir << DIRSHIFT)
        | (((size as u32) & ((1 << SIZEBITS) - 1)) << SIZESHIFT)
        | (ty << TYPESHIFT)
        | (nr << NRSHIFT)
    )
}

/// Encodes a request without argument (`_IO`).
pub const fn io(ty: u32, nr: u32) -> abi::U32 {
    code(NONE, ty, nr, 0)
}

/// Encodes a read request with an argument of type `T` (`_IOR`).
pub const fn ior<T>(ty: u32, nr: u32) -> abi::U32 {
    code(READ, ty, nr, size_of::<T>())
}

/// Encodes a write request with an argument of type `T` (`_IOW`).
pub const fn iow<T>(ty: u32, nr: u32) -> abi::U32 {
    code(WRITE, ty, nr, size_of::<T>())
}

/// Encodes a read-write request with an argument of type `T`
/// (`_IOWR`).
pub const fn iowr<T>(ty: u32, nr: u32) -> abi::U32 {
    code(READ | WRITE, ty, nr, size_of::<T>())
}

/// Extracts the transfer direction of a request code.
pub const fn dir(code: u32) -> u32 {
    (code >> DIRSHIFT) & ((1 << DIRBITS) - 1)
}

/// Extracts the type character of a request code.
pub const fn ty(code: u32) -> u32 {
    (code >> TYPESHIFT) & ((1 << TYPEBITS) - 1)
}

/// Extracts the command number of a request code.
pub const fn nr(code: u32) -> u32 {
    (code >> NRSHIFT) & ((1 << NRBITS) - 1)
}

/// Extracts the argument size of a request code.
pub const fn size(code: u32) -> usize {
    ((code >> SIZESHIFT) & ((1 << SIZEBITS) - 1)) as usize
}
