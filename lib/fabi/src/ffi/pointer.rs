//! # Fixed ABI Pointers
//!
//! This module provides [`NativeAddress`], [`Pointer`], as well as
//! related utilities.

/// A trait to annotate types that effectively wrap a native memory
/// address. It provides easy converters to/from `usize` values, as well
/// as some utilities to treat the underlying type as a pointer.
///
/// This type should only be implemented for types that can be
/// represented as a `usize` on the target platform. That is, this type
/// assumes that the addresses it deals with are native memory
/// addresses.
pub trait NativeAddress<Target: ?Sized> {
    /// Creates a new instance of this type from its address given as a
    /// `usize` value. The given value must not be 0.
    ///
    /// ## Safety
    ///
    /// The caller must guarantee that the address is not zero.
    #[must_use]
    unsafe fn from_usize_unchecked(v: usize) -> Self;

    /// Creates a new instance of this type with the address specified
    /// as a `usize` value. If the address is 0, this will yield `None`.
    #[inline]
    #[must_use]
    fn from_usize(v: usize) -> Option<Self>
    where
        Self: Sized,
    {
        if v == 0 {
            None
        } else {
            // SAFETY: verified to be non-zero
            unsafe { Some(Self::from_usize_unchecked(v)) }
        }
    }

    /// Yields the address of this instance as a `usize` value. The
    /// returned address is guaranteed to be non-zero.
    #[must_use]
    fn to_usize(&self) -> usize;

    /// Yields the address of this instance as a `usize` value,
    /// consuming the original object.
    #[must_use]
    fn into_usize(self) -> usize
    where
        Self: Sized,
    {
        self.to_usize()
    }

    /// Creates a new instance of this type with a dangling address.
    /// This address is guaranteed not to be 0. However, the address is
    /// not necessarily unique and might match a valid address of
    /// another allocated object.
    #[inline]
    #[must_use]
    fn dangling() -> Self
    where
        Self: Sized,
        Target: Sized,
    {
        // SAFETY: Alignments cannot be 0.
        unsafe { Self::from_usize_unchecked(core::mem::align_of::<Target>()) }
    }

    /// Returns the underlying address of this type as a raw pointer
    /// type. This pointer is guaranteed not to be NULL.
    #[inline(always)]
    #[must_use]
    fn as_ptr(&self) -> *const Target
    where
        Target: Sized,
    {
        self.to_usize() as *const Target
    }

    /// Returns the underlying address of this type as a raw mutable
    /// pointer type. This pointer is guaranteed not to be NULL.
    #[inline(always)]
    #[must_use]
    fn as_mut_ptr(&self) -> *mut Target
    where
        Target: Sized,
    {
        self.to_usize() as *mut Target
    }
}

/// A type designed as alternative to `core::ptr::NonNull` but with a
/// generic address type. It allows representing 32-bit pointers on
/// 64-bit machines, and vice-versa, with correct alignment and size.
#[repr(transparent)]
pub struct Pointer<Address, Target: ?Sized> {
    address: Address,
    target: core::marker::PhantomData<*const Target>,
}

// Implement `NativeAddress` on native-sized primitive integers.
macro_rules! implement_native_address {
    ( $self:ty ) => {
        impl<Target: ?Sized> NativeAddress<Target> for $self {
            #[inline]
            unsafe fn from_usize_unchecked(v: usize) -> Self {
                assert!(size_of::<usize>() <= size_of::<$self>());
                // SAFETY: as-cast never folds to 0
                v as _
            }

            #[inline(always)]
            fn to_usize(&self) -> usize {
                assert!(size_of::<$self>() <= size_of::<usize>());
                *self as _
            }
        }
    };
}

// Implement `NativeAddress` on native-sized non-zero integers.
macro_rules! implement_native_address_nonzero {
    ( $self:ty ) => {
        impl<Target: ?Sized> NativeAddress<Target> for $self {
            #[inline]
            unsafe fn from_usize_unchecked(v: usize) -> Self {
                assert!(size_of::<usize>() <= size_of::<$self>());
                unsafe {
                    // SAFETY: delegated to caller
                    Self::new_unchecked(v as _)
                }
            }

            #[inline(always)]
            fn to_usize(&self) -> usize {
                assert!(size_of::<$self>() <= size_of::<usize>());
                self.get() as _
            }
        }
    };
}

// Lets ensure we know when Rust gains support for other pointer widths.
#[cfg(not(any(
    target_pointer_width = "32",
    target_pointer_width = "64",
)))]
compile_error!("Target platform has an unsupported pointer-width.");

implement_native_address!(usize);
implement_native_address_nonzero!(core::num::NonZeroUsize);

#[cfg(target_pointer_width = "32")]
implement_native_address!(u32);
#[cfg(target_pointer_width = "32")]
implement_native_address_nonzero!(core::num::NonZeroU32);

#[cfg(target_pointer_width = "64")]
implement_native_address!(u64);
#[cfg(target_pointer_width = "64")]
implement_native_address_nonzero!(core::num::NonZeroU64);

impl<Address, Target: ?Sized> Pointer<Address, Target> {
    /// Creates a new instance of this pointer type from the provided
    /// address. The address is taken verbatim.
    #[inline]
    #[must_use]
    pub const fn new(v: Address) -> Self {
        Self {
            address: v,
            target: core::marker::PhantomData,
        }
    }

    /// Unwraps this object and returns the inner address.
    #[inline(always)]
    #[must_use]
    pub const fn into_inner(self) -> Address {
        // Preferably, this would just be `{ self.address }`, but this
        // currently does not work in const-fn, since Rust cannot
        // properly check whether `Drop` would run. Hence, we instead
        // move the inner value out.
        unsafe {
            // SAFETY: Since we leak `self`, we can leave a copy behind
            //         without anyone ever getting access to it.
            let r: Address = core::ptr::read(core::ptr::addr_of!(self.address));
            core::mem::forget(self);
            r
        }
    }

    /// Returns the address underlying this pointer type.
    #[inline(always)]
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Changes the underlying address to the new value. This is
    /// equivalent to assigning a new wrapped object to this instance.
    #[inline]
    pub fn set(&mut self, v: Address) {
        self.address = v;
    }
}

// Propagate `NativeAddress` from the underlying address type.
impl<Address, Target> NativeAddress<Target> for Pointer<Address, Target>
where
    Address: NativeAddress<Target>,
    Target: ?Sized,
{
    #[inline]
    unsafe fn from_usize_unchecked(v: usize) -> Self {
        unsafe {
            // SAFETY: delegated to caller
            Self::new(Address::from_usize_unchecked(v))
        }
    }

    #[inline(always)]
    fn to_usize(&self) -> usize {
        self.address.to_usize()
    }
}

// Implement clone via propagation.
impl<Address, Target> core::clone::Clone for Pointer<Address, Target>
where
    Address: core::clone::Clone,
    Target: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.address.clone())
    }
}

// Implement copy via propagation.
impl<Address, Target> core::marker::Copy for Pointer<Address, Target>
where
    Address: Copy,
    Target: ?Sized,
{
}

// For debugging simply print the address.
impl<Address, Target> core::fmt::Debug for Pointer<Address, Target>
where
    Address: core::fmt::Debug,
    Target: ?Sized,
{
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        fmt.debug_tuple("Pointer").field(&self.address).finish()
    }
}

// Compare based on the address.
impl<Address, Target> core::cmp::Eq for Pointer<Address, Target>
where
    Address: core::cmp::Eq,
    Target: ?Sized,
{
}

// Hash based on the address.
impl<Address, Target> core::hash::Hash for Pointer<Address, Target>
where
    Address: core::hash::Hash,
    Target: ?Sized,
{
    fn hash<Op>(&self, state: &mut Op)
    where
        Op: core::hash::Hasher,
    {
        self.address.hash(state)
    }
}

// Compare based on the address.
impl<Address, Target> core::cmp::PartialEq for Pointer<Address, Target>
where
    Address: core::cmp::PartialEq,
    Target: ?Sized,
{
    fn eq(&self, other: &Self) -> bool {
        self.address.eq(&other.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{align, ffi};

    type Addr32 = ffi::Integer<
        ffi::LittleEndian<core::num::NonZeroU32>,
        align::AlignAs<4>,
    >;
    type Addr64 = ffi::Integer<
        ffi::LittleEndian<core::num::NonZeroU64>,
        align::AlignAs<8>,
    >;

    // Verify typeinfo of pointer types for both common address widths,
    // including the `Option<..>` niche.
    #[test]
    fn typeinfo() {
        assert_eq!(size_of::<Pointer<Addr32, u32>>(), 4);
        assert_eq!(align_of::<Pointer<Addr32, u32>>(), 4);
        assert_eq!(size_of::<Pointer<Addr64, u32>>(), 8);
        assert_eq!(align_of::<Pointer<Addr64, u32>>(), 8);

        assert_eq!(size_of::<Option<Pointer<Addr32, u32>>>(), 4);
        assert_eq!(size_of::<Option<Pointer<Addr64, u32>>>(), 8);
    }

    // Verify basic behavior of native addresses
    #[test]
    fn native_address() {
        let v: usize = 0x1000;

        let a: usize = <usize as NativeAddress<u32>>::from_usize(v).unwrap();
        assert_eq!(a, v);
        assert_eq!(NativeAddress::<u32>::to_usize(&a), v);
        assert!(<usize as NativeAddress<u32>>::from_usize(0).is_none());

        let d: usize = <usize as NativeAddress<u32>>::dangling();
        assert_eq!(d, align_of::<u32>());
    }

    // Verify basic behavior of the generic pointer type
    #[test]
    fn basic() {
        let raw = core::num::NonZeroU64::new(0x1000).unwrap();
        let mut p: Pointer<Addr64, u32> = Pointer::new(Addr64::from_native(raw));

        assert_eq!(p.address().to_native(), raw);

        let other = core::num::NonZeroU64::new(0x2000).unwrap();
        p.set(Addr64::from_native(other));
        assert_eq!(p.into_inner().to_native(), other);
    }
}
