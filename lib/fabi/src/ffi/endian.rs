//! # Endianness Utilities
//!
//! This module provides utilities to safely deal with foreign-endian
//! types.

/// A trait to convert to and from the native endianness to the
/// endianness of a specific type. If a type is already encoded in the
/// native endianness, this trait becomes an identity function for this
/// type. For other types, it converts from and to native endianness.
///
/// The trait-generic `Raw` defines the type of the native
/// representation. It must be suitable to represent native **and**
/// foreign values. Furthermore, the trait is designed for `Copy` types
/// (in particular primitive integers). Bigger or more complex types are
/// not suitable.
///
/// This trait provides default implementations for all its methods,
/// which can also be accessed as static `const fn` functions of this
/// module. There is no need to override the default implementations,
/// except for performance reasons.
///
/// ## Safety
///
/// An implementation must guarantee that it is safe to create memory
/// copies from `Raw` to create `Self` (and vice versa). If their size
/// does not match, memory is truncated, or padded with uninitialized
/// bytes.
///
/// Furthermore, if [`Self::NEEDS_SWAP`] is [`true`], it must be valid
/// to reverse the order of all bytes in `Raw` to convert from, and to,
/// the native representation.
pub unsafe trait NativeEndian<Raw: Copy>: Copy {
    /// This marker shows whether the native encoding matches the
    /// encoding of the type ([`false`]), or whether a byte-swap is
    /// needed ([`true`]).
    const NEEDS_SWAP: bool = false;

    /// Takes the raw, possibly foreign-ordered value `raw` and creates
    /// a wrapping object that protects the value from unguarded access.
    #[inline]
    #[must_use]
    fn from_raw(raw: Raw) -> Self {
        self::from_raw(raw)
    }

    /// Returns the underlying raw, possibly foreign-ordered value
    /// behind this wrapping object.
    #[inline]
    #[must_use]
    fn to_raw(self) -> Raw {
        self::to_raw(self)
    }

    /// Creates the foreign-ordered value from a native value,
    /// converting the value before retaining it, if required.
    #[inline]
    #[must_use]
    fn from_native(native: Raw) -> Self {
        self::from_native(native)
    }

    /// Returns the native representation of the value behind this
    /// wrapping object. The value is converted to the native
    /// representation before it is returned, if required.
    #[inline]
    #[must_use]
    fn to_native(self) -> Raw {
        self::to_native(self)
    }
}

/// A type to represent values encoded as big-endian. It is a simple
/// wrapping-structure with the same alignment and size requirements as
/// the type it wraps.
///
/// The `NativeEndian` trait is implemented for this type if `Raw` is a
/// primitive integer. Thus, conversion from and to native endianness is
/// provided, as well as default values, ordering, and other properties
/// reliant on the native value.
#[repr(transparent)]
pub struct BigEndian<Raw>(Raw);

/// A type to represent values encoded as little-endian. It is a simple
/// wrapping-structure with the same alignment and size requirements as
/// the type it wraps.
///
/// The `NativeEndian` trait is implemented for this type if `Raw` is a
/// primitive integer. Thus, conversion from and to native endianness is
/// provided, as well as default values, ordering, and other properties
/// reliant on the native value.
#[repr(transparent)]
pub struct LittleEndian<Raw>(Raw);

// Provide static implementations of the default methods in
// `NativeEndian`, so they can be accessed in `const fn`. This can be
// dropped once inherent const methods are allowed in traits.

/// Takes the raw, possibly foreign-ordered value `raw` and creates a
/// wrapping object that protects the value from unguarded access.
#[inline]
#[must_use]
pub const fn from_raw<Endian: NativeEndian<Raw>, Raw: Copy>(r: Raw) -> Endian {
    // SAFETY: The trait guarantees that `Endian` and `Raw` can be
    //         interchanged freely with truncated/uninitialized padding.
    unsafe { crate::mem::transmute_copy_uninit(&r) }
}

/// Returns the underlying raw, possibly foreign-ordered value behind
/// this wrapping object.
#[inline]
#[must_use]
pub const fn to_raw<Endian: NativeEndian<Raw>, Raw: Copy>(e: Endian) -> Raw {
    // SAFETY: The trait guarantees that `Endian` and `Raw` can be
    //         interchanged freely with truncated/uninitialized padding.
    unsafe { crate::mem::transmute_copy_uninit(&e) }
}

/// Creates the foreign-ordered value from a native value, converting
/// the value before retaining it, if required.
#[inline]
#[must_use]
pub const fn from_native<Endian: NativeEndian<Raw>, Raw: Copy>(r: Raw) -> Endian {
    if Endian::NEEDS_SWAP {
        // SAFETY: The trait guarantees that byte-swaps are allowed on
        //         the raw representation.
        unsafe { from_raw(crate::mem::bswap_copy(&r)) }
    } else {
        from_raw(r)
    }
}

/// Returns the native representation of the value behind this wrapping
/// object. The value is converted to the native representation before
/// it is returned, if required.
#[inline]
#[must_use]
pub const fn to_native<Endian: NativeEndian<Raw>, Raw: Copy>(e: Endian) -> Raw {
    if Endian::NEEDS_SWAP {
        // SAFETY: The trait guarantees that byte-swaps are allowed on
        //         the raw representation.
        unsafe { crate::mem::bswap_copy(&to_raw(e)) }
    } else {
        to_raw(e)
    }
}

// Implement `NativeEndian` for a list of primitive types, either as
// identity (the bare primitives, and the wrapper matching the target
// endianness), or with a byte-swap (the opposite wrapper).
macro_rules! implement_native_endian {
    ( bare, $($raw:ty),+ ) => {
        $(
            unsafe impl NativeEndian<$raw> for $raw { }
        )+
    };
    ( identity, $wrap:ident, $($raw:ty),+ ) => {
        $(
            unsafe impl NativeEndian<$raw> for $wrap<$raw> { }
        )+
    };
    ( swapped, $wrap:ident, $($raw:ty),+ ) => {
        $(
            unsafe impl NativeEndian<$raw> for $wrap<$raw> {
                const NEEDS_SWAP: bool = true;
            }
        )+
    };
}

// All supported raw types. Non-zero integers are included to retain
// their niche through the endian wrappers.
macro_rules! for_all_raw_types {
    ( $apply:ident, $($prefix:tt)* ) => {
        $apply! {
            $($prefix)*
            i8, i16, i32, i64, i128, isize,
            u8, u16, u32, u64, u128, usize,
            core::num::NonZeroI8, core::num::NonZeroI16,
            core::num::NonZeroI32, core::num::NonZeroI64,
            core::num::NonZeroI128, core::num::NonZeroIsize,
            core::num::NonZeroU8, core::num::NonZeroU16,
            core::num::NonZeroU32, core::num::NonZeroU64,
            core::num::NonZeroU128, core::num::NonZeroUsize
        }
    };
}

for_all_raw_types!(implement_native_endian, bare,);

#[cfg(target_endian = "big")]
for_all_raw_types!(implement_native_endian, identity, BigEndian,);
#[cfg(target_endian = "big")]
for_all_raw_types!(implement_native_endian, swapped, LittleEndian,);

#[cfg(target_endian = "little")]
for_all_raw_types!(implement_native_endian, swapped, BigEndian,);
#[cfg(target_endian = "little")]
for_all_raw_types!(implement_native_endian, identity, LittleEndian,);

// Implement the inherent accessors plus the standard traits for both
// wrapper types. All value-based traits convert to the native
// representation first, so ordering and formatting behave like the
// underlying primitive.
macro_rules! implement_endian_wrapper {
    ( $self:ident ) => {
        impl<Raw> $self<Raw>
        where
            Self: NativeEndian<Raw>,
            Raw: Copy,
        {
            /// Takes the raw, possibly foreign-ordered value `raw` and
            /// creates a wrapping object that protects the value from
            /// unguarded access.
            #[inline]
            #[must_use]
            pub const fn from_raw(raw: Raw) -> Self {
                self::from_raw(raw)
            }

            /// Returns the underlying raw, possibly foreign-ordered
            /// value behind this wrapping object.
            #[inline]
            #[must_use]
            pub fn to_raw(self) -> Raw {
                self::to_raw(self)
            }

            /// Creates the foreign-ordered value from a native value,
            /// converting the value before retaining it, if required.
            #[inline]
            #[must_use]
            pub fn from_native(native: Raw) -> Self {
                self::from_native(native)
            }

            /// Returns the native representation of the value behind
            /// this wrapping object, converting it, if required.
            #[inline]
            #[must_use]
            pub fn to_native(self) -> Raw {
                self::to_native(self)
            }
        }

        impl<Raw: core::clone::Clone> core::clone::Clone for $self<Raw> {
            #[inline]
            fn clone(&self) -> Self {
                Self(self.0.clone())
            }
        }

        impl<Raw: Copy> core::marker::Copy for $self<Raw> {
        }

        // For debugging simply print the raw values.
        impl<Raw: core::fmt::Debug> core::fmt::Debug for $self<Raw> {
            fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
                fmt.debug_tuple(stringify!($self)).field(&self.0).finish()
            }
        }

        impl<Raw> core::default::Default for $self<Raw>
        where
            Self: NativeEndian<Raw>,
            Raw: Copy + core::default::Default,
        {
            fn default() -> Self {
                Self::from_native(Default::default())
            }
        }

        impl<Raw> core::fmt::Display for $self<Raw>
        where
            Self: NativeEndian<Raw>,
            Raw: Copy + core::fmt::Display,
        {
            fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
                <Raw as core::fmt::Display>::fmt(&self.to_native(), fmt)
            }
        }

        impl<Raw> core::cmp::Eq for $self<Raw>
        where
            Self: NativeEndian<Raw>,
            Raw: Copy + core::cmp::Eq,
        {
        }

        impl<Raw> core::hash::Hash for $self<Raw>
        where
            Self: NativeEndian<Raw>,
            Raw: Copy + core::hash::Hash,
        {
            fn hash<Op>(&self, state: &mut Op)
            where
                Op: core::hash::Hasher,
            {
                self.to_native().hash(state)
            }
        }

        impl<Raw> core::cmp::Ord for $self<Raw>
        where
            Self: NativeEndian<Raw>,
            Raw: Copy + core::cmp::Ord,
        {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.to_native().cmp(&other.to_native())
            }
        }

        impl<Raw> core::cmp::PartialEq for $self<Raw>
        where
            Self: NativeEndian<Raw>,
            Raw: Copy + core::cmp::PartialEq,
        {
            fn eq(&self, other: &Self) -> bool {
                self.to_native().eq(&other.to_native())
            }
        }

        impl<Raw> core::cmp::PartialOrd for $self<Raw>
        where
            Self: NativeEndian<Raw>,
            Raw: Copy + core::cmp::PartialOrd,
        {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.to_native().partial_cmp(&other.to_native())
            }
        }
    };
}

implement_endian_wrapper!(BigEndian);
implement_endian_wrapper!(LittleEndian);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{align, ffi};

    // Verify typeinfo
    #[test]
    fn typeinfo() {
        assert_eq!(size_of::<BigEndian<u8>>(), 1);
        assert_eq!(size_of::<BigEndian<u64>>(), 8);
        assert_eq!(size_of::<LittleEndian<u8>>(), 1);
        assert_eq!(size_of::<LittleEndian<u64>>(), 8);

        assert_eq!(align_of::<BigEndian<u8>>(), 1);
        assert_eq!(align_of::<BigEndian<u64>>(), align_of::<u64>());
        assert_eq!(align_of::<LittleEndian<u8>>(), 1);
        assert_eq!(align_of::<LittleEndian<u64>>(), align_of::<u64>());

        // The niche of non-zero integers must be retained.
        assert_eq!(size_of::<Option<BigEndian<core::num::NonZeroU32>>>(), 4);
        assert_eq!(size_of::<Option<LittleEndian<core::num::NonZeroU32>>>(), 4);
    }

    // Verify basic behavior
    #[test]
    fn basic() {
        let r: u32 = 0x0a0b0c0d;

        {
            let b: BigEndian<u32> = BigEndian::from_raw(r);
            let l: LittleEndian<u32> = LittleEndian::from_raw(r);

            assert_eq!(b.to_raw(), r);
            assert_eq!(l.to_raw(), r);

            assert!(b.to_native() != l.to_native());
        }

        {
            let b: BigEndian<u32> = BigEndian::from_native(r);
            let l: LittleEndian<u32> = LittleEndian::from_native(r);

            assert_eq!(b.to_native(), r);
            assert_eq!(l.to_native(), r);

            assert!(b.to_raw() != l.to_raw());
        }
    }

    // Verify conversions through under- and over-aligned `Integer`
    // carriers, which exercise the generic `from_raw()`/`to_raw()`
    // implementations with mismatched alignment.
    #[test]
    fn unaligned() {
        {
            type Big32 = ffi::Integer<BigEndian<u32>, align::AlignAs<1>>;
            type Little32 = ffi::Integer<LittleEndian<u32>, align::AlignAs<1>>;

            let r: u32 = 0x0a0b0c0d;
            let bn: Big32 = Big32::new(BigEndian::from_native(r));
            let ln: Little32 = Little32::new(LittleEndian::from_native(r));

            assert_eq!(bn.to_native(), r);
            assert_eq!(ln.to_native(), r);
        }

        {
            type Big32 = ffi::Integer<BigEndian<u32>, align::AlignAs<8>>;
            type Little32 = ffi::Integer<LittleEndian<u32>, align::AlignAs<8>>;

            let r: u32 = 0x0a0b0c0d;
            let br: Big32 = Big32::new(BigEndian::from_raw(r));
            let lr: Little32 = Little32::new(LittleEndian::from_raw(r));

            assert_eq!(br.to_raw(), r);
            assert_eq!(lr.to_raw(), r);
        }
    }

    // Verify traits
    #[test]
    fn traits() {
        let r: u32 = 0x0a0b0c0d;
        let b: BigEndian<u32> = BigEndian::from_native(r);
        let l: LittleEndian<u32> = LittleEndian::from_native(r);

        // `Clone` / `Copy`
        let bc: BigEndian<u32> = b;
        let lc: LittleEndian<u32> = l;
        assert_eq!(bc, b);
        assert_eq!(lc, l);

        // `Debug`
        assert_eq!(
            std::format!("{:?}", BigEndian::from_raw(r)),
            "BigEndian(168496141)",
        );
        assert_eq!(
            std::format!("{:?}", LittleEndian::from_raw(r)),
            "LittleEndian(168496141)",
        );

        // `Default`
        assert_eq!(
            BigEndian::from_native(0),
            <BigEndian<u32> as Default>::default(),
        );
        assert_eq!(
            LittleEndian::from_native(0),
            <LittleEndian<u32> as Default>::default(),
        );

        // `Display`
        assert_eq!(std::format!("{}", b), "168496141");
        assert_eq!(std::format!("{}", l), "168496141");

        // `PartialEq` / `Eq`
        assert!(b == BigEndian::from_native(r));
        assert!(l == LittleEndian::from_native(r));

        // `PartialOrd` / `Ord`
        assert!(b < BigEndian::from_native(r + 1));
        assert!(l < LittleEndian::from_native(r + 1));
    }
}
