// SPDX-License-Identifier: MIT OR Apache-2.0

//! The scalar and SIMD-lane arithmetic layer.
//!
//! Every trait here is a seam: the vector and matrix families are written
//! against these traits only, so a wide lane type (N floats behind one
//! value) slots in by implementing them with lane-wise semantics. The
//! impls in this module cover the primitive scalars, with float math
//! routed through `std` intrinsics or `libm` depending on features.

use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

pub trait ClosedSub: Sized + Sub<Output = Self> {}
pub trait ClosedMul: Sized + Mul<Output = Self> {}
pub trait ClosedAdd: Sized + Add<Output = Self> {}
pub trait ClosedDiv: Sized + Div<Output = Self> {}
pub trait ClosedNeg: Sized + Neg<Output = Self> {}
pub trait ClosedRem: Sized + Rem<Output = Self> {}

impl<T: Sized + Sub<Output = Self>> ClosedSub for T {}
impl<T: Sized + Mul<Output = Self>> ClosedMul for T {}
impl<T: Sized + Add<Output = Self>> ClosedAdd for T {}
impl<T: Sized + Div<Output = Self>> ClosedDiv for T {}
impl<T: Sized + Neg<Output = Self>> ClosedNeg for T {}
impl<T: Sized + Rem<Output = Self>> ClosedRem for T {}

#[doc(alias = "1")]
pub trait One {
    const ONE: Self;
}

#[doc(alias = "0")]
pub trait Zero {
    const ZERO: Self;
}

pub trait Trig: Copy {
    #[must_use]
    fn sin(self) -> Self;
    #[must_use]
    fn cos(self) -> Self;
    #[must_use]
    fn tan(self) -> Self;

    /// Computes the sine and cosine together.
    ///
    /// Lane types can map this to a single combined evaluation, so callers
    /// should prefer it over separate `sin` and `cos` calls.
    #[must_use]
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

pub trait Sqrt: Copy {
    #[must_use]
    fn sqrt(self) -> Self;

    /// The reciprocal of the square root.
    #[must_use]
    fn rsqrt(self) -> Self;
}

pub trait Pow: Copy {
    #[must_use]
    fn pow(self, exponent: Self) -> Self;
}

pub trait Recip: Copy {
    #[must_use]
    fn recip(self) -> Self;
}

pub trait Abs: Copy {
    #[must_use]
    fn abs(self) -> Self;
}

pub trait MinMax: Copy {
    #[must_use]
    fn min(self, other: Self) -> Self;
    #[must_use]
    fn max(self, other: Self) -> Self;
}

/// Branchless lane selection.
///
/// `select` must evaluate as an unconditional blend over `Mask`: a wide
/// lane type keeps per-lane results uniform where an `if` would diverge.
/// For the plain scalars implemented here the mask is a `bool` and the
/// blend degenerates to a two-way choice.
pub trait Select: Sized {
    type Mask: Copy;

    #[must_use]
    fn not_equal(self, rhs: Self) -> Self::Mask;

    #[must_use]
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;
}

/// Explicit, possibly-lossy conversion between component types.
///
/// Widening a vector or matrix goes through `From`; this is the
/// deliberately separate entry point for narrowing, so that a truncating
/// conversion is always spelled out at the call site.
pub trait FromScalar<S> {
    #[must_use]
    fn from_scalar(value: S) -> Self;
}

macro_rules! fragments {
    ( $( $( #[ $meta:meta] )* $num_ty:ty $(;)? )? ) => {};

    ( $( #[ $meta:meta] )* $num_ty:ty ; zero = $zero:expr $(, $($rest:tt)* )? ) => {

        $( #[ $meta] )*
        impl Zero for $num_ty {
            const ZERO: Self = $zero;
        }

        fragments! { $( #[ $meta] )* $num_ty ; $( $($rest)* )? }
    };

    ( $( #[ $meta:meta] )* $num_ty:ty ; one = $one:expr $(, $($rest:tt)* )? ) => {
        $( #[ $meta] )*
        impl One for $num_ty {
            const ONE: Self = $one;
        }

        fragments! { $( #[ $meta] )* $num_ty ; $( $($rest)* )? }
    };
}

macro_rules! impl_nums {
    (
        $(
            $( #[ $meta:meta] )*
            $num_ty:ty => ( $( $inits:tt )* )
        ),* $(,)?
    ) => {
        $(
            fragments! { $( #[ $meta ] )* $num_ty ; $($inits)* }
        )*
    };
}

impl_nums! {
    u8 => (zero = 0, one = 1),
    u16 => (zero = 0, one = 1),
    u32 => (zero = 0, one = 1),
    u64 => (zero = 0, one = 1),
    u128 => (zero = 0, one = 1),
    usize => (zero = 0, one = 1),

    i8 => (zero = 0, one = 1),
    i16 => (zero = 0, one = 1),
    i32 => (zero = 0, one = 1),
    i64 => (zero = 0, one = 1),
    i128 => (zero = 0, one = 1),
    isize => (zero = 0, one = 1),

    f32 => (zero = 0.0, one = 1.0),
    f64 => (zero = 0.0, one = 1.0),
}

impl<T: Zero, const N: usize> Zero for [T; N] {
    const ZERO: Self = [T::ZERO; N];
}

macro_rules! impl_float_traits {
    ( $($type:ty),* $(,)? ) => {
        $(
            #[cfg(feature = "std")]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    <$type>::sqrt(self)
                }

                #[inline(always)]
                fn rsqrt(self) -> Self {
                    <$type>::sqrt(self).recip()
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    libm::Libm::<$type>::sqrt(self)
                }

                #[inline(always)]
                fn rsqrt(self) -> Self {
                    libm::Libm::<$type>::sqrt(self).recip()
                }
            }

            #[cfg(feature = "std")]
            impl Trig for $type {
                #[inline]
                fn sin(self) -> Self {
                    <$type>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    <$type>::cos(self)
                }

                #[inline]
                fn tan(self) -> Self {
                    <$type>::tan(self)
                }

                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    <$type>::sin_cos(self)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Trig for $type {
                #[inline]
                fn sin(self) -> Self {
                    libm::Libm::<$type>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    libm::Libm::<$type>::cos(self)
                }

                #[inline]
                fn tan(self) -> Self {
                    libm::Libm::<$type>::tan(self)
                }

                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    libm::Libm::<$type>::sincos(self)
                }
            }

            #[cfg(feature = "std")]
            impl Pow for $type {
                #[inline]
                fn pow(self, exponent: Self) -> Self {
                    <$type>::powf(self, exponent)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Pow for $type {
                #[inline]
                fn pow(self, exponent: Self) -> Self {
                    libm::Libm::<$type>::pow(self, exponent)
                }
            }

            impl Recip for $type {
                #[inline(always)]
                fn recip(self) -> Self {
                    <$type>::recip(self)
                }
            }

            impl MinMax for $type {
                #[inline(always)]
                fn min(self, other: Self) -> Self {
                    <$type>::min(self, other)
                }

                #[inline(always)]
                fn max(self, other: Self) -> Self {
                    <$type>::max(self, other)
                }
            }
        )*
    };
}

impl_float_traits! {
    f32, f64,
}

macro_rules! impl_abs_for_signed_types {
    (
        $($ty:ty),* $(,)?
    ) => {
        $(
            impl Abs for $ty {
                #[inline]
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }
            }
        )*
    };
}

impl_abs_for_signed_types! {
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}

macro_rules! impl_abs_for_unsigned_types {
    (
        $($ty:ty),* $(,)?
    ) => {
        $(
            impl Abs for $ty {
                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }
        )*
    };
}

impl_abs_for_unsigned_types! {
    u8, u16, u32, u64, u128, usize,
}

macro_rules! impl_minmax_for_int_types {
    (
        $($ty:ty),* $(,)?
    ) => {
        $(
            impl MinMax for $ty {
                #[inline]
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )*
    };
}

impl_minmax_for_int_types! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
}

macro_rules! impl_select {
    (
        $($ty:ty),* $(,)?
    ) => {
        $(
            impl Select for $ty {
                type Mask = bool;

                #[inline]
                fn not_equal(self, rhs: Self) -> bool {
                    self != rhs
                }

                #[inline]
                fn select(mask: bool, if_true: Self, if_false: Self) -> Self {
                    if mask { if_true } else { if_false }
                }
            }
        )*
    };
}

impl_select! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}

macro_rules! impl_from_scalar {
    ( $to:ty ; $($from:ty),* $(,)? ) => {
        $(
            impl FromScalar<$from> for $to {
                #[inline(always)]
                fn from_scalar(value: $from) -> Self {
                    value as $to
                }
            }
        )*
    };
}

macro_rules! impl_from_scalar_all {
    ( $($to:ty),* $(,)? ) => {
        $(
            impl_from_scalar! {
                $to ;
                u8, u16, u32, u64, u128, usize,
                i8, i16, i32, i64, i128, isize,
                f32, f64,
            }
        )*
    };
}

impl_from_scalar_all! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}
