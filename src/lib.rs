#![cfg_attr(not(any(test, feature = "std")), no_std)]

macro_rules! impl_coerce_to_fields {
    (
        $( $type:ident<{ $generic:ident, $const:literal }> => $fields_type:ident ),+ $(,)?
    ) => {
        $(
            impl<$generic> core::ops::Deref for $type<$generic, $const> {
                type Target = crate::fields:: $fields_type<$generic>;
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    const _: () = assert!(
                        core::mem::size_of::<$type<u8, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<u8>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<u8, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<u8>>()
                    );

                    const _: () = assert!(
                        core::mem::size_of::<$type<f32, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f32, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::size_of::<$type<f64, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f64>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f64, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f64>>()
                    );

                    unsafe { &*(self as *const _ as *const crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> core::ops::DerefMut for $type<$generic, $const> {
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { &mut *(self as *mut _ as *mut crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> From<$type<$generic, $const>> for crate::fields:: $fields_type<$generic> {
                #[inline]
                fn from(value: $type<$generic, $const>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }

            impl<$generic> From<crate::fields:: $fields_type<$generic>> for $type<$generic, $const> {
                #[inline]
                fn from(value: crate::fields:: $fields_type<$generic>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }
        )+
    };
}

macro_rules! impl_eq_mint {
    ( $( ( $mint_type:ident, $linalg_type:ident < $type_size:literal > $(,)? ) ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T: PartialEq> PartialEq<mint::$mint_type<T>> for $linalg_type<T, $type_size> {
                #[inline]
                fn eq(&self, other: &mint::$mint_type<T>) -> bool {
                    let (lhs, rhs): (&[T; $type_size], &[T; $type_size]) =
                        (self.as_ref(), other.as_ref());
                    PartialEq::eq(lhs, rhs)
                }
            }

            #[cfg(feature = "mint")]
            impl<T: PartialEq> PartialEq<$linalg_type<T, $type_size>> for mint::$mint_type<T> {
                #[inline]
                fn eq(&self, other: &$linalg_type<T, $type_size>) -> bool {
                    let (lhs, rhs): (&[T; $type_size], &[T; $type_size]) =
                        (self.as_ref(), other.as_ref());
                    PartialEq::eq(lhs, rhs)
                }
            }
        )*
    };
}

pub mod fields;
pub mod matrix;
pub mod rotation;
pub mod scalar;
pub mod transform;
pub mod vector;
