use crate::scalar::{ClosedAdd, ClosedDiv, ClosedMul, ClosedNeg, ClosedSub, One, Sqrt, Zero};
use crate::vector::{Vector, Vector3, Vector4};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A quaternion, stored as a 3-component vector part and a scalar part.
///
/// When used as a rotation, `v` is the sine-weighted rotation axis and
/// `w` is the cosine of the half-angle.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Quaternion<T> {
    pub v: Vector3<T>,
    pub w: T,
}

impl<T> Quaternion<T> {
    #[must_use]
    #[inline]
    pub fn from_components<V: Into<Vector3<T>>>(v: V, w: T) -> Self {
        Self { v: v.into(), w }
    }

    #[must_use]
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            v: Vector3::new([x, y, z]),
            w,
        }
    }

    /// Converts the quaternion into a 4-component vector, scalar part
    /// last.
    #[must_use]
    #[inline]
    pub fn into_vector(self) -> Vector4<T> {
        self.v.expand(self.w)
    }

    /// Creates a quaternion from a 4-component vector, scalar part last.
    #[must_use]
    #[inline]
    pub fn from_vector(vector: Vector4<T>) -> Self {
        let [x, y, z, w] = vector.to_array();
        Self::new(x, y, z, w)
    }
}

impl<T: Zero + One> Quaternion<T> {
    /// The identity rotation, `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self {
        v: Vector::ZERO,
        w: T::ONE,
    };

    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }
}

impl<T: Zero + One> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Quaternion<T> {
    #[must_use]
    #[inline]
    pub fn dot(self, rhs: Quaternion<T>) -> T
    where
        T: ClosedAdd + ClosedMul + Zero,
    {
        Vector::dot(self.v, rhs.v) + (self.w * rhs.w)
    }
}

impl<T: ClosedNeg> Quaternion<T> {
    /// Returns the conjugate of the quaternion, which for a unit
    /// quaternion is the inverse rotation.
    #[must_use]
    #[inline]
    pub fn conjugated(self) -> Self {
        Quaternion::from_components(Neg::neg(self.v), self.w)
    }
}

impl<T: ClosedNeg + Copy> Quaternion<T> {
    /// Conjugates the quaternion in place.
    #[inline]
    pub fn conjugate(&mut self) {
        self.v = Neg::neg(self.v);
    }
}

impl<T: ClosedAdd + ClosedMul + Copy + Zero> Quaternion<T> {
    /// The squared length of the quaternion, treated as a 4-component
    /// vector.
    #[must_use]
    #[inline]
    pub fn len_squared(self) -> T {
        self.dot(self)
    }
}

impl<T: ClosedAdd + ClosedMul + Copy + Zero + Sqrt> Quaternion<T> {
    /// The length of the quaternion, treated as a 4-component vector.
    #[must_use]
    #[inline]
    pub fn len(self) -> T {
        self.len_squared().sqrt()
    }
}

impl<T: ClosedAdd + ClosedDiv + ClosedMul + Copy + Zero + Sqrt> Quaternion<T> {
    /// Scales the quaternion to unit length.
    ///
    /// The result of normalizing a zero-length quaternion follows IEEE
    /// division semantics.
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Quaternion<T> {
        self / self.len()
    }
}

impl<T> Mul<Quaternion<T>> for Quaternion<T>
where
    T: ClosedAdd + ClosedMul + ClosedSub + Copy + Zero,
{
    type Output = Quaternion<T>;

    /// The Hamilton product; composes the right-hand rotation with the
    /// left-hand one.
    #[inline]
    fn mul(self, rhs: Quaternion<T>) -> Quaternion<T> {
        let v = (rhs.v * self.w) + (self.v * rhs.w) + self.v.cross(rhs.v);
        let w = (self.w * rhs.w) - Vector::dot(self.v, rhs.v);

        Quaternion::from_components(v, w)
    }
}

impl<T> MulAssign<Quaternion<T>> for Quaternion<T>
where
    T: ClosedAdd + ClosedMul + ClosedSub + Copy + Zero,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Quaternion<T>) {
        *self = *self * rhs;
    }
}

impl<T: Add<Output = T>> Add<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn add(self, rhs: Quaternion<T>) -> Quaternion<T> {
        Quaternion {
            v: self.v + rhs.v,
            w: self.w + rhs.w,
        }
    }
}

impl<T: AddAssign + Copy> AddAssign<Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Quaternion<T>) {
        self.v += rhs.v;
        self.w += rhs.w;
    }
}

impl<T: Sub<Output = T>> Sub<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn sub(self, rhs: Quaternion<T>) -> Quaternion<T> {
        Quaternion {
            v: self.v - rhs.v,
            w: self.w - rhs.w,
        }
    }
}

impl<T: SubAssign + Copy> SubAssign<Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quaternion<T>) {
        self.v -= rhs.v;
        self.w -= rhs.w;
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn mul(self, rhs: T) -> Quaternion<T> {
        Quaternion {
            v: self.v * rhs,
            w: self.w * rhs,
        }
    }
}

impl<T: Copy + MulAssign> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.v *= rhs;
        self.w *= rhs;
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn div(self, rhs: T) -> Quaternion<T> {
        Quaternion {
            v: self.v / rhs,
            w: self.w / rhs,
        }
    }
}

impl<T: Copy + DivAssign> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.v /= rhs;
        self.w /= rhs;
    }
}

impl<T: ClosedNeg> Neg for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        Quaternion {
            v: Neg::neg(self.v),
            w: Neg::neg(self.w),
        }
    }
}

impl<T> From<Vector4<T>> for Quaternion<T> {
    #[inline]
    fn from(value: Vector4<T>) -> Self {
        Self::from_vector(value)
    }
}

impl<T> From<Quaternion<T>> for Vector4<T> {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        value.into_vector()
    }
}

impl<V: Into<Vector3<T>>, T> From<(V, T)> for Quaternion<T> {
    #[inline]
    fn from((v, w): (V, T)) -> Self {
        Self::from_components(v, w)
    }
}

impl<T> From<Quaternion<T>> for (Vector3<T>, T) {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        (value.v, value.w)
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn from(value: mint::Quaternion<T>) -> Self {
        Self {
            v: value.v.into(),
            w: value.s,
        }
    }
}

#[cfg(feature = "mint")]
impl<T> From<Quaternion<T>> for mint::Quaternion<T> {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        mint::Quaternion {
            v: value.v.into(),
            s: value.w,
        }
    }
}

#[cfg(feature = "mint")]
impl<T> mint::IntoMint for Quaternion<T> {
    type MintType = mint::Quaternion<T>;
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {
    #[inline]
    fn zeroed() -> Self {
        Self {
            v: bytemuck::Zeroable::zeroed(),
            w: bytemuck::Zeroable::zeroed(),
        }
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.v.abs_diff_eq(&other.v, epsilon) && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq> approx::RelativeEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.v.relative_eq(&other.v, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq> approx::UlpsEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.v.ulps_eq(&other.v, epsilon, max_ulps) && self.w.ulps_eq(&other.w, epsilon, max_ulps)
    }
}
