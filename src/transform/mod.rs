//! Conversions between rotation representations.
//!
//! Three representations of the same rotation are supported:
//!
//! - a *rotation vector*, whose direction is the rotation axis and whose
//!   length is the rotation angle in radians;
//! - an *axis-angle vector*, a unit axis packed with the angle as the
//!   fourth component;
//! - a *rotation quaternion*.
//!
//! Every function is a pure map from one representation to another; there
//! is no state and nothing to configure.

use crate::rotation::quaternion::Quaternion;
use crate::scalar::{ClosedAdd, ClosedDiv, ClosedMul, One, Select, Sqrt, Trig, Zero};
use crate::vector::{Vector3, Vector4};

/// Converts a rotation vector to an axis-angle vector.
///
/// If the rotation vector's length is `0` the axis is undefined, and the
/// canonical Z axis is returned instead: the result is exactly
/// `(0, 0, 1, 0)`. The choice between the two is a mask-driven blend, not
/// a branch, so lanes of a wide component type stay uniform.
///
/// # Examples
///
/// ```
/// # use matral::{transform, vector::{Vector3, Vector4}};
/// let v = Vector3::new([2.0, 0.0, 0.0]);
/// assert_eq!(transform::axis_angle(v), Vector4::new([1.0, 0.0, 0.0, 2.0]));
///
/// let zero = Vector3::<f32>::zero();
/// assert_eq!(transform::axis_angle(zero), Vector4::new([0.0, 0.0, 1.0, 0.0]));
/// ```
#[must_use]
#[inline]
pub fn axis_angle<T>(v: Vector3<T>) -> Vector4<T>
where
    T: Copy + Zero + One + ClosedAdd + ClosedMul + ClosedDiv + Sqrt + Select,
{
    let angle = v.len();
    let axis = Vector3::select(angle.not_equal(T::ZERO), v / angle, Vector3::Z);

    axis.extend(angle)
}

/// Converts an axis-angle pair to a rotation vector.
///
/// # Examples
///
/// ```
/// # use matral::{transform, vector::Vector3};
/// let axis = Vector3::new([0.0, 0.0, 1.0]);
/// let v = transform::rotation_vec(axis, core::f32::consts::FRAC_PI_2);
/// assert_eq!(v, Vector3::new([0.0, 0.0, core::f32::consts::FRAC_PI_2]));
/// ```
#[must_use]
#[inline]
pub fn rotation_vec<T>(axis: Vector3<T>, angle: T) -> Vector3<T>
where
    T: Copy + ClosedMul,
{
    axis * angle
}

/// Converts a packed axis-angle vector to a rotation vector.
#[must_use]
#[inline]
pub fn rotation_vec_from_axis_angle<T>(v: Vector4<T>) -> Vector3<T>
where
    T: Copy + ClosedMul,
{
    v.truncate() * v.w
}

/// Converts an axis-angle pair to a rotation quaternion.
///
/// The half-angle sine and cosine are produced by a single combined
/// [`sin_cos`] evaluation.
///
/// [`sin_cos`]: crate::scalar::Trig::sin_cos
#[must_use]
#[inline]
pub fn rotation_quat<T>(axis: Vector3<T>, angle: T) -> Quaternion<T>
where
    T: Copy + One + ClosedAdd + ClosedDiv + ClosedMul + Trig,
{
    let (sin, cos) = (angle / (T::ONE + T::ONE)).sin_cos();

    Quaternion::from_components(axis * sin, cos)
}

/// Converts a packed axis-angle vector to a rotation quaternion.
#[must_use]
#[inline]
pub fn rotation_quat_from_axis_angle<T>(v: Vector4<T>) -> Quaternion<T>
where
    T: Copy + One + ClosedAdd + ClosedDiv + ClosedMul + Trig,
{
    rotation_quat(v.truncate(), v.w)
}

/// Converts a rotation vector to a rotation quaternion.
///
/// A zero-length rotation vector converts to the identity quaternion,
/// exactly `(0, 0, 0, 1)`, through the same blend as [`axis_angle()`].
///
/// # Examples
///
/// ```
/// # use matral::{transform, rotation::quaternion::Quaternion, vector::Vector3};
/// let quat = transform::rotation_quat_from_rotation_vec(Vector3::<f64>::zero());
/// assert_eq!(quat, Quaternion::identity());
/// ```
#[must_use]
#[inline]
pub fn rotation_quat_from_rotation_vec<T>(v: Vector3<T>) -> Quaternion<T>
where
    T: Copy + Zero + One + ClosedAdd + ClosedDiv + ClosedMul + Sqrt + Select + Trig,
{
    rotation_quat_from_axis_angle(axis_angle(v))
}
