// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::scalar::{
    Abs, ClosedAdd, ClosedMul, FromScalar, MinMax, One, Pow, Recip, Sqrt, Trig, Zero,
};
use crate::vector::Vector;
use core::{
    array,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
        ShrAssign, Sub, SubAssign,
    },
    slice,
};

#[cfg(test)]
mod tests;

/// A column-major matrix with `C` columns and `R` rows.
///
/// The matrix is stored as `C` columns, each a [`Vector`] of `R`
/// components, laid out contiguously: element `(row j, column i)` of the
/// matrix is `m[i][j]`, and the whole matrix has the same layout as
/// `[[T; R]; C]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Matrix<T = f32, const C: usize = 4, const R: usize = 4> {
    columns: [Vector<T, R>; C],
}

impl<T: Default, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_, _| Default::default())
    }
}

/// A 2x2 matrix.
pub type Matrix2<T = f32> = Matrix<T, 2, 2>;

/// A 3x3 matrix.
pub type Matrix3<T = f32> = Matrix<T, 3, 3>;

/// A 4x4 matrix.
pub type Matrix4<T = f32> = Matrix<T, 4, 4>;

/// A matrix with 2 columns and 3 rows.
pub type Matrix2x3<T = f32> = Matrix<T, 2, 3>;

/// A matrix with 2 columns and 4 rows.
pub type Matrix2x4<T = f32> = Matrix<T, 2, 4>;

/// A matrix with 3 columns and 2 rows.
pub type Matrix3x2<T = f32> = Matrix<T, 3, 2>;

/// A matrix with 3 columns and 4 rows.
pub type Matrix3x4<T = f32> = Matrix<T, 3, 4>;

/// A matrix with 4 columns and 2 rows.
pub type Matrix4x2<T = f32> = Matrix<T, 4, 2>;

/// A matrix with 4 columns and 3 rows.
pub type Matrix4x3<T = f32> = Matrix<T, 4, 3>;

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    pub const NUM_ELEMENTS: usize = C * R;

    /// Create a new `Matrix` from the given nested array of columns.
    ///
    /// Note that the outer array holds the *columns* of the matrix, so a
    /// matrix written out in the conventional row-by-row notation appears
    /// transposed in source code.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 2> = Matrix::new([
    ///     [1, 2], // first column
    ///     [3, 4], // second column
    /// ]);
    ///
    /// assert_eq!(matrix.row(0).to_array(), [1, 3]);
    /// ```
    #[must_use]
    #[inline]
    pub fn new(columns: [[T; R]; C]) -> Self {
        Self {
            columns: columns.map(Vector::new),
        }
    }

    /// Create a new `Matrix` from the given column vectors.
    #[must_use]
    #[inline]
    pub const fn from_columns(columns: [Vector<T, R>; C]) -> Self {
        Self { columns }
    }

    /// Create a new `Matrix` where the element at column `i`, row `j` is
    /// initialized with `f(i, j)`.
    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            columns: array::from_fn(|i| Vector::from_fn(|j| f(i, j))),
        }
    }

    /// Returns a reference to the columns of the matrix.
    #[must_use]
    #[inline]
    pub const fn as_columns(&self) -> &[Vector<T, R>; C] {
        &self.columns
    }

    /// Returns a mutable reference to the columns of the matrix.
    #[must_use]
    #[inline]
    pub const fn as_columns_mut(&mut self) -> &mut [Vector<T, R>; C] {
        &mut self.columns
    }

    /// Converts the matrix into its column vectors.
    #[must_use]
    #[inline]
    pub fn to_columns(self) -> [Vector<T, R>; C] {
        self.columns
    }

    /// Returns the elements of the matrix as a flat slice, column-major.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 3> = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.columns.as_ptr().cast(), C * R) }
    }

    /// Returns the elements of the matrix as a mutable flat slice,
    /// column-major.
    #[must_use]
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.columns.as_mut_ptr().cast(), C * R) }
    }

    /// Access the start of the matrix's element data as a pointer.
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.columns.as_ptr().cast()
    }

    /// Access the start of the matrix's element data as a mutable pointer.
    #[must_use]
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.columns.as_mut_ptr().cast()
    }

    /// Attempt to get a reference to the element at column `i`, row `j`.
    ///
    /// This method returns `None` if either of the given indices is out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 2> = Matrix::new([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    ///
    /// assert_eq!(matrix.get(1, 0), Some(&3));
    /// assert_eq!(matrix.get(2, 0), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < C && j < R {
            Some(&self.columns[i].data[j])
        } else {
            None
        }
    }

    /// Attempt to get a mutable reference to the element at column `i`,
    /// row `j`.
    ///
    /// This method returns `None` if either of the given indices is out of
    /// bounds.
    #[must_use]
    #[inline]
    pub const fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        if i < C && j < R {
            Some(&mut self.columns[i].data[j])
        } else {
            None
        }
    }

    /// Get a reference to the element at column `i`, row `j` without
    /// performing any bounds checks.
    ///
    /// # Safety
    ///
    /// You must ensure that `i < C` and `j < R`, otherwise this method
    /// causes undefined behavior.
    #[must_use]
    #[inline]
    pub const unsafe fn get_unchecked(&self, i: usize, j: usize) -> &T {
        unsafe { &*self.as_ptr().add((i * R) + j) }
    }

    /// Get a mutable reference to the element at column `i`, row `j`
    /// without performing any bounds checks.
    ///
    /// # Safety
    ///
    /// You must ensure that `i < C` and `j < R`, otherwise this method
    /// causes undefined behavior.
    #[must_use]
    #[inline]
    pub const unsafe fn get_unchecked_mut(&mut self, i: usize, j: usize) -> &mut T {
        unsafe { &mut *self.as_mut_ptr().add((i * R) + j) }
    }

    /// Replaces column `i` with the given vector.
    ///
    /// # Panics
    ///
    /// This method will panic if `i` is equal or greater to `C`.
    #[track_caller]
    #[inline]
    pub fn set_column(&mut self, i: usize, column: Vector<T, R>) {
        assert!(i < C, "column index out of bounds");
        self.columns[i] = column;
    }

    /// Applies `f` to every element of the matrix, returning the results
    /// as a new matrix.
    #[must_use]
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, C, R> {
        Matrix {
            columns: self.columns.map(|column| column.map(&mut f)),
        }
    }

    /// Applies `f` to every pair of elements from `self` and `rhs`,
    /// returning the results as a new matrix.
    #[must_use]
    #[inline]
    pub fn zip_map<U, Ret, F: FnMut(T, U) -> Ret>(
        self,
        rhs: Matrix<U, C, R>,
        mut f: F,
    ) -> Matrix<Ret, C, R> {
        let mut pairs = self.columns.into_iter().zip(rhs.columns);
        Matrix {
            columns: array::from_fn(|_| {
                // both arrays yield exactly C columns
                match pairs.next() {
                    Some((lhs, rhs)) => lhs.zip_map(rhs, &mut f),
                    None => unreachable!(),
                }
            }),
        }
    }

    /// Multiplies each element of `self` with the corresponding element of
    /// `rhs`.
    ///
    /// This is the componentwise product; `*` between two matrices is the
    /// linear-map composition instead.
    #[must_use]
    #[inline]
    pub fn elementwise_mul<U>(self, rhs: Matrix<U, C, R>) -> Matrix<T::Output, C, R>
    where
        T: Mul<U>,
    {
        self.zip_map(rhs, Mul::mul)
    }

    /// Divides each element of `self` by the corresponding element of
    /// `rhs`.
    #[must_use]
    #[inline]
    pub fn elementwise_div<U>(self, rhs: Matrix<U, C, R>) -> Matrix<T::Output, C, R>
    where
        T: Div<U>,
    {
        self.zip_map(rhs, Div::div)
    }

    /// Converts every element to `U` losslessly.
    ///
    /// This is the promoting counterpart to [`Matrix::cast()`]: it is only
    /// available where `U` can represent every value of `T`.
    ///
    /// [`Matrix::cast()`]: ./struct.Matrix.html#method.cast
    #[must_use]
    #[inline]
    pub fn widen<U: From<T>>(self) -> Matrix<U, C, R> {
        self.map(From::from)
    }

    /// Converts every element to `U` with an explicit, possibly lossy,
    /// numeric cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::Matrix;
    /// let matrix: Matrix<f32, 2, 2> = Matrix::new([
    ///     [1.9, 2.2],
    ///     [-3.7, 4.0],
    /// ]);
    ///
    /// let narrowed: Matrix<i32, 2, 2> = matrix.cast();
    /// assert_eq!(narrowed, Matrix::new([
    ///     [1, 2],
    ///     [-3, 4],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn cast<U: FromScalar<T>>(self) -> Matrix<U, C, R> {
        self.map(U::from_scalar)
    }
}

impl<T: Copy, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Creates a new matrix where every element is set to `value`.
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self {
            columns: [Vector::splat(value); C],
        }
    }

    /// Returns a copy of the column at `i`.
    ///
    /// # Panics
    ///
    /// This method will panic if `i` is equal or greater to `C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 3> = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.column(1).to_array(), [4, 5, 6]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub const fn column(&self, i: usize) -> Vector<T, R> {
        assert!(i < C, "column index out of bounds");
        self.columns[i]
    }

    /// Returns a copy of the row at `j`, gathered across every column.
    ///
    /// # Panics
    ///
    /// This method will panic if `j` is equal or greater to `R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 3> = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.row(2).to_array(), [3, 6]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn row(&self, j: usize) -> Vector<T, C> {
        assert!(j < R, "row index out of bounds");
        Vector::from_fn(|i| self.columns[i].data[j])
    }

    /// Replaces row `j`, scattering the given vector across every column.
    ///
    /// # Panics
    ///
    /// This method will panic if `j` is equal or greater to `R`.
    #[track_caller]
    #[inline]
    pub fn set_row(&mut self, j: usize, row: Vector<T, C>) {
        assert!(j < R, "row index out of bounds");
        for (i, elem) in row.into_iter().enumerate() {
            self.columns[i].data[j] = elem;
        }
    }

    /// Computes the transpose of the matrix: every output column is the
    /// corresponding input row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 3> = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix::new([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Matrix<T, R, C> {
        Matrix::from_fn(|i, j| self.columns[j].data[i])
    }
}

impl<T: Copy + Zero, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Creates a matrix with `value` along the diagonal and every other
    /// element set to zero.
    ///
    /// For non-square shapes the diagonal is filled up to the smaller of
    /// the two dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::Matrix;
    /// let matrix: Matrix<i32, 3, 2> = Matrix::diagonal(7);
    ///
    /// assert_eq!(matrix, Matrix::new([
    ///     [7, 0],
    ///     [0, 7],
    ///     [0, 0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub const fn diagonal(value: T) -> Self {
        let mut columns = [Vector::ZERO; C];

        let mut i = 0;
        while i < C {
            if i < R {
                columns[i].data[i] = value;
            }
            i += 1;
        }

        Self { columns }
    }
}

impl<T: Zero, const C: usize, const R: usize> Zero for Matrix<T, C, R> {
    const ZERO: Self = Matrix {
        columns: [Vector::ZERO; C],
    };
}

impl<T: Zero, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The matrix with every element set to zero.
    #[must_use]
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: Copy + Zero + One, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Constructs an instance of the identity matrix.
    ///
    /// For non-square shapes this is the same diagonal fill as
    /// [`Matrix::diagonal()`] with `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::Matrix;
    /// let matrix = Matrix::<f64, 3, 3>::identity();
    ///
    /// assert_eq!(matrix, Matrix::new([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// ```
    ///
    /// [`Matrix::diagonal()`]: ./struct.Matrix.html#method.diagonal
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        Self::diagonal(T::ONE)
    }

    /// Creates a matrix of this shape from a matrix of any other shape.
    ///
    /// The overlapping region is copied; any new element is `1` on the
    /// diagonal and `0` elsewhere. Growing a matrix therefore promotes an
    /// affine transform to its higher-dimensional homogeneous form, and
    /// shrinking one slices away the outer columns and rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matral::matrix::{Matrix, Matrix2, Matrix4};
    /// let matrix = Matrix2::new([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    ///
    /// assert_eq!(Matrix4::from_matrix(matrix), Matrix::new([
    ///     [1.0, 2.0, 0.0, 0.0],
    ///     [3.0, 4.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_matrix<const C2: usize, const R2: usize>(other: Matrix<T, C2, R2>) -> Self {
        Matrix::from_fn(|i, j| {
            if i < C2 && j < R2 {
                other.columns[i].data[j]
            } else if i == j {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Converts the matrix to another shape; the method form of
    /// [`Matrix::from_matrix()`].
    ///
    /// [`Matrix::from_matrix()`]: ./struct.Matrix.html#method.from_matrix
    #[must_use]
    #[inline]
    pub fn reshape<const C2: usize, const R2: usize>(self) -> Matrix<T, C2, R2> {
        Matrix::from_matrix(self)
    }
}

impl<T: Trig, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The elementwise sine of the matrix.
    #[must_use]
    #[inline]
    pub fn sin(self) -> Self {
        self.map(T::sin)
    }

    /// The elementwise cosine of the matrix.
    #[must_use]
    #[inline]
    pub fn cos(self) -> Self {
        self.map(T::cos)
    }

    /// The elementwise sine and cosine of the matrix, evaluated together
    /// column by column.
    #[must_use]
    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let mut sin = self;
        let mut cos = self;
        let mut i = 0;
        while i < C {
            let (s, c) = self.columns[i].sin_cos();
            sin.columns[i] = s;
            cos.columns[i] = c;
            i += 1;
        }

        (sin, cos)
    }
}

impl<T: Pow, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Raises every element to the power `exponent`.
    #[must_use]
    #[inline]
    pub fn pow(self, exponent: T) -> Self {
        self.map(|elem| elem.pow(exponent))
    }

    /// Raises every element to the power of the corresponding element of
    /// `exponent`.
    #[must_use]
    #[inline]
    pub fn elementwise_pow(self, exponent: Self) -> Self {
        self.zip_map(exponent, T::pow)
    }
}

impl<T: Recip, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The elementwise reciprocal of the matrix.
    #[must_use]
    #[inline]
    pub fn recip(self) -> Self {
        self.map(T::recip)
    }
}

impl<T: Sqrt, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The elementwise square root of the matrix.
    #[must_use]
    #[inline]
    pub fn sqrt(self) -> Self {
        self.map(T::sqrt)
    }

    /// The elementwise reciprocal square root of the matrix.
    #[must_use]
    #[inline]
    pub fn rsqrt(self) -> Self {
        self.map(T::rsqrt)
    }
}

impl<T: MinMax, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The elementwise minimum of two matrices.
    #[must_use]
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, T::min)
    }

    /// The elementwise maximum of two matrices.
    #[must_use]
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, T::max)
    }
}

impl<T: Abs, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The elementwise absolute value of the matrix.
    #[must_use]
    #[inline]
    pub fn abs(self) -> Self {
        self.map(T::abs)
    }
}

impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.columns[index]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.columns[index]
    }
}

impl<T: Neg, const C: usize, const R: usize> Neg for Matrix<T, C, R> {
    type Output = Matrix<T::Output, C, R>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<T: Not, const C: usize, const R: usize> Not for Matrix<T, C, R> {
    type Output = Matrix<T::Output, C, R>;

    #[inline]
    fn not(self) -> Self::Output {
        self.map(Not::not)
    }
}

macro_rules! impl_componentwise_binop {
    ( $( ($op_trait:ident, $op_method:ident) ),* $(,)? ) => {
        $(
            impl<T: Copy + $op_trait<Output = T>, const C: usize, const R: usize> $op_trait<T>
                for Matrix<T, C, R>
            {
                type Output = Matrix<T, C, R>;

                #[inline]
                fn $op_method(self, rhs: T) -> Matrix<T, C, R> {
                    self.map(|elem| $op_trait::$op_method(elem, rhs))
                }
            }

            impl<T: $op_trait<Output = T>, const C: usize, const R: usize>
                $op_trait<Matrix<T, C, R>> for Matrix<T, C, R>
            {
                type Output = Matrix<T, C, R>;

                #[inline]
                fn $op_method(self, rhs: Matrix<T, C, R>) -> Matrix<T, C, R> {
                    self.zip_map(rhs, $op_trait::$op_method)
                }
            }
        )*
    };
}

impl_componentwise_binop! {
    (Add, add),
    (Sub, sub),
    (Div, div),
    (Rem, rem),
    (BitAnd, bitand),
    (BitOr, bitor),
    (BitXor, bitxor),
    (Shl, shl),
    (Shr, shr),
}

macro_rules! impl_componentwise_assign {
    ( $( ($op_trait:ident, $op_method:ident) ),* $(,)? ) => {
        $(
            impl<T: Copy + $op_trait, const C: usize, const R: usize> $op_trait<T>
                for Matrix<T, C, R>
            {
                #[inline]
                fn $op_method(&mut self, rhs: T) {
                    for column in &mut self.columns {
                        column.$op_method(rhs);
                    }
                }
            }

            impl<T: $op_trait, const C: usize, const R: usize> $op_trait<Matrix<T, C, R>>
                for Matrix<T, C, R>
            {
                #[inline]
                fn $op_method(&mut self, rhs: Matrix<T, C, R>) {
                    for (lhs, rhs) in self.columns.iter_mut().zip(rhs.columns) {
                        lhs.$op_method(rhs);
                    }
                }
            }
        )*
    };
}

impl_componentwise_assign! {
    (AddAssign, add_assign),
    (SubAssign, sub_assign),
    (DivAssign, div_assign),
    (RemAssign, rem_assign),
    (BitAndAssign, bitand_assign),
    (BitOrAssign, bitor_assign),
    (BitXorAssign, bitxor_assign),
    (ShlAssign, shl_assign),
    (ShrAssign, shr_assign),
}

impl<T: Copy + Mul<Output = T>, const C: usize, const R: usize> Mul<T> for Matrix<T, C, R> {
    type Output = Matrix<T, C, R>;

    #[inline]
    fn mul(self, rhs: T) -> Matrix<T, C, R> {
        self.map(|elem| elem * rhs)
    }
}

impl<T: Copy + MulAssign, const C: usize, const R: usize> MulAssign<T> for Matrix<T, C, R> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for column in &mut self.columns {
            column.mul_assign(rhs);
        }
    }
}

/// Linear-map composition.
///
/// This is the one operator between two matrices that is *not*
/// componentwise; the componentwise product is
/// [`Matrix::elementwise_mul()`].
///
/// [`Matrix::elementwise_mul()`]: ./struct.Matrix.html#method.elementwise_mul
impl<T, const C1: usize, const R1: usize, const C2: usize> Mul<Matrix<T, C2, C1>>
    for Matrix<T, C1, R1>
where
    T: Copy + ClosedAdd + ClosedMul + Zero,
{
    type Output = Matrix<T, C2, R1>;

    #[inline]
    fn mul(self, rhs: Matrix<T, C2, C1>) -> Matrix<T, C2, R1> {
        Matrix::from_fn(|i, j| self.row(j).dot(rhs.column(i)))
    }
}

/// Composition in place; only defined where the right-hand side preserves
/// the shape of the receiver.
impl<T, const C: usize, const R: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, C, R>
where
    T: Copy + ClosedAdd + ClosedMul + Zero,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

impl<T, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R>
where
    T: Copy + ClosedAdd + ClosedMul + Zero,
{
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::from_fn(|j| self.row(j).dot(rhs))
    }
}

/// Row-vector times matrix.
impl<T, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R>
where
    T: Copy + ClosedAdd + ClosedMul + Zero,
{
    type Output = Vector<T, C>;

    #[inline]
    fn mul(self, rhs: Matrix<T, C, R>) -> Vector<T, C> {
        Vector::from_fn(|i| self.dot(rhs.column(i)))
    }
}

macro_rules! impl_scalar_lhs_arith {
    ( $($scalar:ty),* $(,)? ) => {
        $(
            impl<const C: usize, const R: usize> Add<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn add(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self + elem)
                }
            }

            impl<const C: usize, const R: usize> Sub<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn sub(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self - elem)
                }
            }

            impl<const C: usize, const R: usize> Mul<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn mul(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self * elem)
                }
            }

            impl<const C: usize, const R: usize> Div<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn div(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self / elem)
                }
            }

            impl<const C: usize, const R: usize> Rem<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn rem(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self % elem)
                }
            }
        )*
    };
}

impl_scalar_lhs_arith! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}

macro_rules! impl_scalar_lhs_bitwise {
    ( $($scalar:ty),* $(,)? ) => {
        $(
            impl<const C: usize, const R: usize> BitAnd<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn bitand(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self & elem)
                }
            }

            impl<const C: usize, const R: usize> BitOr<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn bitor(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self | elem)
                }
            }

            impl<const C: usize, const R: usize> BitXor<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn bitxor(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self ^ elem)
                }
            }

            impl<const C: usize, const R: usize> Shl<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn shl(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self << elem)
                }
            }

            impl<const C: usize, const R: usize> Shr<Matrix<$scalar, C, R>> for $scalar {
                type Output = Matrix<$scalar, C, R>;

                #[inline]
                fn shr(self, rhs: Matrix<$scalar, C, R>) -> Matrix<$scalar, C, R> {
                    rhs.map(|elem| self >> elem)
                }
            }
        )*
    };
}

impl_scalar_lhs_bitwise! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
}

impl<T, const C: usize, const R: usize> From<[[T; R]; C]> for Matrix<T, C, R> {
    #[inline]
    fn from(value: [[T; R]; C]) -> Self {
        Self::new(value)
    }
}

impl<T, const C: usize, const R: usize> From<Matrix<T, C, R>> for [[T; R]; C] {
    #[inline]
    fn from(value: Matrix<T, C, R>) -> Self {
        value.columns.map(Vector::to_array)
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const C: usize, const R: usize> bytemuck::Zeroable
    for Matrix<T, C, R>
{
    #[inline]
    fn zeroed() -> Self {
        Matrix::from_fn(|_, _| bytemuck::Zeroable::zeroed())
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const C: usize, const R: usize> approx::AbsDiffEq for Matrix<T, C, R>
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
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const C: usize, const R: usize> approx::RelativeEq for Matrix<T, C, R>
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
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const C: usize, const R: usize> approx::UlpsEq for Matrix<T, C, R>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
impl<T, const C: usize, const R: usize> serde::Serialize for Matrix<T, C, R>
where
    [Vector<T, R>; C]: serde::Serialize,
{
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.columns, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const C: usize, const R: usize> serde::Deserialize<'de> for Matrix<T, C, R>
where
    [Vector<T, R>; C]: serde::Deserialize<'de>,
{
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[Vector<T, R>; C] as serde::Deserialize<'de>>::deserialize(deserializer)
            .map(Matrix::from_columns)
    }
}

macro_rules! impl_mint_matrix {
    ( $( ($c:literal, $r:literal, $mint_type:ident, [ $($field:ident),+ ]) ),+ $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T> From<Matrix<T, $c, $r>> for mint::$mint_type<T> {
                #[inline]
                fn from(value: Matrix<T, $c, $r>) -> Self {
                    let [$($field),+] = value.columns;
                    mint::$mint_type {
                        $( $field: $field.into() ),+
                    }
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<mint::$mint_type<T>> for Matrix<T, $c, $r> {
                #[inline]
                fn from(value: mint::$mint_type<T>) -> Self {
                    Matrix::from_columns([ $( value.$field.into() ),+ ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Matrix<T, $c, $r> {
                type MintType = mint::$mint_type<T>;
            }
        )+
    };
}

impl_mint_matrix! {
    (2, 2, ColumnMatrix2, [x, y]),
    (3, 2, ColumnMatrix2x3, [x, y, z]),
    (4, 2, ColumnMatrix2x4, [x, y, z, w]),
    (2, 3, ColumnMatrix3x2, [x, y]),
    (3, 3, ColumnMatrix3, [x, y, z]),
    (4, 3, ColumnMatrix3x4, [x, y, z, w]),
    (2, 4, ColumnMatrix4x2, [x, y]),
    (3, 4, ColumnMatrix4x3, [x, y, z]),
    (4, 4, ColumnMatrix4, [x, y, z, w]),
}
