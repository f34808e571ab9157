// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::{Matrix, Matrix2, Matrix3, Matrix4},
    scalar::Zero,
    vector::Vector,
};

#[test]
fn test_matrix_access() {
    let mut matrix: Matrix<i32, 3, 2> = Matrix::new([
        [1, 2], //
        [3, 4],
        [5, 6],
    ]);

    assert_eq!(matrix.column(1).to_array(), [3, 4]);
    assert_eq!(matrix.row(0).to_array(), [1, 3, 5]);
    assert_eq!(matrix.row(1).to_array(), [2, 4, 6]);

    assert_eq!(matrix[2][0], 5);
    assert_eq!(matrix.get(2, 0), Some(&5));
    assert_eq!(matrix.get(3, 0), None);
    assert_eq!(matrix.get(0, 2), None);

    matrix[0][1] = 9;
    assert_eq!(matrix.column(0).to_array(), [1, 9]);

    matrix.set_column(2, Vector::new([7, 8]));
    assert_eq!(matrix.column(2).to_array(), [7, 8]);

    matrix.set_row(0, Vector::new([10, 20, 30]));
    assert_eq!(matrix.row(0).to_array(), [10, 20, 30]);
    assert_eq!(matrix.column(1).to_array(), [20, 4]);

    *matrix.get_mut(0, 0).unwrap() = -1;
    assert_eq!(matrix[0][0], -1);

    assert_eq!(matrix.as_slice().len(), 6);
}

#[test]
fn test_identity_columns() {
    let identity = Matrix3::<f32>::identity();

    assert_eq!(identity.column(0).to_array(), [1.0, 0.0, 0.0]);
    assert_eq!(identity.column(1).to_array(), [0.0, 1.0, 0.0]);
    assert_eq!(identity.column(2).to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(identity.row(1).to_array(), [0.0, 1.0, 0.0]);
}

#[test]
fn test_diagonal_non_square() {
    let matrix: Matrix<i32, 4, 2> = Matrix::diagonal(3);

    assert_eq!(matrix, Matrix::new([
        [3, 0],
        [0, 3],
        [0, 0],
        [0, 0],
    ]));

    let matrix: Matrix<i32, 2, 4> = Matrix::diagonal(3);

    assert_eq!(matrix, Matrix::new([
        [3, 0, 0, 0],
        [0, 3, 0, 0],
    ]));
}

#[test]
fn test_matrix_multiply() {
    // columns (1, 2) and (3, 4); in row notation [[1, 3], [2, 4]]
    let m1 = Matrix2::new([
        [1, 2],
        [3, 4],
    ]);

    let m2 = Matrix2::new([
        [5, 6],
        [7, 8],
    ]);

    assert_eq!(m1 * m2, Matrix2::new([
        [23, 34],
        [31, 46],
    ]));

    let identity = Matrix4::<f32>::identity();
    assert_eq!(identity * identity, Matrix4::identity());
}

#[test]
fn test_matrix_multiply_rectangular() {
    let lhs: Matrix<i32, 2, 3> = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    let rhs: Matrix<i32, 4, 2> = Matrix::new([
        [1, 0],
        [0, 1],
        [1, 1],
        [2, 3],
    ]);

    let product: Matrix<i32, 4, 3> = lhs * rhs;

    assert_eq!(product, Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [5, 7, 9],
        [14, 19, 24],
    ]));
}

#[test]
fn test_identity_is_multiplicative_identity() {
    let m = Matrix3::new([
        [2, 7, 1],
        [8, 2, 8],
        [1, 8, 2],
    ]);

    assert_eq!(Matrix3::<i32>::identity() * m, m);
    assert_eq!(m * Matrix3::<i32>::identity(), m);

    let rect: Matrix<i32, 3, 2> = Matrix::new([
        [1, 2],
        [3, 4],
        [5, 6],
    ]);

    assert_eq!(Matrix2::<i32>::identity() * rect, rect);
    assert_eq!(rect * Matrix3::<i32>::identity(), rect);
}

#[test]
fn test_matrix_vector_multiply() {
    let m = Matrix2::new([
        [1, 2],
        [3, 4],
    ]);

    assert_eq!(m * Vector::new([5, 6]), Vector::new([23, 34]));
    assert_eq!(Vector::new([5, 6]) * m, Vector::new([17, 39]));

    // multiplying by a vector matches multiplying by the equivalent
    // single-column matrix
    let column: Matrix<i32, 1, 2> = Matrix::new([[5, 6]]);
    let product = m * column;
    assert_eq!(product.column(0), m * Vector::new([5, 6]));
}

#[test]
fn test_compound_multiply_requires_square_rhs() {
    let mut m: Matrix<i32, 2, 3> = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    let by = Matrix2::new([
        [1, 1],
        [0, 1],
    ]);

    m *= by;

    assert_eq!(m, Matrix::new([
        [5, 7, 9],
        [4, 5, 6],
    ]));
}

#[test]
fn test_broadcast_arithmetic() {
    let m = Matrix2::new([
        [1, 2],
        [3, 4],
    ]);

    assert_eq!(m + 1, Matrix2::new([[2, 3], [4, 5]]));
    assert_eq!(1 + m, Matrix2::new([[2, 3], [4, 5]]));
    assert_eq!(m - 1, Matrix2::new([[0, 1], [2, 3]]));
    assert_eq!(10 - m, Matrix2::new([[9, 8], [7, 6]]));
    assert_eq!(m * 2, Matrix2::new([[2, 4], [6, 8]]));
    assert_eq!(2 * m, Matrix2::new([[2, 4], [6, 8]]));
    assert_eq!(24 / m, Matrix2::new([[24, 12], [8, 6]]));
    assert_eq!(m % 2, Matrix2::new([[1, 0], [1, 0]]));

    let other = Matrix2::new([
        [10, 20],
        [30, 40],
    ]);

    assert_eq!(m + other, Matrix2::new([[11, 22], [33, 44]]));
    assert_eq!(other - m, Matrix2::new([[9, 18], [27, 36]]));
    assert_eq!(other / m, Matrix2::new([[10, 10], [10, 10]]));

    let mut m = m;
    m += 1;
    assert_eq!(m, Matrix2::new([[2, 3], [4, 5]]));
    m -= 1;
    m *= 2;
    m /= Matrix2::new([[2, 2], [2, 2]]);
    assert_eq!(m, Matrix2::new([[1, 2], [3, 4]]));
}

#[test]
fn test_bitwise_ops() {
    let m = Matrix2::new([
        [0b0011, 0b0101],
        [0b1100, 0b1010],
    ]);

    assert_eq!(m & 0b0110, Matrix2::new([[0b0010, 0b0100], [0b0100, 0b0010]]));
    assert_eq!(m | 0b0001, Matrix2::new([[0b0011, 0b0101], [0b1101, 0b1011]]));
    assert_eq!(m ^ m, Matrix2::zero());
    assert_eq!(m << 1, Matrix2::new([[0b0110, 0b1010], [0b11000, 0b10100]]));
    assert_eq!(m >> 1, Matrix2::new([[0b0001, 0b0010], [0b0110, 0b0101]]));
    assert_eq!(0b1111 & m, m);

    let neg = !m;
    assert_eq!(!neg, m);
}

#[test]
fn test_additive_properties() {
    let m = Matrix3::new([
        [1, -2, 3],
        [-4, 5, -6],
        [7, -8, 9],
    ]);

    assert_eq!(m + 0, m);
    assert_eq!(m * 1, m);
    assert_eq!(m - m, Matrix3::zero());
    assert_eq!(-m + m, Matrix3::ZERO);
}

#[test]
fn test_elementwise_mul_is_not_composition() {
    let m1 = Matrix2::new([
        [1, 2],
        [3, 4],
    ]);

    let m2 = Matrix2::new([
        [5, 6],
        [7, 8],
    ]);

    assert_eq!(m1.elementwise_mul(m2), Matrix2::new([
        [5, 12],
        [21, 32],
    ]));

    assert_ne!(m1.elementwise_mul(m2), m1 * m2);

    assert_eq!(m2.elementwise_div(m1), Matrix2::new([
        [5, 3],
        [2, 2],
    ]));
}

#[test]
fn test_transpose() {
    let m: Matrix<i32, 2, 3> = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    let transposed: Matrix<i32, 3, 2> = m.transpose();

    assert_eq!(transposed, Matrix::new([
        [1, 4],
        [2, 5],
        [3, 6],
    ]));

    assert_eq!(transposed.transpose(), m);

    let square = Matrix3::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    assert_eq!(square.transpose().transpose(), square);
    assert_eq!(square.transpose().row(0), square.column(0));
}

#[test]
fn test_shape_extension() {
    let m2 = Matrix2::new([
        [1.0, 2.0],
        [3.0, 4.0],
    ]);

    // growing places identity basis columns and a zero-filled border
    assert_eq!(Matrix3::from_matrix(m2), Matrix3::new([
        [1.0, 2.0, 0.0],
        [3.0, 4.0, 0.0],
        [0.0, 0.0, 1.0],
    ]));

    assert_eq!(Matrix4::from_matrix(m2), Matrix4::new([
        [1.0, 2.0, 0.0, 0.0],
        [3.0, 4.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]));

    let m3 = Matrix3::new([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);

    assert_eq!(Matrix4::from_matrix(m3), Matrix4::new([
        [1.0, 2.0, 3.0, 0.0],
        [4.0, 5.0, 6.0, 0.0],
        [7.0, 8.0, 9.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]));

    // a rectangular source extends per column
    let rect: Matrix<f64, 2, 3> = Matrix::new([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
    ]);

    assert_eq!(Matrix4::from_matrix(rect), Matrix4::new([
        [1.0, 2.0, 3.0, 0.0],
        [4.0, 5.0, 6.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]));
}

#[test]
fn test_shape_round_trip() {
    let m3 = Matrix3::new([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);

    let m4: Matrix4<f64> = m3.reshape();
    let back: Matrix3<f64> = m4.reshape();

    assert_eq!(back, m3);

    let m2: Matrix2<f64> = m4.reshape();
    assert_eq!(m2, Matrix2::new([
        [1.0, 2.0],
        [4.0, 5.0],
    ]));
}

#[test]
fn test_widen_and_cast() {
    let m = Matrix2::new([
        [1i8, -2],
        [3, -4],
    ]);

    let widened: Matrix2<i32> = m.widen();
    assert_eq!(widened, Matrix2::new([[1, -2], [3, -4]]));

    let narrowed: Matrix2<i8> = widened.cast();
    assert_eq!(narrowed, m);

    let floats: Matrix2<f64> = Matrix2::new([
        [1.75, -2.5],
        [3.25, -4.0],
    ]);

    let truncating: Matrix2<i32> = floats.cast();
    assert_eq!(truncating, Matrix2::new([[1, -2], [3, -4]]));
}

#[test]
fn test_elementwise_math() {
    let m = Matrix2::new([
        [4.0f64, 9.0],
        [16.0, 25.0],
    ]);

    assert_eq!(m.sqrt(), Matrix2::new([[2.0, 3.0], [4.0, 5.0]]));

    let pow2 = Matrix2::new([
        [0.5f64, 2.0],
        [4.0, 8.0],
    ]);
    assert_eq!(pow2.recip(), Matrix2::new([[2.0, 0.5], [0.25, 0.125]]));
    assert_eq!(pow2.recip().recip(), pow2);
    assert_eq!(pow2.rsqrt(), pow2.sqrt().recip());

    let squared = m.pow(2.0);
    let expected = m.elementwise_mul(m);
    for (lhs, rhs) in squared.as_slice().iter().zip(expected.as_slice()) {
        assert!((lhs - rhs).abs() < 1e-9);
    }

    // a zero exponent is exact regardless of the base
    let ones = m.elementwise_pow(Matrix2::zero());
    assert_eq!(ones, Matrix2::splat(1.0));

    let (sin, cos) = Matrix2::<f64>::zero().sin_cos();
    assert_eq!(sin, Matrix2::zero());
    assert_eq!(cos, Matrix2::splat(1.0));
    assert_eq!(Matrix2::<f64>::zero().sin(), sin);
    assert_eq!(Matrix2::<f64>::zero().cos(), cos);
}

#[test]
fn test_min_max_abs_match_scalar() {
    let m1 = Matrix2::new([
        [1.0f32, -5.0],
        [3.0, -0.5],
    ]);

    let m2 = Matrix2::new([
        [2.0f32, -7.0],
        [-4.0, 0.25],
    ]);

    let min = m1.min(m2);
    let max = m1.max(m2);
    let abs = m2.abs();

    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(min[i][j], m1[i][j].min(m2[i][j]));
            assert_eq!(max[i][j], m1[i][j].max(m2[i][j]));
            assert_eq!(abs[i][j], m2[i][j].abs());
        }
    }
}

#[test]
fn test_equality_is_exact() {
    let m = Matrix2::new([
        [1.0, 2.0],
        [3.0, 4.0],
    ]);

    let mut nudged = m;
    nudged[1][1] += 1.0e-9;

    assert_eq!(m, m);
    assert_ne!(m, nudged);
}

#[test]
fn test_layout_is_column_major() {
    let m: Matrix<i32, 3, 2> = Matrix::new([
        [1, 2],
        [3, 4],
        [5, 6],
    ]);

    assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);

    let nested: [[i32; 2]; 3] = m.into();
    assert_eq!(nested, [[1, 2], [3, 4], [5, 6]]);

    unsafe {
        assert_eq!(*m.get_unchecked(1, 0), 3);
        assert_eq!(*m.get_unchecked(2, 1), 6);
    }
}

#[test]
fn test_row_vector_against_transpose() {
    let m: Matrix<i32, 3, 2> = Matrix::new([
        [1, 2],
        [3, 4],
        [5, 6],
    ]);

    let v = Vector::new([7, 8]);

    // v * m treats v as a row vector, which is (mᵀ v)ᵀ
    assert_eq!(v * m, m.transpose() * v);
}

#[test]
fn test_splat_and_default() {
    let m: Matrix<i32, 4, 3> = Matrix::splat(21);
    assert!(m.as_slice().iter().all(|elem| *elem == 21));

    let zero: Matrix<f32, 3, 3> = Default::default();
    assert_eq!(zero, Matrix3::zero());
}

#[cfg(feature = "approx")]
#[test]
fn test_approx_comparison() {
    let m = Matrix2::new([
        [1.0f64, 2.0],
        [3.0, 4.0],
    ]);

    let scaled = (m / 3.0) * 3.0;

    approx::assert_relative_eq!(scaled, m, epsilon = 1e-12);
    approx::assert_abs_diff_ne!(m, m + 1.0);
}
