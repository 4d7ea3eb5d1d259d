//! 3x3 matrices for the linear RGB ↔ XYZ step

use std::ops::Mul;

type Vec3 = [f64; 3];

#[inline]
fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Row-major 3x3 matrix: `rows[i]` maps a vector to output component `i`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub rows: [Vec3; 3],
}

impl Matrix3x3 {
    pub const IDENTITY: Self = Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[inline]
    pub const fn new(rows: [Vec3; 3]) -> Self {
        Self { rows }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn transpose(&self) -> Self {
        let [r0, r1, r2] = self.rows;
        Self::new([
            [r0[0], r1[0], r2[0]],
            [r0[1], r1[1], r2[1]],
            [r0[2], r1[2], r2[2]],
        ])
    }

    /// M × v
    #[inline]
    pub fn multiply_vec(&self, v: Vec3) -> Vec3 {
        self.rows.map(|row| dot(row, v))
    }

    /// self × other
    pub fn multiply(&self, other: &Self) -> Self {
        let columns = other.transpose().rows;
        Self::new(self.rows.map(|row| columns.map(|col| dot(row, col))))
    }

    /// Triple product of the rows
    #[inline]
    pub fn determinant(&self) -> f64 {
        let [r0, r1, r2] = self.rows;
        dot(r0, cross(r1, r2))
    }

    /// Inverse, or `None` when the matrix is singular
    ///
    /// The columns of the inverse are the pairwise cross products of the
    /// rows, scaled by 1/det.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-14 {
            return None;
        }

        let [r0, r1, r2] = self.rows;
        let adjugate_t = Self::new([cross(r1, r2), cross(r2, r0), cross(r0, r1)]);
        let inv_det = det.recip();
        Some(Self::new(adjugate_t.transpose().rows.map(|row| row.map(|x| x * inv_det))))
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Matrix3x3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.multiply_vec(rhs)
    }
}
