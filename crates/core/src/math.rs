//! Math primitives - vectors, 4x4 matrices, and angle conversion.
//!
//! Infallible arithmetic is exposed through the standard operator traits.
//! Anything that divides goes through a named fallible method instead
//! ([`Vector3::try_div`], [`Matrix4x4::mul_vec`], ...), because a divisor
//! within machine epsilon of zero is an error here, never a NaN.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Error, Result};

/// Pi, truncated to five decimal places.
pub const PI: f32 = 3.14159;

/// Tolerance used by the `approx_eq` comparisons.
pub const APPROX_TOLERANCE: f32 = f32::EPSILON * 100.0;

/// Convert an angle in degrees to radians.
pub fn deg_to_rad(angle: f32) -> f32 {
    angle / 180.0 * PI
}

/// 2D vector, used by the rasterizer's screen-space edge tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns the unit-length vector pointing the same way.
    ///
    /// The zero vector has no direction and is returned unchanged.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return *self;
        }
        Self::new(self.x / length, self.y / length)
    }

    pub fn dot(&self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product, returned as a [`Vector3`] carrying the scalar
    /// result in its z component.
    pub fn cross(&self, other: Vector2) -> Vector3 {
        Vector3::new(0.0, 0.0, self.x * other.y - self.y * other.x)
    }

    /// Component-wise division by a scalar.
    ///
    /// Fails with [`Error::DivisionByZero`] when the divisor is within
    /// machine epsilon of zero.
    pub fn try_div(&self, val: f32) -> Result<Self> {
        if val.abs() < f32::EPSILON {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(self.x / val, self.y / val))
    }

    /// Approximate equality within [`APPROX_TOLERANCE`].
    pub fn approx_eq(&self, other: Vector2) -> bool {
        (self.x - other.x).abs() < APPROX_TOLERANCE && (self.y - other.y).abs() < APPROX_TOLERANCE
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the unit-length vector pointing the same way.
    ///
    /// The zero vector has no direction and is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastty_core::math::Vector3;
    ///
    /// let v = Vector3::new(3.0, 0.0, 4.0).normalized();
    /// assert!((v.length() - 1.0).abs() < 1e-6);
    ///
    /// let zero = Vector3::default();
    /// assert_eq!(zero.normalized(), zero);
    /// ```
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return *self;
        }
        Self::new(self.x / length, self.y / length, self.z / length)
    }

    pub fn dot(&self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Component-wise division by a scalar.
    ///
    /// Fails with [`Error::DivisionByZero`] when the divisor is within
    /// machine epsilon of zero.
    pub fn try_div(&self, val: f32) -> Result<Self> {
        if val.abs() < f32::EPSILON {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(self.x / val, self.y / val, self.z / val))
    }

    /// Row-vector transform: `self * mat`, treating `self` as a row vector
    /// with an implicit fourth component of 1.
    ///
    /// The w component is taken from the matrix's fourth column and the
    /// result is divided by it. The view and projection matrices are built
    /// for this multiplication order.
    ///
    /// Fails with [`Error::DegenerateW`] when |w| is within machine epsilon
    /// of zero.
    pub fn mul_mat(&self, mat: &Matrix4x4) -> Result<Vector3> {
        let m = &mat.m;

        let x = self.x * m[0][0] + self.y * m[1][0] + self.z * m[2][0] + m[3][0];
        let y = self.x * m[0][1] + self.y * m[1][1] + self.z * m[2][1] + m[3][1];
        let z = self.x * m[0][2] + self.y * m[1][2] + self.z * m[2][2] + m[3][2];
        let w = self.x * m[0][3] + self.y * m[1][3] + self.z * m[2][3] + m[3][3];

        if w.abs() < f32::EPSILON {
            return Err(Error::DegenerateW);
        }

        Ok(Vector3::new(x / w, y / w, z / w))
    }

    /// Approximate equality within [`APPROX_TOLERANCE`].
    pub fn approx_eq(&self, other: Vector3) -> bool {
        (self.x - other.x).abs() < APPROX_TOLERANCE
            && (self.y - other.y).abs() < APPROX_TOLERANCE
            && (self.z - other.z).abs() < APPROX_TOLERANCE
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

/// 4x4 matrix in row-major storage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Matrix4x4 {
    /// The zero matrix.
    pub const fn new() -> Self {
        Self { m: [[0.0; 4]; 4] }
    }

    pub const fn identity() -> Self {
        let mut m = [[0.0; 4]; 4];
        m[0][0] = 1.0;
        m[1][1] = 1.0;
        m[2][2] = 1.0;
        m[3][3] = 1.0;
        Self { m }
    }

    /// Column-vector transform: `self * vec`, treating `vec` as a column
    /// vector with an implicit fourth component of 1.
    ///
    /// The w component is taken from the matrix's fourth row and the result
    /// is divided by it. Entity matrices (model, rotation) are built for
    /// this multiplication order.
    ///
    /// Fails with [`Error::DegenerateW`] when |w| is within machine epsilon
    /// of zero.
    pub fn mul_vec(&self, vec: Vector3) -> Result<Vector3> {
        let m = &self.m;

        let x = m[0][0] * vec.x + m[0][1] * vec.y + m[0][2] * vec.z + m[0][3];
        let y = m[1][0] * vec.x + m[1][1] * vec.y + m[1][2] * vec.z + m[1][3];
        let z = m[2][0] * vec.x + m[2][1] * vec.y + m[2][2] * vec.z + m[2][3];
        let w = m[3][0] * vec.x + m[3][1] * vec.y + m[3][2] * vec.z + m[3][3];

        if w.abs() < f32::EPSILON {
            return Err(Error::DegenerateW);
        }

        Ok(Vector3::new(x / w, y / w, z / w))
    }

    /// Component-wise division by a scalar.
    ///
    /// Fails with [`Error::DivisionByZero`] when the divisor is within
    /// machine epsilon of zero.
    pub fn try_div(&self, val: f32) -> Result<Self> {
        if val.abs() < f32::EPSILON {
            return Err(Error::DivisionByZero);
        }

        let mut result = Matrix4x4::new();
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] / val;
            }
        }
        Ok(result)
    }

    /// Approximate equality check.
    ///
    /// Each element of row `i` in `self` is compared against `other`'s
    /// diagonal element `other.m[i][i]`, so two matrices only compare equal
    /// when every row of `self` is constant and matches that diagonal.
    /// Notably `identity().approx_eq(&identity())` is false. Element-wise
    /// comparisons should subtract and inspect the difference instead.
    pub fn approx_eq(&self, other: &Matrix4x4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if (self.m[i][j] - other.m[i][i]).abs() >= APPROX_TOLERANCE {
                    return false;
                }
            }
        }
        true
    }
}

impl Add for Matrix4x4 {
    type Output = Matrix4x4;

    fn add(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut result = Matrix4x4::new();
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] + rhs.m[i][j];
            }
        }
        result
    }
}

impl Sub for Matrix4x4 {
    type Output = Matrix4x4;

    fn sub(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut result = Matrix4x4::new();
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] - rhs.m[i][j];
            }
        }
        result
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut result = Matrix4x4::new();
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * rhs.m[k][j];
                }
            }
        }
        result
    }
}

impl Mul<f32> for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: f32) -> Matrix4x4 {
        let mut result = Matrix4x4::new();
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] * rhs;
            }
        }
        result
    }
}

impl Neg for Matrix4x4 {
    type Output = Matrix4x4;

    fn neg(self) -> Matrix4x4 {
        let mut result = Matrix4x4::new();
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = -self.m[i][j];
            }
        }
        result
    }
}

impl AddAssign for Matrix4x4 {
    fn add_assign(&mut self, rhs: Matrix4x4) {
        for i in 0..4 {
            for j in 0..4 {
                self.m[i][j] += rhs.m[i][j];
            }
        }
    }
}

impl SubAssign for Matrix4x4 {
    fn sub_assign(&mut self, rhs: Matrix4x4) {
        for i in 0..4 {
            for j in 0..4 {
                self.m[i][j] -= rhs.m[i][j];
            }
        }
    }
}

impl MulAssign<f32> for Matrix4x4 {
    fn mul_assign(&mut self, rhs: f32) {
        for i in 0..4 {
            for j in 0..4 {
                self.m[i][j] *= rhs;
            }
        }
    }
}
