use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

// hand-rolled rather than num-complex so each kernel controls its exact
// floating-point operation order
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };
    pub const ONE: Self = Self { real: 1.0, imag: 0.0 };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Point on the unit circle at `angle` radians.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        Self {
            real: angle.cos(),
            imag: angle.sin(),
        }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn distance(&self, other: Self) -> f64 {
        (*self - other).magnitude()
    }

    #[must_use]
    pub fn conj(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            real: factor * self.real,
            imag: factor * self.imag,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Div for Complex {
    type Output = Self;

    /// Division by zero yields non-finite components; callers guard the
    /// denominator themselves.
    fn div(self, other: Self) -> Self {
        let denom = other.magnitude_squared();

        Self {
            real: (self.real * other.real + self.imag * other.imag) / denom,
            imag: (self.imag * other.real - self.real * other.imag) / denom,
        }
    }
}
