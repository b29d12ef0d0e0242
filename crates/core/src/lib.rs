//! Core units, constants, and shared primitives for the satellite trajectory workspace.

/// Physical constants expressed in SI units.
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.67430e-11;
    /// Mass of the Earth (kg).
    pub const M_EARTH: f64 = 5.972e24;
    /// Mean radius of the Earth (m).
    pub const R_EARTH: f64 = 6.371e6;
    /// Earth's gravitational parameter `G * M_EARTH` (m³/s²).
    pub const MU_EARTH: f64 = G * M_EARTH;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    /// Convert seconds to minutes.
    #[inline]
    pub fn seconds_to_minutes(seconds: f64) -> f64 {
        seconds / 60.0
    }

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / 3_600.0
    }
}

/// Three-component vector used for positions, velocities and accelerations.
pub mod vector {
    use std::fmt;
    use std::ops::{Add, Mul, Neg, Sub};

    use serde::Serialize;

    /// Cartesian 3-vector in SI units (m, m/s or m/s² depending on context).
    ///
    /// Values are immutable; every operation returns a new vector.
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Vector3 {
        #[inline]
        pub const fn new(x: f64, y: f64, z: f64) -> Self {
            Self { x, y, z }
        }

        #[inline]
        pub const fn zero() -> Self {
            Self::new(0.0, 0.0, 0.0)
        }

        /// Component-wise sum.
        #[inline]
        pub fn add(&self, other: &Self) -> Self {
            Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
        }

        /// Subtract `other` from `self`.
        #[inline]
        pub fn sub(&self, other: &Self) -> Self {
            Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
        }

        /// Multiply every component by `s`.
        #[inline]
        pub fn scale(&self, s: f64) -> Self {
            Self::new(self.x * s, self.y * s, self.z * s)
        }

        #[inline]
        pub fn dot(&self, other: &Self) -> f64 {
            self.x * other.x + self.y * other.y + self.z * other.z
        }

        /// Euclidean norm, e.g. `Vector3::new(3.0, 4.0, 0.0).magnitude() == 5.0`.
        #[inline]
        pub fn magnitude(&self) -> f64 {
            self.dot(self).sqrt()
        }

        /// True when every component is finite.
        #[inline]
        pub fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
        }
    }

    impl From<[f64; 3]> for Vector3 {
        fn from(v: [f64; 3]) -> Self {
            Self::new(v[0], v[1], v[2])
        }
    }

    impl From<Vector3> for [f64; 3] {
        fn from(v: Vector3) -> Self {
            [v.x, v.y, v.z]
        }
    }

    impl Add for Vector3 {
        type Output = Vector3;

        #[inline]
        fn add(self, rhs: Vector3) -> Vector3 {
            Vector3::add(&self, &rhs)
        }
    }

    impl Sub for Vector3 {
        type Output = Vector3;

        #[inline]
        fn sub(self, rhs: Vector3) -> Vector3 {
            Vector3::sub(&self, &rhs)
        }
    }

    impl Neg for Vector3 {
        type Output = Vector3;

        #[inline]
        fn neg(self) -> Vector3 {
            self.scale(-1.0)
        }
    }

    impl Mul<f64> for Vector3 {
        type Output = Vector3;

        #[inline]
        fn mul(self, rhs: f64) -> Vector3 {
            self.scale(rhs)
        }
    }

    /// Space-separated `x y z`, the layout used by trajectory files.
    impl fmt::Display for Vector3 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} {} {}", self.x, self.y, self.z)
        }
    }
}
