//! Strongly-typed numeric primitives for clockback (zero-cost newtypes).
//!
//! Coordinates are `glam::DVec2` in canvas pixels, y growing downward.
//!
//! All angles use one convention, [`Dial`]: degrees measured from 12 o'clock,
//! positive clockwise on screen. A dial angle θ at radius r around center c
//! lands at `(c.x + r·sin θ, c.y − r·cos θ)`.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use glam::{DVec2, dvec2};
use thiserror::Error;

/// Why a raw value was refused as a length
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NumericError {
    #[error("not a number")]
    NaN,
    #[error("not finite")]
    Infinite,
    #[error("must be greater than zero, got zero")]
    Zero,
    #[error("must be greater than zero, got a negative value")]
    Negative,
}

/// Length in canvas pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    /// Create a strictly positive length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Px, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Px(val))
        }
    }

    /// Whole-pixel stroke width: `fraction` of `self`, truncated, never below `floor`
    #[inline]
    pub fn stroke(self, fraction: f64, floor: f64) -> Px {
        Px((self.0 * fraction).trunc().max(floor))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px { Px(self.0 - rhs.0) }
}
impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px { Px(self.0 * rhs) }
}
impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px { Px(self.0 / rhs) }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Angle in degrees on the clock dial (0 = 12 o'clock, clockwise)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Dial(pub f64);

impl Dial {
    pub const TWELVE: Dial = Dial(0.0);

    /// Position of the hand for a given hour (12 and 0 coincide)
    #[inline]
    pub fn hour(h: u32) -> Dial {
        Dial(f64::from(h % 12) * 30.0)
    }

    /// Screen-space unit vector pointing along this dial angle
    #[inline]
    pub fn unit(self) -> DVec2 {
        let rad = self.0.to_radians();
        dvec2(rad.sin(), -rad.cos())
    }

    /// Point at `radius` from `center` along this angle
    #[inline]
    pub fn point(self, center: DVec2, radius: Px) -> DVec2 {
        center + self.unit() * radius.0
    }

    /// Linear interpolation between two dial angles, `t` in `[0, 1]`
    #[inline]
    pub fn lerp(self, to: Dial, t: f64) -> Dial {
        Dial(self.0 + (to.0 - self.0) * t)
    }
}

impl Add<f64> for Dial {
    type Output = Dial;
    fn add(self, degrees: f64) -> Dial { Dial(self.0 + degrees) }
}

/// Straight (non-premultiplied) RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Axis-aligned box; ellipses are described by the box they are inscribed in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Bounds { min, max }
    }

    /// Box of the circle of `radius` around `center`
    pub fn around(center: DVec2, radius: Px) -> Self {
        let r = DVec2::splat(radius.0);
        Bounds { min: center - r, max: center + r }
    }

    /// The same box moved by `delta`
    pub fn translate(self, delta: DVec2) -> Self {
        Bounds { min: self.min + delta, max: self.max + delta }
    }

    /// Check if the box encloses no area
    pub fn is_empty(&self) -> bool {
        !(self.min.x < self.max.x && self.min.y < self.max.y)
    }
}
