//! # Unit Types
//!
//! Type-safe wrappers for the engineering units used in steel design.
//! These are lightweight f64 newtypes with clean JSON serialization.
//!
//! ## US Customary Units
//!
//! US customary units match the AISC Specification and Manual:
//! - Length: feet (ft), inches (in)
//! - Force: kips (k = 1000 lb)
//! - Stress: kips per square inch (ksi)
//! - Area: square inches (in²)
//!
//! ## Example
//!
//! ```rust
//! use steel_core::units::{Feet, Inches};
//!
//! let unbraced = Feet(10.0);
//! let unbraced_in: Inches = unbraced.into();
//! assert_eq!(unbraced_in.0, 120.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

/// Force in kips (1 kip = 1000 pounds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Kips);
impl_arithmetic!(Ksi);
impl_arithmetic!(SqIn);
