use std::cmp::Ordering;

use crate::error::{EnclosingError, Result};

pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Epsilon-based comparison of floating point values.
///
/// Two values are considered equal when they differ by at most `epsilon`,
/// so for any pair of finite values exactly one of [`Tolerance::lt`],
/// [`Tolerance::eq`] and [`Tolerance::gt`] holds.
#[derive(Clone, Copy, Debug)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(EnclosingError::InvalidTolerance(epsilon));
        }
        Ok(Tolerance { epsilon })
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }

    #[must_use]
    pub fn eq_zero(&self, a: f64) -> bool {
        self.eq(a, 0.0)
    }

    #[must_use]
    pub fn lt(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    #[must_use]
    pub fn lte(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    #[must_use]
    pub fn gt(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    #[must_use]
    pub fn gte(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    #[must_use]
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        if self.eq(a, b) {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            epsilon: DEFAULT_EPSILON,
        }
    }
}
