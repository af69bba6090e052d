use std::fmt;

use crate::{tolerance::Tolerance, vector::euclidean};

/// A ball enclosing a set of points, together with the support points
/// lying on its boundary.
///
/// The support is borrowed from the caller's input, so support identity
/// can be checked with [`std::ptr::eq`]. A negative radius marks the
/// empty ball returned when no points were supplied.
#[derive(Clone, Debug)]
pub struct EnclosingBall<'a, const D: usize> {
    center: [f64; D],
    radius: f64,
    support: Vec<&'a [f64; D]>,
}

impl<'a, const D: usize> EnclosingBall<'a, D> {
    #[must_use]
    pub fn new(center: [f64; D], radius: f64, support: Vec<&'a [f64; D]>) -> Self {
        EnclosingBall {
            center,
            radius,
            support,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new([0.0; D], -1.0, Vec::new())
    }

    #[must_use]
    pub fn center(&self) -> &[f64; D] {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn support(&self) -> &[&'a [f64; D]] {
        &self.support
    }

    #[must_use]
    pub fn support_size(&self) -> usize {
        self.support.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radius < 0.0
    }

    /// Check if the point lies within `radius + margin` of the center.
    /// A negative margin tests against a shrunk ball.
    #[must_use]
    pub fn contains(&self, point: &[f64; D], margin: f64) -> bool {
        !self.is_empty() && euclidean(point, &self.center) <= self.radius + margin
    }

    #[must_use]
    pub fn contains_exactly(&self, point: &[f64; D]) -> bool {
        self.contains(point, 0.0)
    }

    #[must_use]
    pub fn contains_within(&self, point: &[f64; D], tolerance: &Tolerance) -> bool {
        !self.is_empty() && tolerance.lte(euclidean(point, &self.center), self.radius)
    }
}

impl<const D: usize> Default for EnclosingBall<'_, D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const D: usize> fmt::Display for EnclosingBall<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center={:?} radius={} support={}",
            self.center,
            self.radius,
            self.support.len()
        )
    }
}
