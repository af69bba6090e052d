use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::{
    ball::EnclosingBall,
    error::{EnclosingError, Result},
    generator::SupportBallGenerator,
    tolerance::Tolerance,
    vector::euclidean,
};

/// Computes a ball enclosing a set of points.
pub trait Encloser<const D: usize> {
    /// Find the smallest ball enclosing all the points.
    ///
    /// An empty input gives the empty ball (negative radius).
    ///
    /// # Errors
    /// Returns [`EnclosingError::AmbiguousSupport`] if a degenerate support
    /// could not be resolved, or [`EnclosingError::ShrinkingBall`] if the
    /// computation became numerically inconsistent.
    fn enclose<'a, I>(&self, points: I) -> Result<EnclosingBall<'a, D>>
    where
        I: IntoIterator<Item = &'a [f64; D]>;
}

/// Minimum enclosing ball using Welzl's move-to-front algorithm, with
/// Gärtner's pivoting on the farthest point.
///
/// The ball over a support set is delegated to the generator, so the same
/// encloser works for disks, spheres or any dimension the generator handles.
#[derive(Clone, Copy, Debug, Default)]
pub struct WelzlEncloser<G> {
    tolerance: Tolerance,
    generator: G,
}

// A pending move-to-front sub-problem: find the ball enclosing
// `extreme[0..limit)` with the current support forced on its boundary.
struct Frame<'a, const D: usize> {
    limit: usize,
    next: usize,
    ball: EnclosingBall<'a, D>,
}

impl<'a, const D: usize> Frame<'a, D> {
    fn new(limit: usize, ball: EnclosingBall<'a, D>) -> Self {
        Frame {
            limit,
            next: 0,
            ball,
        }
    }

    // Advance the scan to the next point lying outside the current ball.
    fn next_outside(
        &mut self,
        extreme: &[&'a [f64; D]],
        tolerance: &Tolerance,
    ) -> Option<usize> {
        while self.next < self.limit {
            let i = self.next;
            self.next += 1;
            if !self.ball.contains_within(extreme[i], tolerance) {
                return Some(i);
            }
        }
        None
    }
}

impl<G> WelzlEncloser<G> {
    #[must_use]
    pub fn new(tolerance: Tolerance, generator: G) -> Self {
        WelzlEncloser {
            tolerance,
            generator,
        }
    }

    #[must_use]
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Select the point farthest from the ball center.
    #[must_use]
    pub fn select_farthest<'a, const D: usize>(
        points: &[&'a [f64; D]],
        ball: &EnclosingBall<'_, D>,
    ) -> Option<&'a [f64; D]> {
        points
            .iter()
            .copied()
            .max_by_key(|point| OrderedFloat(euclidean(*point, ball.center())))
    }

    fn pivoting_ball<'a, const D: usize>(
        &self,
        points: &[&'a [f64; D]],
    ) -> Result<EnclosingBall<'a, D>>
    where
        G: SupportBallGenerator<D>,
    {
        // Start with only the first point as a candidate support
        let mut extreme = Vec::with_capacity(D + 2);
        extreme.push(points[0]);
        let mut support = Vec::with_capacity(D + 1);
        let mut ball = self.move_to_front_ball(&mut extreme, 1, &mut support)?;

        loop {
            let farthest = match Self::select_farthest(points, &ball) {
                Some(point) => point,
                None => return Ok(ball),
            };
            if ball.contains_within(farthest, &self.tolerance) {
                return Ok(ball);
            }

            // Search again, restricted to the extreme points with the farthest point forced
            support.clear();
            support.push(farthest);
            let previous = ball.radius();
            let limit = extreme.len();
            ball = self.move_to_front_ball(&mut extreme, limit, &mut support)?;
            if self.tolerance.lt(ball.radius(), previous) {
                warn!(previous, current = ball.radius(), "enclosing ball shrank");
                return Err(EnclosingError::ShrinkingBall {
                    previous,
                    current: ball.radius(),
                });
            }

            // Keep the farthest point in front and prune the least interesting ones
            extreme.insert(0, farthest);
            extreme.truncate(ball.support_size());
            trace!(
                support = ball.support_size(),
                radius = ball.radius(),
                "pivoted on farthest point"
            );
        }
    }

    // Ball enclosing `extreme[0..limit)` with `support` on its boundary.
    //
    // Every point found outside the current ball is pushed on the support and
    // the prefix before it is solved again as a sub-problem. Sub-problems live
    // on an explicit stack, so the call depth stays constant. The support is
    // restored to its original content on return.
    fn move_to_front_ball<'a, const D: usize>(
        &self,
        extreme: &mut [&'a [f64; D]],
        limit: usize,
        support: &mut Vec<&'a [f64; D]>,
    ) -> Result<EnclosingBall<'a, D>>
    where
        G: SupportBallGenerator<D>,
    {
        let mut stack: Vec<Frame<'a, D>> = Vec::with_capacity(D + 1);
        let mut frame = Frame::new(limit, self.support_ball(support)?);

        loop {
            // A full support already determines the ball
            if support.len() <= D {
                if let Some(i) = frame.next_outside(extreme, &self.tolerance) {
                    support.push(extreme[i]);
                    let ball = self.support_ball(support)?;
                    stack.push(std::mem::replace(&mut frame, Frame::new(i, ball)));
                    continue;
                }
            }

            let Frame { limit, ball, .. } = frame;
            match stack.pop() {
                None => return Ok(ball),
                Some(mut parent) => {
                    support.pop();
                    // Move the point that enlarged the ball to the front
                    extreme[..=limit].rotate_right(1);
                    parent.ball = ball;
                    frame = parent;
                }
            }
        }
    }

    // Ball on the forced support, dropping a redundant support point when
    // the smaller ball already encloses it.
    fn support_ball<'a, const D: usize>(
        &self,
        support: &[&'a [f64; D]],
    ) -> Result<EnclosingBall<'a, D>>
    where
        G: SupportBallGenerator<D>,
    {
        if support.len() == D + 1 {
            if let Some(ball) = self.reduced_ball(support) {
                return Ok(ball);
            }
        }
        match self.generator.ball_on_support(support) {
            Err(EnclosingError::AmbiguousSupport { size }) => self
                .fallback_ball(support)
                .ok_or(EnclosingError::AmbiguousSupport { size }),
            result => result,
        }
    }

    // The last support point was forced most recently, so it is always kept.
    // Earlier points are tried in insertion order.
    fn reduced_ball<'a, const D: usize>(
        &self,
        support: &[&'a [f64; D]],
    ) -> Option<EnclosingBall<'a, D>>
    where
        G: SupportBallGenerator<D>,
    {
        let mut reduced = Vec::with_capacity(D);
        for k in 0..support.len() - 1 {
            reduced.clear();
            reduced.extend(
                support
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != k)
                    .map(|(_, point)| *point),
            );
            if let Ok(ball) = self.generator.ball_on_support(&reduced) {
                if ball.contains_within(support[k], &self.tolerance) {
                    debug!(
                        dropped = k,
                        radius = ball.radius(),
                        "dropped redundant support point"
                    );
                    return Some(ball);
                }
            }
        }
        None
    }

    // Smallest ball over a proper subset of the support (at least two points)
    // that still encloses the whole support.
    fn fallback_ball<'a, const D: usize>(
        &self,
        support: &[&'a [f64; D]],
    ) -> Option<EnclosingBall<'a, D>>
    where
        G: SupportBallGenerator<D>,
    {
        let full: usize = (1 << support.len()) - 1;
        let ball = (1..full)
            .filter(|mask| mask.count_ones() >= 2)
            .filter_map(|mask| {
                let subset: Vec<_> = support
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| mask & (1 << i) != 0)
                    .map(|(_, point)| *point)
                    .collect();
                self.generator.ball_on_support(&subset).ok()
            })
            .filter(|ball| {
                support
                    .iter()
                    .all(|point| ball.contains_within(point, &self.tolerance))
            })
            .min_by_key(|ball| OrderedFloat(ball.radius()));
        debug!(
            size = support.len(),
            resolved = ball.is_some(),
            "degenerate support"
        );
        ball
    }
}

impl<G, const D: usize> Encloser<D> for WelzlEncloser<G>
where
    G: SupportBallGenerator<D>,
{
    fn enclose<'a, I>(&self, points: I) -> Result<EnclosingBall<'a, D>>
    where
        I: IntoIterator<Item = &'a [f64; D]>,
    {
        // Work on a private list of references, the caller's order is untouched
        let points: Vec<&'a [f64; D]> = points.into_iter().collect();
        if points.is_empty() {
            return Ok(EnclosingBall::empty());
        }
        self.pivoting_ball(&points)
    }
}
