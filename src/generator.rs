use crate::{
    ball::EnclosingBall,
    error::{EnclosingError, Result},
    vector::{dot, euclidean, midpoint, sub},
};

/// Pivots smaller than this fraction of the largest Gram diagonal entry
/// mark the support as degenerate.
pub const DEGENERACY_RATIO: f64 = 1e-12;

/// Computes the ball whose boundary passes through a small set of support points.
pub trait SupportBallGenerator<const D: usize> {
    /// Create the smallest ball with all the support points on its boundary.
    ///
    /// # Errors
    /// Returns [`EnclosingError::AmbiguousSupport`] when the points do not
    /// determine a unique ball (collinear, coplanar or coincident points).
    ///
    /// # Panics
    /// Panics if more than `D + 1` support points are given.
    fn ball_on_support<'a>(&self, support: &[&'a [f64; D]]) -> Result<EnclosingBall<'a, D>>;
}

/// Support ball generator for `D`-dimensional Euclidean space.
///
/// Up to two points are handled directly. Larger supports are solved in the
/// affine hull of the points: with `v_i = p_i - p_0`, the center
/// `p_0 + sum(l_j * v_j)` is equidistant from all points when
/// `2 * (v_i . v_j) * l_j = |v_i|^2` for every `i`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CircumballGenerator<const D: usize>;

/// Generator for disks in the plane.
pub type DiskGenerator = CircumballGenerator<2>;

/// Generator for spheres in 3D space.
pub type SphereGenerator = CircumballGenerator<3>;

impl<const D: usize> CircumballGenerator<D> {
    #[must_use]
    pub fn new() -> Self {
        CircumballGenerator
    }

    fn circumball<'a>(support: &[&'a [f64; D]]) -> Result<EnclosingBall<'a, D>> {
        let origin = support[0];
        let n = support.len() - 1;

        let mut edges = [[0.0; D]; D];
        for (edge, point) in edges.iter_mut().zip(&support[1..]) {
            *edge = sub(*point, origin);
        }

        let mut gram = [[0.0; D]; D];
        let mut rhs = [0.0; D];
        for i in 0..n {
            for j in 0..n {
                gram[i][j] = 2.0 * dot(&edges[i], &edges[j]);
            }
            rhs[i] = dot(&edges[i], &edges[i]);
        }

        let coefficients =
            solve(&mut gram, &mut rhs, n).ok_or(EnclosingError::AmbiguousSupport {
                size: support.len(),
            })?;

        let mut center = *origin;
        for (edge, lambda) in edges[..n].iter().zip(coefficients[..n].iter()) {
            for (c, e) in center.iter_mut().zip(edge.iter()) {
                *c += lambda * e;
            }
        }

        let radius = support
            .iter()
            .map(|point| euclidean(&center, *point))
            .fold(0.0, f64::max);
        Ok(EnclosingBall::new(center, radius, support.to_vec()))
    }
}

impl<const D: usize> SupportBallGenerator<D> for CircumballGenerator<D> {
    fn ball_on_support<'a>(&self, support: &[&'a [f64; D]]) -> Result<EnclosingBall<'a, D>> {
        assert!(
            support.len() <= D + 1,
            "At most {} support points are allowed in {} dimensions, got {}",
            D + 1,
            D,
            support.len()
        );
        match support {
            [] => Ok(EnclosingBall::empty()),
            [a] => Ok(EnclosingBall::new(**a, 0.0, vec![*a])),
            [a, b] => Ok(EnclosingBall::new(
                midpoint(*a, *b),
                0.5 * euclidean(*a, *b),
                vec![*a, *b],
            )),
            _ => Self::circumball(support),
        }
    }
}

// Solve the leading `n x n` block of the system with Gaussian elimination and
// partial pivoting. Returns `None` if the system is (numerically) singular.
fn solve<const D: usize>(
    matrix: &mut [[f64; D]; D],
    rhs: &mut [f64; D],
    n: usize,
) -> Option<[f64; D]> {
    let scale = (0..n).map(|i| matrix[i][i].abs()).fold(0.0, f64::max);
    if scale == 0.0 {
        return None;
    }

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&a, &b| matrix[a][col].abs().total_cmp(&matrix[b][col].abs()))?;
        if matrix[pivot][col].abs() <= DEGENERACY_RATIO * scale {
            return None;
        }
        matrix.swap(col, pivot);
        rhs.swap(col, pivot);

        for row in col + 1..n {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..n {
                matrix[row][k] -= factor * matrix[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut solution = [0.0; D];
    for row in (0..n).rev() {
        let mut sum = rhs[row];
        for k in row + 1..n {
            sum -= matrix[row][k] * solution[k];
        }
        solution[row] = sum / matrix[row][row];
    }
    Some(solution)
}
