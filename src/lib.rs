//! Minimum enclosing balls of low-dimensional point sets.
//!
//! The [`WelzlEncloser`] finds the smallest ball containing a set of points
//! with Welzl's move-to-front algorithm. The ball through a handful of
//! support points is computed by a [`SupportBallGenerator`], so the same
//! encloser handles disks ([`DiskGenerator`]), spheres ([`SphereGenerator`])
//! and higher dimensions.
//!
//! ```
//! use encloser::{DiskGenerator, Encloser, Tolerance, WelzlEncloser};
//!
//! let points = vec![[0.0, 0.0], [4.0, 0.0], [2.0, 1.0], [1.0, -1.0]];
//! let encloser = WelzlEncloser::new(Tolerance::default(), DiskGenerator::new());
//! let ball = encloser.enclose(&points).unwrap();
//!
//! assert_eq!(ball.radius(), 2.0);
//! assert_eq!(ball.center(), &[2.0, 0.0]);
//! assert!(points.iter().all(|p| ball.contains(p, 1e-10)));
//! ```

mod ball;
mod encloser;
mod error;
mod generator;
mod tolerance;
mod vector;

pub use ball::EnclosingBall;
pub use encloser::{Encloser, WelzlEncloser};
pub use error::{EnclosingError, Result};
pub use generator::{
    CircumballGenerator, DiskGenerator, SphereGenerator, SupportBallGenerator, DEGENERACY_RATIO,
};
pub use tolerance::{Tolerance, DEFAULT_EPSILON};
pub use vector::{euclidean, squared_euclidean};
