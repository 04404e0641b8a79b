//! Natural cubic spline interpolation.
//!
//! Fits piecewise cubics `y = a + b·dx + c·dx² + d·dx³` through every anchor
//! exactly, with C² continuity at the knots (second derivative zero at both
//! ends).  The second-derivative coefficients come from the standard
//! tridiagonal system, solved with an LU decomposition via nalgebra.
//!
//! Queries outside the knot range evaluate the first/last segment's cubic —
//! the generator never asks for them, but a clamped answer beats a panic.

use nalgebra::{DMatrix, DVector};

use crate::{TrajectoryError, TrajectoryResult};

/// A fitted 1-D cubic interpolant over strictly increasing knots.
#[derive(Debug, Clone)]
pub struct Spline {
    x: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl Spline {
    /// Fit a natural cubic spline through `(x[i], y[i])`.
    ///
    /// Requires at least 3 knots and strictly increasing `x`.
    pub fn fit(x: &[f64], y: &[f64]) -> TrajectoryResult<Spline> {
        let n = x.len();
        if n < 3 || y.len() < 3 {
            return Err(TrajectoryError::TooFewAnchors { min: 3, got: n.min(y.len()) });
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(TrajectoryError::NonIncreasingX);
        }

        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let a = y.to_vec();

        // Tridiagonal system for the c coefficients, natural boundary
        // conditions (c[0] = c[n-1] = 0).
        let mut mat = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DVector::<f64>::zeros(n);
        mat[(0, 0)] = 1.0;
        mat[(n - 1, n - 1)] = 1.0;
        for i in 1..n - 1 {
            mat[(i, i - 1)] = h[i - 1];
            mat[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            mat[(i, i + 1)] = h[i];
            rhs[i] = 3.0 * (a[i + 1] - a[i]) / h[i] - 3.0 * (a[i] - a[i - 1]) / h[i - 1];
        }

        let c_vec = mat.lu().solve(&rhs).ok_or(TrajectoryError::Singular)?;
        let c: Vec<f64> = c_vec.iter().copied().collect();

        let mut b = Vec::with_capacity(n - 1);
        let mut d = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            d.push((c[i + 1] - c[i]) / (3.0 * h[i]));
            b.push((a[i + 1] - a[i]) / h[i] - h[i] * (c[i + 1] + 2.0 * c[i]) / 3.0);
        }

        Ok(Spline { x: x.to_vec(), a, b, c, d })
    }

    /// Evaluate the interpolant at `t`.
    pub fn eval(&self, t: f64) -> f64 {
        let i = self.segment(t);
        let dx = t - self.x[i];
        self.a[i] + self.b[i] * dx + self.c[i] * dx.powi(2) + self.d[i] * dx.powi(3)
    }

    /// First derivative at `t`.
    pub fn deriv(&self, t: f64) -> f64 {
        let i = self.segment(t);
        let dx = t - self.x[i];
        self.b[i] + 2.0 * self.c[i] * dx + 3.0 * self.d[i] * dx.powi(2)
    }

    /// Index of the segment whose polynomial covers `t`, clamped to the
    /// valid range for out-of-bounds queries.
    fn segment(&self, t: f64) -> usize {
        self.x
            .partition_point(|&knot| knot <= t)
            .saturating_sub(1)
            .min(self.x.len() - 2)
    }
}
