//! Vehicle-frame coordinate transform.

use hwp_core::CartesianPoint;

/// A reference frame anchored at `origin` with its x-axis along `yaw`.
///
/// The spline is fitted in this frame so that the path is a function
/// y = f(x): in world coordinates a heading near ±90° would make the anchor
/// x values collapse or reverse, and the fit would be non-monotonic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RefFrame {
    pub origin: CartesianPoint,
    pub yaw: f64,
}

impl RefFrame {
    #[inline]
    pub fn new(origin: CartesianPoint, yaw: f64) -> Self {
        Self { origin, yaw }
    }

    /// World → frame: translate to the origin, rotate by `-yaw`.
    #[inline]
    pub fn to_local(&self, p: CartesianPoint) -> CartesianPoint {
        let sx = p.x - self.origin.x;
        let sy = p.y - self.origin.y;
        let (sin, cos) = (-self.yaw).sin_cos();
        CartesianPoint::new(sx * cos - sy * sin, sx * sin + sy * cos)
    }

    /// Frame → world: rotate by `yaw`, translate back.
    #[inline]
    pub fn to_world(&self, p: CartesianPoint) -> CartesianPoint {
        let (sin, cos) = self.yaw.sin_cos();
        CartesianPoint::new(
            p.x * cos - p.y * sin + self.origin.x,
            p.x * sin + p.y * cos + self.origin.y,
        )
    }
}
