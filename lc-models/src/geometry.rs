//! Plane geometry of overlapping stellar and planetary disks.

use std::f64::consts::PI;

/// Area of the intersection of two circles.
///
/// # Arguments
/// * `r1` - Radius of the first circle
/// * `r2` - Radius of the second circle
/// * `d` - Distance between the circle centers
///
/// # Returns
/// The overlap area, in the squared units of the radii
pub fn circle_overlap_area(r1: f64, r2: f64, d: f64) -> f64 {
    if r1 <= 0.0 || r2 <= 0.0 || d >= r1 + r2 {
        return 0.0;
    }

    // One disk entirely inside the other
    if d <= (r1 - r2).abs() {
        let r = r1.min(r2);
        return PI * r * r;
    }

    let cos1 = ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).clamp(-1.0, 1.0);
    let cos2 = ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).clamp(-1.0, 1.0);
    let kite = (-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2);

    r1 * r1 * cos1.acos() + r2 * r2 * cos2.acos() - 0.5 * kite.max(0.0).sqrt()
}
