//! Minimum-bounding-box rotation.
//!
//! Finds the rotation angle that minimizes the axis-aligned bounding
//! box of a primitive set, applies it exactly to every primitive, and
//! translates the result so the minimum corner sits at (0, 0). The 3D
//! extraction pipeline and the standalone drawing-rotation tool both go
//! through this one module.

use crate::float_types::Real;
use crate::primitive::{Primitive, Wire, bounds, sample_points};
use crate::profile::{OrientedProfile, Profile};
use geo::{ConvexHull, MinimumRotatedRect, MultiPoint, Point as GeoPoint};
use nalgebra::Vector2;

/// A flat primitive set after minimum-bounding-box rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Oriented {
    pub primitives: Vec<Primitive>,
    pub width: Real,
    pub height: Real,
    /// Net applied rotation in degrees, signed.
    pub rotation_deg: Real,
}

/// Orientation angle (degrees, against +X) of the minimum-area
/// rectangle enclosing the primitives' sampled points.
///
/// Fewer than 3 sampled points is a degenerate input (a point or a bare
/// segment) where no rotation is meaningful; the defined answer is 0.
pub fn optimal_rotation(primitives: &[Primitive]) -> Real {
    let samples = sample_points(primitives);
    if samples.len() < 3 {
        return 0.0;
    }

    let multipoint = MultiPoint::new(
        samples
            .iter()
            .map(|p| GeoPoint::new(p.x, p.y))
            .collect::<Vec<_>>(),
    );
    let hull = multipoint.convex_hull();
    let Some(rect) = MinimumRotatedRect::minimum_rotated_rect(&hull) else {
        return 0.0;
    };

    // Angle of the rectangle's first edge against the +X axis.
    let ring = &rect.exterior().0;
    if ring.len() < 2 {
        return 0.0;
    }
    let edge = ring[1] - ring[0];
    edge.y.atan2(edge.x).to_degrees()
}

/// Rotate a flat primitive set to its minimum bounding box and move it
/// to the origin. This is the whole standalone 2D-drawing path.
pub fn orient_primitives(primitives: &[Primitive]) -> Oriented {
    let rotation_deg = -optimal_rotation(primitives);
    let rotated: Vec<Primitive> = primitives.iter().map(|p| p.rotated(rotation_deg)).collect();

    let (offset, width, height) = origin_shift(&rotated);
    Oriented {
        primitives: rotated.iter().map(|p| p.translated(offset)).collect(),
        width,
        height,
        rotation_deg,
    }
}

/// Rotate a profile to its minimum bounding box, preserving boundary
/// grouping. The input is never mutated.
pub fn orient_profile(profile: &Profile) -> OrientedProfile {
    let rotation_deg = -optimal_rotation(&profile.primitives);

    let rotate_wire = |wire: &Wire| -> Wire { wire.iter().map(|p| p.rotated(rotation_deg)).collect() };
    let outer = rotate_wire(&profile.outer);
    let holes: Vec<Wire> = profile.holes.iter().map(rotate_wire).collect();

    let mut primitives = outer.clone();
    for hole in &holes {
        primitives.extend(hole.iter().cloned());
    }

    let (offset, width, height) = origin_shift(&primitives);
    let shift_wire =
        |wire: &Wire| -> Wire { wire.iter().map(|p| p.translated(offset)).collect() };

    OrientedProfile {
        outer: shift_wire(&outer),
        holes: holes.iter().map(shift_wire).collect(),
        primitives: primitives.iter().map(|p| p.translated(offset)).collect(),
        width,
        height,
        rotation_deg,
        thickness: profile.thickness,
        axis: profile.axis,
    }
}

/// Translation bringing the set's minimum bounding corner to (0, 0),
/// plus the resulting width and height. Empty input needs no shift.
fn origin_shift(primitives: &[Primitive]) -> (Vector2<Real>, Real, Real) {
    match bounds(primitives) {
        Some((min, max)) => (
            Vector2::new(-min.x, -min.y),
            max.x - min.x,
            max.y - min.y,
        ),
        None => (Vector2::zeros(), 0.0, 0.0),
    }
}
