//! 2D boundary primitives.
//!
//! The canonical, axis-free representation of profile geometry. Every
//! consumer (extraction, rotation, exporters) works through the one
//! [`Primitive`] sum type and its exhaustive-match operations, so there
//! is exactly one place that knows how to rotate, translate or sample
//! each shape kind.

use crate::float_types::{CIRCLE_SAMPLES, MIN_ARC_STEPS, Real, TAU};
use nalgebra::{Point2, Rotation2, Vector2};

/// One boundary wire: an ordered run of primitives forming a closed loop.
pub type Wire = Vec<Primitive>;

/// A single 2D shape element of a cutting profile.
///
/// Angles are in degrees. An arc's sweep sign encodes direction:
/// positive sweeps counter-clockwise, negative clockwise, and its
/// magnitude stays in (0, 360] — a full turn is a [`Primitive::Circle`],
/// never a 360° arc.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight segment between two endpoints.
    Line {
        start: Point2<Real>,
        end: Point2<Real>,
    },
    /// Full circle.
    Circle { center: Point2<Real>, radius: Real },
    /// Circular arc. `start` and `end` cache the endpoint coordinates
    /// and must stay consistent with `center`/`radius`/`start_deg`.
    Arc {
        center: Point2<Real>,
        radius: Real,
        start_deg: Real,
        sweep_deg: Real,
        start: Point2<Real>,
        end: Point2<Real>,
    },
    /// Ordered point chain (≥ 2 points); insertion order is traversal
    /// order. A 2-point polyline is geometrically a line but is kept
    /// distinct.
    Polyline { points: Vec<Point2<Real>> },
}

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_angle(a: Real) -> Real {
    let mut a = a % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    a
}

/// Point on a circle at `deg` degrees from its center.
pub fn point_at_angle(center: Point2<Real>, radius: Real, deg: Real) -> Point2<Real> {
    let rad = deg.to_radians();
    Point2::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

impl Primitive {
    /// Build an arc from center, radius and angles, deriving the cached
    /// endpoints so the consistency invariant holds by construction.
    pub fn arc(center: Point2<Real>, radius: Real, start_deg: Real, sweep_deg: Real) -> Self {
        Primitive::Arc {
            center,
            radius,
            start_deg,
            sweep_deg,
            start: point_at_angle(center, radius, start_deg),
            end: point_at_angle(center, radius, start_deg + sweep_deg),
        }
    }

    /// A new primitive rotated by `angle_deg` about the origin.
    ///
    /// Rotation moves point coordinates; an arc additionally shifts its
    /// start angle while its sweep magnitude and direction are
    /// untouched, and a circle only moves its center.
    pub fn rotated(&self, angle_deg: Real) -> Self {
        let rot = Rotation2::new(angle_deg.to_radians());
        match self {
            Primitive::Line { start, end } => Primitive::Line {
                start: rot * start,
                end: rot * end,
            },
            Primitive::Circle { center, radius } => Primitive::Circle {
                center: rot * center,
                radius: *radius,
            },
            Primitive::Arc {
                center,
                radius,
                start_deg,
                sweep_deg,
                start,
                end,
            } => Primitive::Arc {
                center: rot * center,
                radius: *radius,
                start_deg: normalize_angle(start_deg + angle_deg),
                sweep_deg: *sweep_deg,
                start: rot * start,
                end: rot * end,
            },
            Primitive::Polyline { points } => Primitive::Polyline {
                points: points.iter().map(|p| rot * p).collect(),
            },
        }
    }

    /// A new primitive translated by `offset`.
    pub fn translated(&self, offset: Vector2<Real>) -> Self {
        match self {
            Primitive::Line { start, end } => Primitive::Line {
                start: start + offset,
                end: end + offset,
            },
            Primitive::Circle { center, radius } => Primitive::Circle {
                center: center + offset,
                radius: *radius,
            },
            Primitive::Arc {
                center,
                radius,
                start_deg,
                sweep_deg,
                start,
                end,
            } => Primitive::Arc {
                center: center + offset,
                radius: *radius,
                start_deg: *start_deg,
                sweep_deg: *sweep_deg,
                start: start + offset,
                end: end + offset,
            },
            Primitive::Polyline { points } => Primitive::Polyline {
                points: points.iter().map(|p| p + offset).collect(),
            },
        }
    }

    /// Append representative points to `out`: line endpoints, 64 points
    /// around a circle, arc endpoints plus interior steps proportional
    /// to the sweep, polyline points verbatim.
    pub fn sample_into(&self, out: &mut Vec<Point2<Real>>) {
        match self {
            Primitive::Line { start, end } => {
                out.push(*start);
                out.push(*end);
            },
            Primitive::Circle { center, radius } => {
                for i in 0..CIRCLE_SAMPLES {
                    let a = TAU * i as Real / CIRCLE_SAMPLES as Real;
                    out.push(Point2::new(
                        center.x + radius * a.cos(),
                        center.y + radius * a.sin(),
                    ));
                }
            },
            Primitive::Arc {
                center,
                radius,
                start_deg,
                sweep_deg,
                start,
                end,
            } => {
                out.push(*start);
                out.push(*end);
                let steps = ((sweep_deg.abs() / 360.0 * CIRCLE_SAMPLES as Real) as usize)
                    .max(MIN_ARC_STEPS);
                for i in 1..steps {
                    let a = start_deg + sweep_deg * i as Real / steps as Real;
                    out.push(point_at_angle(*center, *radius, a));
                }
            },
            Primitive::Polyline { points } => out.extend_from_slice(points),
        }
    }
}

/// Representative points of a whole primitive set, for hull building
/// and bounding-box measurement.
pub fn sample_points(primitives: &[Primitive]) -> Vec<Point2<Real>> {
    let mut points = Vec::new();
    for primitive in primitives {
        primitive.sample_into(&mut points);
    }
    points
}

/// Axis-aligned bounds `(min, max)` of a primitive set, measured from
/// the same samples the optimizer uses. `None` for an empty set.
pub fn bounds(primitives: &[Primitive]) -> Option<(Point2<Real>, Point2<Real>)> {
    let points = sample_points(primitives);
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}
