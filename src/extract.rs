//! 3D → 2D profile extraction.
//!
//! Every supported part is a uniform extrusion of a 2D profile along
//! one of the three principal axes. This module detects the extrusion
//! axis (the thinnest bounding-box dimension), picks the flat face
//! carrying the full profile, and projects that face's boundary curves
//! into [`Primitive`]s scaled to the target unit.

use crate::errors::GeometryError;
use crate::float_types::{
    AXIS_ALIGN_DOT, DEGENERATE_SPAN, FULL_TURN_EPSILON, MIN_CURVE_SAMPLES, RECTANGLE_DOT, Real,
    SAMPLES_PER_PARAM, SWEEP_MIDPOINT_SLACK, TAU,
};
use crate::kernel::{Axis, BoundaryCurve, CurveKind, PlanarFace, Solid};
use crate::primitive::{Primitive, Wire, normalize_angle};
use crate::profile::Profile;
use core::cmp::Ordering;
use nalgebra::Point2;

/// Extract the 2D profile of a single extruded solid.
///
/// `scale` converts kernel coordinates into the target unit (for a
/// millimetre kernel and inch output, [`MM_TO_INCH`]). Boundary wires
/// are emitted in the face's traversal order, outer first, holes after.
///
/// Returns [`GeometryError::NoPlanarFaces`] when the solid has no
/// planar face at all; every other input produces a profile, falling
/// back to the thinnest axis when the rectangle check rejects all
/// candidates.
///
/// [`MM_TO_INCH`]: crate::float_types::MM_TO_INCH
pub fn extract_profile<S: Solid>(solid: &S, scale: Real) -> Result<Profile, GeometryError> {
    let faces = solid.planar_faces();
    if faces.is_empty() {
        return Err(GeometryError::NoPlanarFaces);
    }
    let extents = solid.extents();

    // Smallest extent first = extrusion/thickness direction. The sort
    // is stable, so equal extents keep X,Y,Z enumeration order.
    let mut axes = Axis::ALL;
    axes.sort_by(|a, b| {
        extents[a.index()]
            .partial_cmp(&extents[b.index()])
            .unwrap_or(Ordering::Equal)
    });

    for axis in axes {
        let Some(face) = largest_aligned_face(&faces, axis) else {
            continue;
        };
        let outer = project_wire(&face.outer_wire(), axis, scale);
        // A plain rectangular outer boundary means we grabbed an end
        // cap, not the profile face.
        if is_rectangle(&outer) {
            tracing::debug!(%axis, "outer boundary is a plain rectangle, rejecting axis");
            continue;
        }
        let holes: Vec<Wire> = face
            .inner_wires()
            .iter()
            .map(|wire| project_wire(wire, axis, scale))
            .collect();
        return Ok(Profile::new(
            outer,
            holes,
            extents[axis.index()] * scale,
            axis,
        ));
    }

    // Every axis rejected: atypical or malformed extrusion. Take the
    // thinnest axis unconditionally so the caller still gets a profile.
    let axis = axes[0];
    tracing::warn!(%axis, "all axes rejected by rectangle check, using thinnest axis");
    let face = largest_aligned_face(&faces, axis).unwrap_or(&faces[0]);
    let outer = project_wire(&face.outer_wire(), axis, scale);
    let holes: Vec<Wire> = face
        .inner_wires()
        .iter()
        .map(|wire| project_wire(wire, axis, scale))
        .collect();
    Ok(Profile::new(
        outer,
        holes,
        extents[axis.index()] * scale,
        axis,
    ))
}

/// Largest-area face whose normal is parallel to `axis` within
/// [`AXIS_ALIGN_DOT`].
fn largest_aligned_face<F: PlanarFace>(faces: &[F], axis: Axis) -> Option<&F> {
    let unit = axis.unit();
    faces
        .iter()
        .filter(|face| face.normal().dot(&unit).abs() > AXIS_ALIGN_DOT)
        .max_by(|a, b| a.area().partial_cmp(&b.area()).unwrap_or(Ordering::Equal))
}

/// Project one boundary wire, preserving curve traversal order.
fn project_wire<C: BoundaryCurve>(curves: &[C], axis: Axis, scale: Real) -> Wire {
    let mut wire = Wire::new();
    for curve in curves {
        project_curve(curve, axis, scale, &mut wire);
    }
    wire
}

/// Classify and project a single boundary curve, appending at most one
/// primitive to `out`.
fn project_curve<C: BoundaryCurve>(curve: &C, axis: Axis, scale: Real, out: &mut Wire) {
    let (first, last) = curve.parameter_range();
    let span = (last - first).abs();
    // Near-zero parametric span: kernel seam marker, nothing to emit.
    if span < DEGENERATE_SPAN {
        return;
    }

    let project = |u: Real| -> Point2<Real> { axis.project(&curve.point_at(u)) * scale };

    match curve.kind() {
        CurveKind::Line => out.push(Primitive::Line {
            start: project(first),
            end: project(last),
        }),
        CurveKind::Circle => {
            let Some((center3, radius)) = curve.circle() else {
                // Circular per classification but no circle data:
                // degrade to tessellation rather than guessing.
                out.push(tessellate(curve, axis, scale, first, last));
                return;
            };
            let center = axis.project(&center3) * scale;
            let radius = radius * scale;

            if (span - TAU).abs() < FULL_TURN_EPSILON {
                out.push(Primitive::Circle { center, radius });
                return;
            }

            let start = project(first);
            let end = project(last);
            let start_deg = (start.y - center.y).atan2(start.x - center.x).to_degrees();
            let end_deg = (end.y - center.y).atan2(end.x - center.x).to_degrees();

            // The edge runs first -> last in its parameterization; the
            // midpoint tells us which way around the circle it travels.
            let mid = project((first + last) / 2.0);
            let mid_deg = (mid.y - center.y).atan2(mid.x - center.x).to_degrees();

            let mut ccw_sweep = normalize_angle(end_deg - start_deg);
            if ccw_sweep == 0.0 {
                ccw_sweep = 360.0;
            }
            let mid_from_start = normalize_angle(mid_deg - start_deg);
            let sweep_deg = if mid_from_start <= ccw_sweep + SWEEP_MIDPOINT_SLACK {
                ccw_sweep
            } else {
                // Midpoint outside the CCW span: the arc runs clockwise.
                ccw_sweep - 360.0
            };

            out.push(Primitive::Arc {
                center,
                radius,
                start_deg,
                sweep_deg,
                start,
                end,
            });
        },
        CurveKind::Other => out.push(tessellate(curve, axis, scale, first, last)),
    }
}

/// Sample a free-form curve into a polyline, with density proportional
/// to its parametric span.
fn tessellate<C: BoundaryCurve>(
    curve: &C,
    axis: Axis,
    scale: Real,
    first: Real,
    last: Real,
) -> Primitive {
    let n = (((last - first).abs() * SAMPLES_PER_PARAM) as usize).max(MIN_CURVE_SAMPLES);
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let u = first + (last - first) * i as Real / n as Real;
        points.push(axis.project(&curve.point_at(u)) * scale);
    }
    Primitive::Polyline { points }
}

/// True when `outer` is a plain 4-sided rectangle: four line segments
/// with every adjacent pair near-perpendicular.
fn is_rectangle(outer: &[Primitive]) -> bool {
    if outer.len() != 4 {
        return false;
    }
    let mut directions = Vec::with_capacity(4);
    for primitive in outer {
        let Primitive::Line { start, end } = primitive else {
            return false;
        };
        directions.push(end - start);
    }
    for i in 0..4 {
        let a = &directions[i];
        let b = &directions[(i + 1) % 4];
        let denom = a.norm() * b.norm() + Real::EPSILON;
        if (a.dot(b) / denom).abs() > RECTANGLE_DOT {
            return false;
        }
    }
    true
}
