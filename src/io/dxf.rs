//! DXF import/export.
//!
//! Import maps drawing entities onto the canonical primitives: LINE,
//! CIRCLE and ARC map directly; LWPOLYLINE/POLYLINE straight runs
//! become polylines while bulged segments become true arcs (a bulge `b`
//! encodes an included angle of `4·atan(b)`, positive counter-clockwise).
//! Export writes each primitive back as the matching entity kind, with
//! clockwise arcs emitted as the equivalent counter-clockwise DXF arc.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::io::IoError;
use crate::orient::Oriented;
use crate::primitive::{Primitive, normalize_angle};
use crate::profile::OrientedProfile;

use dxf::Drawing;
use dxf::entities::{Arc, Circle, Entity, EntityType, Line, LwPolyline};
use dxf::enums::Units;
use dxf::{LwPolylineVertex, Point as DxfPoint};
use nalgebra::Point2;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Convert the entities of a drawing into primitives, in entity order.
/// Unsupported entity kinds are skipped.
#[allow(clippy::unnecessary_cast)]
pub fn primitives_from_drawing(drawing: &Drawing) -> Vec<Primitive> {
    let mut primitives = Vec::new();

    for entity in drawing.entities() {
        match &entity.specific {
            EntityType::Line(line) => primitives.push(Primitive::Line {
                start: Point2::new(line.p1.x as Real, line.p1.y as Real),
                end: Point2::new(line.p2.x as Real, line.p2.y as Real),
            }),
            EntityType::Circle(circle) => primitives.push(Primitive::Circle {
                center: Point2::new(circle.center.x as Real, circle.center.y as Real),
                radius: circle.radius as Real,
            }),
            EntityType::Arc(arc) => {
                let center = Point2::new(arc.center.x as Real, arc.center.y as Real);
                // DXF arcs always run counter-clockwise from start to
                // end angle.
                let start_deg = normalize_angle(arc.start_angle as Real);
                let mut sweep_deg =
                    normalize_angle(arc.end_angle as Real - arc.start_angle as Real);
                if sweep_deg == 0.0 {
                    sweep_deg = 360.0;
                }
                primitives.push(Primitive::arc(
                    center,
                    arc.radius as Real,
                    start_deg,
                    sweep_deg,
                ));
            },
            EntityType::LwPolyline(polyline) => {
                let vertices: Vec<(Point2<Real>, Real)> = polyline
                    .vertices
                    .iter()
                    .map(|v| (Point2::new(v.x as Real, v.y as Real), v.bulge as Real))
                    .collect();
                let closed = polyline.flags & 1 != 0;
                convert_polyline(&vertices, closed, &mut primitives);
            },
            EntityType::Polyline(polyline) => {
                let vertices: Vec<(Point2<Real>, Real)> = polyline
                    .vertices()
                    .map(|v| {
                        (
                            Point2::new(v.location.x as Real, v.location.y as Real),
                            v.bulge as Real,
                        )
                    })
                    .collect();
                let closed = polyline.flags & 1 != 0;
                convert_polyline(&vertices, closed, &mut primitives);
            },
            _ => {},
        }
    }

    primitives
}

/// Split a (lw)polyline into straight-run polylines and bulge arcs.
fn convert_polyline(
    vertices: &[(Point2<Real>, Real)],
    closed: bool,
    out: &mut Vec<Primitive>,
) {
    if vertices.len() < 2 {
        return;
    }
    let segments = if closed {
        vertices.len()
    } else {
        vertices.len() - 1
    };

    let mut run: Vec<Point2<Real>> = Vec::new();
    for i in 0..segments {
        let (p1, bulge) = vertices[i];
        let (p2, _) = vertices[(i + 1) % vertices.len()];

        match bulge_arc(p1, p2, bulge) {
            Some(arc) => {
                if run.len() >= 2 {
                    out.push(Primitive::Polyline {
                        points: std::mem::take(&mut run),
                    });
                }
                out.push(arc);
            },
            None => {
                if run.is_empty() {
                    run.push(p1);
                }
                run.push(p2);
            },
        }
    }
    if run.len() >= 2 {
        out.push(Primitive::Polyline { points: run });
    }
}

/// Arc for a bulged polyline segment, or `None` for a straight one.
///
/// For bulge `b`, the included angle is `4·atan(b)` (sign = direction)
/// and the radius follows from the chord: `r = d(1+b²)/(4|b|)`.
fn bulge_arc(p1: Point2<Real>, p2: Point2<Real>, bulge: Real) -> Option<Primitive> {
    let eps = tolerance();
    if bulge.abs() < eps {
        return None;
    }
    let chord = p2 - p1;
    let d = chord.norm();
    if d < eps {
        return None;
    }

    let theta = 4.0 * bulge.atan();
    let radius = d * (1.0 + bulge * bulge) / (4.0 * bulge.abs());
    // Center sits on the chord's perpendicular bisector; the signed
    // offset handles both directions and major arcs.
    let h = (d / 2.0) / (theta / 2.0).tan();
    let mid = nalgebra::center(&p1, &p2);
    let left = nalgebra::Vector2::new(-chord.y, chord.x) / d;
    let center = mid + left * h;

    let start_deg = (p1.y - center.y).atan2(p1.x - center.x).to_degrees();
    Some(Primitive::Arc {
        center,
        radius,
        start_deg: normalize_angle(start_deg),
        sweep_deg: theta.to_degrees(),
        start: p1,
        end: p2,
    })
}

/// Build a drawing from primitives, one entity per primitive.
#[allow(clippy::unnecessary_cast)]
pub fn drawing_from_primitives(primitives: &[Primitive]) -> Drawing {
    let mut drawing = Drawing::new();
    // R2010: LWPOLYLINE needs a post-R12 version.
    drawing.header.version = dxf::enums::AcadVersion::R2010;

    for primitive in primitives {
        match primitive {
            Primitive::Line { start, end } => {
                drawing.add_entity(Entity::new(EntityType::Line(Line::new(
                    DxfPoint::new(start.x as f64, start.y as f64, 0.0),
                    DxfPoint::new(end.x as f64, end.y as f64, 0.0),
                ))));
            },
            Primitive::Circle { center, radius } => {
                drawing.add_entity(Entity::new(EntityType::Circle(Circle::new(
                    DxfPoint::new(center.x as f64, center.y as f64, 0.0),
                    *radius as f64,
                ))));
            },
            Primitive::Arc {
                center,
                radius,
                start_deg,
                sweep_deg,
                ..
            } => {
                // DXF arcs always go CCW from start to end angle; a
                // clockwise sweep swaps the pair to cover the same
                // geometry.
                let (start_angle, end_angle) = if *sweep_deg >= 0.0 {
                    (*start_deg, start_deg + sweep_deg)
                } else {
                    (start_deg + sweep_deg, *start_deg)
                };
                drawing.add_entity(Entity::new(EntityType::Arc(Arc::new(
                    DxfPoint::new(center.x as f64, center.y as f64, 0.0),
                    *radius as f64,
                    normalize_angle(start_angle) as f64,
                    normalize_angle(end_angle) as f64,
                ))));
            },
            Primitive::Polyline { points } => {
                if points.len() < 2 {
                    continue;
                }
                let eps = tolerance();
                let closed = points.len() > 2
                    && (points[0] - points[points.len() - 1]).norm() < eps;
                let emit = if closed {
                    &points[..points.len() - 1]
                } else {
                    &points[..]
                };
                let mut polyline = LwPolyline::default();
                for p in emit {
                    polyline.vertices.push(LwPolylineVertex {
                        x: p.x as f64,
                        y: p.y as f64,
                        ..Default::default()
                    });
                }
                if closed {
                    polyline.flags |= 1;
                }
                drawing.add_entity(Entity::new(EntityType::LwPolyline(polyline)));
            },
        }
    }

    drawing
}

/// Drawing for an oriented primitive set: inch units, extents from the
/// optimized bounding box.
pub fn drawing_from_oriented(oriented: &Oriented) -> Drawing {
    let mut drawing = drawing_from_primitives(&oriented.primitives);
    stamp_extents(&mut drawing, oriented.width, oriented.height);
    drawing
}

/// Drawing for an oriented profile (flattened primitive list).
pub fn drawing_from_profile(profile: &OrientedProfile) -> Drawing {
    let mut drawing = drawing_from_primitives(&profile.primitives);
    stamp_extents(&mut drawing, profile.width, profile.height);
    drawing
}

#[allow(clippy::unnecessary_cast)]
fn stamp_extents(drawing: &mut Drawing, width: Real, height: Real) {
    drawing.header.default_drawing_units = Units::Inches;
    drawing.header.minimum_drawing_extents = DxfPoint::new(0.0, 0.0, 0.0);
    drawing.header.maximum_drawing_extents = DxfPoint::new(width as f64, height as f64, 0.0);
}

/// Load a drawing file and convert its entities.
///
/// Returns [`GeometryError::EmptyDrawing`] when no usable boundary
/// entity was found — fatal for this input, recoverable for a batch.
pub fn load_path(path: &Path) -> Result<Vec<Primitive>, IoError> {
    let mut reader = BufReader::new(File::open(path)?);
    let drawing = Drawing::load(&mut reader)?;
    let primitives = primitives_from_drawing(&drawing);
    if primitives.is_empty() {
        return Err(GeometryError::EmptyDrawing.into());
    }
    Ok(primitives)
}

/// Write a drawing to disk.
pub fn save_path(drawing: &Drawing, path: &Path) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    drawing.save(&mut writer)?;
    Ok(())
}
