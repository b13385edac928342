//! SVG line-art export.
//!
//! Writes an oriented profile as clean vector line art at true scale:
//! inch-sized document, hairline black strokes, true circles and arcs.
//! The y axis is flipped into screen orientation, which preserves the
//! winding of counter-clockwise arcs in SVG screen coordinates.

use crate::float_types::{Real, tolerance};
use crate::io::IoError;
use crate::orient::Oriented;
use crate::primitive::Primitive;
use crate::profile::OrientedProfile;

use std::path::Path;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle as SvgCircle, Group, Line as SvgLine, Path as SvgPath};

/// Stroke width in inches.
const STROKE_WIDTH: Real = 0.01;

/// Build an SVG document for a primitive set whose bounding box is
/// `width` × `height` with its minimum corner at the origin.
pub fn document_from_primitives(
    primitives: &[Primitive],
    width: Real,
    height: Real,
) -> Document {
    let mut group = Group::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", STROKE_WIDTH as f64);

    // Flip into SVG's y-down screen space.
    let flip = |y: Real| -> f64 { (height - y) as f64 };

    for primitive in primitives {
        match primitive {
            Primitive::Line { start, end } => {
                group = group.add(
                    SvgLine::new()
                        .set("x1", start.x as f64)
                        .set("y1", flip(start.y))
                        .set("x2", end.x as f64)
                        .set("y2", flip(end.y)),
                );
            },
            Primitive::Circle { center, radius } => {
                group = group.add(
                    SvgCircle::new()
                        .set("cx", center.x as f64)
                        .set("cy", flip(center.y))
                        .set("r", *radius as f64),
                );
            },
            Primitive::Arc {
                radius,
                sweep_deg,
                start,
                end,
                ..
            } => {
                let large_arc = i32::from(sweep_deg.abs() > 180.0);
                // y-flip inverts winding: a CCW sweep renders with
                // SVG sweep-flag 0, a CW sweep with 1.
                let sweep_flag = i32::from(*sweep_deg < 0.0);
                let data = Data::new()
                    .move_to((start.x as f64, flip(start.y)))
                    .elliptical_arc_to((
                        *radius as f64,
                        *radius as f64,
                        0,
                        large_arc,
                        sweep_flag,
                        end.x as f64,
                        flip(end.y),
                    ));
                group = group.add(SvgPath::new().set("d", data));
            },
            Primitive::Polyline { points } => {
                if points.len() < 2 {
                    continue;
                }
                let mut data = Data::new().move_to((points[0].x as f64, flip(points[0].y)));
                let closed = points.len() > 2
                    && (points[0] - points[points.len() - 1]).norm() < tolerance();
                let last = if closed {
                    points.len() - 1
                } else {
                    points.len()
                };
                for p in &points[1..last] {
                    data = data.line_to((p.x as f64, flip(p.y)));
                }
                if closed {
                    data = data.close();
                }
                group = group.add(SvgPath::new().set("d", data));
            },
        }
    }

    Document::new()
        .set("width", format!("{}in", width as f64))
        .set("height", format!("{}in", height as f64))
        .set("viewBox", (0.0, 0.0, width as f64, height as f64))
        .add(group)
}

/// SVG document for an oriented profile.
pub fn document_from_profile(profile: &OrientedProfile) -> Document {
    document_from_primitives(&profile.primitives, profile.width, profile.height)
}

/// SVG document for an oriented primitive set.
pub fn document_from_oriented(oriented: &Oriented) -> Document {
    document_from_primitives(&oriented.primitives, oriented.width, oriented.height)
}

/// Write an oriented profile to an SVG file.
pub fn save_profile(profile: &OrientedProfile, path: &Path) -> Result<(), IoError> {
    svg::save(path, &document_from_profile(profile))?;
    Ok(())
}
