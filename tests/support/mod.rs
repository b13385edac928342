//! Test support library
//! Synthetic CAD-kernel fakes so the extraction pipeline can run
//! without a real geometry kernel.

use flatcut::float_types::{Real, TAU};
use flatcut::kernel::{Axis, BoundaryCurve, CurveKind, PlanarFace, Solid};
use nalgebra::{Point3, Vector3};

/// A hand-built boundary curve with parametric evaluation.
#[derive(Debug, Clone)]
pub enum FakeCurve {
    /// Straight segment, parameterized over [0, 1].
    Segment { a: Point3<Real>, b: Point3<Real> },
    /// Circular curve in a plane perpendicular to `axis`. The angle at
    /// parameter `u` is `start_angle + dir * u` (radians), so `dir` of
    /// +1 travels counter-clockwise in the projected plane and -1
    /// clockwise. Domain is `[first, last]`.
    Circular {
        center: Point3<Real>,
        radius: Real,
        axis: Axis,
        start_angle: Real,
        dir: Real,
        first: Real,
        last: Real,
    },
    /// Free-form curve (classified "other"): a segment with a sine bump
    /// in the XY plane, for tessellation tests. Domain [0, 1].
    Wave {
        a: Point3<Real>,
        b: Point3<Real>,
        amplitude: Real,
    },
    /// Kernel seam marker: a near-zero parametric span.
    Seam { at: Point3<Real> },
}

impl FakeCurve {
    pub fn segment(a: [Real; 3], b: [Real; 3]) -> Self {
        FakeCurve::Segment {
            a: Point3::new(a[0], a[1], a[2]),
            b: Point3::new(b[0], b[1], b[2]),
        }
    }

    /// Full circle around `axis`.
    pub fn full_circle(center: [Real; 3], radius: Real, axis: Axis) -> Self {
        FakeCurve::Circular {
            center: Point3::new(center[0], center[1], center[2]),
            radius,
            axis,
            start_angle: 0.0,
            dir: 1.0,
            first: 0.0,
            last: TAU,
        }
    }
}

impl BoundaryCurve for FakeCurve {
    fn kind(&self) -> CurveKind {
        match self {
            FakeCurve::Segment { .. } | FakeCurve::Seam { .. } => CurveKind::Line,
            FakeCurve::Circular { .. } => CurveKind::Circle,
            FakeCurve::Wave { .. } => CurveKind::Other,
        }
    }

    fn parameter_range(&self) -> (Real, Real) {
        match self {
            FakeCurve::Segment { .. } | FakeCurve::Wave { .. } => (0.0, 1.0),
            FakeCurve::Circular { first, last, .. } => (*first, *last),
            FakeCurve::Seam { .. } => (0.0, 1e-5),
        }
    }

    fn point_at(&self, u: Real) -> Point3<Real> {
        match self {
            FakeCurve::Segment { a, b } => a + (b - a) * u,
            FakeCurve::Circular {
                center,
                radius,
                axis,
                start_angle,
                dir,
                ..
            } => {
                let angle = start_angle + dir * u;
                let (cos, sin) = (angle.cos() * radius, angle.sin() * radius);
                // Place (cos, sin) in the projected (u, v) coordinates
                // of the axis, so `dir` of +1 projects CCW.
                match axis {
                    Axis::X => Point3::new(center.x, center.y + cos, center.z + sin),
                    Axis::Y => Point3::new(center.x + cos, center.y, center.z + sin),
                    Axis::Z => Point3::new(center.x + cos, center.y + sin, center.z),
                }
            },
            FakeCurve::Wave { a, b, amplitude } => {
                let chord = b - a;
                let along = a + chord * u;
                let perp = Vector3::new(-chord.y, chord.x, 0.0);
                let perp = if perp.norm() > 0.0 {
                    perp.normalize()
                } else {
                    Vector3::zeros()
                };
                along + perp * (amplitude * (flatcut::float_types::PI * u).sin())
            },
            FakeCurve::Seam { at } => *at,
        }
    }

    fn circle(&self) -> Option<(Point3<Real>, Real)> {
        match self {
            FakeCurve::Circular { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FakeFace {
    pub normal: Vector3<Real>,
    pub area: Real,
    pub outer: Vec<FakeCurve>,
    pub inner: Vec<Vec<FakeCurve>>,
}

impl PlanarFace for FakeFace {
    type Curve = FakeCurve;

    fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    fn area(&self) -> Real {
        self.area
    }

    fn outer_wire(&self) -> Vec<FakeCurve> {
        self.outer.clone()
    }

    fn inner_wires(&self) -> Vec<Vec<FakeCurve>> {
        self.inner.clone()
    }
}

#[derive(Debug, Clone)]
pub struct FakeSolid {
    pub extents: [Real; 3],
    pub faces: Vec<FakeFace>,
}

impl Solid for FakeSolid {
    type Face = FakeFace;

    fn extents(&self) -> [Real; 3] {
        self.extents
    }

    fn planar_faces(&self) -> Vec<FakeFace> {
        self.faces.clone()
    }
}

/// Rectangle wire in the plane dropped by `axis`, at offset `w` along
/// it. `u`/`v` are the projected in-plane coordinates.
pub fn rect_wire(axis: Axis, w: Real, u0: Real, v0: Real, u1: Real, v1: Real) -> Vec<FakeCurve> {
    let lift = |u: Real, v: Real| -> [Real; 3] {
        match axis {
            Axis::X => [w, u, v],
            Axis::Y => [u, w, v],
            Axis::Z => [u, v, w],
        }
    };
    vec![
        FakeCurve::segment(lift(u0, v0), lift(u1, v0)),
        FakeCurve::segment(lift(u1, v0), lift(u1, v1)),
        FakeCurve::segment(lift(u1, v1), lift(u0, v1)),
        FakeCurve::segment(lift(u0, v1), lift(u0, v0)),
    ]
}

/// Axis-aligned box with all six rectangular faces.
pub fn box_solid(x: Real, y: Real, z: Real) -> FakeSolid {
    let mut faces = Vec::new();
    for (axis, span, u_max, v_max) in [
        (Axis::X, x, y, z),
        (Axis::Y, y, x, z),
        (Axis::Z, z, x, y),
    ] {
        for offset in [0.0, span] {
            let lift = |u: Real, v: Real| -> [Real; 3] {
                match axis {
                    Axis::X => [offset, u, v],
                    Axis::Y => [u, offset, v],
                    Axis::Z => [u, v, offset],
                }
            };
            faces.push(FakeFace {
                normal: axis.unit() * if offset == 0.0 { -1.0 } else { 1.0 },
                area: u_max * v_max,
                outer: vec![
                    FakeCurve::segment(lift(0.0, 0.0), lift(u_max, 0.0)),
                    FakeCurve::segment(lift(u_max, 0.0), lift(u_max, v_max)),
                    FakeCurve::segment(lift(u_max, v_max), lift(0.0, v_max)),
                    FakeCurve::segment(lift(0.0, v_max), lift(0.0, 0.0)),
                ],
                inner: vec![],
            });
        }
    }
    FakeSolid {
        extents: [x, y, z],
        faces,
    }
}

/// An L-shaped plate extruded along Z: 4 × 3 outline, 0.25 thick, with
/// a circular hole. Only the two Z faces and one X end cap are modeled;
/// that is all the selector needs.
pub fn l_bracket() -> FakeSolid {
    let l_outline = |z: Real| -> Vec<FakeCurve> {
        vec![
            FakeCurve::segment([0.0, 0.0, z], [4.0, 0.0, z]),
            FakeCurve::segment([4.0, 0.0, z], [4.0, 1.0, z]),
            FakeCurve::segment([4.0, 1.0, z], [1.5, 1.0, z]),
            FakeCurve::segment([1.5, 1.0, z], [1.5, 3.0, z]),
            FakeCurve::segment([1.5, 3.0, z], [0.0, 3.0, z]),
            FakeCurve::segment([0.0, 3.0, z], [0.0, 0.0, z]),
        ]
    };
    let hole = |z: Real| -> Vec<FakeCurve> {
        vec![FakeCurve::full_circle([0.75, 0.5, z], 0.25, Axis::Z)]
    };
    // L area = 4*1 + 1.5*2 = 5.5, minus the hole
    let area = 5.5 - flatcut::float_types::PI * 0.25 * 0.25;
    FakeSolid {
        extents: [4.0, 3.0, 0.25],
        faces: vec![
            FakeFace {
                normal: Vector3::z(),
                area,
                outer: l_outline(0.25),
                inner: vec![hole(0.25)],
            },
            FakeFace {
                normal: -Vector3::z(),
                area,
                outer: l_outline(0.0),
                inner: vec![hole(0.0)],
            },
            FakeFace {
                normal: Vector3::x(),
                area: 3.0 * 0.25,
                outer: rect_wire(Axis::X, 4.0, 0.0, 0.0, 3.0, 0.25),
                inner: vec![],
            },
        ],
    }
}
