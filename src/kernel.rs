//! Capability contract for the CAD-kernel collaborator.
//!
//! The extractor never touches a concrete geometry kernel. It consumes
//! solids through these three small traits, which mirror exactly what a
//! B-rep kernel already knows how to answer: bounding extents, planar
//! faces with normals and areas, and boundary curves with a classified
//! type, a parametric domain and point evaluation. Keeping the seam
//! this narrow lets the whole pipeline run against synthetic fakes in
//! tests.

use crate::float_types::Real;
use nalgebra::{Point2, Point3, Vector3};
use std::fmt;

/// The three principal axes. The extrusion axis is the one dropped when
/// flattening a solid to its 2D profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Enumeration order breaks extent ties during axis selection.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along the axis.
    pub fn unit(self) -> Vector3<Real> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }

    /// Project a 3D point to 2D by dropping this axis's coordinate.
    pub fn project(self, p: &Point3<Real>) -> Point2<Real> {
        match self {
            Axis::X => Point2::new(p.y, p.z),
            Axis::Y => Point2::new(p.x, p.z),
            Axis::Z => Point2::new(p.x, p.y),
        }
    }

    /// Index into a `[x, y, z]` extent triple.
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

/// Curve classification as reported by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Straight segment.
    Line,
    /// Circular curve (full circle or arc).
    Circle,
    /// Anything else: spline, ellipse, ... — tessellated on projection.
    Other,
}

/// One boundary curve of a face, with parametric evaluation.
pub trait BoundaryCurve {
    /// Classified curve type.
    fn kind(&self) -> CurveKind;

    /// Parametric domain `(first, last)`.
    fn parameter_range(&self) -> (Real, Real);

    /// Evaluate the 3D point at parameter `u`.
    fn point_at(&self, u: Real) -> Point3<Real>;

    /// Center and radius of the supporting circle. `None` unless
    /// [`kind`](Self::kind) is [`CurveKind::Circle`].
    fn circle(&self) -> Option<(Point3<Real>, Real)>;
}

/// A planar face of a solid.
///
/// Boundary wires are ordered curve sequences; the adapter materializes
/// curve handles on each call.
pub trait PlanarFace {
    type Curve: BoundaryCurve;

    /// Unit normal of the face plane.
    fn normal(&self) -> Vector3<Real>;

    /// Surface area, used to pick the representative profile face.
    fn area(&self) -> Real;

    /// The outer boundary wire, in traversal order.
    fn outer_wire(&self) -> Vec<Self::Curve>;

    /// Inner boundary wires (holes), in discovery order.
    fn inner_wires(&self) -> Vec<Vec<Self::Curve>>;
}

/// A single extruded solid.
pub trait Solid {
    type Face: PlanarFace;

    /// Axis-aligned bounding-box spans `[x, y, z]`.
    fn extents(&self) -> [Real; 3];

    /// Every planar face of the solid.
    fn planar_faces(&self) -> Vec<Self::Face>;
}
