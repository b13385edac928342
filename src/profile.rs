//! Profile aggregates.

use crate::float_types::Real;
use crate::kernel::Axis;
use crate::primitive::{Primitive, Wire};

/// The raw 2D cross-section of one extruded solid, as produced by
/// [`extract_profile`](crate::extract::extract_profile). Immutable once
/// built; the optimizer consumes it and produces a fresh
/// [`OrientedProfile`].
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Outer boundary loop.
    pub outer: Wire,
    /// Hole loops, in discovery order.
    pub holes: Vec<Wire>,
    /// Flattened outer-then-holes list, retained for renderers that do
    /// not care about boundary grouping.
    pub primitives: Vec<Primitive>,
    /// Extrusion depth in the target unit.
    pub thickness: Real,
    /// The 3D axis that was dropped during flattening.
    pub axis: Axis,
}

impl Profile {
    /// Assemble a profile, building the flattened list from the wires.
    pub fn new(outer: Wire, holes: Vec<Wire>, thickness: Real, axis: Axis) -> Self {
        let mut primitives = outer.clone();
        for hole in &holes {
            primitives.extend(hole.iter().cloned());
        }
        Profile {
            outer,
            holes,
            primitives,
            thickness,
            axis,
        }
    }
}

/// A profile after minimum-bounding-box rotation, translated so the
/// minimum corner of its bounding box sits at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedProfile {
    pub outer: Wire,
    pub holes: Vec<Wire>,
    /// Flattened outer-then-holes list of the rotated primitives.
    pub primitives: Vec<Primitive>,
    /// Bounding-box width after rotation.
    pub width: Real,
    /// Bounding-box height after rotation.
    pub height: Real,
    /// Net applied rotation in degrees, signed, for reporting.
    pub rotation_deg: Real,
    pub thickness: Real,
    pub axis: Axis,
}
