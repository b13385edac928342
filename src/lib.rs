//! Flatten extruded solids into rotation-optimized 2D cutting profiles.
//!
//! Given a 3D solid known to be a uniform extrusion (consumed through
//! the small kernel traits in [`kernel`]), the crate detects the
//! extrusion axis, projects the profile face's boundary curves into
//! canonical 2D [`Primitive`]s, rotates the profile to the orientation
//! minimizing its axis-aligned bounding box, and normalizes it to the
//! origin for drawing export. The same rotation module serves existing
//! 2D drawings directly.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` import/export
//! - **svg-io**: `.svg` line-art export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod extract;
pub mod float_types;
pub mod kernel;
pub mod orient;
pub mod primitive;
pub mod profile;

pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::GeometryError;
pub use extract::extract_profile;
pub use kernel::{Axis, BoundaryCurve, CurveKind, PlanarFace, Solid};
pub use orient::{Oriented, optimal_rotation, orient_primitives, orient_profile};
pub use primitive::{Primitive, Wire};
pub use profile::{OrientedProfile, Profile};
