// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used across the crate.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `FLATCUT_TOLERANCE` (e.g. `FLATCUT_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Returns the current epsilon value.
/// If not set yet, it tries `FLATCUT_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("FLATCUT_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set epsilon programmatically once (subsequent calls are ignored).
/// Call near program start: `flatcut::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const INCH: Real = 25.4;
pub const FOOT: Real = 25.4 * 12.0;
pub const MM: Real = 1.0;
pub const CM: Real = 10.0;
pub const METER: Real = 1000.0;

/// Factor converting kernel coordinates (always millimetres) to inches.
pub const MM_TO_INCH: Real = 1.0 / INCH;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Profile-extraction tunables
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Empirically chosen thresholds, not precision guarantees. Treat them
// as configuration: adjust here (or via `set_tolerance` for the generic
// epsilon) rather than assuming exactness downstream.

/// A face normal counts as parallel to a candidate axis when the
/// magnitude of their dot product exceeds this.
pub const AXIS_ALIGN_DOT: Real = 0.999;

/// Adjacent boundary edges count as perpendicular (rectangle check) when
/// the magnitude of their normalized dot product stays below this.
pub const RECTANGLE_DOT: Real = 0.05;

/// Boundary curves with a parametric span below this are kernel seam
/// markers and are skipped.
pub const DEGENERATE_SPAN: Real = 1e-3;

/// A circular curve whose parametric span is within this of τ is a full
/// circle rather than an arc.
pub const FULL_TURN_EPSILON: Real = 1e-6;

/// Slack, in degrees, when testing whether an arc's parametric midpoint
/// falls inside the naive counter-clockwise sweep.
pub const SWEEP_MIDPOINT_SLACK: Real = 0.5;

/// Tessellation samples per unit of parametric span for free-form curves.
pub const SAMPLES_PER_PARAM: Real = 50.0;

/// Minimum tessellation samples for a free-form curve.
pub const MIN_CURVE_SAMPLES: usize = 20;

/// Points sampled around a full circle when collecting hull candidates.
pub const CIRCLE_SAMPLES: usize = 64;

/// Minimum interior steps sampled along an arc.
pub const MIN_ARC_STEPS: usize = 8;
