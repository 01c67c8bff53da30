// Copyright 2025 the Pentrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pentrace_canvas --heading-base-level=0

//! Pentrace Canvas: the backend-agnostic drawing contract and shared path geometry.
//!
//! This crate defines [`DrawTarget`], the imperative drawing-API contract that
//! canvas-style path construction flows through, together with the plain-old-data
//! types and geometry helpers that every consumer of the contract shares:
//!
//! - **[`DrawTarget`]**: one method per drawing call (`move_to`, `arc`,
//!   `round_rect`, ...). Anything that can accept these calls and turn them into
//!   a renderable geometric object implements this trait. Recorders that layer
//!   extra behavior on top of another target implement it as well, so they are
//!   substitutable wherever the contract is expected.
//! - **[`CornerRadii`]**: the normalized per-corner radius record used by
//!   `round_rect`. A plain number converts to a uniform record at the API
//!   boundary.
//! - **[`PathOp`]**: POD mirror of each drawing call, for op logs and tests.
//! - **Geometry helpers**: [`sweep_delta`], [`arc_flags`], [`ellipse_point`],
//!   and [`fillet`] implement the angle-to-endpoint/flag conversion and the
//!   three-point tangent-arc construction that both text recorders and
//!   geometric targets need to agree on.
//!
//! The contract is intentionally infallible: malformed geometry degrades to
//! degenerate-but-valid output (see [`fillet`]) rather than signaling errors,
//! and numeric inputs are not validated.

#![no_std]

use core::f64::consts::PI;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Affine transform type used by the drawing contract.
pub type Affine = kurbo::Affine;

/// Tolerance below which the pen is considered to already sit on an arc's
/// mathematical start point, so no bridging segment is needed.
pub const ARC_START_TOLERANCE: f64 = 1e-6;

/// Corner radii for a rounded rectangle.
///
/// Radii are specified clockwise starting from the top-left corner. Absent
/// corners default to `0`, which degenerates that corner to a sharp join.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CornerRadii {
    /// The radius of the top-left corner.
    pub top_left: f64,
    /// The radius of the top-right corner.
    pub top_right: f64,
    /// The radius of the bottom-right corner.
    pub bottom_right: f64,
    /// The radius of the bottom-left corner.
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Create radii with potentially different values per corner.
    #[inline]
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Create radii with a single value for all corners.
    #[inline]
    pub const fn from_single_radius(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Clamp each radius to half the smaller dimension of a `w` by `h`
    /// rectangle, so opposite corner arcs can never overlap.
    #[inline]
    pub fn clamped(self, w: f64, h: f64) -> Self {
        let max_radius = w.min(h) / 2.0;
        Self {
            top_left: self.top_left.min(max_radius),
            top_right: self.top_right.min(max_radius),
            bottom_right: self.bottom_right.min(max_radius),
            bottom_left: self.bottom_left.min(max_radius),
        }
    }
}

impl From<f64> for CornerRadii {
    #[inline]
    fn from(radius: f64) -> Self {
        Self::from_single_radius(radius)
    }
}

impl From<(f64, f64, f64, f64)> for CornerRadii {
    #[inline]
    fn from(radii: (f64, f64, f64, f64)) -> Self {
        Self::new(radii.0, radii.1, radii.2, radii.3)
    }
}

/// POD mirror of a single drawing call.
///
/// Targets that keep an op log (see the reference target crate) push one of
/// these per received call, with the raw, unmodified parameters. `AddPath`
/// records only the transform; the composed geometry is carried by the target
/// itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathOp {
    /// `move_to(x, y)`.
    MoveTo {
        /// X coordinate of the new point.
        x: f64,
        /// Y coordinate of the new point.
        y: f64,
    },
    /// `line_to(x, y)`.
    LineTo {
        /// X coordinate of the line end.
        x: f64,
        /// Y coordinate of the line end.
        y: f64,
    },
    /// `close_path()`.
    ClosePath,
    /// `bezier_curve_to(c1x, c1y, c2x, c2y, x, y)`.
    BezierCurveTo {
        /// X coordinate of the first control point.
        c1x: f64,
        /// Y coordinate of the first control point.
        c1y: f64,
        /// X coordinate of the second control point.
        c2x: f64,
        /// Y coordinate of the second control point.
        c2y: f64,
        /// X coordinate of the curve end.
        x: f64,
        /// Y coordinate of the curve end.
        y: f64,
    },
    /// `quadratic_curve_to(cx, cy, x, y)`.
    QuadraticCurveTo {
        /// X coordinate of the control point.
        cx: f64,
        /// Y coordinate of the control point.
        cy: f64,
        /// X coordinate of the curve end.
        x: f64,
        /// Y coordinate of the curve end.
        y: f64,
    },
    /// `arc(cx, cy, r, a0, a1, ccw)`.
    Arc {
        /// X coordinate of the circle center.
        cx: f64,
        /// Y coordinate of the circle center.
        cy: f64,
        /// Circle radius.
        r: f64,
        /// Start angle in radians.
        a0: f64,
        /// End angle in radians.
        a1: f64,
        /// Whether the arc is drawn counter-clockwise.
        ccw: bool,
    },
    /// `arc_to(x1, y1, x2, y2, r)`.
    ArcTo {
        /// X coordinate of the corner point.
        x1: f64,
        /// Y coordinate of the corner point.
        y1: f64,
        /// X coordinate of the second tangent-line endpoint.
        x2: f64,
        /// Y coordinate of the second tangent-line endpoint.
        y2: f64,
        /// Fillet radius.
        r: f64,
    },
    /// `ellipse(cx, cy, rx, ry, rotation, a0, a1, ccw)`.
    Ellipse {
        /// X coordinate of the ellipse center.
        cx: f64,
        /// Y coordinate of the ellipse center.
        cy: f64,
        /// Radius along the (unrotated) X axis.
        rx: f64,
        /// Radius along the (unrotated) Y axis.
        ry: f64,
        /// Ellipse rotation in radians.
        rotation: f64,
        /// Start angle in radians.
        a0: f64,
        /// End angle in radians.
        a1: f64,
        /// Whether the arc is drawn counter-clockwise.
        ccw: bool,
    },
    /// `rect(x, y, w, h)`.
    Rect {
        /// X coordinate of the top-left corner.
        x: f64,
        /// Y coordinate of the top-left corner.
        y: f64,
        /// Rectangle width.
        w: f64,
        /// Rectangle height.
        h: f64,
    },
    /// `round_rect(x, y, w, h, radii)`, with radii normalized to a record.
    RoundRect {
        /// X coordinate of the top-left corner.
        x: f64,
        /// Y coordinate of the top-left corner.
        y: f64,
        /// Rectangle width.
        w: f64,
        /// Rectangle height.
        h: f64,
        /// Per-corner radii as received (not yet clamped).
        radii: CornerRadii,
    },
    /// `add_path(other, transform)`.
    AddPath {
        /// Transform applied to the composed geometry, if any.
        transform: Option<Affine>,
    },
}

/// The imperative drawing-API contract.
///
/// Each method corresponds to one drawing call and mutates the target's path
/// under construction. The parameterization follows the web canvas API:
/// circles and ellipses are specified by center and angles, fillets by a
/// corner and two tangent legs, and `round_rect` accepts either a uniform
/// radius or a per-corner record via [`CornerRadii`] conversions.
///
/// No method can fail. Degenerate inputs degrade to simpler geometry and
/// non-finite numbers pass through unvalidated; the contract offers no error
/// outcomes by design.
pub trait DrawTarget {
    /// Begin a new subpath at the given point.
    fn move_to(&mut self, x: f64, y: f64);

    /// Draw a line from the current point to the given point.
    fn line_to(&mut self, x: f64, y: f64);

    /// Close the current subpath.
    fn close_path(&mut self);

    /// Draw a cubic Bézier curve to `(x, y)` using two control points.
    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);

    /// Draw a quadratic Bézier curve to `(x, y)` using a single control point.
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);

    /// Draw a circular arc around `(cx, cy)` with radius `r` from angle `a0`
    /// to `a1` (radians), clockwise unless `ccw` is set.
    ///
    /// If the current point is defined and does not coincide with the arc's
    /// start point, the two are connected with a straight segment first.
    fn arc(&mut self, cx: f64, cy: f64, r: f64, a0: f64, a1: f64, ccw: bool);

    /// Draw a fillet of radius `r` tangent to the segments from the current
    /// point to `(x1, y1)` and from `(x1, y1)` to `(x2, y2)`.
    ///
    /// Degenerate configurations (no current point, zero-length legs, zero
    /// radius, collinear legs, or a radius that does not fit) degrade to
    /// straight lines; see [`fillet`] for the exact policy.
    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, r: f64);

    /// Draw an elliptical arc around `(cx, cy)` with radii `rx`/`ry`, rotated
    /// by `rotation` radians, from angle `a0` to `a1`.
    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        a0: f64,
        a1: f64,
        ccw: bool,
    );

    /// Add a rectangle as a fresh closed subpath, independent of the current
    /// point.
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Add a rounded rectangle as a fresh closed subpath.
    ///
    /// Radii are clamped to half the smaller rectangle dimension; a radius of
    /// `0` leaves that corner sharp.
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radii: impl Into<CornerRadii>);

    /// Compose another path of the same target type into this one.
    ///
    /// The optional transform applies to the composed geometry.
    fn add_path(&mut self, other: &Self, transform: Option<Affine>);
}

/// Signed angular extent of an arc from `a0` to `a1` in the requested
/// direction.
///
/// For a clockwise arc (`ccw == false`) a negative raw delta gains a full
/// turn; for a counter-clockwise arc a positive raw delta loses one. The
/// result is the sweep a canvas would actually draw, and its magnitude
/// decides the large-arc flag.
#[inline]
pub fn sweep_delta(a0: f64, a1: f64, ccw: bool) -> f64 {
    let mut da = a1 - a0;
    if !ccw && da < 0.0 {
        da += 2.0 * PI;
    }
    if ccw && da > 0.0 {
        da -= 2.0 * PI;
    }
    da
}

/// Derive the `(large_arc, sweep)` flag pair for an arc with signed extent
/// `da` drawn in the given direction.
///
/// The sweep flag is set for clockwise-drawn arcs, which matches the path
/// grammar's convention in a y-down coordinate system.
#[inline]
pub fn arc_flags(da: f64, ccw: bool) -> (bool, bool) {
    (da.abs() > PI, !ccw)
}

/// Point on a rotated ellipse at parameter angle `angle`.
///
/// Both axes are scaled by `rx`/`ry` and the result is rotated by `rotation`
/// radians around the center. Circular arcs use `rx == ry` and a rotation of
/// zero.
#[inline]
pub fn ellipse_point(cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, angle: f64) -> Point {
    let (sin_rot, cos_rot) = (rotation.sin(), rotation.cos());
    let (sin_a, cos_a) = (angle.sin(), angle.cos());
    Point::new(
        cx + rx * cos_a * cos_rot - ry * sin_a * sin_rot,
        cy + rx * cos_a * sin_rot + ry * sin_a * cos_rot,
    )
}

/// A tangent arc rounding the corner `p1` between two straight legs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fillet {
    /// Tangent point on the leg from the start point to the corner.
    pub tangent1: Point,
    /// Tangent point on the leg from the corner to the far point.
    pub tangent2: Point,
    /// Center of the tangent circle.
    pub center: Point,
    /// Radius of the tangent circle.
    pub radius: f64,
    /// Whether the arc from `tangent1` to `tangent2` runs clockwise
    /// (in y-down coordinates). Selects the grammar's sweep flag.
    pub clockwise: bool,
}

/// Compute the circular arc of radius `r` tangent to the segments `p0`–`p1`
/// and `p1`–`p2`.
///
/// Returns `None` for every degenerate configuration, checked in order:
///
/// 1. either leg has zero length, or the radius is zero;
/// 2. the legs are collinear, pointing the same way or straight through the
///    corner;
/// 3. the required tangent distance `r / tan(angle / 2)` exceeds either leg,
///    so the circle does not fit.
///
/// Callers are expected to degrade a `None` to a straight line to `p1`.
///
/// The inter-leg angle comes from a dot product clamped to `[-1, 1]` before
/// `acos`, so floating-point overshoot on unit vectors cannot leave the
/// inverse-cosine domain. The fillet arc is always the minor arc: the
/// large-arc flag it implies is never set.
pub fn fillet(p0: Point, p1: Point, p2: Point, r: f64) -> Option<Fillet> {
    let d1 = p0 - p1;
    let d2 = p2 - p1;
    let len1 = d1.hypot();
    let len2 = d2.hypot();
    if len1 == 0.0 || len2 == 0.0 || r == 0.0 {
        return None;
    }

    let v1 = d1 / len1;
    let v2 = d2 / len2;
    let angle = v1.dot(v2).clamp(-1.0, 1.0).acos();
    if angle == 0.0 || angle == PI {
        // Collinear legs: folded back onto each other or passing straight
        // through the corner. No tangent circle exists either way.
        return None;
    }

    let tangent_dist = r / (angle / 2.0).tan();
    if tangent_dist > len1 || tangent_dist > len2 {
        return None;
    }

    // The bisector of the two leg directions points into the corner interior;
    // the center sits on it at distance r / sin(angle / 2) from the corner.
    let bisector = v1 + v2;
    let bisector = bisector / bisector.hypot();
    let center = p1 + bisector * (r / (angle / 2.0).sin());

    Some(Fillet {
        tangent1: p1 + v1 * tangent_dist,
        tangent2: p1 + v2 * tangent_dist,
        center,
        radius: r,
        clockwise: v1.cross(v2) < 0.0,
    })
}
