// Copyright 2025 the Pentrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pentrace_ref --heading-base-level=0

//! Pentrace Reference Draw Target.
//!
//! This crate provides a small, stateful implementation of
//! [`DrawTarget`] for **call recording and geometry tracing**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It records every received drawing call as a [`PathOp`], so tests can
//!   assert on forwarded calls and their raw parameters.
//! - It simultaneously lowers the calls into a [`kurbo::BezPath`], the
//!   renderable geometric object a real backend would hand to its
//!   rasterizer. Arcs become cubic segments at a fixed tolerance.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Arc, BezPath, Point, Vec2};
use pentrace_canvas::{
    ARC_START_TOLERANCE, Affine, CornerRadii, DrawTarget, PathOp, ellipse_point, fillet,
    sweep_delta,
};

use core::f64::consts::{FRAC_PI_2, PI};

/// Tolerance used when lowering arcs to cubic Bézier segments.
const ARC_TOLERANCE: f64 = 0.1;

/// Reference implementation of the drawing contract.
///
/// This target:
/// - Logs one [`PathOp`] per received call, in order,
/// - Builds the equivalent [`BezPath`] geometry,
/// - Tracks the current point and subpath start the way a canvas would,
///   so implicit arc bridging and `close_path` behave like the host
///   surface this contract models.
#[derive(Default, Debug)]
pub struct RefTarget {
    ops: Vec<PathOp>,
    path: BezPath,
    current: Option<Point>,
    subpath_start: Option<Point>,
}

impl RefTarget {
    /// Create an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the log of received drawing calls.
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    /// Returns the geometry built so far.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Consume the target, returning the built geometry.
    pub fn into_path(self) -> BezPath {
        self.path
    }

    /// Returns the current point, if a subpath is in progress.
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// Clears the op log and the built geometry.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.path = BezPath::new();
        self.current = None;
        self.subpath_start = None;
    }

    fn push_move(&mut self, p: Point) {
        self.path.move_to(p);
        self.current = Some(p);
        self.subpath_start = Some(p);
    }

    fn push_line(&mut self, p: Point) {
        // A segment with no subpath starts one, as the host canvas does.
        if self.current.is_none() {
            self.push_move(p);
            return;
        }
        self.path.line_to(p);
        self.current = Some(p);
    }

    fn push_close(&mut self) {
        if self.current.is_some() || self.subpath_start.is_some() {
            self.path.close_path();
            // Closing returns the pen to the subpath start.
            self.current = self.subpath_start;
        }
    }

    /// Append an arc, bridging from the current point to its start the way
    /// the host canvas implicitly connects a new arc to the open subpath.
    fn append_arc(&mut self, arc: Arc) {
        let start = ellipse_point(
            arc.center.x,
            arc.center.y,
            arc.radii.x,
            arc.radii.y,
            arc.x_rotation,
            arc.start_angle,
        );
        match self.current {
            None => self.push_move(start),
            Some(p) if (p - start).hypot() > ARC_START_TOLERANCE => self.push_line(start),
            Some(_) => {}
        }
        self.path.extend(arc.append_iter(ARC_TOLERANCE));
        self.current = Some(ellipse_point(
            arc.center.x,
            arc.center.y,
            arc.radii.x,
            arc.radii.y,
            arc.x_rotation,
            arc.start_angle + arc.sweep_angle,
        ));
    }

    fn corner_arc(&mut self, cx: f64, cy: f64, r: f64, a0: f64) {
        self.append_arc(Arc {
            center: Point::new(cx, cy),
            radii: Vec2::new(r, r),
            start_angle: a0,
            sweep_angle: FRAC_PI_2,
            x_rotation: 0.0,
        });
    }
}

impl DrawTarget for RefTarget {
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(PathOp::MoveTo { x, y });
        self.push_move(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(PathOp::LineTo { x, y });
        self.push_line(Point::new(x, y));
    }

    fn close_path(&mut self) {
        self.ops.push(PathOp::ClosePath);
        self.push_close();
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.ops.push(PathOp::BezierCurveTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
        if self.current.is_none() {
            self.push_move(Point::new(c1x, c1y));
        }
        self.path
            .curve_to((c1x, c1y), (c2x, c2y), (x, y));
        self.current = Some(Point::new(x, y));
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(PathOp::QuadraticCurveTo { cx, cy, x, y });
        if self.current.is_none() {
            self.push_move(Point::new(cx, cy));
        }
        self.path.quad_to((cx, cy), (x, y));
        self.current = Some(Point::new(x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, a0: f64, a1: f64, ccw: bool) {
        self.ops.push(PathOp::Arc {
            cx,
            cy,
            r,
            a0,
            a1,
            ccw,
        });
        self.append_arc(Arc {
            center: Point::new(cx, cy),
            radii: Vec2::new(r, r),
            start_angle: a0,
            sweep_angle: sweep_delta(a0, a1, ccw),
            x_rotation: 0.0,
        });
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, r: f64) {
        self.ops.push(PathOp::ArcTo { x1, y1, x2, y2, r });
        let Some(p0) = self.current else {
            // No start point: the fillet degenerates to its two legs.
            self.push_move(Point::new(x1, y1));
            self.push_line(Point::new(x2, y2));
            return;
        };
        let p1 = Point::new(x1, y1);
        let p2 = Point::new(x2, y2);
        match fillet(p0, p1, p2, r) {
            None => self.push_line(p1),
            Some(f) => {
                self.push_line(f.tangent1);
                let a0 = (f.tangent1 - f.center).atan2();
                let a1 = (f.tangent2 - f.center).atan2();
                self.append_arc(Arc {
                    center: f.center,
                    radii: Vec2::new(f.radius, f.radius),
                    start_angle: a0,
                    sweep_angle: sweep_delta(a0, a1, !f.clockwise),
                    x_rotation: 0.0,
                });
            }
        }
    }

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
    ) {
        self.ops.push(PathOp::Ellipse {
            cx,
            cy,
            rx,
            ry,
            rotation,
            a0,
            a1,
            ccw,
        });
        self.append_arc(Arc {
            center: Point::new(cx, cy),
            radii: Vec2::new(rx, ry),
            start_angle: a0,
            sweep_angle: sweep_delta(a0, a1, ccw),
            x_rotation: rotation,
        });
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(PathOp::Rect { x, y, w, h });
        self.push_move(Point::new(x, y));
        self.push_line(Point::new(x + w, y));
        self.push_line(Point::new(x + w, y + h));
        self.push_line(Point::new(x, y + h));
        self.push_close();
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radii: impl Into<CornerRadii>) {
        let radii = radii.into();
        self.ops.push(PathOp::RoundRect { x, y, w, h, radii });
        let r = radii.clamped(w, h);

        self.push_move(Point::new(x + r.top_left, y));
        self.push_line(Point::new(x + w - r.top_right, y));
        if r.top_right > 0.0 {
            self.corner_arc(x + w - r.top_right, y + r.top_right, r.top_right, -FRAC_PI_2);
        }
        self.push_line(Point::new(x + w, y + h - r.bottom_right));
        if r.bottom_right > 0.0 {
            self.corner_arc(
                x + w - r.bottom_right,
                y + h - r.bottom_right,
                r.bottom_right,
                0.0,
            );
        }
        self.push_line(Point::new(x + r.bottom_left, y + h));
        if r.bottom_left > 0.0 {
            self.corner_arc(x + r.bottom_left, y + h - r.bottom_left, r.bottom_left, FRAC_PI_2);
        }
        self.push_line(Point::new(x, y + r.top_left));
        if r.top_left > 0.0 {
            self.corner_arc(x + r.top_left, y + r.top_left, r.top_left, PI);
        }
        self.push_close();
    }

    fn add_path(&mut self, other: &Self, transform: Option<Affine>) {
        self.ops.push(PathOp::AddPath { transform });
        let mut composed = other.path.clone();
        if let Some(xf) = transform {
            composed.apply_affine(xf);
        }
        self.path.extend(composed.elements().iter().copied());
    }
}
