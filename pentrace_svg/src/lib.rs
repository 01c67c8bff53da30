// Copyright 2025 the Pentrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pentrace_svg --heading-base-level=0

//! SVG path-data recording layer over the Pentrace drawing contract.
//!
//! [`PathRecorder`] wraps any [`DrawTarget`] and implements the contract
//! itself, so it is substitutable wherever the imperative drawing API is
//! expected. Every call is forwarded to the wrapped target unmodified, and at
//! the same time translated into SVG path-data tokens, so one call site
//! produces both a renderable geometric object and the textual description
//! that exactly reproduces it:
//!
//! ```
//! use pentrace_canvas::DrawTarget as _;
//! use pentrace_ref::RefTarget;
//! use pentrace_svg::PathRecorder;
//!
//! let mut rec = PathRecorder::new(RefTarget::new());
//! rec.move_to(10.0, 10.0);
//! rec.line_to(90.0, 10.0);
//! rec.close_path();
//! assert_eq!(rec.to_path_data(), "M10 10 L90 10 Z");
//! ```
//!
//! The emitted grammar is the `d`-attribute subset `M`/`L`/`C`/`Q`/`A`/`Z`:
//! each token is a command letter abutting its first argument, arguments are
//! space-separated, and [`PathRecorder::to_path_data`] returns the trimmed
//! buffer. Numbers use the default `f64` formatting (shortest round-trip, no
//! trailing `.0`); consumers wanting exact comparisons should parse tokens
//! rather than compare raw strings across hosts.
//!
//! Notes:
//! - Center-and-angle arcs and ellipses become endpoint-parameterized `A`
//!   tokens, with a synthesized `M` or `L` bridging the pen to the arc start
//!   when needed.
//! - `arc_to` fillets and `round_rect` corners become minor-arc `A` tokens;
//!   degenerate fillets degrade to straight lines, never errors.
//! - `add_path` appends the other recorder's exported text verbatim; an
//!   optional transform is applied to the composed geometry by the target
//!   only, never to the appended text.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Point;
use pentrace_canvas::{
    ARC_START_TOLERANCE, Affine, CornerRadii, DrawTarget, arc_flags, ellipse_point, fillet,
    sweep_delta,
};

/// Kind of the most recently emitted path token.
///
/// The recorder only consults this to detect the "current point was just
/// closed" condition before an arc, but it is exposed for tests and
/// diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cmd {
    /// Nothing has been emitted yet.
    #[default]
    None,
    /// A move token.
    Move,
    /// A line token.
    Line,
    /// A cubic curve token.
    Curve,
    /// A quadratic curve token.
    Quad,
    /// An elliptical-arc token.
    Arc,
    /// A close token.
    Close,
}

/// A drawing-API recorder that derives SVG path data alongside its target.
///
/// The recorder owns its target and forwards each call to it exactly once.
/// Tokens synthesized for decomposition (rectangle corners, rounded-rect
/// sides, arc gap bridging) are text-only and are not forwarded again; the
/// target receives the original high-level call and lowers it itself.
///
/// Pen state follows the calls: every segment-emitting operation leaves the
/// pen on its terminal coordinate, while `close_path` (and the closed loops
/// emitted by `rect`/`round_rect`) clears the pen entirely.
#[derive(Debug)]
pub struct PathRecorder<T> {
    target: T,
    data: String,
    pen: Option<Point>,
    last: Cmd,
}

impl<T: DrawTarget + Default> Default for PathRecorder<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: DrawTarget> PathRecorder<T> {
    /// Create a recorder over the given target.
    pub fn new(target: T) -> Self {
        Self {
            target,
            data: String::new(),
            pen: None,
            last: Cmd::None,
        }
    }

    /// Export the accumulated path data, trimmed.
    ///
    /// This is an idempotent read: it can be called at any time, any number
    /// of times, without mutating the recorder.
    pub fn to_path_data(&self) -> String {
        String::from(self.data.trim())
    }

    /// Returns the wrapped target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Consume the recorder, returning the wrapped target.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Returns the pen position, or `None` if no current point is defined.
    pub fn current_point(&self) -> Option<Point> {
        self.pen
    }

    /// Returns the kind of the most recently emitted token.
    pub fn last_cmd(&self) -> Cmd {
        self.last
    }

    fn put_move(&mut self, x: f64, y: f64) {
        let _ = write!(self.data, "M{x} {y} ");
        self.pen = Some(Point::new(x, y));
        self.last = Cmd::Move;
    }

    fn put_line(&mut self, x: f64, y: f64) {
        let _ = write!(self.data, "L{x} {y} ");
        self.pen = Some(Point::new(x, y));
        self.last = Cmd::Line;
    }

    fn put_close(&mut self) {
        self.data.push_str("Z ");
        self.pen = None;
        self.last = Cmd::Close;
    }

    /// Bridge the pen to an arc's mathematical start point.
    ///
    /// With no current point (or right after a close) this synthesizes a
    /// move; with the pen elsewhere, a line; with the pen already on the
    /// start (within tolerance), nothing. The bridging token is text-only:
    /// the target performs the same implicit connection itself.
    fn bridge_to(&mut self, start: Point) {
        if self.pen.is_none() || self.last == Cmd::Close {
            let _ = write!(self.data, "M{} {} ", start.x, start.y);
        } else if let Some(p) = self.pen {
            if (p - start).hypot() > ARC_START_TOLERANCE {
                let _ = write!(self.data, "L{} {} ", start.x, start.y);
            }
        }
    }

    fn put_arc(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, a0: f64, a1: f64, ccw: bool) {
        let start = ellipse_point(cx, cy, rx, ry, rotation, a0);
        let end = ellipse_point(cx, cy, rx, ry, rotation, a1);
        let da = sweep_delta(a0, a1, ccw);
        let (large, sweep) = arc_flags(da, ccw);
        self.bridge_to(start);
        let _ = write!(
            self.data,
            "A{rx} {ry} {} {} {} {} {} ",
            rotation.to_degrees(),
            u8::from(large),
            u8::from(sweep),
            end.x,
            end.y,
        );
        self.pen = Some(end);
        self.last = Cmd::Arc;
    }

    /// Corner arc for `round_rect`: a quarter-turn minor arc, always swept
    /// clockwise. Text-only; the following side's line resets the pen.
    fn put_corner(&mut self, r: f64, x: f64, y: f64) {
        let _ = write!(self.data, "A{r} {r} 0 0 1 {x} {y} ");
    }
}

impl<T: DrawTarget> DrawTarget for PathRecorder<T> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.target.move_to(x, y);
        self.put_move(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.target.line_to(x, y);
        self.put_line(x, y);
    }

    fn close_path(&mut self) {
        self.target.close_path();
        self.put_close();
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.target.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
        let _ = write!(self.data, "C{c1x} {c1y} {c2x} {c2y} {x} {y} ");
        self.pen = Some(Point::new(x, y));
        self.last = Cmd::Curve;
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.target.quadratic_curve_to(cx, cy, x, y);
        let _ = write!(self.data, "Q{cx} {cy} {x} {y} ");
        self.pen = Some(Point::new(x, y));
        self.last = Cmd::Quad;
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, a0: f64, a1: f64, ccw: bool) {
        self.target.arc(cx, cy, r, a0, a1, ccw);
        self.put_arc(cx, cy, r, r, 0.0, a0, a1, ccw);
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, r: f64) {
        self.target.arc_to(x1, y1, x2, y2, r);
        let Some(p0) = self.pen else {
            // No start point: record the fillet's two legs instead.
            self.put_move(x1, y1);
            self.put_line(x2, y2);
            return;
        };
        match fillet(p0, Point::new(x1, y1), Point::new(x2, y2), r) {
            None => self.put_line(x1, y1),
            Some(f) => {
                self.put_line(f.tangent1.x, f.tangent1.y);
                // A fillet is always the minor arc: large-arc is never set.
                let _ = write!(
                    self.data,
                    "A{r} {r} 0 0 {} {} {} ",
                    u8::from(f.clockwise),
                    f.tangent2.x,
                    f.tangent2.y,
                );
                self.pen = Some(f.tangent2);
                self.last = Cmd::Arc;
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
        self.target.ellipse(cx, cy, rx, ry, rotation, a0, a1, ccw);
        self.put_arc(cx, cy, rx, ry, rotation, a0, a1, ccw);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.target.rect(x, y, w, h);
        let _ = write!(
            self.data,
            "M{x} {y} L{} {y} L{} {} L{x} {} Z ",
            x + w,
            x + w,
            y + h,
            y + h,
        );
        self.pen = None;
        self.last = Cmd::Close;
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radii: impl Into<CornerRadii>) {
        let radii = radii.into();
        self.target.round_rect(x, y, w, h, radii);
        let r = radii.clamped(w, h);

        self.put_move(x + r.top_left, y);
        self.put_line(x + w - r.top_right, y);
        if r.top_right > 0.0 {
            self.put_corner(r.top_right, x + w, y + r.top_right);
        }
        self.put_line(x + w, y + h - r.bottom_right);
        if r.bottom_right > 0.0 {
            self.put_corner(r.bottom_right, x + w - r.bottom_right, y + h);
        }
        self.put_line(x + r.bottom_left, y + h);
        if r.bottom_left > 0.0 {
            self.put_corner(r.bottom_left, x, y + h - r.bottom_left);
        }
        self.put_line(x, y + r.top_left);
        if r.top_left > 0.0 {
            self.put_corner(r.top_left, x + r.top_left, y);
        }
        self.put_close();
    }

    fn add_path(&mut self, other: &Self, transform: Option<Affine>) {
        // The transform reaches the composed geometry through the target;
        // the appended text stays untransformed. Documented asymmetry.
        self.target.add_path(&other.target, transform);
        let text = other.to_path_data();
        if !text.is_empty() {
            self.data.push_str(&text);
            self.data.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::f64::consts::{FRAC_PI_2, PI};
    use pentrace_canvas::PathOp;
    use pentrace_ref::RefTarget;

    fn recorder() -> PathRecorder<RefTarget> {
        PathRecorder::new(RefTarget::new())
    }

    /// Split exported path data into `(command, arguments)` tokens.
    fn tokens(d: &str) -> Vec<(char, Vec<f64>)> {
        let mut out: Vec<(char, Vec<f64>)> = Vec::new();
        for part in d.split_whitespace() {
            let first = part.chars().next().expect("non-empty token part");
            if first.is_ascii_alphabetic() {
                let mut args = Vec::new();
                if part.len() > 1 {
                    args.push(part[1..].parse().expect("numeric argument"));
                }
                out.push((first, args));
            } else {
                out.last_mut()
                    .expect("argument before any command")
                    .1
                    .push(part.parse().expect("numeric argument"));
            }
        }
        out
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn move_to_sets_pen_and_token() {
        let mut rec = recorder();
        rec.move_to(3.0, 4.0);

        assert_eq!(rec.to_path_data(), "M3 4");
        let p = rec.current_point().expect("pen defined");
        assert_eq!((p.x, p.y), (3.0, 4.0));
        assert_eq!(rec.last_cmd(), Cmd::Move);
    }

    #[test]
    fn close_always_resets_pen() {
        let mut rec = recorder();
        rec.move_to(1.0, 1.0);
        rec.line_to(2.0, 2.0);
        rec.close_path();

        assert_eq!(rec.to_path_data(), "M1 1 L2 2 Z");
        assert!(rec.current_point().is_none());
        assert_eq!(rec.last_cmd(), Cmd::Close);

        // Closing with nothing open still emits a single Z.
        let mut rec = recorder();
        rec.close_path();
        assert_eq!(rec.to_path_data(), "Z");
        assert!(rec.current_point().is_none());
    }

    #[test]
    fn curve_tokens_and_pen() {
        let mut rec = recorder();
        rec.move_to(0.0, 0.0);
        rec.bezier_curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(rec.to_path_data(), "M0 0 C1 2 3 4 5 6");
        assert_eq!(rec.last_cmd(), Cmd::Curve);

        rec.quadratic_curve_to(7.0, 8.0, 9.0, 10.0);
        assert_eq!(rec.to_path_data(), "M0 0 C1 2 3 4 5 6 Q7 8 9 10");
        let p = rec.current_point().expect("pen defined");
        assert_eq!((p.x, p.y), (9.0, 10.0));
        assert_eq!(rec.last_cmd(), Cmd::Quad);
    }

    #[test]
    fn quarter_clockwise_arc_flags() {
        let mut rec = recorder();
        rec.arc(0.0, 0.0, 5.0, 0.0, FRAC_PI_2, false);

        let toks = tokens(&rec.to_path_data());
        let (cmd, args) = &toks[toks.len() - 1];
        assert_eq!(*cmd, 'A');
        assert_close(args[0], 5.0);
        assert_close(args[1], 5.0);
        assert_close(args[2], 0.0);
        assert_eq!(args[3], 0.0, "quarter turn is not a large arc");
        assert_eq!(args[4], 1.0, "clockwise sweeps positively");
        assert_close(args[5], 0.0);
        assert_close(args[6], 5.0);
    }

    #[test]
    fn half_counter_clockwise_arc_flags() {
        let mut rec = recorder();
        rec.arc(0.0, 0.0, 5.0, 0.0, PI, true);

        let toks = tokens(&rec.to_path_data());
        let (cmd, args) = toks.last().expect("arc token");
        assert_eq!(*cmd, 'A');
        assert_eq!(args[3], 0.0, "half turn is exactly not large");
        assert_eq!(args[4], 0.0, "counter-clockwise sweep");
    }

    #[test]
    fn arc_after_construction_prepends_move() {
        let mut rec = recorder();
        rec.arc(10.0, 0.0, 5.0, 0.0, FRAC_PI_2, false);

        let toks = tokens(&rec.to_path_data());
        assert_eq!(toks[0].0, 'M', "never a line without a current point");
        assert_close(toks[0].1[0], 15.0);
        assert_close(toks[0].1[1], 0.0);
        assert_eq!(toks[1].0, 'A');
    }

    #[test]
    fn arc_after_close_prepends_move() {
        let mut rec = recorder();
        rec.move_to(15.0, 0.0);
        rec.close_path();
        rec.arc(10.0, 0.0, 5.0, 0.0, FRAC_PI_2, false);

        let toks = tokens(&rec.to_path_data());
        assert_eq!(toks[2].0, 'M', "a closed pen bridges with a move");
    }

    #[test]
    fn arc_from_pen_on_start_emits_no_bridge() {
        let mut rec = recorder();
        rec.move_to(15.0, 0.0);
        rec.arc(10.0, 0.0, 5.0, 0.0, FRAC_PI_2, false);

        let toks = tokens(&rec.to_path_data());
        assert_eq!(toks.len(), 2, "only the move and the arc");
        assert_eq!(toks[1].0, 'A');

        // Within tolerance also counts as "on the start".
        let mut rec = recorder();
        rec.move_to(15.0 + 1e-8, 0.0);
        rec.arc(10.0, 0.0, 5.0, 0.0, FRAC_PI_2, false);
        assert_eq!(tokens(&rec.to_path_data()).len(), 2);
    }

    #[test]
    fn arc_away_from_pen_bridges_with_line() {
        let mut rec = recorder();
        rec.move_to(0.0, 0.0);
        rec.arc(10.0, 0.0, 5.0, 0.0, FRAC_PI_2, false);

        let toks = tokens(&rec.to_path_data());
        assert_eq!(toks[1].0, 'L');
        assert_close(toks[1].1[0], 15.0);
        assert_close(toks[1].1[1], 0.0);
    }

    #[test]
    fn arc_to_collinear_degrades_to_line() {
        let mut rec = recorder();
        rec.move_to(0.0, 0.0);
        rec.arc_to(10.0, 0.0, 20.0, 0.0, 5.0);

        assert_eq!(rec.to_path_data(), "M0 0 L10 0");
        assert_eq!(rec.last_cmd(), Cmd::Line);
    }

    #[test]
    fn arc_to_perpendicular_corner() {
        let mut rec = recorder();
        rec.move_to(0.0, 0.0);
        rec.arc_to(10.0, 0.0, 10.0, 10.0, 3.0);

        let toks = tokens(&rec.to_path_data());
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[1].0, 'L');
        assert!((toks[1].1[0] - 7.0).abs() < 1e-9);
        assert!(toks[1].1[1].abs() < 1e-9);

        let (cmd, args) = &toks[2];
        assert_eq!(*cmd, 'A');
        assert_close(args[0], 3.0);
        assert_eq!(args[3], 0.0, "fillet arcs are minor arcs");
        assert_eq!(args[4], 1.0, "right turn in y-down sweeps clockwise");
        assert!((args[5] - 10.0).abs() < 1e-9);
        assert!((args[6] - 3.0).abs() < 1e-9);

        let p = rec.current_point().expect("pen defined");
        assert!((p.x - 10.0).abs() < 1e-9 && (p.y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn arc_to_without_pen_records_both_legs() {
        let mut rec = recorder();
        rec.arc_to(10.0, 0.0, 20.0, 10.0, 5.0);

        assert_eq!(rec.to_path_data(), "M10 0 L20 10");
        assert_eq!(rec.last_cmd(), Cmd::Line);
        // Still a single forwarded call.
        assert_eq!(
            rec.target().ops(),
            &[PathOp::ArcTo {
                x1: 10.0,
                y1: 0.0,
                x2: 20.0,
                y2: 10.0,
                r: 5.0,
            }]
        );
    }

    #[test]
    fn ellipse_token_carries_rotation_in_degrees() {
        let mut rec = recorder();
        rec.ellipse(0.0, 0.0, 10.0, 5.0, FRAC_PI_2, 0.0, FRAC_PI_2, false);

        let toks = tokens(&rec.to_path_data());
        let (cmd, args) = toks.last().expect("arc token");
        assert_eq!(*cmd, 'A');
        assert_close(args[0], 10.0);
        assert_close(args[1], 5.0);
        assert_close(args[2], 90.0);
        assert_eq!(args[4], 1.0);
        // Rotated quarter arc ends on the negative x axis.
        assert_close(args[5], -5.0);
        assert_close(args[6], 0.0);
    }

    #[test]
    fn rect_is_an_independent_closed_loop() {
        let mut rec = recorder();
        rec.move_to(7.0, 8.0);
        rec.rect(0.0, 0.0, 10.0, 20.0);

        assert_eq!(rec.to_path_data(), "M7 8 M0 0 L10 0 L10 20 L0 20 Z");
        assert!(rec.current_point().is_none());
        assert_eq!(rec.last_cmd(), Cmd::Close);
    }

    #[test]
    fn round_rect_emits_four_corner_arcs() {
        let mut rec = recorder();
        rec.round_rect(0.0, 0.0, 100.0, 50.0, 10.0);

        let d = rec.to_path_data();
        assert!(d.starts_with("M10 0"), "starts at the top-left inset: {d}");
        assert!(d.ends_with('Z'), "closed loop: {d}");

        let arcs: Vec<_> = tokens(&d).into_iter().filter(|t| t.0 == 'A').collect();
        assert_eq!(arcs.len(), 4, "one arc per corner");
        for (_, args) in &arcs {
            assert_close(args[0], 10.0);
            assert_close(args[1], 10.0);
            assert_eq!(args[3], 0.0, "corner arcs are minor arcs");
            assert_eq!(args[4], 1.0, "corner arcs sweep clockwise");
        }
        assert!(rec.current_point().is_none());
        assert_eq!(rec.last_cmd(), Cmd::Close);
    }

    #[test]
    fn round_rect_with_zero_radius_is_all_lines() {
        let mut rec = recorder();
        rec.round_rect(0.0, 0.0, 100.0, 50.0, 0.0);

        let toks = tokens(&rec.to_path_data());
        assert_eq!(toks.first().map(|t| t.0), Some('M'));
        assert_eq!(toks.last().map(|t| t.0), Some('Z'));
        assert!(
            toks[1..toks.len() - 1].iter().all(|t| t.0 == 'L'),
            "move, lines, close and nothing else"
        );
    }

    #[test]
    fn round_rect_radii_are_clamped() {
        let mut rec = recorder();
        rec.round_rect(0.0, 0.0, 100.0, 50.0, 40.0);

        let arcs: Vec<_> = tokens(&rec.to_path_data())
            .into_iter()
            .filter(|t| t.0 == 'A')
            .collect();
        for (_, args) in &arcs {
            assert_close(args[0], 25.0);
        }
    }

    #[test]
    fn round_rect_per_corner_radii() {
        let mut rec = recorder();
        rec.round_rect(0.0, 0.0, 100.0, 50.0, (10.0, 0.0, 5.0, 0.0));

        let arcs: Vec<_> = tokens(&rec.to_path_data())
            .into_iter()
            .filter(|t| t.0 == 'A')
            .collect();
        assert_eq!(arcs.len(), 2, "zero-radius corners stay sharp");
        assert_close(arcs[0].1[0], 5.0);
        assert_close(arcs[1].1[0], 10.0);
    }

    #[test]
    fn export_is_idempotent() {
        let mut rec = recorder();
        rec.move_to(0.0, 0.0);
        rec.arc_to(10.0, 0.0, 10.0, 10.0, 3.0);
        rec.close_path();

        let first = rec.to_path_data();
        let second = rec.to_path_data();
        assert_eq!(first, second);
    }

    #[test]
    fn forwards_every_call_once() {
        let mut rec = recorder();
        rec.move_to(0.0, 0.0);
        rec.line_to(10.0, 0.0);
        rec.quadratic_curve_to(1.0, 2.0, 3.0, 4.0);
        rec.round_rect(0.0, 0.0, 10.0, 10.0, 2.0);
        rec.close_path();

        assert_eq!(
            rec.target().ops(),
            &[
                PathOp::MoveTo { x: 0.0, y: 0.0 },
                PathOp::LineTo { x: 10.0, y: 0.0 },
                PathOp::QuadraticCurveTo {
                    cx: 1.0,
                    cy: 2.0,
                    x: 3.0,
                    y: 4.0,
                },
                PathOp::RoundRect {
                    x: 0.0,
                    y: 0.0,
                    w: 10.0,
                    h: 10.0,
                    radii: CornerRadii::from_single_radius(2.0),
                },
                PathOp::ClosePath,
            ]
        );
    }

    #[test]
    fn add_path_appends_text_untransformed() {
        let mut other = recorder();
        other.move_to(0.0, 0.0);
        other.line_to(10.0, 0.0);

        let mut rec = recorder();
        rec.move_to(5.0, 5.0);
        rec.add_path(&other, Some(Affine::translate((5.0, 7.0))));

        // Text is verbatim; only the composed geometry sees the transform.
        assert_eq!(rec.to_path_data(), "M5 5 M0 0 L10 0");
        let p = rec.current_point().expect("pen untouched by add_path");
        assert_eq!((p.x, p.y), (5.0, 5.0));
        assert_eq!(rec.last_cmd(), Cmd::Move);

        let els = rec.target().path().elements();
        let kurbo::PathEl::MoveTo(moved) = els[1] else {
            panic!("expected composed move, got {:?}", els[1]);
        };
        assert_close(moved.x, 5.0);
        assert_close(moved.y, 7.0);
    }

    #[test]
    fn recorder_nests_as_a_target() {
        // A recorder is itself a DrawTarget, so recorders stack.
        let mut rec = PathRecorder::new(PathRecorder::new(RefTarget::new()));
        rec.move_to(1.0, 2.0);
        rec.line_to(3.0, 4.0);

        assert_eq!(rec.to_path_data(), "M1 2 L3 4");
        assert_eq!(rec.target().to_path_data(), "M1 2 L3 4");
        assert_eq!(rec.target().target().ops().len(), 2);
    }
}
