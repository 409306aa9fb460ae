//! Cubic Hermite spline rasterization
//!
//! Each segment `P[cur] -> P[next1]` uses Catmull-Rom style tangents scaled
//! by the tension:
//!
//! ```text
//! t1 = (P[next1] - P[prev]) * tension
//! t2 = (P[next2] - P[cur])  * tension
//! ```
//!
//! Closed curves wrap every index modulo the point count. Open curves clamp
//! `prev` and `next2` to the end points, which turns the end tangents into
//! one-sided differences.

use std::borrow::Cow;
use std::iter::FusedIterator;

use sketch_core::Point;

use crate::path::{Path, PathBuilder};
use crate::{PathError, Result};

/// Parameter distance between two samples of a segment.
pub const DEFAULT_SAMPLE_STEP: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineOptions {
    pub tension: f32,
    pub closed: bool,
    /// Sampling granularity in `(0, 1]`. Rounded to a whole number of samples
    /// per segment.
    pub step: f32,
}

impl SplineOptions {
    pub fn new(tension: f32, closed: bool) -> Self {
        Self {
            tension,
            closed,
            step: DEFAULT_SAMPLE_STEP,
        }
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self::new(0.5, false)
    }
}

/// A validated spline ready to be sampled any number of times.
#[derive(Clone, Debug)]
pub struct Spline<'a> {
    points: Cow<'a, [Point]>,
    tension: f32,
    closed: bool,
    samples: usize,
}

/// Spline through `points` with the default sample step.
pub fn rasterize_spline(points: &[Point], tension: f32, closed: bool) -> Result<Spline<'_>> {
    Spline::new(points, SplineOptions::new(tension, closed))
}

impl<'a> Spline<'a> {
    pub fn new(points: impl Into<Cow<'a, [Point]>>, options: SplineOptions) -> Result<Self> {
        let points = points.into();
        if points.len() < 2 {
            return Err(PathError::TooFewPoints(points.len()));
        }
        if !(options.step > 0.0 && options.step <= 1.0) {
            return Err(PathError::InvalidStep(options.step));
        }
        let samples = ((1.0 / options.step).round() as usize).max(1);
        let segments = if options.closed {
            points.len()
        } else {
            points.len() - 1
        };
        // sample_count() must fit in usize
        if segments
            .checked_mul(samples)
            .and_then(|n| n.checked_add(1))
            .is_none()
        {
            return Err(PathError::InvalidStep(options.step));
        }
        let spline = Self {
            points,
            tension: options.tension,
            closed: options.closed,
            samples,
        };
        tracing::trace!(
            points = spline.points.len(),
            segments = spline.segment_count(),
            samples_per_segment = samples,
            closed = spline.closed,
            "spline"
        );
        Ok(spline)
    }

    /// Build from flattened `x0, y0, x1, y1, ...` coordinates.
    pub fn from_flat(coords: &[f32], options: SplineOptions) -> Result<Spline<'static>> {
        if coords.len() % 2 != 0 {
            return Err(PathError::OddCoordinateCount(coords.len()));
        }
        let points: Vec<Point> = coords
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();
        Spline::new(points, options)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Open curves have `n - 1` segments, closed ones `n`.
    pub fn segment_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Number of points [`iter`](Self::iter) yields.
    pub fn sample_count(&self) -> usize {
        1 + self.segment_count() * self.samples
    }

    /// Lazily sample the curve. The first segment starts at `t = 0`; every
    /// segment ends at `t = 1`, so joints are not repeated.
    pub fn iter(&self) -> SplineIter<'_> {
        SplineIter {
            points: &self.points,
            tension: self.tension,
            closed: self.closed,
            samples: self.samples,
            segment: 0,
            sample: 0,
            remaining: self.sample_count(),
        }
    }

    /// Polyline through the samples, closed if the curve is.
    pub fn to_path(&self) -> Path {
        let mut samples = self.iter();
        let mut builder = match samples.next() {
            Some(first) => PathBuilder::new().move_to(first),
            None => return Path::new(),
        };
        for p in samples {
            builder = builder.line_to(p);
        }
        if self.closed {
            builder = builder.close();
        }
        builder.build()
    }

    /// The exact curve as cubic Bezier segments, for surfaces that draw cubics
    /// natively. Hermite tangents become control points at one third.
    pub fn to_bezier_path(&self) -> Path {
        let mut builder = PathBuilder::new().move_to(self.points[0]);
        for segment in 0..self.segment_count() {
            let s = self.segment(segment);
            builder = builder.cubic_to(
                s.start + s.t1 * (1.0 / 3.0),
                s.end - s.t2 * (1.0 / 3.0),
                s.end,
            );
        }
        if self.closed {
            builder = builder.close();
        }
        builder.build()
    }

    fn segment(&self, segment: usize) -> Segment {
        Segment::new(&self.points, self.tension, self.closed, segment)
    }
}

impl<'s, 'a> IntoIterator for &'s Spline<'a> {
    type Item = Point;
    type IntoIter = SplineIter<'s>;

    fn into_iter(self) -> SplineIter<'s> {
        self.iter()
    }
}

struct Segment {
    start: Point,
    end: Point,
    t1: Point,
    t2: Point,
}

impl Segment {
    fn new(points: &[Point], tension: f32, closed: bool, cur: usize) -> Self {
        let n = points.len();
        let (prev, next1, next2) = if closed {
            ((cur + n - 1) % n, (cur + 1) % n, (cur + 2) % n)
        } else {
            (cur.saturating_sub(1), cur + 1, (cur + 2).min(n - 1))
        };
        Self {
            start: points[cur],
            end: points[next1],
            t1: (points[next1] - points[prev]) * tension,
            t2: (points[next2] - points[cur]) * tension,
        }
    }

    fn at(&self, t: f32) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let c1 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let c2 = -2.0 * t3 + 3.0 * t2;
        let c3 = t3 - 2.0 * t2 + t;
        let c4 = t3 - t2;
        self.start * c1 + self.end * c2 + self.t1 * c3 + self.t2 * c4
    }
}

/// Iterator over the sampled points of a [`Spline`].
#[derive(Clone, Debug)]
pub struct SplineIter<'s> {
    points: &'s [Point],
    tension: f32,
    closed: bool,
    samples: usize,
    segment: usize,
    sample: usize,
    remaining: usize,
}

impl Iterator for SplineIter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        // Integer sample index keeps t = 1 exact at every joint.
        let t = self.sample as f32 / self.samples as f32;
        let point = Segment::new(self.points, self.tension, self.closed, self.segment).at(t);

        self.remaining -= 1;
        self.sample += 1;
        if self.sample > self.samples {
            self.segment += 1;
            self.sample = 1;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SplineIter<'_> {}

impl FusedIterator for SplineIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathCommand;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn open_curve_passes_through_every_waypoint() {
        let pts = square();
        let spline = rasterize_spline(&pts, 0.5, false).unwrap();
        let samples: Vec<Point> = spline.iter().collect();
        assert_eq!(samples.len(), 61);
        assert_eq!(samples[0], pts[0]);
        assert_eq!(samples[20], pts[1]);
        assert_eq!(samples[40], pts[2]);
        assert_eq!(samples[60], pts[3]);
    }

    #[test]
    fn closed_curve_wraps_back_to_start() {
        let pts = square();
        let spline = rasterize_spline(&pts, 0.5, true).unwrap();
        assert_eq!(spline.segment_count(), 4);
        let samples: Vec<Point> = spline.iter().collect();
        assert_eq!(samples.len(), 81);
        assert_eq!(samples.first(), samples.last());
    }

    #[test]
    fn open_end_tangents_are_one_sided() {
        // With prev clamped to 0 the first tangent is P1 - P0, so a collinear
        // open curve never overshoots its first point.
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 0.0)];
        let spline = rasterize_spline(&pts, 0.5, false).unwrap();
        assert!(spline.iter().all(|p| p.x >= 0.0 && p.x <= 20.0 && p.y == 0.0));
    }

    #[test]
    fn iteration_restarts_from_the_beginning() {
        let pts = square();
        let spline = rasterize_spline(&pts, 0.3, true).unwrap();
        let a: Vec<Point> = spline.iter().collect();
        let b: Vec<Point> = (&spline).into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(spline.iter().len(), spline.sample_count());
    }

    #[test]
    fn step_controls_sample_density() {
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let coarse = Spline::new(&pts[..], SplineOptions::new(0.5, false).with_step(0.25)).unwrap();
        assert_eq!(coarse.iter().count(), 5);
        assert!(matches!(
            Spline::new(&pts[..], SplineOptions::new(0.5, false).with_step(0.0)),
            Err(PathError::InvalidStep(_))
        ));
        assert!(matches!(
            Spline::new(&pts[..], SplineOptions::new(0.5, true).with_step(f32::MIN_POSITIVE)),
            Err(PathError::InvalidStep(_))
        ));
        assert!(matches!(
            Spline::new(&pts[..], SplineOptions::new(0.5, false).with_step(1.5)),
            Err(PathError::InvalidStep(_))
        ));
    }

    #[test]
    fn flat_input_must_be_pairs_of_at_least_two_points() {
        let opts = SplineOptions::default();
        assert_eq!(
            Spline::from_flat(&[0.0, 0.0, 1.0], opts).unwrap_err(),
            PathError::OddCoordinateCount(3)
        );
        assert_eq!(
            Spline::from_flat(&[0.0, 0.0], opts).unwrap_err(),
            PathError::TooFewPoints(1)
        );
        let ok = Spline::from_flat(&[0.0, 0.0, 4.0, 2.0], opts).unwrap();
        assert_eq!(ok.points()[1], Point::new(4.0, 2.0));
    }

    #[test]
    fn paths_mirror_the_curve() {
        let pts = square();
        let spline = rasterize_spline(&pts, 0.5, true).unwrap();

        let poly = spline.to_path();
        assert_eq!(poly.len(), spline.sample_count() + 1);
        assert_eq!(poly.commands()[0], PathCommand::MoveTo(pts[0]));
        assert_eq!(poly.commands().last(), Some(&PathCommand::Close));

        let bezier = spline.to_bezier_path();
        assert_eq!(bezier.len(), 1 + 4 + 1);
        match bezier.commands()[1] {
            PathCommand::CubicTo { end, .. } => assert_eq!(end, pts[1]),
            other => panic!("expected cubic, got {other:?}"),
        }
    }
}
