//! sketchkit paths
//!
//! Smooth curves through arbitrary waypoints, rasterized to a polyline the
//! caller strokes once, plus the [`Path`] / [`PathBuilder`] pair that
//! describes what to stroke.
//!
//! ```rust
//! use sketch_core::Point;
//! use sketch_path::rasterize_spline;
//!
//! let pts = [Point::new(0.0, 0.0), Point::new(50.0, 20.0), Point::new(100.0, 0.0)];
//! let spline = rasterize_spline(&pts, 0.5, false).unwrap();
//! let polyline: Vec<Point> = spline.iter().collect();
//! assert_eq!(polyline.len(), 41);
//! assert_eq!(polyline[0], pts[0]);
//! assert_eq!(polyline[40], pts[2]);
//! ```

pub mod path;
pub mod spline;

pub use path::{Path, PathBuilder, PathCommand};
pub use sketch_core::Point;
pub use spline::{rasterize_spline, Spline, SplineIter, SplineOptions, DEFAULT_SAMPLE_STEP};

use thiserror::Error;

/// Path construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("A spline needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("Flattened coordinates must come in x,y pairs, got {0} values")]
    OddCoordinateCount(usize),

    #[error("Sample step must be in (0, 1] and leave a countable number of samples, got {0}")]
    InvalidStep(f32),
}

pub type Result<T> = std::result::Result<T, PathError>;
