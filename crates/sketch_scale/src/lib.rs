//! sketchkit scales
//!
//! Map an abstract domain onto a pixel range:
//!
//! - [`LinearScale`]: numeric interval to numeric interval
//! - [`BandScale`]: labels to evenly spaced bands with a queryable width
//! - [`PointScale`]: labels to evenly spaced points
//! - [`OrdinalScale`]: labels to arbitrary values, cycling the range
//!
//! Discrete scales return `None` for labels outside their domain.

mod band;
mod linear;
mod ordinal;

pub use band::{BandScale, PointScale, DEFAULT_BAND_PADDING, DEFAULT_POINT_PADDING};
pub use linear::LinearScale;
pub use ordinal::OrdinalScale;

use thiserror::Error;

/// Scale construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("Degenerate domain: {0}")]
    DegenerateDomain(String),

    #[error("Scale domain is empty")]
    EmptyDomain,

    #[error("Scale range is empty")]
    EmptyRange,

    #[error("Duplicate label at domain index {0}")]
    DuplicateLabel(usize),
}

pub type Result<T> = std::result::Result<T, ScaleError>;
