use std::hash::Hash;

use indexmap::{Equivalent, IndexSet};

use crate::{Result, ScaleError};

pub const DEFAULT_BAND_PADDING: f32 = 0.1;
pub const DEFAULT_POINT_PADDING: f32 = 0.5;

/// Collect labels keeping their order; each label must appear once so that
/// positions stay injective.
fn unique_domain<L, I>(labels: I) -> Result<IndexSet<L>>
where
    L: Hash + Eq,
    I: IntoIterator<Item = L>,
{
    let mut domain = IndexSet::new();
    for (i, label) in labels.into_iter().enumerate() {
        if !domain.insert(label) {
            return Err(ScaleError::DuplicateLabel(i));
        }
    }
    if domain.is_empty() {
        return Err(ScaleError::EmptyDomain);
    }
    Ok(domain)
}

/// Labels mapped to the start of evenly spaced bands.
///
/// With `n` labels, `step = (r1 - r0) / (n + padding * (n - 1))`, each band
/// is `step * (1 - padding)` wide and consecutive bands start
/// `step * (1 + padding)` apart. The first band starts at `r0`.
#[derive(Clone, Debug)]
pub struct BandScale<L> {
    domain: IndexSet<L>,
    range_min: f32,
    padding: f32,
    step: f32,
    bandwidth: f32,
}

impl<L: Hash + Eq> BandScale<L> {
    pub fn new<I>(labels: I, range: [f32; 2], padding: f32) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
    {
        let domain = unique_domain(labels)?;
        let n = domain.len() as f32;
        let [r0, r1] = range;
        let step = (r1 - r0) / (n + padding * (n - 1.0));
        let bandwidth = step * (1.0 - padding);
        tracing::trace!(n = domain.len(), step, bandwidth, "band scale");
        Ok(Self {
            domain,
            range_min: r0,
            padding,
            step,
            bandwidth,
        })
    }

    /// Band scale with [`DEFAULT_BAND_PADDING`].
    pub fn with_default_padding<I>(labels: I, range: [f32; 2]) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
    {
        Self::new(labels, range, DEFAULT_BAND_PADDING)
    }

    /// Start of the band for `label`, or `None` for an unknown label.
    pub fn map<Q>(&self, label: &Q) -> Option<f32>
    where
        Q: ?Sized + Hash + Equivalent<L>,
    {
        let index = self.domain.get_index_of(label)?;
        Some(self.range_min + index as f32 * (self.step + self.padding * self.step))
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn domain(&self) -> impl Iterator<Item = &L> {
        self.domain.iter()
    }
}

/// Labels mapped to evenly spaced points, inset by `padding` steps on both
/// ends: `step = (r1 - r0) / (n - 1 + 2 * padding)`.
#[derive(Clone, Debug)]
pub struct PointScale<L> {
    domain: IndexSet<L>,
    range_min: f32,
    padding: f32,
    step: f32,
}

impl<L: Hash + Eq> PointScale<L> {
    /// A single label with zero padding has no step to divide by and is
    /// rejected; two or more labels are the normal case.
    pub fn new<I>(labels: I, range: [f32; 2], padding: f32) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
    {
        let domain = unique_domain(labels)?;
        let denom = domain.len() as f32 - 1.0 + padding * 2.0;
        if denom == 0.0 {
            return Err(ScaleError::DegenerateDomain(
                "point scale with one label needs non-zero padding".to_string(),
            ));
        }
        let [r0, r1] = range;
        Ok(Self {
            domain,
            range_min: r0,
            padding,
            step: (r1 - r0) / denom,
        })
    }

    /// Point scale with [`DEFAULT_POINT_PADDING`].
    pub fn with_default_padding<I>(labels: I, range: [f32; 2]) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
    {
        Self::new(labels, range, DEFAULT_POINT_PADDING)
    }

    pub fn map<Q>(&self, label: &Q) -> Option<f32>
    where
        Q: ?Sized + Hash + Equivalent<L>,
    {
        let index = self.domain.get_index_of(label)?;
        Some(self.range_min + self.step * (index as f32 + self.padding))
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn domain(&self) -> impl Iterator<Item = &L> {
        self.domain.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_positions_follow_domain_order() {
        let b = BandScale::new(["a", "b", "c", "d"], [0.0, 400.0], 0.0).unwrap();
        assert_eq!(b.map("a"), Some(0.0));
        assert_eq!(b.map("c"), Some(200.0));
        assert_eq!(b.map("z"), None);
    }

    #[test]
    fn band_padding_spreads_band_starts() {
        let b = BandScale::new(["a", "b", "c"], [0.0, 340.0], 0.2).unwrap();
        // step = 340 / (3 + 0.2 * 2) = 100
        assert!((b.step() - 100.0).abs() < 1e-4);
        assert!((b.bandwidth() - 80.0).abs() < 1e-4);
        assert!((b.map("b").unwrap() - 120.0).abs() < 1e-4);
        assert!((b.map("c").unwrap() - 240.0).abs() < 1e-4);
    }

    #[test]
    fn band_rejects_duplicates_and_empty_domains() {
        assert_eq!(
            BandScale::new(["a", "b", "a"], [0.0, 1.0], 0.1).unwrap_err(),
            ScaleError::DuplicateLabel(2)
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            BandScale::new(empty, [0.0, 1.0], 0.1).unwrap_err(),
            ScaleError::EmptyDomain
        );
    }

    #[test]
    fn string_labels_can_be_queried_with_str() {
        let labels = vec!["mon".to_string(), "tue".to_string()];
        let p = PointScale::with_default_padding(labels, [0.0, 200.0]).unwrap();
        // step = 200 / (1 + 1) = 100
        assert_eq!(p.map("mon"), Some(50.0));
        assert_eq!(p.map("tue"), Some(150.0));
        assert_eq!(p.map("wed"), None);
    }

    #[test]
    fn point_single_label() {
        let p = PointScale::new(["only"], [0.0, 10.0], 0.5).unwrap();
        assert_eq!(p.map("only"), Some(5.0));
        assert!(matches!(
            PointScale::new(["only"], [0.0, 10.0], 0.0),
            Err(ScaleError::DegenerateDomain(_))
        ));
    }
}
