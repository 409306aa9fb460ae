use crate::{Result, ScaleError};

/// `f(v) = (v - d0) / (d1 - d0) * (r1 - r0) + r0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f32; 2],
    range: [f32; 2],
}

impl LinearScale {
    /// Equal domain bounds would divide by zero and are rejected.
    pub fn new(domain: [f32; 2], range: [f32; 2]) -> Result<Self> {
        if span(domain).is_none() {
            let [d0, d1] = domain;
            return Err(ScaleError::DegenerateDomain(format!(
                "linear domain bounds [{d0}, {d1}] must differ"
            )));
        }
        Ok(Self { domain, range })
    }

    pub fn domain(&self) -> [f32; 2] {
        self.domain
    }

    pub fn range(&self) -> [f32; 2] {
        self.range
    }

    /// Values outside the domain extrapolate linearly.
    pub fn map(&self, value: f32) -> f32 {
        let [d0, d1] = self.domain;
        at_fraction(self.range, (value - d0) / (d1 - d0))
    }

    /// Domain value mapped to `px`. A flat range maps every domain value to
    /// the same output and has no inverse.
    pub fn invert(&self, px: f32) -> Option<f32> {
        let r = span(self.range)?;
        Some(at_fraction(self.domain, (px - self.range[0]) / r))
    }

    /// `count` evenly spaced domain values, both bounds included. Fewer than
    /// two ticks cannot include both bounds, so two is the minimum.
    pub fn ticks(&self, count: usize) -> Vec<f32> {
        let last = count.max(2) - 1;
        (0..=last)
            .map(|i| {
                if i == last {
                    self.domain[1]
                } else {
                    at_fraction(self.domain, i as f32 / last as f32)
                }
            })
            .collect()
    }
}

/// Signed width of `[a, b]`, `None` when it is empty or not finite.
fn span([a, b]: [f32; 2]) -> Option<f32> {
    let width = b - a;
    (width != 0.0 && width.is_finite()).then_some(width)
}

fn at_fraction([a, b]: [f32; 2], t: f32) -> f32 {
    a + (b - a) * t
}
