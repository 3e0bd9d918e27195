//! Band and linear scales mapping data domains to pixel ranges.
//!
//! Plain value types passed into the chart builders; each builder owns its
//! scales and no state is shared between charts.

/// Maps an ordered categorical domain onto evenly spaced bands.
///
/// `padding_inner` shrinks each band as a fraction of the step between band
/// starts; `padding_outer` reserves the same fraction of a step before the
/// first band and after the last. Bands are centered in the leftover space.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    end: f64,
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        Self {
            domain,
            start: range.0,
            end: range.1,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Set inner and outer padding together, as a fraction of the step.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding;
        self.padding_outer = padding;
        self
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Width of one band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Left edge of the band for `key`, or `None` for keys outside the
    /// domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.iter().position(|k| k == key)?;
        Some(self.offset() + self.step() * index as f64)
    }

    fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let denominator = (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        (self.end - self.start) / denominator
    }

    fn offset(&self) -> f64 {
        let n = self.domain.len() as f64;
        let used = self.step() * (n - self.padding_inner);
        self.start + (self.end - self.start - used) * 0.5
    }
}

/// Affine map from a numeric domain onto a pixel range. Ranges may run
/// backwards, which is how y axes invert.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }

    pub fn scale(&self, value: f64) -> f64 {
        if self.d1 == self.d0 {
            // Degenerate domain; land in the middle of the range.
            return (self.r0 + self.r1) / 2.0;
        }
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Roughly `count` round tick values covering the domain, stepping by
    /// 1, 2, or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.d0 <= self.d1 {
            (self.d0, self.d1)
        } else {
            (self.d1, self.d0)
        };
        if count == 0 || lo == hi {
            return vec![lo];
        }

        let step = tick_increment(lo, hi, count);
        if step > 0.0 {
            let first = (lo / step).ceil();
            let last = (hi / step).floor();
            if last < first {
                return Vec::new();
            }
            (0..=(last - first) as usize)
                .map(|i| (first + i as f64) * step)
                .collect()
        } else {
            let inverse = -step;
            let first = (lo * inverse).ceil();
            let last = (hi * inverse).floor();
            if last < first {
                return Vec::new();
            }
            (0..=(last - first) as usize)
                .map(|i| (first + i as f64) / inverse)
                .collect()
        }
    }
}

/// Tick step for the interval, snapped to 1, 2, or 5 times a power of ten.
/// Sub-unit steps are returned as the negated inverse so callers can divide
/// instead of multiplying by an inexact fraction.
fn tick_increment(lo: f64, hi: f64, count: usize) -> f64 {
    let step = (hi - lo) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn domain(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn unpadded_bands_tile_the_range() {
        let scale = BandScale::new(domain(&["a", "b", "c", "d"]), (50.0, 570.0));
        assert_close(scale.bandwidth(), 130.0);
        assert_close(scale.position("a").unwrap(), 50.0);
        assert_close(scale.position("c").unwrap(), 310.0);
        assert_eq!(scale.position("z"), None);
    }

    #[test]
    fn padded_bands_match_hand_computed_geometry() {
        // step = 130 / (3 - 0.2 + 0.4) = 40.625, bandwidth = 32.5,
        // first band starts at (130 - 40.625 * 2.8) / 2 = 8.125.
        let scale = BandScale::new(domain(&["a", "b", "c"]), (0.0, 130.0)).with_padding(0.2);
        assert_close(scale.bandwidth(), 32.5);
        assert_close(scale.position("a").unwrap(), 8.125);
        assert_close(scale.position("b").unwrap(), 48.75);
    }

    #[test]
    fn linear_scale_maps_and_inverts() {
        let scale = LinearScale::new((0.0, 100.0), (360.0, 30.0));
        assert_close(scale.scale(0.0), 360.0);
        assert_close(scale.scale(100.0), 30.0);
        assert_close(scale.scale(50.0), 195.0);
    }

    #[test]
    fn ticks_use_decade_steps() {
        let ticks = LinearScale::new((0.0, 97.0), (0.0, 1.0)).ticks(10);
        assert_eq!(ticks.len(), 10);
        assert_close(ticks[0], 0.0);
        assert_close(ticks[1], 10.0);
        assert_close(ticks[9], 90.0);
    }

    #[test]
    fn sub_unit_ticks_stay_exact() {
        let ticks = LinearScale::new((0.0, 1.0), (0.0, 1.0)).ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_close(ticks[3], 0.3);
        assert_close(ticks[10], 1.0);
    }
}
