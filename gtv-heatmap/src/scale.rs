//! Coordinate and colour scales.
//!
//! Three kinds of scale cover the heat map:
//! - [`LinearScale`]: continuous year to horizontal pixel
//! - [`PointScale`]: month name to one of twelve evenly spaced rows
//! - [`QuantizeScale`]: variance to one of nine palette buckets
//!
//! [`Scales`] bundles the three for a given dataset.

use std::borrow::Borrow;

use gtv_data::{month_names, Dataset};

use crate::layout::ChartConfig;
use crate::palette;

/// Linear interpolation from a numeric domain onto a pixel range.
///
/// Inputs outside the domain extrapolate; a zero-width domain maps every
/// input to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }
}

/// Evenly spaced positions for an ordered, discrete domain.
///
/// The first domain value lands on `range.0` and the last on `range.1`, so a
/// range given high-to-low places the first value at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
}

impl<T> PointScale<T> {
    pub fn new(domain: Vec<T>, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Distance between adjacent points, always non-negative.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        (r1 - r0).abs() / (self.domain.len().saturating_sub(1).max(1)) as f64
    }

    /// Position of the `index`-th domain value.
    pub fn position_of(&self, index: usize) -> Option<f64> {
        let n = self.domain.len();
        if index >= n {
            return None;
        }
        let (r0, r1) = self.range;
        if n == 1 {
            return Some((r0 + r1) / 2.0);
        }
        Some(r0 + (r1 - r0) * index as f64 / (n - 1) as f64)
    }

    /// Position of a domain value, `None` if it is not in the domain.
    pub fn apply<Q>(&self, key: &Q) -> Option<f64>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.domain.iter().position(|d| <T as Borrow<Q>>::borrow(d) == key)?;
        self.position_of(index)
    }
}

/// Equal-width bucketing of a numeric domain onto a discrete range.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale<T> {
    domain: (f64, f64),
    range: Vec<T>,
    thresholds: Vec<f64>,
}

impl<T> QuantizeScale<T> {
    /// Build a scale over `domain`, `None` when `range` is empty.
    pub fn new(domain: (f64, f64), range: Vec<T>) -> Option<Self> {
        if range.is_empty() {
            return None;
        }
        let (x0, x1) = domain;
        let buckets = range.len();
        let thresholds = (1..buckets)
            .map(|i| x0 + (x1 - x0) * i as f64 / buckets as f64)
            .collect();
        Some(Self {
            domain,
            range,
            thresholds,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> &[T] {
        &self.range
    }

    /// Boundaries between adjacent buckets (`range.len() - 1` values).
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    /// Bucket index for `value`.
    ///
    /// Out-of-domain values clamp to the first or last bucket and a value on a
    /// threshold belongs to the upper bucket. A zero-width domain or a NaN
    /// value falls in the middle bucket.
    pub fn bucket(&self, value: f64) -> usize {
        if self.is_degenerate() || value.is_nan() {
            return self.range.len() / 2;
        }
        self.thresholds.partition_point(|t| *t <= value)
    }

    pub fn apply(&self, value: f64) -> &T {
        &self.range[self.bucket(value)]
    }

    /// `[lower, upper]` extent of the values that fall in bucket `index`.
    pub fn invert_extent(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.range.len() {
            return None;
        }
        let (x0, x1) = self.domain;
        let lower = if index == 0 {
            x0
        } else {
            self.thresholds[index - 1]
        };
        let upper = self.thresholds.get(index).copied().unwrap_or(x1);
        Some((lower, upper))
    }
}

/// The three scales of the heat map, derived from one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: PointScale<&'static str>,
    pub color: QuantizeScale<&'static str>,
    /// Inclusive year span of the dataset.
    pub years: (i32, i32),
}

impl Scales {
    /// Derive scales from `dataset`, `None` when it has no observations.
    pub fn from_dataset(dataset: &Dataset, config: &ChartConfig) -> Option<Self> {
        let (min_year, max_year) = dataset.year_range()?;
        let variance = dataset.variance_range().unwrap_or((0.0, 0.0));

        let x = LinearScale::new(
            (f64::from(min_year), f64::from(max_year)),
            (config.padding, config.width - config.padding),
        );
        let y = PointScale::new(
            month_names(),
            (config.height - config.padding, config.padding),
        );
        let color = QuantizeScale::new(variance, palette::cold_to_hot())?;

        log::info!(
            "Built scales: years {}-{}, variance {:.3}..{:.3}",
            min_year,
            max_year,
            variance.0,
            variance.1
        );

        Some(Self {
            x,
            y,
            color,
            years: (min_year, max_year),
        })
    }

    pub fn year_to_x(&self, year: i32) -> f64 {
        self.x.apply(f64::from(year))
    }

    pub fn month_to_y(&self, month_name: &str) -> Option<f64> {
        self.y.apply(month_name)
    }

    pub fn variance_to_color(&self, variance: f64) -> &'static str {
        *self.color.apply(variance)
    }

    /// Number of years the x axis spans, zero for a single-year dataset.
    pub fn year_span(&self) -> i32 {
        self.years.1 - self.years.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtv_data::Observation;

    fn sample_dataset() -> Dataset {
        let mut monthly_variance = Vec::new();
        for (i, year) in (1753..=1760).enumerate() {
            for month in 1..=12u32 {
                monthly_variance.push(Observation {
                    year,
                    month,
                    variance: (i as f64 - 3.0) * 0.7 + month as f64 * 0.05,
                });
            }
        }
        Dataset {
            base_temperature: 8.66,
            monthly_variance,
        }
    }

    #[test]
    fn linear_scale_maps_domain_onto_range() {
        let scale = LinearScale::new((1753.0, 2015.0), (100.0, 1400.0));
        assert_eq!(scale.apply(1753.0), 100.0);
        assert_eq!(scale.apply(2015.0), 1400.0);
        assert!((scale.apply(1884.0) - 750.0).abs() < 1e-9);
    }

    #[test]
    fn linear_scale_degenerate_domain_hits_midpoint() {
        let scale = LinearScale::new((1800.0, 1800.0), (100.0, 1400.0));
        assert_eq!(scale.apply(1800.0), 750.0);
        assert_eq!(scale.apply(1900.0), 750.0);
    }

    #[test]
    fn point_scale_inverted_range_puts_first_value_at_bottom() {
        let scale = PointScale::new(month_names(), (600.0, 100.0));
        assert_eq!(scale.apply("January"), Some(600.0));
        assert_eq!(scale.apply("December"), Some(100.0));
        assert!((scale.step() - 500.0 / 11.0).abs() < 1e-9);
        assert_eq!(scale.apply("Smarch"), None);
    }

    #[test]
    fn point_scale_single_value_is_centred() {
        let scale = PointScale::new(vec!["only"], (600.0, 100.0));
        assert_eq!(scale.apply("only"), Some(350.0));
    }

    #[test]
    fn quantize_scale_buckets_and_thresholds() {
        let scale = QuantizeScale::new((0.0, 9.0), (0..9).collect::<Vec<usize>>()).unwrap();
        assert_eq!(scale.thresholds(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(*scale.apply(0.0), 0);
        assert_eq!(*scale.apply(0.99), 0);
        assert_eq!(*scale.apply(1.0), 1);
        assert_eq!(*scale.apply(9.0), 8);
        assert_eq!(*scale.apply(-5.0), 0);
        assert_eq!(*scale.apply(50.0), 8);
        assert_eq!(scale.invert_extent(0), Some((0.0, 1.0)));
        assert_eq!(scale.invert_extent(8), Some((8.0, 9.0)));
        assert_eq!(scale.invert_extent(9), None);
    }

    #[test]
    fn quantize_scale_needs_a_range() {
        assert!(QuantizeScale::<&str>::new((0.0, 1.0), Vec::new()).is_none());
    }

    #[test]
    fn quantize_scale_degenerate_domain_uses_midpoint() {
        let scale = QuantizeScale::new((1.5, 1.5), palette::cold_to_hot()).unwrap();
        assert_eq!(scale.bucket(1.5), 4);
        assert_eq!(*scale.apply(1.5), "#ffffbf");
        assert_eq!(scale.bucket(f64::NAN), 4);
    }

    #[test]
    fn month_positions_are_twelve_distinct_and_inverse_to_month_order() {
        let dataset = sample_dataset();
        let scales = Scales::from_dataset(&dataset, &ChartConfig::default()).unwrap();
        let mut positions: Vec<f64> = dataset
            .monthly_variance
            .iter()
            .map(|o| scales.month_to_y(o.month_name().unwrap()).unwrap())
            .collect();

        let by_month: Vec<f64> = month_names()
            .into_iter()
            .map(|m| scales.month_to_y(m).unwrap())
            .collect();
        assert!(by_month.windows(2).all(|w| w[1] < w[0]));

        positions.sort_by(f64::total_cmp);
        positions.dedup();
        assert_eq!(positions.len(), 12);
    }

    #[test]
    fn year_to_x_is_monotonic() {
        let dataset = sample_dataset();
        let scales = Scales::from_dataset(&dataset, &ChartConfig::default()).unwrap();
        let mut observations = dataset.monthly_variance.clone();
        observations.sort_by_key(|o| o.year);
        let xs: Vec<f64> = observations.iter().map(|o| scales.year_to_x(o.year)).collect();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(scales.year_to_x(1753), 100.0);
        assert_eq!(scales.year_to_x(1760), 1400.0);
    }

    #[test]
    fn variance_colors_are_pure_and_use_nine_buckets() {
        let dataset = sample_dataset();
        let scales = Scales::from_dataset(&dataset, &ChartConfig::default()).unwrap();
        let (lo, hi) = dataset.variance_range().unwrap();
        assert_eq!(scales.color.domain(), (lo, hi));

        for o in &dataset.monthly_variance {
            assert_eq!(
                scales.variance_to_color(o.variance),
                scales.variance_to_color(o.variance)
            );
        }
        let mut buckets: Vec<usize> = dataset
            .monthly_variance
            .iter()
            .map(|o| scales.color.bucket(o.variance))
            .collect();
        buckets.sort();
        buckets.dedup();
        assert_eq!(buckets, (0..9).collect::<Vec<_>>());

        assert_eq!(scales.variance_to_color(lo), "#4575b4");
        assert_eq!(scales.variance_to_color(hi), "#d73027");
    }

    #[test]
    fn empty_dataset_has_no_scales() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: Vec::new(),
        };
        assert!(Scales::from_dataset(&dataset, &ChartConfig::default()).is_none());
    }
}
