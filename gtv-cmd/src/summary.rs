//! Text summary of the dataset and its colour buckets.

use std::fmt;

use gtv_data::Dataset;
use gtv_heatmap::view::describe;
use gtv_heatmap::{ChartConfig, Scales};

/// One colour bucket of the heat map legend.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub color: &'static str,
    /// Absolute temperature bounds of the bucket.
    pub lower: f64,
    pub upper: f64,
    /// Observations that fall in the bucket.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub description: String,
    pub observations: usize,
    pub variance: Option<(f64, f64)>,
    pub buckets: Vec<Bucket>,
}

impl Summary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let buckets = match Scales::from_dataset(dataset, &ChartConfig::default()) {
            Some(scales) => {
                let mut counts = vec![0usize; scales.color.range().len()];
                for observation in &dataset.monthly_variance {
                    counts[scales.color.bucket(observation.variance)] += 1;
                }
                scales
                    .color
                    .range()
                    .iter()
                    .zip(counts)
                    .enumerate()
                    .filter_map(|(i, (color, count))| {
                        let (lower, upper) = scales.color.invert_extent(i)?;
                        Some(Bucket {
                            color: *color,
                            lower: dataset.base_temperature + lower,
                            upper: dataset.base_temperature + upper,
                            count,
                        })
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        Self {
            description: describe(dataset),
            observations: dataset.len(),
            variance: dataset.variance_range(),
            buckets,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f, "Observations: {}", self.observations)?;
        if let Some((lo, hi)) = self.variance {
            writeln!(f, "Variance: {:.3}℃ .. {:.3}℃", lo, hi)?;
        }
        if !self.buckets.is_empty() {
            writeln!(f, "Colour buckets:")?;
        }
        for bucket in &self.buckets {
            writeln!(
                f,
                "  {}  {:>6.2}℃ .. {:>6.2}℃  {:>5}",
                bucket.color, bucket.lower, bucket.upper, bucket.count
            )?;
        }
        Ok(())
    }
}

/// Load the dataset and print its summary.
pub async fn run_summary(input: Option<&str>, url: &str) -> anyhow::Result<()> {
    let dataset = crate::load_dataset(input, url).await?;
    print!("{}", Summary::from_dataset(&dataset));
    Ok(())
}
