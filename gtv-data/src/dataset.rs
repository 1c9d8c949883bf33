use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// The full document served by the endpoint.
///
/// Field names follow the JSON exactly (`baseTemperature`, `monthlyVariance`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Reference temperature in °C that every variance is relative to.
    pub base_temperature: f64,
    /// Observations in the order the endpoint returned them.
    pub monthly_variance: Vec<Observation>,
}

/// One (year, month, variance) temperature record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    /// Deviation in °C from the dataset's base temperature.
    pub variance: f64,
}

/// English month names ordered January through December.
pub fn month_names() -> Vec<&'static str> {
    (1..=12u8)
        .filter_map(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .collect()
}

impl Observation {
    /// English name of the observation's month, `None` outside 1..=12.
    pub fn month_name(&self) -> Option<&'static str> {
        let month = u8::try_from(self.month).ok()?;
        Month::try_from(month).ok().map(|m| m.name())
    }

    /// Zero-based month index (January = 0), `None` outside 1..=12.
    pub fn month_index(&self) -> Option<u32> {
        self.month_name().map(|_| self.month - 1)
    }

    /// Absolute temperature for this observation.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

impl Dataset {
    /// Parse a dataset document from a JSON string.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let dataset: Dataset = serde_json::from_str(body)?;
        log::info!(
            "Parsed dataset with {} observations (base temperature {:.2})",
            dataset.monthly_variance.len(),
            dataset.base_temperature
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Inclusive `(min, max)` year across all observations.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let years = self.monthly_variance.iter().map(|o| o.year);
        let min = years.clone().min()?;
        let max = years.max()?;
        Some((min, max))
    }

    /// Inclusive `(min, max)` variance across all observations.
    ///
    /// NaN variances are ignored; `None` if nothing comparable remains.
    pub fn variance_range(&self) -> Option<(f64, f64)> {
        self.monthly_variance
            .iter()
            .map(|o| o.variance)
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
