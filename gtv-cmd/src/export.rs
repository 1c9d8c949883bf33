//! CSV export of the dataset.
//!
//! Columns: `year,month,month_name,variance,temperature`, where
//! `temperature` is the absolute temperature `base + variance`.

use std::io::Write;

use gtv_data::Dataset;
use log::{info, warn};

/// Write every observation with a valid month as a CSV row.
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["year", "month", "month_name", "variance", "temperature"])?;

    let mut count = 0usize;
    for observation in &dataset.monthly_variance {
        let Some(month_name) = observation.month_name() else {
            warn!(
                "Skipping {} observation with month {}",
                observation.year, observation.month
            );
            continue;
        };
        wtr.write_record([
            observation.year.to_string(),
            observation.month.to_string(),
            month_name.to_string(),
            format!("{:.3}", observation.variance),
            format!("{:.3}", observation.temperature(dataset.base_temperature)),
        ])?;
        count += 1;
    }
    wtr.flush()?;
    Ok(count)
}

/// Load the dataset and export it to `output`.
pub async fn run_export(output: &str, input: Option<&str>, url: &str) -> anyhow::Result<()> {
    let dataset = crate::load_dataset(input, url).await?;
    let file = std::fs::File::create(output)?;
    let count = write_csv(&dataset, file)?;
    info!("Exported {} observations to {}", count, output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtv_data::Observation;

    #[test]
    fn writes_header_and_rows() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                Observation {
                    year: 1753,
                    month: 1,
                    variance: -1.5,
                },
                Observation {
                    year: 1800,
                    month: 6,
                    variance: 0.5,
                },
                Observation {
                    year: 1800,
                    month: 13,
                    variance: 0.0,
                },
            ],
        };
        let mut buf = Vec::new();
        let count = write_csv(&dataset, &mut buf).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "year,month,month_name,variance,temperature");
        assert_eq!(lines[1], "1753,1,January,-1.500,7.160");
        assert_eq!(lines[2], "1800,6,June,0.500,9.160");
        assert_eq!(lines.len(), 3);
    }
}
