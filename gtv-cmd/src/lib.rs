//! Command implementations for GTV CLI.
//!
//! Provides subcommands for downloading, summarising and exporting the
//! monthly temperature variance dataset.

use clap::Subcommand;
use gtv_data::{Dataset, DATASET_URL};

pub mod export;
pub mod fetch;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print the year range, variance range and colour buckets of the dataset
    Summary {
        /// Read the dataset from a local JSON file instead of the endpoint
        #[arg(short = 'i', long)]
        input: Option<String>,

        /// Dataset endpoint
        #[arg(long, default_value = DATASET_URL)]
        url: String,
    },

    /// Download the raw dataset JSON
    Fetch {
        /// Output path for the JSON document
        #[arg(short = 'o', long)]
        output: String,

        /// Dataset endpoint
        #[arg(long, default_value = DATASET_URL)]
        url: String,
    },

    /// Export observations as CSV with absolute temperatures
    Export {
        /// Output path for the CSV
        #[arg(short = 'o', long)]
        output: String,

        /// Read the dataset from a local JSON file instead of the endpoint
        #[arg(short = 'i', long)]
        input: Option<String>,

        /// Dataset endpoint
        #[arg(long, default_value = DATASET_URL)]
        url: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { input, url } => summary::run_summary(input.as_deref(), &url).await,
        Command::Fetch { output, url } => fetch::run_fetch(&output, &url).await,
        Command::Export { output, input, url } => {
            export::run_export(&output, input.as_deref(), &url).await
        }
    }
}

/// Load the dataset from a local JSON file if given, otherwise from `url`.
pub async fn load_dataset(input: Option<&str>, url: &str) -> anyhow::Result<Dataset> {
    match input {
        Some(path) => {
            log::info!("Reading dataset from {}", path);
            let body = std::fs::read_to_string(path)?;
            Ok(Dataset::from_json(&body)?)
        }
        None => {
            let client = fetch::client()?;
            Ok(gtv_data::api::fetch_dataset(&client, url).await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_dataset_from_local_file() {
        let path = std::env::temp_dir().join(format!("gtv-cmd-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"baseTemperature":8.66,"monthlyVariance":[{"year":1800,"month":6,"variance":0.5}]}"#,
        )
        .unwrap();

        let dataset = load_dataset(path.to_str(), DATASET_URL).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.monthly_variance[0].month_name(), Some("June"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("gtv-cmd-does-not-exist.json");
        assert!(load_dataset(path.to_str(), DATASET_URL).await.is_err());
    }
}
