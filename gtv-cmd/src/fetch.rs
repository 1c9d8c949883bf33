//! Download the dataset document to a local file.

use gtv_data::Dataset;
use log::info;

/// HTTP client shared by the commands that hit the endpoint.
pub fn client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?)
}

/// Fetch the dataset and write the raw JSON to `output`.
///
/// The body is decoded once before writing so a non-dataset response is
/// never saved.
pub async fn run_fetch(output: &str, url: &str) -> anyhow::Result<()> {
    let client = client()?;
    let body = gtv_data::api::fetch_body(&client, url).await?;
    let dataset = Dataset::from_json(&body)?;

    std::fs::write(output, &body)?;
    info!(
        "Saved {} observations ({} bytes) to {}",
        dataset.len(),
        body.len(),
        output
    );
    Ok(())
}
