//! HTTP access to the hosted records service (PostgREST-style API).

use serde::de::DeserializeOwned;


/// Fetch all rows a table query returns, as one wholesale batch. There is
/// no server-side pagination; every caller filters and sorts locally.
pub async fn fetch_table_rows<T: DeserializeOwned + std::fmt::Debug>(
    table: &str,
    query: &str,
) -> anyhow::Result<Vec<T>> {
    let t0 = std::time::Instant::now();
    let base_url =
        std::env::var("RECORDS_SERVICE_URL").unwrap_or("http://127.0.0.1:3000".to_string());
    let url = format!("{}/rest/v1/{}?{}", base_url, table, query);
    let client = reqwest::Client::new();

    let mut request = client.get(url).header("Accept", "application/json");
    if let Ok(api_key) = std::env::var("RECORDS_SERVICE_KEY") {
        request = request
            .header("apikey", api_key.clone())
            .header("Authorization", format!("Bearer {}", api_key));
    }

    let response = request.send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let rows: Vec<T> = serde_json::from_str(&response_txt)?;
    let dt_ms = t0.elapsed().as_millis();
    tracing::info!(
        "records service returned {} rows from {} in {}ms",
        rows.len(),
        table,
        dt_ms
    );
    Ok(rows)
}
