mod api;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;

use crate::api::ApiClient;

fn api_base_url() -> String {
    std::env::var("SPENDTUI_API_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let client = ApiClient::new(api_base_url())?;
    run::as_tui(client).await
}
