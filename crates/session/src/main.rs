use anyhow::Context;

use clothy_client::ApiClient;
use clothy_session::Storefront;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    clothy_observability::init();

    let base_url = std::env::var("CLOTHY_API_BASE").unwrap_or_else(|_| {
        tracing::warn!("CLOTHY_API_BASE not set; using local dev default");
        "http://127.0.0.1:3001".to_string()
    });

    let mut session = Storefront::new(ApiClient::new(base_url));

    session
        .load_catalog()
        .await
        .context("initial catalog load failed")?;

    let (min, max) = session.filters().price_range;
    tracing::info!("price range {min:.2}..{max:.2}");

    for product in session.visible() {
        tracing::info!("{} | {} ({:.2})", product.id, product.name, product.price);
    }

    Ok(())
}
