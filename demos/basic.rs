//! Basic NNTP session
//!
//! Run with: cargo run --example basic
//!
//! Environment: NNTP_HOST, NNTP_PORT, NNTP_TLS (default "1"), NNTP_USER, NNTP_PASS,
//! NNTP_GROUP. Set RUST_LOG=nntp_engine=trace to see the wire traffic.

use nntp_engine::{ArticleDate, Credentials, NntpClient, ServerConfig};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("NNTP_HOST").unwrap_or_else(|_| "news.example.com".to_string());
    let tls = std::env::var("NNTP_TLS").map_or(true, |v| v != "0");
    let port = std::env::var("NNTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(if tls { 563 } else { 119 });
    let config = ServerConfig::new(host, port, tls);

    println!("Connecting to {}...", config.address());
    let mut client = NntpClient::connect(Arc::new(config)).await?;
    println!("Connected: {}", client.banner());

    if let (Ok(user), Ok(pass)) = (std::env::var("NNTP_USER"), std::env::var("NNTP_PASS")) {
        client.authenticate(&Credentials::new(user, pass)).await?;
        println!("Authenticated!");
    }

    let caps = client.capabilities().await?;
    println!("Capabilities: {}", caps.labels().join(", "));

    let group = std::env::var("NNTP_GROUP").unwrap_or_else(|_| "misc.test".to_string());
    let info = client.select_group(&group).await?;
    println!(
        "Selected group '{}': {} articles ({}-{})",
        info.name, info.number, info.low, info.high
    );

    if info.number > 0 {
        let start = info.high.saturating_sub(10).max(info.low);
        let range = format!("{}-{}", start, info.high);
        println!("\nFetching OVER {}...", range);

        let entries = client.over(&range).await?;
        println!("Got {} entries:\n", entries.len());

        for entry in entries.iter().take(5) {
            let date = match &entry.date {
                ArticleDate::Parsed(date) => date.to_rfc2822(),
                ArticleDate::Unknown(raw) => format!("unparsed: {}", raw),
            };
            println!(
                "  #{}: {} (by {}, {} bytes, {})",
                entry.number, entry.subject, entry.from, entry.bytes, date
            );
        }

        if let Some(newest) = entries.last() {
            let headers = client.head(&newest.message_id).await?;
            println!("\nNewest article has {} header lines", headers.len());
        }
    }

    client.quit().await?;
    println!("\nConnection closed.");

    Ok(())
}
