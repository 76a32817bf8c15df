//! Send one plain-text email using `SENDLIX_API_KEY` (and optionally
//! `SENDLIX_HOST`) from the environment.
//!
//! cargo run --example send_email -- sender@example.com someone@example.com

use anyhow::{Context, Result};
use sendlix::config::loader;
use sendlix::utils::logging::{self, LogLevel};
use sendlix::{Client, MailContent, MailOptions};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let from = args.next().context("usage: send_email <from> <to>")?;
    let to = args.next().context("usage: send_email <from> <to>")?;

    let config = loader::from_env()?;
    logging::run(&config, Some(LogLevel::INFO))?;

    let client = Client::connect(&config)?;
    let options = MailOptions {
        from: Some(from.into()),
        to: vec![to.into()],
        subject: Some("Hello from Sendlix".into()),
        content: MailContent::text("Sent with the Sendlix Rust client."),
        ..Default::default()
    };

    let outcome = client.email().send_email(&options, None).await?;
    info!(messages = ?outcome.messages, emails_left = outcome.emails_left, "done");

    client.close().await;
    Ok(())
}
