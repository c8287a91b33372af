//! Send one contact message through EmailJS, exactly as the page form does.
//!
//! Usage:
//!   cargo run --bin contact -- --name "Maria" --email maria@example.com \
//!       --subject "Proposta" --message "Olá!" [--lang en]
//!
//! Required environment variables:
//! - EMAILJS_SERVICE_ID
//! - EMAILJS_TEMPLATE_ID
//! - EMAILJS_PUBLIC_KEY

use anyhow::{bail, Context, Result};
use portfolio_site::config::Config;
use portfolio_site::contact::{ContactField, SubmitOutcome};
use portfolio_site::dispatch::EmailJsClient;
use portfolio_site::i18n::Language;
use portfolio_site::page::Portfolio;
use tracing::info;

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = Config::from_env()?;
    let mut page = Portfolio::new(&config, EmailJsClient::new(config.emailjs_api_url()));

    if let Some(code) = arg_value(&args, "--lang") {
        page.set_language(Language::from_code(&code)?);
    }

    for field in ContactField::ALL {
        let value = arg_value(&args, &format!("--{}", field.name()))
            .with_context(|| format!("--{} is required", field.name()))?;
        page.update_contact_field(field, value);
    }

    info!("Submitting contact form");
    let outcome = page.submit_contact().await;

    for toast in page.take_toasts() {
        println!("{}\n{}", toast.title, toast.description);
    }

    match outcome {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Failed(err) => Err(err).context("Contact message was not delivered"),
        SubmitOutcome::Invalid(err) => bail!("Contact form is invalid: {}", err),
        SubmitOutcome::InProgress => bail!("A submission is already in progress"),
    }
}
