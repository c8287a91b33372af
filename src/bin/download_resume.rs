//! Copy the résumé for a language out of the asset directory.
//!
//! Usage:
//!   cargo run --bin resume -- --lang en --out ~/Downloads
//!
//! Optional:
//! - RESUME_DIR (defaults to assets)

use anyhow::Result;
use portfolio_site::i18n::Language;
use portfolio_site::resume;
use std::path::PathBuf;

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn main() -> Result<()> {
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

    // No EmailJS credentials needed here
    let source_dir = std::env::var("RESUME_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("assets"));
    let language = match arg_value(&args, "--lang").or_else(|| std::env::var("DEFAULT_LANGUAGE").ok()) {
        Some(code) => Language::from_code(&code)?,
        None => Language::default(),
    };
    let dest_dir = arg_value(&args, "--out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let path = resume::download_resume(&source_dir, &dest_dir, language)?;
    println!("{}", path.display());

    Ok(())
}
