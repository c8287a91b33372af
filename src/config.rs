use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS account identifiers used by the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    /// Public key, sent as `user_id`
    pub public_key: String,
    /// Private key, sent as `accessToken` when present
    pub private_key: Option<String>,
    pub api_url: String,
}

impl EmailJsConfig {
    /// Read the EmailJS account from the environment. No literal fallbacks.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            service_id: std::env::var("EMAILJS_SERVICE_ID")
                .context("EMAILJS_SERVICE_ID not set")?,
            template_id: std::env::var("EMAILJS_TEMPLATE_ID")
                .context("EMAILJS_TEMPLATE_ID not set")?,
            public_key: std::env::var("EMAILJS_PUBLIC_KEY")
                .context("EMAILJS_PUBLIC_KEY not set")?,
            private_key: std::env::var("EMAILJS_PRIVATE_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            api_url: std::env::var("EMAILJS_API_URL")
                .unwrap_or_else(|_| DEFAULT_EMAILJS_API_URL.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // EmailJS - `None` when only rendering
    pub emailjs: Option<EmailJsConfig>,

    // Page
    pub default_language: Language,

    // Assets
    pub resume_dir: PathBuf,
}

impl Config {
    /// Full configuration; EmailJS credentials are required.
    pub fn from_env() -> Result<Self> {
        Self::with_emailjs(Some(EmailJsConfig::from_env()?))
    }

    /// Configuration for render-only tools; EmailJS credentials are optional.
    pub fn page_from_env() -> Result<Self> {
        let emailjs = match EmailJsConfig::from_env() {
            Ok(emailjs) => Some(emailjs),
            Err(err) => {
                warn!("Contact form disabled: {}", err);
                None
            }
        };
        Self::with_emailjs(emailjs)
    }

    fn with_emailjs(emailjs: Option<EmailJsConfig>) -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim()).context("Invalid DEFAULT_LANGUAGE")?,
            Err(_) => Language::default(),
        };

        Ok(Self {
            emailjs,

            default_language,

            resume_dir: std::env::var("RESUME_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets")),
        })
    }

    /// Endpoint the EmailJS client posts to.
    pub fn emailjs_api_url(&self) -> &str {
        self.emailjs
            .as_ref()
            .map_or(DEFAULT_EMAILJS_API_URL, |emailjs| emailjs.api_url.as_str())
    }
}
