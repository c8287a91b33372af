//! Render the portfolio page.
//!
//! Usage:
//!   cargo run                          # Render in the default language
//!   cargo run -- --lang en             # Render in English
//!   cargo run -- --lang en --json      # Dump the full view model as JSON
//!
//! Optional environment variables:
//! - EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, EMAILJS_PUBLIC_KEY (the contact
//!   form is disabled without them)
//! - EMAILJS_PRIVATE_KEY
//! - EMAILJS_API_URL
//! - DEFAULT_LANGUAGE (defaults to pt)
//! - RESUME_DIR (defaults to assets)

use anyhow::Result;
use portfolio_site::config::Config;
use portfolio_site::dispatch::EmailJsClient;
use portfolio_site::i18n::{LabelValidator, Language};
use portfolio_site::page::{Link, PageView, Portfolio};
use tracing::{info, warn};

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn print_links(links: &[Link]) {
    for link in links {
        let marker = if link.opens_new_context { " ↗" } else { "" };
        println!("  - {} ({}){}", link.label, link.href, marker);
    }
}

fn print_page(view: &PageView) {
    let languages: Vec<_> = view
        .nav
        .languages
        .iter()
        .map(|lang| {
            if lang.active {
                format!("[{}]", lang.native_name)
            } else {
                lang.native_name.to_string()
            }
        })
        .collect();

    println!("{} | {}", view.nav.brand, languages.join(" "));
    print_links(&view.nav.links);

    println!("\n# {} - {}", view.hero.name, view.hero.role);
    println!("{}", view.hero.subtitle);
    println!("{}: {}", view.hero.download_cv, view.hero.resume_file);

    println!("\n# {}", view.about.heading);
    for tab in &view.about.biography {
        println!("\n## {}", tab.title);
        for paragraph in tab.paragraphs {
            println!("{}", paragraph);
        }
    }
    println!("\n## {}", view.about.technical_skills);
    for group in &view.about.skill_groups {
        let skills: Vec<_> = group
            .skills
            .iter()
            .map(|skill| format!("{} {}%", skill.name, skill.proficiency))
            .collect();
        println!("{}: {}", group.title, skills.join(", "));
    }

    println!("\n# {}", view.projects.heading);
    for card in &view.projects.cards {
        let mut technologies = card.technologies.join(", ");
        if let Some(more) = &card.more {
            technologies.push_str(&format!(" {}", more));
        }
        println!("- {}: {} [{}]", card.title, card.description, technologies);
    }

    println!("\n# {}", view.experience.heading);
    for entry in &view.experience.entries {
        println!("- {} @ {} ({})", entry.title, entry.org, entry.period);
    }

    println!("\n# {}", view.contact.heading);
    for row in &view.contact.info {
        println!("{}: {}", row.label, row.value);
    }
    println!("{}", view.contact.follow_me);
    print_links(&view.contact.social);

    println!("\n{}", view.footer.copyright);
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
    let as_json = args.iter().any(|arg| arg == "--json");

    let report = LabelValidator::validate_registry();
    for error in &report.errors {
        warn!("Label table error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Label table warning: {}", warning);
    }

    // Rendering needs no EmailJS credentials
    let config = Config::page_from_env()?;
    let mut page = Portfolio::new(&config, EmailJsClient::new(config.emailjs_api_url()));

    if let Some(code) = arg_value(&args, "--lang") {
        page.set_language(Language::from_code(&code)?);
    }

    info!("Rendering portfolio in {}", page.language().native_name());
    let view = page.render();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_page(&view);
    }

    Ok(())
}
