//! Integration tests for the portfolio page
//!
//! These tests drive the `Portfolio` root through whole user flows: language
//! switching, section reveal, the project overlay, contact submission against
//! a mocked EmailJS endpoint and the résumé download.

use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use portfolio_site::{
    config::{Config, EmailJsConfig},
    contact::{ContactField, SubmitOutcome},
    content::{ExperienceKind, ProjectCategory},
    dispatch::EmailJsClient,
    i18n::{keys, Language},
    page::Portfolio,
    resume,
    reveal::Section,
    toast::ToastVariant,
};

// ==================== Test Helpers ====================

/// Create a test config pointing EmailJS at `api_url`
fn create_test_config(api_url: &str, resume_dir: PathBuf) -> Config {
    Config {
        emailjs: Some(EmailJsConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            private_key: Some("private_test".to_string()),
            api_url: api_url.to_string(),
        }),
        default_language: Language::PORTUGUESE,
        resume_dir,
    }
}

fn create_page(api_url: &str) -> Portfolio<EmailJsClient> {
    let config = create_test_config(api_url, PathBuf::from("assets"));
    Portfolio::new(&config, EmailJsClient::new(config.emailjs_api_url()))
}

fn fill_contact_form(page: &mut Portfolio<EmailJsClient>) {
    page.update_contact_field(ContactField::Name, "Maria Silva");
    page.update_contact_field(ContactField::Email, "maria@example.com");
    page.update_contact_field(ContactField::Subject, "Freelance");
    page.update_contact_field(ContactField::Message, "Olá, vamos conversar?");
}

fn is_pt_br_timestamp(value: &str) -> bool {
    regex::Regex::new(r"^\d{2}/\d{2}/\d{4}, \d{2}:\d{2}$")
        .expect("valid regex")
        .is_match(value)
}

// ==================== Language Tests ====================

#[test]
fn test_every_label_key_translates_in_every_language() {
    let mut page = create_page("http://unused");
    for language in Language::all() {
        page.set_language(language);
        for key in keys::ALL {
            let text = page.translate(key);
            assert!(!text.is_empty(), "'{}' empty in {}", key, language);
        }
    }
}

#[test]
fn test_missing_key_falls_back_to_key() {
    let page = create_page("http://unused");
    assert_eq!(page.translate("someUnknownLabel"), "someUnknownLabel");
}

#[test]
fn test_language_switch_is_synchronous() {
    let mut page = create_page("http://unused");
    let before = page.render();
    assert_eq!(before.contact.form.submit, "Enviar");

    page.set_language(Language::ENGLISH);
    let after = page.render();
    assert_eq!(after.contact.form.submit, "Send");
    assert_eq!(after.language, Language::ENGLISH);
    assert_ne!(before.about.biography[0].paragraphs, after.about.biography[0].paragraphs);
    assert_ne!(
        before.experience.entries[0].title,
        after.experience.entries[0].title
    );
}

// ==================== Section Reveal Tests ====================

#[test]
fn test_sections_reveal_once_and_stay_visible() {
    let mut page = create_page("http://unused");
    assert!(!page.render().projects.visible);

    assert!(!page.observe_section(Section::Projects, 0.1));
    assert!(page.observe_section(Section::Projects, 0.2));
    assert!(!page.observe_section(Section::Projects, 0.0));
    assert!(page.render().projects.visible);
}

// ==================== Project Viewer Tests ====================

#[test]
fn test_project_overlay_carousel_wraps() {
    let mut page = create_page("http://unused");
    assert!(page.select_project("taskmanager"));
    let count = page.viewer().image_count();
    assert_eq!(count, 3);

    for _ in 0..count {
        page.next_image();
    }
    assert_eq!(page.viewer().index(), 0);

    page.prev_image();
    assert_eq!(page.viewer().index(), count - 1);

    page.go_to_image(1);
    let detail = page.render().detail.expect("overlay open");
    assert_eq!(detail.image, "assets/project-taskmanager-board.jpg");
}

#[test]
fn test_project_without_images_disables_carousel() {
    let mut page = create_page("http://unused");
    assert!(page.select_project("ecommerce"));
    page.next_image();

    let detail = page.render().detail.expect("overlay open");
    assert!(detail.carousel.is_none());
    assert_eq!(detail.image, "assets/project-ecommerce.jpg");
}

#[test]
fn test_filter_and_tabs() {
    let mut page = create_page("http://unused");
    page.set_project_filter(Some(ProjectCategory::Fullstack));
    assert_eq!(page.render().projects.cards.len(), 3);

    page.set_project_filter(Some(ProjectCategory::Frontend));
    assert!(page.render().projects.cards.is_empty());

    page.set_experience_tab(ExperienceKind::Education);
    let entries = page.render().experience.entries;
    assert_eq!(entries.len(), 2);
}

// ==================== Contact Submission Tests ====================

#[tokio::test]
async fn test_contact_submission_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "service_id": "service_test",
            "template_id": "template_test",
            "user_id": "public_test",
            "accessToken": "private_test",
            "template_params": {
                "name": "Maria Silva",
                "from_name": "Maria Silva",
                "email": "maria@example.com",
                "reply_to": "maria@example.com",
                "subject": "Freelance",
                "message": "Olá, vamos conversar?"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut page = create_page(&format!("{}/api/v1.0/email/send", mock_server.uri()));
    fill_contact_form(&mut page);

    let outcome = page.submit_contact().await;
    assert!(matches!(outcome, SubmitOutcome::Sent), "got {:?}", outcome);
    assert!(page.contact_form().is_empty());
    assert!(!page.render().contact.form.submitting);

    let toasts = page.take_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Mensagem enviada com sucesso!");
    assert_eq!(toasts[0].variant, ToastVariant::Default);
    assert!(page.take_toasts().is_empty());

    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording enabled");
    let body: serde_json::Value = requests[0].body_json().expect("json body");
    let time = body["template_params"]["time"].as_str().expect("time param");
    assert!(is_pt_br_timestamp(time), "unexpected timestamp '{}'", time);
}

#[tokio::test]
async fn test_contact_submission_failure_keeps_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The service ID is invalid"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut page = create_page(&format!("{}/send", mock_server.uri()));
    page.set_language(Language::ENGLISH);
    fill_contact_form(&mut page);

    let outcome = page.submit_contact().await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(page.contact_form().name, "Maria Silva");
    assert_eq!(page.contact_form().message, "Olá, vamos conversar?");
    assert!(!page.contact().is_submitting());

    let toasts = page.render().toasts;
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Error sending message");
    assert_eq!(toasts[0].variant, ToastVariant::Destructive);
}

#[tokio::test]
async fn test_incomplete_form_is_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut page = create_page(&mock_server.uri());
    page.update_contact_field(ContactField::Name, "Maria Silva");

    let outcome = page.submit_contact().await;
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert!(page.take_toasts().is_empty());
}

// ==================== Résumé Tests ====================

#[test]
fn test_resume_download_follows_language() {
    let source = TempDir::new().expect("temp dir");
    let dest = TempDir::new().expect("temp dir");
    for language in Language::all() {
        std::fs::write(
            source.path().join(resume::resume_file_name(language)),
            format!("%PDF {}", language.code()),
        )
        .expect("write résumé");
    }

    let config = create_test_config("http://unused", source.path().to_path_buf());
    let mut page = Portfolio::new(&config, EmailJsClient::new(config.emailjs_api_url()));

    let pt = assert_ok!(page.download_resume(dest.path()));
    assert!(pt.ends_with("CV - Alexsander Augusto Portugues.pdf"));

    page.set_language(Language::ENGLISH);
    let en = assert_ok!(page.download_resume(dest.path()));
    assert_eq!(std::fs::read_to_string(en).expect("read"), "%PDF en");
}

#[test]
fn test_resume_download_without_assets_fails() {
    let empty = TempDir::new().expect("temp dir");
    let config = create_test_config("http://unused", empty.path().to_path_buf());
    let page = Portfolio::new(&config, EmailJsClient::new(config.emailjs_api_url()));

    assert_err!(page.download_resume(empty.path()));
}

// ==================== View Model Tests ====================

#[test]
fn test_rendered_page_serializes_to_json() {
    let mut page = create_page("http://unused");
    page.set_language(Language::ENGLISH);
    page.select_project("analytics");

    let json = serde_json::to_value(page.render()).expect("Should serialize");
    assert_eq!(json["language"], "en");
    assert_eq!(json["nav"]["links"][0]["href"], "#home");
    assert_eq!(json["detail"]["carousel"]["count"], 4);
    assert_eq!(json["hero"]["social"][0]["opens_new_context"], true);
}
