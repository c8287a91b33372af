//! Email dispatch: the external service that delivers contact messages.
//!
//! The contact form only needs "deliver these named fields, then succeed or
//! fail", so the collaborator is a small async trait. [`EmailJsClient`] is the
//! production implementation against the EmailJS REST API.

use crate::config::EmailJsConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info};

/// Template parameters sent to the email template, by name.
pub type TemplateParams = BTreeMap<String, String>;

/// A single delivery request, serialized as the EmailJS `email/send` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchRequest {
    pub service_id: String,
    pub template_id: String,
    /// Public key
    pub user_id: String,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub template_params: TemplateParams,
}

impl DispatchRequest {
    pub fn new(config: &EmailJsConfig, template_params: TemplateParams) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            access_token: config.private_key.clone(),
            template_params,
        }
    }
}

/// Delivery failed. Every variant is shown to the user the same way.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to reach email service: {0}")]
    Transport(String),

    #[error("email service rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("email service credentials are not configured")]
    NotConfigured,
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        DispatchError::Transport(err.to_string())
    }
}

#[async_trait]
pub trait EmailDispatch {
    /// Attempt delivery once. No response payload is consumed.
    async fn send(&self, request: &DispatchRequest) -> Result<(), DispatchError>;
}

/// EmailJS REST client.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    api_url: String,
}

impl EmailJsClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn from_config(config: &EmailJsConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl EmailDispatch for EmailJsClient {
    async fn send(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        debug!(
            "Dispatching email via service '{}' template '{}'",
            request.service_id, request.template_id
        );

        let response = self
            .http
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected { status, body });
        }

        info!("Email service accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn create_test_config(api_url: &str) -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            private_key: None,
            api_url: api_url.to_string(),
        }
    }

    fn create_params() -> TemplateParams {
        let mut params = TemplateParams::new();
        params.insert("name".to_string(), "Maria".to_string());
        params.insert("email".to_string(), "maria@example.com".to_string());
        params
    }

    // ==================== DispatchRequest Serialization Tests ====================

    #[test]
    fn test_request_serialization_without_access_token() {
        let config = create_test_config("http://unused");
        let request = DispatchRequest::new(&config, create_params());

        let json = serde_json::to_value(&request).expect("Should serialize");
        assert_eq!(json["service_id"], "service_test");
        assert_eq!(json["template_id"], "template_test");
        assert_eq!(json["user_id"], "public_test");
        assert_eq!(json["template_params"]["name"], "Maria");
        assert!(json.get("accessToken").is_none());
    }

    #[test]
    fn test_request_serialization_with_access_token() {
        let mut config = create_test_config("http://unused");
        config.private_key = Some("private_test".to_string());
        let request = DispatchRequest::new(&config, TemplateParams::new());

        let json = serde_json::to_value(&request).expect("Should serialize");
        assert_eq!(json["accessToken"], "private_test");
        assert!(json.get("access_token").is_none());
    }

    // ==================== DispatchError Tests ====================

    #[test]
    fn test_rejected_error_message() {
        let err = DispatchError::Rejected {
            status: 400,
            body: "The template ID is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "email service rejected message (400): The template ID is invalid"
        );
    }

    // ==================== EmailJsClient Tests ====================

    #[tokio::test]
    async fn test_send_success() {
        let mock_server = MockServer::start().await;
        let config = create_test_config(&format!("{}/api/v1.0/email/send", mock_server.uri()));
        let request = DispatchRequest::new(&config, create_params());

        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(&request))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EmailJsClient::from_config(&config);
        let result = client.send(&request).await;
        assert!(result.is_ok(), "unexpected error: {:?}", result);
    }

    #[tokio::test]
    async fn test_send_rejected() {
        let mock_server = MockServer::start().await;
        let config = create_test_config(&format!("{}/send", mock_server.uri()));

        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Public Key is invalid"))
            .mount(&mock_server)
            .await;

        let client = EmailJsClient::from_config(&config);
        let err = client
            .send(&DispatchRequest::new(&config, create_params()))
            .await
            .expect_err("403 must fail");

        match err {
            DispatchError::Rejected { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "Public Key is invalid");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_transport_failure() {
        // Nothing listens on port 9 locally
        let config = create_test_config("http://127.0.0.1:9/send");
        let client = EmailJsClient::from_config(&config);

        let err = client
            .send(&DispatchRequest::new(&config, create_params()))
            .await
            .expect_err("unreachable endpoint must fail");
        assert!(matches!(err, DispatchError::Transport(_)));
    }

    #[test]
    fn test_client_uses_configured_url() {
        let config = create_test_config("https://example.test/send");
        assert_eq!(
            EmailJsClient::from_config(&config).api_url(),
            "https://example.test/send"
        );
    }
}
