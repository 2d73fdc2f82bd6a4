//! EmailJS Email Service Implementation
//!
//! Calls the EmailJS REST API (https://api.emailjs.com/api/v1.0/email/send)
//! using reqwest HTTP client. The template receives the visitor's fields
//! plus `to_email`.

use chrono::Utc;
use reqwest::Client;
use serde::Serialize;

use crate::{ContactMessage, EmailConfig, EmailError, EmailReceipt, EmailService};

const DEFAULT_BASE_URL: &str = "https://api.emailjs.com";

/// EmailJS send request body
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_email: &'a str,
}

/// EmailJS email service implementation
pub struct EmailJsService {
    client: Client,
    config: EmailConfig,
    base_url: String,
}

impl EmailJsService {
    pub fn new(config: EmailConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            client: Client::new(),
            config,
            base_url,
        }
    }

    fn build_request<'a>(
        &'a self,
        message: &'a ContactMessage,
    ) -> Result<SendRequest<'a>, EmailError> {
        let (Some(service_id), Some(template_id), Some(user_id)) = (
            self.config.service_id.as_deref(),
            self.config.template_id.as_deref(),
            self.config.user_id.as_deref(),
        ) else {
            return Err(EmailError::NotConfigured);
        };

        Ok(SendRequest {
            service_id,
            template_id,
            user_id,
            template_params: TemplateParams {
                name: &message.name,
                email: &message.email,
                subject: &message.subject,
                message: &message.message,
                to_email: self.config.contact_email.as_deref().unwrap_or_default(),
            },
        })
    }
}

#[async_trait::async_trait]
impl EmailService for EmailJsService {
    async fn send_contact(&self, message: ContactMessage) -> Result<EmailReceipt, EmailError> {
        if !self.config.is_configured() {
            return Err(EmailError::NotConfigured);
        }

        let body = self.build_request(&message)?;
        let url = format!("{}/api/v1.0/email/send", self.base_url);

        tracing::debug!(subject = %message.subject, "Sending EmailJS request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(EmailError::Response(format!(
                "EmailJS returned {}: {}",
                status, error_body
            )));
        }

        tracing::info!("Contact message relayed via EmailJS");

        Ok(EmailReceipt {
            provider: "emailjs".to_string(),
            sent_at: Utc::now(),
        })
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn service_name(&self) -> &'static str {
        "emailjs"
    }
}
