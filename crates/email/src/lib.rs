//! Folio Email Service
//!
//! Relays visitor messages from the contact form:
//! - EmailJS REST API for production delivery
//! - Mock email service for testing and development

use chrono::{DateTime, Utc};
use folio_common::config::env_or_legacy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod emailjs;
pub mod mock;

/// Values shipped in the sample environment file; treated as unset
const PLACEHOLDER_SERVICE_ID: &str = "service_id";
const PLACEHOLDER_TEMPLATE_ID: &str = "template_id";
const PLACEHOLDER_USER_ID: &str = "user_id";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email configuration error: {0}")]
    Configuration(String),

    #[error("Email service is not configured")]
    NotConfigured,

    #[error("Email request failed: {0}")]
    Request(String),

    #[error("Email provider rejected the message: {0}")]
    Response(String),
}

impl From<EmailError> for folio_common::Error {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::NotConfigured => {
                folio_common::Error::ServiceUnavailable(err.to_string())
            }
            EmailError::Configuration(_) | EmailError::Request(_) | EmailError::Response(_) => {
                tracing::error!(error = %err, "Contact message relay failed");
                folio_common::Error::Internal("Failed to send message".to_string())
            }
        }
    }
}

/// A message submitted through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Email delivery receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailReceipt {
    pub provider: String,
    pub sent_at: DateTime<Utc>,
}

/// Email service configuration
#[derive(Debug, Clone, Default)]
pub struct EmailConfig {
    /// Email service provider (emailjs, mock)
    pub provider: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub user_id: Option<String>,
    /// Inbox that receives contact messages
    pub contact_email: Option<String>,
    /// Override for the EmailJS API origin (tests, proxies)
    pub base_url: Option<String>,
}

impl EmailConfig {
    /// Create email config from environment variables
    pub fn from_env() -> Result<Self, EmailError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "emailjs".to_string());

        Ok(Self {
            provider,
            service_id: env_or_legacy("EMAILJS_SERVICE_ID", "VITE_EMAILJS_SERVICE_ID"),
            template_id: env_or_legacy("EMAILJS_TEMPLATE_ID", "VITE_EMAILJS_TEMPLATE_ID"),
            user_id: env_or_legacy("EMAILJS_USER_ID", "VITE_EMAILJS_USER_ID"),
            contact_email: env_or_legacy("CONTACT_EMAIL", "VITE_CONTACT_EMAIL"),
            base_url: std::env::var("EMAILJS_BASE_URL").ok(),
        })
    }

    /// All three credentials present and not left at their placeholders
    pub fn is_configured(&self) -> bool {
        fn set(value: &Option<String>, placeholder: &str) -> bool {
            value
                .as_deref()
                .is_some_and(|v| !v.is_empty() && v != placeholder)
        }

        set(&self.service_id, PLACEHOLDER_SERVICE_ID)
            && set(&self.template_id, PLACEHOLDER_TEMPLATE_ID)
            && set(&self.user_id, PLACEHOLDER_USER_ID)
    }
}

/// Email service trait for different implementations
#[async_trait::async_trait]
pub trait EmailService: Send + Sync {
    /// Relay a contact-form message to the site owner
    async fn send_contact(&self, message: ContactMessage) -> Result<EmailReceipt, EmailError>;

    /// Whether messages can be relayed at all
    fn is_configured(&self) -> bool;

    /// Get service name for logging
    fn service_name(&self) -> &'static str;
}

/// Email service factory
pub struct EmailServiceFactory;

impl EmailServiceFactory {
    /// Create email service based on configuration
    pub fn create(config: EmailConfig) -> Result<Box<dyn EmailService>, EmailError> {
        match config.provider.as_str() {
            "emailjs" => {
                tracing::info!(
                    configured = config.is_configured(),
                    "Creating EmailJS email service"
                );
                Ok(Box::new(emailjs::EmailJsService::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock email service");
                Ok(Box::new(mock::MockEmailService::new()))
            }
            provider => Err(EmailError::Configuration(format!(
                "Unknown email provider: {}. Supported providers: emailjs, mock",
                provider
            ))),
        }
    }
}
