//! Mock Email Service Implementation
//!
//! Captures contact messages in memory for tests without external
//! dependencies.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::{ContactMessage, EmailError, EmailReceipt, EmailService};

/// Message captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub message: ContactMessage,
    pub captured_at: DateTime<Utc>,
}

/// Mock email service for testing
#[derive(Debug, Clone)]
pub struct MockEmailService {
    emails: Arc<Mutex<Vec<CapturedEmail>>>,
    configured: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            emails: Arc::new(Mutex::new(Vec::new())),
            configured: true,
        }
    }

    /// Create a mock that behaves like a relay with no credentials
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Get all captured messages
    pub fn get_all_emails(&self) -> Vec<CapturedEmail> {
        self.emails
            .lock()
            .map(|emails| emails.clone())
            .unwrap_or_default()
    }

    /// Get count of messages captured
    pub fn email_count(&self) -> usize {
        self.emails.lock().map(|emails| emails.len()).unwrap_or(0)
    }

    /// Clear all captured messages
    pub fn clear(&self) {
        if let Ok(mut emails) = self.emails.lock() {
            emails.clear();
        }
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailService for MockEmailService {
    async fn send_contact(&self, message: ContactMessage) -> Result<EmailReceipt, EmailError> {
        if !self.configured {
            return Err(EmailError::NotConfigured);
        }

        tracing::info!(from = %message.email, "Mock email service capturing contact message");

        let captured = CapturedEmail {
            message,
            captured_at: Utc::now(),
        };
        self.emails
            .lock()
            .map_err(|_| EmailError::Request("mock mailbox poisoned".to_string()))?
            .push(captured);

        Ok(EmailReceipt {
            provider: "mock".to_string(),
            sent_at: Utc::now(),
        })
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn service_name(&self) -> &'static str {
        "mock"
    }
}
