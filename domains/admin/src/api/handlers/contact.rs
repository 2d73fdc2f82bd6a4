//! Contact form relay

use axum::{extract::State, Json};
use folio_common::{Error, Result, ValidatedJson};
use folio_email::ContactMessage;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::SuccessResponse;
use crate::api::middleware::AdminState;

/// Message submitted through the public contact form
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

impl From<ContactRequest> for ContactMessage {
    fn from(request: ContactRequest) -> Self {
        ContactMessage {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        }
    }
}

/// Whether the relay has credentials
#[derive(Debug, Serialize)]
pub struct ContactStatus {
    pub configured: bool,
}

/// **GET /api/contact/status**
pub async fn status(State(state): State<AdminState>) -> Json<ContactStatus> {
    Json(ContactStatus {
        configured: state.email.is_configured(),
    })
}

/// Relay a visitor's message to the site owner
///
/// **POST /api/contact**
///
/// 503 when no relay credentials are configured.
pub async fn send_message(
    State(state): State<AdminState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> Result<Json<SuccessResponse>> {
    if !state.email.is_configured() {
        return Err(Error::ServiceUnavailable(
            "Email service is not configured".to_string(),
        ));
    }

    let receipt = state.email.send_contact(request.into()).await?;
    tracing::info!(provider = %receipt.provider, "Contact message sent");
    Ok(Json(SuccessResponse::ok()))
}
