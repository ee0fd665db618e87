use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{BookingPayload, BookingResponse};
use crate::services::email;
use crate::state::AppState;

pub const BOOKING_ACCEPTED: &str = "Đã nhận yêu cầu! Email xác nhận đã được gửi.";

/// `POST /api/book`. Renders the payload into the confirmation email and
/// sends one copy to the owner and one to the customer. Each request is
/// independent; two identical submissions send two emails.
pub async fn book(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingPayload>,
) -> Result<Json<BookingResponse>, AppError> {
    let subject = email::booking_subject(&payload);
    let html = email::render_booking_email(&payload);

    let recipients = [state.config.email_user.clone(), payload.email.clone()];

    state
        .mailer
        .send_email(&recipients, &subject, &html)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, customer = %payload.email, "failed to send booking email");
            AppError::Mail(e.to_string())
        })?;

    tracing::info!(customer = %payload.email, "booking confirmation sent");

    Ok(Json(BookingResponse {
        success: true,
        message: BOOKING_ACCEPTED.to_string(),
    }))
}
