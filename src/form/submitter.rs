use crate::models::BookingRequest;

pub const SUBMIT_SUCCESS: &str = "Đã gửi yêu cầu thành công!";
pub const SERVER_ERROR_FALLBACK: &str = "Lỗi hệ thống.";
pub const CONNECTION_ERROR: &str = "Lỗi kết nối.";

/// Final state of one submission attempt. Transport problems never surface
/// as errors; every path collapses into one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server accepted the booking (2xx).
    Accepted,
    /// The server answered with a failure status and, when it sent one, its
    /// own message.
    Rejected { message: String },
    /// The request never completed, or the reply was not JSON.
    ConnectionFailed,
}

pub struct BookingClient {
    base_url: String,
    client: reqwest::Client,
}

impl BookingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Issues the single POST for a validated request and awaits the verdict.
    pub async fn submit(&self, request: &BookingRequest) -> SubmissionOutcome {
        let url = format!("{}/api/book", self.base_url);

        let response = match self.client.post(&url).json(&request.to_payload()).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(error = %error, "booking request did not reach the server");
                return SubmissionOutcome::ConnectionFailed;
            }
        };

        let status = response.status();
        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(error = %error, "booking response was not JSON");
                return SubmissionOutcome::ConnectionFailed;
            }
        };

        if status.is_success() {
            SubmissionOutcome::Accepted
        } else {
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .filter(|m| !m.is_empty())
                .unwrap_or(SERVER_ERROR_FALLBACK)
                .to_string();
            SubmissionOutcome::Rejected { message }
        }
    }
}
