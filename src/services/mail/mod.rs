pub mod smtp;

use async_trait::async_trait;

/// The external mail-sending service, reduced to its contract: one call
/// that either delivers or errors.
#[async_trait]
pub trait MailProvider: Send + Sync {
    async fn send_email(&self, to: &[String], subject: &str, html: &str) -> anyhow::Result<()>;
}
