use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::MailProvider;

/// Sends through an SMTP relay (Gmail by default) with the owner's account
/// as both the login and the sender address.
pub struct SmtpMailProvider {
    sender: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailProvider {
    pub fn new(host: &str, username: String, password: String) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .context("failed to configure SMTP relay")?
            .credentials(Credentials::new(username.clone(), password))
            .build();

        Ok(Self {
            sender: username,
            transport,
        })
    }
}

#[async_trait]
impl MailProvider for SmtpMailProvider {
    async fn send_email(&self, to: &[String], subject: &str, html: &str) -> anyhow::Result<()> {
        let mut builder = Message::builder()
            .from(self.sender.parse().context("invalid sender address")?)
            .subject(subject)
            .header(ContentType::TEXT_HTML);

        for recipient in to {
            let mailbox = recipient
                .parse()
                .with_context(|| format!("invalid recipient address: {recipient}"))?;
            builder = builder.to(mailbox);
        }

        let email = builder
            .body(html.to_string())
            .context("failed to assemble email")?;

        self.transport
            .send(email)
            .await
            .context("SMTP relay rejected the email")?;

        Ok(())
    }
}
