use crate::config::AppConfig;
use crate::services::mail::MailProvider;

pub struct AppState {
    pub config: AppConfig,
    pub mailer: Box<dyn MailProvider>,
}
