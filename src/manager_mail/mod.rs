pub mod errors;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use crate::config::MailParameters;
use crate::manager_mail::errors::MailError;

const ALERT_SUBJECT: &str = "Flood Alert Notification";

pub struct Mail {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl Mail {
    /// Returns a new instance of the Mail struct. The sender and
    /// receiver addresses are validated here so that a bad address
    /// fails at startup rather than on the first alert.
    ///
    /// # Arguments
    ///
    /// * 'parameters' - smtp endpoint, credentials and addresses
    pub fn new(parameters: &MailParameters) -> Result<Self, MailError> {
        let credentials = Credentials::new(
            parameters.smtp_user.clone(),
            parameters.smtp_password.clone(),
        );

        let transport = SmtpTransport::starttls_relay(&parameters.smtp_endpoint)?
            .port(parameters.smtp_port)
            .credentials(credentials)
            .build();

        Ok(
            Self {
                transport,
                from: parameters.from.parse::<Mailbox>()?,
                to: parameters.to.parse::<Mailbox>()?,
            }
        )
    }

    /// Sends a flood alert mail carrying the given alert text
    ///
    /// # Arguments
    ///
    /// * 'alert' - the alert label to deliver
    pub fn send_alert(&self, alert: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(ALERT_SUBJECT)
            .body(format!(
                "Attention:\n\n{}\n\nPlease take necessary precautions.",
                alert
            ))?;

        self.transport.send(&message)?;

        Ok(())
    }
}
