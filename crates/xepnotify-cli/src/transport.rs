//! Mail transports: a printing one for dry runs and an SMTP session

use std::io::Write;
use std::time::SystemTime;

use lettre::message::header::{ContentType, HeaderName, HeaderValue};
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::PoolConfig;
use lettre::{SmtpTransport, Transport};
use xepnotify_core::{Envelope, Notification};

use crate::error::CliError;
use crate::settings::SmtpSettings;

/// Connections kept by the transport pool; one, so every send reuses the
/// connection opened by the initial check
const POOL_MAX_SIZE: u32 = 1;

/// Something that can deliver a composed notification
pub trait Mailer {
    /// # Errors
    ///
    /// Transport or addressing failures.
    fn send(&mut self, notification: &Notification, envelope: &Envelope) -> Result<(), CliError>;
}

/// Writes each rendered message followed by an empty line
pub struct DryRunMailer<W: Write> {
    out: W,
}

impl<W: Write> DryRunMailer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Mailer for DryRunMailer<W> {
    fn send(&mut self, notification: &Notification, envelope: &Envelope) -> Result<(), CliError> {
        writeln!(self.out, "{}", notification.render(envelope))?;
        self.out.flush()?;
        Ok(())
    }
}

/// STARTTLS session for the whole run, backed by lettre's connection pool
/// capped at a single connection; released on drop
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
    host: String,
}

impl SmtpMailer {
    /// Open the session and check that the server answers
    ///
    /// # Errors
    ///
    /// - `InvalidAddress` if the sender is not a valid mailbox
    /// - `Transport` if the relay cannot be set up or reached
    pub fn connect(settings: &SmtpSettings) -> Result<Self, CliError> {
        let from = parse_mailbox(&settings.from)?;

        let mut builder = SmtpTransport::starttls_relay(&settings.host)?
            .port(settings.port)
            .pool_config(PoolConfig::new().max_size(POOL_MAX_SIZE));
        if let Some((user, password)) = &settings.credentials {
            builder = builder.credentials(Credentials::new(
                user.clone(),
                password.expose().clone(),
            ));
        }
        let transport = builder.build();

        if !transport.test_connection()? {
            return Err(CliError::Transport(format!(
                "no answer from {}:{}",
                settings.host, settings.port
            )));
        }
        tracing::info!(
            host = %settings.host,
            port = settings.port,
            authenticated = settings.credentials.is_some(),
            "smtp session opened"
        );

        Ok(Self {
            transport,
            from,
            host: settings.host.clone(),
        })
    }
}

impl Mailer for SmtpMailer {
    fn send(&mut self, notification: &Notification, envelope: &Envelope) -> Result<(), CliError> {
        let message = build_message(notification, envelope, &self.from)?;
        let response = self.transport.send(&message)?;
        tracing::debug!(
            subject = %notification.subject,
            code = %response.code(),
            "message accepted by relay"
        );
        Ok(())
    }
}

impl Drop for SmtpMailer {
    fn drop(&mut self) {
        tracing::info!(host = %self.host, "smtp session released");
    }
}

/// Build the wire message: standard headers plus the `XSF-XEP-*` set
///
/// # Errors
///
/// `InvalidAddress` for unparseable recipients, `Transport` if the message
/// cannot be assembled.
pub fn build_message(
    notification: &Notification,
    envelope: &Envelope,
    from: &Mailbox,
) -> Result<Message, CliError> {
    let mut builder = Message::builder()
        .from(from.clone())
        .subject(notification.subject.clone())
        .date(SystemTime::from(envelope.date))
        .header(ContentType::TEXT_PLAIN);
    for to in &envelope.to {
        builder = builder.to(parse_mailbox(to)?);
    }

    let mut message = builder
        .body(notification.body.clone())
        .map_err(|e| CliError::Transport(e.to_string()))?;

    let headers = message.headers_mut();
    for (name, value) in notification.metadata.headers() {
        headers.insert_raw(HeaderValue::new(HeaderName::new_from_ascii_str(name), value));
    }
    Ok(message)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, CliError> {
    address.parse().map_err(|e: lettre::address::AddressError| {
        CliError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        }
    })
}
