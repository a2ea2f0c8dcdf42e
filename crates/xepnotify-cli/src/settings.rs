//! SMTP configuration
//!
//! Layers, lowest precedence first:
//! 1. INI file given with `-c` (section `[smtp]`)
//! 2. Environment variables `XEPNOTIFY_SMTP__<OPTION>`
//! 3. Interactive prompts for whatever is still missing (terminal only)

use std::io::{self, BufRead, Write};
use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use xepnotify_core_types::Sensitive;

use crate::error::CliError;
use crate::prompt::ask;

pub const DEFAULT_SMTP_PORT: u16 = 587;

const ENV_PREFIX: &str = "XEPNOTIFY";

#[derive(Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    smtp: RawSmtp,
}

#[derive(Default, Deserialize)]
struct RawSmtp {
    host: Option<String>,
    port: Option<String>,
    user: Option<String>,
    password: Option<String>,
    from: Option<String>,
}

/// Possibly incomplete `[smtp]` options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmtpOptions {
    pub host: Option<String>,
    pub port: Option<String>,
    /// `Some("")` means anonymous
    pub user: Option<String>,
    pub password: Option<Sensitive<String>>,
    pub from: Option<String>,
}

/// Complete settings for opening an SMTP session
#[derive(Debug, Clone, PartialEq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub credentials: Option<(String, Sensitive<String>)>,
    pub from: String,
}

/// Load options from the optional INI file and the process environment
///
/// # Errors
///
/// `InvalidConfig` if the file is missing or unreadable.
pub fn load(path: Option<&Path>) -> Result<SmtpOptions, CliError> {
    load_with_env(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn load_with_env(path: Option<&Path>, env: Environment) -> Result<SmtpOptions, CliError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Ini));
    }
    let raw: RawConfig = builder.add_source(env).build()?.try_deserialize()?;

    tracing::debug!(
        config_file = ?path,
        has_host = raw.smtp.host.is_some(),
        has_from = raw.smtp.from.is_some(),
        "loaded smtp configuration"
    );

    Ok(SmtpOptions {
        host: non_empty(raw.smtp.host),
        port: non_empty(raw.smtp.port),
        user: raw.smtp.user.map(|user| user.trim().to_string()),
        password: raw.smtp.password.map(Sensitive::new),
        from: non_empty(raw.smtp.from),
    })
}

impl SmtpOptions {
    /// Ask for every missing option on the given terminal streams
    ///
    /// The password is only asked for when a user is set, through
    /// `read_password` so that it is not echoed. End of input leaves the
    /// remaining options unset.
    ///
    /// # Errors
    ///
    /// I/O errors of the underlying streams.
    pub fn extend_interactively<R, W, P>(
        &mut self,
        input: &mut R,
        output: &mut W,
        mut read_password: P,
    ) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        P: FnMut(&str) -> io::Result<String>,
    {
        if self.host.is_none() {
            self.host = ask("SMTP host: ", input, output)?.filter(|v| !v.is_empty());
        }
        if self.port.is_none() {
            let prompt = format!("SMTP port [{}]: ", DEFAULT_SMTP_PORT);
            self.port = ask(&prompt, input, output)?.map(|value| {
                if value.is_empty() {
                    DEFAULT_SMTP_PORT.to_string()
                } else {
                    value
                }
            });
        }
        if self.user.is_none() {
            self.user = ask("SMTP user (empty for anonymous): ", input, output)?;
        }
        if self.password.is_none() && self.user.as_deref().is_some_and(|u| !u.is_empty()) {
            self.password = Some(Sensitive::new(read_password("SMTP password: ")?));
        }
        if self.from.is_none() {
            self.from = ask("Sender address: ", input, output)?.filter(|v| !v.is_empty());
        }
        Ok(())
    }

    /// Validate into complete settings
    ///
    /// A missing port defaults to 587. A missing or empty user means
    /// anonymous.
    ///
    /// # Errors
    ///
    /// - `MissingConfig` naming the first missing required option
    /// - `InvalidConfig` if the port is not a number
    pub fn resolve(&self) -> Result<SmtpSettings, CliError> {
        let host = self
            .host
            .clone()
            .ok_or(CliError::MissingConfig { option: "host" })?;
        let port = match &self.port {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| CliError::InvalidConfig(format!("invalid smtp port {:?}", port)))?,
            None => DEFAULT_SMTP_PORT,
        };
        let credentials = match self.user.as_deref().filter(|u| !u.is_empty()) {
            Some(user) => {
                let password = self
                    .password
                    .clone()
                    .ok_or(CliError::MissingConfig { option: "password" })?;
                Some((user.to_string(), password))
            }
            None => None,
        };
        let from = self
            .from
            .clone()
            .ok_or(CliError::MissingConfig { option: "from" })?;

        Ok(SmtpSettings {
            host,
            port,
            credentials,
            from,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
