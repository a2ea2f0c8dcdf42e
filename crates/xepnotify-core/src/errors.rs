use thiserror::Error;

/// Result type alias using XepError
pub type Result<T> = std::result::Result<T, XepError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in structured log events and
/// in tests that assert on failure classes rather than message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Registry input
    /// Registry bytes are not well-formed XML or do not have the `xep-infos` shape
    InvalidRegistry,
    /// A required element (e.g. `number`, `proto-name`, `status`) is absent
    MissingField,
    /// A `status` element carries a value outside the known status set
    InvalidStatus,
    /// A number, date or flag could not be parsed
    InvalidValue,

    // Notifications
    /// Rendered notification text lacks a required metadata header
    InvalidNotification,

    // Integration/IO
    Io,
    /// SMTP settings are missing or unusable
    Config,
    /// The mail relay refused or dropped a message
    Transport,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidRegistry => "ERR_INVALID_REGISTRY",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidStatus => "ERR_INVALID_STATUS",
            ExErrorKind::InvalidValue => "ERR_INVALID_VALUE",
            ExErrorKind::InvalidNotification => "ERR_INVALID_NOTIFICATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Transport => "ERR_TRANSPORT",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional operation and XEP context.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    xep: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            xep: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the XEP label (number or proto name) the error refers to
    pub fn with_xep(mut self, xep: impl Into<String>) -> Self {
        self.xep = Some(xep.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn xep(&self) -> Option<&str> {
        self.xep.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(xep) = &self.xep {
            write!(f, " (xep: {})", xep)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for registry loading and notification handling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XepError {
    /// Registry file could not be read
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// Registry document is not valid `xep-infos` XML
    #[error("Invalid registry document: {message}")]
    InvalidRegistry { message: String },

    /// A `xep` entry lacks a required element
    #[error("XEP entry {xep} is missing required element <{element}>")]
    MissingElement { xep: String, element: String },

    /// Unknown status string
    #[error("Unknown XEP status: {value:?}")]
    InvalidStatus { value: String },

    /// XEP number is not a non-negative integer
    #[error("Invalid XEP number: {value:?}")]
    InvalidNumber { value: String },

    /// `accepted` attribute is neither `true` nor `false`
    #[error("Invalid accepted flag: {value:?}")]
    InvalidAcceptedFlag { value: String },

    /// A date element is not `YYYY-MM-DD`
    #[error("Invalid date in <{field}>: {value:?}")]
    InvalidDate { field: String, value: String },

    /// Rendered notification text cannot be read back
    #[error("Invalid notification: {reason}")]
    InvalidNotification { reason: String },
}

impl From<XepError> for ExError {
    fn from(err: XepError) -> Self {
        match err {
            XepError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_op("read_registry")
                .with_message(format!("{}: {}", path, message)),

            XepError::InvalidRegistry { message } => {
                ExError::new(ExErrorKind::InvalidRegistry).with_message(message)
            }

            XepError::MissingElement { xep, element } => ExError::new(ExErrorKind::MissingField)
                .with_xep(xep)
                .with_message(format!("missing <{}>", element)),

            XepError::InvalidStatus { value } => ExError::new(ExErrorKind::InvalidStatus)
                .with_message(format!("unknown status {:?}", value)),

            XepError::InvalidNumber { value } => ExError::new(ExErrorKind::InvalidValue)
                .with_message(format!("invalid number {:?}", value)),

            XepError::InvalidAcceptedFlag { value } => ExError::new(ExErrorKind::InvalidValue)
                .with_message(format!("invalid accepted flag {:?}", value)),

            XepError::InvalidDate { field, value } => ExError::new(ExErrorKind::InvalidValue)
                .with_message(format!("invalid date in <{}>: {:?}", field, value)),

            XepError::InvalidNotification { reason } => {
                ExError::new(ExErrorKind::InvalidNotification).with_message(reason)
            }
        }
    }
}

impl From<quick_xml::DeError> for XepError {
    fn from(err: quick_xml::DeError) -> Self {
        XepError::InvalidRegistry {
            message: err.to_string(),
        }
    }
}
