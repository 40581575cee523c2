use std::fmt;
use thiserror::Error;

pub const API_KEY_URL: &str = "https://platform.openai.com/api-keys";

/// Classified outcome of a failed remote exchange. Anything without an HTTP
/// status (connection failure, timeout, malformed reply) is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    Unauthorized,
    RateLimited,
    Http(u16),
    Unknown,
}

impl RemoteStatus {
    pub fn from_http(code: u16) -> Self {
        match code {
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            code => Self::Http(code),
        }
    }
}

impl fmt::Display for RemoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "401"),
            Self::RateLimited => write!(f, "429"),
            Self::Http(code) => write!(f, "{}", code),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SortError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("missing OPENAI_API_KEY")]
    MissingCredential,

    #[error("{message}")]
    Remote {
        status: RemoteStatus,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, SortError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SortError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Build a remote failure with the guidance message for the given status.
    pub fn remote(status: RemoteStatus) -> Self {
        Self::Remote {
            status,
            message: remote_failure_message(status),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Validation,
            Self::MissingCredential | Self::Config { .. } => ErrorCategory::Configuration,
            Self::Remote { .. } => ErrorCategory::Remote,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidInput { .. } => ErrorSeverity::High,
            Self::MissingCredential | Self::Config { .. } => ErrorSeverity::Critical,
            Self::Remote {
                status: RemoteStatus::RateLimited,
                ..
            } => ErrorSeverity::Medium,
            Self::Remote { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInput { .. } => {
                "Pass a JSON array of finite numbers, e.g. [6,2,9,1,4].".to_string()
            }
            Self::MissingCredential => credential_guidance(),
            Self::Config { .. } => {
                "Check OPENAI_BASE_URL and the credential file, then run again.".to_string()
            }
            Self::Remote {
                status: RemoteStatus::RateLimited,
                ..
            } => "Pause for a moment and retry.".to_string(),
            Self::Remote {
                status: RemoteStatus::Unauthorized,
                ..
            } => format!("Double-check OPENAI_API_KEY, or regenerate a key: {}", API_KEY_URL),
            Self::Remote { .. } => "Check your network connection or try again.".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => format!("Invalid input: {}", message),
            Self::MissingCredential => "OPENAI_API_KEY is not set.".to_string(),
            Self::Config { message } => format!("Configuration problem: {}", message),
            Self::Remote { message, .. } => message.clone(),
        }
    }
}

/// Compose the failure message for a remote error: a base line with the
/// status plus condition-specific tips for a human operator.
fn remote_failure_message(status: RemoteStatus) -> String {
    let mut lines = vec![format!("sorting failed (status: {}).", status)];

    match status {
        RemoteStatus::Unauthorized => {
            lines.push("Your API key was rejected. Double-check OPENAI_API_KEY and try again.".to_string());
        }
        RemoteStatus::RateLimited => {
            lines.push("Rate limited. Pause for a moment and retry.".to_string());
        }
        RemoteStatus::Unknown => {
            lines.push("Check your network connection or try again.".to_string());
        }
        RemoteStatus::Http(_) => {}
    }

    lines.push(format!(
        "If sorting keeps failing, regenerate a fresh key: {}",
        API_KEY_URL
    ));

    lines.join("\n")
}

/// Setup guidance emitted when no credential is configured. Names both setup
/// methods so an operator can self-diagnose.
pub fn credential_guidance() -> String {
    [
        "OPENAI_API_KEY is not set.",
        "Set it in your shell:",
        "  export OPENAI_API_KEY=\"sk-...\"",
        "Or add it to vibesort.toml:",
        "  api_key = \"your_key\"",
        "Then run your command again.",
        "Forgot your key? You can create one here: https://platform.openai.com/api-keys",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message_names_status_and_credential() {
        let err = SortError::remote(RemoteStatus::Unauthorized);
        let message = err.to_string();
        assert!(message.contains("sorting failed (status: 401)."));
        assert!(message.contains("OPENAI_API_KEY"));
        assert!(message.contains(API_KEY_URL));
    }

    #[test]
    fn test_rate_limited_message_suggests_pausing() {
        let err = SortError::remote(RemoteStatus::RateLimited);
        let message = err.to_string();
        assert!(message.contains("sorting failed (status: 429)."));
        assert!(message.contains("Pause for a moment and retry."));
    }

    #[test]
    fn test_unknown_status_suggests_checking_connectivity() {
        let err = SortError::remote(RemoteStatus::Unknown);
        let message = err.to_string();
        assert!(message.contains("sorting failed (status: unknown)."));
        assert!(message.contains("network"));
    }

    #[test]
    fn test_other_http_status_keeps_base_line_and_key_link() {
        let err = SortError::remote(RemoteStatus::from_http(500));
        let message = err.to_string();
        assert!(message.contains("sorting failed (status: 500)."));
        assert!(message.contains(API_KEY_URL));
        assert!(!message.contains("Pause"));
    }

    #[test]
    fn test_severity_drives_retry_classification() {
        assert_eq!(
            SortError::remote(RemoteStatus::RateLimited).severity(),
            ErrorSeverity::Medium
        );
        assert_eq!(
            SortError::remote(RemoteStatus::Unauthorized).severity(),
            ErrorSeverity::High
        );
        assert_eq!(
            SortError::MissingCredential.severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            SortError::invalid_input("bad").category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn test_credential_guidance_names_both_setup_methods() {
        let guidance = credential_guidance();
        assert!(guidance.contains("export OPENAI_API_KEY"));
        assert!(guidance.contains("vibesort.toml"));
        assert!(guidance.contains("https://platform.openai.com/api-keys"));
    }
}
