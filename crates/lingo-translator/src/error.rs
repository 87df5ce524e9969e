use std::fmt;

/// Transport-level failure class attached to a [`ProviderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCode {
    Timeout,
    Network,
    Decode,
}

impl TransportCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportCode::Timeout => "ECONNABORTED",
            TransportCode::Network => "NETWORK_ERROR",
            TransportCode::Decode => "ERR_BAD_RESPONSE",
        }
    }

    /// Timeouts and connection failures, as opposed to bad payloads
    pub fn is_network(&self) -> bool {
        matches!(self, TransportCode::Timeout | TransportCode::Network)
    }
}

impl fmt::Display for TransportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One provider's failure for one call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
    pub code: Option<TransportCode>,
    pub status: Option<u16>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            status: None,
        }
    }

    /// The response arrived but could not be read as a translation
    pub fn bad_response(message: impl Into<String>) -> Self {
        Self::new(message).with_code(TransportCode::Decode)
    }

    pub fn with_code(mut self, code: TransportCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(429)
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            Some(TransportCode::Timeout)
        } else if err.is_connect() || err.is_request() {
            Some(TransportCode::Network)
        } else if err.is_decode() || err.is_body() {
            Some(TransportCode::Decode)
        } else {
            None
        };

        let status = err.status().map(|s| s.as_u16());
        let message = match (status, code) {
            (Some(status), _) => format!("Request failed with status code {status}"),
            (None, Some(TransportCode::Timeout)) => "Request timed out".to_string(),
            // The URL carries the text being translated
            _ => err.without_url().to_string(),
        };

        Self {
            message,
            code,
            status,
        }
    }
}

/// Every configured provider failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// Carries the error of the last provider that was tried
    #[error(transparent)]
    Exhausted(ProviderError),

    #[error(
        "All translation services are currently unavailable. Please check your internet connection and try again."
    )]
    Unavailable,
}

impl TranslateError {
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            TranslateError::Exhausted(err) => Some(err),
            TranslateError::Unavailable => None,
        }
    }
}
