use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Status(u16),
    Decode,
    Validation,
    InvalidConfig,
}

#[derive(Debug, Clone)]
pub struct ClientError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ClientError {
    pub fn network(err: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Network,
            message: err.to_string(),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            kind: ErrorKind::Status(code),
            message: format!("unexpected status {code}"),
        }
    }

    pub fn decode(err: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Decode,
            message: err.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn toast_message(&self) -> String {
        match self.kind {
            ErrorKind::Network => "Network error".to_string(),
            ErrorKind::Status(_) | ErrorKind::Decode => "Error saving mood".to_string(),
            ErrorKind::Validation | ErrorKind::InvalidConfig => self.message.clone(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::status(status.as_u16())
        } else if err.is_decode() {
            Self::decode(err)
        } else {
            Self::network(err)
        }
    }
}
