//! Transport and server error model for the gateways.

use thiserror::Error;

/// Failure of a gateway call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a usable response (connection,
    /// decode, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded {status}")]
    Server {
        status: u16,
        /// Message extracted from the response body, when present.
        message: Option<String>,
    },
}

impl GatewayError {
    /// Message to surface in a notification: the server-provided one
    /// when present, else the screen's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            GatewayError::Server {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = GatewayError::Server {
            status: 409,
            message: Some("Code barre déjà utilisé".to_string()),
        };
        assert_eq!(err.user_message("Erreur"), "Code barre déjà utilisé");
    }

    #[test]
    fn blank_server_message_falls_back() {
        let err = GatewayError::Server {
            status: 500,
            message: Some("   ".to_string()),
        };
        assert_eq!(err.user_message("Erreur serveur"), "Erreur serveur");

        let err = GatewayError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Erreur serveur"), "Erreur serveur");
    }
}
