//! Service error taxonomy for boundary-client failures
//!
//! The session does not distinguish causes: every variant collapses into
//! the single last-error slot as a human-readable message. Malformed or
//! schema-violating model output is treated identically to a transport
//! failure (all-or-nothing decoding).

/// Errors from the model backend (transport, status, parse, contract)
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("service returned HTTP {0}")]
    BadStatus(u16),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("invalid JSON in model response: {0}")]
    InvalidJson(String),

    #[error("model response violates contract: {0}")]
    Schema(String),

    #[error("model returned an empty response")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        let err = ServiceError::BadStatus(503);
        assert_eq!(err.to_string(), "service returned HTTP 503");

        let err = ServiceError::Schema("probability out of range".to_string());
        assert!(err.to_string().contains("probability out of range"));
    }
}
