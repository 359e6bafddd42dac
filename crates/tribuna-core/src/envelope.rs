//! Success/failure envelope reported to callers.
//!
//! Every command prints exactly one envelope on stdout:
//! `{ "success": bool, "data": T | null, "error": string | null }`.
//! Failures are part of the contract, not process exit conditions.

use serde::Serialize;

/// Result envelope for one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Resultado<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Resultado<T> {
    /// Successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failure envelope carrying a human-readable message.
    pub fn err(mensagem: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(mensagem.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_shape() {
        let json = serde_json::to_value(Resultado::ok(7)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 7);
        assert_eq!(json["error"], serde_json::Value::Null);
    }

    #[test]
    fn err_shape() {
        let json = serde_json::to_value(Resultado::<()>::err("tribunal returned 503")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["error"], "tribunal returned 503");
    }
}
