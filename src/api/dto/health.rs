//! DTOs for health check endpoint.

use serde::Serialize;

/// Overall service status reported by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: RegistryCheck,
}

/// Registry store status, with counters when the store answered.
#[derive(Debug, Serialize)]
pub struct RegistryCheck {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_short_code: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RegistryCheck {
    pub fn ok(entries: i64, next_short_code: i64) -> Self {
        Self {
            status: "ok",
            entries: Some(entries),
            next_short_code: Some(next_short_code),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            entries: None,
            next_short_code: None,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_check_omits_counters() {
        let json = serde_json::to_value(RegistryCheck::error("store unavailable")).unwrap();
        assert_eq!(json["status"], "error");
        assert!(json.get("entries").is_none());
        assert_eq!(json["message"], "store unavailable");
    }
}
