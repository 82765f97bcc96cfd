//! Request DTOs for the proxy API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::config::{DEFAULT_LIMIT, MAX_LIMIT};

/// Request body for POST /auth/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Query parameters for GET /pokemon
///
/// Raw strings on purpose: the boundary treats unparseable values as absent
/// and falls back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl ListQuery {
    /// Effective offset: parsed value, or 0 when absent or invalid.
    pub fn offset(&self) -> u32 {
        self.offset
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Effective limit: parsed value clamped to [1, MAX_LIMIT], defaulting
    /// to DEFAULT_LIMIT when absent, invalid, or below 1.
    pub fn limit(&self) -> u32 {
        match self.limit.as_deref().and_then(|v| v.parse::<u32>().ok()) {
            Some(n) if n >= 1 => n.min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        }
    }

    /// Effective search term: trimmed, with empty/whitespace-only values
    /// treated as no search at all.
    pub fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(offset: Option<&str>, limit: Option<&str>, search: Option<&str>) -> ListQuery {
        ListQuery {
            offset: offset.map(String::from),
            limit: limit.map(String::from),
            search: search.map(String::from),
        }
    }

    #[test]
    fn test_login_request_deserialize() {
        let json = r#"{"username": "admin", "password": "admin"}"#;
        let req: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.username, "admin");
        assert_eq!(req.password, "admin");
    }

    #[test]
    fn test_offset_defaults_to_zero() {
        assert_eq!(query(None, None, None).offset(), 0);
        assert_eq!(query(Some("abc"), None, None).offset(), 0);
        assert_eq!(query(Some("-3"), None, None).offset(), 0);
        assert_eq!(query(Some("40"), None, None).offset(), 40);
    }

    #[test]
    fn test_limit_clamping() {
        assert_eq!(query(None, None, None).limit(), DEFAULT_LIMIT);
        assert_eq!(query(None, Some("abc"), None).limit(), DEFAULT_LIMIT);
        assert_eq!(query(None, Some("0"), None).limit(), DEFAULT_LIMIT);
        assert_eq!(query(None, Some("50"), None).limit(), 50);
        assert_eq!(query(None, Some("500"), None).limit(), MAX_LIMIT);
    }

    #[test]
    fn test_search_blank_treated_as_absent() {
        assert_eq!(query(None, None, None).search(), None);
        assert_eq!(query(None, None, Some("   ")).search(), None);
        assert_eq!(query(None, None, Some(" saur ")).search(), Some("saur"));
    }
}
