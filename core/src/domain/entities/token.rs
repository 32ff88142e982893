//! Claims carried by the JWT-shaped bearer tokens this client consumes.
//!
//! No signature verification happens client-side; only the structural shape
//! and a handful of claims are inspected.

use serde::{Deserialize, Serialize};

/// Claims decoded from the payload segment of a JWT-shaped token.
///
/// Every field is optional: the client treats unknown backends leniently and
/// only reacts to the claims it understands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Expiration time as epoch seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Proprietary user identifier claim
    #[serde(
        rename = "userId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,

    /// Standard subject claim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl TokenPayload {
    /// The user identifier, preferring `userId` over `sub`
    pub fn user_claim(&self) -> Option<&str> {
        self.user_id.as_deref().or(self.sub.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_claim_prefers_user_id_over_sub() {
        let payload = TokenPayload {
            exp: None,
            user_id: Some("user-123".to_string()),
            sub: Some("sub-456".to_string()),
        };
        assert_eq!(payload.user_claim(), Some("user-123"));
    }

    #[test]
    fn test_user_claim_falls_back_to_sub() {
        let payload = TokenPayload {
            sub: Some("sub-456".to_string()),
            ..TokenPayload::default()
        };
        assert_eq!(payload.user_claim(), Some("sub-456"));
    }

    #[test]
    fn test_deserializes_from_wire_names() {
        let payload: TokenPayload =
            serde_json::from_str(r#"{"exp":1700000000,"userId":"u1","iat":123}"#).unwrap();
        assert_eq!(payload.exp, Some(1_700_000_000));
        assert_eq!(payload.user_id.as_deref(), Some("u1"));
        assert_eq!(payload.sub, None);
    }
}
