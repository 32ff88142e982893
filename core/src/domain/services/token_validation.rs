//! Structural and claim-level validation of JWT-shaped bearer tokens.
//!
//! Everything here is pure string inspection: no I/O and no signature
//! verification. Tokens are expected to be three dot-separated base64
//! segments whose middle segment decodes to a JSON claims object.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;

use crate::domain::entities::token::TokenPayload;
use crate::domain::value_objects::AuthToken;
use crate::errors::{DomainError, DomainResult};

/// Checks whether a token is structurally JWT-shaped.
///
/// True iff the token is non-blank, splits into exactly three dot-separated
/// segments, and every segment decodes as base64 once padded to a multiple
/// of four. Never errors.
pub fn validate_token_format(token: &str) -> bool {
    if AuthToken::new(token).is_err() {
        return false;
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return false;
    }

    parts.iter().all(|part| decode_segment(part).is_ok())
}

/// Checks the `exp` claim against the current time.
///
/// A malformed token counts as expired (fail-safe). A token without an
/// `exp` claim never expires; that trust assumption is deliberate and
/// documented. The boundary is inclusive: `exp == now` is expired.
pub fn is_token_expired(token: &str) -> bool {
    match decode_payload(token) {
        Ok(payload) => match payload.exp {
            Some(exp) => exp <= Utc::now().timestamp(),
            None => false,
        },
        Err(_) => true,
    }
}

/// Extracts the user identifier from the token claims.
///
/// Prefers the `userId` claim over `sub`. Fails with an unauthorized error
/// when neither claim is present or the token cannot be decoded.
pub fn extract_user_id(token: &str) -> DomainResult<String> {
    let payload = decode_payload(token)?;

    payload
        .user_claim()
        .map(str::to_string)
        .ok_or_else(|| DomainError::unauthorized("Token does not contain user ID"))
}

/// Decodes the middle segment of the token into its claims.
fn decode_payload(token: &str) -> DomainResult<TokenPayload> {
    let decode_failure = || DomainError::unauthorized("Failed to decode token");

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(decode_failure());
    }

    let bytes = decode_segment(parts[1]).map_err(|_| decode_failure())?;
    serde_json::from_slice(&bytes).map_err(|_| decode_failure())
}

/// Decodes one base64 segment, padding with `=` to a multiple of four first.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let padding = (4 - segment.len() % 4) % 4;
    let padded = format!("{}{}", segment, "=".repeat(padding));
    STANDARD.decode(padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Builds a JWT-shaped token with the given payload claims. Segments are
    /// left unpadded, as real JWTs are.
    fn make_token(payload: serde_json::Value) -> String {
        let encode = |value: &str| STANDARD.encode(value).trim_end_matches('=').to_string();
        format!(
            "{}.{}.{}",
            encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            encode(&payload.to_string()),
            encode("signature")
        )
    }

    #[test]
    fn test_well_formed_token_passes_format_check() {
        let token = make_token(json!({ "sub": "u1" }));
        assert!(validate_token_format(&token));
    }

    #[test]
    fn test_blank_token_fails_format_check() {
        assert!(!validate_token_format(""));
        assert!(!validate_token_format("   "));
    }

    #[test]
    fn test_wrong_segment_count_fails_format_check() {
        assert!(!validate_token_format("only-one-part"));
        assert!(!validate_token_format("two.parts"));
        assert!(!validate_token_format("a.b.c.d"));
    }

    #[test]
    fn test_undecodable_segment_fails_format_check() {
        // '!' is outside the standard base64 alphabet
        assert!(!validate_token_format("abc!.def.ghi"));
    }

    #[test]
    fn test_token_expired_one_second_ago() {
        let exp = Utc::now().timestamp() - 1;
        assert!(is_token_expired(&make_token(json!({ "exp": exp }))));
    }

    #[test]
    fn test_token_expiring_now_is_expired() {
        let exp = Utc::now().timestamp();
        assert!(is_token_expired(&make_token(json!({ "exp": exp }))));
    }

    #[test]
    fn test_token_expiring_in_an_hour_is_not_expired() {
        let exp = Utc::now().timestamp() + 3600;
        assert!(!is_token_expired(&make_token(json!({ "exp": exp }))));
    }

    #[test]
    fn test_token_without_exp_never_expires() {
        assert!(!is_token_expired(&make_token(json!({ "sub": "u1" }))));
    }

    #[test]
    fn test_malformed_token_is_treated_as_expired() {
        assert!(is_token_expired("not-a-jwt"));
        assert!(is_token_expired("a.%%%.c"));
    }

    #[test]
    fn test_extract_user_id_prefers_user_id_claim() {
        let token = make_token(json!({ "userId": "u1", "sub": "s1" }));
        assert_eq!(extract_user_id(&token).unwrap(), "u1");
    }

    #[test]
    fn test_extract_user_id_falls_back_to_sub() {
        let token = make_token(json!({ "sub": "s1" }));
        assert_eq!(extract_user_id(&token).unwrap(), "s1");
    }

    #[test]
    fn test_extract_user_id_without_claims_is_unauthorized() {
        let token = make_token(json!({ "exp": 123 }));
        let err = extract_user_id(&token).unwrap_err();
        assert_eq!(
            err,
            DomainError::unauthorized("Token does not contain user ID")
        );
    }

    #[test]
    fn test_extract_user_id_from_malformed_token() {
        let err = extract_user_id("garbage").unwrap_err();
        assert_eq!(err, DomainError::unauthorized("Failed to decode token"));
    }

    #[test]
    fn test_padded_segments_also_decode() {
        // Tokens that arrive with their '=' padding intact are still valid
        let payload = STANDARD.encode(r#"{"sub":"u1"}"#);
        let header = STANDARD.encode(r#"{"alg":"none"}"#);
        let token = format!("{header}.{payload}.c2ln");
        assert!(validate_token_format(&token));
        assert_eq!(extract_user_id(&token).unwrap(), "u1");
    }
}
