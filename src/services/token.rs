use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::AppError;
use crate::models::TokenClaims;

/// Reads the claims out of a JWT-shaped bearer token.
///
/// The signature is NOT checked. The backend is trusted to have issued the
/// token, so the result is only good for showing who is signed in. Anything
/// that needs authorization must go through the backend with the token.
///
/// # Errors
///
/// Returns [`AppError::Auth`] if the token is not three dot-separated
/// segments, the payload is not base64url, or it lacks a `sub` claim.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AppError> {
    let mut parts = token.split('.');
    let payload_b64 = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(AppError::Auth("invalid token format".into())),
    };

    // Some issuers keep the padding; the engine expects it gone.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload_b64.trim_end_matches('='))
        .map_err(|_| AppError::Auth("invalid token payload".into()))?;

    serde_json::from_slice::<TokenClaims>(&bytes)
        .map_err(|e| AppError::Auth(format!("invalid token claims: {}", e)))
}

#[cfg(test)]
pub(crate) fn fake_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_sub_email_and_exp() {
        let token = fake_token(&json!({ "sub": "42", "email": "sara@pmu.edu", "exp": 1_900_000_000 }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email.as_deref(), Some("sara@pmu.edu"));
        assert_eq!(claims.exp, Some(1_900_000_000));
    }

    #[test]
    fn decodes_non_ascii_payload() {
        let token = fake_token(&json!({ "sub": "7", "email": "zoë@pmu.edu" }));
        assert_eq!(decode_claims(&token).unwrap().email.as_deref(), Some("zoë@pmu.edu"));
    }

    #[test]
    fn tolerates_padded_payload() {
        let token = fake_token(&json!({ "sub": "1" }));
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        while parts[1].len() % 4 != 0 {
            parts[1].push('=');
        }
        assert_eq!(decode_claims(&parts.join(".")).unwrap().sub, "1");
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(decode_claims("not-a-token").is_err());
        assert!(decode_claims("a..c").is_err());
        assert!(decode_claims("a.b.c.d").is_err());
        assert!(decode_claims("a.!!!.c").is_err());
        let no_sub = fake_token(&json!({ "email": "x@pmu.edu" }));
        assert!(matches!(decode_claims(&no_sub), Err(AppError::Auth(_))));
    }
}
