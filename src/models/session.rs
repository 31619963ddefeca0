use serde::{Deserialize, Serialize};

/// Claims read from the bearer token payload. Unverified; display only.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// The locally cached authenticated identity plus its bearer token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl Session {
    pub fn from_claims(claims: TokenClaims, token: String) -> Self {
        Self {
            id: claims.sub,
            email: claims.email.unwrap_or_default(),
            token,
            expires_at: claims.exp,
        }
    }

    /// A session without `exp` never expires on the client side.
    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.expires_at.map(|exp| exp <= now_unix).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_inclusive() {
        let session = Session {
            id: "u1".into(),
            email: "a@b.edu".into(),
            token: "t".into(),
            expires_at: Some(100),
        };
        assert!(!session.is_expired_at(99));
        assert!(session.is_expired_at(100));
    }

    #[test]
    fn missing_exp_never_expires() {
        let claims = TokenClaims { sub: "u1".into(), email: None, exp: None };
        let session = Session::from_claims(claims, "t".into());
        assert_eq!(session.email, "");
        assert!(!session.is_expired_at(i64::MAX));
    }
}
