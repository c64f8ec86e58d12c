//! Session tokens
//!
//! Tokens are signed JWTs whose subject is the user id. There is no
//! credential verification behind them in this core; the token only ties a
//! session back to an account record.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    iat: i64,
}

pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Mint a session token derived from the user id.
    pub fn issue(&self, user_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        // Long-lived: session expiry is not modeled.
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + Duration::days(365)).timestamp(),
            iat: now.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Extract the user id a token was issued for.
    pub fn subject(&self, token: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_subject_is_user_id() {
        let issuer = TokenIssuer::new("test-secret");
        let token = issuer.issue("user-42").unwrap();
        assert_eq!(issuer.subject(&token).unwrap(), "user-42");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new("test-secret");
        let token = issuer.issue("user-42").unwrap();
        assert!(TokenIssuer::new("other-secret").subject(&token).is_err());
    }
}
