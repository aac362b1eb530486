//! Signed session tokens.
//!
//! The browser holds a JWT naming a server-side session. The signature stops
//! forged session ids; the session store decides whether the session is
//! still alive.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::Session;
use quill_core::ports::{AuthError, SessionClaims, TokenService};

pub const DEFAULT_SECRET: &str = "change-me-in-production";

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            issuer: "quill".to_string(),
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user id
    sid: String, // session id
    exp: i64,
    iat: i64,
    iss: String,
}

/// JWT-based session token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        if config.secret == DEFAULT_SECRET {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default session secret in production! Set SESSION_SECRET."
                );
            } else {
                tracing::warn!("Using default session secret. Set SESSION_SECRET for production use.");
            }
        }

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, session: &Session) -> Result<String, AuthError> {
        let claims = Claims {
            sub: session.user_id.to_string(),
            sid: session.id.to_string(),
            exp: session.expires_at.timestamp(),
            iat: session.created_at.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn decode(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        let claims = token_data.claims;
        let user_id = claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken("malformed subject".to_string()))?;
        let session_id =
            Uuid::parse_str(&claims.sid).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(SessionClaims {
            session_id,
            user_id,
            exp: claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            issuer: "test-issuer".to_string(),
        }
    }

    #[test]
    fn test_issue_and_decode() {
        let service = JwtTokenService::new(test_config());
        let session = Session::start(7, TimeDelta::hours(1));

        let token = service.issue(&session).unwrap();
        let claims = service.decode(&token).unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.session_id, session.id);
        assert_eq!(claims.exp, session.expires_at.timestamp());
    }

    #[test]
    fn test_decode_garbage() {
        let service = JwtTokenService::new(test_config());

        let result = service.decode("invalid-token");
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_rejects_other_secret() {
        let issuer = JwtTokenService::new(test_config());
        let verifier = JwtTokenService::new(JwtConfig {
            secret: "another-secret".to_string(),
            issuer: "test-issuer".to_string(),
        });

        let token = issuer.issue(&Session::start(1, TimeDelta::hours(1))).unwrap();
        assert!(verifier.decode(&token).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_issuer() {
        let service1 = JwtTokenService::new(JwtConfig {
            secret: "same-secret".to_string(),
            issuer: "issuer1".to_string(),
        });
        let service2 = JwtTokenService::new(JwtConfig {
            secret: "same-secret".to_string(),
            issuer: "issuer2".to_string(),
        });

        let token = service1.issue(&Session::start(1, TimeDelta::hours(1))).unwrap();
        assert!(service2.decode(&token).is_err());
    }

    #[test]
    fn test_decode_expired() {
        let service = JwtTokenService::new(test_config());
        // Well past the default validation leeway.
        let session = Session::start(1, TimeDelta::hours(-2));

        let token = service.issue(&session).unwrap();
        assert!(matches!(service.decode(&token), Err(AuthError::TokenExpired)));
    }
}
