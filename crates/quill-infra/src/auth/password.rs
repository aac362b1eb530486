//! Argon2 password hashing implementation.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use quill_core::ports::{AuthError, PasswordService};

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Argon2-based password service. Every hash gets a fresh 16-byte random
/// salt, encoded into the PHC string alongside the cost parameters.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new(config: Argon2Config) -> Result<Self, AuthError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> Argon2PasswordService {
        Argon2PasswordService::new(Argon2Config {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = cheap();
        let password = "secure_password_123";

        let hash = service.hash(password).unwrap();
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let service = cheap();

        let first = service.hash("same").unwrap();
        let second = service.hash("same").unwrap();

        assert_ne!(first, second);
        assert!(!first.contains("same"));
        assert!(first.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let result = cheap().verify("pw", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }

    #[test]
    fn test_zero_memory_rejected() {
        let result = Argon2PasswordService::new(Argon2Config {
            memory_kib: 0,
            iterations: 1,
            parallelism: 1,
        });
        assert!(result.is_err());
    }
}
