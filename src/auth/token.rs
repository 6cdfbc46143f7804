//! Session token codec.
//!
//! Tokens are HS256 JWTs carrying only the issuance time (`iat`) and a
//! matching `exp`. Validity is decided here against a fixed window, not by the
//! JWT library's own expiry check, so the window can be tested against an
//! explicit clock.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// How long an issued token stays valid.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Tolerated clock drift for an `iat` slightly in the future.
const CLOCK_SKEW_SECS: i64 = 60;

const SESSION_SUBJECT: &str = "signboard-session";

#[derive(Debug, Serialize, Deserialize, Clone)]
struct SessionClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Process-wide signing secret. Never logged.
#[derive(Clone)]
pub struct SessionSecret(Vec<u8>);

impl SessionSecret {
    /// 32 random bytes from the OS generator.
    pub fn random() -> Self {
        let mut bytes = vec![0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Hex-encoded secrets are decoded, anything else is used as raw bytes.
    /// A blank value is refused: an empty HMAC key lets anyone mint tokens.
    pub fn from_config(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            anyhow::bail!("session secret is configured but blank");
        }
        Ok(match hex::decode(value.trim()) {
            Ok(bytes) if !bytes.is_empty() => Self(bytes),
            _ => Self(value.as_bytes().to_vec()),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionSecret(<{} bytes>)", self.0.len())
    }
}

/// Issues and verifies session tokens under one secret.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: &SessionSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in verify_at against the issuance time.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);
        validation.sub = Some(SESSION_SUBJECT.to_string());

        Self {
            encoding: EncodingKey::from_secret(&secret.0),
            decoding: DecodingKey::from_secret(&secret.0),
            validation,
            ttl: Duration::seconds(SESSION_TTL_SECS),
        }
    }

    /// Issue a token stamped with the current time.
    pub fn issue(&self) -> Result<String> {
        self.issue_at(Utc::now())
    }

    pub fn issue_at(&self, now: DateTime<Utc>) -> Result<String> {
        let claims = SessionClaims {
            sub: SESSION_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .context("Failed to generate session token")
    }

    /// `true` iff the signature holds and the token is at most 24h old.
    ///
    /// Malformed, forged and expired tokens all return `false`.
    pub fn verify(&self, token: &str) -> bool {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        let claims = match decode::<SessionClaims>(token, &self.decoding, &self.validation) {
            Ok(data) => data.claims,
            Err(_) => return false,
        };

        let age = now.timestamp() - claims.iat;
        (-CLOCK_SKEW_SECS..=self.ttl.num_seconds()).contains(&age)
    }
}
