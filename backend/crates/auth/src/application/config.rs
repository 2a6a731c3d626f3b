//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use chrono_tz::Tz;
use platform::cookie::CookieConfig;
use platform::password::HashingParams;
use platform::token::{ACCESS_TOKEN_TTL, TokenSigner};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Access token cookie name
    pub cookie_name: String,
    /// HMAC key for signing access tokens
    pub token_secret: Vec<u8>,
    /// Access token lifetime (5 minutes)
    pub token_ttl: Duration,
    /// Zone used for token timestamps
    pub time_zone: Tz,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Argon2id cost
    pub password_hashing: HashingParams,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "access_token".to_string(),
            token_secret: Vec::new(),
            token_ttl: ACCESS_TOKEN_TTL,
            time_zone: Tz::UTC,
            cookie_secure: true,
            cookie_same_site: SameSite::None,
            password_pepper: None,
            password_hashing: HashingParams::default(),
        }
    }
}

impl AuthConfig {
    /// Create config signing tokens with `secret`
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret)
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn token_signer(&self) -> TokenSigner {
        TokenSigner::new(&self.token_secret, self.token_ttl, self.time_zone)
    }

    /// Set-Cookie attributes for the access token
    ///
    /// No Max-Age: the cookie lives for the browser session while the token
    /// inside it expires on its own.
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("cookie_name", &self.cookie_name)
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("time_zone", &self.time_zone)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("password_hashing", &self.password_hashing)
            .finish()
    }
}
