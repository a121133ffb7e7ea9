// src/infrastructure/security/token.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{ClockPort, security::TokenVerifier, time::Clock},
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

pub const MIN_SECRET_BYTES: usize = 32;

/// Checks bearer tokens shaped `<user_id>.<expires_unix>.<signature>` where the
/// signature is base64url (unpadded) HMAC-SHA256 over `<user_id>.<expires_unix>`.
#[derive(Clone)]
pub struct HmacTokenVerifier {
    secret: Arc<[u8]>,
    clock: Arc<ClockPort>,
}

impl HmacTokenVerifier {
    pub fn new(secret: impl AsRef<[u8]>, clock: Arc<ClockPort>) -> ApplicationResult<Self> {
        let secret = secret.as_ref();
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ApplicationError::infrastructure(format!(
                "token secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }
        Ok(Self {
            secret: Arc::from(secret),
            clock,
        })
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn invalid() -> ApplicationError {
    ApplicationError::unauthorized("invalid token")
}

#[async_trait]
impl TokenVerifier for HmacTokenVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<UserId> {
        let mut parts = token.trim().splitn(3, '.');
        let (Some(uid), Some(exp), Some(sig)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let signature = URL_SAFE_NO_PAD.decode(sig).map_err(|_| invalid())?;
        let mut mac = self.mac()?;
        mac.update(uid.as_bytes());
        mac.update(b".");
        mac.update(exp.as_bytes());
        mac.verify_slice(&signature).map_err(|_| invalid())?;

        let expires_at: i64 = exp.parse().map_err(|_| invalid())?;
        if expires_at <= self.clock.now().timestamp() {
            return Err(ApplicationError::unauthorized("token expired"));
        }

        let id: i64 = uid.parse().map_err(|_| invalid())?;
        UserId::new(id).map_err(|_| invalid())
    }
}
