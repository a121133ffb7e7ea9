// src/application/ports/security.rs
use crate::{application::ApplicationResult, domain::user::UserId};
use async_trait::async_trait;

/// Verifies bearer credentials presented at the HTTP boundary. Credentials
/// are issued by a separate identity service; this crate only checks them.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> ApplicationResult<UserId>;
}
