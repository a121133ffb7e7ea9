// tests/support/mocks/security.rs
use async_trait::async_trait;
use news_core::application::{
    ApplicationResult, error::ApplicationError, ports::security::TokenVerifier,
};
use news_core::domain::user::UserId;

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const OWNER_TOKEN: &str = "owner-token";
pub const OTHER_TOKEN: &str = "other-token";
/// 署名は正しいがユーザーが存在しないトークン
pub const GHOST_TOKEN: &str = "ghost-token";

pub const OWNER_ID: i64 = 1;
pub const OTHER_ID: i64 = 2;
pub const GHOST_ID: i64 = 99;

#[derive(Clone, Debug, Default)]
pub struct DummyTokenVerifier;

#[async_trait]
impl TokenVerifier for DummyTokenVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<UserId> {
        let id = match token {
            OWNER_TOKEN => OWNER_ID,
            OTHER_TOKEN => OTHER_ID,
            GHOST_TOKEN => GHOST_ID,
            _ => return Err(ApplicationError::unauthorized("invalid token")),
        };
        Ok(UserId::new(id)?)
    }
}
