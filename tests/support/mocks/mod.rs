// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod news_repo;
pub mod security;
pub mod storage;
pub mod time;
pub mod user_repo;
pub mod util;

// 時刻関連
pub use time::{DummyClock, fixed_now};

// セキュリティ関連
pub use security::{
    DummyTokenVerifier, GHOST_ID, GHOST_TOKEN, OTHER_ID, OTHER_TOKEN, OWNER_ID, OWNER_TOKEN,
};

// ストレージ
pub use storage::RecordingFileStore;

// リポジトリ
pub use news_repo::InMemoryNewsRepo;
pub use user_repo::InMemoryUserRepo;

// ユーティリティ関連
pub use util::SequentialTokens;
