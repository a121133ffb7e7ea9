// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use news_core::domain::errors::DomainResult;
use news_core::domain::user::{User, UserId, UserRepository};
use std::collections::HashMap;
use std::sync::Mutex;

/// メモリ上のユーザーリポジトリ
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<i64, User>>,
}

impl InMemoryUserRepo {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::default();
        for user in users {
            repo.add(user);
        }
        repo
    }

    pub fn add(&self, user: User) {
        self.users.lock().unwrap().insert(user.id.into(), user);
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&i64::from(id)).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.get(id))
    }
}
