use crate::domain::news::entity::News;
use crate::domain::user::UserId;

/// Single-owner authorization: only the user who created a record may change it.
pub struct OwnershipGuard;

impl OwnershipGuard {
    pub fn authorize(principal_id: UserId, owner_id: UserId) -> bool {
        principal_id == owner_id
    }
}

pub struct CanUpdateNewsSpec<'a> {
    news: &'a News,
    user_id: UserId,
}

impl<'a> CanUpdateNewsSpec<'a> {
    pub fn new(news: &'a News, user_id: UserId) -> Self {
        Self { news, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        OwnershipGuard::authorize(self.user_id, self.news.owner_id)
    }
}
