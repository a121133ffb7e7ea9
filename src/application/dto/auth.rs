use crate::domain::{
    news::OwnerProjection,
    user::{User, UserEmail, UserId, UserName},
};

/// The principal behind a request, resolved from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: UserName,
    pub email: UserEmail,
    pub image: Option<String>,
}

impl AuthenticatedUser {
    pub fn owner_projection(&self) -> OwnerProjection {
        OwnerProjection {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            image: self.image.clone(),
        }
    }
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
        }
    }
}
