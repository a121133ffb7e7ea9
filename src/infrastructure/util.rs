use crate::application::ports::util::TokenGenerator;
use uuid::Uuid;

/// 122 random bits per token, rendered as 32 lowercase hex characters.
#[derive(Default, Clone)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
