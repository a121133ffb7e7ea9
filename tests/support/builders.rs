// tests/support/builders.rs
use super::mocks::fixed_now;
use news_core::application::dto::AuthenticatedUser;
use news_core::domain::news::{News, NewsContent, NewsId, NewsTitle};
use news_core::domain::upload::{StoredFileName, UploadedFile};
use news_core::domain::user::{User, UserEmail, UserId, UserName};

pub fn user(id: i64, name: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        name: UserName::new(name).unwrap(),
        email: UserEmail::new(format!("{}@example.com", name.to_lowercase())).unwrap(),
        image: Some(format!("{}.jpg", name.to_lowercase())),
    }
}

pub fn principal(id: i64, name: &str) -> AuthenticatedUser {
    user(id, name).into()
}

pub struct NewsBuilder {
    id: i64,
    title: String,
    content: String,
    image: String,
    owner_id: i64,
}

impl NewsBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "City council meets".into(),
            content: "The council discussed the new budget.".into(),
            image: "seed0001.png".into(),
            owner_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn owner(mut self, owner_id: i64) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn build(self) -> News {
        News {
            id: NewsId::new(self.id).unwrap(),
            title: NewsTitle::new(self.title).unwrap(),
            content: NewsContent::new(self.content).unwrap(),
            image: StoredFileName::new(self.image).unwrap(),
            owner_id: UserId::new(self.owner_id).unwrap(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

/// `size` バイトの PNG アップロード
pub fn png(original_name: &str, size: usize) -> UploadedFile {
    UploadedFile::new(original_name, "image/png", vec![0x89; size])
}

/// マルチパート本文を手組みするビルダー
pub struct MultipartBody {
    boundary: &'static str,
    buf: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "----news-test-boundary",
            buf: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(bytes);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    /// `(content-type ヘッダ値, 本文)` を返す
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.buf
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.buf,
        )
    }
}
