// src/presentation/http/multipart.rs
use crate::domain::upload::UploadedFile;
use axum::extract::{Multipart, multipart::MultipartError};

use super::error::{HttpError, HttpResult};

const DEFAULT_MIME: &str = "application/octet-stream";

/// Text fields and the optional image file of a news create/update form.
#[derive(Debug, Default)]
pub struct NewsForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<UploadedFile>,
}

fn rejection(err: &MultipartError) -> HttpError {
    HttpError::new(err.status(), err.body_text())
}

/// Reads `title`, `content` and `image` parts; unknown parts are skipped.
/// An image part with no bytes counts as absent.
pub async fn read_news_form(mut multipart: Multipart) -> HttpResult<NewsForm> {
    let mut form = NewsForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|err| rejection(&err))? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "title" => form.title = Some(field.text().await.map_err(|err| rejection(&err))?),
            "content" => form.content = Some(field.text().await.map_err(|err| rejection(&err))?),
            "image" => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_MIME)
                    .to_string();
                let bytes = field.bytes().await.map_err(|err| rejection(&err))?;
                form.image = if bytes.is_empty() {
                    None
                } else {
                    Some(UploadedFile::new(original_name, mime_type, bytes))
                };
            }
            _ => {}
        }
    }

    Ok(form)
}
