// src/domain/upload/naming.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_EXTENSION_LEN: usize = 10;
const MAX_NAME_LEN: usize = 255;

/// Name under which an uploaded image is persisted inside the images
/// directory. Never contains path separators and never starts with a dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredFileName(String);

impl StoredFileName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() || value.len() > MAX_NAME_LEN {
            return Err(DomainError::Validation(
                "stored file name must be between 1 and 255 bytes".into(),
            ));
        }
        if value.starts_with('.')
            || value.contains("..")
            || value.contains(['/', '\\', '\0'])
        {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a valid stored file name"
            )));
        }
        Ok(Self(value))
    }

    /// Joins a random token and an extension with a `.` separator.
    pub fn compose(token: &str, extension: &str) -> DomainResult<Self> {
        Self::new(format!("{token}.{extension}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn extension(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(_, ext)| ext)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extension for a stored upload: the last dot-delimited suffix of the
/// original file name, or one derived from the media type when the name has
/// no usable suffix.
pub fn extension_for(original_name: &str, mime_type: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);

    if let Some((_, ext)) = base.rsplit_once('.') {
        if is_usable_extension(ext) {
            return ext.to_string();
        }
    }

    extension_from_mime(mime_type).to_string()
}

fn is_usable_extension(ext: &str) -> bool {
    !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric())
}

fn extension_from_mime(mime_type: &str) -> &'static str {
    let mime = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.as_str() {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" | "image/svg" => "svg",
        "image/bmp" => "bmp",
        "image/tiff" => "tiff",
        "image/x-icon" => "ico",
        _ => "bin",
    }
}
