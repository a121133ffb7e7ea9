// src/domain/upload/policy.rs
use std::fmt;

const MIB: u64 = 1024 * 1024;
const KIB: u64 = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    Missing,
    TooLarge { max_bytes: u64 },
    UnsupportedType { allowed: Vec<String> },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("Image field is required."),
            Self::TooLarge { max_bytes } => {
                write!(f, "Image size must be less than {}.", human_size(*max_bytes))
            }
            Self::UnsupportedType { allowed } => {
                write!(f, "Image must be type of {}.", allowed.join(", "))
            }
        }
    }
}

impl std::error::Error for UploadError {}

/// Size and media type limits applied to every uploaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    max_bytes: u64,
    allowed_types: Vec<String>,
}

impl UploadPolicy {
    pub fn new<I, S>(max_bytes: u64, allowed_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for mime in allowed_types {
            let mime = normalize_mime(mime.as_ref());
            if !mime.is_empty() && !normalized.contains(&mime) {
                normalized.push(mime);
            }
        }
        Self {
            max_bytes,
            allowed_types: normalized,
        }
    }

    /// Size is checked before the media type. Parameters such as
    /// `; charset=...` and letter case are ignored when matching types.
    pub fn validate(&self, size: u64, mime_type: &str) -> Result<(), UploadError> {
        if size > self.max_bytes {
            return Err(UploadError::TooLarge {
                max_bytes: self.max_bytes,
            });
        }

        let mime = normalize_mime(mime_type);
        if !self.allowed_types.iter().any(|allowed| *allowed == mime) {
            return Err(UploadError::UnsupportedType {
                allowed: self.type_labels(),
            });
        }

        Ok(())
    }

    fn type_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for mime in &self.allowed_types {
            let subtype = mime.split_once('/').map_or(mime.as_str(), |(_, sub)| sub);
            let label = subtype.split('+').next().unwrap_or(subtype).to_string();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }
}

pub fn default_image_types() -> Vec<String> {
    [
        "image/png",
        "image/jpg",
        "image/jpeg",
        "image/svg+xml",
        "image/webp",
        "image/gif",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn normalize_mime(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn human_size(bytes: u64) -> String {
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{bytes} bytes")
    }
}
