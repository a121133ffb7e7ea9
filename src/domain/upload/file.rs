// src/domain/upload/file.rs
use bytes::Bytes;

/// An uploaded file as handed over by the transport boundary. It lives only
/// for the duration of one create/update call.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub size: u64,
    pub mime_type: String,
    pub original_name: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        let bytes = bytes.into();
        Self {
            size: bytes.len() as u64,
            mime_type: mime_type.into(),
            original_name: original_name.into(),
            bytes,
        }
    }
}
