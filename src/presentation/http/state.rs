// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Directory served read-only under `/images`.
    pub images_dir: PathBuf,
    pub max_request_bytes: usize,
    pub allowed_origins: Vec<String>,
}
