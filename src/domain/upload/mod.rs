pub mod file;
pub mod naming;
pub mod policy;

pub use file::UploadedFile;
pub use naming::{StoredFileName, extension_for};
pub use policy::{UploadError, UploadPolicy, default_image_types};
