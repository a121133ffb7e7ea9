// src/application/ports/util.rs
pub trait TokenGenerator: Send + Sync {
    /// A fresh random token, safe to embed in a file name.
    fn generate(&self) -> String;
}
