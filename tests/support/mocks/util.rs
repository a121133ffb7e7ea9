// tests/support/mocks/util.rs
use news_core::application::ports::util::TokenGenerator;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 連番トークン（`tok0001`, `tok0002`, ...）
#[derive(Default)]
pub struct SequentialTokens {
    next: AtomicUsize,
}

impl TokenGenerator for SequentialTokens {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("tok{n:04}")
    }
}
