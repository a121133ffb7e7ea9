// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use news_core::application::ports::time::Clock;
use once_cell::sync::Lazy;

/// 全テスト共通の「現在時刻」
static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap());

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// 常に [`fixed_now`] を返す時計
#[derive(Clone, Default)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
