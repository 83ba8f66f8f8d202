//! # Clock（時刻プロバイダ）
//!
//! 「現在時刻」に依存する操作（現在の KST 日時分解、現在タイムスタンプの取得）から
//! `Utc::now()` の直接呼び出しを分離し、テストで固定時刻を注入可能にするための抽象化。
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::DateTime;
//! use haneul_domain::clock::FixedClock;
//! use haneul_domain::kst::KstDayInfo;
//!
//! // 2024-12-11T09:00:00Z に固定したクロック
//! let clock = FixedClock::new(DateTime::from_timestamp(1_733_907_600, 0).unwrap());
//! let info = KstDayInfo::now_with(&clock);
//!
//! assert_eq!(info.to_string(), "2024-12-11 18:00:00");
//! ```

use chrono::{DateTime, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
