//! # UNIX タイムスタンプ変換
//!
//! 瞬間（[`DateTime<Utc>`]）と「エポックからの経過秒数」の整数値を相互変換する。
//!
//! ## 設計方針
//!
//! - **切り捨て**: 瞬間 → 整数の変換はサブ秒を常に床関数で切り捨てる
//!   （四捨五入しない）。エポック以前の瞬間でも床方向に丸める
//! - **正規 API は 1 系統**: 変換操作ごとに 1 つの名前だけを公開し、
//!   同じ意味の別名は設けない
//! - **往復保証**: 整数 → 瞬間 → 整数は全ての整数で恒等。
//!   瞬間 → 整数 → 瞬間はサブ秒精度を失う
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::DateTime;
//! use haneul_domain::timestamp::UnixTimestamp;
//!
//! let at = DateTime::from_timestamp(1_733_907_600, 500_000_000).unwrap();
//! let ts = UnixTimestamp::from_datetime(at);
//!
//! // サブ秒は切り捨て
//! assert_eq!(ts.as_i64(), 1_733_907_600);
//!
//! // 整数からの復元は秒精度で正確
//! assert_eq!(ts.to_datetime().unwrap().timestamp(), 1_733_907_600);
//! ```

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// UNIX タイムスタンプ（値オブジェクト）
///
/// 1970-01-01T00:00:00Z からの経過秒数。エポック以前は負数で表す。
///
/// # 不変条件
///
/// - 保持する値は常に「秒」単位（ミリ秒やナノ秒は保持しない）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("{_0}")]
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// 瞬間からタイムスタンプを作成する（サブ秒は床方向に切り捨て）
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.timestamp())
    }

    /// 秒数からタイムスタンプを作成する
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// 現在時刻のタイムスタンプを取得する
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// 注入されたクロックの現在時刻からタイムスタンプを取得する
    pub fn now_with(clock: &dyn Clock) -> Self {
        Self::from_datetime(clock.now())
    }

    /// 瞬間へ復元する
    ///
    /// [`DateTime`] で表現できない極端な値（±26 万年程度より外）の場合は
    /// `None` を返す。
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<DateTime<Utc>> for UnixTimestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Self::from_datetime(at)
    }
}

impl From<i64> for UnixTimestamp {
    fn from(secs: i64) -> Self {
        Self::from_secs(secs)
    }
}

/// `DateTime<Utc>` フィールドを UNIX タイムスタンプ（秒）として直列化する
///
/// `#[serde(with = "unix_seconds")]` で API の入出力 DTO に適用する。
/// 直列化はサブ秒を切り捨て、復元は秒精度の瞬間を生成する。
///
/// # 使用例
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use haneul_domain::timestamp::unix_seconds;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Record {
///     #[serde(with = "unix_seconds")]
///     created_at: DateTime<Utc>,
/// }
///
/// let record = Record {
///     created_at: DateTime::from_timestamp(1_733_907_600, 0).unwrap(),
/// };
/// let json = serde_json::to_string(&record).unwrap();
/// assert_eq!(json, r#"{"created_at":1733907600}"#);
/// ```
pub mod unix_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::UnixTimestamp;

    pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        UnixTimestamp::from_datetime(*at).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ts = UnixTimestamp::deserialize(deserializer)?;
        ts.to_datetime().ok_or_else(|| {
            serde::de::Error::custom(format!("表現範囲外の UNIX タイムスタンプです: {ts}"))
        })
    }
}

/// [`unix_seconds`] の `Option` 版
///
/// `None` は null として直列化される。
pub mod unix_seconds_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::UnixTimestamp;

    pub fn serialize<S>(at: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        at.map(UnixTimestamp::from_datetime).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(ts) = Option::<UnixTimestamp>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let at = ts.to_datetime().ok_or_else(|| {
            serde::de::Error::custom(format!("表現範囲外の UNIX タイムスタンプです: {ts}"))
        })?;
        Ok(Some(at))
    }
}
