//! # 年齢計算
//!
//! 生年月日と基準日の 2 つの暦日から、3 種類の年齢慣習を導出する。
//! いずれも [`KstDate`] の年・月・日フィールドのみを使った整数演算であり、
//! 時刻やタイムゾーンの影響を受けない。
//!
//! 「今日時点の年齢」を求める場合は、基準日に [`KstDate::today`]
//! （テストでは [`KstDate::today_with`]）で取得した値を渡す。
//!
//! ## 3 つの年齢慣習
//!
//! | 関数 | 慣習 | 定義 |
//! |------|------|------|
//! | [`international_age`] | 満年齢（만 나이） | 誕生日を迎えるごとに 1 歳加算 |
//! | [`year_age`] | 年計算年齢（연 나이） | 暦年の差のみ。誕生日は考慮しない |
//! | [`korean_age`] | 数え年（한국 나이） | 年計算年齢 + 1。生まれた時点で 1 歳 |
//!
//! 同じ日付の組に対して、満年齢 ≦ 年計算年齢 < 数え年 が常に成り立つ。
//!
//! ## 使用例
//!
//! ```rust
//! use haneul_domain::age::{international_age, korean_age, year_age};
//! use haneul_domain::kst::KstDate;
//!
//! let birth = KstDate::parse("2000-03-01")?;
//! let reference = KstDate::parse("2020-02-29")?;
//!
//! // 誕生日前日なので満年齢はまだ 19 歳
//! assert_eq!(international_age(birth, reference), 19);
//! assert_eq!(year_age(birth, reference), 20);
//! assert_eq!(korean_age(birth, reference), 21);
//! # Ok::<(), haneul_domain::DomainError>(())
//! ```
//!
//! ## 入力の前提
//!
//! いずれの関数も生年月日が基準日以前であることを検証しない。
//! 生年月日が基準日より後の場合は負の値が返り得る（呼び出し側の責務）。

use crate::kst::KstDate;

/// 満年齢（만 나이）を計算する
///
/// 基準日時点で誕生日を迎えていれば年差そのまま、
/// 迎えていなければ年差から 1 を引いた値を返す。
///
/// # 使用例
///
/// ```rust
/// use haneul_domain::age::international_age;
/// use haneul_domain::kst::KstDate;
///
/// let birth = KstDate::parse("2000-03-01")?;
///
/// // 誕生日当日に加算される
/// assert_eq!(international_age(birth, KstDate::parse("2020-03-01")?), 20);
/// assert_eq!(international_age(birth, KstDate::parse("2020-02-29")?), 19);
/// # Ok::<(), haneul_domain::DomainError>(())
/// ```
pub fn international_age(birth: KstDate, reference: KstDate) -> i32 {
    let mut age = reference.year() - birth.year();
    // (月, 日) の辞書順比較で「誕生日前かどうか」を判定する
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// 年計算年齢（연 나이）を計算する
///
/// 暦年の差のみで数え、誕生日を迎えたかどうかは考慮しない。
/// 誕生日前の期間では満年齢より 1 大きくなる。
pub fn year_age(birth: KstDate, reference: KstDate) -> i32 {
    reference.year() - birth.year()
}

/// 数え年（한국 나이）を計算する
///
/// 生まれた時点を 1 歳とし、以後は元日を迎えるごとに 1 歳加算する。
/// 常に [`year_age`] + 1 に等しい。
pub fn korean_age(birth: KstDate, reference: KstDate) -> i32 {
    year_age(birth, reference) + 1
}
