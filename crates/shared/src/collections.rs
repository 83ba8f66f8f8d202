//! # コレクション整形ユーティリティ
//!
//! 配列・マップの組み替えに使う小さな純粋関数群。
//! いずれも入力を変更せず、新しいコレクションを返す。
//!
//! ## 含まれる関数
//!
//! | 関数 | 役割 |
//! |------|------|
//! | [`index_by`] | キー関数でマップ化（同一キーは後勝ち） |
//! | [`group_by_key`] | キー関数でグループ化 |
//! | [`unique_in_order`] | 順序を保った重複除去 |
//! | [`sorted_copy`] | 昇順ソート済みのコピー |
//! | [`sorted_by_key_copy`] | キー関数による昇順ソート済みのコピー |
//! | [`stepped_range`] | 開始・終了・刻み幅からの数列生成 |
//! | [`inserted_id_range`] | 連続採番された ID 列の復元 |

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;
use thiserror::Error;

/// 要素からキーを取り出してマップを作る
///
/// 同じキーが複数回現れた場合は後の要素で上書きされる。
///
/// # 使用例
///
/// ```rust
/// use haneul_shared::collections::index_by;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct User {
///     id:   u32,
///     name: &'static str,
/// }
///
/// let users = vec![User { id: 1, name: "Alice" }, User { id: 2, name: "Bob" }];
/// let by_id = index_by(users, |user| user.id);
///
/// assert_eq!(by_id[&1].name, "Alice");
/// assert_eq!(by_id[&2].name, "Bob");
/// ```
pub fn index_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> HashMap<K, T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items.into_iter().map(|item| (key(&item), item)).collect()
}

/// 要素からキーを取り出してグループ化する
///
/// 各グループ内の要素は入力順を保つ。キーの列挙順は保証されない。
///
/// # 使用例
///
/// ```rust
/// use haneul_shared::collections::group_by_key;
///
/// let words = vec!["apple", "banana", "avocado", "blueberry"];
/// let by_initial = group_by_key(words, |word| word.as_bytes()[0]);
///
/// assert_eq!(by_initial[&b'a'], vec!["apple", "avocado"]);
/// assert_eq!(by_initial[&b'b'], vec!["banana", "blueberry"]);
/// ```
pub fn group_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items
        .into_iter()
        .map(|item| (key(&item), item))
        .into_group_map()
}

/// 順序を保ったまま重複を取り除く
///
/// 同じ値が複数回現れた場合は最初の出現だけが残る。
///
/// # 使用例
///
/// ```rust
/// use haneul_shared::collections::unique_in_order;
///
/// let values = vec![3, 1, 3, 2, 1];
///
/// assert_eq!(unique_in_order(values), vec![3, 1, 2]);
/// ```
pub fn unique_in_order<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    items.into_iter().unique().collect()
}

/// 昇順ソート済みのコピーを返す
///
/// 元のスライスは変更しない。
///
/// # 使用例
///
/// ```rust
/// use haneul_shared::collections::sorted_copy;
///
/// let values = [3, 1, 2];
///
/// assert_eq!(sorted_copy(&values), vec![1, 2, 3]);
/// assert_eq!(values, [3, 1, 2]);
/// ```
pub fn sorted_copy<T>(items: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    items.iter().cloned().sorted().collect()
}

/// キー関数による昇順ソート済みのコピーを返す
///
/// 元のスライスは変更しない。同一キーの要素同士は入力順を保つ（安定ソート）。
///
/// # 使用例
///
/// ```rust
/// use haneul_shared::collections::sorted_by_key_copy;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct User {
///     id:   u32,
///     name: &'static str,
/// }
///
/// let users = [
///     User { id: 3, name: "Alice" },
///     User { id: 1, name: "Bob" },
///     User { id: 2, name: "Charlie" },
/// ];
/// let sorted = sorted_by_key_copy(&users, |user| user.id);
///
/// assert_eq!(sorted[0].name, "Bob");
/// assert_eq!(sorted[2].name, "Alice");
/// ```
pub fn sorted_by_key_copy<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    items.iter().cloned().sorted_by_key(key).collect()
}

/// 刻み幅が 0 の数列は定義できない
#[derive(Debug, Error)]
#[error("刻み幅には 0 以外を指定してください")]
pub struct ZeroStepError;

/// 開始値から終了値の手前まで、指定した刻み幅で数列を生成する
///
/// 終了値は含まない。負の刻み幅では降順の数列を生成する。
/// 次の値が `i64` で表現できない場合、数列はその手前で終了する。
///
/// # エラー
///
/// 刻み幅が 0 の場合は [`ZeroStepError`] を返す。
///
/// # 使用例
///
/// ```rust
/// use haneul_shared::collections::stepped_range;
///
/// assert_eq!(stepped_range(1, 5, 1)?, vec![1, 2, 3, 4]);
/// assert_eq!(stepped_range(0, 10, 2)?, vec![0, 2, 4, 6, 8]);
/// assert_eq!(stepped_range(5, 1, -1)?, vec![5, 4, 3, 2]);
/// # Ok::<(), haneul_shared::collections::ZeroStepError>(())
/// ```
pub fn stepped_range(start: i64, end: i64, step: i64) -> Result<Vec<i64>, ZeroStepError> {
    if step == 0 {
        return Err(ZeroStepError);
    }

    let mut values = Vec::new();
    let mut current = start;
    if step > 0 {
        while current < end {
            values.push(current);
            // 次の値が i64 で表現できなければ終了値にも到達しない
            let Some(next) = current.checked_add(step) else {
                break;
            };
            current = next;
        }
    } else {
        while current > end {
            values.push(current);
            let Some(next) = current.checked_add(step) else {
                break;
            };
            current = next;
        }
    }
    Ok(values)
}

/// 連続採番された ID 列を先頭 ID と件数から復元する
///
/// データベースの一括挿入結果（先頭の自動採番 ID と挿入件数）から、
/// 挿入された全行の ID を列挙する用途を想定している。
/// 件数が 0 以下の場合は空の列を返す。
/// 終端が `i64` の上限を超える場合は `i64::MAX` までで打ち切る。
///
/// # 使用例
///
/// ```rust
/// use haneul_shared::collections::inserted_id_range;
///
/// // 先頭 ID 1 から 5 件挿入した場合
/// assert_eq!(inserted_id_range(1, 5), vec![1, 2, 3, 4, 5]);
/// ```
pub fn inserted_id_range(first_id: i64, row_count: i64) -> Vec<i64> {
    if row_count <= 0 {
        return Vec::new();
    }
    let Some(end) = first_id.checked_add(row_count) else {
        return (first_id..=i64::MAX).collect();
    };
    (first_id..end).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id:   u32,
        name: &'static str,
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 3, name: "Alice" },
            Item { id: 1, name: "Bob" },
            Item { id: 2, name: "Charlie" },
        ]
    }

    // index_by のテスト

    #[test]
    fn test_index_by_はキーごとに要素を引けるマップを作る() {
        let map = index_by(items(), |item| item.id);

        assert_eq!(map.len(), 3);
        assert_eq!(map[&1].name, "Bob");
        assert_eq!(map[&3].name, "Alice");
    }

    #[test]
    fn test_index_by_は同一キーを後勝ちで上書きする() {
        let duplicated = vec![
            Item { id: 1, name: "first" },
            Item { id: 1, name: "second" },
        ];

        let map = index_by(duplicated, |item| item.id);

        assert_eq!(map.len(), 1);
        assert_eq!(map[&1].name, "second");
    }

    #[test]
    fn test_index_by_は文字列キーでも使える() {
        let map = index_by(items(), |item| item.name);

        assert_eq!(map["Charlie"].id, 2);
    }

    // group_by_key のテスト

    #[test]
    fn test_group_by_key_はグループ内の入力順を保つ() {
        let values = vec![1, 4, 2, 7, 5, 8];

        let map = group_by_key(values, |value| value % 3);

        assert_eq!(map[&1], vec![1, 4, 7]);
        assert_eq!(map[&2], vec![2, 5, 8]);
    }

    #[test]
    fn test_group_by_key_は要素のないキーを持たない() {
        let map = group_by_key(vec![2, 4], |value: &i32| value % 2);

        assert_eq!(map.len(), 1);
        assert!(!map.contains_key(&1));
    }

    // unique_in_order のテスト

    #[test]
    fn test_unique_in_order_は最初の出現を残す() {
        assert_eq!(unique_in_order(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_unique_in_order_は空の入力で空を返す() {
        assert_eq!(unique_in_order(Vec::<i32>::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_unique_in_order_は文字列にも使える() {
        let values = vec!["a", "b", "a", "c"];

        assert_eq!(unique_in_order(values), vec!["a", "b", "c"]);
    }

    // ソートのテスト

    #[test]
    fn test_sorted_copy_は昇順に並べ替える() {
        assert_eq!(sorted_copy(&[3, 1, 2]), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_copy_は元のスライスを変更しない() {
        let original = [3, 1, 2];
        let _ = sorted_copy(&original);

        assert_eq!(original, [3, 1, 2]);
    }

    #[test]
    fn test_sorted_by_key_copy_はキーの昇順に並べ替える() {
        let sorted = sorted_by_key_copy(&items(), |item| item.id);

        let names: Vec<&str> = sorted.iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["Bob", "Charlie", "Alice"]);
    }

    #[test]
    fn test_sorted_by_key_copy_は同一キーの入力順を保つ() {
        let values = [("a", 1), ("b", 0), ("c", 1), ("d", 0)];

        let sorted = sorted_by_key_copy(&values, |pair| pair.1);

        assert_eq!(sorted, vec![("b", 0), ("d", 0), ("a", 1), ("c", 1)]);
    }

    // stepped_range のテスト

    #[rstest]
    #[case(1, 5, 1, vec![1, 2, 3, 4])]
    #[case(0, 10, 2, vec![0, 2, 4, 6, 8])]
    #[case(5, 1, -1, vec![5, 4, 3, 2])]
    #[case(0, 0, 1, vec![])]
    #[case(5, 1, 1, vec![])] // 正の刻み幅で開始 > 終了
    #[case(1, 5, -1, vec![])] // 負の刻み幅で開始 < 終了
    #[case(-3, 3, 2, vec![-3, -1, 1])]
    #[case(i64::MAX - 1, i64::MAX, 2, vec![i64::MAX - 1])] // 上限付近
    #[case(i64::MIN + 1, i64::MIN, -2, vec![i64::MIN + 1])] // 下限付近
    fn test_stepped_range_は終了値を含まない数列を生成する(
        #[case] start: i64,
        #[case] end: i64,
        #[case] step: i64,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(stepped_range(start, end, step).unwrap(), expected);
    }

    #[test]
    fn test_stepped_range_は刻み幅_0_を拒否する() {
        assert!(stepped_range(1, 5, 0).is_err());
    }

    // inserted_id_range のテスト

    #[test]
    fn test_inserted_id_range_は先頭から件数分の連番を返す() {
        assert_eq!(inserted_id_range(1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(inserted_id_range(10, 3), vec![10, 11, 12]);
    }

    #[test]
    fn test_inserted_id_range_は件数_0_以下で空を返す() {
        assert_eq!(inserted_id_range(1, 0), Vec::<i64>::new());
        assert_eq!(inserted_id_range(1, -3), Vec::<i64>::new());
    }

    #[test]
    fn test_inserted_id_range_は_i64_の上限で打ち切る() {
        assert_eq!(inserted_id_range(i64::MAX, 1), vec![i64::MAX]);
        assert_eq!(
            inserted_id_range(i64::MAX - 2, 5),
            vec![i64::MAX - 2, i64::MAX - 1, i64::MAX]
        );
    }
}
