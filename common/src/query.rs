//! 検索エンジン
//!
//! 検索語は大文字小文字を無視する正規表現として扱い、
//! 商品名のどこかに一致すれば該当とする（完全一致ではない）。
//! 結果は単価（price_per_unit）の昇順。同値の場合はカタログ順を保つ。

use crate::types::Item;
use crate::Result;
use regex::{Regex, RegexBuilder};

/// コンパイル済みの検索条件
#[derive(Debug, Clone)]
pub struct Query {
    regex: Regex,
}

impl Query {
    /// 検索語をコンパイルする（不正なパターンは QuerySyntax エラー）
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.regex.is_match(&item.name)
    }

    /// 一致した商品を単価の昇順で返す
    pub fn run<'a, I>(&self, items: I) -> Vec<&'a Item>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut results: Vec<&Item> = items.into_iter().filter(|item| self.matches(item)).collect();
        // sort_by は安定ソート
        results.sort_by(|a, b| a.price_per_unit.total_cmp(&b.price_per_unit));
        results
    }
}

/// 商品一覧を検索する
pub fn search<'a, I>(items: I, pattern: &str) -> Result<Vec<&'a Item>>
where
    I: IntoIterator<Item = &'a Item>,
{
    Ok(Query::new(pattern)?.run(items))
}
