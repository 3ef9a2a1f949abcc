//! 列ロール判定モジュール
//!
//! 価格表ヘッダーの列名をキーワード表と照合し、
//! 商品名・価格・重量のどれに当たるかを推定する。
//!
//! キーワードは大文字小文字を無視した部分一致で判定する。
//! 複数ロールに一致した場合は最長一致のキーワードを持つロールを採用し、
//! 長さが同じなら判定不能（Unrecognized）として扱う。

use serde::{Deserialize, Serialize};

/// 列ロール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    ProductName,
    Price,
    Weight,
    Unrecognized,
}

impl ColumnRole {
    /// 判定対象となるロール（Unrecognizedを除く）
    pub const MATCHABLE: [ColumnRole; 3] =
        [ColumnRole::ProductName, ColumnRole::Price, ColumnRole::Weight];
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRole::ProductName => write!(f, "商品名"),
            ColumnRole::Price => write!(f, "価格"),
            ColumnRole::Weight => write!(f, "重量"),
            ColumnRole::Unrecognized => write!(f, "不明"),
        }
    }
}

/// ロール→キーワード表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTable {
    /// 商品名列のキーワード
    pub product_name: Vec<String>,
    /// 価格列のキーワード
    pub price: Vec<String>,
    /// 重量列のキーワード
    pub weight: Vec<String>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            product_name: to_strings(&[
                "название",
                "продукт",
                "товар",
                "наименование",
                "name",
                "product",
                "item",
                "title",
            ]),
            price: to_strings(&["цена", "розница", "price", "retail", "cost"]),
            weight: to_strings(&["фасовка", "масса", "вес", "weight", "mass", "packaging"]),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl KeywordTable {
    /// 空のキーワード表（テストやロケール差し替え用）
    pub fn empty() -> Self {
        Self {
            product_name: Vec::new(),
            price: Vec::new(),
            weight: Vec::new(),
        }
    }

    /// JSON文字列から読み込み（指定のないロールはデフォルトを使う）
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        Ok(table)
    }

    /// ロールのキーワードを差し替える
    pub fn with_keywords(mut self, role: ColumnRole, keywords: &[&str]) -> Self {
        if let Some(slot) = self.keywords_mut(role) {
            *slot = to_strings(keywords);
        }
        self
    }

    /// ロールのキーワード一覧
    pub fn keywords(&self, role: ColumnRole) -> &[String] {
        match role {
            ColumnRole::ProductName => &self.product_name,
            ColumnRole::Price => &self.price,
            ColumnRole::Weight => &self.weight,
            ColumnRole::Unrecognized => &[],
        }
    }

    fn keywords_mut(&mut self, role: ColumnRole) -> Option<&mut Vec<String>> {
        match role {
            ColumnRole::ProductName => Some(&mut self.product_name),
            ColumnRole::Price => Some(&mut self.price),
            ColumnRole::Weight => Some(&mut self.weight),
            ColumnRole::Unrecognized => None,
        }
    }

    /// (ロール, キーワード一覧) を列挙
    pub fn entries(&self) -> impl Iterator<Item = (ColumnRole, &[String])> + '_ {
        ColumnRole::MATCHABLE
            .into_iter()
            .map(move |role| (role, self.keywords(role)))
    }

    /// 列名からロールを判定する
    pub fn classify(&self, header: &str) -> ColumnRole {
        let header = header.trim().to_lowercase();
        if header.is_empty() {
            return ColumnRole::Unrecognized;
        }

        // ロールごとの最長一致キーワード長
        let mut best: Option<(ColumnRole, usize)> = None;
        let mut tied = false;

        for (role, keywords) in self.entries() {
            let longest = keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty() && header.contains(k.as_str()))
                .map(|k| k.chars().count())
                .max();

            let Some(len) = longest else { continue };

            match best {
                Some((_, best_len)) if len < best_len => {}
                Some((_, best_len)) if len == best_len => tied = true,
                _ => {
                    best = Some((role, len));
                    tied = false;
                }
            }
        }

        match best {
            Some((role, _)) if !tied => role,
            Some(_) => {
                tracing::warn!(header = %header, "列名が複数ロールに同じ長さで一致したため無視します");
                ColumnRole::Unrecognized
            }
            None => ColumnRole::Unrecognized,
        }
    }
}
