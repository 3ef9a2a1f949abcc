//! 行の正規化
//!
//! ヘッダーから列ロールの位置を求め、各データ行を [`Item`] に変換する。
//! 数値セルは前後の空白を除き、小数点のカンマをピリオドに置き換えてから解析する。

use crate::error::RowError;
use crate::roles::{ColumnRole, KeywordTable};
use crate::types::Item;

/// 数値セルを解析する
pub fn parse_decimal(role: ColumnRole, raw: &str) -> Result<f64, RowError> {
    let text = raw.replace(',', ".");
    let text = text.trim();
    if text.is_empty() {
        return Err(RowError::MissingValue(role));
    }
    text.parse::<f64>().map_err(|_| RowError::InvalidNumber {
        role,
        value: raw.to_string(),
    })
}

/// 1ファイル分の列ロール割り当て
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderMap {
    /// 各列のロール（ヘッダー順）
    pub roles: Vec<ColumnRole>,
    name: Option<usize>,
    price: Option<usize>,
    weight: Option<usize>,
}

impl HeaderMap {
    /// ヘッダー行からロールを割り当てる（同じロールは最初の列を採用）
    pub fn from_headers<I, S>(headers: I, table: &KeywordTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HeaderMap::default();

        for (idx, header) in headers.into_iter().enumerate() {
            let role = table.classify(header.as_ref());
            map.roles.push(role);

            let slot = match role {
                ColumnRole::ProductName => &mut map.name,
                ColumnRole::Price => &mut map.price,
                ColumnRole::Weight => &mut map.weight,
                ColumnRole::Unrecognized => continue,
            };
            if slot.is_none() {
                *slot = Some(idx);
            }
        }

        map
    }

    /// ロールに割り当てられた列番号
    pub fn column(&self, role: ColumnRole) -> Option<usize> {
        match role {
            ColumnRole::ProductName => self.name,
            ColumnRole::Price => self.price,
            ColumnRole::Weight => self.weight,
            ColumnRole::Unrecognized => None,
        }
    }

    /// 商品名・価格・重量のすべてが揃っているか
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.price.is_some() && self.weight.is_some()
    }

    /// 揃っていないロールの一覧
    pub fn missing_roles(&self) -> Vec<ColumnRole> {
        ColumnRole::MATCHABLE
            .into_iter()
            .filter(|role| self.column(*role).is_none())
            .collect()
    }

    /// データ行を Item に変換する
    pub fn extract<S: AsRef<str>>(&self, record: &[S], source_file: &str) -> Result<Item, RowError> {
        let name = self.cell(record, ColumnRole::ProductName)?.trim();
        if name.is_empty() {
            return Err(RowError::EmptyName);
        }
        let price = parse_decimal(ColumnRole::Price, self.cell(record, ColumnRole::Price)?)?;
        let weight = parse_decimal(ColumnRole::Weight, self.cell(record, ColumnRole::Weight)?)?;

        Item::new(name, price, weight, source_file)
    }

    fn cell<'a, S: AsRef<str>>(&self, record: &'a [S], role: ColumnRole) -> Result<&'a str, RowError> {
        let idx = self.column(role).ok_or(RowError::MissingColumn(role))?;
        record
            .get(idx)
            .map(|s| s.as_ref())
            .ok_or(RowError::MissingValue(role))
    }
}
