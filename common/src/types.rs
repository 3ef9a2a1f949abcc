//! 価格表アイテムの型定義

use crate::error::RowError;
use crate::roles::ColumnRole;
use serde::{Deserialize, Serialize};

/// 価格表の1商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// 商品名
    pub name: String,
    /// 掲載価格
    pub unit_price: f64,
    /// 重量（包装単位）
    pub weight: f64,
    /// 読み込み元ファイル名
    pub source_file: String,
    /// 重量あたり価格（小数第2位で丸め）
    pub price_per_unit: f64,
}

impl Item {
    /// 検証済みのItemを生成する
    ///
    /// 名前が空、価格・重量が正でない場合は生成しない。
    pub fn new(
        name: impl Into<String>,
        unit_price: f64,
        weight: f64,
        source_file: impl Into<String>,
    ) -> Result<Self, RowError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RowError::EmptyName);
        }
        if weight == 0.0 {
            return Err(RowError::ZeroWeight);
        }
        check_positive(ColumnRole::Weight, weight)?;
        check_positive(ColumnRole::Price, unit_price)?;

        Ok(Self {
            name,
            unit_price,
            weight,
            source_file: source_file.into(),
            price_per_unit: round2(unit_price / weight),
        })
    }
}

fn check_positive(role: ColumnRole, value: f64) -> Result<(), RowError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RowError::NonPositive { role, value })
    }
}

/// 小数第2位で丸める
///
/// 2進数の値そのものを偶数丸めする（0.125 -> 0.12, 2.675 -> 2.67）。
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
